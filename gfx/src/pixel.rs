use navni::{CharCell, Rgba};

/// Trait for buffer cells, can be pixels or character cells.
///
/// Assumption: `<T: Pixel>::default().is_transparent()` is always true.
pub trait Pixel: Copy + Default + Eq + PartialEq + 'static {
    fn is_transparent(&self) -> bool;

    fn invert(&mut self);
}

impl Pixel for Rgba {
    fn is_transparent(&self) -> bool {
        self.a == 0x00
    }

    fn invert(&mut self) {
        self.r = 0xff - self.r;
        self.g = 0xff - self.g;
        self.b = 0xff - self.b;
    }
}

impl Pixel for CharCell {
    fn is_transparent(&self) -> bool {
        self.c == 0
    }

    fn invert(&mut self) {
        std::mem::swap(&mut self.foreground, &mut self.background);
    }
}
