use glam::IVec2;
use navni::{CharCell, X256Color};

use crate::{Buffer, Pixel, Rect};

/// A view structure through which things can be drawn on a buffer.
#[derive(Copy, Clone, Default)]
pub struct Window {
    /// The window's bounds in the coordinates of the screen buffer.
    ///
    /// It's expected that the window is always used with a buffer that can
    /// fit its bounds rectangle.
    pub bounds: Rect,
    pub foreground_col: X256Color,
    pub background_col: X256Color,
}

impl From<&Buffer<CharCell>> for Window {
    fn from(c: &Buffer<CharCell>) -> Self {
        Window::new(c.area(), X256Color::FOREGROUND, X256Color::BACKGROUND)
    }
}

impl Window {
    pub fn new(
        region: Rect,
        foreground_col: X256Color,
        background_col: X256Color,
    ) -> Window {
        Window {
            bounds: region,
            foreground_col,
            background_col,
        }
    }

    /// Area rectangle of the window in window-local coordinates, anchored to
    /// origin.
    pub fn area(&self) -> Rect {
        Rect::sized(self.bounds.dim())
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Copy of the window drawing with a different foreground color.
    pub fn with_foreground(mut self, col: X256Color) -> Window {
        self.foreground_col = col;
        self
    }

    pub fn put(
        &self,
        c: &mut Buffer<CharCell>,
        pos: impl Into<IVec2>,
        cell: CharCell,
    ) {
        let pos = pos.into();
        if !self.area().contains(pos) {
            return;
        }

        let pos = pos + self.bounds.min();
        let screen = c.area();
        if screen.contains(pos) {
            c.data[screen.idx(pos)] = cell;
        }
    }

    /// Draw a buffer in the window, skipping transparent cells.
    pub fn blit(
        &self,
        c: &mut Buffer<CharCell>,
        pos: impl Into<IVec2>,
        img: &Buffer<CharCell>,
    ) {
        let pos = pos.into();
        for p in img.area() {
            let a = img.get(p);
            if !a.is_transparent() {
                self.put(c, pos + p, a);
            }
        }
    }

    /// Create a sub-window from the area within this window's space.
    pub fn sub(&self, area: Rect) -> Window {
        let area = area + self.bounds.min();
        let area = self.bounds.intersection(&area);

        let mut ret = *self;
        ret.bounds = area;
        ret
    }

    /// Write a line of text to window, return updated position.
    ///
    /// Text that goes past the window edge is clipped.
    pub fn write(
        &self,
        c: &mut Buffer<CharCell>,
        pos: impl Into<IVec2>,
        text: &str,
    ) -> IVec2 {
        let mut pos = pos.into();
        for a in text.chars().filter(|a| !a.is_control()) {
            self.put(
                c,
                pos,
                CharCell::new(a, self.foreground_col, self.background_col),
            );
            pos.x += 1;
        }

        pos
    }

    /// Write a line of text centered horizontally on row `y`.
    pub fn write_center(&self, c: &mut Buffer<CharCell>, y: i32, text: &str) {
        let width = text.chars().filter(|a| !a.is_control()).count() as i32;
        let x = (self.width() - width) / 2;
        self.write(c, [x.max(0), y], text);
    }

    pub fn invert(&self, c: &mut Buffer<CharCell>) {
        let area = c.area();
        for p in self.bounds.intersection(&area) {
            c.data[area.idx(p)].invert();
        }
    }
}
