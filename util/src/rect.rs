use std::ops::Add;

use glam::{ivec2, IVec2};

/// Integer rectangle over a cell grid.
///
/// The lower corner `p0` is inclusive and the upper corner `p1` is
/// exclusive, so a rectangle from `[0, 0]` to `[2, 1]` covers two cells.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Rect {
    pub p0: IVec2,
    pub p1: IVec2,
}

impl Rect {
    /// Create a new rectangle. If p1 has components that are smaller than
    /// p0's, the corresponding range is clamped to zero.
    pub fn new(p0: impl Into<IVec2>, p1: impl Into<IVec2>) -> Self {
        let (p0, p1) = (p0.into(), p1.into());

        Rect {
            p0,
            p1: p0.max(p1),
        }
    }

    /// Rectangle with the given dimensions anchored at origin.
    pub fn sized(dim: impl Into<IVec2>) -> Self {
        Rect::new(IVec2::ZERO, dim)
    }

    /// Rectangle with the given origin and dimensions.
    pub fn at(pos: impl Into<IVec2>, dim: impl Into<IVec2>) -> Self {
        let pos = pos.into();
        Rect::new(pos, pos + dim.into())
    }

    pub fn is_empty(&self) -> bool {
        self.p1.x <= self.p0.x || self.p1.y <= self.p0.y
    }

    pub fn contains(&self, pos: impl Into<IVec2>) -> bool {
        let pos = pos.into();
        (self.p0.x..self.p1.x).contains(&pos.x)
            && (self.p0.y..self.p1.y).contains(&pos.y)
    }

    pub fn dim(&self) -> IVec2 {
        self.p1 - self.p0
    }

    pub fn min(&self) -> IVec2 {
        self.p0
    }

    pub fn width(&self) -> i32 {
        self.p1.x - self.p0.x
    }

    pub fn height(&self) -> i32 {
        self.p1.y - self.p0.y
    }

    /// Number of cells in the rectangle.
    pub fn len(&self) -> usize {
        (self.width() * self.height()) as usize
    }

    /// Return the rectangle of the intersection of `self` and `rhs`.
    pub fn intersection(&self, rhs: &Rect) -> Rect {
        Rect::new(self.p0.max(rhs.p0), self.p1.min(rhs.p1))
    }

    /// Row-major index of a point inside the rectangle.
    ///
    /// Panics in debug mode if the point is outside the rectangle.
    pub fn idx(&self, pos: impl Into<IVec2>) -> usize {
        let pos = pos.into();
        debug_assert!(self.contains(pos), "idx: {pos} outside {self:?}");
        let p = pos - self.p0;
        (p.x + p.y * self.width()) as usize
    }

    /// Inverse of `idx`, the point at a row-major index.
    pub fn get(&self, i: usize) -> IVec2 {
        let w = self.width().max(1) as usize;
        self.p0 + ivec2((i % w) as i32, (i / w) as i32)
    }
}

impl<E: Into<IVec2>> Add<E> for Rect {
    type Output = Rect;

    fn add(self, rhs: E) -> Self::Output {
        let rhs = rhs.into();
        Rect {
            p0: self.p0 + rhs,
            p1: self.p1 + rhs,
        }
    }
}

/// Iterate the cells of the rectangle in row-major order.
impl IntoIterator for Rect {
    type Item = IVec2;
    type IntoIter = RectIter;

    fn into_iter(self) -> Self::IntoIter {
        RectIter { rect: self, i: 0 }
    }
}

pub struct RectIter {
    rect: Rect,
    i: usize,
}

impl Iterator for RectIter {
    type Item = IVec2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rect.is_empty() || self.i >= self.rect.len() {
            return None;
        }
        let ret = self.rect.get(self.i);
        self.i += 1;
        Some(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dimensions_clamp() {
        let r = Rect::new([5, 5], [2, 8]);
        assert!(r.is_empty());
        assert_eq!(r.dim(), ivec2(0, 3));
    }

    #[test]
    fn iteration_is_row_major() {
        let r = Rect::new([1, 2], [3, 4]);
        assert_eq!(
            r.into_iter().collect::<Vec<_>>(),
            vec![ivec2(1, 2), ivec2(2, 2), ivec2(1, 3), ivec2(2, 3)]
        );

        for (i, p) in r.into_iter().enumerate() {
            assert_eq!(r.idx(p), i);
        }

        assert_eq!(Rect::sized([0, 10]).into_iter().count(), 0);
    }

    #[test]
    fn intersections() {
        let a = Rect::sized([10, 10]);
        let b = Rect::at([5, 8], [10, 10]);
        assert_eq!(a.intersection(&b), Rect::new([5, 8], [10, 10]));
        assert!(a.intersection(&(b + [20, 0])).is_empty());
    }
}
