use glam::{ivec2, IVec2};
use navni::{CharCell, Rgba, X256Color};

use crate::{Pixel, Rect};

#[derive(Clone, PartialEq, Eq)]
pub struct Buffer<P> {
    width: u32,
    height: u32,
    pub(crate) data: Vec<P>,
}

impl From<image::DynamicImage> for Buffer<Rgba> {
    fn from(image: image::DynamicImage) -> Self {
        let image = image.to_rgba8();
        let (width, height) = (image.width(), image.height());
        let data = image
            .pixels()
            .map(|&image::Rgba([r, g, b, a])| Rgba::new(r, g, b, a))
            .collect();

        Buffer {
            width,
            height,
            data,
        }
    }
}

impl Buffer<Rgba> {
    /// Decode an image file in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        Ok(image::load_from_memory(bytes)?.into())
    }

    /// Render the image as shaded text cells, one cell per pixel.
    ///
    /// Fully transparent pixels become transparent cells.
    pub fn to_cells(&self) -> Buffer<CharCell> {
        const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

        self.map(|p| {
            if p.is_transparent() {
                return CharCell::default();
            }
            let luma = (p.r as u32 * 3 + p.g as u32 * 6 + p.b as u32) / 10;
            let shade = SHADES[(luma as usize * SHADES.len() / 256).min(4)];
            CharCell::new(shade, X256Color::FOREGROUND, X256Color::BACKGROUND)
        })
    }
}

impl Buffer<CharCell> {
    /// Plain text contents of the buffer, one line per row.
    ///
    /// Empty cells show up as spaces and trailing spaces are trimmed.
    pub fn to_text(&self) -> String {
        let mut ret = String::new();
        for row in self.data.chunks(self.width.max(1) as usize) {
            let line: String = row.iter().map(|&cell| glyph(cell)).collect();
            ret.push_str(line.trim_end());
            ret.push('\n');
        }
        ret
    }

    /// Create a screenshot ANSI coded string of the buffer.
    pub fn to_ansi(&self) -> String {
        let mut ret = String::new();
        let col = |ret: &mut String, cell: CharCell| {
            let is_inverse = cell.foreground == X256Color::BACKGROUND
                && cell.background != X256Color::BACKGROUND;
            let foreground = if is_inverse {
                cell.background.0
            } else {
                cell.foreground.0
            };

            let is_bold = (8..16).contains(&cell.foreground.0);

            ret.push_str("\x1b[0;");
            if is_inverse {
                ret.push_str("7;");
            }
            if is_bold {
                ret.push_str("1;");
            }
            if foreground != X256Color::FOREGROUND.0 {
                ret.push_str(&format!("38;5;{foreground}"));
            }
            if !is_inverse && cell.background != X256Color::BACKGROUND {
                ret.push_str(&format!(";48;5;{}", cell.background.0));
            }
            ret.push('m');
        };

        let Some(&first) = self.data.first() else {
            return ret;
        };

        col(&mut ret, first);
        let mut prev = (first.foreground, first.background);

        for row in self.data.chunks(self.width as usize) {
            for &cell in row {
                let current = (cell.foreground, cell.background);
                if current != prev {
                    col(&mut ret, cell);
                    prev = current;
                }
                ret.push(glyph(cell));
            }
            ret.push('\n');
        }

        // Reset settings.
        ret.push_str("\x1b[0m");

        ret
    }
}

/// Printable character of a cell, blank cells become spaces.
pub fn glyph(cell: CharCell) -> char {
    match char::from_u32(cell.c as u32) {
        Some('\0') | None => ' ',
        Some(c) => c,
    }
}

impl<P: Pixel> Buffer<P> {
    pub fn new(width: u32, height: u32) -> Self {
        Buffer {
            width,
            height,
            data: vec![Default::default(); (width * height) as usize],
        }
    }

    pub fn from_fn(width: u32, height: u32, f: impl Fn(i32, i32) -> P) -> Self {
        let area = Rect::sized([width as i32, height as i32]);
        let data = area.into_iter().map(|p| f(p.x, p.y)).collect();
        Buffer {
            width,
            height,
            data,
        }
    }

    /// Convert every cell of the buffer into a different cell type.
    pub fn map<Q: Pixel>(&self, f: impl Fn(P) -> Q) -> Buffer<Q> {
        Buffer {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&p| f(p)).collect(),
        }
    }

    pub fn get(&self, pos: impl Into<IVec2>) -> P {
        let pos = pos.into();
        let area = self.area();
        if area.contains(pos) {
            self.data[area.idx(pos)]
        } else {
            Default::default()
        }
    }

    pub fn data(&self) -> &[P] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// Reset every cell to the transparent default.
    pub fn clear(&mut self) {
        self.data.fill(Default::default());
    }

    pub fn dim(&self) -> IVec2 {
        ivec2(self.width as i32, self.height as i32)
    }

    pub fn width(&self) -> i32 {
        self.width as i32
    }

    pub fn height(&self) -> i32 {
        self.height as i32
    }

    pub fn area(&self) -> Rect {
        Rect::sized(self.dim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_dump() {
        let cell =
            |c| CharCell::new(c, X256Color::FOREGROUND, X256Color::BACKGROUND);
        let mut buf: Buffer<CharCell> = Buffer::new(4, 2);
        buf.data_mut()[1] = cell('a');
        buf.data_mut()[7] = cell('b');
        assert_eq!(buf.to_text(), " a\n   b\n");

        buf.clear();
        assert_eq!(buf.to_text(), "\n\n");
    }

    #[test]
    fn decode_builtin_art() {
        let data = crate::builtin_art("ui_art/black.png").unwrap();
        let art = Buffer::from_bytes(data).unwrap();
        assert_eq!(art.dim(), ivec2(80, 30));
        assert!(art.data().iter().all(|p| !p.is_transparent()));

        let cells = art.to_cells();
        assert!(cells.data().iter().all(|&c| glyph(c) == ' ' && c.c != 0));
    }

    #[test]
    fn shading() {
        let img = Buffer::from_fn(3, 1, |x, _| match x {
            0 => Rgba::new(0, 0, 0, 0),
            1 => Rgba::new(0x80, 0x80, 0x80, 0xff),
            _ => Rgba::new(0xff, 0xff, 0xff, 0xff),
        });
        let cells = img.to_cells();
        assert!(cells.get([0, 0]).is_transparent());
        assert_eq!(glyph(cells.get([1, 0])), '▒');
        assert_eq!(glyph(cells.get([2, 0])), '█');
    }
}
