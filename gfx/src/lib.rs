//! Character cell graphics primitives.

mod buffer;
pub use buffer::{glyph, Buffer};

mod pixel;
pub use pixel::Pixel;

mod window;
pub use window::Window;

pub use util::Rect;

/// Art assets compiled into the binary, keyed by asset path.
const BUILTIN_ART: &[(&str, &[u8])] = &[(
    "ui_art/black.png",
    include_bytes!("../assets/ui_art/black.png"),
)];

/// Look up the encoded image data of a builtin art asset.
pub fn builtin_art(name: &str) -> Option<&'static [u8]> {
    BUILTIN_ART
        .iter()
        .find_map(|&(path, data)| (path == name).then_some(data))
}
