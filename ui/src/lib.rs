//! Game user interface machinery

pub mod prelude {
    use navni::CharCell;

    pub use crate::{Frame, InputAction, Widget};
    pub use gfx::Window;

    pub type Buffer = gfx::Buffer<CharCell>;
}

mod dialog;
pub use dialog::{
    ask_yes_no, confirmation_message, MESSAGE_CAPACITY, MESSAGE_WIDTH,
};

mod input;
pub use input::{InputAction, InputMap};

mod list;
pub use list::{ListHandler, ListItem, ListState, UiList};

mod shell;
pub use shell::{Backend, Headless, Scene, Shell};

mod style;
pub use style::UiStyle;

mod widget;
pub use widget::{
    append_background, append_logo, ArtText, Background, Frame, Logo, UiItem,
    Widget,
};

use navni::X256Color;

/// Screen size in character cells.
pub const SCREEN_WIDTH: u32 = 80;
pub const SCREEN_HEIGHT: u32 = 30;

pub const GOLD: X256Color = X256Color(11);
pub const BRIGHT: X256Color = X256Color(15);

pub fn cell(
    c: char,
    fore: impl Into<X256Color>,
    back: impl Into<X256Color>,
) -> navni::CharCell {
    navni::CharCell::new(c, fore, back)
}
