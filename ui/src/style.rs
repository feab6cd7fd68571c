use bitflags::bitflags;
use navni::X256Color;

use crate::{BRIGHT, GOLD};

bitflags! {
    /// Alignment and color flags for text and list widgets.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
    pub struct UiStyle: u8 {
        /// Center lines horizontally in the widget area.
        const CENTER = 1 << 0;
        /// Large heading text.
        const BIG = 1 << 1;
        /// Medium body text.
        const MED = 1 << 2;
        /// Gold colored text, overrides the size color.
        const GOLD = 1 << 3;
    }
}

impl UiStyle {
    pub fn color(self) -> X256Color {
        if self.contains(UiStyle::GOLD) {
            GOLD
        } else if self.contains(UiStyle::BIG) {
            BRIGHT
        } else {
            X256Color::FOREGROUND
        }
    }

    pub fn is_centered(self) -> bool {
        self.contains(UiStyle::CENTER)
    }
}
