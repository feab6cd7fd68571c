use std::borrow::Cow;

use derive_more::From;
use gfx::Rect;

use crate::{
    prelude::*, ListState, UiList, UiStyle, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Drawing context for one frame of widget rendering.
pub struct Frame<'a> {
    pub canvas: &'a mut Buffer,
    /// Currently loaded background art.
    pub art: Option<&'a Buffer>,
    /// Focus state of the list receiving input.
    pub list: Option<&'a ListState>,
}

impl Frame<'_> {
    /// Window covering the whole canvas.
    pub fn root(&self) -> Window {
        Window::from(&*self.canvas)
    }
}

/// A screen element that can be laid out and drawn.
pub trait Widget {
    /// Draw the widget on the frame canvas.
    fn render(&self, f: &mut Frame<'_>);

    /// Screen area the widget occupies.
    fn bounds(&self) -> Rect;
}

/// The loaded background art stretched from the screen origin.
#[derive(Copy, Clone, Default, Debug)]
pub struct Background;

impl Widget for Background {
    fn render(&self, f: &mut Frame<'_>) {
        if let Some(art) = f.art {
            f.root().blit(f.canvas, [0, 0], art);
        }
    }

    fn bounds(&self) -> Rect {
        Rect::sized([SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32])
    }
}

const LOGO: [&str; 3] = [
    "╔═════════════════════════╗",
    "║  H O L L O W   K E E P  ║",
    "╚═════════════════════════╝",
];

/// The game title banner at the top of the screen.
#[derive(Copy, Clone, Default, Debug)]
pub struct Logo;

impl Widget for Logo {
    fn render(&self, f: &mut Frame<'_>) {
        let win = f.root().sub(self.bounds()).with_foreground(crate::GOLD);
        for (y, line) in LOGO.iter().enumerate() {
            win.write_center(f.canvas, y as i32, line);
        }
    }

    fn bounds(&self) -> Rect {
        Rect::at([0, 2], [SCREEN_WIDTH as i32, LOGO.len() as i32])
    }
}

/// Static multi-line text in a screen rectangle.
///
/// Lines are split only at existing newlines, anything that does not fit
/// the rectangle is clipped.
pub struct ArtText {
    pub text: Cow<'static, str>,
    pub rect: Rect,
    pub style: UiStyle,
}

impl ArtText {
    pub fn new(
        text: impl Into<Cow<'static, str>>,
        rect: Rect,
        style: UiStyle,
    ) -> Self {
        ArtText {
            text: text.into(),
            rect,
            style,
        }
    }
}

impl Widget for ArtText {
    fn render(&self, f: &mut Frame<'_>) {
        let win = f.root().sub(self.rect).with_foreground(self.style.color());
        for (y, line) in self.text.split('\n').enumerate() {
            if self.style.is_centered() {
                win.write_center(f.canvas, y as i32, line);
            } else {
                win.write(f.canvas, [0, y as i32], line);
            }
        }
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Widgets of a screen, listed in back to front drawing order.
#[derive(From)]
pub enum UiItem {
    Background(Background),
    Logo(Logo),
    Text(ArtText),
    List(UiList),
}

impl UiItem {
    pub fn as_list(&self) -> Option<&UiList> {
        match self {
            UiItem::List(list) => Some(list),
            _ => None,
        }
    }
}

impl Widget for UiItem {
    fn render(&self, f: &mut Frame<'_>) {
        match self {
            UiItem::Background(a) => a.render(f),
            UiItem::Logo(a) => a.render(f),
            UiItem::Text(a) => a.render(f),
            UiItem::List(a) => a.render(f),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            UiItem::Background(a) => a.bounds(),
            UiItem::Logo(a) => a.bounds(),
            UiItem::Text(a) => a.bounds(),
            UiItem::List(a) => a.bounds(),
        }
    }
}

pub fn append_background(items: &mut Vec<UiItem>) {
    items.push(Background.into());
}

pub fn append_logo(items: &mut Vec<UiItem>) {
    items.push(Logo.into());
}
