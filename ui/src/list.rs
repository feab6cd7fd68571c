use std::borrow::Cow;

use gfx::Rect;

use crate::{prelude::*, InputAction, UiStyle};

/// Markers drawn around the focused list item.
const SELECTOR: (&str, &str) = ("»", "«");

/// One selectable entry of a list.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ListItem {
    pub text: Cow<'static, str>,
    /// Opaque tag the list owner maps back to its own meaning.
    pub value: i32,
}

impl ListItem {
    pub fn new(text: impl Into<Cow<'static, str>>, value: i32) -> Self {
        ListItem {
            text: text.into(),
            value,
        }
    }
}

/// Receiver of list events during input dispatch.
pub trait ListHandler {
    /// Focus moved to a new item.
    fn focus(&mut self, _item: &ListItem) {}

    /// The focused item was committed.
    fn select(&mut self, item: &ListItem);

    /// The user backed out of the list.
    fn cancel(&mut self) {}
}

/// Vertical list of selectable items.
pub struct UiList {
    pub items: Vec<ListItem>,
    pub x: i32,
    pub y: i32,
    /// Width of an item row.
    pub w: i32,
    /// Height of a single item.
    pub h: i32,
    pub style: UiStyle,
}

impl UiList {
    pub fn new(
        items: Vec<ListItem>,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        style: UiStyle,
    ) -> Self {
        UiList {
            items,
            x,
            y,
            w,
            h,
            style,
        }
    }

    /// Screen area of the item at `idx`.
    pub fn item_bounds(&self, idx: usize) -> Rect {
        Rect::at([self.x, self.y + idx as i32 * self.h], [self.w, self.h])
    }
}

impl Widget for UiList {
    fn render(&self, f: &mut Frame<'_>) {
        let focus = f.list.map(|l| l.focus());
        let root = f.root().with_foreground(self.style.color());

        for (i, item) in self.items.iter().enumerate() {
            let win = root.sub(self.item_bounds(i));
            let is_focused = focus == Some(i);

            let label = if is_focused {
                let (left, right) = SELECTOR;
                Cow::Owned(format!("{left} {} {right}", item.text))
            } else {
                Cow::Borrowed(&*item.text)
            };

            if self.style.is_centered() {
                win.write_center(f.canvas, 0, &label);
            } else {
                win.write(f.canvas, [0, 0], &label);
            }

            if is_focused {
                win.invert(f.canvas);
            }
        }
    }

    fn bounds(&self) -> Rect {
        Rect::at(
            [self.x, self.y],
            [self.w, self.h * self.items.len() as i32],
        )
    }
}

/// Focus state of the list currently receiving input.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ListState {
    len: usize,
    focus: usize,
    /// Moving past either end of the list continues from the other end.
    wraps: bool,
}

impl ListState {
    pub fn new(len: usize, wraps: bool, default_focus: usize) -> Self {
        ListState {
            len,
            focus: default_focus.min(len.saturating_sub(1)),
            wraps,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Move focus to `idx`, return whether the focus changed.
    pub fn set_focus(&mut self, idx: usize) -> bool {
        if idx >= self.len || idx == self.focus {
            return false;
        }
        self.focus = idx;
        true
    }

    pub fn step_up(&mut self) -> bool {
        match self.focus {
            0 if self.wraps => self.set_focus(self.len.saturating_sub(1)),
            0 => false,
            n => self.set_focus(n - 1),
        }
    }

    pub fn step_down(&mut self) -> bool {
        if self.focus + 1 < self.len {
            self.set_focus(self.focus + 1)
        } else if self.wraps {
            self.set_focus(0)
        } else {
            false
        }
    }

    /// Apply an input command to the list and notify the handler.
    pub fn handle(
        &mut self,
        action: InputAction,
        items: &[ListItem],
        handler: &mut dyn ListHandler,
    ) {
        use InputAction::*;

        let moved = match action {
            Up => self.step_up(),
            Down => self.step_down(),
            First => self.set_focus(0),
            Last => self.set_focus(self.len.saturating_sub(1)),
            Select => {
                if let Some(item) = items.get(self.focus) {
                    handler.select(item);
                }
                false
            }
            Cancel => {
                handler.cancel();
                false
            }
        };

        if moved {
            if let Some(item) = items.get(self.focus) {
                handler.focus(item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log(Vec<String>);

    impl ListHandler for Log {
        fn focus(&mut self, item: &ListItem) {
            self.0.push(format!("focus {}", item.text));
        }

        fn select(&mut self, item: &ListItem) {
            self.0.push(format!("select {}", item.value));
        }

        fn cancel(&mut self) {
            self.0.push("cancel".into());
        }
    }

    fn items() -> Vec<ListItem> {
        vec![
            ListItem::new("New Hero", 0),
            ListItem::new("Load Game", 1),
            ListItem::new("Quit", 2),
        ]
    }

    #[test]
    fn clamped_navigation() {
        let mut list = ListState::new(3, false, 0);
        assert!(!list.step_up());
        assert!(list.step_down());
        assert!(list.step_down());
        assert!(!list.step_down());
        assert_eq!(list.focus(), 2);

        assert_eq!(ListState::new(3, false, 7).focus(), 2);
        assert_eq!(ListState::new(0, true, 0).focus(), 0);
    }

    #[test]
    fn wrapping_navigation() {
        let mut list = ListState::new(3, true, 0);
        assert!(list.step_up());
        assert_eq!(list.focus(), 2);
        assert!(list.step_down());
        assert_eq!(list.focus(), 0);

        // A single item list has nowhere to go.
        let mut list = ListState::new(1, true, 0);
        assert!(!list.step_up());
        assert!(!list.step_down());
    }

    #[test]
    fn dispatch_to_handler() {
        use InputAction::*;

        let items = items();
        let mut list = ListState::new(items.len(), true, 0);
        let mut log = Log::default();

        for a in [Down, Down, Select, First, First, Cancel, Last, Select] {
            list.handle(a, &items, &mut log);
        }

        assert_eq!(
            log.0,
            vec![
                "focus Load Game",
                "focus Quit",
                "select 2",
                "focus New Hero",
                "cancel",
                "focus Quit",
                "select 2",
            ]
        );
    }
}
