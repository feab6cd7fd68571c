use gfx::Rect;
use util::StrExt;

use crate::{
    append_background, append_logo, ArtText, Backend, ListHandler, ListItem,
    Shell, UiItem, UiList, UiStyle,
};

const BACKGROUND_ART: &str = "ui_art/black.png";

/// Most characters of the message body that get displayed.
pub const MESSAGE_CAPACITY: usize = 255;

/// Column width the message body is wrapped to.
pub const MESSAGE_WIDTH: i32 = 40;

const TITLE_RECT: Rect = Rect {
    p0: glam::IVec2::new(3, 10),
    p1: glam::IVec2::new(77, 12),
};

const MESSAGE_RECT: Rect = Rect {
    p0: glam::IVec2::new(20, 13),
    p1: glam::IVec2::new(20 + MESSAGE_WIDTH, 21),
};

const LIST_POS: (i32, i32) = (31, 22);
const LIST_ITEM_SIZE: (i32, i32) = (18, 1);

/// Tag of the list item that answers yes.
const YES: i32 = 0;
const NO: i32 = 1;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Phase {
    Active,
    Finished(bool),
}

impl ListHandler for Phase {
    fn select(&mut self, item: &ListItem) {
        if *self == Phase::Active {
            *self = Phase::Finished(item.value == YES);
        }
    }

    fn cancel(&mut self) {
        if *self == Phase::Active {
            *self = Phase::Finished(false);
        }
    }
}

/// Truncate and word-wrap a message body for display.
pub fn confirmation_message(body: &str) -> String {
    body.truncate_chars(MESSAGE_CAPACITY)
        .word_wrap(MESSAGE_WIDTH as usize)
}

/// Show a modal yes/no question and block until the user answers.
///
/// Returns `true` if the user selects "Yes", `false` if they select "No" or
/// cancel the dialog. The message body is cut to `MESSAGE_CAPACITY`
/// characters before wrapping.
///
/// Errors from loading the background art or from the shell backend are
/// passed through. The background art and list focus are released before
/// returning in every case.
pub fn ask_yes_no<B: Backend>(
    shell: &mut Shell<B>,
    title: &str,
    body: &str,
) -> anyhow::Result<bool> {
    let mut scene = shell.scene(BACKGROUND_ART)?;

    let mut items: Vec<UiItem> = Vec::new();
    append_background(&mut items);
    append_logo(&mut items);
    items.push(
        ArtText::new(
            title.to_owned(),
            TITLE_RECT,
            UiStyle::CENTER | UiStyle::BIG,
        )
        .into(),
    );
    items.push(
        ArtText::new(confirmation_message(body), MESSAGE_RECT, UiStyle::MED)
            .into(),
    );

    let choices = vec![ListItem::new("Yes", YES), ListItem::new("No", NO)];
    let n = choices.len();
    let (x, y) = LIST_POS;
    let (w, h) = LIST_ITEM_SIZE;
    items.push(
        UiList::new(
            choices,
            x,
            y,
            w,
            h,
            UiStyle::CENTER | UiStyle::BIG | UiStyle::GOLD,
        )
        .into(),
    );

    scene.init_list(n, true, 0);

    log::info!("ask_yes_no: {title:?}");
    let mut phase = Phase::Active;
    let answer = loop {
        if let Phase::Finished(answer) = phase {
            break answer;
        }

        scene.clear_screen();
        scene.render_items(&items);
        scene.poll_and_render(&items, &mut phase)?;
    };
    log::info!("ask_yes_no: {title:?} answered {answer}");

    Ok(answer)
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{Headless, InputAction::*};

    const TITLE: &str = "Delete Character?";
    const BODY: &str = "This will permanently delete your hero.";

    fn shell(script: &[crate::InputAction]) -> Shell<Headless> {
        Shell::new(Headless::new(script.iter().copied()))
    }

    fn assert_released(shell: &Shell<Headless>) {
        assert!(!shell.has_background_art());
        assert!(shell.list().is_none());
    }

    #[test]
    fn select_yes() {
        let mut shell = shell(&[Select]);
        assert!(ask_yes_no(&mut shell, TITLE, BODY).unwrap());
        assert_released(&shell);

        let frame = shell.backend().last_frame().unwrap();
        assert!(frame.contains(TITLE));
        assert!(frame.contains("This will permanently delete your"));
        assert!(frame.contains("» Yes «"));
        assert!(frame.contains("H O L L O W"));
    }

    #[test]
    fn select_no() {
        let mut shell = shell(&[Down, Select]);
        assert!(!ask_yes_no(&mut shell, TITLE, BODY).unwrap());
        assert_released(&shell);

        let frames = shell.backend().frames();
        assert_eq!(frames.len(), 2);
        assert!(frames[1].contains("» No «"));
    }

    #[test]
    fn cancel_is_no() {
        let mut shell = shell(&[Cancel]);
        assert!(!ask_yes_no(&mut shell, TITLE, BODY).unwrap());
        assert_released(&shell);

        // Cancel wins even when yes is focused.
        let mut shell = self::shell(&[Down, Up, Cancel]);
        assert!(!ask_yes_no(&mut shell, TITLE, BODY).unwrap());
    }

    #[test]
    fn focus_wraps_around() {
        let mut shell = shell(&[Up, Select]);
        assert!(!ask_yes_no(&mut shell, TITLE, BODY).unwrap());

        let mut shell = self::shell(&[Down, Down, Select]);
        assert!(ask_yes_no(&mut shell, TITLE, BODY).unwrap());

        let mut shell = self::shell(&[Last, First, Select]);
        assert!(ask_yes_no(&mut shell, TITLE, BODY).unwrap());
    }

    #[test]
    fn errors_still_release() {
        let mut shell = shell(&[Down, Up]);
        assert!(ask_yes_no(&mut shell, TITLE, BODY).is_err());
        assert_released(&shell);
        assert_eq!(shell.backend().frames().len(), 3);
    }

    #[test]
    fn long_body_is_truncated() {
        let body = "x".repeat(400);
        assert_eq!(
            confirmation_message(&body)
                .chars()
                .filter(|&c| c == 'x')
                .count(),
            MESSAGE_CAPACITY
        );
        assert!(confirmation_message(&body)
            .lines()
            .all(|line| line.chars().count() <= MESSAGE_WIDTH as usize));

        let mut shell = shell(&[Select]);
        ask_yes_no(&mut shell, "Overflow", &body).unwrap();
        let frame = shell.backend().last_frame().unwrap();
        assert_eq!(frame.matches('x').count(), MESSAGE_CAPACITY);
    }

    #[test]
    fn empty_texts() {
        let mut shell = shell(&[Select]);
        assert!(ask_yes_no(&mut shell, "", "").unwrap());
        assert_eq!(confirmation_message(""), "");
    }

    #[test]
    fn sequential_dialogs_are_independent() {
        let mut shell = shell(&[Select]);
        assert!(ask_yes_no(&mut shell, "First", "alpha alpha").unwrap());

        shell.backend_mut().push(Down);
        shell.backend_mut().push(Select);
        assert!(!ask_yes_no(&mut shell, "Second", "beta").unwrap());
        assert_released(&shell);

        let frames = shell.backend().frames();
        assert_eq!(frames.len(), 3);

        // Focus starts over at yes in the second dialog.
        assert!(frames[1].contains("» Yes «"));
        assert!(!frames[1].contains("alpha"));
        assert!(!frames[1].contains("First"));
        assert!(frames[2].contains("beta"));
    }

    #[quickcheck]
    fn answer_follows_focus(
        moves: Vec<bool>,
        cancel: bool,
        body: String,
    ) -> bool {
        // Every move flips the focus of the two item wrapping list.
        let mut script: Vec<_> =
            moves.iter().map(|&down| if down { Down } else { Up }).collect();
        script.push(if cancel { Cancel } else { Select });

        let mut shell = shell(&script);
        let answer = ask_yes_no(&mut shell, TITLE, &body).unwrap();

        answer == (!cancel && moves.len() % 2 == 0)
            && !shell.has_background_art()
            && shell.list().is_none()
    }
}
