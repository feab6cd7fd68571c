use std::iter;

pub trait StrExt {
    /// Split text at whitespace so it fits within `max_width`.
    ///
    /// Words that are longer than `max_width` will be sliced into `max_width`
    /// sized segments.
    fn split_fitting(&self, max_width: usize) -> (&str, &str);

    /// Iterate over lines of text that fit within `max_width`.
    fn lines_of(&self, max_width: usize) -> impl Iterator<Item = &str>;

    /// Word-wrap text into newline separated lines that fit within
    /// `max_width` characters.
    ///
    /// ```
    /// # use util::StrExt;
    /// assert_eq!("Save and quit?".word_wrap(8), "Save and\nquit?");
    /// assert_eq!("".word_wrap(8), "");
    /// ```
    fn word_wrap(&self, max_width: usize) -> String;

    /// Return the prefix of the string that has at most `max_chars`
    /// characters.
    ///
    /// Counts Unicode scalar values, so multi-byte characters are never
    /// split.
    ///
    /// ```
    /// # use util::StrExt;
    /// assert_eq!("hero".truncate_chars(2), "he");
    /// assert_eq!("hero".truncate_chars(10), "hero");
    /// assert_eq!("äöü".truncate_chars(2), "äö");
    /// ```
    fn truncate_chars(&self, max_chars: usize) -> &str;
}

impl StrExt for str {
    fn split_fitting(&self, max_width: usize) -> (&str, &str) {
        // Can't consume anything if width is zero.
        assert!(max_width > 0);

        // Text fits in a single line and has no newlines, return as is.
        if self.chars().count() <= max_width && !self.chars().any(|c| c == '\n')
        {
            return (self, "");
        }

        // Position of end of text that fits in split-off line.
        let mut line_end = None;

        // Set to true in case line starts with whitespace
        let mut traversing_whitespace = true;
        for (i, (pos, c)) in self.char_indices().enumerate() {
            // Always break when you see newline.
            if c == '\n' {
                line_end = Some(pos);
                break;
            }

            if i >= max_width && !c.is_whitespace() {
                if line_end.is_none() {
                    // We hit max width but have no candidate prefix.
                    // No choice but to cut the string mid-word.
                    line_end = Some(pos);
                }
                break;
            }

            if i > 0 && c.is_whitespace() && !traversing_whitespace {
                // Mark the point where we first enter whitespace. (Use
                // traversing_whitespace flag to not update line_end at
                // subsequent whitespace chars.)
                line_end = Some(pos);
                traversing_whitespace = true;
            }
            if !c.is_whitespace() {
                traversing_whitespace = false;
            }
        }

        let line_end = line_end.unwrap_or(self.len());

        // Cut off the whitespace in between split lines.
        // Start with the assumption that the whole remaining string is
        // whitespace, truncate in the loop.
        let mut whitespace_span = self[line_end..].len();
        for (i, c) in self[line_end..].char_indices() {
            // Stop cutting right past first newline you see.
            if c == '\n' {
                whitespace_span = i + 1;
                break;
            }
            // Otherwise cut when you see non-whitespace again
            if !c.is_whitespace() {
                whitespace_span = i;
                break;
            }
        }

        (&self[..line_end], &self[(line_end + whitespace_span)..])
    }

    fn lines_of(&self, max_width: usize) -> impl Iterator<Item = &str> {
        let mut text = self;
        iter::from_fn(move || {
            if text.is_empty() {
                None
            } else {
                let (line, rest) = text.split_fitting(max_width);
                text = rest;
                Some(line)
            }
        })
    }

    fn word_wrap(&self, max_width: usize) -> String {
        let mut ret = String::with_capacity(self.len());
        for (i, line) in self.lines_of(max_width).enumerate() {
            if i > 0 {
                ret.push('\n');
            }
            ret.push_str(line);
        }
        ret
    }

    fn truncate_chars(&self, max_chars: usize) -> &str {
        match self.char_indices().nth(max_chars) {
            Some((end, _)) => &self[..end],
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn split_text() {
        assert_eq!(
            "’Twas brillig, and the slithy toves
      Did gyre and gimble in the wabe:
All mimsy were the borogoves,
      And the mome raths outgrabe."
                .lines_of(24,)
                .collect::<Vec<_>>(),
            vec![
                "’Twas brillig, and the",
                "slithy toves",
                "      Did gyre and",
                "gimble in the wabe:",
                "All mimsy were the",
                "borogoves,",
                "      And the mome raths",
                "outgrabe."
            ]
        );

        assert_eq!(
            "Really cancel the quitting of the stopping?"
                .lines_of(28)
                .collect::<Vec<_>>(),
            vec!["Really cancel the quitting", "of the stopping?"]
        );
    }

    #[test]
    fn long_words_get_sliced() {
        assert_eq!(
            "Abracadabra!".lines_of(5).collect::<Vec<_>>(),
            vec!["Abrac", "adabr", "a!"]
        );
    }

    #[test]
    fn wrap_message() {
        assert_eq!(
            "This will permanently delete your hero.".word_wrap(20),
            "This will\npermanently delete\nyour hero."
        );
        assert_eq!("Gone.\n\nForever.".word_wrap(20), "Gone.\n\nForever.");
    }

    #[test]
    fn truncation() {
        let long = "x".repeat(300);
        assert_eq!(long.truncate_chars(255).len(), 255);
        assert_eq!("".truncate_chars(255), "");
        assert_eq!("abc".truncate_chars(0), "");
        assert_eq!("ääää".truncate_chars(3), "äää");
    }

    #[quickcheck]
    fn wrap_keeps_visible_text(text: String, width: u8) -> TestResult {
        if width == 0 {
            return TestResult::discard();
        }

        let visible = |s: &str| {
            s.chars().filter(|c| !c.is_whitespace()).collect::<String>()
        };
        TestResult::from_bool(
            visible(&text.word_wrap(width as usize)) == visible(&text),
        )
    }

    #[quickcheck]
    fn truncate_is_bounded_prefix(text: String, n: u16) -> bool {
        let n = n as usize;
        let t = text.truncate_chars(n);
        text.starts_with(t) && t.chars().count() == text.chars().count().min(n)
    }
}
