// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt::Write;

use fosdem_core::Event;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Makes catalog or file supplied text safe to write to a terminal.
///
/// Newlines and tabs become spaces, every other control character is shown as a visible
/// `\u{..}` escape so escape sequences are never interpreted.
pub fn sanitize(s: &str) -> Cow<'_, str> {
    if !s.chars().any(char::is_control) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\n' | '\r' | '\t' => out.push(' '),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Like [`sanitize`] but keeps line breaks, for multi-line text blocks.
pub fn sanitize_multiline(s: &str) -> String {
    s.lines()
        .map(|line| sanitize(line).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Short day label followed by the start time, e.g. `Sat 10:00`.
pub fn when_label(event: &Event) -> String {
    let day = event.day.as_ref().map(|d| d.short_name());
    match (day, event.start_time.as_deref()) {
        (Some(day), Some(start)) => format!("{day} {start}"),
        (Some(day), None) => day,
        (None, Some(start)) => start.to_owned(),
        (None, None) => String::new(),
    }
}

/// Removes the last grapheme cluster from `s`.
pub fn pop_grapheme(s: &mut String) {
    if let Some((idx, _)) = s.grapheme_indices(true).next_back() {
        s.truncate(idx);
    }
}

/// Truncates `s` to at most `width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, width: usize) -> Cow<'_, str> {
    if s.width() <= width {
        return Cow::Borrowed(s);
    }
    if width == 0 {
        return Cow::Borrowed("");
    }

    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = g.width();
        if used + w + 1 > width {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push('…');
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(json: &str) -> Event {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_sanitize_plain_text_is_borrowed() {
        assert!(matches!(sanitize("Rust ☕ talk"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_sanitize_escapes_control_characters() {
        assert_eq!(sanitize("a\u{1b}[31mred"), "a\\u{1b}[31mred");
        assert_eq!(sanitize("bell\u{7}"), "bell\\u{7}");
        assert_eq!(sanitize("two\nlines\tand tab"), "two lines and tab");
    }

    #[test]
    fn test_sanitize_multiline_keeps_lines() {
        assert_eq!(sanitize_multiline("one\ntwo\u{1b}"), "one\ntwo\\u{1b}");
    }

    #[test]
    fn test_when_label() {
        let e = event(
            r#"{"id": "a", "title": "A", "day": {"id": "saturday", "name": "Saturday"},
                "startTime": "10:00"}"#,
        );
        assert_eq!(when_label(&e), "Sat 10:00");

        let e = event(r#"{"id": "a", "title": "A", "startTime": "10:00"}"#);
        assert_eq!(when_label(&e), "10:00");

        let e = event(r#"{"id": "a", "title": "A"}"#);
        assert_eq!(when_label(&e), "");
    }

    #[test]
    fn test_pop_grapheme() {
        let mut s = "café".to_string();
        pop_grapheme(&mut s);
        assert_eq!(s, "caf");

        let mut s = "e\u{301}".to_string(); // e + combining acute
        pop_grapheme(&mut s);
        assert_eq!(s, "");

        let mut s = String::new();
        pop_grapheme(&mut s);
        assert_eq!(s, "");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_to_width("漢字漢字", 5), "漢字…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
