//! Operator-facing text.
//!
//! [`Message`] wraps a piece of text and offers in-place case transforms.
//! [`Message::write_colorized`] is the single path through which outcomes
//! reach the operator: each [`MessageVariant`] gets its own symbol and color.
//! [`Message::show_colorized`] is the same path bound to stdout.
//! Whether color escapes are emitted is decided globally by `colored`
//! (see `colored::control`).

use colored::{ColoredString, Colorize};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageVariant {
    Success,
    Error,
    Info,
}

impl MessageVariant {
    fn symbol(self) -> &'static str {
        match self {
            MessageVariant::Success => "✔",
            MessageVariant::Error => "✖",
            MessageVariant::Info => "ℹ",
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            MessageVariant::Success => text.green(),
            MessageVariant::Error => text.red(),
            MessageVariant::Info => text.cyan(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    content: String,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn show(&self) {
        let _ = writeln!(io::stdout().lock(), "{}", self.content);
    }

    /// First character upper-cased, the rest lower-cased.
    pub fn capitalize(&mut self) -> &str {
        let mut chars = self.content.chars();
        self.content = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.as_str().to_lowercase().chars())
                .collect(),
            None => String::new(),
        };
        &self.content
    }

    pub fn to_upper_case(&mut self) -> &str {
        self.content = self.content.to_uppercase();
        &self.content
    }

    pub fn to_lower_case(&mut self) -> &str {
        self.content = self.content.to_lowercase();
        &self.content
    }

    /// Print `text` to stdout in the style of `variant`.
    pub fn show_colorized(variant: MessageVariant, text: &str) {
        let _ = Self::write_colorized(&mut io::stdout().lock(), variant, text);
    }

    pub fn write_colorized<W: Write>(
        out: &mut W,
        variant: MessageVariant,
        text: &str,
    ) -> io::Result<()> {
        writeln!(out, "{}", Self::format_colorized(variant, text))
    }

    pub fn format_colorized(variant: MessageVariant, text: &str) -> String {
        format!("{} {}", variant.paint(variant.symbol()), variant.paint(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_lowers_the_rest() {
        let mut msg = Message::new("hELLO World");
        assert_eq!(msg.capitalize(), "Hello world");
        assert_eq!(msg.content(), "Hello world");
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(Message::new("").capitalize(), "");
        assert_eq!(Message::new("éCOLE").capitalize(), "École");
    }

    #[test]
    fn case_transforms_are_destructive() {
        let mut msg = Message::new("Users Data");
        assert_eq!(msg.to_upper_case(), "USERS DATA");
        assert_eq!(msg.to_lower_case(), "users data");
        assert_eq!(msg.content(), "users data");
    }

    #[test]
    fn colorized_output_carries_symbol_and_text() {
        let mut out = Vec::new();
        Message::write_colorized(&mut out, MessageVariant::Error, "Wrong data!").unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("✖"));
        assert!(printed.contains("Wrong data!"));
        assert!(printed.ends_with('\n'));
    }

    #[test]
    fn variants_use_distinct_symbols() {
        colored::control::set_override(false);
        assert_eq!(
            Message::format_colorized(MessageVariant::Success, "ok"),
            "✔ ok"
        );
        assert_eq!(
            Message::format_colorized(MessageVariant::Info, "note"),
            "ℹ note"
        );
        assert_eq!(
            Message::format_colorized(MessageVariant::Error, "bad"),
            "✖ bad"
        );
    }

    #[test]
    fn stdout_helpers_share_the_writer_path() {
        colored::control::set_override(false);
        Message::new("Users data").show();
        Message::show_colorized(MessageVariant::Success, "User deleted!");
    }
}
