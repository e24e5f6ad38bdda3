//! # Prompt Collection
//!
//! The command loop asks for input in batches: a list of [`Field`]s goes in,
//! an [`Answers`] map comes out once every field has been answered. How the
//! questions are asked is up to the [`Prompter`]:
//!
//! - [`TerminalPrompter`]: interactive line editing through `dialoguer`,
//!   drawn on stderr.
//! - [`LinePrompter`]: plain line reads from any `BufRead`, used for piped
//!   stdin and in tests.
//!
//! Both trim text answers. Number answers that do not parse come back as
//! `FieldValue::Number(None)`; judging them is left to validation.

use crate::error::{Result, UsersError};
use console::Term;
use dialoguer::Input;
use std::borrow::Cow;
use std::collections::HashMap;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    Number,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub message: Cow<'static, str>,
}

impl Field {
    pub const fn input(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Input,
            message: Cow::Borrowed(message),
        }
    }

    pub const fn number(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Number,
            message: Cow::Borrowed(message),
        }
    }

    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Convert one raw line into this field's value.
    pub fn parse(&self, raw: &str) -> FieldValue {
        let raw = raw.trim();
        match self.kind {
            FieldKind::Input => FieldValue::Text(raw.to_string()),
            FieldKind::Number => {
                FieldValue::Number(raw.parse::<f64>().ok().filter(|n| n.is_finite()))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Option<f64>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<String, FieldValue>,
}

impl Answers {
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text answer for `name`; empty when absent or not text.
    pub fn text(&self, name: &str) -> String {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) => s.clone(),
            _ => String::new(),
        }
    }

    /// Number answer for `name`; `None` when absent or unparseable.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(FieldValue::Number(n)) => *n,
            _ => None,
        }
    }
}

pub trait Prompter {
    /// Ask every field in order and return all answers together.
    fn prompt(&mut self, fields: &[Field]) -> Result<Answers>;
}

/// Reads one line per field from `input`, echoing each question to `output`.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt(&mut self, fields: &[Field]) -> Result<Answers> {
        let mut answers = Answers::default();
        for field in fields {
            write!(self.output, "? {} ", field.message)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(UsersError::InputClosed);
            }
            answers.insert(field.name, field.parse(&line));
        }
        Ok(answers)
    }
}

/// Interactive prompter with line editing, drawn on stderr.
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, fields: &[Field]) -> Result<Answers> {
        let mut answers = Answers::default();
        for field in fields {
            let raw: String = Input::new()
                .with_prompt(field.message.as_ref())
                .allow_empty(true)
                .interact_text_on(&self.term)
                .map_err(|err| match err {
                    dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
                        UsersError::InputClosed
                    }
                    other => UsersError::Prompt(other.to_string()),
                })?;
            answers.insert(field.name, field.parse(&raw));
        }
        Ok(answers)
    }
}
