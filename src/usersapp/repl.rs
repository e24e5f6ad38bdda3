//! # Command Loop
//!
//! A [`Session`] prints the banner once, then repeats: ask for an action,
//! collect the fields that action needs in one batch, run it against the
//! single [`UsersApi`] it owns, print the outcome. `quit` ends the loop, as
//! does running out of input.
//!
//! Nothing the operator types is fatal. Unknown actions, invalid users and
//! missing names are all reported as messages and the loop carries on.
//! Only I/O failures on the prompt or output end the session with an error.

use crate::action::Action;
use crate::api::UsersApi;
use crate::error::{Result, UsersError};
use crate::message::{Message, MessageVariant};
use crate::model::UserDraft;
use crate::prompt::{Field, Prompter};
use crate::render;
use crate::store::DataStore;
use std::io::Write;
use tracing::debug;

pub const WELCOME: &str = "Welcome to the UsersApp!";
pub const COMMAND_NOT_FOUND: &str = "Command not found";
pub const FAREWELL: &str = "Bye bye!";
pub const DEFAULT_PROMPT: &str = "How can I help you?";

const ADD_FIELDS: [Field; 2] = [
    Field::input("name", "Enter name"),
    Field::number("age", "Enter age"),
];

const REMOVE_FIELDS: [Field; 1] = [Field::input("name", "Enter name")];

const EDIT_FIELDS: [Field; 3] = [
    Field::input("name", "Enter name"),
    Field::input("newName", "Enter new name"),
    Field::number("newAge", "Enter new age"),
];

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub show_banner: bool,
    pub prompt_message: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            show_banner: true,
            prompt_message: DEFAULT_PROMPT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<S: DataStore, P: Prompter, W: Write> {
    api: UsersApi<S>,
    prompter: P,
    out: W,
    options: SessionOptions,
}

impl<S: DataStore, P: Prompter, W: Write> Session<S, P, W> {
    pub fn new(api: UsersApi<S>, prompter: P, out: W, options: SessionOptions) -> Self {
        Self {
            api,
            prompter,
            out,
            options,
        }
    }

    pub fn api(&self) -> &UsersApi<S> {
        &self.api
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn run(&mut self) -> Result<()> {
        if self.options.show_banner {
            self.print_banner()?;
        }

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(UsersError::InputClosed) => {
                    debug!("input closed, ending session");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn step(&mut self) -> Result<Flow> {
        let field = Field::input("action", "").with_message(self.options.prompt_message.clone());
        let answers = self.prompter.prompt(std::slice::from_ref(&field))?;
        let flow = self.dispatch(&answers.text("action"))?;
        self.out.flush()?;
        Ok(flow)
    }

    fn dispatch(&mut self, keyword: &str) -> Result<Flow> {
        let action = match keyword.parse::<Action>() {
            Ok(action) => action,
            Err(err) => {
                debug!(%err, "unrecognized action");
                Message::write_colorized(
                    &mut self.out,
                    MessageVariant::Error,
                    COMMAND_NOT_FOUND,
                )?;
                return Ok(Flow::Continue);
            }
        };

        debug!(%action, "dispatching");
        let result = match action {
            Action::List => self.api.show_all(),
            Action::Add => {
                let answers = self.prompter.prompt(&ADD_FIELDS)?;
                self.api.add(UserDraft::new(answers.text("name"), answers.number("age")))
            }
            Action::Remove => {
                let answers = self.prompter.prompt(&REMOVE_FIELDS)?;
                self.api.remove(&answers.text("name"))
            }
            Action::Edit => {
                let answers = self.prompter.prompt(&EDIT_FIELDS)?;
                let replacement = UserDraft::new(answers.text("newName"), answers.number("newAge"));
                self.api.edit(&answers.text("name"), replacement)
            }
            Action::Quit => {
                Message::write_colorized(&mut self.out, MessageVariant::Info, FAREWELL)?;
                return Ok(Flow::Quit);
            }
        };

        render::print_result(&mut self.out, &result)?;
        Ok(Flow::Continue)
    }

    fn print_banner(&mut self) -> Result<()> {
        let mut heading = Message::new("AVAILABLE ACTIONS");

        writeln!(self.out)?;
        writeln!(self.out, "{}", WELCOME)?;
        writeln!(self.out, "{}", "=".repeat(36))?;
        Message::write_colorized(&mut self.out, MessageVariant::Info, heading.capitalize())?;
        writeln!(self.out)?;
        for action in Action::ALL {
            writeln!(self.out, "{} – {}", action.keyword(), action.description())?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{NO_DATA, USER_ADDED, USER_NOT_FOUND, USER_UPDATED, WRONG_DATA};
    use crate::model::User;
    use crate::prompt::LinePrompter;
    use crate::store::memory::InMemoryStore;
    use std::io::{Cursor, Sink};

    type TestSession = Session<InMemoryStore, LinePrompter<Cursor<Vec<u8>>, Sink>, Vec<u8>>;

    fn session(script: &str, options: SessionOptions) -> TestSession {
        let prompter = LinePrompter::new(Cursor::new(script.as_bytes().to_vec()), std::io::sink());
        Session::new(UsersApi::new(InMemoryStore::new()), prompter, Vec::new(), options)
    }

    fn quiet() -> SessionOptions {
        SessionOptions {
            show_banner: false,
            ..SessionOptions::default()
        }
    }

    fn run(script: &str) -> (TestSession, String) {
        let mut s = session(script, quiet());
        s.run().unwrap();
        let out = String::from_utf8(s.output().clone()).unwrap();
        (s, out)
    }

    #[test]
    fn banner_is_printed_once() {
        let mut s = session("list\nlist\nquit\n", SessionOptions::default());
        s.run().unwrap();
        let out = String::from_utf8(s.output().clone()).unwrap();

        assert_eq!(out.matches(WELCOME).count(), 1);
        assert!(out.contains("Available actions"));
        for action in Action::ALL {
            assert!(out.contains(&format!("{} – ", action.keyword())));
        }
    }

    #[test]
    fn empty_list_then_quit() {
        let (_, out) = run("list\nquit\n");
        assert!(out.contains(NO_DATA));
        assert!(out.contains(FAREWELL));
    }

    #[test]
    fn add_and_list() {
        let (s, out) = run("add\nAnna\n30\nlist\nquit\n");

        assert!(out.contains(USER_ADDED));
        assert!(out.contains("│ Anna │ 30  │"));
        assert_eq!(
            s.api().users(),
            &[User {
                name: "Anna".into(),
                age: 30.0
            }]
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let (s, out) = run("add\n\n30\nquit\n");
        assert!(out.contains(WRONG_DATA));
        assert!(s.api().is_empty());
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        let (s, out) = run("add\nAnna\nthirty\nquit\n");
        assert!(out.contains(WRONG_DATA));
        assert!(s.api().is_empty());
    }

    #[test]
    fn fractional_ages_are_accepted() {
        let (s, out) = run("add\nAnna\n30.5\nadd\nBo\n0.5\nlist\nquit\n");
        assert_eq!(out.matches(USER_ADDED).count(), 2);
        assert!(!out.contains(WRONG_DATA));
        assert!(out.contains("30.5"));
        assert!(out.contains("0.5"));
        assert_eq!(s.api().len(), 2);
        assert_eq!(s.api().users()[1].age, 0.5);
    }

    #[test]
    fn remove_unknown_user() {
        let (s, out) = run("add\nAnna\n30\nremove\nBob\nquit\n");
        assert!(out.contains(USER_NOT_FOUND));
        assert_eq!(s.api().len(), 1);
    }

    #[test]
    fn edit_existing_user() {
        let (s, out) = run("add\nAnna\n30\nedit\nAnna\nAnna\n31\nlist\nquit\n");
        assert!(out.contains(USER_UPDATED));
        assert!(out.contains("│ Anna │ 31  │"));
        assert_eq!(s.api().users()[0].age, 31.0);
    }

    #[test]
    fn unknown_command_keeps_looping() {
        let (s, out) = run("foo\nadd\nAnna\n30\nquit\n");
        assert!(out.contains(COMMAND_NOT_FOUND));
        assert!(out.contains(USER_ADDED));
        assert_eq!(s.api().len(), 1);
    }

    #[test]
    fn quit_stops_reading_input() {
        let (s, out) = run("quit\nadd\nAnna\n30\n");
        assert!(out.contains(FAREWELL));
        assert!(!out.contains(USER_ADDED));
        assert!(s.api().is_empty());
    }

    #[test]
    fn end_of_input_ends_quietly() {
        let (s, out) = run("add\nAnna\n");
        assert!(!out.contains(FAREWELL));
        assert!(s.api().is_empty());
    }

    #[test]
    fn custom_prompt_message_is_used() {
        let mut out = Vec::new();
        {
            let prompter = LinePrompter::new(Cursor::new(b"quit\n".to_vec()), &mut out);
            let options = SessionOptions {
                show_banner: false,
                prompt_message: "Command?".into(),
            };
            let mut s = Session::new(
                UsersApi::new(InMemoryStore::new()),
                prompter,
                std::io::sink(),
                options,
            );
            s.run().unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "? Command? ");
    }
}
