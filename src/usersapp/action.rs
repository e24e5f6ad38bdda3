use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A command keyword typed at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Remove,
    Edit,
    Quit,
}

impl Action {
    /// Every action, in banner order.
    pub const ALL: [Action; 5] = [
        Action::List,
        Action::Add,
        Action::Remove,
        Action::Edit,
        Action::Quit,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Edit => "edit",
            Action::Quit => "quit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Action::List => "show all users",
            Action::Add => "add new user to the list",
            Action::Remove => "remove user from the list",
            Action::Edit => "edit an existing user",
            Action::Quit => "quit the app",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown action: {0:?}")]
pub struct UnknownAction(pub String);

/// Keywords match exactly: no case folding.
impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.keyword() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
