use crate::message::MessageVariant;
use crate::model::User;

pub mod add;
pub mod edit;
pub mod list;
pub mod remove;

pub const USERS_DATA: &str = "Users data";
pub const NO_DATA: &str = "No data...";
pub const USER_ADDED: &str = "User has been successfully added!";
pub const WRONG_DATA: &str = "Wrong data!";
pub const USER_DELETED: &str = "User deleted!";
pub const USER_UPDATED: &str = "User updated!";
pub const USER_NOT_FOUND: &str = "User not found...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub variant: MessageVariant,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            variant: MessageVariant::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            variant: MessageVariant::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            variant: MessageVariant::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_users: Vec<User>,
    pub listed_users: Vec<User>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_users(mut self, users: Vec<User>) -> Self {
        self.affected_users = users;
        self
    }

    pub fn with_listed_users(mut self, users: Vec<User>) -> Self {
        self.listed_users = users;
        self
    }

    /// True when any message reports an error.
    pub fn is_error(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.variant == MessageVariant::Error)
    }
}
