//! # API Facade
//!
//! `UsersApi` is the single entry point for operations on the user list,
//! regardless of the UI driving it. It dispatches to `commands/*.rs` and
//! returns `CmdResult`s; it never prints.
//!
//! Generic over [`DataStore`] so the command loop and the tests share one
//! code path. The process builds exactly one instance and hands it to the
//! command loop.

use crate::commands;
use crate::model::{User, UserDraft};
use crate::store::DataStore;

pub struct UsersApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> UsersApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn show_all(&self) -> commands::CmdResult {
        commands::list::run(&self.store)
    }

    pub fn add(&mut self, draft: UserDraft) -> commands::CmdResult {
        commands::add::run(&mut self.store, draft)
    }

    pub fn remove(&mut self, name: &str) -> commands::CmdResult {
        commands::remove::run(&mut self.store, name)
    }

    pub fn edit(&mut self, name: &str, replacement: UserDraft) -> commands::CmdResult {
        commands::edit::run(&mut self.store, name, replacement)
    }

    pub fn users(&self) -> &[User] {
        self.store.list_users()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

pub use commands::{CmdMessage, CmdResult};
