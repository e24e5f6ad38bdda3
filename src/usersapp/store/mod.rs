//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way to reach the user collection.
//! Commands talk to it; nothing else holds a reference to the records.
//!
//! ## Ordering
//!
//! The collection is insertion-ordered. `replace` keeps a record at its
//! position and `remove` drops exactly one record, so the relative order of
//! the remaining records never changes.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec` created empty at startup and dropped
//!   at exit. There is no persistent backend.

use crate::model::User;

pub mod memory;

pub trait DataStore {
    /// All users, in insertion order.
    fn list_users(&self) -> &[User];

    /// Append a user at the end of the collection.
    fn push_user(&mut self, user: User);

    /// Index of the first user whose name is exactly `name`.
    fn position_by_name(&self, name: &str) -> Option<usize>;

    /// Overwrite the user at `index`, returning the previous record.
    fn replace_user(&mut self, index: usize, user: User) -> Option<User>;

    /// Remove the user at `index`, returning it.
    fn remove_user(&mut self, index: usize) -> Option<User>;

    fn len(&self) -> usize {
        self.list_users().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
