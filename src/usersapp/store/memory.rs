use super::DataStore;
use crate::model::User;

/// Vec-backed user storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: Vec<User>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn list_users(&self) -> &[User] {
        &self.users
    }

    fn push_user(&mut self, user: User) {
        self.users.push(user);
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.users.iter().position(|user| user.name == name)
    }

    fn replace_user(&mut self, index: usize, user: User) -> Option<User> {
        let slot = self.users.get_mut(index)?;
        Some(std::mem::replace(slot, user))
    }

    fn remove_user(&mut self, index: usize) -> Option<User> {
        if index < self.users.len() {
            Some(self.users.remove(index))
        } else {
            None
        }
    }
}

// --- Test Fixtures ---
