use crate::commands::{CmdMessage, CmdResult, USER_DELETED, USER_NOT_FOUND};
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, name: &str) -> CmdResult {
    let removed = store
        .position_by_name(name)
        .and_then(|index| store.remove_user(index));

    match removed {
        Some(user) => {
            debug!(name = %user.name, "user removed");
            CmdResult::default()
                .with_message(CmdMessage::success(USER_DELETED))
                .with_affected_users(vec![user])
        }
        None => {
            debug!(name, "no user to remove");
            CmdResult::default().with_message(CmdMessage::error(USER_NOT_FOUND))
        }
    }
}
