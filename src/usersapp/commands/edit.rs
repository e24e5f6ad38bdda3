use crate::commands::{CmdMessage, CmdResult, USER_NOT_FOUND, USER_UPDATED, WRONG_DATA};
use crate::model::{User, UserDraft};
use crate::store::DataStore;
use tracing::debug;

/// Overwrite the first user named `name` with `replacement`, in place.
///
/// The lookup runs before validation, so a missing user is reported as
/// such even when the replacement is also invalid.
pub fn run<S: DataStore>(store: &mut S, name: &str, replacement: UserDraft) -> CmdResult {
    let Some(index) = store.position_by_name(name) else {
        debug!(name, "no user to edit");
        return CmdResult::default().with_message(CmdMessage::error(USER_NOT_FOUND));
    };

    let user = match User::try_from(replacement) {
        Ok(user) => user,
        Err(err) => {
            debug!(%err, name, "rejected replacement");
            return CmdResult::default().with_message(CmdMessage::error(WRONG_DATA));
        }
    };

    store.replace_user(index, user.clone());
    debug!(name, index, new_name = %user.name, "user updated");
    CmdResult::default()
        .with_message(CmdMessage::success(USER_UPDATED))
        .with_affected_users(vec![user])
}
