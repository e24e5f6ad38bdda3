use crate::commands::{CmdMessage, CmdResult, USER_ADDED, WRONG_DATA};
use crate::model::{User, UserDraft};
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, draft: UserDraft) -> CmdResult {
    let user = match User::try_from(draft) {
        Ok(user) => user,
        Err(err) => {
            debug!(%err, "rejected new user");
            return CmdResult::default().with_message(CmdMessage::error(WRONG_DATA));
        }
    };

    store.push_user(user.clone());
    debug!(name = %user.name, age = user.age, "user added");
    CmdResult::default()
        .with_message(CmdMessage::success(USER_ADDED))
        .with_affected_users(vec![user])
}
