use crate::commands::{CmdMessage, CmdResult, NO_DATA, USERS_DATA};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> CmdResult {
    if store.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info(NO_DATA));
    }

    CmdResult::default()
        .with_message(CmdMessage::info(USERS_DATA))
        .with_listed_users(store.list_users().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageVariant;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn empty_store_reports_no_data() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store);

        assert!(result.listed_users.is_empty());
        assert_eq!(result.messages, vec![CmdMessage::info(NO_DATA)]);
    }

    #[test]
    fn lists_users_in_insertion_order() {
        let fixture = StoreFixture::new()
            .with_user("Bob", 41)
            .with_user("Anna", 30);
        let result = run(&fixture.store);

        assert_eq!(result.messages[0].variant, MessageVariant::Info);
        assert_eq!(result.messages[0].content, USERS_DATA);
        let names: Vec<_> = result.listed_users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Anna"]);
    }

    #[test]
    fn listing_does_not_mutate() {
        let fixture = StoreFixture::new().with_user("Anna", 30);
        let before = fixture.store.list_users().to_vec();
        run(&fixture.store);
        run(&fixture.store);
        assert_eq!(fixture.store.list_users(), before.as_slice());
    }
}
