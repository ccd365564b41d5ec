//! Property test: whatever session is saved, the file store hands the
//! same tokens and user snapshot back.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use ecosistema_union::adapters::session::FileSessionStore;
use ecosistema_union::domain::{ReferrerInfo, Role, Session, UserSnapshot, UserStatus};
use ecosistema_union::ports::SessionStore;

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Visitor),
        Just(Role::Member),
        Just(Role::Hub),
        Just(Role::Admin),
    ]
}

fn arb_status() -> impl Strategy<Value = UserStatus> {
    prop_oneof![
        Just(UserStatus::Pending),
        Just(UserStatus::Active),
        Just(UserStatus::Suspended),
        Just(UserStatus::Inactive),
    ]
}

fn arb_referrer() -> impl Strategy<Value = Option<ReferrerInfo>> {
    proptest::option::of(("[a-f0-9]{8}", "[a-z]{3,12}@[a-z]{3,8}\\.com").prop_map(
        |(id, email)| ReferrerInfo {
            id,
            full_name: None,
            email,
        },
    ))
}

prop_compose! {
    fn arb_user()(
        id in "[a-f0-9]{8}",
        email in "[a-z]{3,12}@[a-z]{3,8}\\.com",
        full_name in proptest::option::of("[A-Za-z ]{1,40}"),
        phone in proptest::option::of("\\+55[0-9]{10,11}"),
        role in arb_role(),
        status in arb_status(),
        email_verified in any::<bool>(),
        referral_code in "UNION[A-Z0-9]{6}",
        referred_by in arb_referrer(),
        created_secs in 0i64..2_000_000_000,
    ) -> UserSnapshot {
        let referred_by_id = referred_by.as_ref().map(|r| r.id.clone());
        UserSnapshot {
            id,
            email,
            full_name,
            phone,
            role,
            status,
            email_verified,
            referral_code,
            referred_by_id,
            referred_by,
            created_at: Utc.timestamp_opt(created_secs, 0).unwrap(),
        }
    }
}

prop_compose! {
    fn arb_session()(
        access_token in "[A-Za-z0-9._-]{1,64}",
        refresh_token in "[A-Za-z0-9._-]{1,64}",
        user in arb_user(),
    ) -> Session {
        Session { access_token, refresh_token, user }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn session_round_trips_through_the_file_store(session in arb_session()) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let dir = tempfile::TempDir::new().unwrap();
            let store = FileSessionStore::new(dir.path());

            store.save(&session).await.unwrap();

            assert_eq!(store.access_token().await.as_deref(), Some(session.access_token.as_str()));
            assert_eq!(store.refresh_token().await.as_deref(), Some(session.refresh_token.as_str()));
            assert_eq!(store.current_user().await.unwrap().unwrap(), session.user);

            store.clear().await.unwrap();
            assert!(!store.is_authenticated().await);
        });
    }
}
