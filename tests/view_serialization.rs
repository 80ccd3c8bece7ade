use broadside::{GameSession, SessionView};
use proptest::prelude::*;

proptest! {
    #[test]
    fn session_view_roundtrip(
        toggles in proptest::collection::vec((0usize..10, 0usize..10), 0..20),
        battle in any::<bool>(),
    ) {
        let mut session = GameSession::new().unwrap();
        for (row, col) in toggles {
            session.toggle_placement(row, col).unwrap();
        }
        if battle {
            // crosses into battle only when the random fleet happens to
            // be valid
            let _ = session.start_battle();
        }

        let view = session.view();
        let bytes = bincode::serialize(&view).unwrap();
        let decoded: SessionView = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(view, decoded);
    }
}
