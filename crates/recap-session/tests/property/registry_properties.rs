use std::collections::HashSet;

use proptest::prelude::*;
use recap_session::CancellationRegistry;

proptest! {
    #[test]
    fn registry_matches_set_model(ops in prop::collection::vec((0u8..3, 0usize..6), 0..60)) {
        let registry = CancellationRegistry::new();
        let mut model: HashSet<String> = HashSet::new();

        for (op, n) in ops {
            let id = format!("r{n}");
            match op {
                0 => {
                    registry.mark_cancelled(&id);
                    model.insert(id.clone());
                }
                1 => {
                    prop_assert_eq!(registry.clear(&id), model.remove(&id));
                }
                _ => {
                    prop_assert_eq!(registry.take_cancelled(&id), model.remove(&id));
                }
            }
            prop_assert_eq!(registry.is_cancelled(&id), model.contains(&id));
        }
        prop_assert_eq!(registry.len(), model.len());
    }
}
