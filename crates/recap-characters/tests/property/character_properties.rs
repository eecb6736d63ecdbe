use proptest::prelude::*;
use recap_characters::CharacterProfileExtractor;
use recap_core::config::CharacterConfig;
use recap_core::models::Outcome;
use recap_core::traits::NeverCancelled;
use test_fixtures::ScriptedCompletion;

fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z]{2,8}",
        Just("Phoenix Club".to_string()),
        Just("the FACEBOOK team".to_string()),
        Just("Harvard".to_string()),
        Just("Final Clubs".to_string()),
    ]
}

proptest! {
    #[test]
    fn denied_names_never_survive(names in prop::collection::vec(name(), 0..15)) {
        let characters: Vec<_> = names
            .iter()
            .map(|n| serde_json::json!({ "name": n, "relationships": [{ "with": "Porcellian Club" }] }))
            .collect();
        let answer = serde_json::json!({ "characters": characters }).to_string();
        let completion = ScriptedCompletion::constant(answer);
        let config = CharacterConfig::default();
        let extractor = CharacterProfileExtractor::new(&completion, None, &config);

        let outcome = extractor
            .extract("r", "———— Scene 1 ————\nSomething.", "M", "en", &NeverCancelled)
            .unwrap();
        let Outcome::Completed(profiles) = outcome else {
            panic!("cancelled without cancellation");
        };

        prop_assert!(profiles.len() <= config.max_characters);
        for p in &profiles {
            let lowered = p.name.to_lowercase();
            prop_assert!(config.name_deny_list.iter().all(|d| !lowered.contains(d.as_str())));
            prop_assert!(p.relationships.is_empty());
        }
    }
}
