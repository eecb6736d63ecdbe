use proptest::prelude::*;
use recap_core::models::SceneRecord;
use recap_index::InMemorySceneStore;
use recap_timeline::{parse_timestamp, TemporalSceneSelector};

fn timestamp() -> impl Strategy<Value = String> {
    (0u32..3, 0u32..60, 0u32..60, 0u32..1000)
        .prop_map(|(h, m, s, ms)| format!("{h:02}:{m:02}:{s:02},{ms:03}"))
}

proptest! {
    #[test]
    fn well_formed_timestamps_round_trip_to_seconds(h in 0u32..100, m in 0u32..60, s in 0u32..60, ms in 0u32..1000) {
        let parsed = parse_timestamp(&format!("{h:02}:{m:02}:{s:02}.{ms:03}"));
        prop_assert!(parsed.valid);
        let expected = h as f64 * 3600.0 + m as f64 * 60.0 + s as f64 + ms as f64 / 1000.0;
        prop_assert!((parsed.seconds - expected).abs() < 1e-9);
    }

    #[test]
    fn selection_is_sorted_filtered_and_single_movie(
        scenes in prop::collection::vec((prop::bool::ANY, timestamp()), 0..30),
        cutoff in timestamp(),
    ) {
        let records: Vec<SceneRecord> = scenes
            .iter()
            .enumerate()
            .map(|(i, (is_x, ts))| SceneRecord::new(i as u64, if *is_x { "X" } else { "Y" }, ts.clone(), format!("t{i}")))
            .collect();
        let store = InMemorySceneStore::from_records(records.clone()).unwrap();
        let report = TemporalSceneSelector::new(&store).select_up_to("X", &cutoff);
        let limit = parse_timestamp(&cutoff).seconds;

        let times: Vec<f64> = report
            .scene_ids
            .iter()
            .map(|id| {
                let r = &records[*id as usize];
                assert_eq!(r.movie, "X");
                parse_timestamp(&r.timestamp).seconds
            })
            .collect();
        for pair in times.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        prop_assert!(times.iter().all(|t| *t <= limit));

        let expected = records
            .iter()
            .filter(|r| r.movie == "X" && parse_timestamp(&r.timestamp).seconds <= limit)
            .count();
        prop_assert_eq!(report.len(), expected);
    }
}
