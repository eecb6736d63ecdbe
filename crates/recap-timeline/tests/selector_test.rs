use recap_index::InMemorySceneStore;
use recap_timeline::{movie_duration, TemporalSceneSelector};
use test_fixtures::{scene, two_movie_scenes};

fn store() -> InMemorySceneStore {
    InMemorySceneStore::from_records(two_movie_scenes()).unwrap()
}

#[test]
fn selects_movie_scenes_up_to_timestamp_in_time_order() {
    let store = store();
    let report = TemporalSceneSelector::new(&store).select_up_to("X", "00:00:07,000");
    assert_eq!(report.texts, vec!["d", "a"]);
    assert_eq!(report.scene_ids, vec![4, 1]);
    assert!(report.malformed.is_empty());
    assert!(!report.query_malformed);
}

#[test]
fn duration_is_latest_scene_timestamp() {
    let store = store();
    assert_eq!(movie_duration("X", &store), "00:00:10,000");
    assert_eq!(movie_duration("Y", &store), "00:00:03,000");
}

#[test]
fn unknown_movie_has_sentinel_duration_and_no_scenes() {
    let store = store();
    assert_eq!(movie_duration("Z", &store), "00:00:00,000");
    assert!(TemporalSceneSelector::new(&store)
        .select_up_to("Z", "01:00:00")
        .is_empty());
}

#[test]
fn movie_match_is_case_sensitive() {
    let store = store();
    assert!(TemporalSceneSelector::new(&store)
        .select_up_to("x", "00:00:10,000")
        .is_empty());
}

#[test]
fn boundary_timestamp_is_included() {
    let store = store();
    let report = TemporalSceneSelector::new(&store).select_up_to("X", "00:00:10.000");
    assert_eq!(report.texts, vec!["d", "a", "b"]);
}

#[test]
fn malformed_scene_timestamps_sort_first_and_are_reported() {
    let store = InMemorySceneStore::from_records(vec![
        scene(1, "M", "00:00:02,000", "late"),
        scene(2, "M", "garbage", "broken"),
        scene(3, "M", "00:00:01,000", "early"),
    ])
    .unwrap();

    let report = TemporalSceneSelector::new(&store).select_up_to("M", "00:00:05,000");
    assert_eq!(report.texts, vec!["broken", "early", "late"]);
    assert_eq!(report.malformed, vec![2]);
}

#[test]
fn malformed_query_timestamp_selects_only_zero_time_scenes() {
    let store = InMemorySceneStore::from_records(vec![
        scene(1, "M", "00:00:00,000", "opening"),
        scene(2, "M", "00:00:02,000", "later"),
    ])
    .unwrap();

    let report = TemporalSceneSelector::new(&store).select_up_to("M", "soon");
    assert!(report.query_malformed);
    assert_eq!(report.texts, vec!["opening"]);
}

#[test]
fn equal_timestamps_keep_id_order() {
    let store = InMemorySceneStore::from_records(vec![
        scene(9, "M", "00:00:01,000", "second"),
        scene(3, "M", "00:00:01.000", "first"),
    ])
    .unwrap();
    let selector = TemporalSceneSelector::new(&store);
    assert_eq!(selector.select_up_to("M", "00:00:01").texts, vec!["first", "second"]);
    assert_eq!(selector.movie_duration("M"), "00:00:01.000");
}
