use recap_core::models::SceneRecord;

pub fn scene(id: u64, movie: &str, timestamp: &str, text: &str) -> SceneRecord {
    SceneRecord::new(id, movie, timestamp, text)
}

/// Two interleaved movies: X at 5s, 10s, 1s and Y at 3s.
pub fn two_movie_scenes() -> Vec<SceneRecord> {
    vec![
        scene(1, "X", "00:00:05,000", "a"),
        scene(2, "X", "00:00:10,000", "b"),
        scene(3, "Y", "00:00:03,000", "c"),
        scene(4, "X", "00:00:01,000", "d"),
    ]
}

/// `count` scenes of one movie, one second apart, text `scene <n>`.
pub fn sequential_scenes(movie: &str, count: usize) -> Vec<SceneRecord> {
    (0..count)
        .map(|i| {
            let secs = i + 1;
            scene(
                i as u64,
                movie,
                &format!("00:{:02}:{:02},000", secs / 60, secs % 60),
                &format!("scene {} text", i + 1),
            )
        })
        .collect()
}
