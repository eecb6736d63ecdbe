//! SubRip (`.srt`) parsing and grouping of cues into scenes.

use std::sync::LazyLock;

use regex::Regex;

static MARKUP: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"<[^>]*>|\{\\[^}]*\}").ok());

/// One subtitle cue: start timestamp and its text on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleCue {
    pub start: String,
    pub text: String,
}

/// A scene before it has an id or an embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneDraft {
    /// Start timestamp of the scene's first cue.
    pub timestamp: String,
    pub text: String,
}

/// Parse SubRip content. Blocks without a `-->` timing line or whose text is
/// empty after markup stripping are skipped.
pub fn parse_srt(content: &str) -> Vec<SubtitleCue> {
    let normalized = content.trim_start_matches('\u{feff}').replace("\r\n", "\n");

    normalized
        .split("\n\n")
        .filter_map(|block| {
            let mut lines = block.lines().map(str::trim).skip_while(|l| !l.contains("-->"));
            let timing = lines.next()?;
            let start = timing.split("-->").next()?.trim().to_string();
            if start.is_empty() {
                return None;
            }
            let joined = lines.filter(|l| !l.is_empty()).collect::<Vec<_>>().join(" ");
            let text = strip_markup(&joined);
            (!text.is_empty()).then_some(SubtitleCue { start, text })
        })
        .collect()
}

/// Group consecutive cues into scenes of `lines_per_scene` cues. The last
/// scene may be shorter. Scene text is the cue texts joined by spaces.
pub fn group_into_scenes(cues: &[SubtitleCue], lines_per_scene: usize) -> Vec<SceneDraft> {
    cues.chunks(lines_per_scene.max(1))
        .map(|chunk| SceneDraft {
            timestamp: chunk[0].start.clone(),
            text: chunk
                .iter()
                .map(|c| c.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        })
        .collect()
}

fn strip_markup(text: &str) -> String {
    let stripped = match MARKUP.as_ref() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    };
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
