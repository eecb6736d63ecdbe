//! # recap-timeline
//!
//! Reconstructs "everything up to now" for a movie from an unordered scene
//! store. One fail-soft timestamp policy is shared by selection and duration:
//! a malformed timestamp counts as 0 seconds and is reported, never dropped.

pub mod selector;
pub mod timestamp;

pub use selector::{movie_duration, SelectionReport, TemporalSceneSelector};
pub use timestamp::{parse_timestamp, ParsedTimestamp};
