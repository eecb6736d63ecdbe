//! Span definitions per operation: matching, summarization, chunking,
//! character extraction, index build.

/// Create a scene matching span.
#[macro_export]
macro_rules! match_span {
    ($request_id:expr, $query_len:expr) => {
        tracing::info_span!("recap.match", request_id = %$request_id, query_len = $query_len)
    };
}

/// Create an incremental summarization span.
#[macro_export]
macro_rules! summary_span {
    ($request_id:expr, $movie:expr, $scenes:expr) => {
        tracing::info_span!(
            "recap.summary",
            request_id = %$request_id,
            movie = %$movie,
            scenes = $scenes
        )
    };
}

/// Create a chunk summarization span.
#[macro_export]
macro_rules! chunk_span {
    ($request_id:expr, $chunks:expr) => {
        tracing::info_span!("recap.chunks", request_id = %$request_id, chunks = $chunks)
    };
}

/// Create a character extraction span.
#[macro_export]
macro_rules! extraction_span {
    ($request_id:expr, $movie:expr) => {
        tracing::info_span!("recap.characters", request_id = %$request_id, movie = %$movie)
    };
}

/// Create an index build span.
#[macro_export]
macro_rules! index_build_span {
    ($tracks:expr) => {
        tracing::info_span!("recap.index_build", tracks = $tracks)
    };
}
