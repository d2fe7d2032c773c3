use crate::api::model::{Lyrics, SearchPage};

/// Everything that flows over the app channel: commands dispatched by the UI
/// and results sent back by the request tasks they spawn.
#[derive(Debug, Clone)]
pub enum Event {
    // Commands
    Search(String),
    FetchPage(String),
    FetchLyrics { artist: String, title: String },

    // Results
    PageLoaded(SearchPage),
    LyricsLoaded(Lyrics),
    LyricsUnavailable(String),
    FetchError(String),
}
