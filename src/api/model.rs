use serde::Deserialize;

use super::error::ApiError;

/// One page of suggest results, as the API returns it. The `prev` and `next`
/// links are opaque continuation paths, followed verbatim and never
/// reconstructed locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchPage {
    pub data: Vec<SongSummary>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SongSummary {
    pub artist: Artist,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artist {
    pub name: String,
}

/// A fetched transcript, carrying the pair it was requested for.
#[derive(Debug, Clone, PartialEq)]
pub struct Lyrics {
    pub artist: String,
    pub title: String,
    pub text: String,
}

pub(crate) const NO_LYRICS: &str = "No lyrics found for this song.";

/// Wire shape of the lyrics endpoint: one of the two fields is present.
#[derive(Debug, Deserialize)]
pub(crate) struct LyricsResponse {
    pub lyrics: Option<String>,
    pub error: Option<String>,
}

impl LyricsResponse {
    pub(crate) fn into_lyrics(self, artist: &str, title: &str) -> Result<Lyrics, ApiError> {
        if let Some(message) = self.error {
            return Err(ApiError::Api(message));
        }

        match self.lyrics {
            Some(text) => Ok(Lyrics {
                artist: artist.to_string(),
                title: title.to_string(),
                text,
            }),
            None => Err(ApiError::Api(NO_LYRICS.to_string())),
        }
    }
}
