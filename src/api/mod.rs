pub mod error;
pub mod model;

use reqwest::Client;
use url::Url;

pub use error::ApiError;
pub use model::{Lyrics, SearchPage};

use model::LyricsResponse;

pub const API_URL: &str = "https://api.lyrics.ovh";

pub struct ApiService {
    client: Client,
    base: Url,
}

impl ApiService {
    pub fn new() -> Self {
        Self::with_base(Url::parse(API_URL).expect("API origin is a valid URL"))
    }

    pub fn with_base(base: Url) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }

    /// Free-text suggest search.
    pub async fn search(&self, term: &str) -> Result<SearchPage, ApiError> {
        self.get_page(self.suggest_url(term)).await
    }

    /// Follows a `prev`/`next` continuation link from an earlier page.
    pub async fn page(&self, link: &str) -> Result<SearchPage, ApiError> {
        let url = self.page_url(link)?;
        self.get_page(url).await
    }

    /// Full transcript for one artist/title pair.
    pub async fn lyrics(&self, artist: &str, title: &str) -> Result<Lyrics, ApiError> {
        let body = self.get_text(self.lyrics_url(artist, title)).await?;
        let response: LyricsResponse = serde_json::from_str(&body)?;
        response.into_lyrics(artist, title)
    }

    fn suggest_url(&self, term: &str) -> Url {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .expect("http origin always has path segments")
            .pop_if_empty()
            .extend(["suggest", term]);
        url
    }

    fn lyrics_url(&self, artist: &str, title: &str) -> Url {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .expect("http origin always has path segments")
            .pop_if_empty()
            .extend(["v1", artist, title]);
        url
    }

    // Continuation links may be relative paths or absolute URLs.
    fn page_url(&self, link: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(link)?)
    }

    async fn get_page(&self, url: Url) -> Result<SearchPage, ApiError> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_text(&self, url: Url) -> Result<String, ApiError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_url_encodes_the_term() {
        let api = ApiService::new();
        let url = api.suggest_url("hello world");

        assert_eq!(
            url.as_str(),
            "https://api.lyrics.ovh/suggest/hello%20world"
        );
    }

    #[test]
    fn lyrics_url_encodes_both_segments() {
        let api = ApiService::new();
        let url = api.lyrics_url("AC/DC", "Back in Black");

        assert_eq!(
            url.as_str(),
            "https://api.lyrics.ovh/v1/AC%2FDC/Back%20in%20Black"
        );
    }

    #[test]
    fn relative_continuation_links_resolve_against_the_origin() {
        let api = ApiService::new();
        let url = api.page_url("/suggest/hello?page=2").unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.lyrics.ovh/suggest/hello?page=2"
        );
    }

    #[test]
    fn absolute_continuation_links_pass_through() {
        let api = ApiService::new();
        let url = api.page_url("https://api.lyrics.ovh/suggest/adele?page=3").unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.lyrics.ovh/suggest/adele?page=3"
        );
    }
}
