use ratatui::crossterm::event::{KeyEvent, KeyEventKind};
use tracing::warn;

use crate::{
    api::ApiError,
    event::events::Event,
    ui::{
        app::App,
        components::alert::Alert,
        input::InputHandler,
        traits::Action,
        tui::{TerminalEvent, Tui},
        views::LyricsView,
    },
};

pub const SEARCH_ERROR: &str = "Something went wrong while searching. Please try again.";
pub const PAGE_ERROR: &str = "Could not load that page of results. Please try again.";
pub const LYRICS_ERROR: &str = "Could not load lyrics for that song. Please try again.";

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui).await?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
        }

        Ok(())
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Tick | TerminalEvent::Resize(..) => {}
        }

        Ok(())
    }

    async fn handle_key_event(app: &mut App, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(action) = app.router.handle_input(key, &app.state, &app.ctx).await {
            Self::dispatch_action(app, action);
            return;
        }

        if let Some(action) = InputHandler::handle_key(key) {
            Self::dispatch_action(app, action);
        }
    }

    fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Quit => app.should_quit = true,
            Action::Back => {
                if app.router.has_overlay() {
                    app.router.clear_overlay();
                } else {
                    app.router.pop();
                }
            }
            Action::ShowAlert(message) => {
                app.router.set_overlay(Box::new(Alert::new(message)));
            }
            Action::None => {}
        }
    }

    // Requests are fire-and-forget: nothing aborts a superseded task, and
    // whichever response lands last paints last.
    pub async fn handle_action(app: &mut App, evt: Event) {
        app.router.on_event(&evt, &app.ctx).await;

        match evt {
            Event::Search(term) => {
                app.state.ui.is_loading = true;
                app.state.ui.error_message = None;

                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();
                tokio::spawn(async move {
                    match api.search(&term).await {
                        Ok(page) => {
                            let _ = tx.send(Event::PageLoaded(page));
                        }
                        Err(e) => {
                            warn!("suggest search failed: {e}");
                            let _ = tx.send(Event::FetchError(SEARCH_ERROR.to_string()));
                        }
                    }
                });
            }
            Event::FetchPage(link) => {
                app.state.ui.is_loading = true;
                app.state.ui.error_message = None;

                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();
                tokio::spawn(async move {
                    match api.page(&link).await {
                        Ok(page) => {
                            let _ = tx.send(Event::PageLoaded(page));
                        }
                        Err(e) => {
                            warn!("continuation fetch failed: {e}");
                            let _ = tx.send(Event::FetchError(PAGE_ERROR.to_string()));
                        }
                    }
                });
            }
            Event::FetchLyrics { artist, title } => {
                app.state.ui.is_loading = true;
                app.state.ui.error_message = None;

                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();
                tokio::spawn(async move {
                    match api.lyrics(&artist, &title).await {
                        Ok(lyrics) => {
                            let _ = tx.send(Event::LyricsLoaded(lyrics));
                        }
                        Err(ApiError::Api(message)) => {
                            let _ = tx.send(Event::LyricsUnavailable(message));
                        }
                        Err(e) => {
                            warn!("lyrics fetch failed: {e}");
                            let _ = tx.send(Event::FetchError(LYRICS_ERROR.to_string()));
                        }
                    }
                });
            }
            Event::PageLoaded(page) => {
                app.state.ui.is_loading = false;
                app.state.ui.error_message = None;
                app.state.data.page = Some(page);
            }
            Event::LyricsLoaded(lyrics) => {
                app.state.ui.is_loading = false;
                app.router.push(Box::new(LyricsView::new(lyrics)));
            }
            Event::LyricsUnavailable(message) => {
                app.state.ui.is_loading = false;
                app.router.push(Box::new(LyricsView::missing(message)));
            }
            Event::FetchError(message) => {
                app.state.ui.is_loading = false;
                app.state.data.page = None;
                app.state.ui.error_message = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::model::{Lyrics, SearchPage};

    fn page() -> SearchPage {
        SearchPage {
            data: vec![],
            prev: None,
            next: None,
        }
    }

    #[tokio::test]
    async fn loaded_page_replaces_state_and_clears_the_error() {
        let mut app = App::new();
        app.state.ui.is_loading = true;
        app.state.ui.error_message = Some("stale".to_string());

        EventHandler::handle_action(&mut app, Event::PageLoaded(page())).await;

        assert!(!app.state.ui.is_loading);
        assert_eq!(app.state.ui.error_message, None);
        assert!(app.state.data.page.is_some());
    }

    #[tokio::test]
    async fn fetch_error_clears_the_page_and_keeps_the_message() {
        let mut app = App::new();
        app.state.data.page = Some(page());

        EventHandler::handle_action(
            &mut app,
            Event::FetchError(SEARCH_ERROR.to_string()),
        )
        .await;

        assert_eq!(app.state.data.page, None);
        assert_eq!(app.state.ui.error_message.as_deref(), Some(SEARCH_ERROR));
    }

    #[tokio::test]
    async fn lyrics_results_push_the_lyrics_view() {
        let mut app = App::new();
        assert_eq!(app.router.depth(), 1);

        EventHandler::handle_action(
            &mut app,
            Event::LyricsLoaded(Lyrics {
                artist: "Adele".to_string(),
                title: "Hello".to_string(),
                text: "Line1\nLine2".to_string(),
            }),
        )
        .await;

        assert_eq!(app.router.depth(), 2);
    }

    #[tokio::test]
    async fn missing_lyrics_push_the_message_view() {
        let mut app = App::new();

        EventHandler::handle_action(
            &mut app,
            Event::LyricsUnavailable("No lyrics found".to_string()),
        )
        .await;

        assert_eq!(app.router.depth(), 2);
    }

    #[test]
    fn alert_actions_toggle_the_overlay() {
        let mut app = App::new();

        EventHandler::dispatch_action(&mut app, Action::ShowAlert("notice".to_string()));
        assert!(app.router.has_overlay());

        EventHandler::dispatch_action(&mut app, Action::Back);
        assert!(!app.router.has_overlay());
        assert_eq!(app.router.depth(), 1);
    }

    #[test]
    fn back_pops_a_pushed_view_but_not_the_root() {
        let mut app = App::new();
        app.router
            .push(Box::new(LyricsView::missing("No lyrics found")));

        EventHandler::dispatch_action(&mut app, Action::Back);
        assert_eq!(app.router.depth(), 1);

        EventHandler::dispatch_action(&mut app, Action::Back);
        assert_eq!(app.router.depth(), 1);
    }
}
