use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::api::model::Lyrics;
use crate::{
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

enum Content {
    Found(Lyrics),
    Missing(String),
}

/// Full-screen transcript. Replaces the results surface; no pager here.
pub struct LyricsView {
    content: Content,
    scroll: u16,
}

impl LyricsView {
    pub fn new(lyrics: Lyrics) -> Self {
        Self {
            content: Content::Found(lyrics),
            scroll: 0,
        }
    }

    pub fn missing(message: impl Into<String>) -> Self {
        Self {
            content: Content::Missing(message.into()),
            scroll: 0,
        }
    }
}

/// Splits on `\r\n`, `\r`, or `\n`. N separators yield N + 1 segments, so
/// every break in the source becomes exactly one visual break.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                segments.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                segments.push(&text[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }

    segments.push(&text[start..]);
    segments
}

#[async_trait]
impl View for LyricsView {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        match &self.content {
            Content::Missing(message) => {
                let notice =
                    Paragraph::new(message.as_str()).style(Style::default().fg(colors::NEUTRAL));
                f.render_widget(notice, area);
            }
            Content::Found(lyrics) => {
                let mut lines = Vec::with_capacity(lyrics.text.len() / 24 + 2);
                lines.push(Line::from(vec![
                    Span::styled(
                        lyrics.artist.as_str(),
                        Style::default()
                            .fg(colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" - "),
                    Span::raw(lyrics.title.as_str()),
                ]));
                lines.push(Line::default());
                lines.extend(split_lines(&lyrics.text).into_iter().map(Line::from));

                let max_scroll = (lines.len() as u16).saturating_sub(area.height);
                self.scroll = self.scroll.min(max_scroll);
                f.render_widget(Paragraph::new(lines).scroll((self.scroll, 0)), area);
            }
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Some(Action::None)
            }
            KeyCode::Backspace => Some(Action::Back),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::api::ApiService;
    use crate::event::events::Event;

    fn test_ctx() -> AppContext {
        let (event_tx, _event_rx) = flume::unbounded::<Event>();
        AppContext {
            api: Arc::new(ApiService::new()),
            event_tx,
        }
    }

    fn rendered(view: &mut LyricsView) -> Vec<String> {
        let ctx = test_ctx();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| view.render(f, f.area(), &AppState::default(), &ctx))
            .unwrap();
        buffer_rows(terminal.backend().buffer())
    }

    fn buffer_rows(buf: &Buffer) -> Vec<String> {
        (buf.area.top()..buf.area.bottom())
            .map(|y| {
                (buf.area.left()..buf.area.right())
                    .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn splits_on_every_break_kind() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn break_count_is_preserved() {
        assert_eq!(split_lines("Line1\nLine2").len(), 2);
        assert_eq!(split_lines("Line1\n\nLine2"), vec!["Line1", "", "Line2"]);
        assert_eq!(split_lines("trailing\n"), vec!["trailing", ""]);
        assert_eq!(split_lines("plain"), vec!["plain"]);
    }

    #[test]
    fn transcript_renders_heading_then_lines_in_order() {
        let mut view = LyricsView::new(Lyrics {
            artist: "Adele".to_string(),
            title: "Hello".to_string(),
            text: "Line1\nLine2".to_string(),
        });
        let rows = rendered(&mut view);

        assert_eq!(rows[0], "Adele - Hello");
        assert_eq!(rows[1], "");
        assert_eq!(rows[2], "Line1");
        assert_eq!(rows[3], "Line2");
    }

    #[test]
    fn transcript_text_stays_literal() {
        let mut view = LyricsView::new(Lyrics {
            artist: "X".to_string(),
            title: "Y".to_string(),
            text: "<br> is not a break".to_string(),
        });
        let rows = rendered(&mut view);

        assert_eq!(rows[2], "<br> is not a break");
    }

    #[test]
    fn missing_lyrics_show_the_message_verbatim() {
        let mut view = LyricsView::missing("No lyrics found");
        let rows = rendered(&mut view);

        assert_eq!(rows[0], "No lyrics found");
    }

    #[tokio::test]
    async fn scrolling_is_clamped_at_the_top() {
        let ctx = test_ctx();
        let mut view = LyricsView::new(Lyrics {
            artist: "A".to_string(),
            title: "B".to_string(),
            text: "one\ntwo\nthree".to_string(),
        });

        view.handle_input(KeyEvent::from(KeyCode::Char('k')), &AppState::default(), &ctx)
            .await;

        assert_eq!(view.scroll, 0);
    }
}
