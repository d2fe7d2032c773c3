use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::{
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};
use crate::util::colors;

const DISMISS_HINT: &str = "press any key";

/// Modal notice. Takes all input until dismissed.
pub struct Alert {
    message: String,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl View for Alert {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let text_width = UnicodeWidthStr::width(self.message.as_str())
            .max(UnicodeWidthStr::width(DISMISS_HINT)) as u16;
        let width = (text_width + 6).min(area.width);
        let height = 4.min(area.height);
        let rect = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        f.render_widget(Clear, rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::ACCENT));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let body = Paragraph::new(vec![
            Line::from(self.message.as_str()),
            Line::from(DISMISS_HINT).style(Style::default().fg(colors::NEUTRAL)),
        ])
        .alignment(Alignment::Center);
        f.render_widget(body, inner);
    }

    async fn handle_input(
        &mut self,
        _key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        Some(Action::Back)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::crossterm::event::{KeyCode, KeyEvent};

    use super::*;
    use crate::api::ApiService;

    fn test_ctx() -> AppContext {
        let (event_tx, _event_rx) = flume::unbounded();
        AppContext {
            api: Arc::new(ApiService::new()),
            event_tx,
        }
    }

    #[tokio::test]
    async fn any_key_dismisses_the_alert() {
        let ctx = test_ctx();
        let mut alert = Alert::new("Please type in a search term");

        let action = alert
            .handle_input(KeyEvent::from(KeyCode::Char('x')), &AppState::default(), &ctx)
            .await;

        assert_eq!(action, Some(Action::Back));
    }
}
