use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{ui::app::App, util::colors};

const KEY_HINTS: &str = "/ search   j/k select   enter lyrics   p/n page   esc back   ^c quit";

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let content_area = chunks[0];
        let help_area = chunks[1];

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title("lyrova")
            .title_alignment(Alignment::Center);
        let content_inner = content_block.inner(content_area);
        f.render_widget(content_block, content_area);

        self.app
            .router
            .render(f, content_inner, &self.app.state, &self.app.ctx);

        let help = Paragraph::new(Line::from(KEY_HINTS))
            .style(Style::default().fg(colors::NEUTRAL))
            .alignment(Alignment::Center);
        f.render_widget(help, help_area);
    }
}
