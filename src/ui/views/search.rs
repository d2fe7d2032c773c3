use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::api::model::SongSummary;
use crate::event::events::Event;
use crate::{
    ui::{
        components::{pager::Pager, spinner::Spinner},
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

pub const EMPTY_TERM_NOTICE: &str = "Please type in a search term";
const NO_SONGS: &str = "No songs found";

pub struct Search {
    input: String,
    is_editing: bool,
    list_state: ListState,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            input: String::new(),
            is_editing: true,
            list_state: ListState::default(),
        }
    }
}

impl Search {
    fn selected_song<'a>(&self, state: &'a AppState) -> Option<&'a SongSummary> {
        let page = state.data.page.as_ref()?;
        page.data.get(self.list_state.selected()?)
    }

    // Artist and title are drawn as literal cell text, whatever characters
    // they contain.
    fn song_row(song: &SongSummary) -> ListItem<'_> {
        ListItem::new(Line::from(vec![
            Span::styled(
                song.artist.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::raw(song.title.as_str()),
        ]))
    }
}

#[async_trait]
impl View for Search {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let input_area = chunks[0];
        let results_area = chunks[1];
        let pager_area = chunks[2];

        let input_style = if self.is_editing {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(input_style);
        f.render_widget(Paragraph::new(self.input.clone()).block(input_block), input_area);

        if let Some(message) = &state.ui.error_message {
            let error =
                Paragraph::new(message.clone()).style(Style::default().fg(colors::ACCENT));
            f.render_widget(error, results_area);
            return;
        }

        if state.ui.is_loading && state.data.page.is_none() {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Searching...");
            f.render_widget(spinner, results_area);
            return;
        }

        let Some(page) = &state.data.page else {
            return;
        };

        if page.data.is_empty() {
            let empty = Paragraph::new(NO_SONGS).style(Style::default().fg(colors::NEUTRAL));
            f.render_widget(empty, results_area);
            return;
        }

        let items: Vec<ListItem> = page.data.iter().map(Self::song_row).collect();
        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
        f.render_stateful_widget(list, results_area, &mut self.list_state);

        f.render_widget(Pager::new(page.prev.is_some(), page.next.is_some()), pager_area);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.is_editing {
            return match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
                KeyCode::Enter => {
                    let term = self.input.trim();
                    if term.is_empty() {
                        Some(Action::ShowAlert(EMPTY_TERM_NOTICE.to_string()))
                    } else {
                        let _ = ctx.event_tx.send(Event::Search(term.to_string()));
                        self.is_editing = false;
                        Some(Action::None)
                    }
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                    Some(Action::None)
                }
                KeyCode::Backspace => {
                    self.input.pop();
                    Some(Action::None)
                }
                KeyCode::Esc => {
                    self.is_editing = false;
                    Some(Action::None)
                }
                _ => Some(Action::None),
            };
        }

        match key.code {
            KeyCode::Char('/') => {
                self.is_editing = true;
                Some(Action::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(page) = &state.data.page {
                    if !page.data.is_empty() {
                        let last = page.data.len() - 1;
                        let i = self.list_state.selected().map_or(0, |i| (i + 1).min(last));
                        self.list_state.select(Some(i));
                    }
                }
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.list_state.selected().unwrap_or(0);
                self.list_state.select(Some(i.saturating_sub(1)));
                Some(Action::None)
            }
            KeyCode::Enter => {
                if let Some(song) = self.selected_song(state) {
                    let _ = ctx.event_tx.send(Event::FetchLyrics {
                        artist: song.artist.name.clone(),
                        title: song.title.clone(),
                    });
                }
                Some(Action::None)
            }
            KeyCode::Left | KeyCode::Char('p') => {
                if let Some(link) = state.data.page.as_ref().and_then(|p| p.prev.clone()) {
                    let _ = ctx.event_tx.send(Event::FetchPage(link));
                }
                Some(Action::None)
            }
            KeyCode::Right | KeyCode::Char('n') => {
                if let Some(link) = state.data.page.as_ref().and_then(|p| p.next.clone()) {
                    let _ = ctx.event_tx.send(Event::FetchPage(link));
                }
                Some(Action::None)
            }
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        if let Event::PageLoaded(_) = event {
            self.list_state.select(Some(0));
            self.is_editing = false;
        }
    }
}
