use std::sync::Arc;

use flume::Receiver;
use ratatui::Frame;

use crate::{api::ApiService, event::events::Event};

use super::{
    context::AppContext,
    layout::AppLayout,
    router::Router,
    state::AppState,
    tui,
    util::handler::EventHandler,
    views::Search,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub router: Router,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let ctx = AppContext {
            api: Arc::new(ApiService::new()),
            event_tx,
        };

        Self {
            event_rx,
            ctx,
            state: AppState::default(),
            router: Router::new(Box::new(Search::default())),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            AppLayout::new(self).render(frame, frame.area());
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
