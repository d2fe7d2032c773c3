use std::sync::Arc;

use flume::Sender;

use crate::{api::ApiService, event::events::Event};

pub struct AppContext {
    pub api: Arc<ApiService>,
    pub event_tx: Sender<Event>,
}
