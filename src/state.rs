// src/state.rs
use std::sync::Arc;

use minijinja::Environment;
use tokio::sync::{Mutex, watch};
use tracing::info;

use crate::components::career_filter::{CareerFilter, FilterCriteria};
use crate::services::{ask_client::AskService, chat::Chat};
use crate::view;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub chat: Mutex<Chat>,
    pub filter: Mutex<CareerFilter>,
    pub active_filters: watch::Receiver<FilterCriteria>,
    pub asker: Arc<dyn AskService>,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(asker: Arc<dyn AskService>, seed_greeting: bool) -> anyhow::Result<Self> {
        let (filters_tx, active_filters) = watch::channel(FilterCriteria::default());
        let filter = CareerFilter::new(move |criteria| {
            info!(?criteria, "career filters changed");
            filters_tx.send_replace(*criteria);
        });

        Ok(Self {
            chat: Mutex::new(Chat::new(seed_greeting)),
            filter: Mutex::new(filter),
            active_filters,
            asker,
            templates: view::templates()?,
        })
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
