//! Application Context
//!
//! Read-only configuration and session provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::{AppConfig, Session};
use crate::services::{ApiClient, HttpRoadmapService};

/// App-wide context; set once at mount and never mutated
#[derive(Clone, Debug)]
pub struct AppContext {
    config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn session(&self) -> Session {
        self.config.session
    }

    /// Staff get the move/remove controls on the board
    pub fn is_staff(&self) -> bool {
        self.config.session.is_staff()
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.config.api_base.clone())
    }

    pub fn roadmap_api(&self) -> HttpRoadmapService {
        HttpRoadmapService::new(self.api_client())
    }
}

/// Get the app context (panics if the app shell did not provide it)
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
