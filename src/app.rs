//! Roadmap Frontend App
//!
//! Provides the app context and picks the screen from the page path.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{ManageRoadmapPage, PostRoadmapPanel, RoadmapPage};

const MANAGE_ROADMAP_PATH: &str = "/admin/roadmap";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Roadmap,
    ManageRoadmap,
    Post(i64),
}

/// `/admin/roadmap` manages columns, `/posts/{number}[/{slug}]` shows the
/// post panel, everything else is the board.
pub fn route_for(path: &str) -> Route {
    let path = path.trim_end_matches('/');
    if path == MANAGE_ROADMAP_PATH {
        return Route::ManageRoadmap;
    }
    let mut segments = path.trim_start_matches('/').split('/');
    if segments.next() == Some("posts") {
        if let Some(number) = segments.next().and_then(|s| s.parse::<i64>().ok()) {
            if number > 0 {
                return Route::Post(number);
            }
        }
    }
    Route::Roadmap
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(config));

    let path = window().location().pathname().unwrap_or_default();
    let route = route_for(&path);
    log::info!("[APP] {} -> {:?}", path, route);

    match route {
        Route::Roadmap => view! { <RoadmapPage /> }.into_any(),
        Route::ManageRoadmap => view! { <ManageRoadmapPage /> }.into_any(),
        Route::Post(number) => view! { <PostRoadmapPanel post_number=number /> }.into_any(),
    }
}
