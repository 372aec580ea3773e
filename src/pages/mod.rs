//! Pages
//!
//! Top-level screens, one per route.

mod manage_roadmap_page;
mod post_roadmap_panel;
mod roadmap_page;

pub use manage_roadmap_page::ManageRoadmapPage;
pub use post_roadmap_panel::PostRoadmapPanel;
pub use roadmap_page::RoadmapPage;
