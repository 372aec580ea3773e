//! UI Components
//!
//! Reusable Leptos components.

mod assign_to_roadmap_modal;
mod column_form;
mod delete_confirm_button;
mod modal;
mod roadmap_column;
mod roadmap_post_card;
mod visibility_toggle;

pub use assign_to_roadmap_modal::AssignToRoadmapModal;
pub use column_form::ColumnFormFields;
pub use delete_confirm_button::DeleteConfirmButton;
pub use modal::{Message, MessageKind, Modal};
pub use roadmap_column::RoadmapColumn;
pub use roadmap_post_card::RoadmapPostCard;
pub use visibility_toggle::VisibilityToggle;
