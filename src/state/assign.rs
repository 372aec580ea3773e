//! Assign-to-roadmap modal state

use super::StateCell;
use crate::i18n::t;
use crate::models::RoadmapColumn;
use crate::services::RoadmapApi;

/// Assignments from the modal always go to the top of the column
const ASSIGN_POSITION: i32 = 0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignState {
    pub columns: Vec<RoadmapColumn>,
    pub selected_column_id: Option<i64>,
    pub in_flight: bool,
    pub error: Option<String>,
}

impl AssignState {
    pub fn can_assign(&self) -> bool {
        !self.in_flight && self.selected_column_id.is_some()
    }

    pub fn can_remove(&self) -> bool {
        !self.in_flight
    }

    /// Select from the `<select>` value; empty or invalid clears the selection
    pub fn select(&mut self, value: &str) {
        self.selected_column_id = value.parse::<i64>().ok().filter(|id| *id > 0);
    }

    fn begin_request(&mut self) {
        self.in_flight = true;
        self.error = None;
    }

    fn finish_request(&mut self, error_id: Option<&str>) {
        self.in_flight = false;
        self.error = error_id.map(t);
    }
}

/// Fresh state and column list each time the modal opens
pub async fn open_assign_modal(api: &impl RoadmapApi, cell: &impl StateCell<AssignState>) {
    cell.modify(|state| *state = AssignState::default());
    match api.get_roadmap().await {
        Ok(data) => cell.modify(|state| state.columns = data.columns),
        Err(e) => {
            log::error!("[ASSIGN] failed to load roadmap columns: {}", e);
            cell.modify(|state| state.error = Some(t("roadmap.modal.error.loading")));
        }
    }
}

/// Assign the post to the selected column. Returns true when the modal should close.
pub async fn assign_post(api: &impl RoadmapApi, cell: &impl StateCell<AssignState>, post_number: i64) -> bool {
    let Some(column_id) = cell.with_state(|state| state.can_assign().then_some(state.selected_column_id).flatten())
    else {
        return false;
    };
    cell.modify(AssignState::begin_request);
    match api.assign_post_to_column(post_number, column_id, ASSIGN_POSITION).await {
        Ok(()) => {
            cell.modify(|state| state.finish_request(None));
            true
        }
        Err(e) => {
            log::error!("[ASSIGN] failed to assign post #{} to column {}: {}", post_number, column_id, e);
            cell.modify(|state| state.finish_request(Some("roadmap.modal.error.assigning")));
            false
        }
    }
}

/// Remove the post from the roadmap, assigned or not. Returns true when the modal should close.
pub async fn unassign_post(api: &impl RoadmapApi, cell: &impl StateCell<AssignState>, post_number: i64) -> bool {
    if !cell.with_state(AssignState::can_remove) {
        return false;
    }
    cell.modify(AssignState::begin_request);
    match api.remove_post_from_roadmap(post_number).await {
        Ok(()) => {
            cell.modify(|state| state.finish_request(None));
            true
        }
        Err(e) => {
            log::error!("[ASSIGN] failed to remove post #{}: {}", post_number, e);
            cell.modify(|state| state.finish_request(Some("roadmap.modal.error.removing")));
            false
        }
    }
}
