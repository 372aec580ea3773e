//! Admin column management state
//!
//! Loading, the create/edit forms and the CRUD flows for roadmap columns.

use super::StateCell;
use crate::error::ApiResult;
use crate::i18n::t;
use crate::models::RoadmapColumn;
use crate::services::RoadmapApi;

/// Name + visibility form shared by create and edit
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnForm {
    pub name: String,
    pub is_public: bool,
}

impl Default for ColumnForm {
    fn default() -> Self {
        Self { name: String::new(), is_public: true }
    }
}

impl ColumnForm {
    pub fn from_column(column: &RoadmapColumn) -> Self {
        Self { name: column.name.clone(), is_public: column.is_visible_to_public }
    }

    /// Submit stays disabled while the name is blank
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Column currently open in the edit form
#[derive(Debug, Clone, PartialEq)]
pub struct EditingColumn {
    pub column_id: i64,
    pub form: ColumnForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManageColumnsState {
    pub columns: Vec<RoadmapColumn>,
    pub loading: bool,
    pub error: Option<String>,
    pub show_create: bool,
    /// Kept across close/reopen until a create succeeds
    pub new_column: ColumnForm,
    pub editing: Option<EditingColumn>,
}

impl Default for ManageColumnsState {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            loading: true,
            error: None,
            show_create: false,
            new_column: ColumnForm::default(),
            editing: None,
        }
    }
}

impl ManageColumnsState {
    pub fn open_create(&mut self) {
        self.show_create = true;
    }

    pub fn close_create(&mut self) {
        self.show_create = false;
    }

    /// Open the edit form seeded from the column's current values
    pub fn start_edit(&mut self, column: &RoadmapColumn) {
        self.editing = Some(EditingColumn { column_id: column.id, form: ColumnForm::from_column(column) });
    }

    /// Discard local edits; nothing is sent
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Column ids in display order after moving `column_id` one step.
    /// `None` when the column is missing or already at that end.
    pub fn reordered_ids(&self, column_id: i64, direction: MoveDirection) -> Option<Vec<i64>> {
        let mut ids: Vec<i64> = self.columns.iter().map(|c| c.id).collect();
        let index = ids.iter().position(|id| *id == column_id)?;
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1)?,
            MoveDirection::Down => index + 1,
        };
        if target >= ids.len() {
            return None;
        }
        ids.swap(index, target);
        Some(ids)
    }

    fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish_load(&mut self, result: ApiResult<Vec<RoadmapColumn>>) {
        self.loading = false;
        match result {
            Ok(columns) => {
                log::debug!("[ADMIN] loaded {} roadmap columns", columns.len());
                self.columns = columns;
            }
            Err(e) => {
                log::error!("[ADMIN] failed to load roadmap columns: {}", e);
                self.error = Some(t("admin.roadmap.error.loading"));
            }
        }
    }

    fn fail(&mut self, message_id: &str) {
        self.error = Some(t(message_id));
    }
}

pub async fn load_columns(api: &impl RoadmapApi, cell: &impl StateCell<ManageColumnsState>) {
    cell.modify(ManageColumnsState::begin_load);
    let result = api.get_columns().await;
    cell.modify(|state| state.finish_load(result));
}

/// Create from the new-column form. A blank name issues no request.
/// On failure the form stays open with its contents for a retry.
pub async fn create_column(api: &impl RoadmapApi, cell: &impl StateCell<ManageColumnsState>) {
    let form = cell.with_state(|state| state.new_column.clone());
    if !form.can_submit() {
        return;
    }
    match api.create_column(form.name.trim(), form.is_public).await {
        Ok(()) => {
            cell.modify(|state| {
                state.show_create = false;
                state.new_column = ColumnForm::default();
            });
            load_columns(api, cell).await;
        }
        Err(e) => {
            log::error!("[ADMIN] failed to create column {:?}: {}", form.name, e);
            cell.modify(|state| state.fail("admin.roadmap.error.creating"));
        }
    }
}

/// Save the edit form. The form closes as soon as the save is issued.
pub async fn save_column(api: &impl RoadmapApi, cell: &impl StateCell<ManageColumnsState>) {
    let Some(editing) = cell.with_state(|state| state.editing.clone()) else {
        return;
    };
    if !editing.form.can_submit() {
        return;
    }
    cell.modify(ManageColumnsState::cancel_edit);
    match api
        .update_column(editing.column_id, editing.form.name.trim(), editing.form.is_public)
        .await
    {
        Ok(()) => load_columns(api, cell).await,
        Err(e) => {
            log::error!("[ADMIN] failed to update column {}: {}", editing.column_id, e);
            cell.modify(|state| state.fail("admin.roadmap.error.updating"));
        }
    }
}

/// Delete an already-confirmed column
pub async fn delete_column(api: &impl RoadmapApi, cell: &impl StateCell<ManageColumnsState>, column_id: i64) {
    match api.delete_column(column_id).await {
        Ok(()) => load_columns(api, cell).await,
        Err(e) => {
            log::error!("[ADMIN] failed to delete column {}: {}", column_id, e);
            cell.modify(|state| state.fail("admin.roadmap.error.deleting"));
        }
    }
}

/// Move a column one step and submit the full new order
pub async fn move_column(
    api: &impl RoadmapApi,
    cell: &impl StateCell<ManageColumnsState>,
    column_id: i64,
    direction: MoveDirection,
) {
    let Some(ids) = cell.with_state(|state| state.reordered_ids(column_id, direction)) else {
        return;
    };
    match api.reorder_columns(&ids).await {
        Ok(()) => load_columns(api, cell).await,
        Err(e) => {
            log::error!("[ADMIN] failed to reorder columns: {}", e);
            cell.modify(|state| state.fail("admin.roadmap.error.reordering"));
        }
    }
}
