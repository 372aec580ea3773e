//! Roadmap Service
//!
//! One call per REST endpoint. No retry, caching or coalescing: every method
//! awaits a single round trip and hands the outcome back to the caller.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::http::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{RoadmapColumn, RoadmapData};

/// Longest column name the server accepts
pub const MAX_COLUMN_NAME_LEN: usize = 100;

const ROADMAP_PATH: &str = "/api/v1/roadmap";
const COLUMNS_PATH: &str = "/api/v1/admin/roadmap/columns";
const REORDER_COLUMNS_PATH: &str = "/api/v1/admin/roadmap/columns/reorder";

/// Roadmap operations.
///
/// `?Send` because the browser runtime drives these futures on one thread.
#[async_trait(?Send)]
pub trait RoadmapApi {
    /// Board snapshot (private columns included only for staff)
    async fn get_roadmap(&self) -> ApiResult<RoadmapData>;

    /// All columns, admin only
    async fn get_columns(&self) -> ApiResult<Vec<RoadmapColumn>>;

    async fn create_column(&self, name: &str, is_visible_to_public: bool) -> ApiResult<()>;

    async fn update_column(&self, id: i64, name: &str, is_visible_to_public: bool) -> ApiResult<()>;

    /// The server drops the column's post assignments with it
    async fn delete_column(&self, id: i64) -> ApiResult<()>;

    /// Server recomputes positions from the submitted order
    async fn reorder_columns(&self, ordered_ids: &[i64]) -> ApiResult<()>;

    /// Create or move the post's assignment
    async fn assign_post_to_column(&self, post_number: i64, column_id: i64, position: i32) -> ApiResult<()>;

    async fn remove_post_from_roadmap(&self, post_number: i64) -> ApiResult<()>;

    async fn reorder_post_in_column(&self, post_number: i64, new_position: i32) -> ApiResult<()>;
}

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct ColumnBody<'a> {
    name: &'a str,
    #[serde(rename = "isVisibleToPublic")]
    is_visible_to_public: bool,
}

#[derive(Serialize)]
struct ReorderColumnsBody<'a> {
    #[serde(rename = "columnIds")]
    column_ids: &'a [i64],
}

#[derive(Serialize)]
struct AssignBody {
    #[serde(rename = "postId")]
    post_id: i64,
    #[serde(rename = "columnId")]
    column_id: i64,
    position: i32,
}

#[derive(Serialize)]
struct PositionBody {
    #[serde(rename = "postId")]
    post_id: i64,
    #[serde(rename = "newPosition")]
    new_position: i32,
}

// ========================
// Input Guards
// ========================

/// Trimmed column name, or a validation error if blank or too long
pub fn validate_column_name(name: &str) -> ApiResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("Name is required".into()));
    }
    if name.chars().count() > MAX_COLUMN_NAME_LEN {
        return Err(ApiError::Validation(format!(
            "Name must be less than {} characters",
            MAX_COLUMN_NAME_LEN
        )));
    }
    Ok(name)
}

pub fn validate_id(field: &str, id: i64) -> ApiResult<()> {
    if id <= 0 {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn validate_position(position: i32) -> ApiResult<()> {
    if position < 0 {
        return Err(ApiError::Validation("Position must be non-negative".into()));
    }
    Ok(())
}

pub fn validate_column_order(ordered_ids: &[i64]) -> ApiResult<()> {
    if ordered_ids.is_empty() {
        return Err(ApiError::Validation("At least one column ID is required".into()));
    }
    ordered_ids.iter().try_for_each(|id| validate_id("Column ID", *id))
}

fn column_path(id: i64) -> String {
    format!("{}/{}", COLUMNS_PATH, id)
}

fn assign_path(post_number: i64) -> String {
    format!("{}/posts/{}/assign", ROADMAP_PATH, post_number)
}

fn position_path(post_number: i64) -> String {
    format!("{}/posts/{}/position", ROADMAP_PATH, post_number)
}

// ========================
// HTTP Implementation
// ========================

#[derive(Clone, Debug)]
pub struct HttpRoadmapService {
    client: ApiClient,
}

impl HttpRoadmapService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl RoadmapApi for HttpRoadmapService {
    async fn get_roadmap(&self) -> ApiResult<RoadmapData> {
        self.client.get(ROADMAP_PATH).await
    }

    async fn get_columns(&self) -> ApiResult<Vec<RoadmapColumn>> {
        self.client.get(COLUMNS_PATH).await
    }

    async fn create_column(&self, name: &str, is_visible_to_public: bool) -> ApiResult<()> {
        let name = validate_column_name(name)?;
        self.client
            .send_json(Method::POST, COLUMNS_PATH, &ColumnBody { name, is_visible_to_public })
            .await
    }

    async fn update_column(&self, id: i64, name: &str, is_visible_to_public: bool) -> ApiResult<()> {
        validate_id("Column ID", id)?;
        let name = validate_column_name(name)?;
        self.client
            .send_json(Method::PUT, &column_path(id), &ColumnBody { name, is_visible_to_public })
            .await
    }

    async fn delete_column(&self, id: i64) -> ApiResult<()> {
        validate_id("Column ID", id)?;
        self.client.delete(&column_path(id)).await
    }

    async fn reorder_columns(&self, ordered_ids: &[i64]) -> ApiResult<()> {
        validate_column_order(ordered_ids)?;
        self.client
            .send_json(Method::PUT, REORDER_COLUMNS_PATH, &ReorderColumnsBody { column_ids: ordered_ids })
            .await
    }

    async fn assign_post_to_column(&self, post_number: i64, column_id: i64, position: i32) -> ApiResult<()> {
        validate_id("Post number", post_number)?;
        validate_id("Column ID", column_id)?;
        validate_position(position)?;
        let body = AssignBody { post_id: post_number, column_id, position };
        self.client.send_json(Method::POST, &assign_path(post_number), &body).await
    }

    async fn remove_post_from_roadmap(&self, post_number: i64) -> ApiResult<()> {
        validate_id("Post number", post_number)?;
        self.client.delete(&assign_path(post_number)).await
    }

    async fn reorder_post_in_column(&self, post_number: i64, new_position: i32) -> ApiResult<()> {
        validate_id("Post number", post_number)?;
        validate_position(new_position)?;
        let body = PositionBody { post_id: post_number, new_position };
        self.client.send_json(Method::PUT, &position_path(post_number), &body).await
    }
}
