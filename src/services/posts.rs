//! Post Lookup
//!
//! Read-only access to the post subsystem.

use super::http::ApiClient;
use crate::error::ApiResult;
use crate::models::Post;

pub async fn get_post(client: &ApiClient, number: i64) -> ApiResult<Post> {
    client.get(&format!("/api/v1/posts/{}", number)).await
}
