//! In-memory roadmap backend for tests.
//!
//! Mirrors the server's behavior (positions, cascading deletes, validation)
//! and records every call so tests can assert on request sequences.

use std::cell::RefCell;
use std::collections::HashSet;

use async_trait::async_trait;

use super::roadmap::{validate_column_name, validate_column_order, validate_id, validate_position, RoadmapApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{Post, RoadmapColumn, RoadmapData};

#[derive(Debug, Clone)]
struct Assignment {
    post_number: i64,
    column_id: i64,
    position: i32,
}

#[derive(Default)]
struct Inner {
    columns: Vec<RoadmapColumn>,
    posts: Vec<Post>,
    assignments: Vec<Assignment>,
    next_id: i64,
    calls: Vec<String>,
    failing: HashSet<String>,
}

#[derive(Default)]
pub struct MemoryRoadmap {
    inner: RefCell<Inner>,
}

impl MemoryRoadmap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column directly (no call recorded)
    pub fn with_column(self, name: &str, is_visible_to_public: bool) -> Self {
        {
            let mut inner = self.inner.borrow_mut();
            inner.insert_column(name, is_visible_to_public);
        }
        self
    }

    /// Register a post and optionally place it in a column at position 0,
    /// as the modal and the column move buttons do
    pub fn with_post(self, post: Post, column_id: Option<i64>) -> Self {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(column_id) = column_id {
                inner.assignments.push(Assignment { post_number: post.number, column_id, position: 0 });
            }
            inner.posts.push(post);
        }
        self
    }

    /// Make the next call of `op` fail with a 500
    pub fn fail_next(&self, op: &str) {
        self.inner.borrow_mut().failing.insert(op.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.borrow().calls.clone()
    }

    pub fn call_count(&self, op: &str) -> usize {
        self.inner.borrow().calls.iter().filter(|c| c.as_str() == op).count()
    }

    pub fn clear_calls(&self) {
        self.inner.borrow_mut().calls.clear();
    }

    fn record(&self, op: &str) -> ApiResult<()> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(op.to_string());
        if inner.failing.remove(op) {
            return Err(ApiError::Status { status: 500, body: format!("{} failed", op) });
        }
        Ok(())
    }
}

impl Inner {
    fn insert_column(&mut self, name: &str, is_visible_to_public: bool) -> i64 {
        self.next_id += 1;
        let position = self.columns.iter().map(|c| c.position + 1).max().unwrap_or(0);
        let id = self.next_id;
        self.columns.push(RoadmapColumn {
            id,
            name: name.to_string(),
            slug: slugify(name),
            position,
            is_visible_to_public,
            posts: Vec::new(),
        });
        id
    }

    fn column_mut(&mut self, id: i64) -> ApiResult<&mut RoadmapColumn> {
        self.columns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::Status { status: 404, body: "column not found".into() })
    }

    fn sorted_columns(&self) -> Vec<RoadmapColumn> {
        let mut columns = self.columns.clone();
        columns.sort_by_key(|c| c.position);
        columns
    }
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[async_trait(?Send)]
impl RoadmapApi for MemoryRoadmap {
    async fn get_roadmap(&self) -> ApiResult<RoadmapData> {
        self.record("get_roadmap")?;
        let inner = self.inner.borrow();
        let columns = inner
            .sorted_columns()
            .into_iter()
            .map(|mut column| {
                let mut assigned: Vec<&Assignment> =
                    inner.assignments.iter().filter(|a| a.column_id == column.id).collect();
                assigned.sort_by_key(|a| a.position);
                column.posts = assigned
                    .iter()
                    .filter_map(|a| inner.posts.iter().find(|p| p.number == a.post_number).cloned())
                    .collect();
                column
            })
            .collect();
        Ok(RoadmapData { columns })
    }

    async fn get_columns(&self) -> ApiResult<Vec<RoadmapColumn>> {
        self.record("get_columns")?;
        Ok(self.inner.borrow().sorted_columns())
    }

    async fn create_column(&self, name: &str, is_visible_to_public: bool) -> ApiResult<()> {
        self.record("create_column")?;
        let name = validate_column_name(name)?;
        self.inner.borrow_mut().insert_column(name, is_visible_to_public);
        Ok(())
    }

    async fn update_column(&self, id: i64, name: &str, is_visible_to_public: bool) -> ApiResult<()> {
        self.record("update_column")?;
        let name = validate_column_name(name)?;
        let mut inner = self.inner.borrow_mut();
        let column = inner.column_mut(id)?;
        column.name = name.to_string();
        column.slug = slugify(name);
        column.is_visible_to_public = is_visible_to_public;
        Ok(())
    }

    async fn delete_column(&self, id: i64) -> ApiResult<()> {
        self.record("delete_column")?;
        let mut inner = self.inner.borrow_mut();
        inner.column_mut(id)?;
        inner.columns.retain(|c| c.id != id);
        inner.assignments.retain(|a| a.column_id != id);
        Ok(())
    }

    async fn reorder_columns(&self, ordered_ids: &[i64]) -> ApiResult<()> {
        self.record("reorder_columns")?;
        validate_column_order(ordered_ids)?;
        let mut inner = self.inner.borrow_mut();
        for (position, id) in ordered_ids.iter().enumerate() {
            inner.column_mut(*id)?.position = position as i32;
        }
        Ok(())
    }

    async fn assign_post_to_column(&self, post_number: i64, column_id: i64, position: i32) -> ApiResult<()> {
        self.record("assign_post_to_column")?;
        validate_id("Post number", post_number)?;
        validate_position(position)?;
        let mut inner = self.inner.borrow_mut();
        inner.column_mut(column_id)?;
        inner.assignments.retain(|a| a.post_number != post_number);
        inner.assignments.push(Assignment { post_number, column_id, position });
        Ok(())
    }

    async fn remove_post_from_roadmap(&self, post_number: i64) -> ApiResult<()> {
        self.record("remove_post_from_roadmap")?;
        self.inner.borrow_mut().assignments.retain(|a| a.post_number != post_number);
        Ok(())
    }

    async fn reorder_post_in_column(&self, post_number: i64, new_position: i32) -> ApiResult<()> {
        self.record("reorder_post_in_column")?;
        validate_position(new_position)?;
        let mut inner = self.inner.borrow_mut();
        let assignment = inner
            .assignments
            .iter_mut()
            .find(|a| a.post_number == post_number)
            .ok_or_else(|| ApiError::Status { status: 404, body: "post not on roadmap".into() })?;
        assignment.position = new_position;
        Ok(())
    }
}

/// Minimal post fixture
pub fn post(number: i64, title: &str) -> Post {
    Post {
        id: number * 10,
        number,
        title: title.to_string(),
        slug: slugify(title),
        description: String::new(),
        status: "open".to_string(),
        votes_count: 0,
        comments_count: 0,
        tags: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_cascades_assignments() {
        let api = MemoryRoadmap::new()
            .with_column("Planned", true)
            .with_column("Done", true)
            .with_post(post(7, "Dark mode"), Some(2));

        api.delete_column(2).await.unwrap();

        let board = api.get_roadmap().await.unwrap();
        assert_eq!(board.columns.len(), 1);
        assert!(board.column_of_post(7).is_none());
    }

    #[tokio::test]
    async fn test_reorder_columns_sets_positions() {
        let api = MemoryRoadmap::new()
            .with_column("A", true)
            .with_column("B", true)
            .with_column("C", true);

        api.reorder_columns(&[3, 1, 2]).await.unwrap();

        let names: Vec<String> = api.get_columns().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_reorder_post_within_column() {
        let api = MemoryRoadmap::new()
            .with_column("Planned", true)
            .with_post(post(1, "First"), Some(1))
            .with_post(post(2, "Second"), Some(1));

        api.reorder_post_in_column(1, 5).await.unwrap();

        let board = api.get_roadmap().await.unwrap();
        let numbers: Vec<i64> = board.columns[0].posts.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_fail_next_is_one_shot() {
        let api = MemoryRoadmap::new();
        api.fail_next("get_columns");
        assert!(api.get_columns().await.is_err());
        assert!(api.get_columns().await.is_ok());
        assert_eq!(api.call_count("get_columns"), 2);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("In Progress!"), "in-progress");
    }
}
