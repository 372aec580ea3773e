//! Frontend Models
//!
//! Data structures matching the roadmap API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post summary (owned by the post subsystem, read-only here)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    /// Public-facing number used in URLs
    pub number: i64,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub votes_count: i64,
    #[serde(default)]
    pub comments_count: i64,
    /// Tag slugs
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

/// Roadmap column with its posts in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapColumn {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub position: i32,
    pub is_visible_to_public: bool,
    /// Admin listings send `null` here
    #[serde(default, deserialize_with = "null_as_empty")]
    pub posts: Vec<Post>,
}

/// Full board snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub columns: Vec<RoadmapColumn>,
}

impl RoadmapData {
    /// Column currently holding the given post, if any
    pub fn column_of_post(&self, post_number: i64) -> Option<&RoadmapColumn> {
        self.columns
            .iter()
            .find(|column| column.posts.iter().any(|p| p.number == post_number))
    }
}

/// Link of one post into one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapAssignment {
    pub id: i64,
    pub post_id: i64,
    pub column_id: i64,
    pub tenant_id: i64,
    pub position: i32,
    pub assigned_at: DateTime<Utc>,
    pub assigned_by_id: i64,
}

/// Post workflow status as shown on cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStatus {
    Open,
    Started,
    Completed,
    Declined,
    Planned,
    Duplicate,
    Deleted,
}

impl PostStatus {
    /// Parse the wire value; anything unrecognised is treated as open
    pub fn get(value: &str) -> Self {
        match value {
            "started" => Self::Started,
            "completed" => Self::Completed,
            "declined" => Self::Declined,
            "planned" => Self::Planned,
            "duplicate" => Self::Duplicate,
            "deleted" => Self::Deleted,
            _ => Self::Open,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Started => "Started",
            Self::Completed => "Completed",
            Self::Declined => "Declined",
            Self::Planned => "Planned",
            Self::Duplicate => "Duplicate",
            Self::Deleted => "Deleted",
        }
    }

    /// CSS modifier for the status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Open => "c-status--open",
            Self::Started => "c-status--started",
            Self::Completed => "c-status--completed",
            Self::Declined => "c-status--declined",
            Self::Planned => "c-status--planned",
            Self::Duplicate => "c-status--duplicate",
            Self::Deleted => "c-status--deleted",
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
