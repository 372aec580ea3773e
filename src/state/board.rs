//! Public board state
//!
//! Every mutation is followed by a full reload, whether it succeeded or not.
//! A failed move therefore also reverts anything the UI may have shown.

use super::StateCell;
use crate::error::ApiResult;
use crate::i18n::t;
use crate::models::RoadmapData;
use crate::services::RoadmapApi;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub loading: bool,
    pub data: Option<RoadmapData>,
    pub error: Option<String>,
}

/// What the board page should render
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Ready(&'a RoadmapData),
}

impl Default for BoardState {
    fn default() -> Self {
        Self { loading: true, data: None, error: None }
    }
}

impl BoardState {
    pub fn view(&self) -> BoardView<'_> {
        if self.loading {
            return BoardView::Loading;
        }
        if let Some(error) = &self.error {
            return BoardView::Error(error);
        }
        match &self.data {
            Some(data) if !data.columns.is_empty() => BoardView::Ready(data),
            _ => BoardView::Empty,
        }
    }

    fn begin_load(&mut self) {
        *self = BoardState::default();
    }

    fn finish_load(&mut self, result: ApiResult<RoadmapData>) {
        self.loading = false;
        match result {
            Ok(data) => {
                log::debug!("[ROADMAP] loaded {} columns", data.columns.len());
                self.data = Some(data);
            }
            Err(e) => {
                log::error!("[ROADMAP] failed to load board: {}", e);
                self.error = Some(t("roadmap.error.loading"));
            }
        }
    }
}

/// Replace the board with a fresh snapshot
pub async fn load_board(api: &impl RoadmapApi, cell: &impl StateCell<BoardState>) {
    cell.modify(BoardState::begin_load);
    let result = api.get_roadmap().await;
    cell.modify(|state| state.finish_load(result));
}

/// Move a post into `to_column_id` at `new_position`, then reload
pub async fn move_post(
    api: &impl RoadmapApi,
    cell: &impl StateCell<BoardState>,
    post_number: i64,
    from_column_id: i64,
    to_column_id: i64,
    new_position: i32,
) {
    if let Err(e) = api.assign_post_to_column(post_number, to_column_id, new_position).await {
        log::warn!(
            "[ROADMAP] failed to move post #{} from column {} to {}: {}",
            post_number, from_column_id, to_column_id, e
        );
    }
    load_board(api, cell).await;
}

/// Take a post off the roadmap, then reload
pub async fn remove_post(api: &impl RoadmapApi, cell: &impl StateCell<BoardState>, post_number: i64) {
    if let Err(e) = api.remove_post_from_roadmap(post_number).await {
        log::warn!("[ROADMAP] failed to remove post #{}: {}", post_number, e);
    }
    load_board(api, cell).await;
}

/// Post numbers of the post's column in display order after moving it to
/// `new_position` (clamped to the column). `None` when the post is not on
/// the board.
pub fn reordered_posts(data: &RoadmapData, post_number: i64, new_position: i32) -> Option<Vec<i64>> {
    let column = data.column_of_post(post_number)?;
    let mut numbers: Vec<i64> = column.posts.iter().map(|p| p.number).collect();
    let from = numbers.iter().position(|n| *n == post_number)?;
    let to = usize::try_from(new_position).unwrap_or(0).min(numbers.len() - 1);
    let moved = numbers.remove(from);
    numbers.insert(to, moved);
    Some(numbers)
}

/// Change a post's order within its current column, then reload.
///
/// The server stores positions as given without shifting siblings, and
/// assignments usually tie at 0, so every post of the column is renumbered
/// to its new display index.
pub async fn reposition_post(
    api: &impl RoadmapApi,
    cell: &impl StateCell<BoardState>,
    post_number: i64,
    new_position: i32,
) {
    let order = cell.with_state(|state| {
        state.data.as_ref().and_then(|data| reordered_posts(data, post_number, new_position))
    });
    let updates: Vec<(i64, i32)> = match order {
        Some(numbers) => numbers.into_iter().zip(0..).collect(),
        None => vec![(post_number, new_position)],
    };
    for (number, position) in updates {
        if let Err(e) = api.reorder_post_in_column(number, position).await {
            log::warn!("[ROADMAP] failed to reposition post #{} to {}: {}", number, position, e);
            break;
        }
    }
    load_board(api, cell).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory::{post, MemoryRoadmap};
    use std::cell::RefCell;

    fn board_api() -> MemoryRoadmap {
        MemoryRoadmap::new()
            .with_column("Planned", true)
            .with_column("Done", true)
            .with_post(post(7, "Dark mode"), Some(2))
    }

    #[test]
    fn test_initial_view_is_loading() {
        assert_eq!(BoardState::default().view(), BoardView::Loading);
    }

    #[tokio::test]
    async fn test_load_ready() {
        let api = board_api();
        let cell = RefCell::new(BoardState::default());

        load_board(&api, &cell).await;

        let state = cell.borrow();
        match state.view() {
            BoardView::Ready(data) => {
                assert_eq!(data.columns.len(), 2);
                assert_eq!(data.columns[1].posts[0].number, 7);
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_empty() {
        let api = MemoryRoadmap::new();
        let cell = RefCell::new(BoardState::default());
        load_board(&api, &cell).await;
        assert_eq!(cell.borrow().view(), BoardView::Empty);
    }

    #[tokio::test]
    async fn test_load_failure_shows_message() {
        let api = board_api();
        api.fail_next("get_roadmap");
        let cell = RefCell::new(BoardState::default());

        load_board(&api, &cell).await;

        assert_eq!(cell.borrow().view(), BoardView::Error("Failed to load roadmap"));
    }

    #[tokio::test]
    async fn test_remove_post_then_reload() {
        let api = board_api();
        let cell = RefCell::new(BoardState::default());
        load_board(&api, &cell).await;
        api.clear_calls();

        remove_post(&api, &cell, 7).await;

        assert_eq!(api.calls(), vec!["remove_post_from_roadmap", "get_roadmap"]);
        let state = cell.borrow();
        let data = state.data.as_ref().unwrap();
        assert!(data.columns[1].posts.is_empty());
        assert!(data.column_of_post(7).is_none());
    }

    #[tokio::test]
    async fn test_move_post_between_columns() {
        let api = board_api();
        let cell = RefCell::new(BoardState::default());

        move_post(&api, &cell, 7, 2, 1, 0).await;

        let state = cell.borrow();
        assert_eq!(state.data.as_ref().unwrap().column_of_post(7).map(|c| c.id), Some(1));
    }

    #[tokio::test]
    async fn test_failed_move_still_reloads() {
        let api = board_api();
        let cell = RefCell::new(BoardState::default());
        api.fail_next("assign_post_to_column");

        move_post(&api, &cell, 7, 2, 1, 0).await;

        assert_eq!(api.calls(), vec!["assign_post_to_column", "get_roadmap"]);
        let state = cell.borrow();
        assert!(state.error.is_none());
        assert_eq!(state.data.as_ref().unwrap().column_of_post(7).map(|c| c.id), Some(2));
    }

    #[tokio::test]
    async fn test_failed_remove_still_reloads() {
        let api = board_api();
        let cell = RefCell::new(BoardState::default());
        api.fail_next("remove_post_from_roadmap");

        remove_post(&api, &cell, 7).await;

        assert_eq!(api.call_count("get_roadmap"), 1);
        assert!(cell.borrow().data.as_ref().unwrap().column_of_post(7).is_some());
    }

    #[tokio::test]
    async fn test_assign_then_remove_leaves_post_nowhere() {
        let api = board_api().with_post(post(9, "Export"), None);
        let cell = RefCell::new(BoardState::default());

        move_post(&api, &cell, 9, 0, 2, 1).await;
        assert_eq!(cell.borrow().data.as_ref().unwrap().column_of_post(9).map(|c| c.id), Some(2));

        remove_post(&api, &cell, 9).await;
        assert!(cell.borrow().data.as_ref().unwrap().column_of_post(9).is_none());
    }

    #[tokio::test]
    async fn test_reposition_post() {
        let api = board_api().with_post(post(8, "Search"), Some(2));
        let cell = RefCell::new(BoardState::default());
        load_board(&api, &cell).await;

        reposition_post(&api, &cell, 7, 4).await;

        let state = cell.borrow();
        let numbers: Vec<i64> = state.data.as_ref().unwrap().columns[1].posts.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![8, 7]);
    }

    fn column_numbers(cell: &RefCell<BoardState>, index: usize) -> Vec<i64> {
        cell.borrow().data.as_ref().unwrap().columns[index].posts.iter().map(|p| p.number).collect()
    }

    #[tokio::test]
    async fn test_move_up_after_assignments_at_top() {
        let api = MemoryRoadmap::new()
            .with_column("Planned", true)
            .with_post(post(1, "One"), None)
            .with_post(post(2, "Two"), None)
            .with_post(post(3, "Three"), None);
        let cell = RefCell::new(BoardState::default());
        for number in 1..=3 {
            move_post(&api, &cell, number, 0, 1, 0).await;
        }
        assert_eq!(column_numbers(&cell, 0), vec![1, 2, 3]);
        api.clear_calls();

        reposition_post(&api, &cell, 3, 1).await;

        assert_eq!(column_numbers(&cell, 0), vec![1, 3, 2]);
        assert_eq!(api.call_count("reorder_post_in_column"), 3);
        assert_eq!(api.calls().last().map(String::as_str), Some("get_roadmap"));
    }

    #[tokio::test]
    async fn test_move_down_from_top() {
        let api = MemoryRoadmap::new()
            .with_column("Planned", true)
            .with_post(post(1, "One"), Some(1))
            .with_post(post(2, "Two"), Some(1));
        let cell = RefCell::new(BoardState::default());
        load_board(&api, &cell).await;

        reposition_post(&api, &cell, 1, 1).await;

        assert_eq!(column_numbers(&cell, 0), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_failed_reposition_stops_and_reloads() {
        let api = MemoryRoadmap::new()
            .with_column("Planned", true)
            .with_post(post(1, "One"), Some(1))
            .with_post(post(2, "Two"), Some(1));
        let cell = RefCell::new(BoardState::default());
        load_board(&api, &cell).await;
        api.clear_calls();
        api.fail_next("reorder_post_in_column");

        reposition_post(&api, &cell, 2, 0).await;

        assert_eq!(api.calls(), vec!["reorder_post_in_column", "get_roadmap"]);
        assert_eq!(column_numbers(&cell, 0), vec![1, 2]);
    }

    #[test]
    fn test_reordered_posts_clamps() {
        let data = RoadmapData {
            columns: vec![crate::models::RoadmapColumn {
                id: 1,
                name: "Planned".into(),
                slug: "planned".into(),
                position: 0,
                is_visible_to_public: true,
                posts: vec![post(1, "One"), post(2, "Two"), post(3, "Three")],
            }],
        };
        assert_eq!(reordered_posts(&data, 1, 9), Some(vec![2, 3, 1]));
        assert_eq!(reordered_posts(&data, 3, 0), Some(vec![3, 1, 2]));
        assert_eq!(reordered_posts(&data, 4, 0), None);
    }
}
