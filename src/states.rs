use crate::models::Post;
use dashmap::DashMap;
use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// `Arc` = Atomic Reference Counter
/// - Allows multiple threads to share ownership safely
/// - When last reference drops, data is cleaned up
///
/// `DashMap` = Thread-safe HashMap
/// - Can be read/written from multiple threads simultaneously
/// - No need for Mutex locks (handles it internally)
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<DashMap<i64, Post>>,
    next_id: Arc<AtomicI64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Hands out the next post id. Ids start at 1 and are never reused.
    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let state = AppState::new();
        assert_eq!(state.next_id(), 1);
        assert_eq!(state.next_id(), 2);
        assert_eq!(state.next_id(), 3);
    }

    #[test]
    fn clones_share_the_counter() {
        let state = AppState::new();
        let other = state.clone();
        assert_eq!(state.next_id(), 1);
        assert_eq!(other.next_id(), 2);
    }
}
