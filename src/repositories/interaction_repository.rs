use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::AppResult;

pub const MAX_TRACKED_QUERIES: usize = 5;

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Appends a query and returns the client's retained queries, oldest first.
    async fn push(&self, client_id: &str, query: String) -> AppResult<Vec<String>>;
    async fn recent(&self, client_id: &str) -> AppResult<Vec<String>>;
    async fn clear(&self, client_id: &str) -> AppResult<()>;
}

/// Keeps the last few queries per client.
pub struct InMemoryInteractionRepository {
    queries: RwLock<HashMap<String, Vec<String>>>,
    capacity: usize,
}

impl InMemoryInteractionRepository {
    pub fn new() -> Self {
        Self::with_capacity(MAX_TRACKED_QUERIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queries: RwLock::new(HashMap::new()),
            capacity,
        }
    }
}

impl Default for InMemoryInteractionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InteractionRepository for InMemoryInteractionRepository {
    async fn push(&self, client_id: &str, query: String) -> AppResult<Vec<String>> {
        let mut queries = self.queries.write().await;
        let entries = queries.entry(client_id.to_string()).or_default();

        entries.push(query);
        if entries.len() > self.capacity {
            let overflow = entries.len() - self.capacity;
            entries.drain(..overflow);
        }

        Ok(entries.clone())
    }

    async fn recent(&self, client_id: &str) -> AppResult<Vec<String>> {
        let queries = self.queries.read().await;
        Ok(queries.get(client_id).cloned().unwrap_or_default())
    }

    async fn clear(&self, client_id: &str) -> AppResult<()> {
        self.queries.write().await.remove(client_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keeps_only_the_most_recent_queries() {
        let repository = InMemoryInteractionRepository::new();

        for i in 0..7 {
            repository
                .push("client-a", format!("query {}", i))
                .await
                .expect("push should succeed");
        }

        let recent = repository.recent("client-a").await.expect("recent");
        assert_eq!(recent.len(), MAX_TRACKED_QUERIES);
        assert_eq!(recent.first().map(String::as_str), Some("query 2"));
        assert_eq!(recent.last().map(String::as_str), Some("query 6"));
    }

    #[tokio::test]
    async fn clients_are_isolated() {
        let repository = InMemoryInteractionRepository::new();
        repository.push("client-a", "rust".to_string()).await.expect("push");

        assert!(repository.recent("client-b").await.expect("recent").is_empty());

        repository.clear("client-a").await.expect("clear");
        assert!(repository.recent("client-a").await.expect("recent").is_empty());
    }
}
