use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::dto::request::RecordInteractionRequest,
    repositories::InteractionRepository,
};

/// Remembers what each client has been asking about, for career suggestions.
pub struct InteractionService {
    repository: Arc<dyn InteractionRepository>,
}

impl InteractionService {
    pub fn new(repository: Arc<dyn InteractionRepository>) -> Self {
        Self { repository }
    }

    /// Stores the trimmed query. Whitespace-only input is rejected.
    pub async fn record(
        &self,
        client_id: &str,
        request: RecordInteractionRequest,
    ) -> AppResult<Vec<String>> {
        let request = RecordInteractionRequest {
            query: request.query.trim().to_string(),
        };
        request.validate()?;

        let queries = self.repository.push(client_id, request.query).await?;
        log::debug!("Client {} now has {} tracked queries", client_id, queries.len());
        Ok(queries)
    }

    pub async fn recent(&self, client_id: &str) -> AppResult<Vec<String>> {
        self.repository.recent(client_id).await
    }

    pub async fn clear(&self, client_id: &str) -> AppResult<()> {
        self.repository.clear(client_id).await
    }
}
