use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Resume,
};

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Resume>>;
    async fn find_all(&self) -> AppResult<Vec<Resume>>;
    /// Inserts or replaces by id.
    async fn save(&self, resume: Resume) -> AppResult<Resume>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct InMemoryResumeRepository {
    resumes: RwLock<HashMap<String, Resume>>,
}

impl InMemoryResumeRepository {
    pub fn new() -> Self {
        Self {
            resumes: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryResumeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResumeRepository for InMemoryResumeRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Resume>> {
        let resumes = self.resumes.read().await;
        Ok(resumes.get(id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Resume>> {
        let resumes = self.resumes.read().await;
        Ok(resumes.values().cloned().collect())
    }

    async fn save(&self, resume: Resume) -> AppResult<Resume> {
        let mut resumes = self.resumes.write().await;
        resumes.insert(resume.id.clone(), resume.clone());
        Ok(resume)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut resumes = self.resumes.write().await;
        resumes
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Resume with id '{}' not found", id)))
    }
}
