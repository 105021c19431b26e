use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    constants::career_catalog::find_career_path,
    errors::{AppError, AppResult},
    models::{
        domain::Resume,
        dto::request::{CreateResumeRequest, UpdateResumeRequest},
    },
    repositories::ResumeRepository,
};

pub struct ResumeService {
    repository: Arc<dyn ResumeRepository>,
}

impl ResumeService {
    pub fn new(repository: Arc<dyn ResumeRepository>) -> Self {
        Self { repository }
    }

    /// Creates an empty resume, or one seeded from a catalog career path.
    pub async fn create_resume(&self, request: CreateResumeRequest) -> AppResult<Resume> {
        request.validate()?;

        let resume = match request.career_path_id.as_deref() {
            Some(id) => {
                let career_path = find_career_path(id).ok_or_else(|| {
                    AppError::ValidationError(format!("Unknown career path '{}'", id))
                })?;
                Resume::for_career(career_path.clone())
            }
            None => Resume::empty(),
        };

        let resume = self.repository.save(resume).await?;
        log::info!("Created resume {}", resume.id);
        Ok(resume)
    }

    pub async fn get_resume(&self, id: &str) -> AppResult<Resume> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resume with id '{}' not found", id)))
    }

    /// Most recently updated first.
    pub async fn get_all_resumes(&self) -> AppResult<Vec<Resume>> {
        let mut resumes = self.repository.find_all().await?;
        resumes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(resumes)
    }

    /// Replaces the resume's contents, creating it under `id` if it does not
    /// exist yet. A stored `created_at` is kept. A new resume takes the one
    /// the client sent, or now.
    pub async fn update_resume(
        &self,
        id: &str,
        request: UpdateResumeRequest,
    ) -> AppResult<Resume> {
        let request = request.normalized();
        request.validate()?;

        let now = Utc::now();
        let created_at = match self.repository.find_by_id(id).await? {
            Some(existing) => existing.created_at,
            None => request.created_at.unwrap_or(now),
        };

        let resume = Resume {
            id: id.to_string(),
            name: request.name,
            email: request.email.unwrap_or_default(),
            phone: request.phone,
            objective: request.objective,
            education: request.education,
            experience: request.experience,
            skills: request.skills,
            projects: request.projects,
            certifications: request.certifications,
            created_at,
            updated_at: now,
            career_path: request.career_path,
        };

        self.repository.save(resume).await
    }

    pub async fn delete_resume(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Deleted resume {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryResumeRepository;

    fn service() -> ResumeService {
        ResumeService::new(Arc::new(InMemoryResumeRepository::new()))
    }

    #[tokio::test]
    async fn create_from_career_path_seeds_objective() {
        let resume = service()
            .create_resume(CreateResumeRequest {
                career_path_id: Some("frontend-developer".to_string()),
            })
            .await
            .expect("create should succeed");

        assert!(resume
            .objective
            .starts_with("Seeking a position as a Frontend Developer to leverage my skills in "));
        assert!(!resume.skills.is_empty());
        assert_eq!(
            resume.career_path.map(|p| p.id),
            Some("frontend-developer".to_string())
        );
    }

    #[tokio::test]
    async fn unknown_career_path_is_rejected() {
        let result = service()
            .create_resume(CreateResumeRequest {
                career_path_id: Some("astronaut".to_string()),
            })
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn update_keeps_created_at_and_refreshes_updated_at() {
        let service = service();
        let created = service
            .create_resume(CreateResumeRequest::default())
            .await
            .expect("create should succeed");

        let updated = service
            .update_resume(
                &created.id,
                UpdateResumeRequest {
                    name: "Ada Lovelace".to_string(),
                    email: Some("ada@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("update should succeed");

        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(service.get_resume(&created.id).await.expect("get").name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn update_of_missing_resume_creates_it() {
        let service = service();

        service
            .update_resume("imported-1", UpdateResumeRequest::default())
            .await
            .expect("upsert should succeed");

        assert!(service.get_resume("imported-1").await.is_ok());
    }

    #[tokio::test]
    async fn fetched_resume_can_be_sent_back_unchanged() {
        let service = service();
        let created = service
            .create_resume(CreateResumeRequest {
                career_path_id: Some("data-analyst".to_string()),
            })
            .await
            .expect("create should succeed");
        assert!(created.email.is_empty());

        let body = serde_json::to_value(&created).expect("resume should serialize");
        let request: UpdateResumeRequest =
            serde_json::from_value(body).expect("resume should deserialize as an update");

        let updated = service
            .update_resume(&created.id, request)
            .await
            .expect("unchanged resume should be accepted");
        let fetched = service.get_resume(&created.id).await.expect("get");

        assert_eq!(fetched, updated);
        assert_eq!(
            Resume {
                updated_at: created.updated_at,
                ..fetched
            },
            created
        );
    }

    #[tokio::test]
    async fn upsert_keeps_the_client_created_at() {
        let service = service();
        let created_at = Utc::now() - chrono::Duration::days(3);

        let resume = service
            .update_resume(
                "imported-2",
                UpdateResumeRequest {
                    name: "Grace".to_string(),
                    created_at: Some(created_at),
                    ..Default::default()
                },
            )
            .await
            .expect("upsert should succeed");

        assert_eq!(resume.created_at, created_at);
        assert!(resume.updated_at > created_at);
        assert_eq!(
            service.get_resume("imported-2").await.expect("get").created_at,
            created_at
        );
    }

    #[tokio::test]
    async fn list_is_most_recently_updated_first() {
        let service = service();
        let first = service.create_resume(CreateResumeRequest::default()).await.expect("create");
        let second = service.create_resume(CreateResumeRequest::default()).await.expect("create");

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        service
            .update_resume(&first.id, UpdateResumeRequest::default())
            .await
            .expect("update");

        let ids: Vec<String> = service
            .get_all_resumes()
            .await
            .expect("list")
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn delete_missing_resume_is_not_found() {
        let result = service().delete_resume("nope").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
