pub mod interaction_repository;
pub mod resume_repository;

pub use interaction_repository::{InMemoryInteractionRepository, InteractionRepository};
pub use resume_repository::{InMemoryResumeRepository, ResumeRepository};
