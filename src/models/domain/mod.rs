pub mod career_path;
pub mod opponent;
pub mod quiz_question;
pub mod quiz_session;
pub mod quiz_settings;
pub mod resume;
pub use career_path::{CareerDomain, CareerPath};
pub use opponent::{MatchResult, Opponent, OpponentKind};
pub use quiz_question::{QuizOption, QuizQuestion};
pub use quiz_session::{AnswerVerdict, QuizOutcome, QuizResults, QuizSessionState, QuizStage};
pub use quiz_settings::{Difficulty, OpponentType, QuizSettings};
pub use resume::Resume;
