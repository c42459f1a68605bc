//! Database repositories

mod contest_repo;
mod group_repo;
mod question_repo;
mod submission_repo;
mod user_repo;

pub use contest_repo::ContestRepository;
pub use group_repo::GroupRepository;
pub use question_repo::QuestionRepository;
pub use submission_repo::{SubmissionRepository, SubmissionScope};
pub use user_repo::UserRepository;
