//! Domain models

pub mod contest;
pub mod group;
pub mod question;
pub mod submission;
pub mod user;

pub use contest::{Contest, ContestStatus};
pub use group::{GroupOnContest, StandingEntry};
pub use question::{Difficulty, Question, Tag};
pub use submission::{Submission, SubmissionStatus};
pub use user::User;
