//! Business logic services

pub mod admission_service;
pub mod broadcast_service;
pub mod contest_service;
pub mod question_service;
pub mod scoring_service;
pub mod verification_service;

pub use admission_service::AdmissionService;
pub use broadcast_service::BroadcastService;
pub use contest_service::ContestService;
pub use question_service::QuestionService;
pub use scoring_service::ScoringService;
pub use verification_service::VerificationService;
