//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod application;
pub mod feedback;
pub mod job;
pub mod user;
pub mod work_log;

pub use application::{ApplicationListRecord, ApplicationRecord, ApplicationRepository};
pub use feedback::{FeedbackRecord, FeedbackRepository, NewFeedback};
pub use job::{JobRecord, JobRepository, NewJob};
pub use user::{NewUser, UpdateUser, UserRecord, UserRepository};
pub use work_log::{NewWorkLog, WorkLogRecord, WorkLogRepository};
