//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth subsystem.

pub mod user;

pub use user::UserService;
