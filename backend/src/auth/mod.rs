//! Authentication module
//!
//! JWT-based authentication with argon2 password hashing and role-based
//! authorization middleware.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, TokenService};
pub use middleware::{authenticate, require_roles, Principal};
pub use password::PasswordService;
