//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the analytics backend.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login form, token response, role identifiers
//! - [`academic`] - Course listing, per-course analytics, grades
//! - [`wellbeing`] - Survey records, weekly trends, risk alerts
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/token
//! Content-Type: application/x-www-form-urlencoded
//!
//! username=director&password=secret
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "token_type": "bearer",
//!   "role": "course_director",
//!   "username": "director"
//! }
//! ```

pub mod academic;
pub mod auth;
pub mod wellbeing;

pub use academic::*;
pub use auth::*;
pub use wellbeing::*;
