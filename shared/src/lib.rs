//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard client and the
//! analytics backend. All DTOs use JSON serialization via `serde`, except the
//! login form which the backend expects as `application/x-www-form-urlencoded`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login form, token response and role identifiers
//!   - **[`dto::academic`]**: Courses, grades and course analytics
//!   - **[`dto::wellbeing`]**: Surveys, weekly trends and risk alerts
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust and in JSON
//! - Timestamps are naive ISO-8601 datetimes as emitted by the backend
//! - Role identifiers serialize as `course_director` / `wellbeing_officer`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginForm, TokenResponse};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let form = LoginForm {
//!     username: "director".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: TokenResponse = reqwest::Client::new()
//!     .post("http://127.0.0.1:8080/auth/token")
//!     .form(&form)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//!
//! println!("{} logged in as {}", response.username, response.role);
//! # Ok(())
//! # }
//! ```

pub mod dto;

// Wildcard re-export: every DTO is public API
pub use dto::*;
