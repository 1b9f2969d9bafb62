//! # Backend API Client Module
//!
//! HTTP client for the analytics backend. Handles bearer-token injection,
//! the global failure policy and one function per endpoint.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient, ApiConfig, dispatch
//! ├── request.rs      - Request descriptors (method, path, body, headers)
//! ├── interceptor.rs  - Status-driven side effects (401/403/404/500/network)
//! ├── error.rs        - ApiError taxonomy
//! ├── auth.rs         - Login (form-encoded)
//! ├── academic.rs     - Courses, analytics, grades, alerts, student details
//! └── wellbeing.rs    - Trends, risk alerts, surveys, history, CSV upload
//! ```

pub mod academic;
pub mod auth;
pub mod client;
pub mod error;
pub mod interceptor;
pub mod request;
pub mod wellbeing;

pub use client::{ApiClient, ApiConfig};
pub use error::ApiError;
pub use interceptor::ResponseInterceptor;
pub use request::{ApiRequest, CsvUpload, RequestBody};
