//! Application services — use-case orchestration.
//!
//! Each service depends only on `crate::domain` and `crate::application::ports`.

pub mod credentials;
pub mod rotation;
