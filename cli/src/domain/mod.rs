//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `ureq`, `std::fs`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod credentials;
pub mod error;
pub mod report;
pub mod step;
pub mod target;
pub mod version;

pub use config::{FileConfig, RunConfig};
pub use credentials::Credentials;
pub use error::{ConfigError, CredentialError, HttpError, StepError, TargetError, VersionError};
pub use report::{HostReport, RunReport, StepOutcome};
pub use step::Step;
pub use target::Target;
pub use version::CqVersion;
