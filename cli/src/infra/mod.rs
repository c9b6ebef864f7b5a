//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: HTTP, terminal prompts and
//! config file access.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod http;
pub mod prompt;

pub use config::YamlConfigStore;
pub use http::UreqClient;
pub use prompt::TerminalPrompt;
