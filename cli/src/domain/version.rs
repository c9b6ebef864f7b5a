//! Supported CQ releases.

use std::fmt;

use clap::ValueEnum;

use crate::domain::error::VersionError;

/// CQ release the password recipe targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CqVersion {
    #[default]
    #[value(name = "5.4")]
    V5_4,
    #[value(name = "5.5")]
    V5_5,
}

impl CqVersion {
    /// Reject releases the recipe does not cover. Called before any I/O.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::Unsupported`] for CQ 5.5.
    pub fn ensure_supported(self) -> Result<(), VersionError> {
        match self {
            Self::V5_4 => Ok(()),
            Self::V5_5 => Err(VersionError::Unsupported(self.to_string())),
        }
    }
}

impl fmt::Display for CqVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::V5_4 => "5.4",
            Self::V5_5 => "5.5",
        })
    }
}
