//! The CQ 5.4 password recipe: steps, endpoints, form payloads and the
//! configuration-manager listing format.
//!
//! Order follows the CQ 5.4 security checklist: repository first, then the
//! OSGi-managed services, then the servlet engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::credentials::Credentials;
use crate::domain::error::StepError;

// ── Endpoints ─────────────────────────────────────────────────────────────────

pub const CRX_SET_PASSWORD_PATH: &str = "/crx/ui/setpassword.jsp";
pub const SERVLET_ENGINE_PASSWD_PATH: &str = "/admin/passwd";
pub const CONFIG_MGR_PATH: &str = "/system/console/configMgr";

pub const SLING_CLIENT_REPOSITORY_FACTORY_PID: &str =
    "com.day.crx.sling.client.impl.CRXSlingClientRepository";
pub const OSGI_MANAGER_FACTORY_PID: &str =
    "org.apache.felix.webconsole.internal.servlet.OsgiManager";

/// Property the configuration manager updates for both OSGi-managed steps.
pub const ADMIN_PASSWORD_PROPERTY: &str = "admin.password";

// ── Steps ─────────────────────────────────────────────────────────────────────

/// One remote password change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    CrxPassword,
    SlingClientRepository,
    ServletEngine,
    OsgiConsole,
}

impl Step {
    /// Execution order for every host.
    pub const ORDER: [Step; 4] = [
        Step::CrxPassword,
        Step::SlingClientRepository,
        Step::ServletEngine,
        Step::OsgiConsole,
    ];

    /// Short human label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CrxPassword => "CRX password",
            Self::SlingClientRepository => "Sling client repository",
            Self::ServletEngine => "servlet engine password",
            Self::OsgiConsole => "OSGi web console",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Paths ─────────────────────────────────────────────────────────────────────

/// Listing of all configurations created from `factory_pid`.
#[must_use]
pub fn config_listing_path(factory_pid: &str) -> String {
    format!("{CONFIG_MGR_PATH}/(service.factoryPid={factory_pid}).json")
}

/// Endpoint that updates the configuration instance `pid`.
#[must_use]
pub fn config_path(pid: &str) -> String {
    format!("{CONFIG_MGR_PATH}/{pid}")
}

// ── Form payloads ─────────────────────────────────────────────────────────────

/// Form fields as `(name, value)` pairs, in wire order.
pub type FormFields<'a> = Vec<(&'static str, &'a str)>;

#[must_use]
pub fn crx_form(creds: &Credentials) -> FormFields<'_> {
    vec![
        ("plain", creds.new_password()),
        ("verify", creds.new_password()),
    ]
}

/// Payload for the configuration manager: apply `admin.password` only.
#[must_use]
pub fn config_admin_password_form(creds: &Credentials) -> FormFields<'_> {
    vec![
        ("apply", "true"),
        (ADMIN_PASSWORD_PROPERTY, creds.new_password()),
        ("propertylist", ADMIN_PASSWORD_PROPERTY),
    ]
}

#[must_use]
pub fn servlet_engine_form(creds: &Credentials) -> FormFields<'_> {
    vec![
        ("username", creds.username()),
        ("password_old", creds.old_password()),
        ("password", creds.new_password()),
        ("password_check", creds.new_password()),
    ]
}

// ── Listing parsing ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ConfigEntry {
    pid: Option<String>,
}

/// Extract the `pid` of the first entry of a configuration-manager listing.
///
/// # Errors
///
/// Returns an error if the body is not a JSON array of objects, the array
/// is empty, or its first element carries no string `pid`.
pub fn parse_pid(listing: &str, factory_pid: &str) -> Result<String, StepError> {
    let entries: Vec<ConfigEntry> =
        serde_json::from_str(listing).map_err(|e| StepError::InvalidListing(e.to_string()))?;
    let first = entries.into_iter().next().ok_or_else(|| StepError::NoConfiguration {
        factory_pid: factory_pid.to_string(),
    })?;
    first
        .pid
        .filter(|pid| !pid.is_empty())
        .ok_or_else(|| StepError::MissingPid {
            factory_pid: factory_pid.to_string(),
        })
}
