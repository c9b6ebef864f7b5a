//! Application service — CQ 5.4 admin password rotation use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use tracing::instrument;

use crate::application::ports::{BasicAuth, HttpClient, HttpResponse, ProgressReporter};
use crate::domain::step::{self, Step};
use crate::domain::{Credentials, HostReport, RunReport, StepError, StepOutcome, Target};

fn old_auth(creds: &Credentials) -> BasicAuth<'_> {
    BasicAuth {
        user: creds.username(),
        password: creds.old_password(),
    }
}

// ── Step procedures ───────────────────────────────────────────────────────────

/// Set the content repository admin password.
///
/// # Errors
///
/// Returns an error if the request gets no answer.
pub fn change_crx_password(
    client: &impl HttpClient,
    target: &Target,
    creds: &Credentials,
) -> Result<HttpResponse, StepError> {
    let url = target.url(step::CRX_SET_PASSWORD_PATH);
    Ok(client.request(&url, old_auth(creds), &step::crx_form(creds))?)
}

/// Update the admin password of the Sling client repository service.
///
/// # Errors
///
/// Returns an error if the configuration lookup fails or the update gets
/// no answer.
pub fn change_sling_client_repository(
    client: &impl HttpClient,
    target: &Target,
    creds: &Credentials,
) -> Result<HttpResponse, StepError> {
    update_admin_password_config(
        client,
        target,
        creds,
        step::SLING_CLIENT_REPOSITORY_FACTORY_PID,
    )
}

/// Update the admin password of the Felix web console.
///
/// # Errors
///
/// Returns an error if the configuration lookup fails or the update gets
/// no answer.
pub fn change_osgi_console(
    client: &impl HttpClient,
    target: &Target,
    creds: &Credentials,
) -> Result<HttpResponse, StepError> {
    update_admin_password_config(client, target, creds, step::OSGI_MANAGER_FACTORY_PID)
}

/// Change the servlet engine (CQSE) admin password.
///
/// # Errors
///
/// Returns an error if the request gets no answer.
pub fn change_servlet_engine_password(
    client: &impl HttpClient,
    target: &Target,
    creds: &Credentials,
) -> Result<HttpResponse, StepError> {
    let url = target.url(step::SERVLET_ENGINE_PASSWD_PATH);
    Ok(client.request(&url, old_auth(creds), &step::servlet_engine_form(creds))?)
}

/// Look up the instance PID for `factory_pid`, then apply the new
/// `admin.password` to it.
fn update_admin_password_config(
    client: &impl HttpClient,
    target: &Target,
    creds: &Credentials,
    factory_pid: &str,
) -> Result<HttpResponse, StepError> {
    let listing_url = target.url(&step::config_listing_path(factory_pid));
    let listing = client.fetch(&listing_url, old_auth(creds))?;
    let pid = step::parse_pid(&listing, factory_pid)?;
    tracing::debug!(factory_pid, pid = %pid, "resolved configuration pid");

    let url = target.url(&step::config_path(&pid));
    Ok(client.request(&url, old_auth(creds), &step::config_admin_password_form(creds))?)
}

/// Dispatch one step.
///
/// # Errors
///
/// Propagates the step procedure's error.
pub fn run_step(
    step: Step,
    client: &impl HttpClient,
    target: &Target,
    creds: &Credentials,
) -> Result<HttpResponse, StepError> {
    match step {
        Step::CrxPassword => change_crx_password(client, target, creds),
        Step::SlingClientRepository => change_sling_client_repository(client, target, creds),
        Step::ServletEngine => change_servlet_engine_password(client, target, creds),
        Step::OsgiConsole => change_osgi_console(client, target, creds),
    }
}

// ── Orchestration ─────────────────────────────────────────────────────────────

/// Run every step against one host, in [`Step::ORDER`].
///
/// A failed step does not stop the next one. Losing the connection to the
/// host does: the remaining steps are skipped and the host is marked
/// unreachable.
#[instrument(skip_all, fields(host = %target))]
pub fn change_host(
    client: &impl HttpClient,
    target: &Target,
    creds: &Credentials,
    reporter: &impl ProgressReporter,
) -> HostReport {
    let mut report = HostReport::new(target.clone());
    reporter.step(&format!("changing passwords on {target}"));

    for step in Step::ORDER {
        let outcome = match run_step(step, client, target, creds) {
            Ok(resp) => StepOutcome::answered(step, resp.status, resp.body),
            Err(e) if e.is_unreachable() => {
                tracing::warn!(%step, error = %e, "host unreachable");
                reporter.error(&format!("Couldn't connect to {target}."));
                report.unreachable = Some(e.to_string());
                return report;
            }
            Err(e) => StepOutcome::failed(step, &e),
        };

        if outcome.ok {
            tracing::info!(%step, status = ?outcome.status, "step succeeded");
            reporter.success(&format!("{step}: {}", outcome.message));
        } else {
            tracing::warn!(%step, message = %outcome.message, "step failed");
            reporter.warn(&format!("{step} on {target} failed: {}", outcome.message));
        }
        report.steps.push(outcome);
    }

    report
}

/// Run [`change_host`] for every target, one after another.
pub fn change_all(
    client: &impl HttpClient,
    targets: &[Target],
    creds: &Credentials,
    reporter: &impl ProgressReporter,
) -> RunReport {
    let hosts = targets
        .iter()
        .map(|target| change_host(client, target, creds, reporter))
        .collect();
    RunReport { hosts }
}
