//! Tests for the rotation service: step procedures, per-host orchestration
//! and the host loop.

#![allow(clippy::unwrap_used)]

use cq5_passwd::application::services::rotation::{
    change_all, change_crx_password, change_host, change_osgi_console,
    change_servlet_engine_password, change_sling_client_repository,
};
use cq5_passwd::domain::{Credentials, HttpError, Step, StepError, Target};

use crate::mocks::{
    CallKind, CapturingReporter, OSGI_PID, RecordingClient, SLING_PID, healthy_answer, ok,
    refused, status,
};

fn creds() -> Credentials {
    Credentials::new("admin", "old-pw", "new-pw").unwrap()
}

fn target() -> Target {
    Target::new("cq.test", 4502)
}

// ── Step procedures ───────────────────────────────────────────────────────────

#[test]
fn test_crx_step_posts_new_password_with_old_auth() {
    let client = RecordingClient::healthy();
    let resp = change_crx_password(&client, &target(), &creds()).unwrap();
    assert_eq!(resp.status, 200);

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.kind, CallKind::Request);
    assert_eq!(call.url, "http://cq.test:4502/crx/ui/setpassword.jsp");
    assert_eq!((call.user.as_str(), call.password.as_str()), ("admin", "old-pw"));
    assert_eq!(call.field("plain"), Some("new-pw"));
    assert_eq!(call.field("verify"), Some("new-pw"));
    assert_eq!(call.form.len(), 2);
}

#[test]
fn test_sling_step_looks_up_pid_then_applies_password() {
    let client = RecordingClient::healthy();
    change_sling_client_repository(&client, &target(), &creds()).unwrap();

    let calls = client.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].kind, CallKind::Fetch);
    assert_eq!(
        calls[0].path(),
        "/system/console/configMgr/(service.factoryPid=com.day.crx.sling.client.impl.CRXSlingClientRepository).json"
    );
    assert!(calls[0].form.is_empty());

    assert_eq!(calls[1].kind, CallKind::Request);
    assert_eq!(calls[1].path(), format!("/system/console/configMgr/{SLING_PID}"));
    assert_eq!(calls[1].field("apply"), Some("true"));
    assert_eq!(calls[1].field("admin.password"), Some("new-pw"));
    assert_eq!(calls[1].field("propertylist"), Some("admin.password"));
    assert!(calls.iter().all(|c| c.password == "old-pw"));
}

#[test]
fn test_osgi_step_resolves_its_own_pid() {
    let client = RecordingClient::healthy();
    change_osgi_console(&client, &target(), &creds()).unwrap();

    let paths = client.paths();
    assert_eq!(
        paths,
        vec![
            "/system/console/configMgr/(service.factoryPid=org.apache.felix.webconsole.internal.servlet.OsgiManager).json".to_string(),
            format!("/system/console/configMgr/{OSGI_PID}"),
        ]
    );
}

#[test]
fn test_config_step_uses_first_listed_pid() {
    let client = RecordingClient::with_handler(|call| {
        if call.kind == CallKind::Fetch {
            ok(r#"[{"pid":"abc"},{"pid":"def"}]"#)
        } else {
            ok("OK")
        }
    });
    change_sling_client_repository(&client, &target(), &creds()).unwrap();
    assert_eq!(client.paths()[1], "/system/console/configMgr/abc");
}

#[test]
fn test_servlet_engine_step_sends_all_fields() {
    let client = RecordingClient::healthy();
    change_servlet_engine_password(&client, &target(), &creds()).unwrap();

    let call = &client.calls()[0];
    assert_eq!(call.path(), "/admin/passwd");
    assert_eq!(call.field("username"), Some("admin"));
    assert_eq!(call.field("password_old"), Some("old-pw"));
    assert_eq!(call.field("password"), Some("new-pw"));
    assert_eq!(call.field("password_check"), Some("new-pw"));
    assert_eq!(call.password, "old-pw");
}

#[test]
fn test_config_step_missing_pid_fails_without_update() {
    let client = RecordingClient::with_handler(|call| {
        if call.kind == CallKind::Fetch {
            ok("[]")
        } else {
            ok("OK")
        }
    });
    let err = change_osgi_console(&client, &target(), &creds()).unwrap_err();
    assert!(matches!(err, StepError::NoConfiguration { .. }), "{err:?}");
    assert_eq!(client.calls().len(), 1, "no update without a pid");
}

#[test]
fn test_config_step_lookup_rejected_is_status_error() {
    let client = RecordingClient::with_handler(|_| status(401, "Unauthorized"));
    let err = change_sling_client_repository(&client, &target(), &creds()).unwrap_err();
    assert!(
        matches!(err, StepError::Http(HttpError::Status { code: 401, .. })),
        "{err:?}"
    );
}

// ── Orchestrator ──────────────────────────────────────────────────────────────

#[test]
fn test_change_host_runs_steps_in_order() {
    let client = RecordingClient::healthy();
    let reporter = CapturingReporter::default();
    let report = change_host(&client, &target(), &creds(), &reporter);

    assert!(report.is_success());
    let steps: Vec<Step> = report.steps.iter().map(|s| s.step).collect();
    assert_eq!(steps, Step::ORDER.to_vec());
    assert_eq!(
        client.paths(),
        vec![
            "/crx/ui/setpassword.jsp".to_string(),
            "/system/console/configMgr/(service.factoryPid=com.day.crx.sling.client.impl.CRXSlingClientRepository).json".to_string(),
            format!("/system/console/configMgr/{SLING_PID}"),
            "/admin/passwd".to_string(),
            "/system/console/configMgr/(service.factoryPid=org.apache.felix.webconsole.internal.servlet.OsgiManager).json".to_string(),
            format!("/system/console/configMgr/{OSGI_PID}"),
        ]
    );
}

#[test]
fn test_change_host_continues_after_failed_step() {
    let client = RecordingClient::with_handler(|call| {
        if call.path() == "/crx/ui/setpassword.jsp" {
            status(401, "bad credentials")
        } else if call.kind == CallKind::Fetch && call.path().contains("CRXSlingClientRepository") {
            ok("not json")
        } else {
            healthy_answer(call)
        }
    });
    let reporter = CapturingReporter::default();
    let report = change_host(&client, &target(), &creds(), &reporter);

    assert_eq!(report.steps.len(), 4);
    assert!(!report.steps[0].ok);
    assert_eq!(report.steps[0].status, Some(401));
    assert_eq!(report.steps[0].body.as_deref(), Some("bad credentials"));
    assert!(!report.steps[1].ok);
    assert!(report.steps[1].message.contains("not valid JSON"));
    assert!(report.steps[2].ok);
    assert!(report.steps[3].ok);
    assert!(report.unreachable.is_none());
    assert!(!report.is_success());

    let warnings: Vec<_> = reporter
        .events()
        .into_iter()
        .filter(|e| e.starts_with("warn: "))
        .collect();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[1].contains("Sling client repository on cq.test:4502"));
}

#[test]
fn test_change_host_stops_when_unreachable() {
    let client = RecordingClient::with_handler(refused);
    let reporter = CapturingReporter::default();
    let report = change_host(&client, &target(), &creds(), &reporter);

    assert!(report.steps.is_empty());
    assert!(report.unreachable.is_some());
    assert_eq!(client.calls().len(), 1);
    assert_eq!(reporter.errors(), vec!["error: Couldn't connect to cq.test:4502."]);
}

// ── Host loop ─────────────────────────────────────────────────────────────────

#[test]
fn test_change_all_issues_four_steps_per_target() {
    let client = RecordingClient::healthy();
    let targets = vec![Target::new("a.test", 4502), Target::new("b.test", 4503)];
    let report = change_all(&client, &targets, &creds(), &CapturingReporter::default());

    assert_eq!(report.total(), 2);
    assert_eq!(report.succeeded(), 2);
    let step_count: usize = report.hosts.iter().map(|h| h.steps.len()).sum();
    assert_eq!(step_count, 8);

    let calls = client.calls();
    assert_eq!(calls.len(), 12);
    assert!(calls[..6].iter().all(|c| c.url.starts_with("http://a.test:4502/")));
    assert!(calls[6..].iter().all(|c| c.url.starts_with("http://b.test:4503/")));
}

#[test]
fn test_change_all_isolates_unreachable_host() {
    let client = RecordingClient::with_handler(|call| {
        if call.url.starts_with("http://down.test") {
            refused(call)
        } else {
            healthy_answer(call)
        }
    });
    let reporter = CapturingReporter::default();
    let targets = vec![Target::new("down.test", 4502), Target::new("up.test", 4502)];
    let report = change_all(&client, &targets, &creds(), &reporter);

    assert_eq!(reporter.errors().len(), 1);
    assert!(report.hosts[0].unreachable.is_some());
    assert!(report.hosts[1].is_success());
    let up_calls = client
        .calls()
        .iter()
        .filter(|c| c.url.starts_with("http://up.test"))
        .count();
    assert_eq!(up_calls, 6);
}

#[test]
fn test_change_all_uses_same_credentials_everywhere() {
    let client = RecordingClient::healthy();
    let targets = vec![Target::new("a.test", 1), Target::new("b.test", 2)];
    change_all(&client, &targets, &creds(), &CapturingReporter::default());
    assert!(
        client
            .calls()
            .iter()
            .all(|c| c.user == "admin" && c.password == "old-pw")
    );
}
