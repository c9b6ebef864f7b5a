//! HTTP infrastructure — implements `HttpClient` with a blocking `ureq` agent.

use std::io::Read;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::application::ports::{BasicAuth, HttpClient, HttpResponse};
use crate::domain::HttpError;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("cq5-passwd/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client backed by a single `ureq::Agent`.
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Create a client. `timeout` bounds each whole request; `None` waits
    /// for as long as the server takes.
    ///
    /// Redirects are not followed: a 3xx answer to a POST is that POST's
    /// result.
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new()
            .user_agent(USER_AGENT)
            .redirects(0);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
        }
    }

    fn post(&self, url: &str, auth: BasicAuth<'_>) -> ureq::Request {
        self.agent
            .post(url)
            .set("Authorization", &basic_auth_header(auth))
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HttpClient for UreqClient {
    fn fetch(&self, url: &str, auth: BasicAuth<'_>) -> Result<String, HttpError> {
        tracing::debug!(url, "POST (fetch)");
        let resp = match self.post(url, auth).send_bytes(&[]) {
            Ok(resp) | Err(ureq::Error::Status(_, resp)) => resp,
            Err(ureq::Error::Transport(t)) => return Err(transport_error(url, &t)),
        };
        let code = resp.status();
        tracing::debug!(url, status = code, "response");
        if !(200..300).contains(&code) {
            return Err(HttpError::Status {
                url: url.to_string(),
                code,
            });
        }
        read_body(url, resp)
    }

    fn request(
        &self,
        url: &str,
        auth: BasicAuth<'_>,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, HttpError> {
        tracing::debug!(url, fields = form.len(), "POST (form)");
        let resp = match self.post(url, auth).send_form(form) {
            Ok(resp) | Err(ureq::Error::Status(_, resp)) => resp,
            Err(ureq::Error::Transport(t)) => return Err(transport_error(url, &t)),
        };
        let status = resp.status();
        tracing::debug!(url, status, "response");
        let body = read_body(url, resp)?;
        Ok(HttpResponse { status, body })
    }
}

/// `Authorization` header value for HTTP Basic authentication.
#[must_use]
pub fn basic_auth_header(auth: BasicAuth<'_>) -> String {
    let token = STANDARD.encode(format!("{}:{}", auth.user, auth.password));
    format!("Basic {token}")
}

/// Read the whole body, replacing invalid UTF-8 rather than failing.
fn read_body(url: &str, resp: ureq::Response) -> Result<String, HttpError> {
    let mut raw = Vec::new();
    resp.into_reader()
        .read_to_end(&mut raw)
        .map_err(|e| HttpError::Transport {
            url: url.to_string(),
            reason: format!("reading response: {e}"),
        })?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

fn transport_error(url: &str, t: &ureq::Transport) -> HttpError {
    let reason = t.to_string();
    match t.kind() {
        ureq::ErrorKind::ConnectionFailed | ureq::ErrorKind::Dns => HttpError::Unreachable {
            url: url.to_string(),
            reason,
        },
        _ => HttpError::Transport {
            url: url.to_string(),
            reason,
        },
    }
}
