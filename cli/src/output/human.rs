//! Human-readable terminal renderer.

use crate::domain::{HostReport, RunReport};
use crate::output::OutputContext;

/// Renders run results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the raw responses of every host followed by a summary line.
    ///
    /// Unreachable hosts were already reported as errors during the run and
    /// only show up in the summary count.
    pub fn render_report(&self, report: &RunReport) {
        if self.ctx.quiet {
            return;
        }
        for host in report.hosts.iter().filter(|h| h.unreachable.is_none()) {
            println!();
            self.render_host(host);
        }
        println!();
        let summary = summary_line(report);
        if report.succeeded() == report.total() {
            self.ctx.success(&summary);
        } else {
            self.ctx.warn(&summary);
        }
    }

    fn render_host(&self, host: &HostReport) {
        self.ctx.header(&format!("Responses from {}", host.target));
        for outcome in &host.steps {
            self.ctx.kv(&format!("{}:", outcome.step), &outcome.message);
            if let Some(body) = outcome.body.as_deref().map(str::trim)
                && !body.is_empty()
            {
                self.ctx.block(body);
            }
        }
    }
}

/// `"N of M hosts updated"`.
#[must_use]
pub fn summary_line(report: &RunReport) -> String {
    let total = report.total();
    let noun = if total == 1 { "host" } else { "hosts" };
    format!("{} of {total} {noun} updated", report.succeeded())
}
