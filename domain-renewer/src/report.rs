//! Markdown run summary

use std::fmt::Write;

use crate::runner::{AccountRun, RenewalStatus, RunReport};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the run report as a Markdown document.
///
/// Each account gets its own section in input order; every domain appears in
/// exactly one table row, under the account that owns it.
pub fn render_report(report: &RunReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# DNSHE Domain Renewal Report");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "**Run at:** {}",
        report.started_at.format(TIMESTAMP_FORMAT)
    );
    let _ = writeln!(out);

    for run in &report.accounts {
        render_account(&mut out, run);
    }

    let _ = writeln!(out, "---");
    let _ = writeln!(out);
    let _ = write!(
        out,
        "**Total:** {} succeeded, {} skipped, {} failed across {} account(s)",
        report.count(RenewalStatus::Success),
        report.count(RenewalStatus::Skipped),
        report.count(RenewalStatus::Failed),
        report.accounts.len()
    );
    let unlisted = report.failed_listings();
    if unlisted > 0 {
        let _ = write!(out, ", {unlisted} account(s) could not be listed");
    }
    let _ = writeln!(out);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "> Skipped domains are not due for renewal yet and will be retried on the next scheduled run."
    );
    out
}

fn render_account(out: &mut String, run: &AccountRun) {
    let _ = writeln!(
        out,
        "## Account {} (`{}`)",
        run.account.position, run.account.masked_key
    );
    let _ = writeln!(out);

    if let Some(error) = &run.listing_error {
        let _ = writeln!(out, "❌ Failed to list domains: {}", escape_cell(error));
        let _ = writeln!(out);
        return;
    }
    if run.results.is_empty() {
        let _ = writeln!(out, "ℹ️ No domains found for this account");
        let _ = writeln!(out);
        return;
    }

    let _ = writeln!(out, "| Domain | Status | Message |");
    let _ = writeln!(out, "|--------|--------|---------|");
    for result in &run.results {
        let _ = writeln!(
            out,
            "| {} | {} {} | {} |",
            escape_cell(&result.domain),
            result.status.icon(),
            result.status,
            escape_cell(&result.message)
        );
    }
    let _ = writeln!(out);
}

/// Keep a value inside a single Markdown table cell.
fn escape_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}
