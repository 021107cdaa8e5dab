//! Build a run report by hand and render it every way the harness can.
//!
//! No browser involved: the cases here are synthetic, including one
//! failure with artifact files on disk so the attachment hook has
//! something to pick up.
//!
//! Run with: cargo run -p browser-harness --example report_demo

use browser_harness::report::{
    attach_failure_artifacts, save_report, Attachment, AttachmentKind, CaseReport, RunReport,
    Status,
};
use browser_harness::reporter::{OutputFormat, Reporter};
use tracing::info;

fn case(id: &str, status: Status, duration_ms: u64) -> CaseReport {
    CaseReport {
        id: id.to_string(),
        status,
        duration_ms,
        message: None,
        attachments: Vec::new(),
        started_at: chrono::Utc::now().to_rfc3339(),
    }
}

fn main() -> anyhow::Result<()> {
    browser_harness::logging::init();

    let mut passing = case("demo::login", Status::Passed, 812);
    passing.attachments.push(Attachment::inline(
        "request log",
        AttachmentKind::Text,
        "POST /session -> 200\nGET /dashboard -> 200",
    ));
    passing.attachments.push(Attachment::inline(
        "fixture row",
        AttachmentKind::Csv,
        "user,role\nalice,admin",
    ));
    passing.attachments.push(Attachment::inline(
        "related links",
        AttachmentKind::UriList,
        "https://example.com/dashboard\nhttps://example.com/profile",
    ));

    let mut failing = case("demo::checkout", Status::Failed, 231);
    failing.message = Some("cart total mismatch: expected 3 items, found 2".to_string());
    failing.attachments.push(Attachment::inline(
        "cart state",
        AttachmentKind::Json,
        r#"{"items": 2, "expected": 3}"#,
    ));
    failing.attachments.push(Attachment::inline(
        "page fragment",
        AttachmentKind::Html,
        "<ul class='cart'><li>book</li><li>pen</li></ul>",
    ));

    // Drop artifact files where the failure hook scans for them
    let artifact_dir = std::path::Path::new("test-results").join("demo-checkout");
    std::fs::create_dir_all(&artifact_dir)?;
    std::fs::write(artifact_dir.join("test-failed-1.png"), b"\x89PNG demo")?;
    std::fs::write(artifact_dir.join("checkout.webm"), b"demo recording")?;
    attach_failure_artifacts(&mut failing, &artifact_dir);

    let skipped = case("demo::admin_panel", Status::Skipped, 0);

    let report = RunReport::new("report demo", vec![passing, failing, skipped]);

    Reporter::new(OutputFormat::Console).report(&report)?;

    let report_dir = std::path::Path::new("test-report");
    let path = save_report(&report, report_dir)?;
    info!("JSON report written to {}", path.display());

    let compact = Reporter::new(OutputFormat::Json).format_report(&report)?;
    info!("Compact JSON is {} bytes", compact.len());

    Ok(())
}
