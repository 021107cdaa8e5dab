//! Run report model and the failure-attachment hook
//!
//! A [`RunReport`] collects one [`CaseReport`] per test. Attachments
//! are either files on disk (screenshots, videos, printed pages) or
//! inline bodies (text, HTML, CSV, JSON, URI lists), each tagged with
//! a kind that maps to a MIME type.
//!
//! The hook that made the original corpus useful lives here too:
//! after a failed case, [`attach_failure_artifacts`] scans the case's
//! artifact directory and attaches every file whose name matches the
//! failure-screenshot pattern (`test-failed-<n>.png`) or the video
//! pattern (`*.webm`). Recordings are attached, never produced — a
//! recorder drops its `.webm` into the directory and the hook picks it
//! up by name.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

use crate::artifacts::TestArtifacts;

lazy_static! {
    /// Failure screenshots: test-failed-1.png, test-failed-2.png, …
    static ref SCREENSHOT_NAME: Regex =
        Regex::new(r"^test-failed-\d+\.png$").expect("valid screenshot pattern");
    /// Recordings dropped next to the screenshots
    static ref VIDEO_NAME: Regex = Regex::new(r"\.webm$").expect("valid video pattern");
}

/// Outcome of a single test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Passed,
    Failed,
    Skipped,
}

/// What an attachment contains, mapped to a MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Png,
    Webm,
    Pdf,
    Text,
    Html,
    Csv,
    Json,
    UriList,
}

impl AttachmentKind {
    /// The MIME type used when the report is rendered
    pub fn mime(&self) -> &'static str {
        match self {
            AttachmentKind::Png => "image/png",
            AttachmentKind::Webm => "video/webm",
            AttachmentKind::Pdf => "application/pdf",
            AttachmentKind::Text => "text/plain",
            AttachmentKind::Html => "text/html",
            AttachmentKind::Csv => "text/csv",
            AttachmentKind::Json => "application/json",
            AttachmentKind::UriList => "text/uri-list",
        }
    }
}

/// A file or inline blob attached to a case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Display name
    pub name: String,
    /// Content kind
    pub kind: AttachmentKind,
    /// Path of a file attachment, when the content lives on disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// Inline body, for text-like attachments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Attachment {
    /// Attach a file on disk
    pub fn file(name: impl Into<String>, kind: AttachmentKind, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            kind,
            source: Some(source.into()),
            body: None,
        }
    }

    /// Attach an inline body
    pub fn inline(name: impl Into<String>, kind: AttachmentKind, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            source: None,
            body: Some(body.into()),
        }
    }
}

/// Report for one test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    /// Test identifier, e.g. `alerts::accept_alert`
    pub id: String,
    /// Outcome
    pub status: Status,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
    /// Failure message, when the case failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Attached files and blobs
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// RFC 3339 start timestamp
    pub started_at: String,
}

/// Report for a whole run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Suite name from the harness config
    pub suite: String,
    /// RFC 3339 start timestamp
    pub started_at: String,
    /// Per-case reports
    pub cases: Vec<CaseReport>,
    /// Whether every case passed or was skipped
    pub passed: bool,
}

impl RunReport {
    /// Build a run report from finished cases
    pub fn new(suite: impl Into<String>, cases: Vec<CaseReport>) -> Self {
        let passed = cases.iter().all(|c| c.status != Status::Failed);
        Self {
            suite: suite.into(),
            started_at: chrono::Utc::now().to_rfc3339(),
            cases,
            passed,
        }
    }

    /// Failed cases in report order
    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|c| c.status == Status::Failed)
    }
}

/// Attach matching artifact files to a failed case
///
/// No-op for passed or skipped cases. Files in `dir` whose names match
/// the failure-screenshot pattern are attached as PNG, `.webm` files
/// as video. Unreadable directories are logged and skipped rather than
/// failing the report.
pub fn attach_failure_artifacts(case: &mut CaseReport, dir: &Path) {
    if case.status != Status::Failed {
        return;
    }
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("No artifacts to attach from {}: {}", dir.display(), e);
            return;
        }
    };

    let mut names: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    for name in names {
        let path = dir.join(&name);
        if SCREENSHOT_NAME.is_match(&name) {
            debug!("Attaching screenshot: {}", path.display());
            case.attachments
                .push(Attachment::file(&name, AttachmentKind::Png, path));
        } else if VIDEO_NAME.is_match(&name) {
            debug!("Attaching video: {}", path.display());
            case.attachments
                .push(Attachment::file(&name, AttachmentKind::Webm, path));
        }
    }
}

/// Records one case: artifact directory, timing, failure capture
///
/// Wraps a test body end to end: create the recorder, run the steps,
/// then hand the outcome to [`CaseRecorder::finish`]. On failure the
/// recorder grabs a screenshot of the page (when one is supplied) and
/// runs the attachment hook over the artifact directory.
pub struct CaseRecorder {
    id: String,
    artifacts: TestArtifacts,
    started: Instant,
    started_at: String,
}

impl CaseRecorder {
    /// Start recording a case
    pub fn new(artifact_root: impl AsRef<Path>, id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            artifacts: TestArtifacts::new(artifact_root, &id),
            id,
            started: Instant::now(),
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// The case's artifact directory
    pub fn artifacts(&mut self) -> &mut TestArtifacts {
        &mut self.artifacts
    }

    /// Finish the case, capturing a failure screenshot when a page is
    /// available and the outcome is an error
    pub async fn finish(
        mut self,
        page: Option<&Page>,
        outcome: Result<(), String>,
    ) -> CaseReport {
        let status = if outcome.is_ok() {
            Status::Passed
        } else {
            Status::Failed
        };

        if status == Status::Failed {
            if let Some(page) = page {
                if let Err(e) = self.artifacts.save_failure_screenshot(page).await {
                    warn!("Failed to capture failure screenshot: {:#}", e);
                }
            }
        }

        let mut case = CaseReport {
            id: self.id,
            status,
            duration_ms: self.started.elapsed().as_millis() as u64,
            message: outcome.err(),
            attachments: Vec::new(),
            started_at: self.started_at,
        };
        attach_failure_artifacts(&mut case, self.artifacts.dir());
        case
    }
}

/// Write a run report as pretty JSON into `dir`
///
/// The file is named `run-report.json`; the directory is created when
/// missing.
pub fn save_report(report: &RunReport, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report dir: {}", dir.display()))?;
    let path = dir.join("run-report.json");
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(path)
}
