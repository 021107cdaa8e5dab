//! Record a short screencast of an animating page.
//!
//! The DevTools screencast streams frames as base64 PNGs; each frame
//! has to be acknowledged before the browser sends the next one. The
//! frames land in the artifact directory as numbered PNGs — stitch
//! them into a `.webm` (e.g. with ffmpeg) and drop it next to them,
//! and the failure hook attaches it to the case by name.
//!
//! Run with: cargo run -p browser-harness --example record_screencast

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use browser_harness::artifacts::TestArtifacts;
use browser_harness::session::{BrowserOptions, BrowserSession};
use chromiumoxide::cdp::browser_protocol::page::{
    ScreencastFrameAckParams, StartScreencastFormat, StartScreencastParams, StopScreencastParams,
};
use futures::StreamExt;
use std::time::Duration;
use tracing::info;

const FRAME_COUNT: usize = 10;

const ANIMATED_PAGE: &str = "data:text/html,<title>Screencast</title>\
    <div id=box style='width:80px;height:80px;background:crimson;position:absolute'></div>\
    <script>let x=0;setInterval(()=>{x=x>400?0:x+7;\
    document.getElementById('box').style.left=x+'px';},30)</script>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    browser_harness::logging::init();

    let options = BrowserOptions {
        args: vec!["--no-sandbox".to_string()],
        ..BrowserOptions::default()
    };
    let session = BrowserSession::launch(&options).await?;
    let page = session.page(ANIMATED_PAGE).await?;

    // Subscribe before starting, or the first frames are lost
    let mut frames = page
        .event_listener::<chromiumoxide::cdp::browser_protocol::page::EventScreencastFrame>()
        .await?;

    page.execute(
        StartScreencastParams::builder()
            .format(StartScreencastFormat::Png)
            .every_nth_frame(1)
            .build(),
    )
    .await?;
    info!("Screencast started, collecting {} frames", FRAME_COUNT);

    let artifacts = TestArtifacts::new("test-results", "examples::record_screencast");
    let mut captured = 0usize;
    while captured < FRAME_COUNT {
        let frame = match tokio::time::timeout(Duration::from_secs(5), frames.next()).await {
            Ok(Some(frame)) => frame,
            _ => break,
        };
        page.execute(ScreencastFrameAckParams::new(frame.session_id))
            .await?;

        let bytes = BASE64.decode(&frame.data)?;
        captured += 1;
        let path = artifacts.write(&format!("frame-{:03}.png", captured), &bytes)?;
        info!("Frame {} -> {}", captured, path.display());
    }

    page.execute(StopScreencastParams::default()).await?;
    info!("Captured {} frames in {}", captured, artifacts.dir().display());

    session.close().await?;
    Ok(())
}
