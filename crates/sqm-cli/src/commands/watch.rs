use std::path::Path;
use std::time::Duration;

use anyhow::bail;
use sqm_core::responses::StatusResponse;
use sqm_core::status::status_line;
use tokio::time::MissedTickBehavior;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WatchArgs;
use crate::commands::shared::{coordinates_of, read_location_file};
use crate::context::AppContext;
use crate::output::emit;

/// Handle `sqm watch`: poll the coordinate source and print the status
/// line whenever it changes. Never touches the marker list.
pub async fn handle(args: &WatchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interval_ms = args
        .interval_ms
        .unwrap_or(ctx.config.general.poll_interval_ms);
    if interval_ms == 0 {
        bail!("--interval-ms must be greater than zero");
    }

    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut last: Option<String> = None;
    let mut polls = 0u64;
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut ctrl_c => {
                tracing::debug!(polls, "watch interrupted");
                break;
            }
        }

        let status = poll_status(&args.source_file);
        if last.as_deref() != Some(status.as_str()) {
            let response = StatusResponse {
                status: status.clone(),
                markers: ctx.store.len(),
            };
            emit(&response, flags, || response.status.clone())?;
            last = Some(status);
        }

        polls += 1;
        if args.count.is_some_and(|count| polls >= count) {
            break;
        }
    }
    Ok(())
}

/// Status for the current contents of the source file. A missing or
/// unreadable file reads as "no coordinates".
fn poll_status(path: &Path) -> String {
    match read_location_file(path) {
        Ok(location) => status_line(coordinates_of(&location).as_ref()),
        Err(error) => {
            tracing::debug!(%error, "coordinate source unreadable");
            status_line(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::poll_status;

    #[test]
    fn reads_current_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hash");

        assert_eq!(poll_status(&path), "hash mode");

        std::fs::write(&path, "#overworld;flat;10.5,64,-20;2\n").unwrap();
        assert_eq!(poll_status(&path), "x:11 z:-20 (zoom 2)");

        std::fs::write(&path, "https://map.example.com/").unwrap();
        assert_eq!(poll_status(&path), "hash mode");
    }
}
