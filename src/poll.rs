//! Background catalog refresh.
//!
//! Runs on a dedicated thread: loads every collection once at startup, then
//! again on every tick of the refresh interval, sending each snapshot to the
//! UI thread over an [`mpsc`] channel.
//!
//! ## For contributors
//!
//! The poller only *delivers* snapshots.  Whether a new snapshot changes what
//! is on screen is decided by [`App::apply_snapshot`](crate::app::App::apply_snapshot).

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::source::{Catalog, LoadReport};

/// Messages sent from the poller thread to the UI thread.
pub enum PollMsg {
    /// A load finished.  Failed collections are empty in the snapshot and
    /// described in the report.
    Snapshot(LoadReport),
}

/// Spawn the background polling thread.
///
/// Returns a receiver that the main loop should drain on every tick.  The
/// thread stops on its next tick once the receiver is dropped.
pub fn spawn(catalog: Catalog, interval: Duration) -> mpsc::Receiver<PollMsg> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || loop {
        let report = catalog.load();
        if tx.send(PollMsg::Snapshot(report)).is_err() {
            tracing::debug!("UI gone, poller exiting");
            return;
        }
        thread::sleep(interval);
    });

    rx
}
