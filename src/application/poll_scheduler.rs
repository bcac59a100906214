// Repeating timer behind the live readout
use crate::application::live_poller::LivePoller;
use crate::application::session::SharedSession;
use std::time::Duration;
use tokio::time::interval;

/// Fires a live poll every `interval_secs`, whatever the outcome of earlier polls.
///
/// Each tick spawns its own poll so a slow answer never delays the timer.
pub async fn run_live_polling(poller: LivePoller, session: SharedSession, interval_secs: u64) {
    tracing::info!(interval_secs, "Starting live readout polling");

    let mut ticker = interval(Duration::from_secs(interval_secs));

    // The first tick completes immediately; the page starts without a selection
    ticker.tick().await;

    loop {
        ticker.tick().await;

        let poller = poller.clone();
        let session = session.clone();
        tokio::spawn(async move {
            let outcome = poller.poll(&session).await;
            tracing::trace!(?outcome, "Timer poll");
        });
    }
}
