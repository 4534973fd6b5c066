use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::profile_fetch::{PlayerSource, load_profile};
use crate::state::{Delta, ProviderCommand};

/// Background worker that turns provider commands into deltas.
///
/// Each load runs on its own thread so a slow request never holds up a newer
/// one; the UI side keeps only the response whose id it is still waiting on.
pub fn spawn_provider<S>(
    source: Arc<S>,
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
) -> JoinHandle<()>
where
    S: PlayerSource + Send + Sync + 'static,
{
    thread::spawn(move || {
        while let Ok(first) = cmd_rx.recv() {
            let mut cmd = first;
            // Only the newest queued load matters.
            while let Ok(next) = cmd_rx.try_recv() {
                cmd = next;
            }

            match cmd {
                ProviderCommand::LoadProfile { request_id, target } => {
                    let source = Arc::clone(&source);
                    let tx = tx.clone();
                    thread::spawn(move || {
                        let result = load_profile(source.as_ref(), &target);
                        if let Ok(loaded) = &result {
                            if let Some(history) = &loaded.history {
                                let _ = tx.send(Delta::Log(format!(
                                    "[INFO] History: {} entries",
                                    history.entry_count()
                                )));
                            }
                        }
                        let _ = tx.send(Delta::ProfileLoaded { request_id, result });
                    });
                }
            }
        }
        tracing::debug!("provider channel closed");
    })
}
