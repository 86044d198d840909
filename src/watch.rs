//! Development-time configuration hot reload.
//!
//! A [`ConfigWatcher`] polls a JSON config document on an interval,
//! re-validates it, and delivers a fresh [`ValidatedScene`] whenever the
//! *validated* result changed (comparison is over the serialized validated
//! config, so editor noise that validates to the same scene is ignored).
//!
//! The watcher owns one background thread. [`ConfigWatcher::stop`] (also
//! run on drop) flags the thread and joins it, so no delivery happens after
//! teardown; a tick that was in flight is discarded. Consumers that only
//! want the newest scene drain their receiver to the last value.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, warn};

use crate::foundation::error::{SceneryError, SceneryResult};
use crate::validate::document::{ValidatedScene, Validator};

/// Handle to a background config re-validation poller.
pub struct ConfigWatcher {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ConfigWatcher {
    /// Spawn a poller for `path`, delivering changed scenes on the
    /// returned channel.
    ///
    /// `interval` is how often the file is re-read; the validated scene
    /// for the initial read is delivered immediately when the file parses.
    pub fn spawn(
        path: impl Into<PathBuf>,
        interval: Duration,
        validator: Validator,
    ) -> SceneryResult<(Self, Receiver<ValidatedScene>)> {
        let path = path.into();
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = channel();

        let thread_stop = Arc::clone(&stop);
        let handle = std::thread::Builder::new()
            .name("scenery-watch".to_owned())
            .spawn(move || poll_loop(path, interval, validator, thread_stop, tx))
            .map_err(|err| SceneryError::watch(format!("failed to spawn watcher: {err}")))?;

        Ok((
            Self {
                stop,
                handle: Some(handle),
            },
            rx,
        ))
    }

    /// Stop polling and join the background thread.
    ///
    /// Idempotent; after this returns no further scene is delivered.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ConfigWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn poll_loop(
    path: PathBuf,
    interval: Duration,
    validator: Validator,
    stop: Arc<AtomicBool>,
    tx: Sender<ValidatedScene>,
) {
    let mut last_fingerprint: Option<String> = None;
    loop {
        if stop.load(Ordering::Relaxed) {
            return;
        }

        if let Some(scene) = read_and_validate(&path, &validator) {
            let fingerprint = fingerprint(&scene);
            if fingerprint.is_some() && fingerprint != last_fingerprint {
                last_fingerprint = fingerprint;
                // Teardown may have raced the read; the flag check keeps a
                // stale tick from delivering after stop() returned.
                if stop.load(Ordering::Relaxed) {
                    return;
                }
                debug!(path = %path.display(), issues = scene.report.len(), "config hot-reload");
                if tx.send(scene).is_err() {
                    return; // receiver gone, nothing left to do
                }
            }
        }

        // Sleep in short slices so stop() never waits a full interval.
        let mut remaining = interval;
        let slice = Duration::from_millis(25);
        while remaining > Duration::ZERO {
            if stop.load(Ordering::Relaxed) {
                return;
            }
            let nap = remaining.min(slice);
            std::thread::sleep(nap);
            remaining = remaining.saturating_sub(nap);
        }
    }
}

/// Change-detection key for a validated scene.
///
/// `meta.build` is stamped with the current time at validation when the
/// raw document carries no `build` field, so it must not participate in
/// the comparison or every tick would look like a change.
fn fingerprint(scene: &ValidatedScene) -> Option<String> {
    let mut config = scene.config.clone();
    config.meta.build = String::new();
    serde_json::to_string(&config).ok()
}

fn read_and_validate(path: &std::path::Path, validator: &Validator) -> Option<ValidatedScene> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "hot-reload read failed; keeping current scene");
            return None;
        }
    };
    match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(raw) => Some(validator.validate_config(&raw)),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "hot-reload parse failed; keeping current scene");
            None
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/watch.rs"]
mod tests;
