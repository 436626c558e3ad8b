use crate::{BinProbe, BinState, CoreError, CoreResult, PollerRuntime, Settings, TrayView};

use std::{
    collections::VecDeque,
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use tempfile::TempDir;

/// Probe answering from a script, then from a steady value.
///
/// `None` entries in the script are query failures.
pub(crate) struct FakeProbe {
    script: Mutex<VecDeque<Option<bool>>>,
    steady: AtomicBool,
    stop_after: Mutex<Option<(usize, Arc<PollerRuntime>)>>,
    pub(crate) queries: AtomicUsize,
    pub(crate) clears: AtomicUsize,
    pub(crate) opens: AtomicUsize,
}

impl FakeProbe {
    pub(crate) fn steady(full: bool) -> Self {
        Self::scripted(&[], full)
    }

    pub(crate) fn scripted(script: &[Option<bool>], then: bool) -> Self {
        Self {
            script: Mutex::new(script.iter().copied().collect()),
            steady: AtomicBool::new(then),
            stop_after: Mutex::new(None),
            queries: AtomicUsize::new(0),
            clears: AtomicUsize::new(0),
            opens: AtomicUsize::new(0),
        }
    }

    /// Request a poller stop from inside the `n`th query.
    pub(crate) fn stop_after(self, n: usize, runtime: Arc<PollerRuntime>) -> Self {
        *self.stop_after.lock().unwrap_or_else(PoisonError::into_inner) = Some((n, runtime));
        self
    }

    pub(crate) fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub(crate) fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl BinProbe for FakeProbe {
    fn query(&self) -> CoreResult<BinState> {
        let n = self.queries.fetch_add(1, Ordering::SeqCst) + 1;

        let stop_after = self.stop_after.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((limit, runtime)) = stop_after.as_ref() {
            if n >= *limit {
                runtime.request_stop();
            }
        }
        drop(stop_after);

        let next = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(Some(self.steady.load(Ordering::SeqCst)));

        match next {
            Some(full) => Ok(BinState::from(full)),
            None => Err(CoreError::recycle_bin("query", "scripted failure")),
        }
    }

    fn clear(&self) -> CoreResult<()> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.steady.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn open_folder(&self) -> CoreResult<()> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// View remembering every icon and menu sync it was asked for.
#[derive(Default)]
pub(crate) struct RecordingView {
    pub(crate) icons: Vec<PathBuf>,
    pub(crate) synced: Vec<Settings>,
}

impl RecordingView {
    pub(crate) fn last_icon_name(&self) -> Option<String> {
        self.icons
            .last()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }
}

impl TrayView for RecordingView {
    fn set_icon(&mut self, path: &Path) -> CoreResult<()> {
        self.icons.push(path.to_path_buf());
        Ok(())
    }

    fn sync_menu(&mut self, settings: &Settings) {
        self.synced.push(settings.clone());
    }
}

/// Temp directory holding placeholder files for all four icon names.
#[allow(clippy::unwrap_used)]
pub(crate) fn icon_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in [
        "bin_empty_light.ico",
        "bin_full_light.ico",
        "bin_empty_dark.ico",
        "bin_full_dark.ico",
    ] {
        fs::write(dir.path().join(name), b"icon").unwrap();
    }
    dir
}
