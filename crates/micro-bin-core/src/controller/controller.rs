//! Tray menu dispatch.
//!
//! Owns the settings, the shared poller runtime and the view. Every action
//! runs on the UI thread; the poller only reaches the view through
//! [`TrayController::show`], called by the event loop.

use crate::{
    BinProbe, BinState, Flow, IconSelector, MenuAction, PollInterval, Poller, PollerPhase,
    PollerRuntime, Settings, SettingsStore, StateListener, Theme, TrayView,
};

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

/// Dispatches menu actions to the settings store, the probe and the view.
pub struct TrayController<P, V> {
    settings: Settings,
    store: SettingsStore,
    probe: Arc<P>,
    selector: IconSelector,
    runtime: Arc<PollerRuntime>,
    view: V,
}

impl<P, V> TrayController<P, V>
where
    P: BinProbe,
    V: TrayView,
{
    /// Load settings from `store` and sync the view's menu to them.
    pub fn new(store: SettingsStore, probe: Arc<P>, selector: IconSelector, view: V) -> Self {
        let settings = store.load();
        Self::with_settings(settings, store, probe, selector, view)
    }

    /// Build a controller from already loaded settings.
    pub fn with_settings(
        settings: Settings,
        store: SettingsStore,
        probe: Arc<P>,
        selector: IconSelector,
        mut view: V,
    ) -> Self {
        view.sync_menu(&settings);

        Self {
            runtime: Arc::new(PollerRuntime::new(settings.poll_interval)),
            settings,
            store,
            probe,
            selector,
            view,
        }
    }

    /// Current in-memory settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runtime shared with the poller.
    pub fn runtime(&self) -> &Arc<PollerRuntime> {
        &self.runtime
    }

    /// The view driven by this controller.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Show the startup icon, seed the runtime with that state and return the
    /// poller to run on its own thread.
    pub fn start_poller<L: StateListener>(&mut self, listener: L) -> Poller<P, L> {
        let initial = self.refresh();

        if !self.runtime.start(initial) {
            warn!(phase = ?self.runtime.phase(), "Poller runtime already started");
        }

        Poller::new(Arc::clone(&self.probe), Arc::clone(&self.runtime), listener)
    }

    /// Probe the bin and show the matching icon.
    ///
    /// While the poller runs, the shown state also becomes its last observed
    /// state, so a fallback "empty" drawn here is corrected on the next tick.
    pub fn refresh(&mut self) -> BinState {
        let state = self.probe.read().state();
        self.show(state);

        if self.runtime.phase() == PollerPhase::Running {
            self.runtime.observe(state);
        }

        state
    }

    /// Show the icon for `state` under the current theme.
    ///
    /// Leaves the current icon in place when the asset file is missing or the
    /// view rejects it.
    pub fn show(&mut self, state: BinState) {
        let path = self.selector.path_for(self.settings.theme, state);

        if !path.is_file() {
            warn!(path = ?path, "Icon asset missing, keeping current icon");
            return;
        }

        match self.view.set_icon(&path) {
            Ok(()) => debug!(?state, theme = self.settings.theme.as_str(), "Icon updated"),
            Err(e) => warn!(error = %e, path = ?path, "Failed to update icon"),
        }
    }

    /// Run one menu action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: MenuAction) -> Flow {
        match action {
            MenuAction::Open => self.open(),
            MenuAction::Empty => self.empty(),
            MenuAction::SetTheme(theme) => self.set_theme(theme),
            MenuAction::SetInterval(interval) => self.set_interval(interval),
            MenuAction::Exit => return self.exit(),
        }

        Flow::Continue
    }

    fn open(&mut self) {
        if let Err(e) = self.probe.open_folder() {
            warn!(error = %e, "Failed to open recycle bin");
        }
        self.refresh();
    }

    fn empty(&mut self) {
        if self.probe.has_items() {
            if let Err(e) = self.probe.clear() {
                warn!(error = %e, "Failed to empty recycle bin");
            }
        } else {
            debug!("Recycle bin already empty, nothing to clear");
        }
        self.refresh();
    }

    fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        self.persist();
        self.refresh();
        self.view.sync_menu(&self.settings);
        info!(theme = theme.as_str(), "Theme changed");
    }

    fn set_interval(&mut self, interval: PollInterval) {
        self.settings.poll_interval = interval;
        self.persist();
        self.runtime.set_interval(interval);
        self.view.sync_menu(&self.settings);
        info!(interval_secs = interval.as_secs(), "Check interval changed");
    }

    fn exit(&mut self) -> Flow {
        self.runtime.request_stop();
        info!("Exit requested from tray menu");
        Flow::Exit
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.settings) {
            warn!(error = %e, "Failed to save settings, keeping change for this session");
        }
    }
}
