//! Process wiring.
//!
//! Builds the event loop, the tray and the controller on the main thread and
//! moves the poller onto its own thread with a current-thread tokio runtime.

use crate::{TrayCommand, TrayManager};

use micro_bin_core::{BinState, Flow, IconSelector, RecycleBin, SettingsStore, TrayController};

use std::sync::Arc;

use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tray_icon::menu::MenuEvent;

/// Run the tray until the user picks Exit. Never returns.
///
/// `log_guard` is flushed when the user exits.
pub(crate) fn run(mut log_guard: Option<WorkerGuard>) -> ! {
    info!("Micro Bin starting");

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();

    // Menu clicks arrive on the toolkit's channel; forward them into the
    // event loop so actions run on the thread that owns the tray.
    let menu_proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        if let Err(e) = menu_proxy.send_event(TrayCommand::MenuClicked(event.id)) {
            debug!(error = ?e, "Event loop closed, menu click dropped");
        }
    }));

    let store = SettingsStore::locate().unwrap_or_else(|e| {
        warn!(error = %e, "No user config directory, using working directory");
        SettingsStore::new("config.json")
    });

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let tray_manager = match TrayManager::new() {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    let mut controller = TrayController::new(
        store,
        Arc::new(RecycleBin::new()),
        IconSelector::default(),
        tray_manager,
    );

    let poller_proxy = event_loop.create_proxy();
    let poller = controller.start_poller(move |state: BinState| {
        if let Err(e) = poller_proxy.send_event(TrayCommand::BinChanged(state)) {
            debug!(error = ?e, "Event loop closed, bin state change dropped");
        }
    });

    // The poller thread is never joined: exit ends the process while it may
    // still be inside its sleep.
    let spawned = std::thread::Builder::new()
        .name("bin-poller".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    error!("Failed to create tokio runtime: {:?}", e);
                    return;
                }
            };

            rt.block_on(poller.run());
        });

    if let Err(e) = spawned {
        error!(error = ?e, "Failed to spawn poller thread, icon will not follow the bin");
    }

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        let Event::UserEvent(cmd) = event else {
            return;
        };

        match cmd {
            TrayCommand::BinChanged(state) => controller.show(state),
            TrayCommand::MenuClicked(id) => {
                let Some(action) = controller.view().action_for(&id) else {
                    debug!(id = ?id, "Ignoring unknown menu id");
                    return;
                };

                // Leaving the loop drops the controller, which removes the
                // tray icon.
                if controller.handle(action) == Flow::Exit {
                    info!("Micro Bin shutting down");
                    drop(log_guard.take());
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            }
        }
    });
}
