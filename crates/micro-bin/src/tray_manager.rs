//! System tray icon and context menu.
//!
//! Builds the Open / Empty / Personalization / Exit menu, maps clicked menu
//! ids back to [`MenuAction`]s and renders icon files for the controller.

use crate::{AppError, AppResult};

use micro_bin_core::{CoreError, CoreResult, MenuAction, PollInterval, Settings, Theme, TrayView};

use std::{fmt::Display, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::{
    Icon, TrayIcon, TrayIconBuilder,
    menu::{CheckMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem, Submenu},
};

const TOOLTIP: &str = "Micro Bin";

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    open_item_id: MenuId,
    empty_item_id: MenuId,
    exit_item_id: MenuId,
    theme_items: Vec<(Theme, CheckMenuItem)>,
    interval_items: Vec<(PollInterval, CheckMenuItem)>,
}

impl TrayManager {
    /// Create the tray icon and its menu.
    ///
    /// The icon starts without an image and radio groups start unchecked;
    /// the controller fills both in right after construction.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let open_item = MenuItem::new("Open", true, None);
        let empty_item = MenuItem::new("Empty", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let theme_items: Vec<(Theme, CheckMenuItem)> = Theme::ALL
            .iter()
            .map(|&theme| {
                let label = match theme {
                    Theme::Light => "Light theme",
                    Theme::Dark => "Dark theme",
                };
                (theme, CheckMenuItem::new(label, true, false, None))
            })
            .collect();

        let interval_items: Vec<(PollInterval, CheckMenuItem)> = PollInterval::PRESETS
            .iter()
            .map(|&interval| {
                (
                    interval,
                    CheckMenuItem::new(interval.label(), true, false, None),
                )
            })
            .collect();

        let interval_menu = Submenu::new("Check interval", true);
        for (_, item) in &interval_items {
            interval_menu
                .append(item)
                .map_err(|e| tray_error("Failed to add interval item", e))?;
        }

        let personalization = Submenu::new("Personalization", true);
        for (_, item) in &theme_items {
            personalization
                .append(item)
                .map_err(|e| tray_error("Failed to add theme item", e))?;
        }
        personalization
            .append(&PredefinedMenuItem::separator())
            .map_err(|e| tray_error("Failed to add separator", e))?;
        personalization
            .append(&interval_menu)
            .map_err(|e| tray_error("Failed to add interval submenu", e))?;

        let menu = Menu::new();
        menu.append(&open_item)
            .map_err(|e| tray_error("Failed to add open menu", e))?;
        menu.append(&empty_item)
            .map_err(|e| tray_error("Failed to add empty menu", e))?;
        menu.append(&personalization)
            .map_err(|e| tray_error("Failed to add personalization menu", e))?;
        menu.append(&exit_item)
            .map_err(|e| tray_error("Failed to add exit menu", e))?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(TOOLTIP)
            .with_menu(Box::new(menu))
            .build()
            .map_err(|e| tray_error("Failed to create tray icon", e))?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            open_item_id: open_item.id().clone(),
            empty_item_id: empty_item.id().clone(),
            exit_item_id: exit_item.id().clone(),
            theme_items,
            interval_items,
        })
    }

    /// Action bound to a clicked menu id, if it is one of ours.
    pub fn action_for(&self, id: &MenuId) -> Option<MenuAction> {
        if *id == self.open_item_id {
            return Some(MenuAction::Open);
        }
        if *id == self.empty_item_id {
            return Some(MenuAction::Empty);
        }
        if *id == self.exit_item_id {
            return Some(MenuAction::Exit);
        }

        self.theme_items
            .iter()
            .find(|(_, item)| item.id() == id)
            .map(|&(theme, _)| MenuAction::SetTheme(theme))
            .or_else(|| {
                self.interval_items
                    .iter()
                    .find(|(_, item)| item.id() == id)
                    .map(|&(interval, _)| MenuAction::SetInterval(interval))
            })
    }

    /// Decode an icon file into RGBA for the tray.
    #[track_caller]
    fn load_icon(path: &Path) -> AppResult<Icon> {
        let img = image::open(path).map_err(|e| AppError::Icon {
            reason: format!("Failed to decode icon {}: {}", path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::Icon {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl TrayView for TrayManager {
    fn set_icon(&mut self, path: &Path) -> CoreResult<()> {
        let icon = Self::load_icon(path).map_err(|e| CoreError::tray(e.to_string()))?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| CoreError::tray(format!("Failed to update icon: {}", e)))
    }

    // Check items toggle themselves on click, so both groups are rewritten
    // after every selection, including a click on the already checked entry.
    fn sync_menu(&mut self, settings: &Settings) {
        for (theme, item) in &self.theme_items {
            item.set_checked(*theme == settings.theme);
        }
        for (interval, item) in &self.interval_items {
            item.set_checked(interval.same_as(settings.poll_interval));
        }
    }
}

#[track_caller]
fn tray_error(context: &str, e: impl Display) -> AppError {
    AppError::Tray {
        reason: format!("{}: {}", context, e),
        location: ErrorLocation::from(Location::caller()),
    }
}
