#[allow(clippy::module_inception)]
mod controller;
mod menu_action;
mod tray_view;

pub use {
    controller::TrayController,
    menu_action::{Flow, MenuAction},
    tray_view::TrayView,
};
