//! Typecase - a font browser built on GPUI
//!
//! Lists the fonts installed on this machine, filters them by name and
//! monospace, and collects pinned fonts for side by side comparison.

mod assets;
mod browser_state;
mod catalog;
mod checkbox;
mod custom_titlebar;
mod export;
mod filter;
mod font_browser;
mod pins;
mod search_input;
mod select;
mod slider;
mod theme;

use gpui::{
    actions, point, prelude::*, px, size, App, Application, Bounds, KeyBinding, Menu, MenuItem,
    SystemMenuType, TitlebarOptions, WindowBounds, WindowOptions,
};

use crate::assets::Assets;
use crate::font_browser::{ClearPins, FocusSearch, FontBrowser, RefreshCatalog};

actions!(typecase, [Quit]);

#[cfg(target_os = "macos")]
const fn cmd(mac: &'static str, _other: &'static str) -> &'static str {
    mac
}

#[cfg(not(target_os = "macos"))]
const fn cmd(_mac: &'static str, other: &'static str) -> &'static str {
    other
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("Typecase starting up...");

    Application::new().with_assets(Assets).run(|cx: &mut App| {
        cx.activate(true);
        cx.on_action(quit);
        bind_keys(cx);
        set_app_menus(cx);

        let bounds = Bounds::centered(None, size(px(1100.), px(760.)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Typecase".into()),
                appears_transparent: true,
                traffic_light_position: Some(point(px(9.), px(11.))),
            }),
            window_min_size: Some(size(px(640.), px(420.))),
            ..Default::default()
        };

        if let Err(err) = cx.open_window(options, |window, cx| {
            cx.new(|cx| FontBrowser::new(window, cx))
        }) {
            log::error!("Failed to open the browser window: {err:#}");
            cx.quit();
        }
    });
}

fn bind_keys(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("backspace", search_input::Backspace, Some("SearchInput")),
        KeyBinding::new("escape", search_input::Escape, Some("SearchInput")),
        KeyBinding::new(cmd("cmd-r", "ctrl-r"), RefreshCatalog, Some("FontBrowser")),
        KeyBinding::new(
            cmd("cmd-shift-k", "ctrl-shift-k"),
            ClearPins,
            Some("FontBrowser"),
        ),
        KeyBinding::new(cmd("cmd-f", "ctrl-f"), FocusSearch, Some("FontBrowser")),
        KeyBinding::new(cmd("cmd-q", "ctrl-q"), Quit, None),
    ]);
}

fn set_app_menus(cx: &mut App) {
    cx.set_menus(vec![
        Menu {
            name: "Typecase".into(),
            items: vec![
                MenuItem::os_submenu("Services", SystemMenuType::Services),
                MenuItem::separator(),
                MenuItem::action("Quit", Quit),
            ],
        },
        Menu {
            name: "Fonts".into(),
            items: vec![
                MenuItem::action("Refresh", RefreshCatalog),
                MenuItem::action("Clear Pins", ClearPins),
                MenuItem::separator(),
                MenuItem::action("Find", FocusSearch),
            ],
        },
    ]);
}

fn quit(_: &Quit, cx: &mut App) {
    log::info!("Quitting");
    cx.quit();
}
