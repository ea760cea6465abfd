// site-shell — one-screen wrapper around a single remote site.
// The webview engine does all networking, rendering, and script execution;
// this backend provides the native window and routes the platform back
// gesture into page history. Android loads this lib target through the
// mobile entry point; desktop goes through src/main.rs.

use std::sync::Mutex;

use tauri::{Manager, WindowEvent};

pub mod config;
pub mod shell;
pub mod surface;

use config::{SurfaceSettings, HOME_URL};
use shell::{BackDisposition, ShellScreen};
use surface::TauriSurface;

type Screen = Mutex<ShellScreen<TauriSurface>>;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            if config::url_is_unsubstituted(HOME_URL) {
                log::warn!("target url still carries the build placeholder: {HOME_URL}");
            }
            log::info!("loading {HOME_URL}");
            let screen = ShellScreen::create(
                TauriSurface::new(app.handle().clone()),
                SurfaceSettings::default(),
                HOME_URL,
            )?;
            app.manage(Screen::new(screen));
            Ok(())
        })
        .on_window_event(|window, event| {
            if window.label() != surface::SHELL_WINDOW {
                return;
            }
            if let WindowEvent::CloseRequested { api, .. } = event {
                let Some(screen) = window.try_state::<Screen>() else {
                    return;
                };
                let disposition = match screen.lock() {
                    Ok(mut screen) => screen.on_back(),
                    Err(_) => BackDisposition::Propagate,
                };
                if disposition == BackDisposition::Consumed {
                    api.prevent_close();
                }
            }
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
