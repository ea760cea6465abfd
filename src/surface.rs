//! Tauri-backed render surface.
//!
//! The webview engine owns the real navigation history and exposes no
//! synchronous query for it, so this surface mirrors the history depth in an
//! atomic counter fed by the builder's navigation hook. `history.back()` is
//! evaluated in the page; the hook decrements the mirror when that
//! navigation lands.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use tauri::{AppHandle, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::config::SurfaceSettings;
use crate::shell::{RenderSurface, SurfaceError};

/// Label of the single shell window.
pub const SHELL_WINDOW: &str = "shell";

pub struct TauriSurface {
    app: AppHandle,
    settings: SurfaceSettings,
    webview: Option<WebviewWindow>,
    depth: Arc<AtomicUsize>,
    backing_out: Arc<AtomicBool>,
}

impl TauriSurface {
    pub fn new(app: AppHandle) -> Self {
        Self {
            app,
            settings: SurfaceSettings::default(),
            webview: None,
            depth: Arc::new(AtomicUsize::new(0)),
            backing_out: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Page-side half of the surface configuration, injected before any page
    /// script runs. The engine handles script execution and DOM storage
    /// natively; viewport fit and gesture policy are applied here.
    fn bootstrap_script(settings: &SurfaceSettings) -> String {
        let cfg = serde_json::to_string(settings).unwrap_or_else(|_| "{}".into());
        format!(
            r#"(function (cfg) {{
  var apply = function () {{
    if (cfg.viewportFit && !document.querySelector('meta[name="viewport"]')) {{
      var meta = document.createElement('meta');
      meta.name = 'viewport';
      meta.content = 'width=device-width, initial-scale=1';
      document.head.appendChild(meta);
    }}
    document.documentElement.style.touchAction =
      cfg.zoomGestures ? 'pan-x pan-y pinch-zoom' : 'pan-x pan-y';
  }};
  if (document.readyState === 'loading') {{
    document.addEventListener('DOMContentLoaded', apply);
  }} else {{
    apply();
  }}
}})({cfg});"#
        )
    }
}

impl RenderSurface for TauriSurface {
    fn configure(&mut self, settings: &SurfaceSettings) -> Result<(), SurfaceError> {
        if !settings.javascript || !settings.dom_storage {
            // wry keeps both enabled; there is no per-window opt-out.
            log::warn!("webview engine keeps script and storage enabled; opt-out ignored");
        }
        self.settings = settings.clone();
        Ok(())
    }

    fn load(&mut self, url: &str) -> Result<(), SurfaceError> {
        let target = Url::parse(url).map_err(|err| SurfaceError::InvalidUrl {
            url: url.to_owned(),
            message: err.to_string(),
        })?;

        if let Some(webview) = &self.webview {
            // The shell only loads once, but a relaunch intent may arrive
            // through the same surface handle.
            let href = serde_json::to_string(target.as_str())
                .unwrap_or_else(|_| "\"about:blank\"".into());
            webview.eval(&format!("window.location.href = {href};"))?;
            return Ok(());
        }

        let depth = Arc::clone(&self.depth);
        let backing_out = Arc::clone(&self.backing_out);
        let webview =
            WebviewWindowBuilder::new(&self.app, SHELL_WINDOW, WebviewUrl::External(target))
                .title("site-shell")
                .initialization_script(&Self::bootstrap_script(&self.settings))
                .zoom_hotkeys_enabled(self.settings.zoom_gestures)
                .on_navigation(move |_url| {
                    if backing_out.swap(false, Ordering::SeqCst) {
                        let _ = depth.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |d| {
                            Some(d.saturating_sub(1))
                        });
                    } else {
                        depth.fetch_add(1, Ordering::SeqCst);
                    }
                    true
                })
                .build()?;
        self.webview = Some(webview);
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.depth.load(Ordering::SeqCst) > 1
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        let Some(webview) = &self.webview else {
            return Ok(());
        };
        self.backing_out.store(true, Ordering::SeqCst);
        if let Err(err) = webview.eval("history.back();") {
            self.backing_out.store(false, Ordering::SeqCst);
            return Err(err.into());
        }
        Ok(())
    }
}
