//! Build-injected target URL and the fixed webview configuration.

use serde::{Deserialize, Serialize};

/// Address the shell loads on startup.
///
/// The value below is a placeholder on the reserved `.invalid` TLD. The
/// release pipeline replaces this whole literal with the real site address
/// before compilation; an unsubstituted build can therefore never resolve.
pub const HOME_URL: &str = "https://SHELL-TARGET-URL.invalid/";

/// True when `url` still points at the substitution placeholder.
pub fn url_is_unsubstituted(url: &str) -> bool {
    url.contains(".invalid")
}

/// Fixed configuration applied to the render surface exactly once, at screen
/// creation. Serialized to JSON for the surface's bootstrap script, so field
/// names travel into page scripts in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceSettings {
    /// Let pages execute scripts.
    pub javascript: bool,
    /// Let pages use DOM-backed local storage.
    pub dom_storage: bool,
    /// Scale content to fit the viewport width.
    pub viewport_fit: bool,
    /// Accept pinch-zoom gestures.
    pub zoom_gestures: bool,
    /// Show the engine's built-in zoom widgets.
    pub zoom_controls: bool,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            javascript: true,
            dom_storage: true,
            viewport_fit: true,
            zoom_gestures: true,
            zoom_controls: false,
        }
    }
}
