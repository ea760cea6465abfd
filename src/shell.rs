//! Shell screen: owns exactly one render surface for its own lifetime and
//! routes the platform back gesture through the surface's history.

use thiserror::Error;

use crate::config::SurfaceSettings;

/// Errors the render surface can report to the shell. Page-level failures
/// (DNS, TLS, HTTP) never reach this type; the engine shows its own error
/// page for those.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("invalid target url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("webview error: {0}")]
    Platform(#[from] tauri::Error),
}

/// Capability contract the shell consumes from the embedded browser view.
/// The engine owns the navigation history; the shell only queries and steps
/// it.
pub trait RenderSurface {
    fn configure(&mut self, settings: &SurfaceSettings) -> Result<(), SurfaceError>;
    fn load(&mut self, url: &str) -> Result<(), SurfaceError>;
    fn can_go_back(&self) -> bool;
    fn go_back(&mut self) -> Result<(), SurfaceError>;
}

/// What the platform should do with a back gesture after the shell saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackDisposition {
    /// The surface stepped back one history entry; swallow the event.
    Consumed,
    /// No back history; let the platform run its default teardown.
    Propagate,
}

pub struct ShellScreen<S> {
    surface: S,
}

impl<S: RenderSurface> ShellScreen<S> {
    /// Applies the fixed configuration once and issues the single startup
    /// load. The surface begins fetching and rendering asynchronously; the
    /// shell does not wait on it.
    pub fn create(
        mut surface: S,
        settings: SurfaceSettings,
        url: &str,
    ) -> Result<Self, SurfaceError> {
        surface.configure(&settings)?;
        surface.load(url)?;
        Ok(Self { surface })
    }

    /// Routes a platform back gesture. History present: step back one entry
    /// and consume the event. History exhausted: hand the event back to the
    /// platform, however often it is delivered.
    pub fn on_back(&mut self) -> BackDisposition {
        if !self.surface.can_go_back() {
            return BackDisposition::Propagate;
        }
        match self.surface.go_back() {
            Ok(()) => BackDisposition::Consumed,
            Err(err) => {
                // The gesture reached the surface; keep the screen alive
                // rather than tearing it down over a failed history step.
                log::warn!("history navigation failed: {err}");
                BackDisposition::Consumed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        configured: Option<SurfaceSettings>,
        loads: Vec<String>,
        history: usize,
        back_calls: usize,
    }

    impl RenderSurface for RecordingSurface {
        fn configure(&mut self, settings: &SurfaceSettings) -> Result<(), SurfaceError> {
            self.configured = Some(settings.clone());
            Ok(())
        }

        fn load(&mut self, url: &str) -> Result<(), SurfaceError> {
            self.loads.push(url.to_owned());
            Ok(())
        }

        fn can_go_back(&self) -> bool {
            self.history > 0
        }

        fn go_back(&mut self) -> Result<(), SurfaceError> {
            self.back_calls += 1;
            self.history -= 1;
            Ok(())
        }
    }

    fn screen_with_history(depth: usize) -> ShellScreen<RecordingSurface> {
        let surface = RecordingSurface {
            history: depth,
            ..Default::default()
        };
        ShellScreen::create(surface, SurfaceSettings::default(), "https://example.org/")
            .unwrap()
    }

    #[test]
    fn create_applies_fixed_configuration() {
        let screen = screen_with_history(0);
        let settings = screen.surface.configured.as_ref().unwrap();
        assert!(settings.javascript);
        assert!(settings.dom_storage);
        assert!(settings.viewport_fit);
        assert!(settings.zoom_gestures);
        assert!(!settings.zoom_controls);
    }

    #[test]
    fn create_issues_exactly_one_load_for_the_target_url() {
        let screen = screen_with_history(0);
        assert_eq!(screen.surface.loads, ["https://example.org/"]);
    }

    #[test]
    fn back_without_history_propagates_and_never_steps_the_surface() {
        let mut screen = screen_with_history(0);
        assert_eq!(screen.on_back(), BackDisposition::Propagate);
        assert_eq!(screen.surface.back_calls, 0);
    }

    #[test]
    fn back_with_history_steps_once_and_consumes_the_event() {
        let mut screen = screen_with_history(1);
        assert_eq!(screen.on_back(), BackDisposition::Consumed);
        assert_eq!(screen.surface.back_calls, 1);
    }

    #[test]
    fn back_walks_history_then_falls_through_to_the_platform() {
        let mut screen = screen_with_history(2);
        assert_eq!(screen.on_back(), BackDisposition::Consumed);
        assert_eq!(screen.on_back(), BackDisposition::Consumed);
        assert_eq!(screen.on_back(), BackDisposition::Propagate);
        assert_eq!(screen.surface.back_calls, 2);
    }

    #[test]
    fn exhausted_history_keeps_propagating_without_panicking() {
        let mut screen = screen_with_history(0);
        for _ in 0..5 {
            assert_eq!(screen.on_back(), BackDisposition::Propagate);
        }
        assert_eq!(screen.surface.back_calls, 0);
    }
}
