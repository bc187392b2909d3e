use fltk::{button::CheckButton, frame::Frame, prelude::*, window::Window};

use super::theme::apply_theme;
#[cfg(target_os = "windows")]
use super::theme::set_windows_titlebar_theme;
use crate::app::domain::mode::{Mode, ThemeSurface, ToggleControl};

/// The FLTK window seen through the `ThemeSurface` port.
///
/// Marker membership is tracked here; a marker turning active repaints the
/// widgets with the matching palette. The widget handles are FLTK's cheap
/// reference clones, so the surface can live alongside the builder's.
pub struct FltkSurface {
    window: Window,
    heading: Frame,
    body: Frame,
    toggle: CheckButton,
    light_active: bool,
    dark_active: bool,
}

impl FltkSurface {
    pub fn new(window: Window, heading: Frame, body: Frame, toggle: CheckButton) -> Self {
        Self {
            window,
            heading,
            body,
            toggle,
            light_active: false,
            dark_active: false,
        }
    }
}

impl ThemeSurface for FltkSurface {
    fn set_marker(&mut self, marker: Mode, active: bool) {
        let slot = match marker {
            Mode::Light => &mut self.light_active,
            Mode::Dark => &mut self.dark_active,
        };
        if *slot == active {
            return;
        }
        *slot = active;

        if active {
            let is_dark = marker == Mode::Dark;
            apply_theme(
                &mut self.window,
                &mut self.heading,
                &mut self.body,
                &mut self.toggle,
                is_dark,
            );

            #[cfg(target_os = "windows")]
            if self.window.shown() {
                set_windows_titlebar_theme(&self.window, is_dark);
            }
        }
    }
}

impl ToggleControl for CheckButton {
    fn set_checked(&mut self, checked: bool) {
        self.set_value(checked);
    }
}
