//! Mode resolution and application.
//!
//! The three operations here (resolve, apply, toggle) plus the startup
//! sequence are the whole mode lifecycle. They are written against the ports
//! in the domain layer so they can run without FLTK or a real config file.

use crate::app::domain::mode::{
    IS_LIGHT_MODE_KEY, Mode, PreferenceStore, SystemTheme, ThemeSurface, ToggleControl,
};

/// Compute the effective mode.
///
/// A stored preference always wins; without one (or with one that does not
/// parse as a boolean) the desktop's color scheme decides.
pub fn resolve_mode(store: &dyn PreferenceStore, system: &dyn SystemTheme) -> Mode {
    if let Some(raw) = store.get(IS_LIGHT_MODE_KEY) {
        match raw.parse::<bool>() {
            Ok(is_light) => return Mode::from_is_light(is_light),
            Err(_) => {
                eprintln!(
                    "Ignoring malformed {} value {:?}, using system default",
                    IS_LIGHT_MODE_KEY, raw
                );
            }
        }
    }

    Mode::from_is_light(system.prefers_light())
}

/// Flip the surface's two mode markers so that exactly the one matching
/// `mode` is active. Idempotent.
pub fn apply_mode(surface: &mut dyn ThemeSurface, mode: Mode) {
    surface.set_marker(Mode::Light, mode == Mode::Light);
    surface.set_marker(Mode::Dark, mode == Mode::Dark);
}

/// React to the user flipping the toggle control.
///
/// `is_light` is the control's new checked state. The matching mode is
/// applied and the choice is persisted, overwriting any prior value. The
/// control itself already shows the new state and is not touched.
pub fn handle_toggle(
    store: &mut dyn PreferenceStore,
    surface: &mut dyn ThemeSurface,
    is_light: bool,
) {
    apply_mode(surface, Mode::from_is_light(is_light));
    store.set(IS_LIGHT_MODE_KEY, &is_light.to_string());
}

/// Startup sequence: resolve the mode, apply it, and synchronize the toggle
/// control's checked state with the result.
///
/// Runs exactly once per startup, after the toggle control exists. Returns
/// the resolved mode so the caller can finish platform-side theming.
/// Registering [`handle_toggle`] as the control's callback stays with the
/// caller, since callback wiring is toolkit-specific.
pub fn init_mode(
    store: &dyn PreferenceStore,
    system: &dyn SystemTheme,
    surface: &mut dyn ThemeSurface,
    toggle: &mut dyn ToggleControl,
) -> Mode {
    let mode = resolve_mode(store, system);
    apply_mode(surface, mode);
    toggle.set_checked(mode.is_light());
    mode
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct MemoryStore {
        entries: BTreeMap<String, String>,
    }

    impl MemoryStore {
        fn with_value(value: &str) -> Self {
            let mut store = Self::default();
            store
                .entries
                .insert(IS_LIGHT_MODE_KEY.to_string(), value.to_string());
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.entries.insert(key.to_string(), value.to_string());
        }
    }

    struct FixedSystem(bool);

    impl SystemTheme for FixedSystem {
        fn prefers_light(&self) -> bool {
            self.0
        }
    }

    /// Tracks marker membership like a document root would.
    #[derive(Default)]
    struct MarkerSurface {
        light: bool,
        dark: bool,
    }

    impl MarkerSurface {
        fn active(&self) -> (bool, bool) {
            (self.light, self.dark)
        }
    }

    impl ThemeSurface for MarkerSurface {
        fn set_marker(&mut self, marker: Mode, active: bool) {
            match marker {
                Mode::Light => self.light = active,
                Mode::Dark => self.dark = active,
            }
        }
    }

    #[derive(Default)]
    struct FakeToggle {
        checked: bool,
    }

    impl ToggleControl for FakeToggle {
        fn set_checked(&mut self, checked: bool) {
            self.checked = checked;
        }
    }

    #[test]
    fn test_stored_preference_wins_over_system() {
        // Stored value decides regardless of what the system reports.
        for system_light in [false, true] {
            let system = FixedSystem(system_light);
            assert_eq!(
                resolve_mode(&MemoryStore::with_value("true"), &system),
                Mode::Light
            );
            assert_eq!(
                resolve_mode(&MemoryStore::with_value("false"), &system),
                Mode::Dark
            );
        }
    }

    #[test]
    fn test_absent_preference_falls_back_to_system() {
        let store = MemoryStore::default();
        assert_eq!(resolve_mode(&store, &FixedSystem(true)), Mode::Light);
        assert_eq!(resolve_mode(&store, &FixedSystem(false)), Mode::Dark);
    }

    #[test]
    fn test_malformed_preference_falls_back_to_system() {
        for bad in ["yes", "TRUE", "1", ""] {
            let store = MemoryStore::with_value(bad);
            assert_eq!(resolve_mode(&store, &FixedSystem(true)), Mode::Light);
            assert_eq!(resolve_mode(&store, &FixedSystem(false)), Mode::Dark);
        }
    }

    #[test]
    fn test_apply_mode_activates_exactly_one_marker() {
        let mut surface = MarkerSurface::default();

        apply_mode(&mut surface, Mode::Light);
        assert_eq!(surface.active(), (true, false));

        apply_mode(&mut surface, Mode::Dark);
        assert_eq!(surface.active(), (false, true));
    }

    #[test]
    fn test_apply_mode_is_idempotent() {
        let mut surface = MarkerSurface::default();

        apply_mode(&mut surface, Mode::Dark);
        apply_mode(&mut surface, Mode::Dark);
        assert_eq!(surface.active(), (false, true));

        apply_mode(&mut surface, Mode::Light);
        apply_mode(&mut surface, Mode::Light);
        assert_eq!(surface.active(), (true, false));
    }

    #[test]
    fn test_toggle_persists_choice_and_round_trips() {
        let mut store = MemoryStore::default();
        let mut surface = MarkerSurface::default();

        handle_toggle(&mut store, &mut surface, true);
        assert_eq!(store.get(IS_LIGHT_MODE_KEY).as_deref(), Some("true"));
        // Fresh resolve, as after a restart; system preference is irrelevant now.
        assert_eq!(resolve_mode(&store, &FixedSystem(false)), Mode::Light);

        handle_toggle(&mut store, &mut surface, false);
        assert_eq!(store.get(IS_LIGHT_MODE_KEY).as_deref(), Some("false"));
        assert_eq!(resolve_mode(&store, &FixedSystem(true)), Mode::Dark);
    }

    #[test]
    fn test_toggle_applies_matching_mode() {
        let mut store = MemoryStore::default();
        let mut surface = MarkerSurface::default();

        handle_toggle(&mut store, &mut surface, true);
        assert_eq!(surface.active(), (true, false));

        handle_toggle(&mut store, &mut surface, false);
        assert_eq!(surface.active(), (false, true));
    }

    #[test]
    fn test_init_without_preference_on_dark_system() {
        let store = MemoryStore::default();
        let mut surface = MarkerSurface::default();
        let mut toggle = FakeToggle::default();

        let mode = init_mode(&store, &FixedSystem(false), &mut surface, &mut toggle);

        assert_eq!(mode, Mode::Dark);
        assert_eq!(surface.active(), (false, true));
        assert!(!toggle.checked);
    }

    #[test]
    fn test_init_with_stored_light_overrides_dark_system() {
        let store = MemoryStore::with_value("true");
        let mut surface = MarkerSurface::default();
        let mut toggle = FakeToggle::default();

        let mode = init_mode(&store, &FixedSystem(false), &mut surface, &mut toggle);

        assert_eq!(mode, Mode::Light);
        assert_eq!(surface.active(), (true, false));
        assert!(toggle.checked);
    }

    #[test]
    fn test_stored_dark_survives_reload_and_retoggle() {
        // Stored dark, restart, then the user flips the control to unchecked
        // again: everything stays dark and the stored value stays "false".
        let mut store = MemoryStore::with_value("false");
        let mut surface = MarkerSurface::default();
        let mut toggle = FakeToggle::default();

        let mode = init_mode(&store, &FixedSystem(true), &mut surface, &mut toggle);
        assert_eq!(mode, Mode::Dark);
        assert!(!toggle.checked);

        handle_toggle(&mut store, &mut surface, false);
        assert_eq!(store.get(IS_LIGHT_MODE_KEY).as_deref(), Some("false"));
        assert_eq!(surface.active(), (false, true));
    }

    #[test]
    fn test_system_default_is_never_written_back() {
        let store = MemoryStore::default();
        let mut surface = MarkerSurface::default();
        let mut toggle = FakeToggle::default();

        init_mode(&store, &FixedSystem(true), &mut surface, &mut toggle);

        assert_eq!(store.get(IS_LIGHT_MODE_KEY), None);
    }
}
