/// The two mutually exclusive visual modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub fn from_is_light(is_light: bool) -> Self {
        if is_light { Mode::Light } else { Mode::Dark }
    }

    pub fn is_light(self) -> bool {
        matches!(self, Mode::Light)
    }
}

/// Storage key the mode preference lives under.
///
/// The stored value is the text `"true"` (light) or `"false"` (dark).
/// Installations already hold values in this format, so neither the key nor
/// the encoding may change.
pub const IS_LIGHT_MODE_KEY: &str = "isLightMode";

/// Durable key-value storage for user preferences.
///
/// `get` must distinguish an absent key from any stored value; `set`
/// overwrites unconditionally and survives restarts.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Read-only query for the desktop's color-scheme preference.
/// Read once per startup; scheme changes are not tracked live.
pub trait SystemTheme {
    fn prefers_light(&self) -> bool;
}

/// The rendered surface's root-level style markers.
///
/// Exactly one of the two mode markers is meant to be active at a time; the
/// applier in `controllers::mode` maintains that invariant. How an active
/// marker translates into colors is up to the implementation.
pub trait ThemeSurface {
    fn set_marker(&mut self, marker: Mode, active: bool);
}

/// The single control the user flips to change modes.
pub trait ToggleControl {
    fn set_checked(&mut self, checked: bool);
}
