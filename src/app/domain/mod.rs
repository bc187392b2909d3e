//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The `Mode` enum and the stored-preference contract
//! - The ports the controllers are written against

pub mod mode;

pub use mode::{IS_LIGHT_MODE_KEY, Mode, PreferenceStore, SystemTheme, ThemeSurface, ToggleControl};
