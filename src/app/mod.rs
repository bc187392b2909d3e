//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core types (Mode, the stored-preference contract, ports)
//! - `controllers/` - Orchestration (mode resolution, application, toggling)
//! - `infrastructure/` - External integrations (preference file, platform, error)

pub mod controllers;
pub mod domain;
pub mod infrastructure;

// Re-exports for convenient external access
pub use controllers::mode::{apply_mode, handle_toggle, init_mode, resolve_mode};
pub use domain::mode::{IS_LIGHT_MODE_KEY, Mode, PreferenceStore, SystemTheme, ThemeSurface, ToggleControl};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::platform::{SystemColorScheme, detect_system_light_mode};
pub use infrastructure::store::FilePreferenceStore;
