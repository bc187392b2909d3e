pub mod main_window;
pub mod surface;
pub mod theme;
