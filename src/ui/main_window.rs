use fltk::{
    app,
    button::CheckButton,
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use crate::app::infrastructure::error::{AppError, Result};

/// Widget id the mode toggle is registered under. Startup locates the
/// control through this id; it is part of the window's fixed layout contract.
pub const MODE_TOGGLE_ID: &str = "mode_selector";

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub heading: Frame,
    pub body: Frame,
    pub toggle: CheckButton,
}

pub fn build_main_window() -> MainWidgets {
    let mut wind = Window::new(100, 100, 360, 180, "DuskSwitch");
    wind.set_xclass("DuskSwitch");

    let mut flex = Flex::new(10, 10, 340, 160, None);
    flex.set_type(fltk::group::FlexType::Column);

    let mut heading = Frame::default().with_label("DuskSwitch");
    heading.set_label_size(18);

    let mut body = Frame::default().with_label("Pick the side of dusk this window lives on.");
    body.set_label_size(12);

    let mut toggle = CheckButton::default().with_label("Light mode");
    toggle.set_id(MODE_TOGGLE_ID);
    flex.fixed(&toggle, 30);

    flex.end();
    wind.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        heading,
        body,
        toggle,
    }
}

/// Look the mode toggle up by its fixed id.
///
/// The toggle is the only mode-change affordance, so its absence is fatal to
/// initialization rather than something to skip over.
pub fn locate_mode_toggle() -> Result<CheckButton> {
    app::widget_from_id::<CheckButton>(MODE_TOGGLE_ID)
        .ok_or_else(|| AppError::Ui(format!("mode toggle control '{}' is missing", MODE_TOGGLE_ID)))
}
