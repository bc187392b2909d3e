use fltk::{button::CheckButton, enums::Color, frame::Frame, prelude::*, window::Window};

/// Recolor the window for one of the two modes and repaint.
pub fn apply_theme(
    window: &mut Window,
    heading: &mut Frame,
    body: &mut Frame,
    toggle: &mut CheckButton,
    is_dark: bool,
) {
    if is_dark {
        // Dark mode colors
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        heading.set_label_color(Color::from_rgb(220, 220, 220));
        body.set_label_color(Color::from_rgb(150, 150, 150));
        toggle.set_label_color(Color::from_rgb(220, 220, 220));
        toggle.set_selection_color(Color::from_rgb(70, 70, 100));
    } else {
        // Light mode colors
        window.set_color(Color::from_rgb(240, 240, 240));
        window.set_label_color(Color::Black);
        heading.set_label_color(Color::Black);
        body.set_label_color(Color::from_rgb(100, 100, 100));
        toggle.set_label_color(Color::Black);
        toggle.set_selection_color(Color::from_rgb(60, 60, 60));
    }

    window.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
