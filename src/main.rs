use fltk::{app, dialog, prelude::*};
use std::cell::RefCell;
use std::rc::Rc;

use dusk_switch::app::controllers::mode::{handle_toggle, init_mode};
use dusk_switch::app::infrastructure::platform::SystemColorScheme;
use dusk_switch::app::infrastructure::store::FilePreferenceStore;
use dusk_switch::ui::main_window::{build_main_window, locate_mode_toggle};
use dusk_switch::ui::surface::FltkSurface;

fn main() {
    let app = app::App::default();

    let widgets = build_main_window();
    let mut wind = widgets.wind.clone();
    wind.show();

    let mut toggle = match locate_mode_toggle() {
        Ok(toggle) => toggle,
        Err(e) => {
            dialog::alert_default(&format!("DuskSwitch cannot start: {}", e));
            std::process::exit(1);
        }
    };

    let store = Rc::new(RefCell::new(FilePreferenceStore::load()));
    let surface = Rc::new(RefCell::new(FltkSurface::new(
        widgets.wind.clone(),
        widgets.heading.clone(),
        widgets.body.clone(),
        widgets.toggle.clone(),
    )));

    // Resolve, apply, and sync the toggle's checked state; runs once.
    init_mode(
        &*store.borrow(),
        &SystemColorScheme,
        &mut *surface.borrow_mut(),
        &mut toggle,
    );

    // The toggle's single interaction subscription. The control already
    // shows the clicked state, so only mode + persistence remain.
    let store_cb = store.clone();
    let surface_cb = surface.clone();
    toggle.set_callback(move |t| {
        handle_toggle(
            &mut *store_cb.borrow_mut(),
            &mut *surface_cb.borrow_mut(),
            t.value(),
        );
    });

    app.run().unwrap();
}
