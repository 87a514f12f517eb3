use std::cell::Cell;
use std::rc::Rc;
use uilib::headless::Headless;
use uilib::prelude::*;
use uilib::{Error, Modifiers};

fn args() -> Vec<String> {
    ["radiant", "--gtk-module=foo", "-game", "q3"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[test]
fn init_once() {
    let _ = env_logger::builder().is_test(true).try_init();
    let toolkit = Rc::new(Headless::new());
    let ui = Ui::init(toolkit.clone(), args()).unwrap();

    assert!(ui.root().is_valid());
    assert!(toolkit.is_live(ui.root().handle()));
    assert_eq!(ui.args(), ["radiant", "-game", "q3"]);
    assert_eq!(ui.config().app_name, "NetRadiant");

    let again = Ui::with_config(toolkit.clone(), args(), Default::default());
    assert!(matches!(again, Err(Error::AlreadyInitialised)));
    // the first context is unaffected
    assert!(toolkit.is_live(ui.root().handle()));
}

#[test]
fn root_is_stable() {
    let toolkit = Rc::new(Headless::new());
    let ui = Ui::with_config(toolkit, args(), Default::default()).unwrap();
    let root = ui.root();
    assert_eq!(ui.root(), root);

    // SAFETY: the root is a window
    let main = unsafe { Window::from_handle(root.handle()) }.create_floating_window(&ui, "Main");
    ui.set_root(main);
    assert_eq!(ui.root(), Widget::from(main));
}

#[test]
fn main_returns_on_quit() {
    let toolkit = Rc::new(Headless::new());
    let ui = Rc::new(Ui::with_config(toolkit.clone(), args(), Default::default()).unwrap());
    // SAFETY: the root is a window
    let root = unsafe { Window::from_handle(ui.root().handle()) };
    let window = root.create_floating_window(&ui, "W");

    let weak = Rc::downgrade(&ui);
    let pressed = Rc::new(Cell::new(0));
    let p = pressed.clone();
    window
        .on_key_press(&ui, move |_, _| {
            p.set(p.get() + 1);
            if let Some(ui) = weak.upgrade() {
                ui.quit();
            }
            true
        })
        .unwrap();

    toolkit.post_key_press(window.handle(), 0x71, Modifiers::CONTROL);
    toolkit.post_key_press(window.handle(), 0x71, Modifiers::CONTROL);
    ui.main();
    assert_eq!(pressed.get(), 1);

    // one event is left
    assert!(ui.iterate(false));
    assert_eq!(pressed.get(), 2);
    assert!(!ui.iterate(false));
}

#[test]
fn handlers_may_reenter_toolkit() {
    let toolkit = Rc::new(Headless::new());
    let ui = Rc::new(Ui::with_config(toolkit.clone(), args(), Default::default()).unwrap());
    // SAFETY: the root is a window
    let root = unsafe { Window::from_handle(ui.root().handle()) };
    let window = root.create_floating_window(&ui, "W");

    toolkit.push_alert_response(AlertResponse::Yes);
    let weak = Rc::downgrade(&ui);
    let answer = Rc::new(Cell::new(None));
    let a = answer.clone();
    window
        .on_key_press(&ui, move |widget, _| {
            if let Some(ui) = weak.upgrade() {
                let alert = Alert::new("Quit?").with_buttons(AlertType::YesNo);
                a.set(Some(widget.alert(&ui, alert)));
                let _ = Label::new(&ui, "created from a handler");
            }
            true
        })
        .unwrap();

    assert!(toolkit.send_key_press(window.handle(), 0x71, Modifiers::empty()));
    assert_eq!(answer.get(), Some(AlertResponse::Yes));
}

#[cfg(feature = "json")]
#[test]
fn config_file_saved_on_drop() {
    use uilib::config::{Config, ConfigFile};

    let path = std::env::temp_dir().join(format!("uilib-{}-lifecycle.json", std::process::id()));
    std::fs::write(&path, r#"{ "app_name": "Radiant" }"#).unwrap();

    let file = ConfigFile::new(&path).unwrap().with_save_on_exit(true);
    let ui = Ui::with_config_file(Rc::new(Headless::new()), args(), file.clone()).unwrap();
    assert_eq!(ui.config().app_name, "Radiant");
    assert!(ui.config().floating_skip_taskbar);
    drop(ui);

    let saved = std::fs::read_to_string(&path).unwrap();
    let loaded = file.load();
    let _ = std::fs::remove_file(&path);
    assert!(saved.contains("floating_skip_taskbar"));
    assert_eq!(loaded.unwrap(), Config::default().with_app_name("Radiant"));
}

#[test]
fn config_file_not_saved_by_default() {
    use uilib::config::ConfigFile;

    let path = std::env::temp_dir().join(format!("uilib-{}-unsaved.toml", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let file = ConfigFile::new(&path).unwrap();
    let ui = Ui::with_config_file(Rc::new(Headless::new()), args(), file).unwrap();
    assert_eq!(ui.config().app_name, "NetRadiant");
    drop(ui);
    assert!(!path.exists());
}
