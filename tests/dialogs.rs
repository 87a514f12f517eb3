use std::path::PathBuf;
use std::rc::Rc;
use uilib::config::Config;
use uilib::headless::Headless;
use uilib::prelude::*;
use uilib::{FileAction, FileFilter};

fn init() -> (Rc<Headless>, Ui) {
    let _ = env_logger::builder().is_test(true).try_init();
    let toolkit = Rc::new(Headless::new());
    let config = Config::default().with_app_name("Radiant");
    let ui = Ui::with_config(toolkit.clone(), ["app".to_string()], config).unwrap();
    (toolkit, ui)
}

const ALL_TYPES: [AlertType; 5] = [
    AlertType::Ok,
    AlertType::OkCancel,
    AlertType::YesNo,
    AlertType::YesNoCancel,
    AlertType::NoYes,
];

const ALL_RESPONSES: [AlertResponse; 4] = [
    AlertResponse::Ok,
    AlertResponse::Cancel,
    AlertResponse::Yes,
    AlertResponse::No,
];

#[test]
fn alert_response_is_reachable() {
    let (toolkit, ui) = init();
    let root = ui.root();

    for buttons in ALL_TYPES {
        for answer in ALL_RESPONSES {
            toolkit.push_alert_response(answer);
            let response = root.alert(&ui, Alert::new("text").with_buttons(buttons));
            assert!(buttons.accepts(response), "{buttons:?} gave {response:?}");
            if buttons.accepts(answer) {
                assert_eq!(response, answer);
            } else {
                assert_eq!(response, buttons.dismiss_response());
            }
        }

        toolkit.push_alert_dismissed();
        let response = root.alert(&ui, Alert::new("text").with_buttons(buttons));
        assert_eq!(response, buttons.dismiss_response());
    }
}

#[test]
fn alert_defaults() {
    let (toolkit, ui) = init();
    let response = ui.root().alert(&ui, Alert::new("Hello"));
    assert_eq!(response, AlertResponse::Ok);

    let shown = toolkit.alerts();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "Radiant");
    assert_eq!(shown[0].text, "Hello");
    assert_eq!(shown[0].buttons, AlertType::Ok);
    assert_eq!(shown[0].icon, AlertIcon::Default);
    assert_eq!(shown[0].parent, ui.root().handle());
}

#[test]
fn alert_title_and_icon() {
    let (toolkit, ui) = init();
    toolkit.push_alert_response(AlertResponse::No);
    let alert = Alert::new("Overwrite?")
        .with_title("Save")
        .with_buttons(AlertType::NoYes)
        .with_icon(AlertIcon::Question);
    assert_eq!(ui.root().alert(&ui, alert), AlertResponse::No);

    let shown = &toolkit.alerts()[0];
    assert_eq!(shown.title, "Save");
    assert_eq!(shown.icon, AlertIcon::Question);
}

#[test]
fn file_dialog_cancel() {
    let (toolkit, ui) = init();
    let dialog = FileDialog::open("Open Map");

    toolkit.push_file_cancel();
    assert_eq!(ui.root().file_dialog(&ui, &dialog), None);

    toolkit.push_file_choice("");
    assert_eq!(ui.root().file_dialog(&ui, &dialog), None);

    // nothing scripted
    assert_eq!(ui.root().file_dialog(&ui, &dialog), None);
    assert_eq!(toolkit.file_requests().len(), 3);
}

#[test]
fn file_dialog_open() {
    let (toolkit, ui) = init();
    let dialog = FileDialog::open("Open Map")
        .with_path("/maps/")
        .with_pattern("map");

    toolkit.push_file_choice("/maps/q3dm1.map");
    let chosen = ui.root().file_dialog(&ui, &dialog);
    assert_eq!(chosen, Some(PathBuf::from("/maps/q3dm1.map")));

    let request = &toolkit.file_requests()[0];
    assert_eq!(request.action, FileAction::Open);
    assert_eq!(request.title, "Open Map");
    assert_eq!(request.accept_label, "Open");
    assert_eq!(request.folder, Some(PathBuf::from("/maps/")));
    assert_eq!(request.file_name, None);
    assert_eq!(request.filters.len(), 2);
    assert_eq!(request.filters[0].glob, "*.map");
    assert_eq!(request.filters[1], FileFilter::all());
}

#[test]
fn file_dialog_save_appends_extension() {
    let (toolkit, ui) = init();
    let dialog = FileDialog::save("Save Map")
        .with_path("/maps/untitled.map")
        .with_pattern("map");

    toolkit.push_file_choice("/maps/arena");
    let chosen = ui.root().file_dialog(&ui, &dialog);
    assert_eq!(chosen, Some(PathBuf::from("/maps/arena.map")));

    let request = &toolkit.file_requests()[0];
    assert_eq!(request.action, FileAction::Save);
    assert_eq!(request.file_name.as_deref(), Some("untitled.map"));
    assert_eq!(request.folder, Some(PathBuf::from("/maps")));
}

#[test]
fn file_dialog_accept_label() {
    let (toolkit, ui) = init();
    ui.root().file_dialog(&ui, &FileDialog::open("Import").want_import().want_load());
    ui.root().file_dialog(&ui, &FileDialog::open("Load").want_load());
    ui.root().file_dialog(&ui, &FileDialog::save("Export").want_save());

    let labels: Vec<_> = toolkit.file_requests().iter().map(|r| r.accept_label).collect();
    assert_eq!(labels, ["Import", "Load", "Save"]);
}
