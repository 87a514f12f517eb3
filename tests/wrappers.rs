use std::mem::{align_of, size_of};
use std::rc::Rc;
use uilib::headless::Headless;
use uilib::prelude::*;
use uilib::toolkit::Construct;
use uilib::{Handle, sys};

fn init() -> (Rc<Headless>, Ui) {
    let _ = env_logger::builder().is_test(true).try_init();
    let toolkit = Rc::new(Headless::new());
    let ui = Ui::with_config(toolkit.clone(), ["app".to_string()], Default::default()).unwrap();
    (toolkit, ui)
}

macro_rules! for_all_types {
    ($m:ident) => {
        $m!(Object);
        $m!(Widget);
        $m!(Adjustment);
        $m!(Alignment);
        $m!(uilib::Box);
        $m!(Button);
        $m!(CellRenderer);
        $m!(CellRendererText);
        $m!(CheckButton);
        $m!(Entry);
        $m!(HBox);
        $m!(Label);
        $m!(Menu);
        $m!(MenuItem);
        $m!(ScrolledWindow);
        $m!(SpinButton);
        $m!(Table);
        $m!(TreeModel);
        $m!(TreeView);
        $m!(VBox);
        $m!(Window);
    };
}

#[test]
fn pointer_sized() {
    macro_rules! check {
        ($t:ty) => {
            assert_eq!(size_of::<$t>(), size_of::<*mut ()>(), stringify!($t));
            assert_eq!(align_of::<$t>(), align_of::<*mut ()>(), stringify!($t));
            assert_eq!(size_of::<Option<$t>>(), 2 * size_of::<*mut ()>());
        };
    }
    for_all_types!(check);
}

#[test]
fn null_and_default() {
    macro_rules! check {
        ($t:ty) => {
            let w = <$t>::default();
            assert!(!w.is_valid(), stringify!($t));
            assert_eq!(w.handle(), Handle::NULL);
            assert_eq!(w, <$t>::null());
        };
    }
    for_all_types!(check);
}

#[test]
fn handle_round_trip() {
    let (toolkit, ui) = init();
    let label = Label::new(&ui, "Name");
    let handle = label.handle();
    assert!(label.is_valid());
    assert_eq!(toolkit.class_of(handle), Some("Label"));
    assert_eq!(toolkit.text_of(handle).as_deref(), Some("Name"));

    // SAFETY: the handle was produced for a label
    let again = unsafe { Label::from_handle(handle) };
    assert_eq!(again, label);
    // SAFETY: as above
    let native = unsafe { Label::from_native(handle.cast::<sys::GtkLabel>()) };
    assert_eq!(native, label);
}

#[test]
fn upcasts_keep_handle() {
    let (_, ui) = init();
    let hbox = HBox::new(&ui, false, 4);
    let b: uilib::Box = hbox.into();
    let w: Widget = hbox.into();
    let o: Object = hbox.into();
    assert_eq!(b.handle(), hbox.handle());
    assert_eq!(w.handle(), hbox.handle());
    assert_eq!(o.handle(), hbox.handle());

    let text = CellRendererText::new(&ui);
    let r: CellRenderer = text.into();
    assert_eq!(Object::from(text), Object::from(r));
}

#[test]
fn implicit_native_conversion() {
    fn takes_widget(w: impl Into<*mut sys::GtkWidget>) -> *mut sys::GtkWidget {
        w.into()
    }
    fn takes_button(b: impl Into<*mut sys::GtkButton>) -> *mut sys::GtkButton {
        b.into()
    }

    let (_, ui) = init();
    let button = Button::with_label(&ui, "OK");
    assert_eq!(takes_button(button), button.handle().cast::<sys::GtkButton>());
    assert_eq!(takes_widget(Widget::from(button)), button.handle().cast::<sys::GtkWidget>());

    let object = Object::from(button);
    assert_eq!(object.to_native(), button.handle().cast::<sys::GtkObject>());
    assert_eq!(object.as_type_instance(), button.handle().cast::<sys::GTypeInstance>());
}

#[test]
fn constructors_forward_parameters() {
    let (toolkit, ui) = init();

    let adj = Adjustment::new(&ui, 150.0, 0.0, 100.0, 1.0, 10.0, 0.0);
    match toolkit.construct_of(adj.handle()) {
        Some(Construct::Adjustment { value, upper, .. }) => {
            assert_eq!(upper, 100.0);
            assert_eq!(value, 100.0);
        }
        other => panic!("unexpected: {other:?}"),
    }

    let table = Table::new(&ui, 3, 2, true);
    assert_eq!(
        toolkit.construct_of(table.handle()),
        Some(Construct::Table {
            rows: 3,
            columns: 2,
            homogenous: true
        })
    );

    let item = MenuItem::new(&ui, "_File", true);
    assert_eq!(toolkit.text_of(item.handle()).as_deref(), Some("_File"));
    assert_eq!(toolkit.class_of(Menu::new(&ui).handle()), Some("Menu"));
    assert_eq!(
        toolkit.class_of(ScrolledWindow::new(&ui).handle()),
        Some("ScrolledWindow")
    );
    assert_eq!(toolkit.class_of(VBox::new(&ui, true, 0).handle()), Some("VBox"));
    assert_eq!(
        toolkit.class_of(CheckButton::with_label(&ui, "x").handle()),
        Some("CheckButton")
    );
    let alignment = Alignment::new(&ui, 0.5, 0.5, 1.0, 1.0);
    assert_eq!(toolkit.class_of(alignment.handle()), Some("Alignment"));
    assert_eq!(toolkit.text_of(Button::new(&ui).handle()).as_deref(), Some(""));
}

#[test]
fn tree_view_references_model() {
    let (toolkit, ui) = init();
    // the headless toolkit has no model constructor; any live object will do
    // SAFETY: the handle is only passed back to the toolkit
    let model = unsafe { TreeModel::from_handle(Menu::new(&ui).handle()) };
    let view = TreeView::new(&ui, model);
    assert_eq!(
        toolkit.construct_of(view.handle()),
        Some(Construct::TreeView {
            model: model.handle()
        })
    );
    assert!(toolkit.is_live(model.handle()));
}

#[test]
fn entry_max_length() {
    let (toolkit, ui) = init();
    let entry = Entry::with_max_length(&ui, 10);
    assert_eq!(toolkit.entry_insert_text(entry.handle(), "abcdefghijk"), 10);
    assert_eq!(toolkit.text_of(entry.handle()).as_deref(), Some("abcdefghij"));

    let entry = Entry::new(&ui);
    assert_eq!(toolkit.entry_insert_text(entry.handle(), "abcdefghijk"), 11);
}

#[test]
fn debug_format() {
    assert_eq!(format!("{:?}", Button::null()), "Button(Handle(null))");
}
