// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Toolkit interface
//!
//! The native toolkit is an external collaborator. This trait is the whole
//! of the interface used to reach it: wrappers unwrap to a [`Handle`] at
//! each call.

use crate::event::{KeyDetails, KeyEvent, SubscriptionId};
use crate::{Alert, AlertResponse, FileChooserRequest, Handle, Result, WindowRequest};
use std::path::PathBuf;

/// Handler for key-press events: `(target, event) -> consumed`
pub type KeyPressHandler = Box<dyn FnMut(Handle, KeyEvent) -> bool>;

/// Handler for window-manager close requests: returns true to keep the
/// window open (the request was handled)
pub type DeleteHandler = Box<dyn FnMut(Handle) -> bool>;

/// Callback run once a newly created window exists
pub type RealizeHandler = Box<dyn FnOnce(Handle)>;

/// Description of a native widget to construct
///
/// One variant per wrapper constructor; parameters are forwarded unchanged.
/// Clamping and validation of values is the toolkit's business.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Construct {
    Adjustment {
        value: f64,
        lower: f64,
        upper: f64,
        step_increment: f64,
        page_increment: f64,
        page_size: f64,
    },
    Alignment {
        xalign: f32,
        yalign: f32,
        xscale: f32,
        yscale: f32,
    },
    Button {
        label: Option<String>,
    },
    CellRendererText,
    CheckButton {
        label: String,
    },
    /// `max_length: None` means unbounded
    Entry {
        max_length: Option<usize>,
    },
    HBox {
        homogenous: bool,
        spacing: i32,
    },
    Label {
        label: String,
    },
    Menu,
    MenuItem {
        label: String,
        mnemonic: bool,
    },
    ScrolledWindow,
    Table {
        rows: usize,
        columns: usize,
        homogenous: bool,
    },
    /// The view does not take ownership of `model`
    TreeView {
        model: Handle,
    },
    VBox {
        homogenous: bool,
        spacing: i32,
    },
}

impl Construct {
    /// Name of the native widget class
    pub fn class_name(&self) -> &'static str {
        match self {
            Construct::Adjustment { .. } => "Adjustment",
            Construct::Alignment { .. } => "Alignment",
            Construct::Button { .. } => "Button",
            Construct::CellRendererText => "CellRendererText",
            Construct::CheckButton { .. } => "CheckButton",
            Construct::Entry { .. } => "Entry",
            Construct::HBox { .. } => "HBox",
            Construct::Label { .. } => "Label",
            Construct::Menu => "Menu",
            Construct::MenuItem { .. } => "MenuItem",
            Construct::ScrolledWindow => "ScrolledWindow",
            Construct::Table { .. } => "Table",
            Construct::TreeView { .. } => "TreeView",
            Construct::VBox { .. } => "VBox",
        }
    }
}

/// A native GUI toolkit
///
/// All methods are called on the thread which initialised the toolkit, and
/// may be re-entered from handlers (e.g. a key handler opening an alert).
/// Implementations must therefore not hold internal borrows while invoking
/// a handler.
///
/// Handles passed in were obtained from the same toolkit, though they may
/// be null or refer to destroyed objects; what happens then is up to the
/// toolkit. Handles returned by [`Self::construct`] and
/// [`Self::create_window`] must be null or refer to an object of the
/// requested kind: wrappers rely on this.
pub trait Toolkit {
    /// Initialise the toolkit
    ///
    /// The toolkit may remove the arguments it consumes from `args`.
    /// Returns the root anchor widget (possibly null).
    ///
    /// Initialising a second time must fail with
    /// [`Error::AlreadyInitialised`](crate::Error::AlreadyInitialised).
    fn init(&self, args: &mut Vec<String>) -> Result<Handle>;

    /// Construct a native widget
    fn construct(&self, what: Construct) -> Handle;

    /// Create a window
    ///
    /// If given, `realize` must be called once the window exists.
    fn create_window(&self, request: WindowRequest, realize: Option<RealizeHandler>) -> Handle;

    /// Show a window
    fn show(&self, window: Handle);

    /// Destroy a window
    fn destroy(&self, window: Handle);

    /// Run an alert dialog, modal to `parent`, blocking until it is closed
    ///
    /// Returns `None` if the dialog was dismissed without activating any
    /// button.
    fn alert(&self, parent: Handle, title: &str, alert: &Alert) -> Option<AlertResponse>;

    /// Run a file chooser, modal to `parent`, blocking until it is closed
    ///
    /// Returns `None` on cancellation.
    fn file_chooser(&self, parent: Handle, request: &FileChooserRequest) -> Option<PathBuf>;

    /// Connect a key-press handler
    ///
    /// Returns `None` if the toolkit refuses the connection. Identifiers are
    /// not reused while the toolkit lives.
    fn connect_key_press(
        &self,
        target: Handle,
        handler: KeyPressHandler,
    ) -> Option<SubscriptionId>;

    /// Connect a close-request handler
    ///
    /// Returns `None` if the toolkit refuses the connection.
    fn connect_delete(&self, target: Handle, handler: DeleteHandler) -> Option<SubscriptionId>;

    /// Disconnect a handler; returns false if `id` was not connected
    fn disconnect(&self, id: SubscriptionId) -> bool;

    /// Decode a key event record
    fn key_details(&self, event: KeyEvent) -> Option<KeyDetails>;

    /// Run a single iteration of the event loop
    ///
    /// Returns false when the loop cannot make further progress (no event
    /// source remains or [`Self::quit`] was called).
    fn iterate(&self, blocking: bool) -> bool;

    /// Run the event loop until [`Self::quit`] is called
    fn main(&self);

    /// Request that [`Self::main`] returns
    fn quit(&self);
}
