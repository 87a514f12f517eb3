// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Window factories and window events

use crate::event::{KeyEvent, SubscriptionId};
use crate::toolkit::{DeleteHandler, KeyPressHandler, RealizeHandler};
use crate::{AlertResponse, Error, Handle, Result, Ui, Widget, Window};
use std::cell::Cell;
use std::rc::Rc;

bitflags! {
    /// Window properties requested from the toolkit
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        /// Block interaction with the parent while shown
        const MODAL = 1 << 0;
        /// Keep above the parent
        const TRANSIENT = 1 << 1;
        /// Do not list in the task bar
        const SKIP_TASKBAR = 1 << 2;
        /// Destroy together with the parent
        const DESTROY_WITH_PARENT = 1 << 3;
    }
}

/// Kind of window created by a factory
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowKind {
    /// Non-modal dialog, see [`Window::create_dialog_window`]
    Dialog,
    /// Modal dialog, see [`Window::create_modal_dialog_window`]
    Modal,
    /// Independent tool window, see [`Window::create_floating_window`]
    Floating,
}

/// Default size of a new window
///
/// A negative dimension lets the toolkit choose its natural size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultSize {
    pub width: i32,
    pub height: i32,
}

impl DefaultSize {
    /// Let the toolkit choose
    pub const NATURAL: DefaultSize = DefaultSize::new(-1, -1);

    /// Construct
    pub const fn new(width: i32, height: i32) -> Self {
        DefaultSize { width, height }
    }

    /// True if the toolkit chooses both dimensions
    pub fn is_natural(self) -> bool {
        self.width < 0 && self.height < 0
    }
}

impl Default for DefaultSize {
    fn default() -> Self {
        DefaultSize::NATURAL
    }
}

impl From<(i32, i32)> for DefaultSize {
    fn from((width, height): (i32, i32)) -> Self {
        DefaultSize { width, height }
    }
}

/// A window creation request, as passed to the toolkit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowRequest {
    pub kind: WindowKind,
    pub title: String,
    /// The window this one belongs to (possibly null)
    pub parent: Handle,
    pub flags: WindowFlags,
    pub default_size: DefaultSize,
}

/// A modal session
///
/// Tracks whether a modal dialog created by
/// [`Window::create_modal_dialog_window`] is running and how it ended. The
/// descriptor is owned by the caller; clones share the same session.
#[derive(Clone, Debug)]
pub struct ModalDialog(Rc<ModalState>);

#[derive(Debug)]
struct ModalState {
    running: Cell<bool>,
    response: Cell<AlertResponse>,
}

impl Default for ModalDialog {
    fn default() -> Self {
        ModalDialog::new()
    }
}

impl ModalDialog {
    /// A new, not running, session
    pub fn new() -> Self {
        ModalDialog(Rc::new(ModalState {
            running: Cell::new(false),
            response: Cell::new(AlertResponse::Cancel),
        }))
    }

    /// True while [`Self::run`] is waiting
    pub fn is_running(&self) -> bool {
        self.0.running.get()
    }

    /// The last response (initially [`AlertResponse::Cancel`])
    pub fn response(&self) -> AlertResponse {
        self.0.response.get()
    }

    /// End the session with `response`
    ///
    /// Typically called by the dialog's buttons.
    pub fn end(&self, response: AlertResponse) {
        self.0.response.set(response);
        self.0.running.set(false);
    }

    /// Show `window` and run the event loop until the session ends
    ///
    /// If the event loop stops making progress first, the session ends
    /// with its current response.
    pub fn run(&self, ui: &Ui, window: Window) -> AlertResponse {
        self.0.response.set(AlertResponse::Cancel);
        self.0.running.set(true);
        ui.toolkit().show(window.handle());

        while self.is_running() {
            if !ui.iterate(true) {
                log::warn!("ModalDialog::run: event loop stopped before the dialog ended");
                self.0.running.set(false);
            }
        }

        self.response()
    }
}

impl Window {
    /// Create a non-modal dialog belonging to this window
    ///
    /// `populate` is called by the toolkit with the new dialog once it
    /// exists, to fill in its content.
    pub fn create_dialog_window(
        &self,
        ui: &Ui,
        title: &str,
        populate: impl FnOnce(Window) + 'static,
        default_size: impl Into<DefaultSize>,
    ) -> Window {
        let request = self.request(
            WindowKind::Dialog,
            title,
            WindowFlags::TRANSIENT | WindowFlags::DESTROY_WITH_PARENT,
            default_size.into(),
        );
        let realize: RealizeHandler = Box::new(move |handle: Handle| {
            // SAFETY: the toolkit passes the window it created
            populate(unsafe { window_from_handle(handle) })
        });
        create(ui, request, Some(realize))
    }

    /// Create a modal dialog belonging to this window
    ///
    /// The session state lives in `dialog`, which is managed by the caller:
    /// closing the window ends the session with [`AlertResponse::Cancel`].
    /// Use [`ModalDialog::run`] to show the dialog and wait.
    pub fn create_modal_dialog_window(
        &self,
        ui: &Ui,
        title: &str,
        dialog: &ModalDialog,
        default_size: impl Into<DefaultSize>,
    ) -> Result<Window> {
        let request = self.request(
            WindowKind::Modal,
            title,
            WindowFlags::MODAL | WindowFlags::TRANSIENT | WindowFlags::DESTROY_WITH_PARENT,
            default_size.into(),
        );
        let window = create(ui, request, None);

        let dialog = dialog.clone();
        let handler: DeleteHandler = Box::new(move |_| {
            dialog.end(AlertResponse::Cancel);
            true
        });
        if ui.toolkit().connect_delete(window.handle(), handler).is_none() {
            log::warn!("create_modal_dialog_window: failed to connect; destroying {window:?}");
            window.destroy(ui);
            return Err(Error::Connect {
                signal: "delete-event",
            });
        }

        Ok(window)
    }

    /// Create an independent tool window
    ///
    /// The window stays above this one but has no modal relationship to it.
    pub fn create_floating_window(&self, ui: &Ui, title: &str) -> Window {
        let mut flags = WindowFlags::TRANSIENT | WindowFlags::DESTROY_WITH_PARENT;
        flags.set(WindowFlags::SKIP_TASKBAR, ui.config().floating_skip_taskbar);
        let request = self.request(WindowKind::Floating, title, flags, DefaultSize::NATURAL);
        create(ui, request, None)
    }

    /// Register a key-press handler
    ///
    /// `f` is called synchronously for every key press targeting this
    /// window, with the target widget and the native event. It returns true
    /// if the event was consumed, false to let it propagate. Several
    /// handlers may be registered; their order is up to the toolkit.
    pub fn on_key_press(
        &self,
        ui: &Ui,
        mut f: impl FnMut(Widget, KeyEvent) -> bool + 'static,
    ) -> Result<SubscriptionId> {
        let handler: KeyPressHandler = Box::new(move |target: Handle, event: KeyEvent| {
            // SAFETY: the toolkit passes the widget the event targets
            let widget = unsafe { <Widget as crate::Convertible>::from_handle(target) };
            f(widget, event)
        });
        ui.toolkit()
            .connect_key_press(self.handle(), handler)
            .ok_or(Error::Connect {
                signal: "key-press-event",
            })
    }

    /// Show the window
    pub fn show(&self, ui: &Ui) {
        ui.toolkit().show(self.handle());
    }

    /// Destroy the window
    ///
    /// All copies of this wrapper dangle afterwards.
    pub fn destroy(&self, ui: &Ui) {
        ui.toolkit().destroy(self.handle());
    }

    fn request(
        &self,
        kind: WindowKind,
        title: &str,
        flags: WindowFlags,
        default_size: DefaultSize,
    ) -> WindowRequest {
        WindowRequest {
            kind,
            title: title.to_string(),
            parent: self.handle(),
            flags,
            default_size,
        }
    }
}

unsafe fn window_from_handle(handle: Handle) -> Window {
    // SAFETY: forwarded to the caller
    unsafe { <Window as crate::Convertible>::from_handle(handle) }
}

fn create(ui: &Ui, request: WindowRequest, realize: Option<RealizeHandler>) -> Window {
    log::debug!("create window: {request:?}");
    let handle = ui.toolkit().create_window(request, realize);
    // SAFETY: Toolkit::create_window returns null or a window
    unsafe { window_from_handle(handle) }
}
