// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! In-memory toolkit
//!
//! [`Headless`] implements [`Toolkit`] without a display. Native objects
//! live in a registry keyed by handle. Handles are opaque, never reused and
//! never dereferenced.
//!
//! Input is driven from outside: key presses and close requests are either
//! delivered immediately ([`Headless::send_key_press`],
//! [`Headless::request_close`]) or queued for the event loop
//! ([`Headless::post_key_press`], [`Headless::post_close`]). Alert and file
//! chooser answers are scripted in advance.

mod node;

use node::{MAX_ENTRY_LENGTH, Registry, normalise};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;
use uilib_core::sys::GdkEventKey;
use uilib_core::toolkit::{Construct, DeleteHandler, KeyPressHandler, RealizeHandler, Toolkit};
use uilib_core::{
    Alert, AlertIcon, AlertResponse, AlertType, Error, FileChooserRequest, Handle, KeyDetails,
    KeyEvent, Modifiers, Result, SubscriptionId, WindowRequest,
};

/// An alert as shown by the toolkit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertRecord {
    pub parent: Handle,
    pub title: String,
    pub text: String,
    pub buttons: AlertType,
    pub icon: AlertIcon,
}

/// Event queued for the event loop
enum Event {
    KeyPress {
        target: Handle,
        keyval: u32,
        modifiers: Modifiers,
    },
    Close(Handle),
    Call(Box<dyn FnOnce(&Headless)>),
}

struct Connection<H: ?Sized> {
    id: SubscriptionId,
    target: Handle,
    handler: Rc<RefCell<Box<H>>>,
}

type KeyHandlerFn = dyn FnMut(Handle, KeyEvent) -> bool;
type DeleteHandlerFn = dyn FnMut(Handle) -> bool;

// Record behind a KeyEvent pointer; only its address is ever used.
#[repr(C)]
struct KeyRecord {
    keyval: u32,
    modifiers: Modifiers,
}

#[derive(Default)]
struct State {
    registry: Registry,
    key_handlers: Vec<Connection<KeyHandlerFn>>,
    delete_handlers: Vec<Connection<DeleteHandlerFn>>,
    alert_script: VecDeque<Option<AlertResponse>>,
    file_script: VecDeque<Option<PathBuf>>,
    alerts: Vec<AlertRecord>,
    file_requests: Vec<FileChooserRequest>,
}

/// A toolkit without a display
///
/// Not thread-safe: use from one thread only, like any native toolkit.
#[derive(Default)]
pub struct Headless {
    state: RefCell<State>,
    initialised: Cell<bool>,
    quit: Cell<bool>,
    next_connection: Cell<u64>,
    queue: RefCell<VecDeque<Event>>,
    keys: RefCell<Vec<Box<KeyRecord>>>,
}

impl Headless {
    /// Construct an uninitialised toolkit
    pub fn new() -> Self {
        Headless::default()
    }

    /// Answer the next alert with `response`
    pub fn push_alert_response(&self, response: AlertResponse) {
        self.state.borrow_mut().alert_script.push_back(Some(response));
    }

    /// Dismiss the next alert without activating a button
    ///
    /// Alerts also are dismissed when nothing is scripted.
    pub fn push_alert_dismissed(&self) {
        self.state.borrow_mut().alert_script.push_back(None);
    }

    /// Choose `path` in the next file chooser
    pub fn push_file_choice(&self, path: impl Into<PathBuf>) {
        self.state.borrow_mut().file_script.push_back(Some(path.into()));
    }

    /// Cancel the next file chooser
    ///
    /// File choosers also are cancelled when nothing is scripted.
    pub fn push_file_cancel(&self) {
        self.state.borrow_mut().file_script.push_back(None);
    }

    /// All alerts shown so far
    pub fn alerts(&self) -> Vec<AlertRecord> {
        self.state.borrow().alerts.clone()
    }

    /// All file chooser requests so far
    pub fn file_requests(&self) -> Vec<FileChooserRequest> {
        self.state.borrow().file_requests.clone()
    }

    /// Deliver a key press to `target` now
    ///
    /// Handlers connected to `target` are called in connection order until
    /// one consumes the event. A handler which is already running (the
    /// event was sent from inside it) is skipped.
    ///
    /// Returns true if the event was consumed.
    pub fn send_key_press(&self, target: Handle, keyval: u32, modifiers: Modifiers) -> bool {
        let handlers: SmallVec<[(SubscriptionId, Rc<RefCell<Box<KeyHandlerFn>>>); 4]> = {
            let state = self.state.borrow();
            if state.registry.live(target).is_none() {
                log::warn!("send_key_press: no live object {target:?}");
                return false;
            }
            state
                .key_handlers
                .iter()
                .filter(|conn| conn.target == target)
                .map(|conn| (conn.id, conn.handler.clone()))
                .collect()
        };
        log::trace!(
            "send_key_press: target={target:?}, keyval={keyval:#x}, {} handlers",
            handlers.len()
        );

        let record = Box::new(KeyRecord { keyval, modifiers });
        let event = KeyEvent::from_native(
            std::ptr::from_ref::<KeyRecord>(&*record)
                .cast_mut()
                .cast::<GdkEventKey>(),
        );
        self.keys.borrow_mut().push(record);

        let mut consumed = false;
        for (id, handler) in handlers {
            // a handler may have been disconnected by an earlier one
            if !self.is_connected(id) {
                continue;
            }
            let Ok(mut handler) = handler.try_borrow_mut() else {
                log::warn!("send_key_press: handler {id:?} is already running; skipped");
                continue;
            };
            if (*handler)(target, event) {
                consumed = true;
                break;
            }
        }

        self.keys.borrow_mut().pop();
        consumed
    }

    /// Queue a key press for the event loop
    pub fn post_key_press(&self, target: Handle, keyval: u32, modifiers: Modifiers) {
        self.queue.borrow_mut().push_back(Event::KeyPress {
            target,
            keyval,
            modifiers,
        });
    }

    /// Ask the window manager to close `window` now
    ///
    /// Close-request handlers are called in connection order; if one
    /// returns true the window stays open, otherwise it is destroyed.
    ///
    /// Returns true if the window was destroyed.
    pub fn request_close(&self, window: Handle) -> bool {
        let handlers: SmallVec<[(SubscriptionId, Rc<RefCell<Box<DeleteHandlerFn>>>); 2]> = {
            let state = self.state.borrow();
            if state.registry.live(window).is_none() {
                log::warn!("request_close: no live object {window:?}");
                return false;
            }
            state
                .delete_handlers
                .iter()
                .filter(|conn| conn.target == window)
                .map(|conn| (conn.id, conn.handler.clone()))
                .collect()
        };

        for (id, handler) in handlers {
            if !self.is_connected(id) {
                continue;
            }
            let Ok(mut handler) = handler.try_borrow_mut() else {
                log::warn!("request_close: handler {id:?} is already running; skipped");
                continue;
            };
            if (*handler)(window) {
                log::debug!("request_close: {window:?} kept open by handler {id:?}");
                return false;
            }
        }

        self.destroy(window);
        true
    }

    /// Queue a close request for the event loop
    pub fn post_close(&self, window: Handle) {
        self.queue.borrow_mut().push_back(Event::Close(window));
    }

    /// Queue a closure for the event loop
    pub fn post(&self, f: impl FnOnce(&Headless) + 'static) {
        self.queue.borrow_mut().push_back(Event::Call(Box::new(f)));
    }

    /// Type `text` into an entry
    ///
    /// Text beyond the entry's length limit is dropped. Returns the number
    /// of characters inserted.
    pub fn entry_insert_text(&self, entry: Handle, text: &str) -> usize {
        let mut state = self.state.borrow_mut();
        let Some(node) = state.registry.live_mut(entry) else {
            log::warn!("entry_insert_text: no live object {entry:?}");
            return 0;
        };
        let limit = match node.construct {
            Some(Construct::Entry {
                max_length: Some(n),
            }) if n > 0 => n,
            Some(Construct::Entry { .. }) => MAX_ENTRY_LENGTH,
            _ => {
                log::warn!("entry_insert_text: {entry:?} is a {}, not an Entry", node.class);
                return 0;
            }
        };

        let room = limit.saturating_sub(node.text.chars().count());
        let inserted: String = text.chars().take(room).collect();
        let n = inserted.chars().count();
        node.text.push_str(&inserted);
        n
    }

    /// Text of an entry, label, button or window title
    pub fn text_of(&self, handle: Handle) -> Option<String> {
        self.state.borrow().registry.live(handle).map(|node| node.text.clone())
    }

    /// Native class of a live object
    pub fn class_of(&self, handle: Handle) -> Option<&'static str> {
        self.state.borrow().registry.live(handle).map(|node| node.class)
    }

    /// Construction parameters of a live object, as normalised
    pub fn construct_of(&self, handle: Handle) -> Option<Construct> {
        let state = self.state.borrow();
        state.registry.live(handle).and_then(|node| node.construct.clone())
    }

    /// Creation request of a live window
    pub fn window_request(&self, handle: Handle) -> Option<WindowRequest> {
        let state = self.state.borrow();
        state.registry.live(handle).and_then(|node| node.window.clone())
    }

    /// True if `handle` refers to an object not yet destroyed
    pub fn is_live(&self, handle: Handle) -> bool {
        self.state.borrow().registry.live(handle).is_some()
    }

    /// True if `handle` refers to a live, shown window
    pub fn is_visible(&self, handle: Handle) -> bool {
        let state = self.state.borrow();
        state.registry.live(handle).is_some_and(|node| node.visible)
    }

    /// Number of live objects, including the root
    pub fn live_count(&self) -> usize {
        self.state.borrow().registry.live_count()
    }

    /// Number of handlers connected to `target`
    pub fn connection_count(&self, target: Handle) -> usize {
        let state = self.state.borrow();
        let keys = state.key_handlers.iter().filter(|c| c.target == target).count();
        keys + state.delete_handlers.iter().filter(|c| c.target == target).count()
    }

    fn is_connected(&self, id: SubscriptionId) -> bool {
        let state = self.state.borrow();
        state.key_handlers.iter().any(|c| c.id == id)
            || state.delete_handlers.iter().any(|c| c.id == id)
    }

    // None if target is not live
    fn next_id(&self, what: &str, target: Handle) -> Option<SubscriptionId> {
        if !self.is_live(target) {
            log::warn!("{what}: no live object {target:?}");
            return None;
        }
        let id = self.next_connection.get() + 1;
        self.next_connection.set(id);
        SubscriptionId::new(id)
    }
}

impl Toolkit for Headless {
    fn init(&self, args: &mut Vec<String>) -> Result<Handle> {
        if self.initialised.replace(true) {
            return Err(Error::AlreadyInitialised);
        }
        // consume toolkit options, as a native toolkit would
        args.retain(|arg| !arg.starts_with("--gtk-"));

        let root = self.state.borrow_mut().registry.add("Window", None, None);
        log::debug!("Headless::init: root={root:?}");
        Ok(root)
    }

    fn construct(&self, what: Construct) -> Handle {
        let class = what.class_name();
        if let Construct::TreeView { model } = &what {
            if !model.is_null() && !self.is_live(*model) {
                log::warn!("construct: TreeView model {model:?} is not live");
            }
        }
        self.state.borrow_mut().registry.add(class, Some(normalise(what)), None)
    }

    fn create_window(&self, request: WindowRequest, realize: Option<RealizeHandler>) -> Handle {
        let handle = self.state.borrow_mut().registry.add("Window", None, Some(request));
        if let Some(realize) = realize {
            realize(handle);
        }
        handle
    }

    fn show(&self, window: Handle) {
        match self.state.borrow_mut().registry.live_mut(window) {
            Some(node) => node.visible = true,
            None => log::warn!("show: no live object {window:?}"),
        }
    }

    fn destroy(&self, window: Handle) {
        let mut state = self.state.borrow_mut();
        let destroyed = state.registry.destroy(window);
        if destroyed.is_empty() {
            log::warn!("destroy: no live object {window:?}");
        }
        log::debug!("destroy: {destroyed:?}");
        state.key_handlers.retain(|c| !destroyed.contains(&c.target));
        state.delete_handlers.retain(|c| !destroyed.contains(&c.target));
    }

    fn alert(&self, parent: Handle, title: &str, alert: &Alert) -> Option<AlertResponse> {
        let mut state = self.state.borrow_mut();
        state.alerts.push(AlertRecord {
            parent,
            title: title.to_string(),
            text: alert.text.clone(),
            buttons: alert.buttons,
            icon: alert.icon,
        });
        let response = state.alert_script.pop_front().flatten();
        log::debug!("alert: {title:?} answered with {response:?}");
        response
    }

    fn file_chooser(&self, parent: Handle, request: &FileChooserRequest) -> Option<PathBuf> {
        let mut state = self.state.borrow_mut();
        state.file_requests.push(request.clone());
        let choice = state.file_script.pop_front().flatten();
        log::debug!("file_chooser: parent={parent:?}, choice={choice:?}");
        choice
    }

    fn connect_key_press(
        &self,
        target: Handle,
        handler: KeyPressHandler,
    ) -> Option<SubscriptionId> {
        let id = self.next_id("connect_key_press", target)?;
        self.state.borrow_mut().key_handlers.push(Connection {
            id,
            target,
            handler: Rc::new(RefCell::new(handler)),
        });
        Some(id)
    }

    fn connect_delete(&self, target: Handle, handler: DeleteHandler) -> Option<SubscriptionId> {
        let id = self.next_id("connect_delete", target)?;
        self.state.borrow_mut().delete_handlers.push(Connection {
            id,
            target,
            handler: Rc::new(RefCell::new(handler)),
        });
        Some(id)
    }

    fn disconnect(&self, id: SubscriptionId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.key_handlers.len() + state.delete_handlers.len();
        state.key_handlers.retain(|c| c.id != id);
        state.delete_handlers.retain(|c| c.id != id);
        before != state.key_handlers.len() + state.delete_handlers.len()
    }

    fn key_details(&self, event: KeyEvent) -> Option<KeyDetails> {
        let addr = event.as_ptr().addr();
        self.keys
            .borrow()
            .iter()
            .find(|record| std::ptr::from_ref::<KeyRecord>(&**record).addr() == addr)
            .map(|record| KeyDetails {
                keyval: record.keyval,
                modifiers: record.modifiers,
            })
    }

    fn iterate(&self, _blocking: bool) -> bool {
        if self.quit.get() {
            return false;
        }
        // the queue must not be borrowed while dispatching
        let event = self.queue.borrow_mut().pop_front();
        match event {
            None => false,
            Some(Event::KeyPress {
                target,
                keyval,
                modifiers,
            }) => {
                self.send_key_press(target, keyval, modifiers);
                true
            }
            Some(Event::Close(window)) => {
                self.request_close(window);
                true
            }
            Some(Event::Call(f)) => {
                f(self);
                true
            }
        }
    }

    /// Run until [`Toolkit::quit`] is called or the queue is empty
    fn main(&self) {
        while self.iterate(true) {}
        if !self.quit.replace(false) {
            log::debug!("main: event queue is empty");
        }
    }

    fn quit(&self) {
        self.quit.set(true);
    }
}
