// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Process lifecycle

use crate::config::{Config, ConfigFile};
use crate::event::{KeyDetails, KeyEvent, SubscriptionId};
use crate::toolkit::{Construct, Toolkit};
use crate::util::warn_about_error;
use crate::{Convertible, Handle, Result, Widget};
use std::cell::Cell;
use std::rc::Rc;

/// An initialised toolkit
///
/// Constructed once per process by [`Ui::init`]; every widget constructor
/// and dialog takes a `&Ui`. The value is neither `Send` nor `Sync`, thus
/// is tied to the thread running the event loop.
///
/// The [root widget](Self::root) is valid from initialisation until this
/// value is dropped.
pub struct Ui {
    toolkit: Rc<dyn Toolkit>,
    file: Option<ConfigFile>,
    config: Config,
    args: Vec<String>,
    root: Cell<Widget>,
}

impl Ui {
    /// Initialise `toolkit`
    ///
    /// `args` are the process arguments (e.g. from [`std::env::args`]);
    /// arguments not consumed by the toolkit are available from
    /// [`Self::args`]. Configuration is located via [`ConfigFile::from_env`];
    /// without a config file the defaults are used.
    ///
    /// The toolkit may only be initialised once.
    pub fn init(toolkit: Rc<dyn Toolkit>, args: impl IntoIterator<Item = String>) -> Result<Ui> {
        match ConfigFile::from_env()? {
            Some(file) => Self::with_config_file(toolkit, args, file),
            None => Self::init_with(toolkit, args, None, Config::default()),
        }
    }

    /// Initialise `toolkit`, loading configuration from `file`
    ///
    /// The config is written back on drop if [`ConfigFile::save_on_exit`].
    pub fn with_config_file(
        toolkit: Rc<dyn Toolkit>,
        args: impl IntoIterator<Item = String>,
        file: ConfigFile,
    ) -> Result<Ui> {
        let config = file.load()?;
        Self::init_with(toolkit, args, Some(file), config)
    }

    /// Initialise `toolkit` with the given configuration
    ///
    /// Config is not read or written.
    pub fn with_config(
        toolkit: Rc<dyn Toolkit>,
        args: impl IntoIterator<Item = String>,
        config: Config,
    ) -> Result<Ui> {
        Self::init_with(toolkit, args, None, config)
    }

    fn init_with(
        toolkit: Rc<dyn Toolkit>,
        args: impl IntoIterator<Item = String>,
        file: Option<ConfigFile>,
        config: Config,
    ) -> Result<Ui> {
        let mut args: Vec<String> = args.into_iter().collect();
        let root = toolkit.init(&mut args)?;
        log::info!("Ui::init: app_name={:?}, root={root:?}", config.app_name);

        Ok(Ui {
            toolkit,
            file,
            config,
            args,
            // SAFETY: Toolkit::init returns null or a widget
            root: Cell::new(unsafe { Widget::from_handle(root) }),
        })
    }

    /// Run the event loop until [`Self::quit`] is called
    ///
    /// All registered handlers are dispatched from here (alerts and file
    /// dialogs run their own nested loops).
    pub fn main(&self) {
        log::debug!("Ui::main: entering event loop");
        self.toolkit.main();
        log::debug!("Ui::main: event loop returned");
    }

    /// Make [`Self::main`] return
    pub fn quit(&self) {
        self.toolkit.quit();
    }

    /// Run one event loop iteration
    ///
    /// Returns false when no further progress is possible.
    pub fn iterate(&self, blocking: bool) -> bool {
        self.toolkit.iterate(blocking)
    }

    /// The root widget
    ///
    /// This is the toolkit's top-level anchor unless replaced via
    /// [`Self::set_root`].
    pub fn root(&self) -> Widget {
        self.root.get()
    }

    /// Re-anchor the root, usually to the application's main window
    pub fn set_root(&self, root: impl Into<Widget>) {
        self.root.set(root.into());
    }

    /// Arguments left after toolkit initialisation
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The toolkit
    pub fn toolkit(&self) -> &dyn Toolkit {
        &*self.toolkit
    }

    /// Decode a key event passed to a key-press handler
    pub fn key_details(&self, event: KeyEvent) -> Option<KeyDetails> {
        self.toolkit.key_details(event)
    }

    /// Disconnect a handler; returns false if it was not connected
    pub fn disconnect(&self, id: SubscriptionId) -> bool {
        self.toolkit.disconnect(id)
    }

    /// Construct a native widget
    ///
    /// This is used by generated wrapper constructors.
    pub fn construct(&self, what: Construct) -> Handle {
        let class = what.class_name();
        let handle = self.toolkit.construct(what);
        log::debug!("construct: {class} => {handle:?}");
        if handle.is_null() {
            log::warn!("construct: toolkit failed to create {class}");
        }
        handle
    }
}

impl Drop for Ui {
    fn drop(&mut self) {
        if let Some(file) = self.file.as_ref().filter(|file| file.save_on_exit()) {
            if let Err(error) = file.save(&self.config) {
                warn_about_error("Ui: failed to write config", &error);
            }
        }
    }
}

impl std::fmt::Debug for Ui {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Ui")
            .field("config", &self.config)
            .field("args", &self.args)
            .field("root", &self.root.get())
            .finish_non_exhaustive()
    }
}
