// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! uilib core
//!
//! Strongly-typed wrappers over the widget handles of a native GUI toolkit.
//!
//! Every wrapper type ([`Object`], [`Widget`], [`Button`], [`Window`], ...)
//! is a `#[repr(transparent)]` newtype over a single [`Handle`], thus has
//! exactly the size and representation of a pointer. Wrappers are `Copy`,
//! never own the native object and never free it: widget lifetime belongs
//! to the toolkit.
//!
//! The native toolkit is reached only through the [`Toolkit`] trait. An
//! application initialises it once via [`Ui::init`], then constructs
//! widgets against the returned [`Ui`] context.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate bitflags;

#[macro_use]
mod convert;

mod alert;
mod catalog;
mod error;
mod event;
mod file_dialog;
mod handle;
mod object;
mod ui;
mod util;
mod widget;
mod window;

pub mod config;
pub mod sys;
pub mod toolkit;

pub use alert::{Alert, AlertIcon, AlertResponse, AlertType};
pub use catalog::*;
pub use convert::{Convertible, Explicit, Implicit, Policy};
pub use error::{Error, Result};
pub use event::{KeyDetails, KeyEvent, Modifiers, SubscriptionId};
pub use file_dialog::{FileAction, FileChooserRequest, FileDialog, FileFilter};
pub use handle::Handle;
pub use object::Object;
pub use toolkit::Toolkit;
pub use ui::Ui;
pub use widget::Widget;
pub use window::{DefaultSize, ModalDialog, WindowFlags, WindowKind, WindowRequest};
