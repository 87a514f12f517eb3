// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! uilib: typed wrappers over a native GUI toolkit
//!
//! This, the main crate, is merely a wrapper over other crates:
//!
//! -   [`uilib_core`] provides the wrapper types, dialogs, window factories
//!     and the [`Toolkit`] interface
//! -   [`uilib_headless`] provides an in-memory [`Toolkit`] implementation
//!     (feature `headless`, enabled by default)
//!
//! All items from [`uilib_core`] are directly re-exported from this crate
//! (e.g. [`uilib::Button`](crate::Button)); the headless toolkit is
//! re-exported as a sub-module ([`uilib::headless`](crate::headless)).
//!
//! ```
//! # #[cfg(feature = "headless")] {
//! use std::rc::Rc;
//! use uilib::prelude::*;
//!
//! let toolkit = Rc::new(uilib::headless::Headless::new());
//! let ui = Ui::with_config(toolkit, std::env::args(), Default::default()).unwrap();
//! let button = Button::with_label(&ui, "OK");
//! assert!(button.is_valid());
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod prelude;

pub use uilib_core::*;

#[cfg(feature = "headless")]
#[cfg_attr(docsrs, doc(cfg(feature = "headless")))]
pub extern crate uilib_headless as headless;
