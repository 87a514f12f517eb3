// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! uilib prelude
//!
//! This module allows convenient importation of common unambiguous items:
//! ```
//! use uilib::prelude::*;
//! ```
//!
//! [`Box`](crate::Box) is not included: it would shadow [`std::boxed::Box`].

#[doc(no_inline)]
pub use uilib_core::{
    Alert, AlertIcon, AlertResponse, AlertType, Convertible, DefaultSize, FileDialog, ModalDialog,
    Object, Toolkit, Ui, Widget, Window,
};
#[doc(no_inline)]
pub use uilib_core::{
    Adjustment, Alignment, Button, CellRenderer, CellRendererText, CheckButton, Entry, HBox,
    Label, Menu, MenuItem, ScrolledWindow, SpinButton, Table, TreeModel, TreeView, VBox,
};
