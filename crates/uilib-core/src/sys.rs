// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Opaque native types
//!
//! These name the toolkit's own structures. They are declarations only:
//! no value of any of these types is ever constructed or read by this
//! crate, they exist so that a `*mut GtkButton` and a `*mut GtkWindow` are
//! different types.

use std::marker::{PhantomData, PhantomPinned};

macro_rules! opaque {
    ($($(#[$meta:meta])* $name:ident;)*) => {$(
        $(#[$meta])*
        #[repr(C)]
        pub struct $name {
            _data: [u8; 0],
            // neither Send, Sync nor Unpin
            _marker: PhantomData<(*mut u8, PhantomPinned)>,
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, concat!(stringify!($name), "@{:p}"), self)
            }
        }
    )*};
}

opaque! {
    /// Root of the toolkit's object system
    GtkObject;
    /// Instance header of the toolkit's runtime type system
    GTypeInstance;
    /// Generic widget
    GtkWidget;
    GtkAdjustment;
    GtkAlignment;
    GtkBox;
    GtkButton;
    GtkCellRenderer;
    GtkCellRendererText;
    GtkCheckButton;
    GtkEntry;
    GtkHBox;
    GtkLabel;
    GtkMenu;
    GtkMenuItem;
    GtkScrolledWindow;
    GtkTable;
    GtkTreeModel;
    GtkTreeView;
    GtkVBox;
    GtkWindow;
    /// Key press event record
    GdkEventKey;
}
