// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Widget wrappers
//!
//! None of these types holds any state beyond its handle; constructors ask
//! the toolkit for a new native widget and wrap it.

use crate::sys::*;
use crate::toolkit::Construct;
use crate::{Object, Widget};

wrap! {
    /// Bounded numeric model backing scroll bars and spin buttons
    ///
    /// Clamping `value` into `[lower, upper]` is done by the toolkit.
    pub struct Adjustment(GtkAdjustment): Widget, Object {
        fn new(
            value: f64,
            lower: f64,
            upper: f64,
            step_increment: f64,
            page_increment: f64,
            page_size: f64,
        ) => Construct::Adjustment {
            value,
            lower,
            upper,
            step_increment,
            page_increment,
            page_size,
        };
    }
}

wrap! {
    pub struct Alignment(GtkAlignment): Widget, Object {
        fn new(xalign: f32, yalign: f32, xscale: f32, yscale: f32) => Construct::Alignment {
            xalign,
            yalign,
            xscale,
            yscale,
        };
    }
}

wrap! {
    /// Base of [`HBox`] and [`VBox`]
    pub struct Box(GtkBox): Widget, Object;
}

wrap! {
    pub struct Button(GtkButton): Widget, Object {
        /// A button without label
        fn new() => Construct::Button { label: None };
        fn with_label(label: &str) => Construct::Button { label: Some(label.to_string()) };
    }
}

wrap! {
    pub struct CellRenderer(GtkCellRenderer): Widget, Object;
}

wrap! {
    pub struct CellRendererText(GtkCellRendererText): CellRenderer, Widget, Object {
        fn new() => Construct::CellRendererText;
    }
}

wrap! {
    pub struct CheckButton(GtkCheckButton): Widget, Object {
        fn with_label(label: &str) => Construct::CheckButton { label: label.to_string() };
    }
}

wrap! {
    /// Single-line text entry
    pub struct Entry(GtkEntry): Widget, Object {
        /// An entry of unbounded length
        fn new() => Construct::Entry { max_length: None };
        /// An entry accepting at most `max_length` characters
        ///
        /// Input beyond the limit is rejected by the toolkit.
        fn with_max_length(max_length: usize) => Construct::Entry {
            max_length: Some(max_length),
        };
    }
}

wrap! {
    pub struct HBox(GtkHBox): Box, Widget, Object {
        fn new(homogenous: bool, spacing: i32) => Construct::HBox { homogenous, spacing };
    }
}

wrap! {
    pub struct Label(GtkLabel): Widget, Object {
        fn new(label: &str) => Construct::Label { label: label.to_string() };
    }
}

wrap! {
    pub struct Menu(GtkMenu): Widget, Object {
        fn new() => Construct::Menu;
    }
}

wrap! {
    pub struct MenuItem(GtkMenuItem): Widget, Object {
        /// If `mnemonic`, an underscore in `label` marks the access key
        fn new(label: &str, mnemonic: bool) => Construct::MenuItem {
            label: label.to_string(),
            mnemonic,
        };
    }
}

wrap! {
    pub struct ScrolledWindow(GtkScrolledWindow): Widget, Object {
        fn new() => Construct::ScrolledWindow;
    }
}

wrap! {
    /// Fixed-size grid container
    pub struct Table(GtkTable): Widget, Object {
        /// If `homogenous`, all cells get equal size
        fn new(rows: usize, columns: usize, homogenous: bool) => Construct::Table {
            rows,
            columns,
            homogenous,
        };
    }
}

wrap! {
    /// The toolkit gives spin buttons no dedicated type here
    pub struct SpinButton(GtkWidget): Widget, Object;
}

wrap! {
    pub struct TreeModel(GtkTreeModel): Widget, Object;
}

wrap! {
    pub struct TreeView(GtkTreeView): Widget, Object {
        /// A view over `model`; the view does not own the model
        fn new(model: TreeModel) => Construct::TreeView { model: model.handle() };
    }
}

wrap! {
    pub struct VBox(GtkVBox): Box, Widget, Object {
        fn new(homogenous: bool, spacing: i32) => Construct::VBox { homogenous, spacing };
    }
}

wrap! {
    /// A top-level window or dialog
    ///
    /// See the window factories, e.g. [`Window::create_dialog_window`].
    pub struct Window(GtkWindow): Widget, Object;
}
