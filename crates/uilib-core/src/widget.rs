// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The generic widget wrapper

use crate::sys::GtkWidget;
use crate::{Alert, AlertResponse, FileDialog, Object, Ui};
use std::path::PathBuf;

wrap! {
    /// A generic widget
    ///
    /// This is the first tier of the hierarchy with an implicit conversion
    /// to its native type: nearly every toolkit call takes a `*mut GtkWidget`,
    /// thus any wrapper may be passed as `impl Into<Widget>` and a `Widget`
    /// as `impl Into<*mut GtkWidget>`.
    pub struct Widget(GtkWidget): Object;
}

impl Widget {
    /// Show a modal alert and wait for the user's answer
    ///
    /// The response is always one of those reachable with
    /// `alert.buttons`; when the dialog is dismissed otherwise the layout's
    /// [dismiss response](crate::AlertType::dismiss_response) is returned.
    pub fn alert(&self, ui: &Ui, alert: Alert) -> AlertResponse {
        let title = alert.title.as_deref().unwrap_or(&ui.config().app_name);
        log::debug!(
            "alert: parent={:?}, title={title:?}, buttons={:?}, icon={:?}",
            self.handle(),
            alert.buttons,
            alert.icon
        );

        match ui.toolkit().alert(self.handle(), title, &alert) {
            Some(response) if alert.buttons.accepts(response) => response,
            Some(response) => {
                log::warn!(
                    "alert: toolkit answered {response} which is unreachable with {:?}",
                    alert.buttons
                );
                alert.buttons.dismiss_response()
            }
            None => alert.buttons.dismiss_response(),
        }
    }

    /// Show a modal file chooser and wait for the user's choice
    ///
    /// Returns `None` if the user cancels.
    pub fn file_dialog(&self, ui: &Ui, dialog: &FileDialog) -> Option<PathBuf> {
        let request = dialog.request();
        log::debug!("file_dialog: parent={:?}, request={request:?}", self.handle());
        let chosen = ui.toolkit().file_chooser(self.handle(), &request);
        dialog.finish(&request, chosen)
    }
}
