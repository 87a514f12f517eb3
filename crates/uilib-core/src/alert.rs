// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Alert (message box) vocabulary

use std::fmt;

/// Button layout of an alert
///
/// The layout determines which [`AlertResponse`] values are reachable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlertType {
    /// A single "OK" button
    #[default]
    Ok,
    /// "OK" and "Cancel"
    OkCancel,
    /// "Yes" and "No"
    YesNo,
    /// "Yes", "No" and "Cancel"
    YesNoCancel,
    /// "No" and "Yes", with "No" presented first (and default)
    NoYes,
}

impl AlertType {
    /// Reachable responses, in presentation order
    ///
    /// The first entry is the default button.
    pub fn responses(self) -> &'static [AlertResponse] {
        use AlertResponse::*;
        match self {
            AlertType::Ok => &[Ok],
            AlertType::OkCancel => &[Ok, Cancel],
            AlertType::YesNo => &[Yes, No],
            AlertType::YesNoCancel => &[Yes, No, Cancel],
            AlertType::NoYes => &[No, Yes],
        }
    }

    /// True if `response` is reachable with this layout
    pub fn accepts(self, response: AlertResponse) -> bool {
        self.responses().contains(&response)
    }

    /// Response reported when the dialog is dismissed without activating a
    /// button (e.g. closed by the window manager)
    pub fn dismiss_response(self) -> AlertResponse {
        match self {
            AlertType::Ok => AlertResponse::Ok,
            AlertType::OkCancel | AlertType::YesNoCancel => AlertResponse::Cancel,
            AlertType::YesNo | AlertType::NoYes => AlertResponse::No,
        }
    }
}

/// Icon style of an alert
///
/// Purely presentational; any icon may be combined with any [`AlertType`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlertIcon {
    #[default]
    Default,
    Error,
    Warning,
    Question,
    Asterisk,
}

/// The control activated by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlertResponse {
    Ok,
    Cancel,
    Yes,
    No,
}

impl fmt::Display for AlertResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            AlertResponse::Ok => "OK",
            AlertResponse::Cancel => "Cancel",
            AlertResponse::Yes => "Yes",
            AlertResponse::No => "No",
        })
    }
}

/// An alert request
///
/// Shown by [`Widget::alert`](crate::Widget::alert). When no title is given,
/// the application name from [`Config`](crate::config::Config) is used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alert {
    pub text: String,
    pub title: Option<String>,
    pub buttons: AlertType,
    pub icon: AlertIcon,
}

impl Alert {
    /// Construct with the given message, an "OK" button and default icon
    pub fn new(text: impl ToString) -> Self {
        Alert {
            text: text.to_string(),
            ..Default::default()
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl ToString) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the button layout
    #[must_use]
    pub fn with_buttons(mut self, buttons: AlertType) -> Self {
        self.buttons = buttons;
        self
    }

    /// Set the icon
    #[must_use]
    pub fn with_icon(mut self, icon: AlertIcon) -> Self {
        self.icon = icon;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reachable_sets() {
        use AlertResponse::*;
        assert_eq!(AlertType::OkCancel.responses(), &[Ok, Cancel]);
        assert!(!AlertType::OkCancel.accepts(Yes));
        assert!(!AlertType::YesNo.accepts(Cancel));

        let mut yes_no = AlertType::YesNo.responses().to_vec();
        let mut no_yes = AlertType::NoYes.responses().to_vec();
        assert_eq!(no_yes[0], No);
        yes_no.sort_by_key(|r| *r as u8);
        no_yes.sort_by_key(|r| *r as u8);
        assert_eq!(yes_no, no_yes);
    }

    #[test]
    fn dismiss_is_reachable() {
        for ty in [
            AlertType::Ok,
            AlertType::OkCancel,
            AlertType::YesNo,
            AlertType::YesNoCancel,
            AlertType::NoYes,
        ] {
            assert!(ty.accepts(ty.dismiss_response()), "{ty:?}");
        }
    }
}
