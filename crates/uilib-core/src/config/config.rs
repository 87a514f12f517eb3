// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Top-level configuration struct

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Application name, used as the default alert title
    #[cfg_attr(feature = "serde", serde(default = "defaults::app_name"))]
    pub app_name: String,

    /// Keep floating windows out of the task bar
    #[cfg_attr(feature = "serde", serde(default = "defaults::floating_skip_taskbar"))]
    pub floating_skip_taskbar: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app_name: defaults::app_name(),
            floating_skip_taskbar: defaults::floating_skip_taskbar(),
        }
    }
}

impl Config {
    /// Set the application name
    #[must_use]
    pub fn with_app_name(mut self, name: impl ToString) -> Self {
        self.app_name = name.to_string();
        self
    }
}

mod defaults {
    pub fn app_name() -> String {
        "NetRadiant".to_string()
    }

    pub fn floating_skip_taskbar() -> bool {
        true
    }
}
