// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types

use thiserror::Error;

/// Possible failures
///
/// Cancelling a dialog is not an error: see [`AlertResponse`](crate::AlertResponse)
/// and [`Widget::file_dialog`](crate::Widget::file_dialog).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// The toolkit was already initialised
    #[error("toolkit already initialised")]
    AlreadyInitialised,

    /// Toolkit initialisation failed
    #[error("toolkit initialisation failed: {0}")]
    Init(String),

    /// The toolkit refused to connect a handler
    #[error("failed to connect handler for signal `{signal}`")]
    Connect { signal: &'static str },

    /// Config load/save error
    #[error("config load/save error")]
    Config(#[from] crate::config::Error),
}

/// A `Result` type representing `T` or [`enum@Error`]
pub type Result<T> = std::result::Result<T, Error>;
