// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Configuration
//!
//! [`Config`] holds the few settings the wrapper layer consults. It may be
//! loaded from a JSON or TOML file (features `json` and `toml`); see
//! [`ConfigFile`].

mod config;
pub use config::Config;

mod file;
pub use file::{ConfigFile, Error, Format};
