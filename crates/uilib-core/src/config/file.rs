// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Config files

use super::Config;
use std::path::{Path, PathBuf};
use std::{env, fmt, fs, io};
use thiserror::Error;

/// Config load/save error
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read or write `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[cfg(feature = "json")]
    #[error("JSON (de)serialisation error")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML deserialisation error")]
    TomlDe(#[from] toml::de::Error),

    #[cfg(feature = "toml")]
    #[error("TOML serialisation error")]
    TomlSer(#[from] toml::ser::Error),

    #[error("unable to determine config format of `{}`", .0.display())]
    UnknownFormat(PathBuf),

    #[error("support for {0} config files is not enabled")]
    Disabled(Format),
}

/// Config file format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// JavaScript Object Notation (`.json`)
    Json,
    /// Tom's Obvious Minimal Language (`.toml`)
    Toml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Format::Json => "JSON",
            Format::Toml => "TOML",
        })
    }
}

impl Format {
    /// Select a format from the file extension of `path`
    pub fn from_path(path: &Path) -> Result<Format, Error> {
        let ext = path.extension().and_then(|ext| ext.to_str());
        match ext.map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(Error::UnknownFormat(path.to_path_buf())),
        }
    }

    /// Decode a config
    ///
    /// Fields missing from `text` take their default values.
    pub fn decode(self, text: &str) -> Result<Config, Error> {
        match self {
            Format::Json => json::decode(text),
            Format::Toml => toml_format::decode(text),
        }
    }

    /// Encode a config
    pub fn encode(self, config: &Config) -> Result<String, Error> {
        match self {
            Format::Json => json::encode(config),
            Format::Toml => toml_format::encode(config),
        }
    }
}

#[cfg(feature = "json")]
mod json {
    use super::{Config, Error};

    pub fn decode(text: &str) -> Result<Config, Error> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn encode(config: &Config) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(config)?)
    }
}

#[cfg(not(feature = "json"))]
mod json {
    use super::{Config, Error, Format};

    pub fn decode(_: &str) -> Result<Config, Error> {
        Err(Error::Disabled(Format::Json))
    }

    pub fn encode(_: &Config) -> Result<String, Error> {
        Err(Error::Disabled(Format::Json))
    }
}

#[cfg(feature = "toml")]
mod toml_format {
    use super::{Config, Error};

    pub fn decode(text: &str) -> Result<Config, Error> {
        Ok(toml::from_str(text)?)
    }

    pub fn encode(config: &Config) -> Result<String, Error> {
        Ok(toml::to_string(config)?)
    }
}

#[cfg(not(feature = "toml"))]
mod toml_format {
    use super::{Config, Error, Format};

    pub fn decode(_: &str) -> Result<Config, Error> {
        Err(Error::Disabled(Format::Toml))
    }

    pub fn encode(_: &Config) -> Result<String, Error> {
        Err(Error::Disabled(Format::Toml))
    }
}

/// A config file on disk
///
/// The format is chosen from the file extension. A file which does not
/// exist loads as [`Config::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
    format: Format,
    save_on_exit: bool,
}

impl ConfigFile {
    /// Construct for `path`
    ///
    /// Fails if the extension names no known format.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let format = Format::from_path(&path)?;
        Ok(ConfigFile {
            path,
            format,
            save_on_exit: false,
        })
    }

    /// Write the config back when the [`Ui`](crate::Ui) is dropped
    #[must_use]
    pub fn with_save_on_exit(mut self, save: bool) -> Self {
        self.save_on_exit = save;
        self
    }

    /// Locate the config file from the environment
    ///
    /// `UILIB_CONFIG` names the file; if unset, `Ok(None)` is returned.
    /// `UILIB_CONFIG_SAVE` (`1`/`true`/`yes` or `0`/`false`/`no`) enables
    /// saving on exit; the default is not to save.
    pub fn from_env() -> Result<Option<Self>, Error> {
        let Some(path) = env::var_os("UILIB_CONFIG") else {
            return Ok(None);
        };
        let mut file = ConfigFile::new(path)?;
        if let Ok(value) = env::var("UILIB_CONFIG_SAVE") {
            match parse_flag(&value) {
                Some(save) => file.save_on_exit = save,
                None => log::warn!("UILIB_CONFIG_SAVE: unexpected value {value:?}"),
            }
        }
        Ok(Some(file))
    }

    /// The file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file format
    pub fn format(&self) -> Format {
        self.format
    }

    /// Whether the config is saved on exit
    pub fn save_on_exit(&self) -> bool {
        self.save_on_exit
    }

    /// Read the config
    pub fn load(&self) -> Result<Config, Error> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                let path = self.path.display();
                log::info!("ConfigFile::load: {path} not found; using defaults");
                return Ok(Config::default());
            }
            Err(source) => {
                let path = self.path.clone();
                return Err(Error::Io { path, source });
            }
        };
        log::info!("ConfigFile::load: reading {}", self.path.display());
        self.format.decode(&text)
    }

    /// Write `config`
    pub fn save(&self, config: &Config) -> Result<(), Error> {
        let text = self.format.encode(config)?;
        log::info!("ConfigFile::save: writing {}", self.path.display());
        fs::write(&self.path, text).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("uilib-{}-{name}", std::process::id()))
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.json")).ok(), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("b.TOML")).ok(), Some(Format::Toml));
        assert!(matches!(
            Format::from_path(Path::new("b.yaml")),
            Err(Error::UnknownFormat(_))
        ));
        assert!(ConfigFile::new("noext").is_err());
    }

    #[test]
    fn flags() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("FALSE"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let file = ConfigFile::new(temp_path("missing.json")).unwrap();
        assert_eq!(file.load().unwrap(), Config::default());
        assert!(!file.save_on_exit());
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_missing_fields_default() {
        let config = Format::Json.decode(r#"{ "app_name": "Radiant" }"#).unwrap();
        assert_eq!(config.app_name, "Radiant");
        assert!(config.floating_skip_taskbar);
        assert!(Format::Json.decode("{ nope").is_err());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_decode() {
        let config = Format::Toml.decode("floating_skip_taskbar = false\n").unwrap();
        assert_eq!(config.app_name, "NetRadiant");
        assert!(!config.floating_skip_taskbar);
    }

    #[cfg(not(feature = "toml"))]
    #[test]
    fn toml_disabled() {
        assert!(matches!(
            Format::Toml.decode(""),
            Err(Error::Disabled(Format::Toml))
        ));
    }

    #[cfg(feature = "json")]
    #[test]
    fn save_then_load() {
        let path = temp_path("saved.json");
        let file = ConfigFile::new(&path).unwrap().with_save_on_exit(true);
        let config = Config::default().with_app_name("Editor");
        file.save(&config).unwrap();
        let loaded = file.load();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded.unwrap(), config);
    }
}
