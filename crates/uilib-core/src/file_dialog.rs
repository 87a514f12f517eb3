// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! File open/save dialogs

use std::path::{Path, PathBuf};

/// A file dialog request
///
/// Shown by [`Widget::file_dialog`](crate::Widget::file_dialog). The intent
/// flags bias the presentation (button label) without changing whether the
/// dialog opens or saves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileDialog {
    /// Open (true) or save (false)
    pub open: bool,
    pub title: String,
    /// Starting folder, or file within a folder
    pub path: Option<PathBuf>,
    /// File pattern: an extension (`"map"`) or globs (`"*.map;*.reg"`)
    pub pattern: Option<String>,
    pub want_load: bool,
    pub want_import: bool,
    pub want_save: bool,
}

impl FileDialog {
    /// An "open" dialog
    pub fn open(title: impl ToString) -> Self {
        FileDialog {
            open: true,
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// A "save" dialog
    pub fn save(title: impl ToString) -> Self {
        FileDialog {
            open: false,
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Set the starting path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the file pattern
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl ToString) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    /// Present as a "load" action
    #[must_use]
    pub fn want_load(mut self) -> Self {
        self.want_load = true;
        self
    }

    /// Present as an "import" action
    #[must_use]
    pub fn want_import(mut self) -> Self {
        self.want_import = true;
        self
    }

    /// Present as a "save" action
    #[must_use]
    pub fn want_save(mut self) -> Self {
        self.want_save = true;
        self
    }

    /// Lower to the request passed to the toolkit
    pub fn request(&self) -> FileChooserRequest {
        let action = if self.open {
            FileAction::Open
        } else {
            FileAction::Save
        };

        let accept_label = if self.want_import {
            "Import"
        } else if self.want_load {
            "Load"
        } else if self.want_save {
            "Save"
        } else if self.open {
            "Open"
        } else {
            "Save"
        };

        let (folder, file_name) = match self.path.as_deref() {
            Some(path) => split_start_path(path),
            None => (None, None),
        };

        let mut filters: Vec<FileFilter> = self
            .pattern
            .as_deref()
            .map(parse_pattern)
            .unwrap_or_default();
        filters.push(FileFilter::all());

        FileChooserRequest {
            action,
            title: self.title.clone(),
            accept_label,
            folder,
            file_name: if self.open { None } else { file_name },
            filters,
        }
    }

    /// Interpret the toolkit's answer
    ///
    /// An empty path counts as cancellation. When saving, a name without
    /// extension gets the extension of the single specific filter, if any.
    pub(crate) fn finish(
        &self,
        request: &FileChooserRequest,
        chosen: Option<PathBuf>,
    ) -> Option<PathBuf> {
        let mut path = chosen.filter(|p| !p.as_os_str().is_empty())?;
        if request.action == FileAction::Save && path.extension().is_none() {
            if let [filter, _all] = request.filters.as_slice() {
                if let Some(ext) = filter.extension() {
                    path.set_extension(ext);
                }
            }
        }
        Some(path)
    }
}

fn split_start_path(path: &Path) -> (Option<PathBuf>, Option<String>) {
    let text = path.as_os_str().to_string_lossy();
    if text.ends_with(std::path::is_separator) {
        return (Some(path.to_path_buf()), None);
    }
    match path.file_name() {
        Some(name) => (
            path.parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf),
            Some(name.to_string_lossy().into_owned()),
        ),
        None => (Some(path.to_path_buf()), None),
    }
}

fn parse_pattern(pattern: &str) -> Vec<FileFilter> {
    pattern
        .split([';', ','])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let glob = if p.contains('*') || p.contains('?') {
                p.to_string()
            } else {
                format!("*.{}", p.trim_start_matches('.'))
            };
            FileFilter {
                name: format!("{glob} files"),
                glob,
            }
        })
        .collect()
}

/// Open or save
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileAction {
    Open,
    Save,
}

/// A named file filter
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileFilter {
    pub name: String,
    pub glob: String,
}

impl FileFilter {
    /// Matches all files
    pub fn all() -> Self {
        FileFilter {
            name: "All files".to_string(),
            glob: "*".to_string(),
        }
    }

    /// The extension of a `*.ext` glob
    pub fn extension(&self) -> Option<&str> {
        self.glob
            .strip_prefix("*.")
            .filter(|ext| !ext.is_empty() && !ext.contains(['*', '?']))
    }
}

/// A file chooser request, as passed to the toolkit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileChooserRequest {
    pub action: FileAction,
    pub title: String,
    /// Label of the accept button
    pub accept_label: &'static str,
    /// Initial folder
    pub folder: Option<PathBuf>,
    /// Suggested file name (save only)
    pub file_name: Option<String>,
    /// Filters; the last is always "All files"
    pub filters: Vec<FileFilter>,
}
