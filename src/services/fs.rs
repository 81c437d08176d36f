// Directory listing and description loading
//
// Reads one directory, decides which entries are shown and in which order,
// and attaches the raw (still tagged) description text of every entry.

use crate::config::Config;
use crate::services::descriptions::FileDescriptions;
use crate::view::presenter::ItemKind;
use std::io;
use std::path::{Path, PathBuf};

/// Shown for a subdirectory whose description cannot be read for lack of
/// permission
pub const PERMISSION_DENIED_DESCRIPTION: &str = ";w;Dir \x1b[1;31m(Permission denied)";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    NotFound(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot open directory '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Which kinds of entries to list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    DirsOnly,
    FilesOnly,
}

impl KindFilter {
    pub fn accepts(self, kind: ItemKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::DirsOnly => kind == ItemKind::Dir,
            KindFilter::FilesOnly => kind == ItemKind::File,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Include names starting with a dot
    pub show_hidden: bool,
    pub kind_filter: KindFilter,
    /// Keep only this many lines of each description
    pub description_lines: Option<usize>,
}

/// One listed directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: ItemKind,
    /// Raw description text, tags and escapes included
    pub description: Option<String>,
}

impl FsEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == ItemKind::Dir
    }
}

/// List `dir`: directories first, then files, each group sorted by name.
pub fn load_dir(dir: &Path, config: &Config, options: &LoadOptions) -> Result<Vec<FsEntry>, LoadError> {
    let metadata = std::fs::metadata(dir).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(dir.to_path_buf()),
        _ => LoadError::Unreadable {
            path: dir.to_path_buf(),
            source: e,
        },
    })?;
    if !metadata.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let unreadable = |source| LoadError::Unreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !options.show_hidden && name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        let kind = if path.is_dir() {
            ItemKind::Dir
        } else {
            ItemKind::File
        };
        if !options.kind_filter.accepts(kind) {
            continue;
        }

        let entry = FsEntry {
            path,
            name,
            kind,
            description: None,
        };
        if entry.is_dir() {
            dirs.push(entry);
        } else {
            files.push(entry);
        }
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));

    for entry in &mut dirs {
        entry.description = read_dir_description(&entry.path, config);
    }
    if !files.is_empty() {
        let descriptions = read_file_descriptions(dir, config);
        for entry in &mut files {
            entry.description = descriptions.get(&entry.name).map(str::to_string);
        }
    }

    let mut entries = dirs;
    entries.append(&mut files);
    if let Some(lines) = options.description_lines {
        for entry in &mut entries {
            entry.description = entry
                .description
                .take()
                .map(|mut description| {
                    keep_first_lines(&mut description, lines);
                    description
                })
                .filter(|description| !description.is_empty());
        }
    }

    tracing::debug!("Loaded {} entries from {}", entries.len(), dir.display());
    Ok(entries)
}

/// The description sidecar of directory `dir`.
///
/// An empty or missing sidecar means no description. A sidecar that cannot be
/// read for lack of permission yields [`PERMISSION_DENIED_DESCRIPTION`].
pub fn read_dir_description(dir: &Path, config: &Config) -> Option<String> {
    let path = dir.join(&config.description_name);
    match std::fs::read_to_string(&path) {
        Ok(text) if text.is_empty() => None,
        Ok(text) => Some(text),
        Err(e) => match e.kind() {
            io::ErrorKind::NotFound => None,
            io::ErrorKind::PermissionDenied => Some(PERMISSION_DENIED_DESCRIPTION.to_string()),
            _ => {
                tracing::warn!("Skipping description {}: {}", path.display(), e);
                None
            }
        },
    }
}

/// Descriptions for the files in `dir`, empty when the sidecar is missing or
/// unreadable.
pub fn read_file_descriptions(dir: &Path, config: &Config) -> FileDescriptions {
    let path = dir.join(&config.file_description_name);
    FileDescriptions::load(&path).unwrap_or_else(|e| {
        tracing::warn!("Skipping file descriptions {}: {}", path.display(), e);
        FileDescriptions::new()
    })
}

fn keep_first_lines(text: &mut String, lines: usize) {
    if lines == 0 {
        text.clear();
    } else if let Some((at, _)) = text.match_indices('\n').nth(lines - 1) {
        text.truncate(at);
    }
}
