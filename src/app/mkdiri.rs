//! The creation command behind the `mkdiri` binary

use crate::config::Config;
use crate::services::descriptions::FileDescriptions;
use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum MkdiriError {
    #[error("\"{}\" already exists. if you want to add a description, use \"-a\" option please.", .0.display())]
    AlreadyExists(PathBuf),
    #[error("invalid path: parent directory of \"{}\" does not exist.", .0.display())]
    MissingParent(PathBuf),
    #[error("\"{}\" exists but is not a {expected}", path.display())]
    WrongKind { path: PathBuf, expected: &'static str },
    #[error("failed to write \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct MkdiriOptions {
    pub path: PathBuf,
    pub description: String,
    /// Allow an existing target and (re)write its description
    pub add: bool,
    /// Create a file instead of a directory
    pub file: bool,
}

/// Turn the two-character sequence `\n` into a real line break.
pub fn unescape_newlines(description: &str) -> String {
    description.replace("\\n", "\n")
}

/// Create the target and record its description.
pub fn run(options: &MkdiriOptions, config: &Config) -> Result<()> {
    let description = unescape_newlines(&options.description);
    if options.file {
        create_file(&options.path, &description, options.add, config)
    } else {
        create_dir(&options.path, &description, options.add, config)
    }
    .with_context(|| format!("mkdiri {}", options.path.display()))
}

/// Create directory `path` and write `description` to its sidecar.
pub fn create_dir(path: &Path, description: &str, add: bool, config: &Config) -> Result<(), MkdiriError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(MkdiriError::WrongKind {
                path: path.to_path_buf(),
                expected: "directory",
            });
        }
        if !add {
            return Err(MkdiriError::AlreadyExists(path.to_path_buf()));
        }
    } else {
        check_parent(path)?;
        std::fs::create_dir(path).map_err(|source| MkdiriError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Created directory {}", path.display());
    }

    let sidecar = path.join(&config.description_name);
    std::fs::write(&sidecar, description).map_err(|source| MkdiriError::Io {
        path: sidecar,
        source,
    })
}

/// Create file `path` (if missing) and record `description` in its parent's
/// file description sidecar.
pub fn create_file(path: &Path, description: &str, add: bool, config: &Config) -> Result<(), MkdiriError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| MkdiriError::MissingParent(path.to_path_buf()))?;

    if path.exists() {
        if path.is_dir() {
            return Err(MkdiriError::WrongKind {
                path: path.to_path_buf(),
                expected: "file",
            });
        }
        if !add {
            return Err(MkdiriError::AlreadyExists(path.to_path_buf()));
        }
    } else {
        check_parent(path)?;
        std::fs::File::create(path).map_err(|source| MkdiriError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Created file {}", path.display());
    }

    let sidecar = parent_dir(path).join(&config.file_description_name);
    let io_error = |source| MkdiriError::Io {
        path: sidecar.clone(),
        source,
    };
    let mut descriptions = FileDescriptions::load(&sidecar).map_err(io_error)?;
    descriptions.set(name, description);
    descriptions.save(&sidecar).map_err(io_error)
}

/// `path`'s parent, with the empty parent of a bare name meaning `.`
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn check_parent(path: &Path) -> Result<(), MkdiriError> {
    if parent_dir(path).is_dir() {
        Ok(())
    } else {
        Err(MkdiriError::MissingParent(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn options(path: PathBuf, description: &str) -> MkdiriOptions {
        MkdiriOptions {
            path,
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn error_of(result: Result<()>) -> MkdiriError {
        let err = result.unwrap_err();
        match err.downcast::<MkdiriError>() {
            Ok(e) => e,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_create_dir_with_description() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("notes");
        run(&options(target.clone(), "my notes\\nsecond"), &Config::default()).unwrap();

        assert!(target.is_dir());
        assert_eq!(
            fs::read_to_string(target.join(".description.lsi")).unwrap(),
            "my notes\nsecond"
        );
    }

    #[test]
    fn test_existing_dir_needs_add_mode() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("notes");
        fs::create_dir(&target).unwrap();

        let plain = options(target.clone(), "x");
        assert!(matches!(
            error_of(run(&plain, &Config::default())),
            MkdiriError::AlreadyExists(_)
        ));

        let add = MkdiriOptions {
            add: true,
            ..plain
        };
        run(&add, &Config::default()).unwrap();
        assert_eq!(
            fs::read_to_string(target.join(".description.lsi")).unwrap(),
            "x"
        );
    }

    #[test]
    fn test_missing_parent() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("a/b");
        assert!(matches!(
            error_of(run(&options(target, "x"), &Config::default())),
            MkdiriError::MissingParent(_)
        ));
    }

    #[test]
    fn test_file_mode_updates_sidecar() {
        let temp = tempfile::tempdir().unwrap();
        let sidecar = temp.path().join(".file_description.lsi");
        fs::write(&sidecar, "\\/old.txt\nkept\n").unwrap();

        let target = temp.path().join("new.txt");
        let file = MkdiriOptions {
            file: true,
            ..options(target.clone(), "fresh\\nfile")
        };
        run(&file, &Config::default()).unwrap();

        assert!(target.is_file());
        assert_eq!(
            fs::read_to_string(&sidecar).unwrap(),
            "\\/old.txt\nkept\n\\/new.txt\nfresh\nfile\n"
        );

        // Replacing keeps the block in place
        let replace = MkdiriOptions {
            file: true,
            add: true,
            ..options(temp.path().join("old.txt"), "renewed")
        };
        run(&replace, &Config::default()).unwrap();
        assert_eq!(
            fs::read_to_string(&sidecar).unwrap(),
            "\\/old.txt\nrenewed\n\\/new.txt\nfresh\nfile\n"
        );
    }

    #[test]
    fn test_file_mode_existing_file_needs_add() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("a.txt");
        fs::write(&target, "content").unwrap();
        let file = MkdiriOptions {
            file: true,
            ..options(target.clone(), "x")
        };
        assert!(matches!(
            error_of(run(&file, &Config::default())),
            MkdiriError::AlreadyExists(_)
        ));
        // The file itself is untouched
        assert_eq!(fs::read_to_string(&target).unwrap(), "content");
    }

    #[test]
    fn test_wrong_kind() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("f");
        fs::write(&file, "").unwrap();
        let dir_over_file = MkdiriOptions {
            add: true,
            ..options(file, "x")
        };
        assert!(matches!(
            error_of(run(&dir_over_file, &Config::default())),
            MkdiriError::WrongKind { .. }
        ));
    }

    #[test]
    fn test_parent_dir_of_bare_name() {
        assert_eq!(parent_dir(Path::new("x.txt")), Path::new("."));
        assert_eq!(parent_dir(Path::new("a/x.txt")), Path::new("a"));
    }
}
