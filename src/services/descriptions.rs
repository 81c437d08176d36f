//! Per-file description sidecar
//!
//! One sidecar per directory holds the descriptions of the files in it. The
//! format is a sequence of blocks; each block starts with a header line `\/`
//! followed by the file name, and every following line up to the next header
//! belongs to that file's description:
//!
//! ```text
//! \/main.rs
//! entry point
//! \/README.md
//! read me first
//! second line
//! ```

use std::io;
use std::path::Path;

/// Prefix of a block header line
pub const BLOCK_HEADER: &str = "\\/";

/// Ordered file name -> description mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDescriptions {
    entries: Vec<(String, String)>,
}

impl FileDescriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse sidecar contents. Lines before the first header are ignored and
    /// description lines are kept verbatim.
    pub fn parse(contents: &str) -> Self {
        let mut entries: Vec<(String, Vec<&str>)> = Vec::new();
        for line in contents.split('\n') {
            if let Some(name) = line.strip_prefix(BLOCK_HEADER) {
                entries.push((name.trim_end_matches('\r').to_string(), Vec::new()));
            } else if let Some((_, lines)) = entries.last_mut() {
                lines.push(line);
            }
        }

        let mut descriptions = Self::new();
        for (name, lines) in entries {
            descriptions.set(name, lines.join("\n"));
        }
        descriptions
    }

    /// Read and parse `path`. A missing sidecar is an empty mapping.
    pub fn load(path: &Path) -> io::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Self::parse(&contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, self.to_sidecar_string())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d.as_str())
    }

    /// Insert or replace the description of `name`, keeping its position
    /// when it already exists.
    pub fn set(&mut self, name: impl Into<String>, description: impl Into<String>) {
        let name = name.into();
        let description = description.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = description,
            None => self.entries.push((name, description)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d.as_str()))
    }

    /// Serialize back to the block format. Trailing newlines of each
    /// description are dropped so that a round trip does not grow blank lines.
    pub fn to_sidecar_string(&self) -> String {
        let mut out = self
            .entries
            .iter()
            .map(|(name, description)| {
                format!(
                    "{BLOCK_HEADER}{name}\n{}",
                    description.trim_end_matches('\n')
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}
