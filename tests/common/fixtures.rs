// Directory tree fixtures

use lsi::app::content_filter::Confirm;
use lsi::app::lsi::{run, Io, ListOptions};
use lsi::{Config, TagVocabulary};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree to list
pub struct TreeFixture {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl TreeFixture {
    /// Create an empty directory named `name` inside a fresh temp dir
    pub fn new(name: &str) -> anyhow::Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let root = temp_dir.path().join(name);
        fs::create_dir(&root)?;
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    pub fn dir(&self, rel: &str) -> anyhow::Result<&Self> {
        fs::create_dir_all(self.root.join(rel))?;
        Ok(self)
    }

    /// Directory with a description sidecar
    pub fn described_dir(&self, rel: &str, description: &str) -> anyhow::Result<&Self> {
        self.dir(rel)?;
        fs::write(self.root.join(rel).join(".description.lsi"), description)?;
        Ok(self)
    }

    pub fn file(&self, rel: &str) -> anyhow::Result<&Self> {
        fs::write(self.root.join(rel), "")?;
        Ok(self)
    }

    /// Write the per-file sidecar of the root directory
    pub fn file_descriptions(&self, contents: &str) -> anyhow::Result<&Self> {
        fs::write(self.root.join(".file_description.lsi"), contents)?;
        Ok(self)
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

/// Answers every prompt the same way and records the prompts
pub struct ScriptedConfirm {
    pub answer: bool,
    pub prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        self.prompts.push(prompt.to_string());
        Ok(self.answer)
    }
}

/// Captured output of one listing run
pub struct Listing {
    pub stdout: String,
    pub stderr: String,
}

/// Run the listing pipeline on `dir` with default configuration
pub fn list(
    dir: &Path,
    options: ListOptions,
    confirm: &mut ScriptedConfirm,
) -> anyhow::Result<Listing> {
    list_with_config(dir, options, &Config::default(), confirm)
}

pub fn list_with_config(
    dir: &Path,
    options: ListOptions,
    config: &Config,
    confirm: &mut ScriptedConfirm,
) -> anyhow::Result<Listing> {
    let vocab = TagVocabulary::from_config(config);
    let options = ListOptions {
        dir: dir.to_path_buf(),
        ..options
    };
    let mut out = Vec::new();
    let mut err = Vec::new();
    run(
        &options,
        config,
        &vocab,
        Io {
            out: &mut out,
            err: &mut err,
            confirm,
        },
    )?;
    Ok(Listing {
        stdout: String::from_utf8(out)?,
        stderr: String::from_utf8(err)?,
    })
}
