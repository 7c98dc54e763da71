//! Directory conventions shared with the clustering program.
//!
//! Unlabeled point files live under `<root>/inputs/` and labeled ones under
//! `<root>/outputs/`, named after the input file with a `.out` suffix.

use anyhow::Context as _;
use anyhow::Result;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

pub const INPUTS_DIR: &str = "inputs";
pub const OUTPUTS_DIR: &str = "outputs";

/// Point file shared by `point-gen` and `point-plot` when none is given.
pub const DEFAULT_FILENAME: &str = "data.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn inputs_dir(&self) -> PathBuf {
        self.root.join(INPUTS_DIR)
    }

    pub fn outputs_dir(&self) -> PathBuf {
        self.root.join(OUTPUTS_DIR)
    }

    /// `<root>/inputs/<filename>`
    pub fn input(&self, filename: &str) -> PathBuf {
        self.inputs_dir().join(filename)
    }

    /// `<root>/outputs/<filename>.out`
    pub fn labeled_output(&self, filename: &str) -> PathBuf {
        self.outputs_dir().join(format!("{filename}.out"))
    }

    /// `<root>/outputs/<filename>.svg`
    pub fn figure(&self, filename: &str) -> PathBuf {
        self.outputs_dir().join(format!("{filename}.svg"))
    }

    /// Creates the inputs directory and its parents if they are missing.
    pub fn create_inputs_dir(&self) -> Result<PathBuf> {
        let dir = self.inputs_dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
        Ok(dir)
    }
}
