use std::path::PathBuf;

use image::Rgba;

use crate::color::THEME_BACKGROUND;

pub const DEFAULT_BASE_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl IconJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the job paths are relative to
    pub base_dir: PathBuf,

    /// Color written over every near-white pixel
    pub bg_color: Rgba<u8>,

    /// Processed in order
    pub jobs: Vec<IconJob>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            bg_color: THEME_BACKGROUND,
            jobs: vec![
                IconJob::new("icon-192.png", "icon-192x192.png"),
                IconJob::new("icon-512.png", "icon-512x512.png"),
            ],
        }
    }
}

impl Config {
    /// Resolve every job's input and output against `base_dir`.
    pub fn job_paths(&self) -> Vec<(PathBuf, PathBuf)> {
        self.jobs
            .iter()
            .map(|job| (self.base_dir.join(&job.input), self.base_dir.join(&job.output)))
            .collect()
    }
}
