//! Rendering of analysis output for visual inspection.

pub(crate) mod histogram;
mod svg;

use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};
use strum::{Display, EnumString};

pub(crate) use svg::{save_summary_histograms, save_waveform_scatter};

#[derive(Debug, Clone, Copy, EnumString, Display)]
pub(crate) enum FileFormat {
    #[strum(to_string = "svg")]
    Svg,
}

impl FileFormat {
    pub(crate) fn build_path(self, path: &Path, stem: &str) -> Result<PathBuf> {
        create_dir_all(path)?;
        let mut path_buf = path.to_owned();
        path_buf.push(stem);

        if path_buf.set_extension(self.to_string()) {
            Ok(path_buf)
        } else {
            Err(anyhow!(
                "Could not set file extension {} to {:?}",
                self.to_string(),
                path_buf
            ))
        }
    }
}
