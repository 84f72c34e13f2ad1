//! Pipeline glue between configuration, layout and script files.
//!
//! Every layout and emission step runs before the first file is written, so a
//! fatal layout error leaves the output directory untouched.

use std::fs;
use std::path::{Path, PathBuf};

use morsepanel_layout::{emit, PanelLayout, PanelLayoutEngine, ScriptGenerator, ScriptParameters};
use morsepanel_settings::Config;
use serde::Serialize;
use tracing::info;

use crate::{Result, SubpanelOutput};

/// Laid-out panel and its per-subpanel split.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub layout: PanelLayout,
    pub outputs: Vec<SubpanelOutput>,
}

impl RunReport {
    /// Report line for the share of the panel covered by slots.
    pub fn utilization_line(&self, precision: usize) -> String {
        format!(
            "{:.*}% of the panel space is open, not including restricted areas",
            precision,
            self.layout.utilization_percent()
        )
    }
}

/// A script file written to disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrittenScript {
    pub path: PathBuf,
    pub slots: usize,
    pub cutouts: usize,
}

impl WrittenScript {
    pub fn summary_line(&self) -> String {
        format!(
            "file {} written with {} Morse code slots and {} restricted area {}",
            self.path.display(),
            self.slots,
            self.cutouts,
            if self.cutouts == 1 { "cutout" } else { "cutouts" }
        )
    }
}

/// Lay out the configured design and split it by subpanel.
pub fn plan(config: &Config) -> Result<RunReport> {
    let layout = PanelLayoutEngine::new(&config.design).run()?;
    let outputs = emit(&layout, &config.design);
    Ok(RunReport { layout, outputs })
}

/// Write one `<name>.scr` per subpanel into `directory`, creating it if needed.
pub fn write_scripts(
    report: &RunReport,
    params: &ScriptParameters,
    directory: &Path,
) -> Result<Vec<WrittenScript>> {
    let generator = ScriptGenerator::new(params.clone());
    let scripts: Vec<(PathBuf, String, &SubpanelOutput)> = report
        .outputs
        .iter()
        .map(|output| {
            (
                directory.join(generator.file_name(&output.name)),
                generator.generate(output),
                output,
            )
        })
        .collect();

    fs::create_dir_all(directory)?;
    let mut written = Vec::with_capacity(scripts.len());
    for (path, script, output) in scripts {
        fs::write(&path, script)?;
        info!("wrote {}", path.display());
        written.push(WrittenScript {
            path,
            slots: output.slot_count(),
            cutouts: output.cutout_count(),
        });
    }
    Ok(written)
}
