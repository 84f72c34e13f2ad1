use serde::{Deserialize, Serialize};

use crate::emitter::SubpanelOutput;

/// Rectangle with round filleted inside corners of 1/4 unit radius
pub const DEFAULT_DRAW_COMMAND: &str = "RECTANG f 0.25";

/// File extension of generated scripts
pub const SCRIPT_EXTENSION: &str = "scr";

/// Parameters for the drawing script generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptParameters {
    /// Command that draws a rectangle from two corner points
    pub draw_command: String,
    /// Lines emitted before any drawing. Snapping must be off or the CAD
    /// program moves the corner points.
    pub header: Vec<String>,
}

impl Default for ScriptParameters {
    fn default() -> Self {
        Self {
            draw_command: DEFAULT_DRAW_COMMAND.to_string(),
            header: vec!["SNAPMODE 0".to_string(), "OSNAPCOORD 1".to_string()],
        }
    }
}

/// Generator for per-subpanel CAD scripts
pub struct ScriptGenerator {
    params: ScriptParameters,
}

impl ScriptGenerator {
    /// Create a new ScriptGenerator with the given parameters
    pub fn new(params: ScriptParameters) -> Self {
        Self { params }
    }

    /// Script file name for a subpanel
    pub fn file_name(&self, subpanel: &str) -> String {
        format!("{}.{}", subpanel, SCRIPT_EXTENSION)
    }

    /// Generate the script: header, the subpanel outline, every slot, then
    /// every cutout
    pub fn generate(&self, output: &SubpanelOutput) -> String {
        let mut script = String::new();

        for line in &self.params.header {
            script.push_str(line);
            script.push('\n');
        }

        self.push_rect(&mut script, &output.bounds);
        for slot in &output.slots {
            self.push_rect(&mut script, slot);
        }
        for cutout in &output.cutouts {
            self.push_rect(&mut script, cutout);
        }

        script
    }

    fn push_rect(&self, script: &mut String, rect: &morsepanel_core::Rect) {
        script.push_str(&format!(
            "{} {:.2},{:.2} {:.2},{:.2}\n",
            self.params.draw_command, rect.ll_x, rect.ll_y, rect.ur_x, rect.ur_y
        ));
    }
}
