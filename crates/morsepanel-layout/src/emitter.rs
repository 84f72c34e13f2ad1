//! Splits a finished layout into per-subpanel outputs.

use morsepanel_core::{PanelDesign, Rect, Restriction, Subpanel};
use serde::Serialize;
use tracing::{info, warn};

use crate::engine::PanelLayout;

/// Everything drawn into one subpanel's script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubpanelOutput {
    pub name: String,
    pub bounds: Rect,
    pub slots: Vec<Rect>,
    /// Restriction outlines, already inset by the restricted border
    pub cutouts: Vec<Rect>,
}

impl SubpanelOutput {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn cutout_count(&self) -> usize {
        self.cutouts.len()
    }
}

/// Collect the slots overlapping `subpanel` and the cutouts of the
/// restrictions lying entirely inside it.
pub fn emit_subpanel(
    slots: &[Rect],
    subpanel: &Subpanel,
    restrictions: &[Restriction],
    restricted_border: f64,
) -> SubpanelOutput {
    let slots: Vec<Rect> = slots
        .iter()
        .filter(|slot| slot.overlaps(&subpanel.bounds))
        .copied()
        .collect();
    let cutouts: Vec<Rect> = restrictions
        .iter()
        .filter(|r| r.draw_cutout && subpanel.bounds.contains(&r.bounds))
        .map(|r| r.bounds.inset(restricted_border))
        .collect();

    if slots.is_empty() {
        warn!("subpanel {} received no Morse code slots", subpanel.name);
    }

    SubpanelOutput {
        name: subpanel.name.clone(),
        bounds: subpanel.bounds,
        slots,
        cutouts,
    }
}

/// One output per declared subpanel, in declaration order.
pub fn emit(layout: &PanelLayout, design: &PanelDesign) -> Vec<SubpanelOutput> {
    design
        .subpanels
        .iter()
        .map(|subpanel| {
            let output = emit_subpanel(
                &layout.slots,
                subpanel,
                &design.restrictions,
                design.panel.restricted_border,
            );
            info!(
                "subpanel {}: {} slots, {} cutouts",
                output.name,
                output.slot_count(),
                output.cutout_count()
            );
            output
        })
        .collect()
}
