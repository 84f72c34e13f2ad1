//! # MorsePanel Layout
//!
//! Turns a text into Morse code slots packed onto a panel and splits the
//! result into per-subpanel drawing scripts.
//!
//! ## Pipeline
//!
//! - **Glyph**: character to dot/dash pattern, pattern to width
//! - **Restrictions**: rightward shifts that keep glyphs out of restricted areas
//! - **Row Packer**: fills one row left to right, wrapping or stopping on the stop marker
//! - **Justify**: slides finished rows flush right inside right-justified subpanels
//! - **Engine**: walks the rows down the panel and totals the covered area
//! - **Emitter**: groups slots and restriction cutouts by subpanel
//! - **Script**: renders a subpanel as CAD rectangle commands

pub mod emitter;
pub mod engine;
pub mod glyph;
pub mod justify;
pub mod restrictions;
pub mod row_packer;
pub mod script;

pub use emitter::{emit, emit_subpanel, SubpanelOutput};
pub use engine::{PanelLayout, PanelLayoutEngine, RowSummary};
pub use glyph::{code, GlyphEncoder};
pub use justify::justify_row;
pub use restrictions::RestrictionResolver;
pub use row_packer::{PackedRow, RowEnd, RowPacker, TextCursor};
pub use script::{ScriptGenerator, ScriptParameters, DEFAULT_DRAW_COMMAND};
