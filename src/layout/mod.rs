//! Text layout engine (pure).
//!
//! Turns the flat buffer into fixed-width terminal rows under soft wrapping
//! and tab expansion, and maps linear offsets to visual positions:
//!
//! - [`boundary`]: logical line start/end
//! - [`width`]: column width of a span with tabs
//! - [`line_iter`]: virtual-line arithmetic used by cursor movement and scrolling
//! - [`render_iter`]: forward scanner producing display rows and locating the cursor
//! - [`row_index`]: cached row boundaries for backward lookups

pub mod boundary;
pub mod line_iter;
pub mod render_iter;
pub mod row_index;
pub mod types;
pub mod width;

// Re-export for convenience
pub use boundary::{line_end, line_start};
pub use line_iter::{next_virtual_boundary, prev_virtual_boundary};
pub use render_iter::RenderIter;
pub use row_index::RowIndex;
pub use types::{
    DisplayRow, InvalidTabWidth, InvalidWrapWidth, LayoutParams, RenderResult, TabWidth,
    WrapWidth,
};
pub use width::{expand_tabs, visual_width};
