//! Tessera: flex layout and delta rendering for character-grid terminals.
//!
//! A frame is described as a [`Node`](layout::Node) tree, laid out with a
//! single-axis flex engine, painted into a cell buffer and emitted to the
//! terminal as either a list of changed cells or a full repaint.
//!
//! The pipeline is split over focused crates, re-exported here:
//! - [`core`]: colors, styles, SGR encoding and geometry
//! - [`text`]: width measurement, ANSI tokenizing, wrapping and truncation
//! - [`buffer`]: cell grids, diffing and the double buffer
//! - [`layout`]: node trees and the flex layout engine
//! - [`terminal`]: painting, output sinks and the delta renderer
//!
//! # Example
//!
//! ```
//! use tessera::prelude::*;
//!
//! let mut renderer = DeltaRenderer::new(MemorySink::with_size(24, 3), RendererConfig::default())?;
//! let tree = Node::column()
//!     .border(BorderStyle::Round)
//!     .child(Node::text("Hello, Tessera!").color(Color::CYAN));
//! renderer.render(tree)?;
//!
//! assert_eq!(renderer.front().row_text(1).trim_end(), "│Hello, Tessera!│");
//! renderer.cleanup()?;
//! # Ok::<(), tessera::terminal::RenderError>(())
//! ```

pub use tessera_buffer as buffer;
pub use tessera_core as core;
pub use tessera_layout as layout;
pub use tessera_terminal as terminal;
pub use tessera_text as text;

pub mod prelude {
    //! The types needed to build and render a frame.

    pub use tessera_core::{Color, Rect, Size, Style, TextAttributes};
    pub use tessera_layout::{
        layout, AlignItems, AlignSelf, BorderStyle, Dimension, Display, Edges, FlexDirection,
        JustifyContent, LayoutNode, Node, Props,
    };
    pub use tessera_terminal::{
        DeltaRenderer, MemorySink, OutputSink, RenderStats, RendererConfig, TerminalSink,
    };
    pub use tessera_text::{Truncation, WrapMode};
}
