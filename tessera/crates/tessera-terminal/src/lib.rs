//! Terminal output for Tessera.
//!
//! This crate turns node trees into bytes on a terminal:
//! - [`DeltaRenderer`] runs layout, paint, buffer swap and emission per frame
//! - [`OutputSink`] abstracts the destination, with [`TerminalSink`] for a
//!   real terminal and [`MemorySink`] for headless use
//! - [`RendererConfig`] holds the emission options, loadable from TOML
//! - [`paint()`] draws a laid-out tree into a [`CellBuffer`]
//! - [`global`] offers a lazily created default renderer over stdout
//!
//! # Example
//!
//! ```
//! use tessera_layout::{Node, JustifyContent};
//! use tessera_terminal::{DeltaRenderer, MemorySink, RendererConfig};
//!
//! let mut renderer = DeltaRenderer::new(MemorySink::with_size(20, 1), RendererConfig::default())?;
//! let tree = Node::row()
//!     .width(20u16)
//!     .justify(JustifyContent::SpaceBetween)
//!     .child(Node::text("left"))
//!     .child(Node::text("right"));
//! renderer.render(tree)?;
//!
//! assert_eq!(renderer.front().row_text(0), "left           right");
//! renderer.cleanup()?;
//! # Ok::<(), tessera_terminal::RenderError>(())
//! ```

#![warn(missing_docs)]

pub mod ansi;
mod config;
mod error;
pub mod global;
mod paint;
mod renderer;
mod sink;
mod stats;

pub use config::{RendererConfig, DEFAULT_FULL_REPAINT_THRESHOLD};
pub use error::{ConfigError, RenderError, RenderResult};
pub use paint::paint;
pub use renderer::{DeltaRenderer, FALLBACK_SIZE};
pub use sink::{MemorySink, OutputSink, TerminalSink};
pub use stats::RenderStats;

/// Re-export of the buffer type painted into.
pub use tessera_buffer::CellBuffer;
