//! Cell grids for Tessera frames.
//!
//! - [`Cell`] - one grapheme with its colors and attributes
//! - [`CellBuffer`] - a fixed-size grid with wide-glyph handling and ANSI
//!   serialization
//! - [`DoubleBuffer`] - front/back buffers whose swap reports changed cells
//! - [`diff`] - cell-by-cell comparison producing [`Patch`]es
//!
//! # Pipeline
//!
//! 1. **Paint**: draw the frame into [`DoubleBuffer::paint_target`].
//! 2. **Swap**: [`DoubleBuffer::swap`] returns the patches against the
//!    previous frame and promotes the painted buffer to the front.
//! 3. **Emit**: the terminal layer turns the patches (or the whole front
//!    buffer) into escape sequences.
//!
//! ```
//! use tessera_buffer::DoubleBuffer;
//! use tessera_core::{Color, Style};
//!
//! let mut buffers = DoubleBuffer::new(20, 3);
//! let title = Style::new().fg(Color::CYAN).bold();
//! buffers.paint_target().write_run(2, 1, "Tessera", title);
//!
//! let patches = buffers.swap();
//! assert_eq!(patches.len(), 7);
//! assert_eq!(buffers.front().row_text(1).trim(), "Tessera");
//! ```

#![warn(missing_docs)]

mod buffer;
mod cell;
pub mod diff;
mod double_buffer;

pub use buffer::{CellBuffer, SerializeOptions};
pub use cell::Cell;
pub use diff::Patch;
pub use double_buffer::DoubleBuffer;
