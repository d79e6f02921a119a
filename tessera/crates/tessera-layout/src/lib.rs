//! Node trees and flex layout for Tessera.
//!
//! A frame starts as a [`Node`] tree. [`layout`] resolves it against the
//! terminal size into a parallel tree of [`LayoutNode`]s holding absolute
//! cell positions and sizes, which the renderer then paints.
//!
//! # Example
//!
//! ```
//! use tessera_layout::{layout, JustifyContent, Node};
//!
//! let tree = Node::row()
//!     .width(20u16)
//!     .justify(JustifyContent::SpaceBetween)
//!     .child(Node::text("left"))
//!     .child(Node::text("right"));
//!
//! let root = layout(&tree, 80, 24);
//! assert_eq!(root.children[0].x, 0);
//! assert_eq!(root.children[1].x, 15);
//! ```

#![warn(missing_docs)]

mod engine;
mod node;
mod style;

pub use engine::{layout, LayoutNode};
pub use node::{Node, Props};
pub use style::{
    AlignItems, AlignSelf, BorderGlyphs, BorderStyle, Dimension, Display, Edges, FlexDirection,
    JustifyContent, StyleParseError,
};
