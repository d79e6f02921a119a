//! Declarative node trees.
//!
//! A [`Node`] describes one UI element and its children. Trees are built
//! fresh for every frame with the chaining constructors below and handed to
//! the layout engine by reference.
//!
//! ```
//! use tessera_layout::{JustifyContent, Node};
//!
//! let tree = Node::row()
//!     .width(40u16)
//!     .justify(JustifyContent::SpaceBetween)
//!     .child(Node::text("left"))
//!     .child(Node::text("right"));
//! assert_eq!(tree.children().len(), 2);
//! ```

use tessera_core::{Color, Style, TextAttributes};
use tessera_text::WrapMode;

use crate::style::{
    AlignItems, AlignSelf, BorderStyle, Dimension, Display, Edges, FlexDirection, JustifyContent,
};

/// Layout and paint properties of a node. Unset fields keep their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Props {
    /// Whether the node takes part in layout.
    pub display: Display,
    /// Main axis of a container.
    pub flex_direction: FlexDirection,
    /// Main-axis distribution of leftover space.
    pub justify_content: JustifyContent,
    /// Cross-axis placement of children.
    pub align_items: AlignItems,
    /// Cross-axis placement of this node inside its parent.
    pub align_self: AlignSelf,
    /// Cells between adjacent children.
    pub gap: u16,
    /// Space inside the border.
    pub padding: Edges<u16>,
    /// Space outside the node.
    pub margin: Edges<u16>,
    /// Explicit width.
    pub width: Dimension,
    /// Explicit height.
    pub height: Dimension,
    /// Share of leftover main-axis space. `None` means 0, or 1 for a spacer.
    pub flex_grow: Option<f32>,
    /// Share of main-axis overflow given up by this node.
    pub flex_shrink: f32,
    /// Border drawn around a box.
    pub border: Option<BorderStyle>,
    /// Border color.
    pub border_color: Color,
    /// Text color.
    pub color: Color,
    /// Background color, inherited by descendants that set none.
    pub background_color: Color,
    /// Text attributes.
    pub attributes: TextAttributes,
    /// How text that does not fit its width is handled.
    pub wrap: WrapMode,
}

impl Props {
    /// Default properties.
    pub const DEFAULT: Self = Self {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        justify_content: JustifyContent::FlexStart,
        align_items: AlignItems::FlexStart,
        align_self: AlignSelf::Auto,
        gap: 0,
        padding: Edges::ZERO,
        margin: Edges::ZERO,
        width: Dimension::Auto,
        height: Dimension::Auto,
        flex_grow: None,
        flex_shrink: 1.0,
        border: None,
        border_color: Color::Default,
        color: Color::Default,
        background_color: Color::Default,
        attributes: TextAttributes::empty(),
        wrap: WrapMode::Wrap,
    };

    /// Cells taken by the border on each side.
    #[inline]
    pub fn border_width(&self) -> u16 {
        u16::from(self.border.is_some())
    }

    /// Padding plus border on every side.
    pub fn inset(&self) -> Edges<u16> {
        let border = self.border_width();
        Edges::new(
            self.padding.top.saturating_add(border),
            self.padding.right.saturating_add(border),
            self.padding.bottom.saturating_add(border),
            self.padding.left.saturating_add(border),
        )
    }

    /// Style for the node's own text.
    pub fn text_style(&self) -> Style {
        Style {
            fg: self.color,
            bg: self.background_color,
            attributes: self.attributes,
        }
    }
}

impl Default for Props {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One element of the UI tree.
///
/// Every variant carries [`Props`]. Only boxes and fragments have children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A flex container.
    Box {
        /// Layout and paint properties.
        props: Props,
        /// Children in source order.
        children: Vec<Node>,
    },
    /// A run of text, possibly multi-line and carrying SGR sequences.
    Text {
        /// Layout and paint properties.
        props: Props,
        /// The text to display.
        content: String,
    },
    /// Empty space; flexible unless given an explicit grow factor of 0.
    Spacer {
        /// Layout and paint properties.
        props: Props,
    },
    /// Vertical space of `count` rows.
    Newline {
        /// Layout and paint properties.
        props: Props,
        /// Rows taken.
        count: u16,
    },
    /// A transparent group whose children join the parent's flex line.
    Fragment {
        /// Layout and paint properties. Padding and border are ignored.
        props: Props,
        /// Children in source order.
        children: Vec<Node>,
    },
}

impl Node {
    /// A row container.
    pub fn row() -> Self {
        Self::Box {
            props: Props::DEFAULT,
            children: Vec::new(),
        }
    }

    /// A column container.
    pub fn column() -> Self {
        Self::row().direction(FlexDirection::Column)
    }

    /// A text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            props: Props::DEFAULT,
            content: content.into(),
        }
    }

    /// A flexible spacer.
    pub fn spacer() -> Self {
        Self::Spacer {
            props: Props::DEFAULT,
        }
    }

    /// A single line break.
    pub fn newline() -> Self {
        Self::newlines(1)
    }

    /// `count` line breaks.
    pub fn newlines(count: u16) -> Self {
        Self::Newline {
            props: Props::DEFAULT,
            count,
        }
    }

    /// A fragment grouping `children`.
    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Self::Fragment {
            props: Props::DEFAULT,
            children: children.into_iter().collect(),
        }
    }

    /// Short name of the variant.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Text { .. } => "text",
            Self::Spacer { .. } => "spacer",
            Self::Newline { .. } => "newline",
            Self::Fragment { .. } => "fragment",
        }
    }

    /// The node's properties.
    pub fn props(&self) -> &Props {
        match self {
            Self::Box { props, .. }
            | Self::Text { props, .. }
            | Self::Spacer { props }
            | Self::Newline { props, .. }
            | Self::Fragment { props, .. } => props,
        }
    }

    /// Mutable access to the node's properties.
    pub fn props_mut(&mut self) -> &mut Props {
        match self {
            Self::Box { props, .. }
            | Self::Text { props, .. }
            | Self::Spacer { props }
            | Self::Newline { props, .. }
            | Self::Fragment { props, .. } => props,
        }
    }

    /// The node's children. Leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Box { children, .. } | Self::Fragment { children, .. } => children,
            Self::Text { .. } | Self::Spacer { .. } | Self::Newline { .. } => &[],
        }
    }

    /// Effective grow factor.
    pub fn flex_grow(&self) -> f32 {
        let default = if matches!(self, Self::Spacer { .. }) { 1.0 } else { 0.0 };
        self.props().flex_grow.unwrap_or(default).max(0.0)
    }

    /// Returns `true` if the node absorbs leftover main-axis space.
    #[inline]
    pub fn is_flexible(&self) -> bool {
        self.flex_grow() > 0.0
    }

    /// Returns `true` if the node is hidden.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.props().display == Display::None
    }

    /// Appends a child. Leaves cannot hold children; the call is ignored.
    #[must_use]
    pub fn child(mut self, child: Node) -> Self {
        match &mut self {
            Self::Box { children, .. } | Self::Fragment { children, .. } => children.push(child),
            leaf => tracing::debug!(kind = leaf.kind(), "ignoring child of leaf node"),
        }
        self
    }

    /// Appends several children.
    #[must_use]
    pub fn children_from(self, children: impl IntoIterator<Item = Node>) -> Self {
        children.into_iter().fold(self, Self::child)
    }

    /// Replaces the properties.
    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        *self.props_mut() = props;
        self
    }

    fn set(mut self, f: impl FnOnce(&mut Props)) -> Self {
        f(self.props_mut());
        self
    }

    /// Sets the display mode.
    #[must_use]
    pub fn display(self, display: Display) -> Self {
        self.set(|p| p.display = display)
    }

    /// Sets the main axis.
    #[must_use]
    pub fn direction(self, direction: FlexDirection) -> Self {
        self.set(|p| p.flex_direction = direction)
    }

    /// Sets main-axis distribution.
    #[must_use]
    pub fn justify(self, justify: JustifyContent) -> Self {
        self.set(|p| p.justify_content = justify)
    }

    /// Sets cross-axis placement of children.
    #[must_use]
    pub fn align_items(self, align: AlignItems) -> Self {
        self.set(|p| p.align_items = align)
    }

    /// Sets cross-axis placement of this node.
    #[must_use]
    pub fn align_self(self, align: AlignSelf) -> Self {
        self.set(|p| p.align_self = align)
    }

    /// Sets the gap between children.
    #[must_use]
    pub fn gap(self, gap: u16) -> Self {
        self.set(|p| p.gap = gap)
    }

    /// Sets the padding.
    #[must_use]
    pub fn padding(self, padding: Edges<u16>) -> Self {
        self.set(|p| p.padding = padding)
    }

    /// Sets the same padding on every side.
    #[must_use]
    pub fn padding_all(self, padding: u16) -> Self {
        self.padding(Edges::all(padding))
    }

    /// Sets the margin.
    #[must_use]
    pub fn margin(self, margin: Edges<u16>) -> Self {
        self.set(|p| p.margin = margin)
    }

    /// Sets the same margin on every side.
    #[must_use]
    pub fn margin_all(self, margin: u16) -> Self {
        self.margin(Edges::all(margin))
    }

    /// Sets the width.
    #[must_use]
    pub fn width(self, width: impl Into<Dimension>) -> Self {
        let width = width.into();
        self.set(|p| p.width = width)
    }

    /// Sets the height.
    #[must_use]
    pub fn height(self, height: impl Into<Dimension>) -> Self {
        let height = height.into();
        self.set(|p| p.height = height)
    }

    /// Sets the grow factor.
    #[must_use]
    pub fn grow(self, grow: f32) -> Self {
        self.set(|p| p.flex_grow = Some(grow))
    }

    /// Sets the shrink factor.
    #[must_use]
    pub fn shrink(self, shrink: f32) -> Self {
        self.set(|p| p.flex_shrink = shrink)
    }

    /// Draws a border.
    #[must_use]
    pub fn border(self, border: BorderStyle) -> Self {
        self.set(|p| p.border = Some(border))
    }

    /// Sets the border color.
    #[must_use]
    pub fn border_color(self, color: Color) -> Self {
        self.set(|p| p.border_color = color)
    }

    /// Sets the text color.
    #[must_use]
    pub fn color(self, color: Color) -> Self {
        self.set(|p| p.color = color)
    }

    /// Sets the background color.
    #[must_use]
    pub fn background(self, color: Color) -> Self {
        self.set(|p| p.background_color = color)
    }

    /// Sets the text color from a color string. Malformed values are
    /// logged and leave the color unset.
    #[must_use]
    pub fn color_str(self, color: &str) -> Self {
        match parse_color(color) {
            Some(color) => self.color(color),
            None => self,
        }
    }

    /// Sets the background color from a color string. Malformed values
    /// are logged and leave the background unset.
    #[must_use]
    pub fn background_str(self, color: &str) -> Self {
        match parse_color(color) {
            Some(color) => self.background(color),
            None => self,
        }
    }

    /// Adds text attributes.
    #[must_use]
    pub fn attributes(self, attributes: TextAttributes) -> Self {
        self.set(|p| p.attributes |= attributes)
    }

    /// Bold text.
    #[must_use]
    pub fn bold(self) -> Self {
        self.attributes(TextAttributes::BOLD)
    }

    /// Dim text.
    #[must_use]
    pub fn dim(self) -> Self {
        self.attributes(TextAttributes::DIM)
    }

    /// Italic text.
    #[must_use]
    pub fn italic(self) -> Self {
        self.attributes(TextAttributes::ITALIC)
    }

    /// Underlined text.
    #[must_use]
    pub fn underline(self) -> Self {
        self.attributes(TextAttributes::UNDERLINE)
    }

    /// Inverse video.
    #[must_use]
    pub fn inverse(self) -> Self {
        self.attributes(TextAttributes::INVERSE)
    }

    /// Struck-through text.
    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.attributes(TextAttributes::STRIKETHROUGH)
    }

    /// Sets how overflowing text is handled.
    #[must_use]
    pub fn wrap(self, wrap: WrapMode) -> Self {
        self.set(|p| p.wrap = wrap)
    }
}

fn parse_color(input: &str) -> Option<Color> {
    match Color::parse(input) {
        Ok(color) => Some(color),
        Err(error) => {
            tracing::debug!(input, %error, "ignoring malformed color");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tessera_text::Truncation;

    #[test]
    fn test_builders_set_props() {
        let node = Node::column()
            .gap(2)
            .padding_all(1)
            .width(Dimension::Percent(50.0))
            .border(BorderStyle::Round)
            .color(Color::GREEN)
            .bold();

        let props = node.props();
        assert_eq!(props.flex_direction, FlexDirection::Column);
        assert_eq!(props.gap, 2);
        assert_eq!(props.inset(), Edges::all(2));
        assert_eq!(props.width, Dimension::Percent(50.0));
        assert_eq!(props.text_style(), Style::new().fg(Color::GREEN).bold());
    }

    #[test]
    fn test_spacer_defaults_to_flexible() {
        assert_eq!(Node::spacer().flex_grow(), 1.0);
        assert!(!Node::spacer().grow(0.0).is_flexible());
        assert!(!Node::text("x").is_flexible());
        assert!(Node::row().grow(2.0).is_flexible());
    }

    #[test]
    fn test_children_only_on_containers() {
        let row = Node::row().children_from([Node::text("a"), Node::spacer()]);
        assert_eq!(row.children().len(), 2);

        let text = Node::text("a").child(Node::text("b"));
        assert!(text.children().is_empty());
    }

    #[test]
    fn test_malformed_color_is_ignored() {
        let node = Node::text("x").color_str("#12345").background_str("navy-ish");
        assert_eq!(node.props().color, Color::Default);
        assert_eq!(node.props().background_color, Color::Default);

        let node = Node::text("x").color_str("#ff0000");
        assert_eq!(node.props().color, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_wrap_mode() {
        let node = Node::text("abc").wrap(WrapMode::Truncate(Truncation::End));
        assert_eq!(node.props().wrap, WrapMode::Truncate(Truncation::End));
        assert_eq!(Node::text("abc").props().wrap, WrapMode::Wrap);
    }

    #[test]
    fn test_kind_names() {
        let kinds: Vec<_> = [
            Node::row(),
            Node::text(""),
            Node::spacer(),
            Node::newline(),
            Node::fragment([]),
        ]
        .iter()
        .map(Node::kind)
        .collect();
        assert_eq!(kinds, vec!["box", "text", "spacer", "newline", "fragment"]);
    }
}
