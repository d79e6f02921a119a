//! Single-axis flex layout.
//!
//! Every container lays its children out on one line along its main axis:
//!
//! 1. Hidden children get a zero-size node and take no space.
//! 2. Fixed children (grow 0) are measured at their natural size.
//! 3. Leftover space is split between flexible children by grow factor,
//!    floored, with the rounding remainder going to the last flexible child.
//!    Overflow is taken back from fixed children by shrink factor.
//! 4. Without flexible children, `justify_content` distributes the leftover.
//! 5. Children are placed on the cross axis by `align_self` or the
//!    container's `align_items`.
//!
//! Coordinates in the resulting [`LayoutNode`] tree are absolute.

use smallvec::SmallVec;
use tessera_core::{Rect, Size};
use tessera_text::{fitted_line_count, line_count, max_line_width, WrapMode};

use crate::node::{Node, Props};
use crate::style::{AlignItems, Dimension, Edges, JustifyContent};

type Items<'a> = SmallVec<[&'a Node; 16]>;

/// A positioned node.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode<'a> {
    /// The source node.
    pub node: &'a Node,
    /// Absolute column of the left edge.
    pub x: u16,
    /// Absolute row of the top edge.
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
    /// Layouts of the source node's children, in source order.
    pub children: Vec<LayoutNode<'a>>,
}

impl<'a> LayoutNode<'a> {
    fn leaf(node: &'a Node, rect: Rect) -> Self {
        Self {
            node,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            children: Vec::new(),
        }
    }

    /// The area covered by this node.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Returns `true` if the node covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Visits this node and its descendants depth-first.
    pub fn walk(&self, f: &mut impl FnMut(&LayoutNode<'a>)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }
}

/// Lays out `node` inside `available_width` × `available_height` cells.
///
/// ```
/// use tessera_layout::{layout, Node};
///
/// let tree = Node::row()
///     .width(40u16)
///     .child(Node::row().grow(1.0))
///     .child(Node::row().grow(1.0))
///     .child(Node::row().grow(2.0));
/// let root = layout(&tree, 80, 24);
///
/// let widths: Vec<u16> = root.children.iter().map(|c| c.width).collect();
/// assert_eq!(widths, vec![10, 10, 20]);
/// ```
pub fn layout(node: &Node, available_width: u16, available_height: u16) -> LayoutNode<'_> {
    let margin = node.props().margin;
    let available = Size::new(
        available_width.saturating_sub(margin.horizontal()),
        available_height.saturating_sub(margin.vertical()),
    );
    let size = measure(node, available, true);
    let origin = Rect::new(
        margin.left.min(available_width),
        margin.top.min(available_height),
        size.width,
        size.height,
    );
    let root = arrange(node, origin, available);
    tracing::trace!(
        kind = node.kind(),
        width = root.width,
        height = root.height,
        "layout pass complete"
    );
    root
}

/// Final size of `node` given the space it may use, margins excluded.
///
/// With `fill_flexible`, a flexible container without an explicit size
/// takes all of `available`. Inside a flex line the parent assigns the main
/// size instead, and the cross size comes from content.
fn measure(node: &Node, available: Size, fill_flexible: bool) -> Size {
    if node.is_hidden() {
        return Size::default();
    }

    let props = node.props();
    let width = props.width.resolve(available.width);
    let height = props.height.resolve(available.height);

    let size = match node {
        Node::Text { content, .. } => text_size(content, props.wrap, width, height, available),
        Node::Spacer { .. } => Size::new(width.unwrap_or(available.width), height.unwrap_or(1)),
        Node::Newline { count, .. } => Size::new(width.unwrap_or(0), height.unwrap_or(*count)),
        Node::Box { children, .. } | Node::Fragment { children, .. } => {
            let flexible = fill_flexible && node.is_flexible();
            container_size(node, children, (width, height), available, flexible)
        }
    };

    Size::new(
        size.width.min(available.width),
        size.height.min(available.height),
    )
}

fn text_size(
    content: &str,
    wrap: WrapMode,
    width: Option<u16>,
    height: Option<u16>,
    available: Size,
) -> Size {
    let natural = to_cells(max_line_width(content));
    let width = width.unwrap_or(natural).min(available.width);
    let height = height.unwrap_or_else(|| {
        let wraps = matches!(wrap, WrapMode::Wrap | WrapMode::WrapChar);
        if wraps && natural > width && width > 0 {
            to_cells(fitted_line_count(content, usize::from(width), wrap))
        } else {
            to_cells(line_count(content))
        }
    });
    Size::new(width, height)
}

fn container_size(
    node: &Node,
    children: &[Node],
    (width, height): (Option<u16>, Option<u16>),
    available: Size,
    flexible: bool,
) -> Size {
    let props = node.props();
    let inset = container_inset(node);
    let items = flatten(children);
    let line = size_line(props, &items, content_room(node, available));
    let (content_width, content_height) = if props.flex_direction.is_row() {
        (line.main_extent, line.cross_extent)
    } else {
        (line.cross_extent, line.main_extent)
    };

    Size::new(
        width.unwrap_or_else(|| {
            if flexible {
                available.width
            } else {
                content_width.saturating_add(inset.horizontal())
            }
        }),
        height.unwrap_or_else(|| {
            if flexible {
                available.height
            } else {
                content_height.saturating_add(inset.vertical())
            }
        }),
    )
}

/// Padding and border of a box. Fragments have none.
fn container_inset(node: &Node) -> Edges<u16> {
    match node {
        Node::Box { props, .. } => props.inset(),
        _ => Edges::ZERO,
    }
}

/// Space inside the padding and border of a container measured in
/// `available`. Percent sizes of its children resolve against this.
fn content_room(node: &Node, available: Size) -> Size {
    let props = node.props();
    let inset = container_inset(node);
    let room = |dimension: Dimension, axis: u16, inset: u16| {
        dimension
            .resolve(axis)
            .unwrap_or(axis)
            .min(axis)
            .saturating_sub(inset)
    };
    Size::new(
        room(props.width, available.width, inset.horizontal()),
        room(props.height, available.height, inset.vertical()),
    )
}

/// Lays out `node` into `rect`, recursing into its children. `room` is the
/// space `node` was measured in.
fn arrange<'a>(node: &'a Node, rect: Rect, room: Size) -> LayoutNode<'a> {
    if node.is_hidden() {
        return LayoutNode::leaf(node, Rect::new(rect.x, rect.y, 0, 0));
    }

    let children = match node {
        Node::Box { children, .. } | Node::Fragment { children, .. } => children,
        Node::Text { .. } | Node::Spacer { .. } | Node::Newline { .. } => {
            return LayoutNode::leaf(node, rect);
        }
    };

    let inset = container_inset(node);
    let content = rect.inset(inset.left, inset.top, inset.right, inset.bottom);
    let content_size = Size::new(content.width, content.height);
    let items = flatten(children);
    let props = node.props();

    // Sizes from measuring are kept unless the parent shrank this node.
    let measured = size_line(props, &items, content_room(node, room));
    let line = if measured.fits(props, content_size) {
        measured
    } else {
        size_line(props, &items, content_size)
    };
    let rects = place_line(props, &items, &line, content);

    let mut placed = items
        .iter()
        .copied()
        .zip(rects)
        .zip(line.rooms.iter().copied())
        .map(|((item, rect), room)| arrange(item, rect, room))
        .collect::<Vec<_>>()
        .into_iter();

    LayoutNode {
        children: regroup(children, &mut placed, (content.x, content.y)),
        ..LayoutNode::leaf(node, rect)
    }
}

/// Children as they take part in a flex line: visible fragments are
/// replaced by their own children, recursively.
fn flatten(children: &[Node]) -> Items<'_> {
    let mut items = Items::new();
    for child in children {
        match child {
            Node::Fragment { children, .. } if !child.is_hidden() => items.extend(flatten(children)),
            _ => items.push(child),
        }
    }
    items
}

/// Rebuilds the source tree shape from flattened item layouts. Each
/// fragment spans the bounding box of its children.
fn regroup<'a, I>(children: &'a [Node], placed: &mut I, origin: (u16, u16)) -> Vec<LayoutNode<'a>>
where
    I: Iterator<Item = LayoutNode<'a>>,
{
    let mut nodes = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Node::Fragment { children: inner, .. } if !child.is_hidden() => {
                let grouped = regroup(inner, placed, origin);
                let start = grouped
                    .first()
                    .map_or(Rect::new(origin.0, origin.1, 0, 0), |first| {
                        Rect::new(first.x, first.y, 0, 0)
                    });
                let bounds = grouped.iter().fold(start, |acc, node| acc.union(node.rect()));
                nodes.push(LayoutNode {
                    children: grouped,
                    ..LayoutNode::leaf(child, bounds)
                });
            }
            _ => nodes.extend(placed.next()),
        }
    }
    nodes
}

/// Resolved sizes of one flex line.
struct Line {
    /// Size of each item, indexed like the items.
    sizes: Vec<Size>,
    /// Space each item was measured in.
    rooms: Vec<Size>,
    /// Main-axis space used, margins and gaps included.
    main_extent: u16,
    /// Largest cross-axis size, margins included.
    cross_extent: u16,
    has_flexible: bool,
}

impl Line {
    fn fits(&self, props: &Props, content: Size) -> bool {
        let (main, cross) = if props.flex_direction.is_row() {
            (content.width, content.height)
        } else {
            (content.height, content.width)
        };
        self.main_extent <= main && self.cross_extent <= cross
    }
}

/// Margins of `props` split into (main start, main end, cross start, cross end).
fn axis_margins(margin: Edges<u16>, row: bool) -> (u16, u16, u16, u16) {
    if row {
        (margin.left, margin.right, margin.top, margin.bottom)
    } else {
        (margin.top, margin.bottom, margin.left, margin.right)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn size_line(props: &Props, items: &[&Node], content: Size) -> Line {
    let row = props.flex_direction.is_row();
    let (main_available, cross_available) = if row {
        (content.width, content.height)
    } else {
        (content.height, content.width)
    };
    let axis_size = |main: u16, cross: u16| {
        if row {
            Size::new(main, cross)
        } else {
            Size::new(cross, main)
        }
    };
    let split = |size: Size| if row { (size.width, size.height) } else { (size.height, size.width) };

    let visible: SmallVec<[usize; 16]> = (0..items.len()).filter(|&i| !items[i].is_hidden()).collect();
    let mut main = vec![0u16; items.len()];
    let mut cross = vec![0u16; items.len()];
    let mut rooms = vec![Size::default(); items.len()];

    let gaps = u32::from(props.gap) * visible.len().saturating_sub(1) as u32;
    let mut used = gaps;
    for &i in &visible {
        let (ms, me, cs, ce) = axis_margins(items[i].props().margin, row);
        used += u32::from(ms) + u32::from(me);
        if items[i].is_flexible() {
            continue;
        }
        let room = axis_size(
            main_available.saturating_sub(ms.saturating_add(me)),
            cross_available.saturating_sub(cs.saturating_add(ce)),
        );
        (main[i], cross[i]) = split(measure(items[i], room, false));
        rooms[i] = room;
        used += u32::from(main[i]);
    }

    let remaining = i64::from(main_available) - i64::from(used);
    let flexible: SmallVec<[usize; 8]> = visible.iter().copied().filter(|&i| items[i].is_flexible()).collect();

    if remaining < 0 {
        let shrinkable: SmallVec<[usize; 16]> = visible
            .iter()
            .copied()
            .filter(|&i| !items[i].is_flexible() && main[i] > 0 && items[i].props().flex_shrink > 0.0)
            .collect();
        let total: f32 = shrinkable.iter().map(|&i| items[i].props().flex_shrink).sum();
        let overflow = remaining.unsigned_abs();
        let mut taken = 0u64;
        for (n, &i) in shrinkable.iter().enumerate() {
            let share = if n + 1 == shrinkable.len() {
                overflow - taken
            } else {
                (overflow as f32 * items[i].props().flex_shrink / total).floor() as u64
            };
            taken += share;
            main[i] = main[i].saturating_sub(u16::try_from(share).unwrap_or(u16::MAX));

            let (_, _, cs, ce) = axis_margins(items[i].props().margin, row);
            let room = axis_size(main[i], cross_available.saturating_sub(cs.saturating_add(ce)));
            cross[i] = split(measure(items[i], room, false)).1;
            rooms[i] = room;
        }
    }

    let free = remaining.max(0) as u64;
    let total_grow: f32 = flexible.iter().map(|&i| items[i].flex_grow()).sum();
    let mut given = 0u64;
    for (n, &i) in flexible.iter().enumerate() {
        let share = if free == 0 {
            0
        } else if n + 1 == flexible.len() {
            free - given
        } else {
            (free as f32 * items[i].flex_grow() / total_grow).floor() as u64
        };
        given += share;
        main[i] = u16::try_from(share).unwrap_or(u16::MAX);

        let (_, _, cs, ce) = axis_margins(items[i].props().margin, row);
        let room = axis_size(main[i], cross_available.saturating_sub(cs.saturating_add(ce)));
        cross[i] = split(measure(items[i], room, false)).1;
        rooms[i] = room;
    }

    let mut main_extent = gaps;
    let mut cross_extent = 0u16;
    for &i in &visible {
        let (ms, me, cs, ce) = axis_margins(items[i].props().margin, row);
        let cross_room = cross_available.saturating_sub(cs.saturating_add(ce));
        let align = items[i].props().align_self.resolve(props.align_items);
        let explicit_cross = if row { items[i].props().height } else { items[i].props().width };
        if align == AlignItems::Stretch && !row && explicit_cross.is_auto() {
            cross[i] = cross_room;
        }
        cross[i] = cross[i].min(cross_room);

        main_extent += u32::from(main[i]) + u32::from(ms) + u32::from(me);
        cross_extent = cross_extent.max(cross[i].saturating_add(cs).saturating_add(ce));
    }

    Line {
        sizes: (0..items.len()).map(|i| axis_size(main[i], cross[i])).collect(),
        rooms,
        main_extent: u16::try_from(main_extent).unwrap_or(u16::MAX),
        cross_extent,
        has_flexible: !flexible.is_empty(),
    }
}

/// Leading offset and extra spacing between items for `justify`.
fn justify_offsets(justify: JustifyContent, free: u16, count: u16) -> (u16, u16) {
    if count == 0 {
        return (0, 0);
    }
    match justify {
        JustifyContent::FlexStart => (0, 0),
        JustifyContent::FlexEnd => (free, 0),
        JustifyContent::Center => (free / 2, 0),
        JustifyContent::SpaceBetween if count > 1 => (0, free / (count - 1)),
        JustifyContent::SpaceBetween => (0, 0),
        JustifyContent::SpaceAround => {
            let around = free / count;
            (around / 2, around)
        }
        JustifyContent::SpaceEvenly => {
            let even = free / (count + 1);
            (even, even)
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn place_line(props: &Props, items: &[&Node], line: &Line, content: Rect) -> Vec<Rect> {
    let row = props.flex_direction.is_row();
    let (main_available, cross_available) = if row {
        (content.width, content.height)
    } else {
        (content.height, content.width)
    };

    let mut rects = vec![Rect::new(content.x, content.y, 0, 0); items.len()];
    let mut order: SmallVec<[usize; 16]> = (0..items.len()).filter(|&i| !items[i].is_hidden()).collect();
    if props.flex_direction.is_reverse() {
        order.reverse();
    }

    let (start, spacing) = if line.has_flexible {
        (0, 0)
    } else {
        let free = main_available.saturating_sub(line.main_extent);
        justify_offsets(props.justify_content, free, order.len() as u16)
    };

    let mut cursor = start;
    for &i in &order {
        let size = line.sizes[i];
        let (main, cross) = if row { (size.width, size.height) } else { (size.height, size.width) };
        let (ms, me, cs, ce) = axis_margins(items[i].props().margin, row);

        let main_pos = cursor.saturating_add(ms);
        cursor = main_pos
            .saturating_add(main)
            .saturating_add(me)
            .saturating_add(props.gap)
            .saturating_add(spacing);

        let cross_free = cross_available.saturating_sub(cross.saturating_add(cs).saturating_add(ce));
        let cross_pos = cs.saturating_add(match items[i].props().align_self.resolve(props.align_items) {
            AlignItems::Center => cross_free / 2,
            AlignItems::FlexEnd => cross_free,
            AlignItems::FlexStart | AlignItems::Stretch => 0,
        });

        let (dx, dy) = if row { (main_pos, cross_pos) } else { (cross_pos, main_pos) };
        rects[i] = Rect::new(
            content.x.saturating_add(dx),
            content.y.saturating_add(dy),
            size.width,
            size.height,
        );
    }
    rects
}

fn to_cells(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{AlignSelf, Display, FlexDirection};
    use pretty_assertions::assert_eq;

    fn rects(node: &LayoutNode<'_>) -> Vec<Rect> {
        node.children.iter().map(LayoutNode::rect).collect()
    }

    #[test]
    fn test_text_natural_size() {
        let tree = Node::text("hello\nworld!\n世界");
        let root = layout(&tree, 80, 24);
        assert_eq!(root.rect(), Rect::new(0, 0, 6, 3));
    }

    #[test]
    fn test_text_wraps_when_clamped() {
        let tree = Node::text("hello world");
        let root = layout(&tree, 6, 10);
        assert_eq!((root.width, root.height), (6, 2));
    }

    #[test]
    fn test_row_places_children_side_by_side() {
        let tree = Node::row()
            .gap(1)
            .child(Node::text("ab"))
            .child(Node::text("cde"));
        let root = layout(&tree, 80, 24);
        assert_eq!(root.rect(), Rect::new(0, 0, 6, 1));
        assert_eq!(rects(&root), vec![Rect::new(0, 0, 2, 1), Rect::new(3, 0, 3, 1)]);
    }

    #[test]
    fn test_column_with_padding_and_border() {
        let tree = Node::column()
            .padding_all(1)
            .border(crate::BorderStyle::Single)
            .child(Node::text("one"))
            .child(Node::text("three"));
        let root = layout(&tree, 80, 24);
        assert_eq!(root.rect(), Rect::new(0, 0, 9, 6));
        assert_eq!(rects(&root), vec![Rect::new(2, 2, 3, 1), Rect::new(2, 3, 5, 1)]);
    }

    #[test]
    fn test_flex_remainder_goes_to_last() {
        let tree = Node::row()
            .width(10u16)
            .children_from((0..3).map(|_| Node::row().grow(1.0)));
        let root = layout(&tree, 80, 24);
        let widths: Vec<_> = root.children.iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![3, 3, 4]);
        assert_eq!(root.children[2].x, 6);
    }

    #[test]
    fn test_spacer_pushes_to_end() {
        let tree = Node::row()
            .width(20u16)
            .child(Node::text("left"))
            .child(Node::spacer())
            .child(Node::text("right"));
        let root = layout(&tree, 80, 24);
        assert_eq!(root.children[1].width, 11);
        assert_eq!(root.children[2].x, 15);
    }

    #[test]
    fn test_justify_variants() {
        let row = |justify| {
            Node::row()
                .width(20u16)
                .justify(justify)
                .child(Node::row().width(4u16).height(1u16))
                .child(Node::row().width(4u16).height(1u16))
        };
        let xs = |justify| {
            let tree = row(justify);
            let root = layout(&tree, 80, 24);
            root.children.iter().map(|c| c.x).collect::<Vec<_>>()
        };
        assert_eq!(xs(JustifyContent::FlexStart), vec![0, 4]);
        assert_eq!(xs(JustifyContent::FlexEnd), vec![12, 16]);
        assert_eq!(xs(JustifyContent::Center), vec![6, 10]);
        assert_eq!(xs(JustifyContent::SpaceBetween), vec![0, 16]);
        assert_eq!(xs(JustifyContent::SpaceAround), vec![3, 13]);
        assert_eq!(xs(JustifyContent::SpaceEvenly), vec![4, 12]);
    }

    #[test]
    fn test_align_items_and_self() {
        let tree = Node::row()
            .height(5u16)
            .align_items(AlignItems::Center)
            .child(Node::text("a"))
            .child(Node::text("b").align_self(AlignSelf::FlexEnd));
        let root = layout(&tree, 80, 24);
        assert_eq!(root.children[0].y, 2);
        assert_eq!(root.children[1].y, 4);
    }

    #[test]
    fn test_stretch_only_in_columns() {
        let column = Node::column()
            .width(12u16)
            .align_items(AlignItems::Stretch)
            .child(Node::text("a"));
        assert_eq!(layout(&column, 80, 24).children[0].width, 12);

        let row = Node::row()
            .height(4u16)
            .align_items(AlignItems::Stretch)
            .child(Node::text("a"));
        assert_eq!(layout(&row, 80, 24).children[0].height, 1);
    }

    #[test]
    fn test_reverse_reorders_children() {
        let tree = Node::row()
            .direction(FlexDirection::RowReverse)
            .child(Node::text("a"))
            .child(Node::text("bb"));
        let root = layout(&tree, 80, 24);
        assert_eq!(root.children[0].x, 2);
        assert_eq!(root.children[1].x, 0);
    }

    #[test]
    fn test_display_none_is_zero_sized() {
        let tree = Node::row()
            .child(Node::text("a"))
            .child(Node::row().display(Display::None).child(Node::text("hidden")))
            .child(Node::text("b"));
        let root = layout(&tree, 80, 24);
        assert_eq!(root.width, 2);
        assert!(root.children[1].is_empty());
        assert!(root.children[1].children.is_empty());
        assert_eq!(root.children[2].x, 1);
    }

    #[test]
    fn test_percent_resolves_against_available() {
        let tree = Node::row().child(Node::row().width(Dimension::Percent(50.0)).height(1u16));
        let root = layout(&tree, 15, 4);
        assert_eq!(root.children[0].width, 7);
        assert_eq!(root.width, 7);
    }

    #[test]
    fn test_percent_beside_fixed_sibling_in_content_sized_row() {
        let tree = Node::row()
            .child(Node::text("abc"))
            .child(Node::row().width(Dimension::Percent(50.0)).height(1u16));
        let root = layout(&tree, 40, 4);
        assert_eq!(rects(&root), vec![Rect::new(0, 0, 3, 1), Rect::new(3, 0, 20, 1)]);
        assert_eq!(root.width, 23);
    }

    #[test]
    fn test_shrunk_container_lays_out_in_its_own_box() {
        let tree = Node::row()
            .width(10u16)
            .child(Node::row().child(Node::text("abcdef")).child(Node::text("ghij")))
            .child(Node::text("xyz"));
        let root = layout(&tree, 80, 24);
        let inner = &root.children[0];
        assert_eq!(inner.width + root.children[1].width, 10);
        assert!(inner.children.iter().all(|c| c.x + c.width <= inner.x + inner.width));
    }

    #[test]
    fn test_size_clamped_to_available() {
        let tree = Node::row().width(200u16).height(50u16).margin(Edges::axes(1, 2));
        let root = layout(&tree, 15, 4);
        assert_eq!(root.rect(), Rect::new(2, 1, 11, 2));
    }

    #[test]
    fn test_shrink_on_overflow() {
        let tree = Node::row()
            .width(10u16)
            .child(Node::row().width(8u16).height(1u16))
            .child(Node::row().width(8u16).height(1u16));
        let root = layout(&tree, 80, 24);
        let widths: Vec<_> = root.children.iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![5, 5]);
    }

    #[test]
    fn test_margin_offsets_child() {
        let tree = Node::column().child(Node::text("x").margin(Edges::new(1, 0, 0, 2)));
        let root = layout(&tree, 80, 24);
        assert_eq!(root.children[0].rect(), Rect::new(2, 1, 1, 1));
        assert_eq!(root.rect(), Rect::new(0, 0, 3, 2));
    }

    #[test]
    fn test_newline_and_spacer_sizes() {
        let tree = Node::column()
            .width(10u16)
            .child(Node::newlines(2))
            .child(Node::spacer().grow(0.0));
        let root = layout(&tree, 80, 24);
        assert_eq!(rects(&root), vec![Rect::new(0, 0, 0, 2), Rect::new(0, 2, 10, 1)]);
    }
}
