//! Integration tests for the tessera-layout crate.
//!
//! Exercises whole trees: flex distribution, justification, fragments and
//! nested containers with absolute coordinates.

use tessera_core::Rect;
use tessera_layout::{
    layout, AlignItems, BorderStyle, Dimension, Display, FlexDirection, JustifyContent, LayoutNode,
    Node,
};
use tessera_text::{Truncation, WrapMode};

fn child_rects(node: &LayoutNode<'_>) -> Vec<Rect> {
    node.children.iter().map(LayoutNode::rect).collect()
}

// ============================================================================
// FLEX DISTRIBUTION
// ============================================================================

mod flex {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grow_one_one_two_in_forty() {
        let tree = Node::row()
            .width(40u16)
            .child(Node::row().grow(1.0))
            .child(Node::row().grow(1.0))
            .child(Node::row().grow(2.0));
        let root = layout(&tree, 40, 10);

        let spans: Vec<_> = root.children.iter().map(|c| (c.x, c.width)).collect();
        assert_eq!(spans, vec![(0, 10), (10, 10), (20, 20)]);
    }

    #[test]
    fn test_grow_shares_space_left_by_fixed_children() {
        let tree = Node::row()
            .width(30u16)
            .gap(1)
            .child(Node::text("label"))
            .child(Node::row().grow(1.0))
            .child(Node::text("end"));
        let root = layout(&tree, 80, 24);
        assert_eq!(
            child_rects(&root),
            vec![
                Rect::new(0, 0, 5, 1),
                Rect::new(6, 0, 20, 0),
                Rect::new(27, 0, 3, 1),
            ]
        );
    }

    #[test]
    fn test_column_grow_fills_height() {
        let tree = Node::column()
            .height(Dimension::Percent(100.0))
            .child(Node::text("header"))
            .child(Node::spacer())
            .child(Node::text("footer"));
        let root = layout(&tree, 20, 10);
        assert_eq!(root.height, 10);
        assert_eq!(root.children[1].height, 8);
        assert_eq!(root.children[2].y, 9);
    }
}

// ============================================================================
// JUSTIFY AND ALIGN
// ============================================================================

mod justify_align {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_space_between_two_fixed_children() {
        let tree = Node::row()
            .width(20u16)
            .justify(JustifyContent::SpaceBetween)
            .child(Node::row().width(5u16).height(1u16))
            .child(Node::row().width(5u16).height(1u16));
        let root = layout(&tree, 20, 5);

        assert_eq!(root.children[0].x, 0);
        assert_eq!(root.children[1].x, 15);
    }

    #[test]
    fn test_justify_ignored_with_flexible_child() {
        let tree = Node::row()
            .width(20u16)
            .justify(JustifyContent::FlexEnd)
            .child(Node::text("a"))
            .child(Node::spacer());
        let root = layout(&tree, 20, 5);
        assert_eq!(root.children[0].x, 0);
        assert_eq!(root.children[1].width, 19);
    }

    #[test]
    fn test_centered_column() {
        let tree = Node::column()
            .width(11u16)
            .align_items(AlignItems::Center)
            .child(Node::text("abc"))
            .child(Node::text("a"));
        let root = layout(&tree, 80, 24);
        assert_eq!(child_rects(&root), vec![Rect::new(4, 0, 3, 1), Rect::new(5, 1, 1, 1)]);
    }

    #[test]
    fn test_column_reverse() {
        let tree = Node::column()
            .direction(FlexDirection::ColumnReverse)
            .child(Node::text("first"))
            .child(Node::text("second"));
        let root = layout(&tree, 80, 24);
        assert_eq!(root.children[0].y, 1);
        assert_eq!(root.children[1].y, 0);
    }
}

// ============================================================================
// TREE SHAPE
// ============================================================================

mod tree_shape {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout_tree_mirrors_source() {
        let tree = Node::column()
            .child(Node::row().child(Node::text("a")).child(Node::text("b")))
            .child(Node::text("c"));
        let root = layout(&tree, 80, 24);

        assert!(std::ptr::eq(root.node, &tree));
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].children.len(), 2);
        assert!(std::ptr::eq(root.children[1].node, &tree.children()[1]));
    }

    #[test]
    fn test_nested_coordinates_are_absolute() {
        let tree = Node::column()
            .padding_all(1)
            .child(
                Node::row()
                    .border(BorderStyle::Single)
                    .child(Node::text("inner")),
            );
        let root = layout(&tree, 80, 24);
        let boxed = &root.children[0];
        assert_eq!(boxed.rect(), Rect::new(1, 1, 7, 3));
        assert_eq!(boxed.children[0].rect(), Rect::new(2, 2, 5, 1));
    }

    #[test]
    fn test_fragment_children_join_parent_line() {
        let tree = Node::row()
            .gap(1)
            .child(Node::text("a"))
            .child(Node::fragment([Node::text("bb"), Node::text("ccc")]))
            .child(Node::text("d"));
        let root = layout(&tree, 80, 24);

        let fragment = &root.children[1];
        assert_eq!(child_rects(fragment), vec![Rect::new(2, 0, 2, 1), Rect::new(5, 0, 3, 1)]);
        assert_eq!(fragment.rect(), Rect::new(2, 0, 6, 1));
        assert_eq!(root.children[2].x, 9);
    }

    #[test]
    fn test_hidden_subtree_has_no_children() {
        let tree = Node::column()
            .child(
                Node::column()
                    .display(Display::None)
                    .child(Node::text("never laid out")),
            )
            .child(Node::text("shown"));
        let root = layout(&tree, 80, 24);

        let mut count = 0;
        root.walk(&mut |_| count += 1);
        assert_eq!(count, 3);
        assert_eq!(root.children[1].y, 0);
    }

    #[test]
    fn test_zero_sized_terminal() {
        let tree = Node::column().border(BorderStyle::Round).child(Node::text("x"));
        let root = layout(&tree, 0, 0);
        assert!(root.is_empty());
        assert!(root.children[0].is_empty());
    }
}

// ============================================================================
// TEXT SIZING
// ============================================================================

mod text {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncated_text_keeps_one_line() {
        let tree = Node::row()
            .width(5u16)
            .child(Node::text("abcdefghij").wrap(WrapMode::Truncate(Truncation::End)));
        let root = layout(&tree, 80, 24);
        assert_eq!(root.children[0].rect(), Rect::new(0, 0, 5, 1));
    }

    #[test]
    fn test_wrapped_text_grows_down() {
        let tree = Node::column()
            .width(5u16)
            .child(Node::text("aaa bbb ccc"));
        let root = layout(&tree, 80, 24);
        assert_eq!(root.children[0].rect(), Rect::new(0, 0, 5, 3));
        assert_eq!(root.height, 3);
    }

    #[test]
    fn test_escape_sequences_take_no_width() {
        let tree = Node::text("\x1b[1mbold\x1b[0m");
        assert_eq!(layout(&tree, 80, 24).width, 4);
    }
}
