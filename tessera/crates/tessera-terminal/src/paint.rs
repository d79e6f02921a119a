//! Painting a laid-out tree into a cell buffer.
//!
//! Boxes fill their background and draw their border, text is fitted to its
//! rect with the node's wrap mode and clipped to it. A background color set
//! on a box is inherited by descendant text that sets none.

use tessera_buffer::CellBuffer;
use tessera_core::{Color, Rect, Style};
use tessera_layout::{BorderStyle, LayoutNode, Node, Props};
use tessera_text::{fit_lines, styled_lines, StyledGrapheme};

/// Paints `root` and its descendants into `buffer`.
pub fn paint(root: &LayoutNode<'_>, buffer: &mut CellBuffer) {
    paint_node(root, buffer, Color::Default);
}

fn paint_node(node: &LayoutNode<'_>, buffer: &mut CellBuffer, inherited_bg: Color) {
    if node.node.is_hidden() || node.is_empty() {
        return;
    }
    let rect = node.rect();

    match node.node {
        Node::Box { props, .. } => {
            let bg = resolve_bg(props, inherited_bg);
            if !props.background_color.is_default() {
                buffer.fill(rect.x, rect.y, rect.width, rect.height, " ", Style::new().bg(bg));
            }
            if let Some(border) = props.border {
                let style = Style::new().fg(props.border_color).bg(bg);
                draw_border(buffer, rect, border, style);
            }
            paint_children(node, buffer, bg);
        }
        Node::Fragment { .. } => paint_children(node, buffer, inherited_bg),
        Node::Text { props, content } => paint_text(buffer, rect, props, content, inherited_bg),
        Node::Spacer { .. } | Node::Newline { .. } => {}
    }
}

fn paint_children(node: &LayoutNode<'_>, buffer: &mut CellBuffer, bg: Color) {
    for child in &node.children {
        paint_node(child, buffer, bg);
    }
}

fn resolve_bg(props: &Props, inherited: Color) -> Color {
    if props.background_color.is_default() {
        inherited
    } else {
        props.background_color
    }
}

fn paint_text(buffer: &mut CellBuffer, rect: Rect, props: &Props, content: &str, inherited_bg: Color) {
    let mut base = props.text_style();
    base.bg = resolve_bg(props, inherited_bg);

    let lines = fit_lines(styled_lines(content, base), usize::from(rect.width), props.wrap);
    for (y, line) in (rect.y..rect.bottom()).zip(&lines) {
        let visible = clip(line, usize::from(rect.width));
        buffer.write_styled(rect.x, y, visible);
    }
}

/// The longest prefix of `line` that fits in `width` columns.
fn clip<'l, 'a>(line: &'l [StyledGrapheme<'a>], width: usize) -> &'l [StyledGrapheme<'a>] {
    let mut used = 0;
    let end = line
        .iter()
        .take_while(|g| {
            used += usize::from(g.width);
            used <= width
        })
        .count();
    &line[..end]
}

fn draw_border(buffer: &mut CellBuffer, rect: Rect, border: BorderStyle, style: Style) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let glyphs = border.glyphs();
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

    buffer.fill(left + 1, top, rect.width - 2, 1, glyphs.horizontal, style);
    buffer.fill(left + 1, bottom, rect.width - 2, 1, glyphs.horizontal, style);
    buffer.fill(left, top + 1, 1, rect.height - 2, glyphs.vertical, style);
    buffer.fill(right, top + 1, 1, rect.height - 2, glyphs.vertical, style);

    buffer.write(left, top, glyphs.top_left, style);
    buffer.write(right, top, glyphs.top_right, style);
    buffer.write(left, bottom, glyphs.bottom_left, style);
    buffer.write(right, bottom, glyphs.bottom_right, style);
}
