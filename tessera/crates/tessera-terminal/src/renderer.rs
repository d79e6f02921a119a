//! Delta rendering of node trees.
//!
//! Every [`DeltaRenderer::render`] call runs one synchronous frame:
//!
//! 1. Query the sink size and reallocate the buffers if it changed.
//! 2. Lay the tree out against the buffer size.
//! 3. Paint it into the back buffer.
//! 4. Swap the buffers, collecting the changed cells.
//! 5. Emit either the changed cells or, when a delta would not pay off,
//!    the whole front buffer from the home position.

use tessera_buffer::{CellBuffer, DoubleBuffer, Patch, SerializeOptions};
use tessera_core::{Size, Style};
use tessera_layout::{layout, Node};

use crate::ansi;
use crate::config::RendererConfig;
use crate::error::RenderResult;
use crate::paint::paint;
use crate::sink::OutputSink;
use crate::stats::{Counters, RenderStats};

/// Size assumed when the sink cannot report one.
pub const FALLBACK_SIZE: Size = Size::new(80, 24);

/// Renders node trees to an [`OutputSink`], emitting only what changed.
///
/// ```
/// use tessera_layout::Node;
/// use tessera_terminal::{DeltaRenderer, MemorySink, RendererConfig};
///
/// let mut renderer = DeltaRenderer::new(MemorySink::with_size(20, 2), RendererConfig::default())?;
/// renderer.render(Node::text("count: 9"))?;
/// renderer.render(Node::text("count: 10"))?;
///
/// let stats = renderer.stats();
/// assert_eq!((stats.full_renders, stats.delta_renders), (1, 1));
/// assert_eq!(stats.last_patch_count, 2);
/// # Ok::<(), tessera_terminal::RenderError>(())
/// ```
pub struct DeltaRenderer<S: OutputSink> {
    sink: S,
    config: RendererConfig,
    buffers: DoubleBuffer,
    /// Size last reported by the sink.
    sink_size: Option<Size>,
    last_tree: Option<Node>,
    counters: Counters,
    out: Vec<u8>,
    rendered_once: bool,
    cursor_hidden: bool,
    cleaned_up: bool,
}

impl<S: OutputSink> DeltaRenderer<S> {
    /// Creates a renderer sized by `sink`, or [`FALLBACK_SIZE`] if the sink
    /// cannot report a size.
    pub fn new(sink: S, config: RendererConfig) -> RenderResult<Self> {
        let size = sink.size().map_or(FALLBACK_SIZE, Size::from);
        Self::with_size(sink, config, size.width, size.height)
    }

    /// Creates a renderer with an explicit grid size. A later change in
    /// the size reported by the sink still triggers a resize.
    pub fn with_size(sink: S, config: RendererConfig, width: u16, height: u16) -> RenderResult<Self> {
        config.validate()?;
        let sink_size = sink.size().map(Size::from);
        tracing::debug!(width, height, ?config, "creating delta renderer");
        Ok(Self {
            sink,
            config,
            buffers: DoubleBuffer::new(width, height),
            sink_size,
            last_tree: None,
            counters: Counters::default(),
            out: Vec::new(),
            rendered_once: false,
            cursor_hidden: false,
            cleaned_up: false,
        })
    }

    /// Renders `tree` as the next frame.
    ///
    /// Only sink I/O can fail. Rendering after [`cleanup`](Self::cleanup)
    /// is a host bug: it asserts in debug builds and is ignored otherwise.
    pub fn render(&mut self, tree: Node) -> RenderResult<()> {
        if !self.check_live("render") {
            return Ok(());
        }
        self.last_tree = Some(tree);
        self.frame()
    }

    /// Repaints the last rendered tree in full, e.g. after something else
    /// wrote to the terminal. Without a previous tree, the next render is
    /// a full repaint.
    pub fn force_full_redraw(&mut self) -> RenderResult<()> {
        if !self.check_live("force_full_redraw") {
            return Ok(());
        }
        self.buffers.invalidate();
        if self.last_tree.is_some() {
            self.frame()?;
        }
        Ok(())
    }

    /// Reallocates the buffers at `width` × `height`. The next frame is a
    /// full repaint.
    pub fn resize(&mut self, width: u16, height: u16) {
        if !self.check_live("resize") {
            return;
        }
        tracing::debug!(width, height, "renderer resized");
        self.buffers.resize(width, height);
    }

    /// Clears the screen and scrollback. The next frame is a full repaint.
    pub fn clear(&mut self) -> RenderResult<()> {
        if !self.check_live("clear") {
            return Ok(());
        }
        self.buffers.invalidate();
        self.sink.write_all(ansi::CLEAR_SCREEN)?;
        self.sink.flush()?;
        Ok(())
    }

    /// Restores the cursor. Call once on exit; later calls do nothing, and
    /// so does dropping the renderer afterwards.
    pub fn cleanup(&mut self) -> RenderResult<()> {
        if self.cleaned_up {
            return Ok(());
        }
        self.cleaned_up = true;
        if self.cursor_hidden {
            self.cursor_hidden = false;
            self.sink.write_all(ansi::SHOW_CURSOR)?;
        }
        self.sink.flush()?;
        tracing::debug!(stats = %self.stats(), "renderer cleaned up");
        Ok(())
    }

    /// Statistics over all frames so far.
    pub fn stats(&self) -> RenderStats {
        RenderStats::new(self.counters, self.buffers.total_cells())
    }

    /// The configuration in use.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Current grid size.
    pub fn size(&self) -> Size {
        self.buffers.size()
    }

    /// The last emitted frame.
    pub fn front(&self) -> &CellBuffer {
        self.buffers.front()
    }

    /// The output sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the output sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns `true` once [`cleanup`](Self::cleanup) has run.
    pub fn is_cleaned_up(&self) -> bool {
        self.cleaned_up
    }

    fn check_live(&self, operation: &'static str) -> bool {
        debug_assert!(!self.cleaned_up, "{operation} called after cleanup");
        if self.cleaned_up {
            tracing::warn!(operation, "ignoring call after cleanup");
        }
        !self.cleaned_up
    }

    fn detect_resize(&mut self) {
        let Some(measured) = self.sink.size().map(Size::from) else {
            return;
        };
        if self.sink_size == Some(measured) {
            return;
        }
        self.sink_size = Some(measured);
        if measured != self.buffers.size() {
            tracing::debug!(
                width = measured.width,
                height = measured.height,
                "terminal resize detected"
            );
            self.buffers.resize(measured.width, measured.height);
        }
    }

    fn frame(&mut self) -> RenderResult<()> {
        self.detect_resize();

        let size = self.buffers.size();
        if let Some(tree) = &self.last_tree {
            let root = layout(tree, size.width, size.height);
            paint(&root, self.buffers.paint_target());
        }

        let full_required =
            !self.rendered_once || !self.config.use_delta || self.buffers.needs_full_redraw();
        let patches = self.buffers.swap();
        let total_cells = self.buffers.total_cells();
        let full = full_required || self.config.exceeds_threshold(patches.len(), total_cells);

        tracing::debug!(
            full,
            patches = patches.len(),
            total_cells,
            "emitting frame"
        );

        self.out.clear();
        if !self.config.show_cursor && !self.cursor_hidden {
            self.out.extend_from_slice(ansi::HIDE_CURSOR);
            self.cursor_hidden = true;
        }
        if full {
            self.out.extend_from_slice(ansi::CURSOR_HOME);
            self.buffers
                .front()
                .serialize_into(SerializeOptions::full_frame(), &mut self.out);
        } else {
            emit_patches(&patches, self.buffers.width(), &mut self.out);
        }

        self.rendered_once = true;
        self.counters.record(full, patches.len());
        if self.config.debug_logging {
            let stats = self.stats();
            tracing::info!(
                total_renders = stats.total_renders,
                delta_renders = stats.delta_renders,
                full_renders = stats.full_renders,
                last_patch_count = stats.last_patch_count,
                update_percentage = stats.update_percentage,
                bytes = self.out.len(),
                "frame rendered"
            );
        }

        if !self.out.is_empty() {
            self.sink.write_all(&self.out)?;
            self.sink.flush()?;
        }
        Ok(())
    }
}

impl<S: OutputSink> Drop for DeltaRenderer<S> {
    fn drop(&mut self) {
        if let Err(err) = self.cleanup() {
            tracing::warn!(%err, "renderer cleanup failed on drop");
        }
    }
}

impl<S: OutputSink> std::fmt::Debug for DeltaRenderer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeltaRenderer")
            .field("config", &self.config)
            .field("size", &self.buffers.size())
            .field("stats", &self.stats())
            .field("cleaned_up", &self.cleaned_up)
            .finish_non_exhaustive()
    }
}

/// Appends patches as cursor moves and styled glyphs.
///
/// A cursor move is skipped when the patch continues where the previous
/// glyph left the cursor. Placeholders are skipped since their wide glyph
/// already covers them. The style is reset at the end.
fn emit_patches(patches: &[Patch], width: u16, out: &mut Vec<u8>) {
    let mut style = Style::DEFAULT;
    let mut cursor: Option<(u16, u16)> = None;

    for patch in patches {
        let cell = &patch.cell;
        if cell.is_placeholder() {
            continue;
        }
        if cursor != Some((patch.x, patch.y)) {
            ansi::move_to(out, patch.x, patch.y);
        }
        let cell_style = cell.style();
        style.transition_to(&cell_style, out);
        style = cell_style;
        out.extend_from_slice(cell.terminal_symbol(patch.x, width).as_bytes());

        let next = patch.x.saturating_add(u16::from(cell.width.max(1)));
        cursor = (next < width).then_some((next, patch.y));
    }

    if !style.is_default() {
        out.extend_from_slice(ansi::RESET_STYLE);
    }
}
