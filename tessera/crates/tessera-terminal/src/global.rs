//! A process-wide default renderer over standard output.
//!
//! Hosts that render from one place can skip owning a [`DeltaRenderer`]:
//! the default instance is created on first use and torn down with
//! [`reset_default`].

use parking_lot::{const_mutex, Mutex};

use crate::config::RendererConfig;
use crate::error::RenderResult;
use crate::renderer::DeltaRenderer;
use crate::sink::TerminalSink;

/// The renderer type behind the default instance.
pub type DefaultRenderer = DeltaRenderer<TerminalSink>;

static DEFAULT: Mutex<Option<DefaultRenderer>> = const_mutex(None);

/// Runs `f` with the default renderer, creating it with the default
/// configuration if needed.
///
/// ```no_run
/// use tessera_layout::Node;
/// use tessera_terminal::global;
///
/// global::with_default(|renderer| renderer.render(Node::text("hello")))??;
/// global::reset_default()?;
/// # Ok::<(), tessera_terminal::RenderError>(())
/// ```
pub fn with_default<R>(f: impl FnOnce(&mut DefaultRenderer) -> R) -> RenderResult<R> {
    let mut slot = DEFAULT.lock();
    let renderer = match slot.take() {
        Some(renderer) => renderer,
        None => DeltaRenderer::new(TerminalSink::stdout(), RendererConfig::default())?,
    };
    Ok(f(slot.insert(renderer)))
}

/// Returns `true` if the default renderer has been created.
pub fn is_initialized() -> bool {
    DEFAULT.lock().is_some()
}

/// Cleans up and drops the default renderer. The next
/// [`with_default`] call creates a fresh one.
pub fn reset_default() -> RenderResult<()> {
    let renderer = DEFAULT.lock().take();
    if let Some(mut renderer) = renderer {
        renderer.cleanup()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_without_instance() {
        reset_default().unwrap();
        assert!(!is_initialized());
    }
}
