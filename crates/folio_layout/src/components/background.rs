use folio_theme::BackgroundContext;

use super::RenderContext;
use crate::element::{div, Element};

/// The theme's decorative layers behind one section
pub fn background(ctx: &RenderContext<'_>, scope: &str) -> Element {
    let mut bg = if ctx.is_mobile() {
        BackgroundContext::mobile()
    } else {
        BackgroundContext::desktop()
    };
    if let Some(progress) = ctx.state.scroll_progress {
        bg = bg.with_scroll(progress);
    }

    let renderer = ctx.theme.background.as_ref();
    let layers = renderer.render(&bg);
    if layers.is_empty() {
        tracing::warn!(renderer = renderer.name(), scope, "background produced no layers");
    }

    div()
        .key(format!("background-{scope}"))
        .class("pointer-events-none absolute inset-0 -z-10 overflow-hidden")
        .attr("aria-hidden", "true")
        .attr("data-renderer", renderer.name())
        .children(layers.iter().map(Into::into))
}
