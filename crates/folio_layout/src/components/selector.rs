use folio_theme::Section;

use super::RenderContext;
use crate::element::{button, span, Element, Tag};

/// One button per section; the active one carries the indicator ring
///
/// The tooltip naming a section only shows on constrained viewports, where
/// the buttons are too small for their labels.
pub fn section_selector(ctx: &RenderContext<'_>) -> Element {
    let page = &ctx.theme.page;
    let buttons = Section::all().iter().map(|&target| {
        let active = ctx.state.active_section == target;
        let state_class = if active {
            &page.selector_active_class
        } else {
            &page.selector_idle_class
        };

        button()
            .key(format!("select-{}", target.id()))
            .class(page.selector_button_class.clone())
            .add_class(state_class)
            .attr("aria-label", format!("Navigate to {} section", target.label()))
            .attr("aria-current", active.to_string())
            .attr("data-target", format!("section-{}", target.id()))
            .text(target.label())
            .child_opt(active.then(|| {
                span()
                    .class(page.selector_indicator_class.clone())
                    .attr("aria-hidden", "true")
            }))
            .child_opt(
                (ctx.is_mobile() && ctx.state.tooltip == Some(target)).then(|| {
                    span()
                        .key("selector-tooltip")
                        .class(page.tooltip_class.clone())
                        .attr("role", "tooltip")
                        .text(target.label())
                }),
            )
    });

    Element::new(Tag::Nav)
        .key("section-selector")
        .class(page.selector_container_class.clone())
        .attr("aria-label", "Sections")
        .children(buttons)
}
