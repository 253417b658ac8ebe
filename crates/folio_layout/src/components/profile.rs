//! Profile card and its contents

use folio_theme::{CardOverlay, LinkKind};

use super::RenderContext;
use crate::element::{button, div, heading, link, span, text, Element, Tag};

pub fn badge(ctx: &RenderContext<'_>) -> Element {
    let styles = &ctx.theme.badge;
    div()
        .key("badge")
        .class(styles.container_class.clone())
        .motion(ctx.animations.badge)
        .child(span().class(styles.dot_class.clone()).attr("aria-hidden", "true"))
        .child(span().text(ctx.content.badge.clone()))
}

pub fn profile_header(ctx: &RenderContext<'_>) -> Element {
    let styles = &ctx.theme.heading;
    div()
        .key("profile-header")
        .class("relative z-10 space-y-3 sm:space-y-4")
        .motion(ctx.animations.heading)
        .child(
            heading(1, ctx.content.name.clone())
                .class(styles.title_class.clone())
                .style("font-family", ctx.theme.fonts.heading.clone()),
        )
        .child(text(ctx.content.bio.clone()).class(styles.bio_class.clone()))
}

pub fn project(ctx: &RenderContext<'_>) -> Element {
    let styles = &ctx.theme.project_link;
    let project = &ctx.content.project;
    text(project.description.clone())
        .key("project")
        .class(styles.text_class.clone())
        .child(
            link(project.url.clone())
                .class(styles.link_class.clone())
                .text(project.display_url.clone()),
        )
}

pub fn links(ctx: &RenderContext<'_>) -> Element {
    let styles = &ctx.theme.links;
    let items = ctx.content.links.iter().enumerate().map(|(i, item)| {
        let trailing = match item.kind {
            LinkKind::Email => {
                let copied = ctx.state.copied_email;
                button()
                    .key("copy-email")
                    .class(styles.copy_button_class.clone())
                    .inline(&styles.icon_style)
                    .gesture(styles.motion.icon)
                    .attr("aria-label", if copied { "Email copied" } else { "Copy email" })
                    .attr("data-copy", item.email.clone().unwrap_or_default())
                    .child(
                        span()
                            .class(if copied {
                                styles.check_icon_class.clone()
                            } else {
                                styles.copy_icon_class.clone()
                            })
                            .attr("aria-hidden", "true"),
                    )
                    .child_opt(copied.then(|| span().class("sr-only").text("Copied!")))
            }
            LinkKind::Link => div()
                .class(styles.arrow_container_class.clone())
                .inline(&styles.icon_style)
                .gesture(styles.motion.icon)
                .child(
                    span()
                        .class(styles.arrow_class.clone())
                        .attr("aria-hidden", "true")
                        .looping(styles.arrow_loop_for(i)),
                ),
        };

        link(item.href.clone())
            .key(format!("link-{i}"))
            .class(styles.container_class.clone())
            .inline(styles.kind_style.get(item.kind))
            .motion(ctx.animations.link(i))
            .gesture(*styles.motion.link.get(item.kind))
            .attr("data-kind", kind_name(item.kind))
            .child(span().class(styles.hover_accent_class.clone()).attr("aria-hidden", "true"))
            .child(
                div()
                    .class("flex items-center justify-between gap-3")
                    .child(
                        div()
                            .class("flex flex-col")
                            .child(span().class(styles.label_class.clone()).text(item.label.clone()))
                            .child(span().class(styles.caption_class.clone()).text(item.caption.clone())),
                    )
                    .child(div().class(styles.icon_container_class.clone()).child(trailing)),
            )
    });

    div()
        .key("links")
        .class("relative z-10 flex flex-col gap-3 sm:gap-4")
        .children(items)
}

fn kind_name(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Link => "link",
        LinkKind::Email => "email",
    }
}

pub fn location(ctx: &RenderContext<'_>) -> Element {
    let styles = &ctx.theme.location;
    div()
        .key("location")
        .class(styles.container_class.clone())
        .child(
            div()
                .class(styles.icon_container_class.clone())
                .child(
                    span()
                        .class(styles.icon_glow_class.clone())
                        .attr("aria-hidden", "true")
                        .looping(styles.glow_loop.clone()),
                )
                .child(
                    span()
                        .class(styles.icon_class.clone())
                        .attr("aria-hidden", "true")
                        .looping(styles.icon_loop.clone()),
                ),
        )
        .child(span().class(styles.text_class.clone()).text(ctx.content.location.label()))
}

/// The interactive card holding the profile
pub fn profile_card(ctx: &RenderContext<'_>) -> Element {
    let card = &ctx.theme.card;
    let transform = ctx.state.card;
    let is_mobile = ctx.is_mobile();

    let mut element = Element::new(Tag::Main)
        .key("profile-card")
        .class(card.container_class.clone())
        .style("transform", transform.to_css_transform())
        .style("transform-style", if is_mobile { "flat" } else { "preserve-3d" })
        .style("will-change", if is_mobile { "auto" } else { "transform" })
        .attr("data-interactive", if is_mobile { "false" } else { "true" });
    if let Some(glass) = &card.glass_effect {
        element = element.attr("data-glass", glass.clone());
    }

    let gradient = &card.gradient;
    let radius = gradient.radius_class.as_deref().unwrap_or_default();
    let wash = div()
        .key("card-gradient")
        .class(format!("absolute inset-0 {radius}").trim_end().to_string())
        .attr("aria-hidden", "true")
        .style("background", gradient.stops.first().cloned().unwrap_or_default())
        .style("animation-duration", format!("{}ms", gradient.duration_ms))
        .attr("data-stops", gradient.stops.len().to_string());

    let interaction = &ctx.theme.interaction;
    let overlays = card.overlays.iter().enumerate().filter_map(|(i, overlay)| match overlay {
        CardOverlay::Sheen(sheen) if interaction.enable_glare_effect => Some(
            div()
                .key(format!("card-overlay-{i}"))
                .class(format!("pointer-events-none absolute inset-0 {}", sheen.radius_class))
                .attr("aria-hidden", "true")
                .style("background", sheen.background(transform.glare))
                .style("opacity", format!("{:.3}", sheen.opacity(transform.pointer_speed, is_mobile)))
                .style("mix-blend-mode", sheen.blend_mode(is_mobile).to_string()),
        ),
        CardOverlay::Sheen(_) => None,
        CardOverlay::Pattern(pattern) => Some(
            div()
                .key(format!("card-overlay-{i}"))
                .class(pattern.class.clone())
                .attr("aria-hidden", "true")
                .inline(&pattern.style),
        ),
    });

    element = element.child(wash).children(overlays.collect::<Vec<_>>());

    element
        .child(badge(ctx))
        .child(profile_header(ctx))
        .child(
            div()
                .key("profile-body")
                .class("relative z-10 space-y-3 sm:space-y-6")
                .motion(ctx.animations.body)
                .child(project(ctx))
                .child(links(ctx)),
        )
        .child(location(ctx))
}
