//! Page sections below the profile card

use folio_theme::{Section, SectionSupport};

use super::{background, RenderContext};
use crate::content::ArtworkKind;
use crate::element::{div, heading, iframe, img, link, section, span, text, video, Element};
use crate::media::{self, ARTWORK_ROW_HEIGHT};
use crate::timeline;

/// Wrap a section body with its anchor, background, heading and decorations
///
/// Sections the theme does not render in full get the theme's placeholder
/// element instead of `body`; `body` is not evaluated for them.
pub fn section_shell(
    ctx: &RenderContext<'_>,
    target: Section,
    body: impl FnOnce(&RenderContext<'_>) -> Element,
) -> Element {
    let page = &ctx.theme.page;
    let content = match ctx.theme.sections.support(target) {
        SectionSupport::Full => body(ctx),
        SectionSupport::Placeholder { message } => div()
            .key(format!("placeholder-{}", target.id()))
            .class(page.placeholder_class.clone())
            .attr("data-placeholder", target.id())
            .text(message.clone()),
    };

    let mut shell = section(format!("section-{}", target.id()))
        .key(format!("section-{}", target.id()))
        .class(page.section_class.clone())
        .child(background(ctx, target.id()))
        .children(ctx.decorations(target));
    if target != Section::Home {
        shell = shell.child(
            heading(2, target.label())
                .class(page.section_heading_class.clone())
                .style("font-family", ctx.theme.fonts.heading.clone()),
        );
    }
    shell.child(content)
}

pub fn about(ctx: &RenderContext<'_>) -> Element {
    let page = &ctx.theme.page;
    let about = &ctx.content.about;

    let paragraphs = about
        .paragraphs
        .iter()
        .map(|p| text(p.clone()).class(ctx.theme.heading.bio_class.clone()));

    let stacks = about.stacks.iter().enumerate().map(|(g, group)| {
        let items = group.items.iter().enumerate().map(|(i, item)| {
            div()
                .key(format!("stack-{g}-{i}"))
                .class("flex flex-col items-center gap-1")
                .motion(ctx.animations.link(i))
                .child(img(item.logo_url.clone(), item.name.clone()).class("h-10 w-10 object-contain"))
                .child(span().class(ctx.theme.links.caption_class.clone()).text(item.name.clone()))
        });
        div()
            .key(format!("stack-{g}"))
            .class(page.section_card_class.clone())
            .child(heading(3, group.title.clone()).class(ctx.theme.links.label_class.clone()))
            .child(div().class("flex flex-wrap gap-4").children(items))
    });

    div()
        .key("about")
        .class("relative z-10 space-y-6")
        .motion(ctx.animations.body)
        .child(div().class(page.section_card_class.clone()).children(paragraphs))
        .children(stacks)
}

pub fn journey(ctx: &RenderContext<'_>) -> Element {
    let page = &ctx.theme.page;
    let links = &ctx.theme.links;
    let today = ctx.state.today;

    let cards = ctx.content.timeline.iter().enumerate().map(|(i, item)| {
        let expanded = ctx.state.expanded_timeline == Some(i);
        let title = if expanded {
            item.hover_title.as_deref().unwrap_or(&item.title)
        } else {
            &item.title
        };
        let organization = if expanded {
            item.hover_organization.as_deref().unwrap_or(&item.organization)
        } else {
            &item.organization
        };

        let mut card = div()
            .key(format!("timeline-{i}"))
            .class(page.section_card_class.clone())
            .attr("data-expanded", expanded.to_string())
            .motion(ctx.animations.link(i));
        if let Some(logo) = &item.logo_url {
            card = card.child(img(logo.clone(), item.organization.clone()).class("h-10 w-10 object-contain"));
        }
        card = card
            .child(heading(3, title).class(links.label_class.clone()))
            .child(text(organization).class(links.caption_class.clone()))
            .child(
                span()
                    .key(format!("timeline-{i}-dates"))
                    .class(links.caption_class.clone())
                    .text(format!("{} - {}", item.start.label(), item.end.label())),
            )
            .child(
                span()
                    .key(format!("timeline-{i}-duration"))
                    .class(links.caption_class.clone())
                    .text(timeline::duration_text(item.start, item.end, today)),
            );
        let meta: Vec<&str> = [item.employment_type.as_deref(), item.location.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !meta.is_empty() {
            card = card.child(span().class(links.caption_class.clone()).text(meta.join(" · ")));
        }
        if expanded && !item.roles.is_empty() {
            card = card.child(
                div()
                    .key(format!("timeline-{i}-roles"))
                    .class("flex flex-col gap-1")
                    .children(item.roles.iter().map(|role| span().class(links.caption_class.clone()).text(role.clone()))),
            );
        }
        card.child_opt(
            item.description
                .as_ref()
                .map(|d| text(d.clone()).class(ctx.theme.project_link.text_class.clone())),
        )
    });

    let projects = ctx.content.projects.iter().enumerate().map(|(i, project)| {
        div()
            .key(format!("project-{i}"))
            .class(page.section_card_class.clone())
            .motion(ctx.animations.link(i))
            .gesture(links.motion.link.link)
            .child(heading(3, project.name.clone()).class(links.label_class.clone()))
            .child(text(project.description.clone()).class(links.caption_class.clone()))
            .child_opt(project.url.as_ref().map(|url| {
                link(url.clone())
                    .class(ctx.theme.project_link.link_class.clone())
                    .text("Visit")
            }))
    });

    let graph = ctx.content.github_username.as_ref().map(|username| {
        img(
            format!(
                "https://github-readme-activity-graph.vercel.app/graph?username={username}&theme={}&hide_border=true&area=true",
                page.activity_graph_theme
            ),
            format!("{username}'s GitHub activity"),
        )
        .key("github-activity")
        .class(page.section_card_class.clone())
    });

    div()
        .key("journey")
        .class("relative z-10 space-y-8")
        .child(div().key("timeline").class("flex gap-5 overflow-x-auto pb-2").children(cards))
        .child(div().key("projects").class("grid gap-4 md:grid-cols-2 lg:grid-cols-3").children(projects))
        .child_opt(graph)
}

pub fn artworks(ctx: &RenderContext<'_>) -> Element {
    let (first, second) = media::split_rows(&ctx.content.artworks);
    let row = |offset: usize, items: &[crate::content::Artwork]| {
        div()
            .class("flex gap-4")
            .children(items.iter().enumerate().map(|(i, artwork)| artwork_tile(ctx, offset + i, artwork)))
    };

    div()
        .key("artworks")
        .class("relative z-10 flex flex-col gap-4 overflow-x-auto")
        .child(row(0, first).key("artworks-row-0"))
        .child(row(first.len(), second).key("artworks-row-1"))
}

fn artwork_tile(ctx: &RenderContext<'_>, index: usize, artwork: &crate::content::Artwork) -> Element {
    let width = artwork.aspect_ratio.width_for(ARTWORK_ROW_HEIGHT);
    let media = match artwork.kind {
        ArtworkKind::Image => img(artwork.url.clone(), artwork.name.clone()).class("h-full w-full object-cover"),
        ArtworkKind::Video => video(artwork.url.clone()).class("h-full w-full object-cover"),
        ArtworkKind::Youtube => match media::youtube_id(&artwork.url) {
            Some(id) => iframe(media::youtube_embed_url(id), artwork.name.clone()).class("h-full w-full"),
            None => {
                tracing::warn!(url = %artwork.url, "unrecognised video url");
                div()
                    .class(ctx.theme.page.placeholder_class.clone())
                    .attr("role", "alert")
                    .text("Invalid YouTube URL")
            }
        },
    };

    link(artwork.target().to_string())
        .key(format!("artwork-{index}"))
        .class(format!("relative shrink-0 overflow-hidden {}", ctx.theme.page.section_card_class))
        .style("width", format!("{width:.0}px"))
        .style("height", format!("{ARTWORK_ROW_HEIGHT:.0}px"))
        .attr("data-aspect", artwork.aspect_ratio.as_str())
        .motion(ctx.animations.link(index))
        .child(media)
}

pub fn lifestyle(ctx: &RenderContext<'_>) -> Element {
    let items = ctx.content.lifestyle.iter().enumerate().map(|(i, item)| {
        div()
            .key(format!("lifestyle-{}", item.id))
            .class(ctx.theme.page.section_card_class.clone())
            .motion(ctx.animations.link(i))
            .gesture(ctx.theme.links.motion.link.link)
            .child(img(item.url.clone(), item.interest.clone()).class("w-full rounded object-cover"))
            .child(span().class(ctx.theme.links.label_class.clone()).text(item.interest.clone()))
    });

    div()
        .key("lifestyle")
        .class("relative z-10 columns-1 gap-4 sm:columns-2 lg:columns-3")
        .children(items)
}
