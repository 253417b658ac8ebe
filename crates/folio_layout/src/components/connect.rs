//! Connect section: social links, contact form and now playing

use super::RenderContext;
use crate::element::{button, div, form, img, input, label, link, span, text, textarea, Element};
use crate::views::{FormStatus, FormView, NowPlayingView, OFFLINE_ICON};

pub fn connect(ctx: &RenderContext<'_>) -> Element {
    div()
        .key("connect")
        .class("relative z-10 grid gap-6 md:grid-cols-2")
        .child(
            div()
                .class("flex flex-col gap-6")
                .child(socials(ctx))
                .child(now_playing(ctx)),
        )
        .child(contact_form(ctx))
}

pub fn socials(ctx: &RenderContext<'_>) -> Element {
    let styles = &ctx.theme.links;
    let items = ctx.content.socials.iter().enumerate().map(|(i, social)| {
        link(social.href.clone())
            .key(format!("social-{i}"))
            .class(styles.icon_container_class.clone())
            .inline(&styles.icon_style)
            .gesture(styles.motion.icon)
            .motion(ctx.animations.link(i))
            .attr("aria-label", social.label.clone())
            .child(img(social.icon_path(), social.label.clone()).class("h-5 w-5"))
    });
    div().key("socials").class("flex flex-wrap gap-3").children(items)
}

pub fn contact_form(ctx: &RenderContext<'_>) -> Element {
    let styles = &ctx.theme.page.form;
    let view = &ctx.state.form;
    let status = view.status;
    let locked = status.is_disabled();

    let mut email = input("email", "email")
        .key("form-email")
        .class(styles.input_class.clone())
        .attr("placeholder", FormView::EMAIL_PLACEHOLDER)
        .attr("value", view.email.clone())
        .attr("required", "");
    let mut message = textarea("message")
        .key("form-message")
        .class(styles.textarea_class.clone())
        .attr("placeholder", FormView::MESSAGE_PLACEHOLDER)
        .attr("required", "")
        .text(view.message.clone());
    let mut submit = button()
        .key("form-submit")
        .class(styles.button_class.clone())
        .add_class(status.class(styles))
        .attr("type", "submit")
        .attr("data-status", status_name(status))
        .text(status.button_label());
    if locked {
        email = email.attr("disabled", "");
        message = message.attr("disabled", "");
        submit = submit.attr("disabled", "");
    }

    form()
        .key("contact-form")
        .class(styles.container_class.clone())
        .child(text(FormView::PROMPT).class(styles.prompt_class.clone()))
        .child(label(FormView::EMAIL_LABEL).class(styles.label_class.clone()).attr("for", "email"))
        .child(email)
        .child(label(FormView::MESSAGE_LABEL).class(styles.label_class.clone()).attr("for", "message"))
        .child(message)
        .child(submit)
        .child_opt(view.validation_error.as_ref().map(|error| {
            text(error.clone())
                .key("form-error")
                .class(styles.error_class.clone())
                .attr("role", "alert")
        }))
}

fn status_name(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Idle => "idle",
        FormStatus::Sending => "sending",
        FormStatus::Sent => "sent",
        FormStatus::Failed => "failed",
    }
}

pub fn now_playing(ctx: &RenderContext<'_>) -> Element {
    let styles = &ctx.theme.page.now_playing;
    let root = div().key("now-playing").class(styles.container_class.clone());

    match &ctx.state.now_playing {
        NowPlayingView::Loading => root.attr("aria-busy", "true").attr("data-state", "loading").child(
            div()
                .class(styles.artwork_class.clone())
                .attr("aria-hidden", "true"),
        ),
        NowPlayingView::Offline => root
            .attr("data-state", "offline")
            .child(img(OFFLINE_ICON, "Offline").class(styles.artwork_class.clone()))
            .child(
                div()
                    .class(styles.offline_class.clone())
                    .child(span().class(styles.title_class.clone()).text(NowPlayingView::OFFLINE_TITLE))
                    .child(span().class(styles.artist_class.clone()).text(NowPlayingView::OFFLINE_CAPTION)),
            ),
        NowPlayingView::Track(track) => root.attr("data-state", "track").child(
            link(track.song_url.clone())
                .class("flex items-center gap-3")
                .child(img(track.album_image_url.clone(), track.album.clone()).class(styles.artwork_class.clone()))
                .child(
                    div()
                        .class("flex min-w-0 flex-1 flex-col gap-1")
                        .child(span().key("track-name").class(styles.title_class.clone()).text(track.name.clone()))
                        .child(span().key("track-artist").class(styles.artist_class.clone()).text(track.artist.clone()))
                        .child(
                            div().class(styles.progress_track_class.clone()).child(
                                div()
                                    .key("track-progress")
                                    .class(styles.progress_bar_class.clone())
                                    .style("width", format!("{:.1}%", track.progress_percent())),
                            ),
                        ),
                )
                .child(
                    img(track.status_icon(), if track.is_playing { "Playing" } else { "Paused" })
                        .key("track-status")
                        .class("h-4 w-4"),
                ),
        ),
    }
}
