//! Theme picker and transient tooltips

use folio_core::{Scheduler, TimerGuard, TimerId};
use folio_layout::element::{button, span, Element, Tag};
use folio_theme::{ThemeConfig, ThemeId};

/// A label shown for a fixed time after a tap
///
/// Showing a new value replaces the pending hide timer, so only the latest
/// tap decides when the tooltip disappears.
#[derive(Debug)]
pub struct TransientTooltip<T> {
    scheduler: Scheduler,
    duration_ms: u64,
    shown: Option<(T, TimerGuard)>,
}

impl<T: Copy + PartialEq> TransientTooltip<T> {
    pub fn new(scheduler: Scheduler, duration_ms: u64) -> Self {
        Self {
            scheduler,
            duration_ms,
            shown: None,
        }
    }

    pub fn show(&mut self, value: T) {
        let hide = self
            .scheduler
            .schedule_labeled(self.duration_ms, None, "tooltip-hide");
        self.shown = Some((value, hide));
    }

    pub fn hide(&mut self) {
        self.shown = None;
    }

    pub fn current(&self) -> Option<T> {
        self.shown.as_ref().map(|(value, _)| *value)
    }

    /// Handle a fired timer; `false` when the timer is not this tooltip's
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.shown.as_ref().is_some_and(|(_, hide)| hide.id() == id) {
            self.shown = None;
            return true;
        }
        false
    }
}

/// Fixed control with one button per registered theme
#[derive(Debug)]
pub struct ThemePicker {
    tooltip: TransientTooltip<ThemeId>,
}

impl ThemePicker {
    pub fn new(scheduler: Scheduler, tooltip_ms: u64) -> Self {
        Self {
            tooltip: TransientTooltip::new(scheduler, tooltip_ms),
        }
    }

    /// Register a click; constrained viewports get a tooltip naming the theme
    pub fn click(&mut self, id: ThemeId, is_mobile: bool) {
        if is_mobile {
            self.tooltip.show(id);
        } else {
            self.tooltip.hide();
        }
    }

    pub fn tooltip(&self) -> Option<ThemeId> {
        self.tooltip.current()
    }

    pub fn on_timer(&mut self, id: TimerId) -> bool {
        self.tooltip.on_timer(id)
    }

    /// Styled by the active theme's selector classes
    pub fn render(&self, active: ThemeId, theme: &ThemeConfig) -> Element {
        let page = &theme.page;
        let buttons = ThemeId::all().iter().map(|&id| {
            let selected = id == active;
            button()
                .key(format!("theme-{}", id.id()))
                .class(page.selector_button_class.clone())
                .add_class(if selected {
                    &page.selector_active_class
                } else {
                    &page.selector_idle_class
                })
                .attr("aria-label", format!("Switch to {} theme", id.display_name()))
                .attr("aria-pressed", selected.to_string())
                .attr("data-theme", id.id())
                .text(id.display_name())
                .child_opt((self.tooltip() == Some(id)).then(|| {
                    span()
                        .key("theme-tooltip")
                        .class(page.tooltip_class.clone())
                        .attr("role", "tooltip")
                        .text(id.display_name())
                }))
        });

        Element::new(Tag::Nav)
            .key("theme-picker")
            .class("fixed right-4 top-4 z-50 flex gap-2")
            .attr("aria-label", "Themes")
            .children(buttons)
    }
}

#[cfg(test)]
mod tests {
    use folio_theme::ThemeRegistry;

    use super::*;

    fn settle(picker: &mut ThemePicker, scheduler: &Scheduler, ms: u64) {
        for id in scheduler.advance(ms) {
            picker.on_timer(id);
        }
    }

    #[test]
    fn tooltip_hides_after_duration() {
        let scheduler = Scheduler::new();
        let mut picker = ThemePicker::new(scheduler.clone(), 1_600);
        picker.click(ThemeId::Terminal, true);
        settle(&mut picker, &scheduler, 1_599);
        assert_eq!(picker.tooltip(), Some(ThemeId::Terminal));
        settle(&mut picker, &scheduler, 1);
        assert_eq!(picker.tooltip(), None);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn new_click_replaces_pending_hide() {
        let scheduler = Scheduler::new();
        let mut picker = ThemePicker::new(scheduler.clone(), 1_600);
        picker.click(ThemeId::Terminal, true);
        settle(&mut picker, &scheduler, 1_000);
        picker.click(ThemeId::Synthwave, true);
        assert_eq!(scheduler.pending(), 1);

        settle(&mut picker, &scheduler, 1_000);
        assert_eq!(picker.tooltip(), Some(ThemeId::Synthwave));
        settle(&mut picker, &scheduler, 600);
        assert_eq!(picker.tooltip(), None);
    }

    #[test]
    fn debug_includes_shown_value() {
        let scheduler = Scheduler::new();
        let mut tooltip = TransientTooltip::new(scheduler, 1_600);
        tooltip.show(ThemeId::Terminal);
        let debug = format!("{tooltip:?}");
        assert!(debug.contains("Terminal"));
        assert!(debug.contains("pending: 1"));
    }

    #[test]
    fn desktop_clicks_show_nothing() {
        let scheduler = Scheduler::new();
        let mut picker = ThemePicker::new(scheduler.clone(), 1_600);
        picker.click(ThemeId::Terminal, false);
        assert_eq!(picker.tooltip(), None);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn renders_one_button_per_theme() {
        let scheduler = Scheduler::new();
        let mut picker = ThemePicker::new(scheduler, 1_600);
        picker.click(ThemeId::LiquidGlass, true);
        let theme = ThemeRegistry::global().get(ThemeId::LiquidGlass);
        let tree = picker.render(ThemeId::LiquidGlass, theme);

        assert_eq!(tree.children.len(), ThemeId::all().len());
        let active = tree.find_by_key("theme-liquid_glass").unwrap();
        assert_eq!(active.attr_value("aria-pressed"), Some("true"));
        assert!(active.find_by_key("theme-tooltip").is_some());
    }
}
