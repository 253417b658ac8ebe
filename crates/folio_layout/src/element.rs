//! Render tree
//!
//! Layout produces a tree of [`Element`]s: a tag, classes, inline styles,
//! attributes, optional text and the motion data a host needs to animate it.
//! The tree is plain data; hosts decide how to paint it.
//!
//! # Example
//!
//! ```rust
//! use folio_layout::element::{div, text};
//!
//! let card = div()
//!     .key("card")
//!     .class("rounded p-4")
//!     .child(text("Hello"));
//!
//! assert_eq!(card.find_by_key("card").map(|e| e.children.len()), Some(1));
//! ```

use std::fmt::Write as _;

use folio_animation::{AnimationVariant, Gesture, LoopAnimation};
use folio_theme::{BackgroundLayer, InlineStyle, LayerKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Element tag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    #[default]
    Div,
    Span,
    P,
    A,
    Img,
    Button,
    H1,
    H2,
    H3,
    Section,
    Main,
    Nav,
    Video,
    Iframe,
    Form,
    Label,
    Input,
    Textarea,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::P => "p",
            Self::A => "a",
            Self::Img => "img",
            Self::Button => "button",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Section => "section",
            Self::Main => "main",
            Self::Nav => "nav",
            Self::Video => "video",
            Self::Iframe => "iframe",
            Self::Form => "form",
            Self::Label => "label",
            Self::Input => "input",
            Self::Textarea => "textarea",
        }
    }
}

/// One node of the render tree
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub class: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub style: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Entrance animation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<AnimationVariant>,
    /// Idle loop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub looping: Option<LoopAnimation>,
    /// Hover and tap poses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gesture: Option<Gesture>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Replace the class list
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Append classes; empty input is ignored
    pub fn add_class(mut self, class: &str) -> Self {
        let class = class.trim();
        if class.is_empty() {
            return self;
        }
        if !self.class.is_empty() {
            self.class.push(' ');
        }
        self.class.push_str(class);
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Copy every declaration of an inline style, in order
    pub fn inline(mut self, style: &InlineStyle) -> Self {
        for (property, value) in style.iter() {
            self.style.insert(property.to_string(), value.to_string());
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn motion(mut self, variant: AnimationVariant) -> Self {
        self.motion = Some(variant);
        self
    }

    pub fn looping(mut self, animation: LoopAnimation) -> Self {
        self.looping = Some(animation);
        self
    }

    pub fn gesture(mut self, gesture: Gesture) -> Self {
        self.gesture = Some(gesture);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn child_opt(mut self, child: Option<Element>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Depth-first search for a keyed element
    pub fn find_by_key(&self, key: &str) -> Option<&Element> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_key(key))
    }

    /// Every element matching `predicate`, in document order
    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(&predicate, &mut found);
        found
    }

    fn collect<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if predicate(self) {
            out.push(self);
        }
        for child in &self.children {
            child.collect(predicate, out);
        }
    }

    /// Visit every element with its depth, parents first
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a>(&'a self, depth: usize, visit: &mut impl FnMut(&'a Element, usize)) {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, visit);
        }
    }

    /// Number of elements in the subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }

    /// Concatenated text of the subtree, space separated
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.walk(&mut |element, _| {
            if let Some(text) = &element.text {
                parts.push(text.as_str());
            }
        });
        parts.join(" ")
    }

    /// Indented outline: tag, key and text per line
    pub fn to_outline(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |element, depth| {
            let _ = write!(out, "{:indent$}{}", "", element.tag.as_str(), indent = depth * 2);
            if let Some(key) = &element.key {
                let _ = write!(out, "#{key}");
            }
            if let Some(text) = &element.text {
                let _ = write!(out, " {text:?}");
            }
            out.push('\n');
        });
        out
    }
}

impl From<&BackgroundLayer> for Element {
    fn from(layer: &BackgroundLayer) -> Self {
        let tag = match layer.kind {
            LayerKind::Video => Tag::Video,
            _ => Tag::Div,
        };
        let mut element = Element::new(tag)
            .class(layer.class.clone())
            .inline(&layer.style)
            .attr("data-layer", layer.kind.name())
            .attr("aria-hidden", "true");
        if let Some(text) = &layer.text {
            element = element.text(text.clone());
        }
        if let Some(src) = &layer.src {
            element = element.attr("src", src.clone());
        }
        if layer.kind == LayerKind::Video {
            element = element
                .attr("autoplay", "")
                .attr("loop", "")
                .attr("muted", "")
                .attr("playsinline", "");
        }
        if let Some(animation) = &layer.animation {
            element = element.looping(animation.clone());
        }
        element
    }
}

// =============================================================================
// Builders
// =============================================================================

pub fn div() -> Element {
    Element::new(Tag::Div)
}

pub fn span() -> Element {
    Element::new(Tag::Span)
}

/// Paragraph holding `content`
pub fn text(content: impl Into<String>) -> Element {
    Element::new(Tag::P).text(content)
}

/// Anchor; external targets open in a new tab
pub fn link(href: impl Into<String>) -> Element {
    let href = href.into();
    let external = href.starts_with("http://") || href.starts_with("https://");
    let element = Element::new(Tag::A).attr("href", href);
    if external {
        element
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    } else {
        element
    }
}

pub fn img(src: impl Into<String>, alt: impl Into<String>) -> Element {
    Element::new(Tag::Img)
        .attr("src", src)
        .attr("alt", alt)
        .attr("loading", "lazy")
}

pub fn button() -> Element {
    Element::new(Tag::Button).attr("type", "button")
}

/// `h1` for level 1, `h2` for level 2, `h3` otherwise
pub fn heading(level: u8, content: impl Into<String>) -> Element {
    let tag = match level {
        1 => Tag::H1,
        2 => Tag::H2,
        _ => Tag::H3,
    };
    Element::new(tag).text(content)
}

pub fn section(id: impl Into<String>) -> Element {
    Element::new(Tag::Section).attr("id", id)
}

pub fn video(src: impl Into<String>) -> Element {
    Element::new(Tag::Video)
        .attr("src", src)
        .attr("autoplay", "")
        .attr("loop", "")
        .attr("muted", "")
        .attr("playsinline", "")
}

pub fn iframe(src: impl Into<String>, title: impl Into<String>) -> Element {
    Element::new(Tag::Iframe)
        .attr("src", src)
        .attr("title", title)
        .attr("allowfullscreen", "")
}

pub fn form() -> Element {
    Element::new(Tag::Form)
}

pub fn label(content: impl Into<String>) -> Element {
    Element::new(Tag::Label).text(content)
}

pub fn input(kind: &str, name: &str) -> Element {
    Element::new(Tag::Input).attr("type", kind).attr("name", name)
}

pub fn textarea(name: &str) -> Element {
    Element::new(Tag::Textarea).attr("name", name)
}
