//! Small query layer over a parsed `tl` document.
//!
//! Section parsers only need to find descendants by tag name plus an optional
//! class or id, and to read text, ids and classes from what they find.

use crate::errors::ExtractError;
use tl::{HTMLTag, Node, NodeHandle, Parser, VDom};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    tag: &'static str,
    class: Option<&'static str>,
    id: Option<&'static str>,
}

impl Selector {
    pub fn tag(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            id: None,
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    fn matches(&self, tag: &HTMLTag<'_>) -> bool {
        if !tag.name().as_utf8_str().eq_ignore_ascii_case(self.tag) {
            return false;
        }
        if let Some(class) = self.class {
            if !class_list(tag).iter().any(|member| member == class) {
                return false;
            }
        }
        if let Some(id) = self.id {
            if tag_id(tag).as_deref() != Some(id) {
                return false;
            }
        }
        true
    }
}

pub struct Document<'buf> {
    dom: VDom<'buf>,
}

impl<'buf> Document<'buf> {
    pub fn parse(html: &'buf str) -> Result<Self, ExtractError> {
        let dom = tl::parse(html, tl::ParserOptions::default())
            .map_err(|e| ExtractError::Html(e.to_string()))?;
        Ok(Self { dom })
    }

    /// All elements matching `selector`, in document order.
    pub fn find_all(&self, selector: Selector) -> Vec<Element<'_, 'buf>> {
        let parser = self.dom.parser();
        let mut found = Vec::new();
        for handle in self.dom.children() {
            collect_matches(*handle, parser, selector, &mut found);
        }
        found
    }

    pub fn find_first(&self, selector: Selector) -> Option<Element<'_, 'buf>> {
        self.find_all(selector).into_iter().next()
    }
}

#[derive(Clone, Copy)]
pub struct Element<'a, 'buf> {
    tag: &'a HTMLTag<'buf>,
    parser: &'a Parser<'buf>,
}

impl<'a, 'buf> Element<'a, 'buf> {
    pub fn name(&self) -> String {
        self.tag.name().as_utf8_str().to_ascii_lowercase()
    }

    /// Descendants matching `selector`, in document order. The element itself
    /// is never included.
    pub fn find_all(&self, selector: Selector) -> Vec<Element<'a, 'buf>> {
        let mut found = Vec::new();
        for handle in self.tag.children().top().iter() {
            collect_matches(*handle, self.parser, selector, &mut found);
        }
        found
    }

    pub fn find_first(&self, selector: Selector) -> Option<Element<'a, 'buf>> {
        self.find_all(selector).into_iter().next()
    }

    /// Text content with entities decoded and `<br>` rendered as a newline.
    pub fn text(&self) -> String {
        let mut out = String::new();
        push_text(self.tag, self.parser, &mut out);
        out
    }

    pub fn trimmed_text(&self) -> String {
        self.text().trim().to_string()
    }

    pub fn id(&self) -> Option<String> {
        tag_id(self.tag)
    }

    pub fn classes(&self) -> Vec<String> {
        class_list(self.tag)
    }

    /// The row "style": first entry of the class attribute.
    pub fn first_class(&self) -> Option<String> {
        class_list(self.tag).into_iter().next()
    }

    pub fn has_class(&self, class: &str) -> bool {
        class_list(self.tag).iter().any(|member| member == class)
    }

    /// Whether both handles point at the same node of the same document.
    pub fn same_node(&self, other: &Element<'_, '_>) -> bool {
        std::ptr::eq(
            self.tag as *const HTMLTag<'_> as *const u8,
            other.tag as *const HTMLTag<'_> as *const u8,
        )
    }
}

impl std::fmt::Debug for Element<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name())
            .field("classes", &self.classes())
            .field("id", &self.id())
            .finish()
    }
}

fn collect_matches<'a, 'buf>(
    handle: NodeHandle,
    parser: &'a Parser<'buf>,
    selector: Selector,
    found: &mut Vec<Element<'a, 'buf>>,
) {
    let Some(tag) = handle.get(parser).and_then(Node::as_tag) else {
        return;
    };
    if selector.matches(tag) {
        found.push(Element { tag, parser });
    }
    for child in tag.children().top().iter() {
        collect_matches(*child, parser, selector, found);
    }
}

fn push_text(tag: &HTMLTag<'_>, parser: &Parser<'_>, out: &mut String) {
    for child in tag.children().top().iter() {
        match child.get(parser) {
            Some(Node::Raw(raw)) => {
                let raw_text = raw.as_utf8_str();
                out.push_str(&html_escape::decode_html_entities(raw_text.as_ref()));
            }
            Some(Node::Tag(child_tag)) => {
                if child_tag.name().as_utf8_str().eq_ignore_ascii_case("br") {
                    out.push('\n');
                }
                push_text(child_tag, parser, out);
            }
            _ => {}
        }
    }
}

fn class_list(tag: &HTMLTag<'_>) -> Vec<String> {
    tag.attributes()
        .class()
        .map(|class| {
            class
                .as_utf8_str()
                .split_whitespace()
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn tag_id(tag: &HTMLTag<'_>) -> Option<String> {
    tag.attributes()
        .id()
        .map(|id| id.as_utf8_str().trim().to_string())
}
