//! Thin element-writer layer over quick-xml for assembling SVG documents.

use std::fmt::Display;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use heatmap_common::{HeatmapError, HeatmapResult};

/// An element under construction: tag name plus owned attributes.
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: Vec::new(),
        }
    }

    pub fn attr(mut self, key: &str, value: impl Display) -> Self {
        self.attrs.push((key.to_string(), value.to_string()));
        self
    }
}

/// Event writer producing an indented SVG document.
pub struct SvgWriter {
    inner: Writer<Vec<u8>>,
}

impl SvgWriter {
    pub fn new() -> Self {
        Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    pub fn start(&mut self, element: Element) -> HeatmapResult<()> {
        let mut start = BytesStart::new(element.name.as_str());
        for (key, value) in &element.attrs {
            start.push_attribute((key.as_str(), value.as_str()));
        }
        self.inner
            .write_event(Event::Start(start))
            .map_err(|e| HeatmapError::Svg(e.to_string()))
    }

    pub fn end(&mut self, name: &str) -> HeatmapResult<()> {
        self.inner
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(|e| HeatmapError::Svg(e.to_string()))
    }

    /// Write a self-closing element.
    pub fn empty(&mut self, element: Element) -> HeatmapResult<()> {
        let mut start = BytesStart::new(element.name.as_str());
        for (key, value) in &element.attrs {
            start.push_attribute((key.as_str(), value.as_str()));
        }
        self.inner
            .write_event(Event::Empty(start))
            .map_err(|e| HeatmapError::Svg(e.to_string()))
    }

    /// Write `<tag ...>content</tag>` with escaped text content.
    pub fn text_element(&mut self, element: Element, content: &str) -> HeatmapResult<()> {
        let name = element.name.clone();
        self.start(element)?;
        self.inner
            .write_event(Event::Text(BytesText::new(content)))
            .map_err(|e| HeatmapError::Svg(e.to_string()))?;
        self.end(&name)
    }

    pub fn finish(self) -> HeatmapResult<String> {
        String::from_utf8(self.inner.into_inner())
            .map_err(|e| HeatmapError::Svg(format!("invalid UTF-8 in document: {}", e)))
    }
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}
