//! SVG assembly: a typed element tree serialized to markup in one pass.
//!
//! The renderer builds a throwaway [`Document`] of drawing primitives in a
//! fixed z-order, then serializes it. No host DOM or XML framework is
//! involved; class names are stable so the embedding caller supplies CSS.
//!
//! Coordinates serialize through `f64`'s shortest-roundtrip `Display`, so a
//! non-finite coordinate comes out as `NaN` and is dropped silently by SVG
//! renderers rather than crashing the render.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// A node in the element tree.
#[derive(Debug, Clone)]
pub enum Element {
    /// Container group (`<g>`).
    Group {
        /// CSS class attribute.
        class: Option<String>,
        /// Transform attribute, e.g. `translate(40, 120)`.
        transform: Option<String>,
        /// Child elements in document order.
        children: Vec<Element>,
    },
    /// Line segment (`<line>`).
    Line {
        /// Start x.
        x1: f64,
        /// Start y.
        y1: f64,
        /// End x.
        x2: f64,
        /// End y.
        y2: f64,
        /// CSS class attribute.
        class: Option<String>,
    },
    /// Circle (`<circle>`).
    Circle {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Radius.
        r: f64,
        /// CSS class attribute.
        class: Option<String>,
        /// DOM identifier for downstream hit-testing.
        id: Option<String>,
        /// Inline style declarations.
        style: Option<String>,
    },
    /// Text (`<text>`), possibly split into `<tspan>` lines.
    Text(Text),
    /// Closed path (`<path>`).
    Path {
        /// Path data.
        d: String,
        /// CSS class attribute.
        class: Option<String>,
        /// Originating row identifier, emitted as `data-id`.
        data_id: Option<String>,
    },
}

/// A text element with optional positioning offsets.
#[derive(Debug, Clone, Default)]
pub struct Text {
    /// Absolute x position.
    pub x: Option<f64>,
    /// Absolute y position.
    pub y: Option<f64>,
    /// Horizontal offset from the current position.
    pub dx: Option<f64>,
    /// Vertical offset from the current position.
    pub dy: Option<f64>,
    /// CSS class attribute.
    pub class: Option<String>,
    /// Font size in pixels, emitted as an inline style.
    pub font_size: Option<f64>,
    /// Transform attribute, e.g. `rotate(270 12 200)`.
    pub transform: Option<String>,
    /// Text anchor alignment.
    pub anchor: Option<TextAnchor>,
    /// The text content.
    pub content: TextContent,
}

/// Content of a text element.
#[derive(Debug, Clone)]
pub enum TextContent {
    /// A single run of text.
    Plain(String),
    /// One `<tspan>` per line (multi-line titles).
    Spans(Vec<Span>),
}

impl Default for TextContent {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

/// One line of a multi-line text element.
#[derive(Debug, Clone)]
pub struct Span {
    /// Absolute x position (re-anchors each line).
    pub x: Option<f64>,
    /// Vertical offset from the previous line.
    pub dy: f64,
    /// Line text.
    pub text: String,
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy)]
pub enum TextAnchor {
    /// Align text start at position.
    Start,
    /// Center text at position.
    Middle,
    /// Align text end at position.
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// The root `<svg>` document.
#[derive(Debug, Clone)]
pub struct Document {
    width: u32,
    height: u32,
    class: String,
    children: Vec<Element>,
}

impl Document {
    /// Create an empty document of the given pixel dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32, class: impl Into<String>) -> Self {
        Self {
            width,
            height,
            class: class.into(),
            children: Vec::new(),
        }
    }

    /// Append a top-level element.
    pub fn push(&mut self, element: Element) {
        self.children.push(element);
    }

    /// Serialize the tree to standalone SVG markup.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="{}" width="{}" height="{}">"#,
            escape_attr(&self.class),
            self.width,
            self.height
        );
        svg.push('\n');

        for child in &self.children {
            write_element(&mut svg, child, 1);
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write the rendered markup to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn attr_str(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(v) = value {
        let _ = write!(out, r#" {name}="{}""#, escape_attr(v));
    }
}

fn attr_num(out: &mut String, name: &str, value: Option<f64>) {
    if let Some(v) = value {
        let _ = write!(out, r#" {name}="{v}""#);
    }
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    indent(out, depth);
    match element {
        Element::Group {
            class,
            transform,
            children,
        } => {
            out.push_str("<g");
            attr_str(out, "class", class.as_deref());
            attr_str(out, "transform", transform.as_deref());
            out.push_str(">\n");
            for child in children {
                write_element(out, child, depth + 1);
            }
            indent(out, depth);
            out.push_str("</g>\n");
        }
        Element::Line {
            x1,
            y1,
            x2,
            y2,
            class,
        } => {
            let _ = write!(out, r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}""#);
            attr_str(out, "class", class.as_deref());
            out.push_str("/>\n");
        }
        Element::Circle {
            cx,
            cy,
            r,
            class,
            id,
            style,
        } => {
            let _ = write!(out, r#"<circle cx="{cx}" cy="{cy}" r="{r}""#);
            attr_str(out, "class", class.as_deref());
            attr_str(out, "id", id.as_deref());
            attr_str(out, "style", style.as_deref());
            out.push_str("/>\n");
        }
        Element::Text(text) => write_text(out, text, depth),
        Element::Path { d, class, data_id } => {
            let _ = write!(out, r#"<path d="{}""#, escape_attr(d));
            attr_str(out, "class", class.as_deref());
            attr_str(out, "data-id", data_id.as_deref());
            out.push_str("/>\n");
        }
    }
}

fn write_text(out: &mut String, text: &Text, depth: usize) {
    out.push_str("<text");
    attr_num(out, "x", text.x);
    attr_num(out, "y", text.y);
    attr_num(out, "dx", text.dx);
    attr_num(out, "dy", text.dy);
    attr_str(out, "class", text.class.as_deref());
    attr_str(out, "transform", text.transform.as_deref());
    attr_str(
        out,
        "text-anchor",
        text.anchor.map(TextAnchor::as_str),
    );
    if let Some(size) = text.font_size {
        let _ = write!(out, r#" style="font-size: {size}px;""#);
    }
    out.push('>');

    match &text.content {
        TextContent::Plain(content) => out.push_str(&escape_text(content)),
        TextContent::Spans(spans) => {
            out.push('\n');
            for span in spans {
                indent(out, depth + 1);
                out.push_str("<tspan");
                attr_num(out, "x", span.x);
                attr_num(out, "dy", Some(span.dy));
                let _ = write!(out, ">{}</tspan>", escape_text(&span.text));
                out.push('\n');
            }
            indent(out, depth);
        }
    }
    out.push_str("</text>\n");
}

/// Escape XML special characters in text content.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape XML special characters in attribute values.
fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_root() {
        let svg = Document::new(400, 400, "scpl-plot").render();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"class="scpl-plot""#));
        assert!(svg.contains(r#"width="400""#));
        assert!(svg.contains(r#"height="400""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_line_element() {
        let mut doc = Document::new(100, 100, "scpl-plot");
        doc.push(Element::Line {
            x1: 32.0,
            y1: 0.0,
            x2: 368.0,
            y2: 0.0,
            class: Some("scpl-gridline".to_string()),
        });
        let svg = doc.render();
        assert!(svg.contains(r#"<line x1="32" y1="0" x2="368" y2="0" class="scpl-gridline"/>"#));
    }

    #[test]
    fn test_nested_group_with_transform() {
        let mut doc = Document::new(100, 100, "scpl-plot");
        doc.push(Element::Group {
            class: Some("scpl-axes".to_string()),
            transform: None,
            children: vec![Element::Group {
                class: None,
                transform: Some("translate(0, 50)".to_string()),
                children: vec![],
            }],
        });
        let svg = doc.render();
        assert!(svg.contains(r#"<g class="scpl-axes">"#));
        assert!(svg.contains(r#"<g transform="translate(0, 50)">"#));
    }

    #[test]
    fn test_circle_with_id_and_style() {
        let mut doc = Document::new(100, 100, "scpl-plot");
        doc.push(Element::Circle {
            cx: 0.0,
            cy: 0.0,
            r: 6.0,
            class: Some("scpl-circle".to_string()),
            id: Some("denmark".to_string()),
            style: Some("fill: red;".to_string()),
        });
        let svg = doc.render();
        assert!(svg.contains(r#"id="denmark""#));
        assert!(svg.contains(r#"style="fill: red;""#));
    }

    #[test]
    fn test_text_offsets_and_font_size() {
        let mut doc = Document::new(100, 100, "scpl-plot");
        doc.push(Element::Text(Text {
            dx: Some(28.0),
            dy: Some(5.0),
            class: Some("scpl-axis__label".to_string()),
            font_size: Some(13.0),
            content: TextContent::Plain("50%".to_string()),
            ..Text::default()
        }));
        let svg = doc.render();
        assert!(svg.contains(r#"dx="28""#));
        assert!(svg.contains(r#"style="font-size: 13px;""#));
        assert!(svg.contains(">50%</text>"));
        // Unset positions are omitted entirely.
        assert!(!svg.contains(r#" x=""#));
    }

    #[test]
    fn test_text_spans() {
        let mut doc = Document::new(200, 100, "scpl-plot");
        doc.push(Element::Text(Text {
            x: Some(100.0),
            y: Some(11.0),
            class: Some("scpl-title".to_string()),
            content: TextContent::Spans(vec![
                Span {
                    x: Some(100.0),
                    dy: 0.0,
                    text: "line one".to_string(),
                },
                Span {
                    x: Some(100.0),
                    dy: 13.0,
                    text: "line two".to_string(),
                },
            ]),
            ..Text::default()
        }));
        let svg = doc.render();
        assert_eq!(svg.matches("<tspan").count(), 2);
        assert!(svg.contains(r#"<tspan x="100" dy="13">line two</tspan>"#));
    }

    #[test]
    fn test_text_escaping() {
        let mut doc = Document::new(100, 100, "scpl-plot");
        doc.push(Element::Text(Text {
            content: TextContent::Plain("a < b & c".to_string()),
            ..Text::default()
        }));
        let svg = doc.render();
        assert!(svg.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_attr_escaping() {
        let mut doc = Document::new(100, 100, "scpl-plot");
        doc.push(Element::Path {
            d: "M 0,0 Z".to_string(),
            class: None,
            data_id: Some(r#"a"b"#.to_string()),
        });
        let svg = doc.render();
        assert!(svg.contains("a&quot;b"));
    }

    #[test]
    fn test_non_finite_coordinates_serialize() {
        let mut doc = Document::new(100, 100, "scpl-plot");
        doc.push(Element::Circle {
            cx: f64::NAN,
            cy: 0.0,
            r: 6.0,
            class: None,
            id: None,
            style: None,
        });
        let svg = doc.render();
        assert!(svg.contains(r#"cx="NaN""#));
    }
}
