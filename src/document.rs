//! SVG document assembly
//!
//! Streams the full document through an [`XmlWriter`]: the `<svg>` root,
//! a CSS `<style>` block in a CDATA section, then one `<path>` element per
//! shape. Canvas size and CSS come from a [`DocStyle`], which can be loaded
//! from a TOML file or left at the built-in defaults.

use std::io::Write;
use std::path::Path as FilePath;

use serde::Deserialize;
use thiserror::Error;

use crate::error::WriteError;
use crate::shape::Path;
use crate::writer::XmlWriter;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Stroke-only rendering with a faint fill, so overlapping shapes read well.
const DEFAULT_CSS: &str = "\npath {\n\tstroke: #000000;\n\tfill-opacity: 0.05;\n}\n";

/// Errors that can occur when loading a document style file
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse style TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Canvas size and stylesheet for a rendered document.
#[derive(Debug, Clone)]
pub struct DocStyle {
    pub width: u32,
    pub height: u32,
    /// CSS rules for the document's `<style>` element, written verbatim
    /// into a CDATA section.
    pub css: String,
}

/// TOML structure for deserializing style files; every field is optional
/// and falls back to the default.
#[derive(Deserialize)]
struct TomlDocStyle {
    width: Option<u32>,
    height: Option<u32>,
    css: Option<String>,
}

impl Default for DocStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            css: DEFAULT_CSS.to_string(),
        }
    }
}

impl DocStyle {
    /// Load style overrides from a TOML file.
    pub fn from_file(path: impl AsRef<FilePath>) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse style overrides from TOML source.
    pub fn from_toml(source: &str) -> Result<Self, StyleError> {
        let parsed: TomlDocStyle = toml::from_str(source)?;
        let defaults = Self::default();
        Ok(Self {
            width: parsed.width.unwrap_or(defaults.width),
            height: parsed.height.unwrap_or(defaults.height),
            css: parsed.css.unwrap_or(defaults.css),
        })
    }
}

/// Stream the complete SVG document for `paths` to `sink`.
///
/// Output is deterministic: the same paths and style always produce the
/// same bytes. The first sink failure aborts the render; whatever was
/// already flushed stays in the sink.
pub fn write_document<W: Write>(
    sink: W,
    paths: &[Path],
    style: &DocStyle,
) -> Result<(), WriteError> {
    let mut x = XmlWriter::new(sink);
    x.element("svg", |x| {
        x.attr("xmlns", SVG_NS)?;
        x.new_line()?;
        x.attr("width", style.width)?;
        x.attr("height", style.height)?;
        x.tag_end()?;

        x.element("style", |x| {
            x.attr("type", "text/css")?;
            x.cdata(true, |w| w.write_all(style.css.as_bytes()))
        })?;

        for path in paths {
            write_path(x, path)?;
        }
        Ok(())
    })
}

/// One self-closed `<path d="…"/>` element.
fn write_path<W: Write>(x: &mut XmlWriter<W>, path: &Path) -> Result<(), WriteError> {
    x.element("path", |x| x.attr("d", path.path_data()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(paths: &[Path], style: &DocStyle) -> String {
        let mut buf = Vec::new();
        write_document(&mut buf, paths, style).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn document_without_shapes_has_root_and_style_only() {
        let svg = render(&[], &DocStyle::default());
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\"\n"));
        assert!(svg.contains("<style type=\"text/css\"><![CDATA["));
        assert!(svg.ends_with("</svg>\n"));
        assert!(!svg.contains("<path "));
    }

    #[test]
    fn each_shape_renders_one_path_element() {
        let svg = render(
            &[Path::example(), Path::example()],
            &DocStyle::default(),
        );
        assert_eq!(
            svg.matches("    <path d=\"M10 10 L10 90 L90 10 Z\"/>\n")
                .count(),
            2
        );
    }

    #[test]
    fn style_overrides_replace_canvas_size() {
        let style = DocStyle::from_toml("width = 640\nheight = 480\n").unwrap();
        assert_eq!(style.width, 640);
        assert_eq!(style.height, 480);
        assert_eq!(style.css, DocStyle::default().css);

        let svg = render(&[], &style);
        assert!(svg.contains("    width=\"640\" height=\"480\"\n"));
    }

    #[test]
    fn custom_css_lands_inside_the_cdata_section() {
        let style = DocStyle::from_toml("css = \"path { fill: red; }\"").unwrap();
        let svg = render(&[], &style);
        assert!(svg.contains("<![CDATA[path { fill: red; }]]></style>"));
    }

    #[test]
    fn malformed_style_toml_is_a_parse_error() {
        let err = DocStyle::from_toml("width = \"wide\"").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }
}
