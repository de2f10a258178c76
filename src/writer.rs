//! Streaming indenting XML writer
//!
//! The writer emits markup incrementally: each call streams bytes to the
//! sink as it runs, there is no intermediate tree. Nesting is expressed by
//! nested [`XmlWriter::element`] calls; an explicit stack of open tag names
//! drives indentation and end-tag matching.

use std::fmt::Display;
use std::io::Write;

use crate::error::WriteError;

/// One indent unit per open ancestor tag.
const INDENT: &str = "    ";

/// Incremental XML writer bound to one sink for the lifetime of one document.
///
/// A writer is single-shot: drive it through a sequence of calls that leaves
/// every opened element closed, then discard it. It holds no buffer; a failed
/// sink write aborts the document and whatever was already flushed stays put.
pub struct XmlWriter<W: Write> {
    sink: W,
    /// Currently-open, not-yet-closed tag names, outermost first.
    open_tags: Vec<String>,
    /// The current output line already has content.
    line_started: bool,
    /// The most recent `<tag` has not been terminated with `>` or `/>`,
    /// so attributes may still be appended.
    tag_open: bool,
    /// The just-terminated tag wrapped its attributes across lines, which
    /// forces the terminator (and end tag) onto their own lines as well.
    long_attr: bool,
}

impl<W: Write> XmlWriter<W> {
    /// Create a writer that streams one document to `sink`.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            open_tags: Vec::new(),
            line_started: false,
            tag_open: false,
            long_attr: false,
        }
    }

    /// Write `text` verbatim and mark the line as started.
    fn raw(&mut self, text: &str) -> Result<(), WriteError> {
        self.sink.write_all(text.as_bytes())?;
        self.line_started = true;
        Ok(())
    }

    /// Write `text`, indenting first if the line is still fresh.
    ///
    /// Depth is always read from the open-tag stack; it is never tracked
    /// separately.
    fn indented(&mut self, text: &str) -> Result<(), WriteError> {
        if !self.line_started {
            for _ in 0..self.open_tags.len() {
                self.sink.write_all(INDENT.as_bytes())?;
            }
        }
        self.raw(text)
    }

    /// Like [`Self::indented`], but on an already-started line a single
    /// space separates `text` from the previous token.
    fn separated(&mut self, text: &str) -> Result<(), WriteError> {
        if !self.line_started {
            return self.indented(text);
        }
        self.sink.write_all(b" ")?;
        self.raw(text)
    }

    /// End the current output line.
    ///
    /// Records whether a tag was still accepting attributes, so its eventual
    /// terminator can mirror the wrapped formatting.
    pub fn new_line(&mut self) -> Result<(), WriteError> {
        self.long_attr = self.tag_open;
        self.line_started = false;
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    /// Emit `<tag` and leave the element in attribute position.
    fn tag_start(&mut self, tag: &str) -> Result<(), WriteError> {
        self.indented(&format!("<{tag}"))?;
        self.open_tags.push(tag.to_string());
        self.tag_open = true;
        Ok(())
    }

    /// Write a `key="value"` attribute onto the open tag.
    ///
    /// The value is interpolated verbatim, without XML escaping. Output is
    /// byte-compatible with markup authored by hand; callers own quoting.
    pub fn attr(&mut self, key: &str, value: impl Display) -> Result<(), WriteError> {
        debug_assert!(self.tag_open, "attribute written with no open tag");
        self.separated(&format!("{key}=\"{value}\""))
    }

    fn pop(&mut self) -> String {
        self.open_tags.pop().expect("close with no open tag")
    }

    /// Terminate the open tag with `terminator` (`>` or `/>`), honoring the
    /// long-attribute form and optionally keeping the line open for a body.
    fn terminate(&mut self, terminator: &str, suppress_newline: bool) -> Result<(), WriteError> {
        if self.long_attr {
            self.new_line()?;
        }
        self.tag_open = false;
        self.indented(terminator)?;
        if !suppress_newline {
            self.new_line()?;
        }
        Ok(())
    }

    /// Terminate the open tag with `>`, moving it into body position.
    pub fn tag_end(&mut self) -> Result<(), WriteError> {
        self.terminate(">", false)
    }

    /// Close the current element.
    ///
    /// If the tag is still open no body was ever started, so it self-closes
    /// with `/>`. Otherwise the matching `</tag>` is written, indented at
    /// the depth of the remaining ancestors.
    fn tag_pop(&mut self) -> Result<(), WriteError> {
        if self.tag_open {
            self.terminate("/>", false)?;
            self.pop();
            return Ok(());
        }
        let tag = self.pop();
        self.indented(&format!("</{tag}>"))?;
        self.new_line()
    }

    /// Emit one complete element; `gen` produces its attributes and body.
    pub fn element<F>(&mut self, tag: &str, gen: F) -> Result<(), WriteError>
    where
        F: FnOnce(&mut Self) -> Result<(), WriteError>,
    {
        self.tag_start(tag)?;
        gen(self)?;
        self.tag_pop()
    }

    /// Terminate the open tag and write a raw text body flush against it.
    ///
    /// `gen` writes the body bytes straight to the sink. When `hard`, the
    /// body is wrapped in literal `<![CDATA[` / `]]>` markers; otherwise it
    /// passes through untouched.
    pub fn cdata<F>(&mut self, hard: bool, gen: F) -> Result<(), WriteError>
    where
        F: FnOnce(&mut W) -> std::io::Result<()>,
    {
        self.terminate(">", true)?;
        if hard {
            self.raw("<![CDATA[")?;
            gen(&mut self.sink)?;
            self.raw("]]>")
        } else {
            gen(&mut self.sink)?;
            Ok(())
        }
    }

    /// True once every opened element has been closed again.
    pub fn is_complete(&self) -> bool {
        self.open_tags.is_empty() && !self.tag_open
    }
}
