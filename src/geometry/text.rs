//! Text block layout for text masks.
//!
//! Layout is anchor based: no glyph measurement happens here. Lines are centered as a
//! block inside the mask box using a fixed line advance of `font_size * line_height`.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::foundation::core::Size;
use crate::foundation::math::Num;
use crate::geometry::svg::{close_svg, open_svg};
use crate::pattern::model::{TextAlign, TextStyle};

/// Distance in pixels between a left/right aligned line anchor and the box edge.
pub const TEXT_EDGE_INSET: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
/// SVG `text-anchor` value.
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One laid-out line; `text` is unescaped.
pub struct TextLine {
    pub text: String,
    /// Baseline position in pixels from the top of the box.
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A multi-line text block positioned inside a mask box.
pub struct TextBlock {
    /// Box the block is centered in.
    pub dimensions: Size,
    /// Shared horizontal anchor position of every line.
    pub x: f64,
    pub anchor: TextAnchor,
    /// Effective style after defaulting.
    pub style: TextStyle,
    pub lines: Vec<TextLine>,
}

/// Lay out `content` (split on `\n`) inside `dimensions`.
///
/// A missing style falls back to [`TextStyle::default`].
pub fn layout_text(content: &str, dimensions: Size, style: Option<&TextStyle>) -> TextBlock {
    let style = style.cloned().unwrap_or_default();

    let (x, anchor) = match style.text_align {
        TextAlign::Left => (TEXT_EDGE_INSET, TextAnchor::Start),
        TextAlign::Right => (dimensions.width - TEXT_EDGE_INSET, TextAnchor::End),
        TextAlign::Center => (dimensions.width / 2.0, TextAnchor::Middle),
    };

    let raw_lines: Vec<&str> = content.split('\n').collect();
    let line_px = style.font_size * style.line_height;
    let total = line_px * raw_lines.len() as f64;
    let start_y = (dimensions.height - total) / 2.0 + line_px / 2.0;

    let lines = raw_lines
        .into_iter()
        .enumerate()
        .map(|(j, text)| TextLine {
            text: text.to_string(),
            y: start_y + (j as f64) * line_px,
        })
        .collect();

    TextBlock {
        dimensions,
        x,
        anchor,
        style,
        lines,
    }
}

impl TextBlock {
    /// Line advance in pixels.
    pub fn line_height_px(&self) -> f64 {
        self.style.font_size * self.style.line_height
    }

    /// Append one filled `<text>` element per line to `out`.
    pub fn write_elements(&self, out: &mut String) {
        let family = escape_markup(&self.style.font_family);
        let weight = escape_markup(&self.style.font_weight);
        for line in &self.lines {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-family="{family}" font-size="{}" font-weight="{weight}" text-anchor="{}" dominant-baseline="middle" fill="black">{}</text>"#,
                Num(self.x),
                Num(line.y),
                Num(self.style.font_size),
                self.anchor.as_str(),
                escape_markup(&line.text),
            );
        }
    }

    /// Standalone SVG document containing the block.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        open_svg(&mut out, self.dimensions);
        self.write_elements(&mut out);
        close_svg(&mut out);
        out
    }
}

/// Render `content` as a self-contained SVG text block sized to `dimensions`.
pub fn render_text(content: &str, dimensions: Size, style: Option<&TextStyle>) -> String {
    layout_text(content, dimensions, style).to_markup()
}

/// Escape the five markup metacharacters `& < > " '`.
pub fn escape_markup(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/text.rs"]
mod tests;
