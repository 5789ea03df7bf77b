use std::fmt::Write as _;

use crate::error::GearMapResult;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

const FONT_FAMILY: &str = "Arial, sans-serif";

/// Renderer materializing each frame as a standalone SVG document.
///
/// Lets hosts and tools snapshot the chart without a windowing stack; the
/// most recent document stays available until the next render pass.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The SVG produced by the most recent render pass.
    ///
    /// Empty until `render` has been called once.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GearMapResult<()> {
        frame.validate()?;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = frame.viewport.width,
            h = frame.viewport.height,
        );

        for rect in &frame.rects {
            let _ = write!(
                svg,
                r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}""#,
                rect.x, rect.y, rect.width, rect.height
            );
            match rect.fill {
                Some(fill) => {
                    let _ = write!(svg, r#" fill="{}" fill-opacity="{:.3}""#, hex(fill), fill.alpha);
                }
                None => {
                    let _ = write!(svg, r#" fill="none""#);
                }
            }
            if let Some(stroke) = rect.stroke {
                let _ = write!(
                    svg,
                    r#" stroke="{}" stroke-opacity="{:.3}" stroke-width="{:.2}""#,
                    hex(stroke),
                    stroke.alpha,
                    rect.stroke_width
                );
            }
            let _ = writeln!(svg, "/>");
        }

        for line in &frame.lines {
            let _ = writeln!(
                svg,
                r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-opacity="{:.3}" stroke-width="{:.2}"/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                hex(line.color),
                line.color.alpha,
                line.stroke_width
            );
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let _ = writeln!(
                svg,
                r#"  <text x="{:.2}" y="{:.2}" font-family="{FONT_FAMILY}" font-size="{:.1}" fill="{}" fill-opacity="{:.3}" text-anchor="{anchor}" dominant-baseline="central">{}</text>"#,
                text.x,
                text.y,
                text.font_size_px,
                hex(text.color),
                text.color.alpha,
                escape(&text.text)
            );
        }

        svg.push_str("</svg>\n");
        self.document = svg;
        Ok(())
    }
}

fn hex(color: Color) -> String {
    let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color.red),
        channel(color.green),
        channel(color.blue)
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
