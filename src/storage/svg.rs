//! SVG serialisation of figures

use std::fmt::Write;

use crate::error::LayoutError;
use crate::gantt::{Baseline, Figure, Shape, ShapeKind, Style, TextAnchor};

/// Render the figure as a standalone SVG document
pub fn write(figure: &Figure) -> Result<String, LayoutError> {
    let frame = figure.bounding_box()?;
    let width = frame.right().max(0.0) + frame.left().max(0.0);
    let height = frame.bottom().max(0.0) + frame.top().max(0.0);

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        number(width),
        number(height)
    )?;
    for shape in figure.shapes() {
        write_shape(&mut svg, shape)?;
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}

fn write_shape(svg: &mut String, shape: &Shape) -> std::fmt::Result {
    let style = &shape.style;
    match &shape.kind {
        ShapeKind::Rectangle(frame) => writeln!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" {} fill="{}"/>"#,
            number(frame.left()),
            number(frame.top()),
            number(frame.width),
            number(frame.height),
            stroke(style),
            escape(&style.fill.color)
        ),
        ShapeKind::Line { source, target } => writeln!(
            svg,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            number(source.x),
            number(source.y),
            number(target.x),
            number(target.y),
            stroke(style)
        ),
        ShapeKind::Text { text, frame } => {
            let x = match style.font.anchor {
                TextAnchor::Start => 0.0,
                TextAnchor::Middle => frame.width / 2.0,
                TextAnchor::End => frame.width,
            };
            let y = match style.font.baseline {
                Baseline::Top => 0.0,
                Baseline::Middle => frame.height / 2.0,
            };
            writeln!(
                svg,
                r#"  <svg x="{}" y="{}" width="{}" height="{}">"#,
                number(frame.left()),
                number(frame.top()),
                number(frame.width),
                number(frame.height)
            )?;
            writeln!(
                svg,
                r#"    <text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" text-anchor="{}" dominant-baseline="{}" fill="{}">{}</text>"#,
                number(x),
                number(y),
                escape(&style.font.family),
                escape(&style.font.size),
                escape(&style.font.weight),
                style.font.anchor.as_str(),
                style.font.baseline.as_str(),
                escape(&style.fill.color),
                escape(text)
            )?;
            writeln!(svg, "  </svg>")
        }
    }
}

fn stroke(style: &Style) -> String {
    let mut attributes = format!(
        r#"stroke="{}" stroke-width="{}""#,
        escape(&style.stroke.color),
        number(style.stroke.width)
    );
    if !style.stroke.dash_array.is_empty() {
        attributes.push_str(&format!(
            r#" stroke-dasharray="{}""#,
            escape(&style.stroke.dash_array)
        ));
    }
    attributes
}

/// At most three decimals, without trailing zeros
fn number(value: f64) -> String {
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
