//! SVG serialization of a [`Scene`].

use super::paint::{LeafCell, Scene};
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Escape text for use in XML character data and attribute values.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Shortest round-trip representation, with `-0` printed as `0`.
fn num(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        v.to_string()
    }
}

fn write_cell(out: &mut String, cell: &LeafCell) {
    let w = num(cell.width());
    let h = num(cell.height());
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "<g transform=\"translate({},{})\"><title>{}</title>",
        num(cell.rect.x0),
        num(cell.rect.y0),
        escape_xml(&cell.tooltip)
    );
    let _ = write!(
        out,
        "<rect fill=\"{}\" fill-opacity=\"{}\" width=\"{}\" height=\"{}\"></rect>",
        cell.fill,
        num(cell.fill_opacity),
        w,
        h
    );
    let _ = write!(
        out,
        "<clipPath id=\"{}\"><rect width=\"{}\" height=\"{}\"></rect></clipPath>",
        cell.clip_id, w, h
    );
    let _ = write!(out, "<text clip-path=\"url(#{})\">", cell.clip_id);
    for line in &cell.label {
        let _ = write!(out, "<tspan x=\"{}\" y=\"{}em\"", num(line.x), num(line.y_em));
        if let Some(opacity) = line.opacity {
            let _ = write!(out, " fill-opacity=\"{}\"", num(opacity));
        }
        let _ = write!(
            out,
            " transform=\"rotate(0)\" style=\"text-anchor: start;\">{}</tspan>",
            escape_xml(&line.text)
        );
    }
    out.push_str("</text></g>");
}

impl Scene {
    /// Standalone `<svg>` element, scaled to its container by CSS.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(256 + self.cells.len() * 512);
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0,0,{w},{h}\" width=\"{w}\" height=\"{h}\" style=\"max-width: 100%; height: auto; font: {font};\">",
            w = self.width,
            h = self.height,
            font = escape_xml(&self.font)
        );
        for cell in &self.cells {
            out.push('\n');
            write_cell(&mut out, cell);
        }
        out.push_str("\n</svg>");
        out
    }

    /// Hex SHA-256 of [`Scene::to_svg`]; equal scenes share a fingerprint.
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.to_svg().as_bytes()))
    }
}
