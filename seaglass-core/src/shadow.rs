//! Box shadow values.
//!
//! Shadows are stored as opaque strings in [`crate::ScaleDefinitions`]. This
//! module decomposes them only to check they are well formed: one or more
//! comma-separated layers, each a tuple of four or five lengths and colors.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShadowError {
    #[error("shadow value is empty")]
    Empty,

    #[error("unbalanced parentheses in shadow value")]
    UnbalancedParens,

    #[error("layer {layer} is empty")]
    EmptyLayer { layer: usize },

    #[error("layer {layer} has {count} parts, expected 4 or 5")]
    PartCount { layer: usize, count: usize },

    #[error("layer {layer} has an invalid part '{part}'")]
    InvalidPart { layer: usize, part: String },

    #[error("layer {layer} has {count} lengths, expected 2 to 4")]
    LengthCount { layer: usize, count: usize },

    #[error("layer {layer} has more than one color")]
    ExtraColor { layer: usize },
}

/// One layer of a composite shadow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowLayer {
    pub inset: bool,
    pub offset_x: String,
    pub offset_y: String,
    pub blur: Option<String>,
    pub spread: Option<String>,
    pub color: Option<String>,
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write!(f, "{} {}", self.offset_x, self.offset_y)?;
        for part in [&self.blur, &self.spread, &self.color].into_iter().flatten() {
            write!(f, " {}", part)?;
        }
        Ok(())
    }
}

/// A decomposed shadow. Layer order is paint order: the first layer is on top.
///
/// The keyword `none` parses to a spec with no layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowSpec {
    pub layers: Vec<ShadowLayer>,
}

impl ShadowSpec {
    pub fn parse(value: &str) -> Result<Self, ShadowError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ShadowError::Empty);
        }
        if value == "none" {
            return Ok(Self { layers: Vec::new() });
        }

        let layers = split_top_level(value, ',')?
            .into_iter()
            .enumerate()
            .map(|(index, layer)| parse_layer(index + 1, layer))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { layers })
    }

    pub fn is_none(&self) -> bool {
        self.layers.is_empty()
    }
}

impl fmt::Display for ShadowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.layers.is_empty() {
            return f.write_str("none");
        }
        for (index, layer) in self.layers.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", layer)?;
        }
        Ok(())
    }
}

/// Split on `sep` outside of parentheses.
fn split_top_level(value: &str, sep: char) -> Result<Vec<&str>, ShadowError> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or(ShadowError::UnbalancedParens)?,
            c if c == sep && depth == 0 => {
                parts.push(&value[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ShadowError::UnbalancedParens);
    }
    parts.push(&value[start..]);
    Ok(parts)
}

/// Split on whitespace outside of parentheses.
fn split_parts(layer: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = None;

    for (i, c) in layer.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    parts.push(&layer[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        parts.push(&layer[s..]);
    }
    parts
}

fn parse_layer(layer: usize, text: &str) -> Result<ShadowLayer, ShadowError> {
    let mut parts = split_parts(text);
    if parts.is_empty() {
        return Err(ShadowError::EmptyLayer { layer });
    }

    let inset = parts.first() == Some(&"inset");
    if inset {
        parts.remove(0);
    }

    if !(4..=5).contains(&parts.len()) {
        return Err(ShadowError::PartCount {
            layer,
            count: parts.len(),
        });
    }

    let mut lengths = Vec::new();
    let mut color = None;
    for part in parts {
        if is_length(part) {
            lengths.push(part.to_string());
        } else if is_color(part) {
            if color.replace(part.to_string()).is_some() {
                return Err(ShadowError::ExtraColor { layer });
            }
        } else {
            return Err(ShadowError::InvalidPart {
                layer,
                part: part.to_string(),
            });
        }
    }

    if !(2..=4).contains(&lengths.len()) {
        return Err(ShadowError::LengthCount {
            layer,
            count: lengths.len(),
        });
    }

    let mut lengths = lengths.into_iter();
    Ok(ShadowLayer {
        inset,
        offset_x: lengths.next().unwrap_or_default(),
        offset_y: lengths.next().unwrap_or_default(),
        blur: lengths.next(),
        spread: lengths.next(),
        color,
    })
}

fn is_length(part: &str) -> bool {
    let unsigned = part.strip_prefix(['-', '+']).unwrap_or(part);
    let number_end = unsigned
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(unsigned.len());
    let (number, unit) = unsigned.split_at(number_end);

    number.bytes().any(|b| b.is_ascii_digit())
        && number.matches('.').count() <= 1
        && (unit == "%" || unit.bytes().all(|b| b.is_ascii_alphabetic()))
}

const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color", "color-mix",
    "var",
];

fn is_color(part: &str) -> bool {
    if let Some(hex) = part.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit());
    }

    if let Some(open) = part.find('(') {
        return part.ends_with(')') && COLOR_FUNCTIONS.contains(&&part[..open]);
    }

    part != "inset" && part.bytes().all(|b| b.is_ascii_alphabetic())
}
