//! Asset decoding for the terminal backend.
//!
//! Images are JSON character sprites:
//!
//! ```json
//! { "palette": { "#": [80, 200, 255], "o": [255, 255, 255] },
//!   "rows": [" ## ", "#oo#", " ## "] }
//! ```
//!
//! A space is transparent; every other character must appear in the palette
//! and becomes a full block in that colour. Short rows are padded with
//! transparency.
//!
//! Fonts are JSON style descriptors (`{ "bold": true, "fallback": "?" }`);
//! text is rendered as a single row of glyph cells.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::AssetError;
use crate::surface::{TermTexture, TexCell};
use crate::types::Rgb;

const SPRITE_GLYPH: char = '█';

#[derive(Debug, Deserialize)]
struct SpriteFile {
    palette: BTreeMap<char, [u8; 3]>,
    rows: Vec<String>,
}

/// Text style loaded from a font descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TermFont {
    pub bold: bool,
    pub fallback: char,
}

impl Default for TermFont {
    fn default() -> Self {
        Self {
            bold: false,
            fallback: '?',
        }
    }
}

fn read(path: &Path) -> Result<String, AssetError> {
    fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_error(path: &Path, detail: impl ToString) -> AssetError {
    AssetError::Decode {
        path: PathBuf::from(path),
        detail: detail.to_string(),
    }
}

pub fn load_sprite(path: &Path) -> Result<TermTexture, AssetError> {
    let text = read(path)?;
    parse_sprite(path, &text)
}

/// Decode sprite JSON; `path` only labels errors.
pub fn parse_sprite(path: &Path, json: &str) -> Result<TermTexture, AssetError> {
    let sprite: SpriteFile = serde_json::from_str(json).map_err(|e| decode_error(path, e))?;

    let height = sprite.rows.len();
    let width = sprite
        .rows
        .iter()
        .map(|r| r.chars().count())
        .max()
        .unwrap_or(0);
    if width == 0 || height == 0 {
        return Err(decode_error(path, "sprite has no pixels"));
    }
    if width > u16::MAX as usize || height > u16::MAX as usize {
        return Err(decode_error(path, "sprite too large"));
    }

    let mut cells = Vec::with_capacity(width * height);
    for (y, row) in sprite.rows.iter().enumerate() {
        let mut n = 0;
        for ch in row.chars() {
            n += 1;
            if ch == ' ' {
                cells.push(None);
                continue;
            }
            let [r, g, b] = *sprite.palette.get(&ch).ok_or_else(|| {
                decode_error(path, format!("row {y}: '{ch}' is not in the palette"))
            })?;
            cells.push(Some(TexCell {
                ch: SPRITE_GLYPH,
                fg: Rgb::new(r, g, b),
                bg: None,
                bold: false,
            }));
        }
        cells.extend(std::iter::repeat(None).take(width - n));
    }

    TermTexture::from_cells(width as u16, height as u16, cells)
        .ok_or_else(|| decode_error(path, "inconsistent sprite size"))
}

pub fn load_font(path: &Path) -> Result<TermFont, AssetError> {
    let text = read(path)?;
    serde_json::from_str(&text).map_err(|e| decode_error(path, e))
}

/// One row of glyph cells in `color` over a transparent background.
pub fn render_text(font: &TermFont, text: &str, color: Rgb) -> Result<TermTexture, AssetError> {
    if text.is_empty() {
        return Err(AssetError::EmptyText);
    }
    let cells: Vec<Option<TexCell>> = text
        .chars()
        .take(u16::MAX as usize)
        .map(|ch| {
            Some(TexCell {
                ch: if ch.is_control() { font.fallback } else { ch },
                fg: color,
                bg: None,
                bold: font.bold,
            })
        })
        .collect();
    let width = cells.len() as u16;
    TermTexture::from_cells(width, 1, cells).ok_or(AssetError::EmptyText)
}
