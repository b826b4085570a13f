//! Marker tokens
//!
//! The tokens are an on-disk format: stylesheets patched by earlier releases
//! are found again only if these literals never change.

use std::fmt;

/// A managed block kind, identified in the stylesheet by its comment token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Sticker,
    Wallpaper,
    HideWatermark,
}

impl Marker {
    /// Every known marker, in the order `scrub_all` removes them
    pub const ALL: [Marker; 3] = [Marker::Sticker, Marker::Wallpaper, Marker::HideWatermark];

    /// The exact comment token that opens this marker's block
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sticker => "/* Stickers */",
            Self::Wallpaper => "/* Background Image */",
            Self::HideWatermark => "/* Hide Watermark */",
        }
    }

    /// Whether building this block requires a resolved decoration
    pub const fn needs_assets(self) -> bool {
        !matches!(self, Self::HideWatermark)
    }

    /// All known markers except `self`
    pub fn others(self) -> Vec<Marker> {
        Self::ALL.into_iter().filter(|m| *m != self).collect()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sticker => write!(f, "sticker"),
            Self::Wallpaper => write!(f, "wallpaper"),
            Self::HideWatermark => write!(f, "hide-watermark"),
        }
    }
}

/// Byte offset of `marker`'s token in `text`, if present
pub fn locate(marker: Marker, text: &str) -> Option<usize> {
    text.find(marker.token())
}

/// Markers whose tokens currently appear in `text`, in file order
pub fn present_markers(text: &str) -> Vec<Marker> {
    let mut found: Vec<(usize, Marker)> = Marker::ALL
        .into_iter()
        .filter_map(|m| locate(m, text).map(|i| (i, m)))
        .collect();
    found.sort_by_key(|(i, _)| *i);
    found.into_iter().map(|(_, m)| m).collect()
}
