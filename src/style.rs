// ── IconStyle ─────────────────────────────────────────────────────────────────

use image::Rgba;

/// Opaque colour from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> Rgba<u8> {
    Rgba([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 0xFF])
}

/// Palette and stroke settings used when painting an icon.
///
/// There is no way to load these from disk; `IconStyle::default()` is the
/// SafeLink palette and is what [`crate::icon::render`] uses.
#[derive(Clone, Debug, PartialEq)]
pub struct IconStyle {
    /// Shield body.
    pub fill: Rgba<u8>,
    /// Shield outline, painted on the inside of the edge.
    pub outline: Rgba<u8>,
    /// Checkmark / dot.
    pub marker: Rgba<u8>,
    /// Outline thickness in pixels.
    pub outline_width: f32,
}

impl IconStyle {
    pub const SHIELD_FILL: Rgba<u8> = rgb(0x667EEA);
    pub const SHIELD_OUTLINE: Rgba<u8> = rgb(0x5A6FD8);
    pub const MARKER: Rgba<u8> = rgb(0xFFFFFF);
    pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            fill:          Self::SHIELD_FILL,
            outline:       Self::SHIELD_OUTLINE,
            marker:        Self::MARKER,
            outline_width: 2.0,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_splits_channels() {
        assert_eq!(rgb(0x667EEA), Rgba([0x66, 0x7E, 0xEA, 0xFF]));
        assert_eq!(rgb(0x000000), Rgba([0, 0, 0, 0xFF]));
    }

    #[test]
    fn default_is_safelink_palette() {
        let style = IconStyle::default();
        assert_eq!(style.fill, Rgba([0x66, 0x7E, 0xEA, 0xFF]));
        assert_eq!(style.outline, Rgba([0x5A, 0x6F, 0xD8, 0xFF]));
        assert_eq!(style.marker, Rgba([0xFF, 0xFF, 0xFF, 0xFF]));
        assert_eq!(style.outline_width, 2.0);
    }
}
