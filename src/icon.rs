// ── Icon rendering ────────────────────────────────────────────────────────────
//
// Paints the shield icon into a fresh RGBA buffer in three passes: shield
// body, inner outline, marker. Pixels that fall outside the canvas are
// dropped (the shield's bottom apex always hangs below the canvas edge).

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::{IconError, MAX_ICON_SIZE};
use crate::geometry::{
    points_in_convex_polygon, points_in_ellipse, points_on_inner_border, points_on_polyline,
    Marker, ShieldGeometry,
};
use crate::style::IconStyle;

/// Full layout of one icon, computed before any pixel is touched.
#[derive(Clone, Debug, PartialEq)]
pub struct IconGeometry {
    pub size: u32,
    pub shield: ShieldGeometry,
    pub marker: Marker,
}

impl IconGeometry {
    /// Lays out an icon of `size × size` pixels.
    ///
    /// Rejects sizes that are zero, unreasonably large, or so small that the
    /// shield's sides collapse (1 and 2).
    pub fn for_size(size: u32) -> Result<Self, IconError> {
        if size == 0 {
            return Err(IconError::ZeroSize);
        }
        if size > MAX_ICON_SIZE {
            return Err(IconError::TooLarge { size, max: MAX_ICON_SIZE });
        }

        let shield = ShieldGeometry::for_size(size);
        if shield.is_degenerate() {
            return Err(IconError::DegenerateShield { size });
        }

        let marker = Marker::for_size(size, &shield);
        Ok(Self { size, shield, marker })
    }
}

/// Render the shield icon at `size × size` with the default palette.
pub fn render(size: u32) -> Result<RgbaImage, IconError> {
    render_with_style(size, &IconStyle::default())
}

/// Render the shield icon at `size × size` using `style`.
pub fn render_with_style(size: u32, style: &IconStyle) -> Result<RgbaImage, IconError> {
    let geometry = IconGeometry::for_size(size)?;
    debug!(size, shield = ?geometry.shield.vertices, marker = ?geometry.marker, "rendering icon");

    let mut canvas = RgbaImage::from_pixel(size, size, IconStyle::TRANSPARENT);
    let vertices = &geometry.shield.vertices;

    paint(&mut canvas, points_in_convex_polygon(vertices), style.fill);
    paint(&mut canvas, points_on_inner_border(vertices, style.outline_width), style.outline);

    let marker = match geometry.marker {
        Marker::Check { points, stroke } => points_on_polyline(&points, stroke),
        Marker::Dot { x, y, diameter } => points_in_ellipse(x, y, x + diameter, y + diameter),
    };
    paint(&mut canvas, marker, style.marker);

    Ok(canvas)
}

fn paint(canvas: &mut RgbaImage, points: Vec<(i32, i32)>, color: Rgba<u8>) {
    let (w, h) = canvas.dimensions();
    for (x, y) in points {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            continue;
        };
        if x < w && y < h {
            canvas.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_clips_out_of_bounds() {
        let mut canvas = RgbaImage::from_pixel(4, 4, IconStyle::TRANSPARENT);
        paint(&mut canvas, vec![(-1, 0), (0, -1), (4, 0), (0, 4), (1, 1)], IconStyle::MARKER);
        let painted = canvas.pixels().filter(|p| **p == IconStyle::MARKER).count();
        assert_eq!(painted, 1);
        assert_eq!(*canvas.get_pixel(1, 1), IconStyle::MARKER);
    }

    #[test]
    fn geometry_rejects_tiny_sizes() {
        assert!(matches!(IconGeometry::for_size(0), Err(IconError::ZeroSize)));
        assert!(matches!(IconGeometry::for_size(1), Err(IconError::DegenerateShield { size: 1 })));
        assert!(matches!(IconGeometry::for_size(2), Err(IconError::DegenerateShield { size: 2 })));
        assert!(IconGeometry::for_size(3).is_ok());
    }
}
