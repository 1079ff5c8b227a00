// =============================================================================
// GEOMETRY.RS — Integer geometry for the shield icon
//
// - Shield hexagon and marker layout, derived from the icon size with
//   integer floor arithmetic
// - Pixel coverage sets for the shapes the renderer paints
//
// Coverage rule: a pixel (x, y) belongs to a shape when its centre
// (x + 0.5, y + 0.5) lies inside the shape. Coordinates are (x, y) with y
// growing downward, so "clockwise" means clockwise as seen on screen.
// =============================================================================

use glam::Vec2;

/// Sizes at or above this draw a checkmark; smaller icons get a dot.
pub const CHECKMARK_MIN_SIZE: u32 = 48;

// =============================================================================
// SHIELD
// =============================================================================

/// The hexagonal shield outline derived from an icon size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShieldGeometry {
    /// Inset from the top and left canvas edges (`size / 8`).
    pub margin: i32,
    /// Horizontal extent of the shield (`size - 2 * margin`).
    pub width: i32,
    /// Vertical extent of the shield (`width * 1.2`, floored).
    pub height: i32,
    /// Vertices clockwise from the top apex.
    pub vertices: [(i32, i32); 6],
}

impl ShieldGeometry {
    pub fn for_size(size: u32) -> Self {
        let size = size as i32;
        let margin = size / 8;
        let width = size - 2 * margin;
        let height = width * 6 / 5;

        let (x, y) = (margin, margin);
        let vertices = [
            (x + width / 2, y),
            (x + width, y + height / 3),
            (x + width, y + 2 * height / 3),
            (x + width / 2, y + height),
            (x, y + 2 * height / 3),
            (x, y + height / 3),
        ];

        Self { margin, width, height, vertices }
    }

    /// The point the marker is centred on.
    pub fn centre(&self) -> (i32, i32) {
        (self.margin + self.width / 2, self.margin + self.height / 2)
    }

    /// Axis-aligned bounds as `((min_x, min_y), (max_x, max_y))`.
    pub fn bounds(&self) -> ((i32, i32), (i32, i32)) {
        polygon_bounds(&self.vertices)
    }

    /// True when the side edges would collapse to zero length.
    pub fn is_degenerate(&self) -> bool {
        self.width / 2 == 0 || self.height / 3 == 0
    }
}

// =============================================================================
// MARKER
// =============================================================================

/// The white symbol drawn on top of the shield.
#[derive(Clone, Debug, PartialEq)]
pub enum Marker {
    /// Two-segment polyline: bottom-left, bottom-middle, top-right.
    Check {
        points: [(i32, i32); 3],
        stroke: f32,
    },
    /// Filled ellipse inscribed in the inclusive box `[x, x + diameter]` on
    /// both axes.
    Dot { x: i32, y: i32, diameter: i32 },
}

impl Marker {
    pub fn for_size(size: u32, shield: &ShieldGeometry) -> Self {
        let (cx, cy) = shield.centre();

        if size >= CHECKMARK_MIN_SIZE {
            let check = size as i32 / 4;
            let x = cx - check / 2;
            let y = cy - check / 2;
            Marker::Check {
                points: [
                    (x, y + check / 2),
                    (x + check / 2, y + check),
                    (x + check, y),
                ],
                stroke: (size / 16).max(2) as f32,
            }
        } else {
            let diameter = size as i32 / 8;
            Marker::Dot {
                x: cx - diameter / 2,
                y: cy - diameter / 2,
                diameter,
            }
        }
    }

    pub fn is_check(&self) -> bool {
        matches!(self, Marker::Check { .. })
    }

    /// Continuous bounds `(min, max)` of everything the marker may paint,
    /// stroke width included.
    pub fn extent(&self) -> (Vec2, Vec2) {
        match self {
            Marker::Check { points, stroke } => {
                let ((min_x, min_y), (max_x, max_y)) = polygon_bounds(points);
                let half = stroke / 2.0;
                (
                    Vec2::new(min_x as f32 - half, min_y as f32 - half),
                    Vec2::new(max_x as f32 + half, max_y as f32 + half),
                )
            }
            Marker::Dot { x, y, diameter } => (
                Vec2::new(*x as f32, *y as f32),
                Vec2::new((x + diameter + 1) as f32, (y + diameter + 1) as f32),
            ),
        }
    }
}

// =============================================================================
// COVERAGE
// =============================================================================

#[inline]
fn pixel_centre(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

#[inline]
fn to_vec2((x, y): (i32, i32)) -> Vec2 {
    Vec2::new(x as f32, y as f32)
}

/// Axis-aligned bounds of a point list as `((min_x, min_y), (max_x, max_y))`.
///
/// Returns `((0, 0), (0, 0))` for an empty slice.
pub fn polygon_bounds(points: &[(i32, i32)]) -> ((i32, i32), (i32, i32)) {
    let Some(&(x0, y0)) = points.first() else {
        return ((0, 0), (0, 0));
    };

    points.iter().fold(((x0, y0), (x0, y0)), |((lx, ly), (hx, hy)), &(x, y)| {
        ((lx.min(x), ly.min(y)), (hx.max(x), hy.max(y)))
    })
}

/// Shortest distance from `p` to the segment `a..b`.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// True when `p` is inside (or on the edge of) a clockwise convex polygon.
pub fn convex_polygon_contains(vertices: &[(i32, i32)], p: Vec2) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    vertices.iter().zip(vertices.iter().cycle().skip(1)).all(|(&a, &b)| {
        let a = to_vec2(a);
        let edge = to_vec2(b) - a;
        edge.perp_dot(p - a) >= 0.0
    })
}

/// All pixels whose centre lies inside a clockwise convex polygon.
pub fn points_in_convex_polygon(vertices: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let ((min_x, min_y), (max_x, max_y)) = polygon_bounds(vertices);
    let mut points = Vec::new();

    for y in min_y..max_y {
        for x in min_x..max_x {
            if convex_polygon_contains(vertices, pixel_centre(x, y)) {
                points.push((x, y));
            }
        }
    }

    points
}

/// Pixels inside the polygon whose centre is closer than `width` to one of
/// its edges. Painting these draws an outline that never grows the shape.
pub fn points_on_inner_border(vertices: &[(i32, i32)], width: f32) -> Vec<(i32, i32)> {
    let edges: Vec<(Vec2, Vec2)> = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(&a, &b)| (to_vec2(a), to_vec2(b)))
        .collect();

    points_in_convex_polygon(vertices)
        .into_iter()
        .filter(|&(x, y)| {
            let p = pixel_centre(x, y);
            edges.iter().any(|&(a, b)| distance_to_segment(p, a, b) < width)
        })
        .collect()
}

/// Pixels whose centre is within `width / 2` of the segment `a..b`.
pub fn points_on_thick_segment(a: (i32, i32), b: (i32, i32), width: f32) -> Vec<(i32, i32)> {
    let half = width / 2.0;
    let (va, vb) = (to_vec2(a), to_vec2(b));
    let reach = half.ceil() as i32;
    let ((min_x, min_y), (max_x, max_y)) = polygon_bounds(&[a, b]);

    let mut points = Vec::new();
    for y in (min_y - reach)..(max_y + reach) {
        for x in (min_x - reach)..(max_x + reach) {
            if distance_to_segment(pixel_centre(x, y), va, vb) <= half {
                points.push((x, y));
            }
        }
    }

    points
}

/// Pixels covered by a polyline of the given stroke width. Shared joints are
/// reported once.
pub fn points_on_polyline(points: &[(i32, i32)], width: f32) -> Vec<(i32, i32)> {
    let mut covered: Vec<(i32, i32)> = points
        .windows(2)
        .flat_map(|pair| points_on_thick_segment(pair[0], pair[1], width))
        .collect();

    covered.sort();
    covered.dedup();
    covered
}

/// Pixels whose centre lies inside the ellipse inscribed in the inclusive
/// pixel box `[x0, x1] × [y0, y1]`.
pub fn points_in_ellipse(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let min = Vec2::new(x0 as f32, y0 as f32);
    let max = Vec2::new((x1 + 1) as f32, (y1 + 1) as f32);
    let centre = (min + max) / 2.0;
    let radii = (max - min) / 2.0;

    let mut points = Vec::new();
    if radii.x <= 0.0 || radii.y <= 0.0 {
        return points;
    }

    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = (pixel_centre(x, y) - centre) / radii;
            if d.length_squared() <= 1.0 {
                points.push((x, y));
            }
        }
    }

    points
}
