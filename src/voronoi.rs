//! Voronoi tessellation for enlarged hit-targets.
//!
//! Each retained point gets the region of the padded plot rectangle closer
//! to it than to any other point, rendered as one closed path. The cell for
//! a site is computed by clipping the rectangle against the perpendicular
//! bisector half-plane toward every other site (Sutherland-Hodgman).
//!
//! Point counts here are tiny (one site per plotted circle), so the
//! quadratic site-pair loop is not worth trading for a sweep-line build.

use crate::geometry::{Point, Rect};

/// Compute one clipped cell polygon per site, in site order.
///
/// A site coinciding with an earlier site yields an empty polygon; the
/// earlier occurrence keeps the shared region.
#[must_use]
pub fn cells(sites: &[Point], bounds: Rect) -> Vec<Vec<Point>> {
    sites
        .iter()
        .enumerate()
        .map(|(i, &site)| {
            if sites[..i].contains(&site) {
                return Vec::new();
            }

            let mut cell = bounds.corners().to_vec();
            for (j, &other) in sites.iter().enumerate() {
                if j == i || other == site || cell.is_empty() {
                    continue;
                }
                cell = clip_half_plane(&cell, site, other);
            }
            cell
        })
        .collect()
}

/// Clip a polygon to the half-plane of points at least as close to `site`
/// as to `other`.
fn clip_half_plane(polygon: &[Point], site: Point, other: Point) -> Vec<Point> {
    let mid = site.midpoint(other);
    let nx = other.x - site.x;
    let ny = other.y - site.y;
    // Signed distance along the bisector normal; <= 0 is the kept side.
    let side = |p: Point| (p.x - mid.x) * nx + (p.y - mid.y) * ny;

    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    for (k, &a) in polygon.iter().enumerate() {
        let b = polygon[(k + 1) % polygon.len()];
        let da = side(a);
        let db = side(b);

        if da <= 0.0 {
            clipped.push(a);
        }
        if (da <= 0.0) != (db <= 0.0) {
            clipped.push(a.lerp(b, da / (da - db)));
        }
    }
    clipped
}
