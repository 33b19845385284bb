//! Blade wedges as closed `geo` polygons, ready for a mesh builder.

use crate::errors::LayoutError;
use crate::float_types::Real;
use crate::layout::{LayoutConfig, build_blade_outline};
use geo::{Geometry, GeometryCollection, LineString, Polygon as GeoPolygon};
use nalgebra::Point2;

/// A set of 2D blade polygons in the XY plane.
///
/// The wedge outlines from [`layout`](crate::layout) leave the polygon
/// implicitly closed; here each ring is closed explicitly back to the apex
/// so the collection can be handed to any polygon-mesh builder as-is.
#[derive(Clone, Debug, Default)]
pub struct BladeSketch {
    pub geometry: GeometryCollection<Real>,
}

impl BladeSketch {
    pub fn new() -> Self {
        Self {
            geometry: GeometryCollection::default(),
        }
    }

    pub const fn from_geo(geometry: GeometryCollection<Real>) -> Self {
        Self { geometry }
    }

    /// A single wedge polygon for one blade interval.
    ///
    /// # Errors
    ///
    /// Propagates the argument validation of [`build_blade_outline`].
    pub fn blade(
        start_rad: Real,
        end_rad: Real,
        radius: Real,
        arc_segments: usize,
    ) -> Result<Self, LayoutError> {
        let outline = build_blade_outline(start_rad, end_rad, radius, arc_segments)?;
        Ok(Self::from_geo(GeometryCollection(vec![Geometry::Polygon(
            close_ring(&outline),
        )])))
    }

    /// The whole fan: one wedge polygon per blade, index order.
    pub fn fan(config: &LayoutConfig) -> Self {
        let polygons = config
            .blade_outlines()
            .iter()
            .map(|outline| Geometry::Polygon(close_ring(outline)))
            .collect();
        Self::from_geo(GeometryCollection(polygons))
    }

    pub fn polygon_count(&self) -> usize {
        self.geometry.len()
    }
}

fn close_ring(outline: &[Point2<Real>]) -> GeoPolygon<Real> {
    let mut coords: Vec<(Real, Real)> = outline.iter().map(|p| (p.x, p.y)).collect();
    coords.push((0.0, 0.0)); // close explicitly
    GeoPolygon::new(LineString::from(coords), vec![])
}
