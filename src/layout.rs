//! Parametric radial blade layout: angular intervals and wedge outlines.

use crate::errors::LayoutError;
use crate::float_types::{FULL_TURN_DEG, Real, degrees_to_radians};
use nalgebra::Point2;

/// Immutable description of one fan layout.
///
/// Built once per configuration change and regenerated wholesale when the
/// blade count is adjusted; there is no incremental update path.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    blade_count: usize,
    gap_deg: Real,
    radius: Real,
    arc_segments: usize,
}

/// One blade's angular interval, radians, ordered by `index` ascending.
///
/// `end_angle_rad` is reached by sweeping counterclockwise from
/// `start_angle_rad`. When the configured gap exceeds the interval width the
/// end angle falls below the start angle; the outline builder treats that as
/// a zero-length arc rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BladeSpec {
    pub index: usize,
    pub start_angle_rad: Real,
    pub end_angle_rad: Real,
}

impl LayoutConfig {
    /// Validates and freezes a layout configuration.
    ///
    /// # Parameters
    ///
    /// - `blade_count`: number of blades, must be ≥ 1. Values outside the
    ///   UI range are accepted here; clamping into [3, 16] is the caller's
    ///   concern (see [`FanController`](crate::controller::FanController)).
    /// - `gap_deg`: angular gap between adjacent blades, degrees. A gap at
    ///   or above the interval width produces degenerate blades, not an
    ///   error.
    /// - `radius`: outer radius of each blade, must be finite and > 0.
    /// - `arc_segments`: straight segments approximating each arc, ≥ 1.
    pub fn new(
        blade_count: usize,
        gap_deg: Real,
        radius: Real,
        arc_segments: usize,
    ) -> Result<Self, LayoutError> {
        if blade_count < 1 {
            return Err(LayoutError::InvalidBladeCount(blade_count));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(LayoutError::InvalidRadius(radius));
        }
        if arc_segments < 1 {
            return Err(LayoutError::InvalidArcSegments(arc_segments));
        }
        Ok(Self {
            blade_count,
            gap_deg,
            radius,
            arc_segments,
        })
    }

    /// Same gap, radius and arc segmentation with a different blade count.
    pub fn with_blade_count(&self, blade_count: usize) -> Result<Self, LayoutError> {
        Self::new(blade_count, self.gap_deg, self.radius, self.arc_segments)
    }

    pub const fn blade_count(&self) -> usize {
        self.blade_count
    }

    pub const fn gap_deg(&self) -> Real {
        self.gap_deg
    }

    pub const fn radius(&self) -> Real {
        self.radius
    }

    pub const fn arc_segments(&self) -> usize {
        self.arc_segments
    }

    /// Angular span allotted to one blade before subtracting the gap,
    /// `360° / blade_count`.
    pub fn interval_width_deg(&self) -> Real {
        FULL_TURN_DEG / self.blade_count as Real
    }

    /// Usable arc width of one blade, `interval width − gap`. Zero or
    /// negative when the gap swallows the whole interval.
    pub fn arc_width_deg(&self) -> Real {
        self.interval_width_deg() - self.gap_deg
    }

    /// The angular interval of every blade, radians, index order.
    pub fn blade_specs(&self) -> Vec<BladeSpec> {
        intervals_deg(self.blade_count, self.gap_deg)
            .enumerate()
            .map(|(index, (start_deg, end_deg))| BladeSpec {
                index,
                start_angle_rad: degrees_to_radians(start_deg),
                end_angle_rad: degrees_to_radians(end_deg),
            })
            .collect()
    }

    /// The wedge outline of every blade, index order.
    pub fn blade_outlines(&self) -> Vec<Vec<Point2<Real>>> {
        self.blade_specs()
            .iter()
            .map(|spec| {
                outline_points(
                    spec.start_angle_rad,
                    spec.end_angle_rad,
                    self.radius,
                    self.arc_segments,
                )
            })
            .collect()
    }
}

impl Default for LayoutConfig {
    /// The layout the fan sketch starts from: three blades, 10° gap,
    /// radius 3, 20 arc segments.
    fn default() -> Self {
        Self {
            blade_count: 3,
            gap_deg: 10.0,
            radius: 3.0,
            arc_segments: 20,
        }
    }
}

impl BladeSpec {
    /// Wedge outline for this blade's interval. See [`build_blade_outline`].
    pub fn outline(
        &self,
        radius: Real,
        arc_segments: usize,
    ) -> Result<Vec<Point2<Real>>, LayoutError> {
        build_blade_outline(self.start_angle_rad, self.end_angle_rad, radius, arc_segments)
    }
}

/// **Mathematical Foundation: Uniform Angular Partitioning**
///
/// Computes the ordered angular interval `(start°, end°)` of every blade in a
/// radially symmetric fan layout.
///
/// ## **Interval Mathematics**
///
/// For `n` blades with inter-blade gap `g` (degrees), the interval width is:
/// ```text
/// W = 360 / n
/// start_i = i·W
/// end_i   = i·W + (W − g)
/// where i ∈ {0, 1, ..., n-1}
/// ```
///
/// ### **Index-Based Generation**
/// Each angle is derived from the loop index (`i·W`), never by repeated
/// addition (`θ += W`). Accumulating the step drifts when `360/W` is not
/// exactly representable and can drop or duplicate an interval; indexed
/// generation guarantees exactly `n` index-aligned pairs for any `n`.
///
/// ### **Range**
/// Start angles always lie in `[0, 360)`. End angles are not normalized:
/// with a zero gap the last blade's end lands exactly on 360°, and a gap
/// wider than the interval pushes `end_i` below `start_i` (a degenerate
/// zero-arc blade). Keeping the raw values preserves the invariant
/// `end_i − start_i = W − g` for every blade.
///
/// # Errors
///
/// [`LayoutError::InvalidBladeCount`] when `blade_count` is zero. Positive
/// counts outside the UI range [3, 16] are accepted permissively.
pub fn compute_blade_intervals(
    blade_count: usize,
    gap_deg: Real,
) -> Result<Vec<(Real, Real)>, LayoutError> {
    if blade_count < 1 {
        return Err(LayoutError::InvalidBladeCount(blade_count));
    }
    Ok(intervals_deg(blade_count, gap_deg).collect())
}

/// Builds the wedge outline for one blade: apex at the origin, a straight
/// edge out to the arc start, then `arc_segments` samples along the arc up
/// to the end angle. The final sample lands exactly on
/// `(radius·cos(end), radius·sin(end))`.
///
/// Returns exactly `arc_segments + 2` points. The polygon closes implicitly
/// from the last arc point back to the apex; the apex is not repeated.
///
/// A zero or negative sweep (`end_rad ≤ start_rad`) is the degenerate-gap
/// case: the arc collapses and every sample coincides with the arc start
/// point, so the outline renders as a bare apex-to-rim segment.
///
/// # Errors
///
/// [`LayoutError::InvalidRadius`] when `radius` is not finite and positive,
/// [`LayoutError::InvalidArcSegments`] when `arc_segments` is zero.
pub fn build_blade_outline(
    start_rad: Real,
    end_rad: Real,
    radius: Real,
    arc_segments: usize,
) -> Result<Vec<Point2<Real>>, LayoutError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(LayoutError::InvalidRadius(radius));
    }
    if arc_segments < 1 {
        return Err(LayoutError::InvalidArcSegments(arc_segments));
    }
    Ok(outline_points(start_rad, end_rad, radius, arc_segments))
}

/// Interval generator shared by the checked entry points; `blade_count` ≥ 1.
fn intervals_deg(blade_count: usize, gap_deg: Real) -> impl Iterator<Item = (Real, Real)> {
    let width = FULL_TURN_DEG / blade_count as Real;
    let arc_width = width - gap_deg;
    (0..blade_count).map(move |i| {
        let start = i as Real * width;
        (start, start + arc_width)
    })
}

/// Outline sampler shared by the checked entry points; arguments validated.
fn outline_points(
    start_rad: Real,
    end_rad: Real,
    radius: Real,
    arc_segments: usize,
) -> Vec<Point2<Real>> {
    // Degenerate sweep clamps to a zero-length arc rather than walking the
    // circle backwards.
    let sweep = (end_rad - start_rad).max(0.0);

    let mut points = Vec::with_capacity(arc_segments + 2);
    points.push(Point2::origin());
    points.push(Point2::new(
        radius * start_rad.cos(),
        radius * start_rad.sin(),
    ));
    for k in 1..=arc_segments {
        let angle = start_rad + sweep * (k as Real) / (arc_segments as Real);
        points.push(Point2::new(radius * angle.cos(), radius * angle.sin()));
    }
    points
}
