//! Stitching the two surface blocks of a parsed profile into a single closed
//! contour, and rescaling that contour to manufacturing dimensions.

use crate::dat::DatProfile;
use crate::errors::ProfileError;
use crate::serialize::point_seq;
use ncollide2d::na::Point2;
use ncollide2d::shape::Polyline;
use serde::{Deserialize, Serialize};

/// A closed polygon boundary as an ordered point sequence. The first point is
/// not repeated at the end; the final edge back to the first point is
/// implicit. Never mutated after construction: scaling produces a fresh
/// contour.
#[derive(Debug, Clone, Serialize)]
pub struct ClosedContour {
    #[serde(serialize_with = "point_seq::serialize")]
    points: Vec<Point2<f64>>,
}

impl ClosedContour {
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The axis-aligned bounds of the contour as (min, max) corners.
    pub fn bounds(&self) -> (Point2<f64>, Point2<f64>) {
        let mut min = Point2::new(f64::MAX, f64::MAX);
        let mut max = Point2::new(f64::MIN, f64::MIN);
        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Converts the contour to an `ncollide2d` polyline for downstream
    /// geometric queries. The implicit closing edge is made explicit by
    /// appending a copy of the first point.
    pub fn polyline(&self) -> Polyline<f64> {
        let mut vertices = self.points.clone();
        if let Some(first) = vertices.first().copied() {
            vertices.push(first);
        }
        Polyline::new(vertices, None)
    }
}

/// Output dimensions for a scaled contour, in the caller's length unit
/// (millimeters in the companion binary). A `thickness` of zero preserves
/// the profile's native thickness-to-chord proportions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleParameters {
    pub chord_width: u32,
    pub thickness: u32,
}

impl ScaleParameters {
    pub fn new(chord_width: u32, thickness: u32) -> ScaleParameters {
        ScaleParameters {
            chord_width,
            thickness,
        }
    }
}

/// Builds the closed manufacturing contour from a parsed profile.
///
/// Both surface blocks run leading edge to trailing edge, so the loop is
/// stitched as: upper surface reversed (trailing → leading edge), then the
/// lower surface with its duplicate leading-edge point skipped (leading →
/// trailing edge). The implicit closing edge runs from the last lower point
/// back to the upper trailing edge, giving `upper + lower - 1` vertices.
///
/// A single-point lower block degenerates to the reversed upper surface
/// alone, which is accepted. A profile with no upper surface points has no
/// leading-edge anchor to stitch against and is rejected.
pub fn build_contour(profile: &DatProfile) -> Result<ClosedContour, ProfileError> {
    if profile.upper().is_empty() {
        return Err(ProfileError::EmptyUpperSurface);
    }

    let points: Vec<Point2<f64>> = profile
        .upper()
        .iter()
        .rev()
        .chain(profile.lower_after_leading_edge())
        .copied()
        .collect();

    Ok(ClosedContour { points })
}

/// Rescales a contour to the requested output dimensions.
///
/// Both axes are multiplied by `chord_width`, preserving the native
/// thickness-to-chord ratio. When a nonzero `thickness` is requested, the y
/// values are then renormalized so the maximum y equals it exactly; x is
/// left untouched, so the thickness distribution is deliberately stretched
/// relative to the chord rather than reshaped.
pub fn scale_contour(
    contour: &ClosedContour,
    params: &ScaleParameters,
) -> Result<ClosedContour, ProfileError> {
    let chord = f64::from(params.chord_width);
    let mut points: Vec<Point2<f64>> = contour
        .points()
        .iter()
        .map(|p| Point2::new(p.x * chord, p.y * chord))
        .collect();

    if params.thickness > 0 {
        let max_y = points.iter().map(|p| p.y).fold(f64::MIN, f64::max);
        if max_y <= 0.0 {
            return Err(ProfileError::DegenerateThickness { max_y });
        }
        let factor = f64::from(params.thickness) / max_y;
        for p in points.iter_mut() {
            p.y *= factor;
        }
    }

    Ok(ClosedContour { points })
}
