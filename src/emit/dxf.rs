use crate::contour::ClosedContour;
use crate::errors::ProfileError;
use dxf::entities::{Entity, EntityCommon, EntityType, LwPolyline};
use dxf::enums::AcadVersion;
use dxf::tables::Layer;
use dxf::{Color, Drawing, LwPolylineVertex, Point as DxfPoint};

/// Layer holding the contour polyline.
pub const LAYER_NAME: &str = "Profile";

const LAYER_COLOR_INDEX: u8 = 8; // grey

/// Builds a fresh DXF drawing containing the contour as a single closed
/// lightweight polyline on the [`LAYER_NAME`] layer. Vertices follow the
/// contour's traversal order; the closed flag lets the consuming CAD
/// application draw the final edge instead of a duplicated last vertex.
pub fn drawing(contour: &ClosedContour) -> Drawing {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2010;

    let (min, max) = contour.bounds();
    drawing.header.minimum_drawing_extents = DxfPoint::new(min.x, min.y, 0.0);
    drawing.header.maximum_drawing_extents = DxfPoint::new(max.x, max.y, 0.0);

    let mut layer = Layer::default();
    layer.name = LAYER_NAME.to_string();
    layer.color = Color::from_index(LAYER_COLOR_INDEX);
    drawing.add_layer(layer);

    let mut polyline = LwPolyline::default();
    for p in contour.points() {
        polyline.vertices.push(LwPolylineVertex {
            x: p.x,
            y: p.y,
            ..Default::default()
        });
    }
    polyline.set_is_closed(true);

    let mut common = EntityCommon::default();
    common.layer = LAYER_NAME.to_string();
    drawing.add_entity(Entity {
        common,
        specific: EntityType::LwPolyline(polyline),
    });

    drawing
}

/// Serializes the contour drawing to DXF bytes.
pub fn emit_dxf(contour: &ClosedContour) -> Result<Vec<u8>, ProfileError> {
    let mut buffer = Vec::new();
    drawing(contour).save(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::{build_contour, scale_contour, ScaleParameters};
    use crate::dat::parse_dat;
    use approx::assert_relative_eq;

    const SAMPLE: &str = "EXAMPLE AIRFOIL\n3. 2.\n\n1.0 0.0\n0.5 0.2\n0.0 0.0\n\n0.0 0.0\n0.5 -0.1\n";

    fn scaled_sample() -> ClosedContour {
        let contour = build_contour(&parse_dat(SAMPLE).unwrap()).unwrap();
        scale_contour(&contour, &ScaleParameters::new(100, 0)).unwrap()
    }

    #[test]
    fn test_single_closed_polyline_in_contour_order() {
        let scaled = scaled_sample();
        let d = drawing(&scaled);

        let entities: Vec<_> = d.entities().collect();
        assert_eq!(1, entities.len());
        assert_eq!(LAYER_NAME, entities[0].common.layer);

        match &entities[0].specific {
            EntityType::LwPolyline(polyline) => {
                assert!(polyline.is_closed());
                assert_eq!(scaled.len(), polyline.vertices.len());
                for (v, p) in polyline.vertices.iter().zip(scaled.points()) {
                    assert_relative_eq!(p.x, v.x);
                    assert_relative_eq!(p.y, v.y);
                }
            }
            other => panic!("expected a LWPOLYLINE, got {:?}", other),
        }
    }

    #[test]
    fn test_extents_cover_contour() {
        let d = drawing(&scaled_sample());
        assert_relative_eq!(-10.0, d.header.minimum_drawing_extents.y);
        assert_relative_eq!(100.0, d.header.maximum_drawing_extents.x);
    }

    #[test]
    fn test_emit_writes_polyline_bytes() {
        let bytes = emit_dxf(&scaled_sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("LWPOLYLINE"));
        assert!(text.contains(LAYER_NAME));
    }
}
