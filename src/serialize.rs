use ncollide2d::na::Point2;
use serde::Serialize;

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

/// Serializes a sequence of `Point2<f64>` through the [`Point2f64`] remote
/// type, for use with `#[serde(serialize_with = "...")]` on point vectors.
pub mod point_seq {
    use super::Point2f64;
    use ncollide2d::na::Point2;
    use serde::ser::SerializeSeq;
    use serde::{Serialize, Serializer};

    #[derive(Serialize)]
    struct Wrapper<'a>(#[serde(with = "Point2f64")] &'a Point2<f64>);

    pub fn serialize<S>(points: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(points.len()))?;
        for p in points {
            seq.serialize_element(&Wrapper(p))?;
        }
        seq.end()
    }
}
