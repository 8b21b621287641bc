use thiserror::Error;

/// Errors produced by the profile pipeline. Every variant is terminal to the
/// invocation that raised it; the pipeline never retries and never returns
/// partial output.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("header line does not contain two dot-delimited integer counts: {line:?}")]
    MalformedHeader { line: String },

    #[error("coordinate line {line_no} does not contain exactly two real numbers: {line:?}")]
    MalformedCoordinateLine { line_no: usize, line: String },

    #[error("header declares {declared} points but {parsed} were parsed")]
    PointCountMismatch { declared: usize, parsed: usize },

    #[error("profile has no upper surface points, contour cannot be anchored")]
    EmptyUpperSurface,

    #[error("cannot normalize thickness, profile has no positive vertical extent (max y = {max_y})")]
    DegenerateThickness { max_y: f64 },

    #[error("failed to write DXF drawing")]
    DxfWrite(#[from] dxf::DxfError),
}
