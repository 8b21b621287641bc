//! Output encodings for a scaled contour. Both emitters walk the contour in
//! its existing traversal order and rely on implicit closure; neither one
//! duplicates the first point at the end.

pub mod csv;
pub mod dxf;
