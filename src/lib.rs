//! Tools for turning catalog airfoil coordinate files into manufacturable
//! closed contours: parse the two-surface "Lednicer" `.dat` layout, stitch
//! the surfaces into a single closed loop, scale it to a target chord width
//! (and optionally a target thickness), and emit the result as a CSV
//! coordinate table or a DXF polyline drawing.

pub mod contour;
pub mod dat;
pub mod emit;
pub mod errors;
pub mod serialize;
