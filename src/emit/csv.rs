use crate::contour::ClosedContour;
use std::fmt::Write;

/// Renders a contour as a headerless CSV coordinate table: one
/// `x,y` row per vertex in loop order, six decimal places, fixed point.
pub fn emit_csv(contour: &ClosedContour) -> String {
    let mut out = String::with_capacity(contour.len() * 24);
    for p in contour.points() {
        // write! to a String cannot fail
        let _ = writeln!(out, "{:.6},{:.6}", p.x, p.y);
    }
    out
}
