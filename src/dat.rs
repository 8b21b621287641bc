//! Parser for the two-surface ("Lednicer") airfoil coordinate format used by
//! the airfoiltools catalog.
//!
//! The format is line oriented:
//!
//! ```text
//! line 0: title
//! line 1: <upper count>. <lower count>.     (dot-terminated integer fields)
//! line 2: blank
//! line 3..: <x> <y>                         (whitespace separated)
//! ```
//!
//! Both surface blocks run leading edge to trailing edge. Some catalog files
//! separate the two blocks with an extra blank line and align columns with
//! double spaces; both quirks are tolerated.

use crate::errors::ProfileError;
use crate::serialize::point_seq;
use itertools::Itertools;
use ncollide2d::na::Point2;
use serde::Serialize;

/// The declared point counts from a profile's header line. The counts are
/// authoritative: the data section must contain exactly
/// `upper_count + lower_count` coordinate lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileHeader {
    pub upper_count: usize,
    pub lower_count: usize,
}

impl ProfileHeader {
    pub fn total(&self) -> usize {
        self.upper_count + self.lower_count
    }
}

/// A parsed profile: the header counts and the flat ordered point list,
/// upper surface block first, both blocks in source order. Immutable after
/// parsing; the contour builder reads it through the slice accessors.
#[derive(Debug, Clone, Serialize)]
pub struct DatProfile {
    pub header: ProfileHeader,
    #[serde(serialize_with = "point_seq::serialize")]
    points: Vec<Point2<f64>>,
}

impl DatProfile {
    /// The upper surface block, leading edge to trailing edge.
    pub fn upper(&self) -> &[Point2<f64>] {
        &self.points[..self.header.upper_count]
    }

    /// The lower surface block, leading edge to trailing edge.
    pub fn lower(&self) -> &[Point2<f64>] {
        &self.points[self.header.upper_count..]
    }

    /// The lower surface block without its first point. Both blocks start at
    /// the leading edge, so the first lower point duplicates the last point
    /// of the reversed upper surface and is skipped when stitching the
    /// contour. Empty when the lower block has at most one point.
    pub fn lower_after_leading_edge(&self) -> &[Point2<f64>] {
        let lower = self.lower();
        lower.get(1..).unwrap_or(&[])
    }
}

/// Returns the title line of a raw profile text, for display by callers.
/// The parser itself ignores it.
pub fn title(raw: &str) -> Option<&str> {
    raw.lines().next().map(str::trim)
}

/// Parses raw Lednicer coordinate text into a [`DatProfile`].
///
/// Blank lines in the data region are skipped, which tolerates the optional
/// blank separator between the upper and lower blocks. Fails if the header
/// counts cannot be read, if any non-blank data line is not exactly two real
/// numbers, or if the number of data lines disagrees with the header.
pub fn parse_dat(raw: &str) -> Result<DatProfile, ProfileError> {
    let mut lines = raw.lines();
    lines.next(); // title

    let header_line = lines.next().unwrap_or("");
    let header = parse_header(header_line)?;

    lines.next(); // blank separator after the header

    let mut points: Vec<Point2<f64>> = Vec::with_capacity(header.total());
    for (line_no, line) in lines.enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        // Data lines start at index 3 of the original text.
        points.push(parse_point(trimmed, line_no + 3)?);
    }

    if points.len() != header.total() {
        return Err(ProfileError::PointCountMismatch {
            declared: header.total(),
            parsed: points.len(),
        });
    }

    Ok(DatProfile { header, points })
}

fn parse_header(line: &str) -> Result<ProfileHeader, ProfileError> {
    let malformed = || ProfileError::MalformedHeader {
        line: line.to_string(),
    };

    // The counts are written as dot-terminated fields, e.g. "35. 35.".
    let (upper, lower) = line
        .split('.')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect_tuple()
        .ok_or_else(malformed)?;

    Ok(ProfileHeader {
        upper_count: upper.parse().map_err(|_| malformed())?,
        lower_count: lower.parse().map_err(|_| malformed())?,
    })
}

fn parse_point(trimmed: &str, line_no: usize) -> Result<Point2<f64>, ProfileError> {
    let malformed = || ProfileError::MalformedCoordinateLine {
        line_no,
        line: trimmed.to_string(),
    };

    let (x, y) = trimmed
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(malformed)?;

    Ok(Point2::new(
        x.parse().map_err(|_| malformed())?,
        y.parse().map_err(|_| malformed())?,
    ))
}
