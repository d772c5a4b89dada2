//! The custom point/edge list format.
//!
//! ```text
//! 3            point count
//! 0.00,1.00,0.00
//! 1.00,0.00,0.00
//! 0.00,0.00,1.00
//! 2            edge count
//! 0,1
//! 1,2
//! ```

use std::fmt::{self, Write};

use super::parse_number;
use crate::error::ParseError;
use crate::math::Point3;
use crate::shape::{proper_edges, Edge, EdgeSet, Shape};

/// Parses the custom format.
///
/// # Errors
///
/// Returns an error if a count or coordinate is malformed, a line has the
/// wrong number of fields, an edge refers to a missing point, or the input
/// ends before the announced number of points or edges.
pub fn parse(contents: &str) -> Result<Shape, ParseError> {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()));

    let (line, text) = lines.next().ok_or(ParseError::UnexpectedEof {
        expected: "point count",
    })?;
    let point_count: usize = parse_number(text, line)?;

    let mut points = Vec::new();
    for _ in 0..point_count {
        let (line, text) = lines
            .next()
            .ok_or(ParseError::UnexpectedEof { expected: "point" })?;
        let [x, y, z] = fields(text, line)?;
        points.push(Point3::new(
            parse_number(x, line)?,
            parse_number(y, line)?,
            parse_number(z, line)?,
        ));
    }

    let (line, text) = lines.next().ok_or(ParseError::UnexpectedEof {
        expected: "edge count",
    })?;
    let edge_count: usize = parse_number(text, line)?;

    let mut edges = EdgeSet::new();
    for _ in 0..edge_count {
        let (line, text) = lines
            .next()
            .ok_or(ParseError::UnexpectedEof { expected: "edge" })?;
        let [i, j] = fields(text, line)?;
        let i = point_index(i, line, points.len())?;
        let j = point_index(j, line, points.len())?;
        edges.insert(Edge::new(i, j));
    }

    if let Some((line, _)) = lines.find(|(_, text)| !text.is_empty()) {
        tracing::warn!(line, "ignoring content after the edge list");
    }

    Ok(Shape::new(points, edges))
}

/// Encodes a shape in the custom format.
///
/// Coordinates are written with two decimals. Self-edges are dropped and the
/// edge count reflects only the edges written.
#[must_use]
pub fn to_string(shape: &Shape) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    write(shape, &mut out).ok();
    out
}

fn write(shape: &Shape, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "{}", shape.points.len())?;
    for p in &shape.points {
        writeln!(out, "{:.2},{:.2},{:.2}", p.x, p.y, p.z)?;
    }

    let edges: Vec<Edge> = proper_edges(&shape.edges).collect();
    writeln!(out, "{}", edges.len())?;
    for edge in edges {
        writeln!(out, "{},{}", edge.low(), edge.high())?;
    }
    Ok(())
}

/// Splits a comma-separated line into exactly `N` trimmed fields.
fn fields<const N: usize>(text: &str, line: usize) -> Result<[&str; N], ParseError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let found = parts.len();
    parts.try_into().map_err(|_| ParseError::FieldCount {
        line,
        expected: N,
        found,
    })
}

fn point_index(token: &str, line: usize, count: usize) -> Result<usize, ParseError> {
    let index: i64 = parse_number(token, line)?;
    usize::try_from(index)
        .ok()
        .filter(|&i| i < count)
        .ok_or(ParseError::IndexOutOfRange { line, index, count })
}
