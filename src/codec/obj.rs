//! Wavefront OBJ subset: vertices, faces and polylines.
//!
//! Faces are not stored in memory. On read, each face or polyline is turned
//! into edges. On write, faces are rebuilt from the edges with
//! [`ReconstructFaces`], and any edge left uncovered is written as an `l`
//! element so that no edge is lost.

use std::fmt::{self, Write};

use super::parse_number;
use crate::error::ParseError;
use crate::math::Point3;
use crate::reconstruct::{uncovered_edges, ReconstructFaces};
use crate::shape::{Edge, EdgeSet, Shape};

/// Parses OBJ text into points and edges.
///
/// Only `v`, `f` and `l` statements are interpreted. Texture and normal
/// indices in face references are discarded.
///
/// # Errors
///
/// Returns an error if a vertex does not have exactly three coordinates, a
/// face has fewer than three references, a polyline has fewer than two, a
/// number is malformed, or a reference points outside the vertex list.
pub fn parse(contents: &str) -> Result<Shape, ParseError> {
    let mut points: Vec<Point3> = Vec::new();
    let mut edges = EdgeSet::new();
    // Highest resolved (0-based) reference, checked once all vertices are known.
    let mut highest: Option<(usize, usize)> = None;

    for (idx, text) in contents.lines().enumerate() {
        let line = idx + 1;
        let mut tokens = text.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let coords: Vec<&str> = tokens.collect();
                let &[x, y, z] = coords.as_slice() else {
                    return Err(ParseError::FieldCount {
                        line,
                        expected: 4,
                        found: coords.len() + 1,
                    });
                };
                points.push(Point3::new(
                    parse_number(x, line)?,
                    parse_number(y, line)?,
                    parse_number(z, line)?,
                ));
            }
            Some(kind @ ("f" | "l")) => {
                let refs = tokens
                    .map(|t| resolve_reference(t, line, points.len()))
                    .collect::<Result<Vec<_>, _>>()?;

                let is_face = kind == "f";
                let min = if is_face { 3 } else { 2 };
                if refs.len() < min {
                    return Err(ParseError::TooFewVertices {
                        line,
                        min,
                        found: refs.len(),
                    });
                }

                if let Some(&max) = refs.iter().max() {
                    if highest.is_none_or(|(_, h)| max > h) {
                        highest = Some((line, max));
                    }
                }

                let n = refs.len();
                let pairs = if is_face { n } else { n - 1 };
                for i in 0..pairs {
                    edges.insert(Edge::new(refs[i], refs[(i + 1) % n]));
                }
            }
            _ => {}
        }
    }

    if let Some((line, max)) = highest {
        if max >= points.len() {
            return Err(ParseError::IndexOutOfRange {
                line,
                index: i64::try_from(max + 1).unwrap_or(i64::MAX),
                count: points.len(),
            });
        }
    }

    Ok(Shape::new(points, edges))
}

/// Resolves a face/polyline reference like `3`, `3/1`, `3//2` or `-1`
/// into a 0-based point index. Negative references count back from the
/// vertices defined so far.
fn resolve_reference(token: &str, line: usize, defined: usize) -> Result<usize, ParseError> {
    let head = token.split('/').next().unwrap_or(token);
    let index: i64 = parse_number(head, line)?;
    let out_of_range = || ParseError::IndexOutOfRange {
        line,
        index,
        count: defined,
    };

    match index {
        0 => Err(out_of_range()),
        i if i > 0 => usize::try_from(i - 1).map_err(|_| out_of_range()),
        i => {
            let back = usize::try_from(i.unsigned_abs()).map_err(|_| out_of_range())?;
            defined.checked_sub(back).ok_or_else(out_of_range)
        }
    }
}

/// Encodes a shape as OBJ.
///
/// Vertices are written with six decimals. Faces are rebuilt from the edge
/// set and written with 1-based indices, followed by `l` elements for edges
/// that no face covers.
#[must_use]
pub fn to_string(shape: &Shape) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    write(shape, &mut out).ok();
    out
}

fn write(shape: &Shape, out: &mut impl Write) -> fmt::Result {
    for p in &shape.points {
        writeln!(out, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }

    let faces = ReconstructFaces::new(&shape.edges).execute();
    for face in &faces {
        out.write_char('f')?;
        for v in &face.vertices {
            write!(out, " {}", v + 1)?;
        }
        out.write_char('\n')?;
    }

    for edge in uncovered_edges(&shape.edges, &faces) {
        writeln!(out, "l {} {}", edge.low() + 1, edge.high() + 1)?;
    }
    Ok(())
}
