//! Reading and writing shape files.
//!
//! Two formats are supported:
//! - the custom point/edge list format (files named after the shape id)
//! - a Wavefront OBJ subset (`v`, `f` and `l` statements)

pub mod custom;
pub mod obj;

use std::path::Path;
use std::str::FromStr;

use crate::error::{DiceError, ParseError, Result};
use crate::shape::Shape;

/// Shape file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Line-based point/edge list.
    Custom,
    /// Wavefront OBJ subset.
    Obj,
}

impl Format {
    /// Picks the format from a path: `.obj` files are OBJ, everything else is custom.
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("obj") => Self::Obj,
            _ => Self::Custom,
        }
    }
}

/// Reads a shape file, choosing the codec from the file name.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are malformed.
pub fn read_shape(path: &Path) -> Result<Shape> {
    let contents = std::fs::read_to_string(path).map_err(|e| DiceError::io(path, e))?;
    let shape = match Format::detect(path) {
        Format::Custom => custom::parse(&contents)?,
        Format::Obj => obj::parse(&contents)?,
    };
    tracing::debug!(
        path = %path.display(),
        points = shape.points.len(),
        edges = shape.edges.len(),
        "read shape"
    );
    Ok(shape)
}

/// Encodes `shape` in `format` and writes it to `path` in a single write.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_shape(path: &Path, shape: &Shape, format: Format) -> Result<()> {
    let contents = match format {
        Format::Custom => custom::to_string(shape),
        Format::Obj => obj::to_string(shape),
    };
    std::fs::write(path, contents).map_err(|e| DiceError::io(path, e))?;
    tracing::debug!(path = %path.display(), ?format, "wrote shape");
    Ok(())
}

fn parse_number<T: FromStr>(token: &str, line: usize) -> std::result::Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_owned(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::shape::{Edge, EdgeSet};

    fn tetra() -> Shape {
        let points = vec![
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(-1.0, -1.0, 1.0),
            Point3::new(-1.0, 1.0, -1.0),
            Point3::new(1.0, -1.0, -1.0),
        ];
        let edges: EdgeSet = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
            .into_iter()
            .map(Edge::from)
            .collect();
        Shape::new(points, edges)
    }

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(Format::detect(Path::new("4")), Format::Custom);
        assert_eq!(Format::detect(Path::new("dir/20.obj")), Format::Obj);
        assert_eq!(Format::detect(Path::new("6.OBJ")), Format::Obj);
    }

    #[test]
    fn write_then_read_each_format() {
        let dir = tempfile::tempdir().unwrap();
        let shape = tetra();

        let custom_path = dir.path().join("4");
        write_shape(&custom_path, &shape, Format::Custom).unwrap();
        let back = read_shape(&custom_path).unwrap();
        assert_eq!(back.points.len(), 4);
        assert_eq!(back.edges.len(), 6);

        let obj_path = dir.path().join("4.obj");
        write_shape(&obj_path, &shape, Format::Obj).unwrap();
        let back = read_shape(&obj_path).unwrap();
        assert_eq!(back.points.len(), 4);
        assert!(shape.edges.iter().all(|e| back.edges.contains(e)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_shape(&dir.path().join("8")).unwrap_err();
        assert!(matches!(err, DiceError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("6");
        std::fs::write(&path, "two\n").unwrap();
        let err = read_shape(&path).unwrap_err();
        assert!(matches!(
            err,
            DiceError::Parse(ParseError::InvalidNumber { line: 1, .. })
        ));
    }
}
