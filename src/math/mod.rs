/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Returns a copy of `points` with every coordinate multiplied by `factor`.
#[must_use]
pub fn scale_points(points: &[Point3], factor: f64) -> Vec<Point3> {
    points
        .iter()
        .map(|p| Point3::from(p.coords * factor))
        .collect()
}
