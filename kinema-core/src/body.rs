use nalgebra::{Point3, Vector3};

use crate::transform::Transform;

/// Corner index pairs of the twelve box edges.
pub const CUBOID_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Rigid box described by its eight corners.
///
/// Corners 0 to 3 form one face and 4 to 7 the opposite face, in the same
/// winding, so corner `i` and `i + 4` share an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    corners: [Point3<f64>; 8],
}

impl Cuboid {
    /// Axis aligned box with one corner at `origin`.
    ///
    /// The first face lies in the plane `y = origin.y` and the second face
    /// is offset by `dy`.
    pub fn new(origin: Point3<f64>, dx: f64, dy: f64, dz: f64) -> Self {
        let offsets = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(dx, 0.0, 0.0),
            Vector3::new(dx, 0.0, dz),
            Vector3::new(0.0, 0.0, dz),
            Vector3::new(0.0, dy, 0.0),
            Vector3::new(dx, dy, 0.0),
            Vector3::new(dx, dy, dz),
            Vector3::new(0.0, dy, dz),
        ];

        Self {
            corners: offsets.map(|offset| origin + offset),
        }
    }

    pub fn from_corners(corners: [Point3<f64>; 8]) -> Self {
        Self { corners }
    }

    #[inline]
    pub fn corners(&self) -> &[Point3<f64>; 8] {
        &self.corners
    }

    /// Apply the full rigid motion to every corner.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            corners: self.corners.map(|corner| transform.transform_point(&corner)),
        }
    }

    /// Rotate every corner about the world origin.
    ///
    /// Only the rotation block of the transform is used.
    pub fn rotated(&self, transform: &Transform) -> Self {
        Self {
            corners: self
                .corners
                .map(|corner| Point3::from(transform.rotate_vector(&corner.coords))),
        }
    }

    #[inline]
    pub fn edges(&self) -> &'static [(usize, usize); 12] {
        &CUBOID_EDGES
    }

    /// Edge end points.
    pub fn edge_segments(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> + '_ {
        CUBOID_EDGES
            .iter()
            .map(|(a, b)| (self.corners[*a], self.corners[*b]))
    }

    pub fn centroid(&self) -> Point3<f64> {
        let sum = self
            .corners
            .iter()
            .fold(Vector3::zeros(), |sum, corner| sum + corner.coords);

        Point3::from(sum / 8.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    fn edge_lengths(cuboid: &Cuboid) -> Vec<f64> {
        cuboid
            .edge_segments()
            .map(|(a, b)| nalgebra::distance(&a, &b))
            .collect()
    }

    #[test]
    fn test_cuboid_corners() {
        let cuboid = Cuboid::new(Point3::origin(), 7.0, 2.0, 3.0);

        let expected = Cuboid::from_corners([
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(7.0, 0.0, 0.0),
            Point3::new(7.0, 0.0, 3.0),
            Point3::new(0.0, 0.0, 3.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(7.0, 2.0, 0.0),
            Point3::new(7.0, 2.0, 3.0),
            Point3::new(0.0, 2.0, 3.0),
        ]);

        assert_eq!(cuboid, expected);
        assert_eq!(cuboid.centroid(), Point3::new(3.5, 1.0, 1.5));
    }

    #[test]
    fn test_cuboid_edges() {
        let cuboid = Cuboid::new(Point3::origin(), 7.0, 2.0, 3.0);

        let mut lengths = edge_lengths(&cuboid);
        lengths.sort_by(|a, b| a.partial_cmp(b).unwrap());

        assert_eq!(
            lengths,
            vec![2.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0, 7.0, 7.0, 7.0, 7.0]
        );
    }

    #[test]
    fn test_cuboid_rotation_preserves_edges() {
        let cuboid = Cuboid::new(Point3::origin(), 7.0, 2.0, 3.0);
        let before = edge_lengths(&cuboid);

        for n in 0..90 {
            let angle = (2.0 * n as f64).to_radians();
            let rotated = cuboid.rotated(&Transform::rotation_xyz(angle, angle, angle));

            for (a, b) in before.iter().zip(edge_lengths(&rotated)) {
                assert_relative_eq!(*a, b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_cuboid_rotated_ignores_translation() {
        let cuboid = Cuboid::new(Point3::origin(), 1.0, 1.0, 1.0);

        let moved = cuboid.rotated(&Transform::translation(5.0, 5.0, 5.0));

        assert_eq!(moved, cuboid);
    }

    #[test]
    fn test_cuboid_placement() {
        let cuboid = Cuboid::new(Point3::origin(), 7.0, 2.0, 3.0);
        let placement = Transform::translation(4.0, 4.0, 4.0) * Transform::rotation_z(FRAC_PI_4);

        let placed = cuboid.transformed(&placement);

        assert_relative_eq!(placed.corners()[0], Point3::new(4.0, 4.0, 4.0), epsilon = 1e-12);
        assert_relative_eq!(
            placed.corners()[1],
            Point3::new(4.0 + 7.0 * FRAC_PI_4.cos(), 4.0 + 7.0 * FRAC_PI_4.sin(), 4.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            placed.centroid(),
            placement.transform_point(&cuboid.centroid()),
            epsilon = 1e-12
        );
    }
}
