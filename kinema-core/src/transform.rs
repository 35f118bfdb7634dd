use std::f64::consts::FRAC_PI_2;
use std::ops::Mul;

use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit(&self) -> Vector3<f64> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }
}

/// Sine and cosine of an angle in radians.
///
/// Whole quarter turns return exact values so that a rotation of zero is
/// the identity and a half turn is an exact sign flip.
fn sin_cos(angle: f64) -> (f64, f64) {
    let quarter = angle / FRAC_PI_2;
    let turns = quarter.round();

    if quarter.is_finite() && (quarter - turns).abs() <= 4.0 * f64::EPSILON * turns.abs().max(1.0)
    {
        match (turns as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        angle.sin_cos()
    }
}

/// Homogeneous transformation.
///
/// A 4x4 matrix with the rotation in the upper left 3x3 block and the
/// translation in the upper right column. Transforms compose by matrix
/// multiplication from base to tip; composition is not commutative.
///
/// All angles are in radians. Non-finite input is not validated and
/// propagates through composition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(Matrix4<f64>);

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[inline]
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    /// Construct from a raw homogeneous matrix.
    #[inline]
    pub fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self(matrix)
    }

    /// Rotation about the X axis.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = sin_cos(angle);

        #[rustfmt::skip]
        let matrix = Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0,   c,  -s, 0.0,
            0.0,   s,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );

        Self(matrix)
    }

    /// Rotation about the Y axis.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = sin_cos(angle);

        #[rustfmt::skip]
        let matrix = Matrix4::new(
              c, 0.0,   s, 0.0,
            0.0, 1.0, 0.0, 0.0,
             -s, 0.0,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );

        Self(matrix)
    }

    /// Rotation about the Z axis.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = sin_cos(angle);

        #[rustfmt::skip]
        let matrix = Matrix4::new(
              c,  -s, 0.0, 0.0,
              s,   c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );

        Self(matrix)
    }

    /// Rotation about a coordinate axis.
    pub fn rotation(axis: Axis, angle: f64) -> Self {
        match axis {
            Axis::X => Self::rotation_x(angle),
            Axis::Y => Self::rotation_y(angle),
            Axis::Z => Self::rotation_z(angle),
        }
    }

    /// Combined rotation `Rx(ax) * Ry(ay) * Rz(az)`.
    pub fn rotation_xyz(ax: f64, ay: f64, az: f64) -> Self {
        Self::rotation_x(ax) * Self::rotation_y(ay) * Self::rotation_z(az)
    }

    /// Pure translation.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut matrix = Matrix4::identity();
        matrix[(0, 3)] = dx;
        matrix[(1, 3)] = dy;
        matrix[(2, 3)] = dz;

        Self(matrix)
    }

    /// Translation along a coordinate axis.
    pub fn translation_along(axis: Axis, distance: f64) -> Self {
        let offset = axis.unit() * distance;

        Self::translation(offset.x, offset.y, offset.z)
    }

    /// Denavit-Hartenberg link transform `Rz(theta) * Tz(d) * Tx(a) * Rx(alpha)`.
    pub fn denavit_hartenberg(theta: f64, d: f64, a: f64, alpha: f64) -> Self {
        let (st, ct) = sin_cos(theta);
        let (sa, ca) = sin_cos(alpha);

        #[rustfmt::skip]
        let matrix = Matrix4::new(
             ct, -st * ca,  st * sa, a * ct,
             st,  ct * ca, -ct * sa, a * st,
            0.0,       sa,       ca,      d,
            0.0,      0.0,      0.0,    1.0,
        );

        Self(matrix)
    }

    /// Compose two transforms, `self * rhs`.
    ///
    /// The right hand side is expressed in the frame of `self`. Translating
    /// then rotating is not the same as rotating then translating.
    #[inline]
    pub fn compose(&self, rhs: &Transform) -> Transform {
        Transform(self.0 * rhs.0)
    }

    /// Rotate a vector by the rotation block, ignoring translation.
    pub fn rotate_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.0.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Apply the full rigid motion to a point.
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.rotate_vector(&point.coords) + self.origin().coords)
    }

    /// Translation component.
    #[inline]
    pub fn origin(&self) -> Point3<f64> {
        Point3::new(self.0[(0, 3)], self.0[(1, 3)], self.0[(2, 3)])
    }

    /// Extract the frame origin and axes.
    pub fn frame(&self) -> Frame {
        Frame {
            origin: self.origin(),
            x_axis: self.0.fixed_view::<3, 1>(0, 0).into_owned(),
            y_axis: self.0.fixed_view::<3, 1>(0, 1).into_owned(),
            z_axis: self.0.fixed_view::<3, 1>(0, 2).into_owned(),
        }
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.0
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.compose(&rhs)
    }
}

impl Mul<&Transform> for &Transform {
    type Output = Transform;

    fn mul(self, rhs: &Transform) -> Transform {
        self.compose(rhs)
    }
}

impl From<Matrix4<f64>> for Transform {
    fn from(matrix: Matrix4<f64>) -> Self {
        Self(matrix)
    }
}

/// Coordinate frame.
///
/// For transforms built from the constructors above the axes are unit
/// length and mutually orthogonal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub origin: Point3<f64>,
    pub x_axis: Vector3<f64>,
    pub y_axis: Vector3<f64>,
    pub z_axis: Vector3<f64>,
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}, {:.2}] X=({:.2}, {:.2}, {:.2}) Y=({:.2}, {:.2}, {:.2}) Z=({:.2}, {:.2}, {:.2})",
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.x_axis.x,
            self.x_axis.y,
            self.x_axis.z,
            self.y_axis.x,
            self.y_axis.y,
            self.y_axis.z,
            self.z_axis.x,
            self.z_axis.y,
            self.z_axis.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_frame() {
        let t = Transform::rotation_z(0.0).compose(&Transform::translation(0.0, 0.0, 0.0));
        assert_eq!(t, Transform::identity());

        let frame = t.frame();
        assert_eq!(frame.origin, Point3::origin());
        assert_eq!(frame.x_axis, Vector3::x());
        assert_eq!(frame.y_axis, Vector3::y());
        assert_eq!(frame.z_axis, Vector3::z());
    }

    #[test]
    fn test_half_turn_is_exact() {
        let rz = Transform::rotation_z(PI);
        assert_eq!(rz.rotate_vector(&Vector3::new(1.0, 2.0, 3.0)), Vector3::new(-1.0, -2.0, 3.0));

        let rx = Transform::rotation_x(PI);
        assert_eq!(rx.rotate_vector(&Vector3::new(1.0, 2.0, 3.0)), Vector3::new(1.0, -2.0, -3.0));

        let ry = Transform::rotation_y(PI);
        assert_eq!(ry.rotate_vector(&Vector3::new(1.0, 2.0, 3.0)), Vector3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_rotation_z_quarter() {
        let v = Transform::rotation_z(90.0_f64.to_radians()).rotate_vector(&Vector3::x());

        assert_relative_eq!(v, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_right_handed() {
        let v = Transform::rotation_x(FRAC_PI_2).rotate_vector(&Vector3::y());
        assert_relative_eq!(v, Vector3::z(), epsilon = 1e-12);

        let v = Transform::rotation_y(FRAC_PI_2).rotate_vector(&Vector3::z());
        assert_relative_eq!(v, Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform::translation(1.0, -2.0, 3.5);

        assert_eq!(t.origin(), Point3::new(1.0, -2.0, 3.5));
        assert_eq!(t.rotate_vector(&Vector3::x()), Vector3::x());
        assert_eq!(
            t.transform_point(&Point3::new(1.0, 1.0, 1.0)),
            Point3::new(2.0, -1.0, 4.5)
        );
        assert_eq!(Transform::translation_along(Axis::Y, 2.0).origin(), Point3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_compose_order() {
        let r = Transform::rotation_z(FRAC_PI_2);
        let t = Transform::translation(1.0, 0.0, 0.0);

        // Rotate then move along the rotated X axis.
        assert_relative_eq!((r * t).origin(), Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        // Move along the base X axis, rotation does not touch the origin.
        assert_relative_eq!((t * r).origin(), Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_associativity() {
        let a = Transform::rotation_x(0.3) * Transform::translation(1.0, 2.0, 3.0);
        let b = Transform::rotation_y(-1.2) * Transform::translation(-0.5, 0.0, 4.0);
        let c = Transform::denavit_hartenberg(0.7, 0.2, 1.5, 0.4);

        let lhs = a.compose(&b).compose(&c);
        let rhs = a.compose(&b.compose(&c));

        assert_relative_eq!(lhs.matrix(), rhs.matrix(), epsilon = 1e-12);
    }

    #[test]
    fn test_frame_orthonormal() {
        let t = Transform::rotation_xyz(0.4, -1.1, 2.3) * Transform::translation(3.0, 1.0, 0.0);
        let frame = t.frame();

        assert_relative_eq!(frame.x_axis.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.y_axis.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.z_axis.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.x_axis.dot(&frame.y_axis), 0.0, epsilon = 1e-12);
        assert_relative_eq!(frame.y_axis.dot(&frame.z_axis), 0.0, epsilon = 1e-12);
        assert_relative_eq!(frame.x_axis.cross(&frame.y_axis), frame.z_axis, epsilon = 1e-12);

        let bottom = t.matrix().row(3).into_owned();
        assert_eq!(bottom[0], 0.0);
        assert_eq!(bottom[1], 0.0);
        assert_eq!(bottom[2], 0.0);
        assert_eq!(bottom[3], 1.0);
    }

    #[test]
    fn test_denavit_hartenberg_planar() {
        let t = Transform::denavit_hartenberg(FRAC_PI_2, 0.0, 2.0, 0.0);

        assert_relative_eq!(t.origin(), Point3::new(0.0, 2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(t.frame().x_axis, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_nan_propagates() {
        let t = Transform::translation(f64::NAN, 0.0, 0.0) * Transform::rotation_z(0.5);

        assert!(t.origin().x.is_nan());
    }
}
