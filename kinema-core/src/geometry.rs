use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Evenly spaced values over the closed interval `[start, end]`.
///
/// Yields nothing for zero samples and only `start` for a single sample.
/// The last sample is exactly `end`.
pub fn linspace(start: f64, end: f64, samples: usize) -> impl Iterator<Item = f64> {
    (0..samples).map(move |i| {
        if i + 1 == samples && samples > 1 {
            end
        } else if samples > 1 {
            lerp(start, end, i as f64 / (samples - 1) as f64)
        } else {
            start
        }
    })
}

/// Plane of operation for a planar mechanism.
///
/// The planar solver works on abstract (u, v) coordinates. The plane maps
/// those onto two scene axes; the third axis stays zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    #[default]
    XY,
    YZ,
    XZ,
}

impl Plane {
    /// Lift a planar point into scene coordinates.
    pub fn embed(&self, point: &Point2<f64>) -> Point3<f64> {
        match self {
            Plane::XY => Point3::new(point.x, point.y, 0.0),
            Plane::YZ => Point3::new(0.0, point.x, point.y),
            Plane::XZ => Point3::new(point.x, 0.0, point.y),
        }
    }

    /// Drop a scene point onto the plane.
    pub fn project(&self, point: &Point3<f64>) -> Point2<f64> {
        match self {
            Plane::XY => Point2::new(point.x, point.y),
            Plane::YZ => Point2::new(point.y, point.z),
            Plane::XZ => Point2::new(point.x, point.z),
        }
    }

    /// Scene axis labels of the planar (u, v) coordinates.
    pub fn labels(&self) -> (&'static str, &'static str) {
        match self {
            Plane::XY => ("X", "Y"),
            Plane::YZ => ("Y", "Z"),
            Plane::XZ => ("X", "Z"),
        }
    }
}

impl std::str::FromStr for Plane {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xy" => Ok(Plane::XY),
            "yz" => Ok(Plane::YZ),
            "xz" => Ok(Plane::XZ),
            _ => Err(Error::InvalidPlane(s.to_string())),
        }
    }
}

impl std::fmt::Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (u, v) = self.labels();
        write!(f, "{}{}", u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace() {
        let values: Vec<f64> = linspace(0.0, 1.0, 5).collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        assert_eq!(linspace(3.0, 7.0, 0).count(), 0);
        assert_eq!(linspace(3.0, 7.0, 1).collect::<Vec<_>>(), vec![3.0]);
        assert_eq!(linspace(880.0, 418.5, 120).last(), Some(418.5));
    }

    #[test]
    fn test_plane_roundtrip() {
        let point = Point2::new(1.5, -2.0);

        for plane in [Plane::XY, Plane::YZ, Plane::XZ] {
            assert_eq!(plane.project(&plane.embed(&point)), point);
        }

        assert_eq!(Plane::YZ.embed(&point), Point3::new(0.0, 1.5, -2.0));
    }

    #[test]
    fn test_plane_parse() {
        assert_eq!("YZ".parse::<Plane>(), Ok(Plane::YZ));
        assert_eq!(" xz ".parse::<Plane>(), Ok(Plane::XZ));
        assert!("zz".parse::<Plane>().is_err());
        assert_eq!(Plane::XZ.to_string(), "XZ");
    }
}
