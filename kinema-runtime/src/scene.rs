use kinema_core::nalgebra::Point3;
use kinema_core::Frame;

/// Length of the axes when a frame is drawn.
pub const FRAME_AXIS_SCALE: f64 = 2.0;

/// Drawable element of a scene.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Straight line, such as a link.
    Segment {
        label: String,
        from: Point3<f64>,
        to: Point3<f64>,
    },
    /// Marker on a joint or a point of interest.
    Point {
        label: String,
        position: Point3<f64>,
    },
    /// Coordinate frame with its three axes.
    Frame { label: String, frame: Frame },
    /// Filled quadrilateral.
    Quad {
        label: String,
        corners: [Point3<f64>; 4],
    },
    /// Position the mechanism is asked to reach.
    Target {
        label: String,
        position: Point3<f64>,
    },
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Segment { .. } => "segment",
            Primitive::Point { .. } => "point",
            Primitive::Frame { .. } => "frame",
            Primitive::Quad { .. } => "quad",
            Primitive::Target { .. } => "target",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Primitive::Segment { label, .. }
            | Primitive::Point { label, .. }
            | Primitive::Frame { label, .. }
            | Primitive::Quad { label, .. }
            | Primitive::Target { label, .. } => label.as_str(),
        }
    }

    /// Points that define the primitive.
    ///
    /// A frame yields its origin followed by the tips of its X, Y and Z
    /// axes drawn at [`FRAME_AXIS_SCALE`].
    pub fn vertices(&self) -> Vec<Point3<f64>> {
        match self {
            Primitive::Segment { from, to, .. } => vec![*from, *to],
            Primitive::Point { position, .. } | Primitive::Target { position, .. } => {
                vec![*position]
            }
            Primitive::Frame { frame, .. } => vec![
                frame.origin,
                frame.origin + frame.x_axis * FRAME_AXIS_SCALE,
                frame.origin + frame.y_axis * FRAME_AXIS_SCALE,
                frame.origin + frame.z_axis * FRAME_AXIS_SCALE,
            ],
            Primitive::Quad { corners, .. } => corners.to_vec(),
        }
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<8} {:<12}", self.kind(), self.label())?;

        if let Primitive::Frame { frame, .. } = self {
            return write!(f, " {}", frame);
        }

        for vertex in self.vertices() {
            write!(f, " [{:.2}, {:.2}, {:.2}]", vertex.x, vertex.y, vertex.z)?;
        }

        Ok(())
    }
}

/// Everything drawn in a single animation frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    index: usize,
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            primitives: Vec::new(),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Find the first primitive with this label.
    pub fn find(&self, label: &str) -> Option<&Primitive> {
        self.primitives
            .iter()
            .find(|primitive| primitive.label() == label)
    }

    pub fn push(&mut self, primitive: Primitive) -> &mut Self {
        self.primitives.push(primitive);
        self
    }

    pub fn add_segment(&mut self, label: impl ToString, from: Point3<f64>, to: Point3<f64>) -> &mut Self {
        self.push(Primitive::Segment {
            label: label.to_string(),
            from,
            to,
        })
    }

    pub fn add_point(&mut self, label: impl ToString, position: Point3<f64>) -> &mut Self {
        self.push(Primitive::Point {
            label: label.to_string(),
            position,
        })
    }

    pub fn add_frame(&mut self, label: impl ToString, frame: Frame) -> &mut Self {
        self.push(Primitive::Frame {
            label: label.to_string(),
            frame,
        })
    }

    pub fn add_quad(&mut self, label: impl ToString, corners: [Point3<f64>; 4]) -> &mut Self {
        self.push(Primitive::Quad {
            label: label.to_string(),
            corners,
        })
    }

    pub fn add_target(&mut self, label: impl ToString, position: Point3<f64>) -> &mut Self {
        self.push(Primitive::Target {
            label: label.to_string(),
            position,
        })
    }
}
