use glam::Vec3;

/// The spline family used to blend the four control points of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineFamily {
    /// Interpolating: the curve passes through its interior control points.
    CatmullRom,
    /// Uniform cubic B-spline. Approximating: the curve smooths over the
    /// control points without generally passing through them.
    BSpline,
}

impl SplineFamily {
    /// Basis weights for the four control points at normalized parameter `t`.
    pub(crate) fn basis(self, t: f32) -> [f32; 4] {
        let t2 = t * t;
        let t3 = t2 * t;
        match self {
            Self::CatmullRom => [
                0.5 * (-t3 + 2.0 * t2 - t),
                0.5 * (3.0 * t3 - 5.0 * t2 + 2.0),
                0.5 * (-3.0 * t3 + 4.0 * t2 + t),
                0.5 * (t3 - t2),
            ],
            Self::BSpline => [
                (-t3 + 3.0 * t2 - 3.0 * t + 1.0) / 6.0,
                (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0,
                (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0,
                t3 / 6.0,
            ],
        }
    }

    /// Blends four control points at normalized parameter `t ∈ [0, 1]`.
    pub(crate) fn blend(self, points: [Vec3; 4], t: f32) -> Vec3 {
        let [w0, w1, w2, w3] = self.basis(t);
        points[0] * w0 + points[1] * w1 + points[2] * w2 + points[3] * w3
    }
}
