//! Cosine/sine evaluation for the Fourier transforms.
//!
//! The transforms need `cos θ` and `sin θ` of the same angle at every
//! observation and trial frequency. [`TrigKernel::HalfAngleTangent`] gets both
//! from a single `tan(θ/2)`:
//!
//! ```text
//! u = tan(θ / 2)
//! cos θ = (1 − u²) / (1 + u²)
//! sin θ = 2u / (1 + u²)
//! ```
//!
//! The substitution is singular at `θ = π (mod 2π)`, where `u` diverges. Past
//! [`HALF_ANGLE_LIMIT`] the kernel falls back to the direct form.

/// Largest `|tan(θ/2)|` evaluated through the substitution.
pub const HALF_ANGLE_LIMIT: f64 = 1e8;

/// Strategy for evaluating `(cos θ, sin θ)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrigKernel {
    /// `f64::sin_cos`.
    Direct,
    /// Half-angle tangent substitution with a direct fallback near `θ = π`.
    #[default]
    HalfAngleTangent,
}

impl TrigKernel {
    /// `(cos θ, sin θ)` for `angle = θ` in radians.
    #[inline]
    pub fn cos_sin(self, angle: f64) -> (f64, f64) {
        match self {
            TrigKernel::Direct => {
                let (s, c) = angle.sin_cos();
                (c, s)
            }
            TrigKernel::HalfAngleTangent => half_angle_cos_sin(angle),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrigKernel::Direct => "direct",
            TrigKernel::HalfAngleTangent => "half-angle tangent",
        }
    }
}

#[inline]
fn half_angle_cos_sin(angle: f64) -> (f64, f64) {
    let u = (0.5 * angle).tan();
    if !u.is_finite() || u.abs() > HALF_ANGLE_LIMIT {
        let (s, c) = angle.sin_cos();
        return (c, s);
    }
    let u2 = u * u;
    let denom = 1.0 + u2;
    ((1.0 - u2) / denom, 2.0 * u / denom)
}
