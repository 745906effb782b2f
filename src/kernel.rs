
use std::f64::consts::PI;

/// Lobe count of the Lanczos window; the support radius equals this value.
const LANCZOS_LOBES: f64 = 3.0;

/// A reconstruction kernel: a weighting function of signed sample distance
/// with a fixed support radius.
///
/// The set is closed; nearest-neighbor selection has no weight function and
/// is handled by its own direct path in [`crate::resample`]. Kernels are
/// stateless and reusable across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    /// Triangular weight. Smooth but soft results.
    Linear,
    /// Piecewise cubic Hermite spline. Sharper than linear, with possible
    /// mild overshoot at hard edges.
    CatmullRom,
    /// Windowed sinc with 3 lobes. Highest quality of the set.
    Lanczos,
}

impl Kernel {
    /// The distance beyond which [`Kernel::weight`] is exactly zero, in
    /// source-sample units.
    #[must_use]
    pub fn support(self) -> f64 {
        match self {
            Kernel::Linear => 1.0,
            Kernel::CatmullRom => 2.0,
            Kernel::Lanczos => LANCZOS_LOBES,
        }
    }

    /// Evaluates the kernel weight at a signed distance.
    ///
    /// Even-symmetric in `distance`, and exactly `0.0` outside the support
    /// radius, so callers never need to clamp.
    #[must_use]
    pub fn weight(self, distance: f64) -> f64 {
        let d = distance.abs();
        match self {
            Kernel::Linear => {
                if d < 1.0 {
                    1.0 - d
                } else {
                    0.0
                }
            }
            Kernel::CatmullRom => {
                if d < 1.0 {
                    (1.5 * d - 2.5) * d * d + 1.0
                } else if d < 2.0 {
                    ((-0.5 * d + 2.5) * d - 4.0) * d + 2.0
                } else {
                    0.0
                }
            }
            Kernel::Lanczos => {
                if d < LANCZOS_LOBES {
                    sinc(d) * sinc(d / LANCZOS_LOBES)
                } else {
                    0.0
                }
            }
        }
    }
}

/// Normalized sinc, with `sinc(0) = 1`.
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}
