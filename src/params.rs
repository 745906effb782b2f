#[cfg(test)]
mod tests;

use crate::error::{ResizeError, Result};
use crate::kernel::Kernel;

/// Selects how source samples are combined into each output sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// Copies the nearest source pixel. Fastest, blocky results.
    Nearest = 0,
    /// Linear interpolation between neighboring pixels.
    Linear = 1,
    /// Catmull-Rom spline resampling.
    CatmullRom = 2,
    /// Lanczos resampling with 3 lobes.
    Lanczos = 3,
}

impl Interpolation {
    /// The reconstruction kernel backing this selector, or `None` for
    /// [`Interpolation::Nearest`], which bypasses the separable resampler.
    #[must_use]
    pub fn kernel(self) -> Option<Kernel> {
        match self {
            Interpolation::Nearest => None,
            Interpolation::Linear => Some(Kernel::Linear),
            Interpolation::CatmullRom => Some(Kernel::CatmullRom),
            Interpolation::Lanczos => Some(Kernel::Lanczos),
        }
    }
}

impl TryFrom<i64> for Interpolation {
    type Error = ResizeError;

    fn try_from(value: i64) -> Result<Self> {
        Ok(match value {
            0 => Self::Nearest,
            1 => Self::Linear,
            2 => Self::CatmullRom,
            3 => Self::Lanczos,
            _ => return Err(ResizeError::UnknownKernel { value }),
        })
    }
}

/// Per-call execution options for the resize entry points.
///
/// Parallelism is an explicit parameter rather than ambient process state,
/// so the core stays deterministic and testable in isolation. Parallel and
/// sequential runs produce bit-identical output: the weight fold for each
/// output sample always walks source indices in ascending order, only whole
/// output rows are distributed across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeOptions {
    /// Distribute output rows across the rayon thread pool.
    pub parallel: bool,
}

impl ResizeOptions {
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
