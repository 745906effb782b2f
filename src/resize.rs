
use crate::buffer::{PixelBuffer, PixelView};
use crate::error::{ResizeError, Result};
use crate::params::{Interpolation, ResizeOptions};
use crate::resample::{resample_horizontal, resample_vertical, resize_nearest};

/// Resizes an image by independent horizontal and vertical scale factors.
///
/// The output is a freshly allocated buffer of
/// `floor(width * fx) x floor(height * fy)` pixels with the same channel
/// count as the source; the source is never mutated. Either output
/// dimension may compute to zero, which yields a valid empty buffer.
///
/// Accepts a [`PixelBuffer`] reference or a [`PixelView`], so sub-regions
/// can be resized without copying them out first.
///
/// # Errors
/// [`ResizeError::InvalidScale`] if either factor is not a finite positive
/// number. Validation happens before any allocation.
///
/// # Examples
/// ```
/// use pixel_resample::{Channels, Interpolation, PixelBuffer, resize};
///
/// let src = PixelBuffer::new(100, 100, Channels::Rgba);
/// let dest = resize(&src, 0.5, 0.5, Interpolation::Lanczos)?;
/// assert_eq!((dest.width(), dest.height()), (50, 50));
/// # Ok::<(), pixel_resample::ResizeError>(())
/// ```
pub fn resize<'a>(
    src: impl Into<PixelView<'a>>,
    fx: f64,
    fy: f64,
    interpolation: Interpolation,
) -> Result<PixelBuffer> {
    resize_with(src, fx, fy, interpolation, ResizeOptions::default())
}

/// [`resize`] with explicit execution options.
///
/// With [`ResizeOptions::parallel`] set, output rows are distributed across
/// the rayon thread pool; the result is bit-identical to the sequential
/// run.
pub fn resize_with<'a>(
    src: impl Into<PixelView<'a>>,
    fx: f64,
    fy: f64,
    interpolation: Interpolation,
    options: ResizeOptions,
) -> Result<PixelBuffer> {
    if !(fx.is_finite() && fx > 0.0 && fy.is_finite() && fy > 0.0) {
        return Err(ResizeError::InvalidScale { fx, fy });
    }
    let src = src.into();
    match interpolation.kernel() {
        None => Ok(resize_nearest(src, fx, fy, options.parallel)),
        Some(kernel) => {
            // Separable resampling: the horizontal pass produces a
            // floor(W * fx) x H intermediate, the vertical pass consumes it.
            let intermediate = resample_horizontal(src, fx, kernel, options.parallel);
            Ok(resample_vertical(
                intermediate.view(),
                fy,
                kernel,
                options.parallel,
            ))
        }
    }
}
