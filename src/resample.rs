
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::buffer::{PixelBuffer, PixelView};
use crate::kernel::Kernel;

/// One output sample's half-open window into the source axis, covering
/// source indices `[start, start + weights.len())`, with the kernel weight
/// for each tap in ascending index order.
struct Window {
    start: usize,
    weights: SmallVec<[f64; 8]>,
    weight_sum: f64,
}

/// Computes the window for every output index along one axis.
///
/// The window center for output index `out` is the ideal source coordinate
/// `(out + 0.5) / scale - 0.5`. The reach on either side is
/// `ceil(scale * support)`, matching the reference implementation, which
/// scales the kernel support by the forward factor rather than the inverse
/// step. Windows are clamped to `[0, src_len)` and depend only on the
/// output index, so one table serves every row (or column) of a pass.
fn windows(src_len: usize, dest_len: usize, scale: f64, kernel: Kernel) -> Vec<Window> {
    let step = 1.0 / scale;
    let radius = (scale * kernel.support()).ceil();
    (0..dest_len)
        .map(|out| {
            let center = (out as f64 + 0.5) * step - 0.5;
            let start =
                ((center - radius + 0.5).floor() as isize).clamp(0, src_len as isize) as usize;
            let end = ((center + radius).ceil() as isize).clamp(0, src_len as isize) as usize;
            let mut weights = SmallVec::with_capacity(end - start);
            let mut weight_sum = 0.0;
            for i in start..end {
                let w = kernel.weight(i as f64 - center) / scale;
                weights.push(w);
                weight_sum += w;
            }
            Window {
                start,
                weights,
                weight_sum,
            }
        })
        .collect()
}

/// Normalizes an accumulated value and stores it as an 8-bit sample:
/// clamp into `[0, 255]` after adding 0.5, then truncate.
///
/// A zero weight sum cannot occur with the shipped kernels (the window
/// always contains the source sample nearest the window center), but it is
/// guarded rather than left to divide by zero.
fn quantize(value: f64, weight_sum: f64) -> u8 {
    if weight_sum == 0.0 {
        return 0;
    }
    (value / weight_sum + 0.5).clamp(0.0, 255.0) as u8
}

/// The output axis length for a source axis of `len` scaled by `scale`.
/// May be zero for very small factors; empty outputs are valid.
fn scaled_len(len: usize, scale: f64) -> usize {
    (len as f64 * scale).floor() as usize
}

/// Runs `fill_row` once per output row, either sequentially or across the
/// rayon thread pool. Rows are disjoint output regions and every source
/// read goes through an immutable view, so both modes are race-free and
/// bit-identical.
fn for_each_row(data: &mut [u8], row_len: usize, parallel: bool, fill_row: impl Fn(usize, &mut [u8]) + Sync) {
    if parallel {
        data.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| fill_row(y, row));
    } else {
        for (y, row) in data.chunks_mut(row_len).enumerate() {
            fill_row(y, row);
        }
    }
}

/// Resamples along the horizontal axis: a `W x H` source becomes
/// `floor(W * fx) x H`. Each channel of each output pixel is the normalized
/// weighted sum of the source pixels in its window; channels are
/// accumulated independently with no cross-channel coupling.
pub fn resample_horizontal(
    src: PixelView<'_>,
    fx: f64,
    kernel: Kernel,
    parallel: bool,
) -> PixelBuffer {
    let dest_width = scaled_len(src.width(), fx);
    let mut dest = PixelBuffer::new(dest_width, src.height(), src.channels());
    let samples = src.channels().count();
    let row_len = dest_width * samples;
    if row_len == 0 {
        return dest;
    }

    let windows = windows(src.width(), dest_width, fx, kernel);
    let fill_row = |y: usize, row: &mut [u8]| {
        for (x, window) in windows.iter().enumerate() {
            let mut acc = [0.0f64; 4];
            for (k, &w) in window.weights.iter().enumerate() {
                for c in 0..samples {
                    acc[c] += f64::from(src.sample(window.start + k, y, c)) * w;
                }
            }
            for c in 0..samples {
                row[x * samples + c] = quantize(acc[c], window.weight_sum);
            }
        }
    };
    for_each_row(dest.data_mut(), row_len, parallel, fill_row);
    dest
}

/// Resamples along the vertical axis: a `W x H` source becomes
/// `W x floor(H * fy)`. Symmetric to [`resample_horizontal`] with the axes
/// swapped; one window per output row, shared across all columns.
pub fn resample_vertical(
    src: PixelView<'_>,
    fy: f64,
    kernel: Kernel,
    parallel: bool,
) -> PixelBuffer {
    let dest_height = scaled_len(src.height(), fy);
    let mut dest = PixelBuffer::new(src.width(), dest_height, src.channels());
    let samples = src.channels().count();
    let row_len = src.width() * samples;
    if row_len == 0 {
        return dest;
    }

    let windows = windows(src.height(), dest_height, fy, kernel);
    let fill_row = |y: usize, row: &mut [u8]| {
        let window = &windows[y];
        for x in 0..src.width() {
            let mut acc = [0.0f64; 4];
            for (k, &w) in window.weights.iter().enumerate() {
                for c in 0..samples {
                    acc[c] += f64::from(src.sample(x, window.start + k, c)) * w;
                }
            }
            for c in 0..samples {
                row[x * samples + c] = quantize(acc[c], window.weight_sum);
            }
        }
    };
    for_each_row(dest.data_mut(), row_len, parallel, fill_row);
    dest
}

/// Direct nearest-neighbor path: one pass, no intermediate buffer. Each
/// output pixel copies the source pixel at the rounded inverse-mapped
/// coordinate, verbatim.
pub fn resize_nearest(
    src: PixelView<'_>,
    fx: f64,
    fy: f64,
    parallel: bool,
) -> PixelBuffer {
    let dest_width = scaled_len(src.width(), fx);
    let dest_height = scaled_len(src.height(), fy);
    let mut dest = PixelBuffer::new(dest_width, dest_height, src.channels());
    let samples = src.channels().count();
    let row_len = dest_width * samples;
    if row_len == 0 || dest_height == 0 {
        return dest;
    }

    // Source indices depend only on the output coordinate along each axis.
    let src_xs: Vec<usize> = (0..dest_width)
        .map(|x| nearest_index(x, fx, src.width()))
        .collect();
    let fill_row = |y: usize, row: &mut [u8]| {
        let sy = nearest_index(y, fy, src.height());
        for (x, &sx) in src_xs.iter().enumerate() {
            for c in 0..samples {
                row[x * samples + c] = src.sample(sx, sy, c);
            }
        }
    };
    for_each_row(dest.data_mut(), row_len, parallel, fill_row);
    dest
}

/// Rounds an output coordinate back to a source index. Rounding can land
/// one past the last sample (`fx = 3.0` on a 1-wide image maps output 2 to
/// source 1), so the index is clamped into range.
fn nearest_index(out: usize, scale: f64, len: usize) -> usize {
    ((out as f64 / scale).round() as usize).min(len - 1)
}
