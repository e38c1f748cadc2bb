//! Decay/diffusion pass over the whole trail map.
//!
//! For every cell, independently:
//!
//! ```text
//! average  = mean of the (2k+1)² box around the cell, clipped to the grid
//! diffused = lerp(original, average, clamp(diffuse_factor, 0, 1))
//! result   = diffused * max(0, 1 - decay_factor * delta_time)
//! ```
//!
//! Clipped neighbors are excluded from both the sum and the divisor, so an
//! edge cell averages over fewer samples rather than being zero-padded.
//! Every read comes from the pre-pass trail; results go to the scratch
//! buffer, which is then swapped in.

use slime_core::{GridShape, Rgba, SimulationConfig};

use crate::TrailMaps;

/// Per-tick snapshot of the diffusion settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DiffuseParams {
    pub decay_factor:   f32,
    pub diffuse_factor: f32,
    pub kernel_size:    u32,
    pub delta_time:     f32,
}

impl DiffuseParams {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            decay_factor:   config.decay_factor,
            diffuse_factor: config.diffuse_factor,
            kernel_size:    config.diffuse_kernel_size,
            delta_time:     config.delta_time,
        }
    }

    /// Factor every diffused value is scaled by.  Never negative.
    #[inline]
    pub fn decay_multiplier(&self) -> f32 {
        (1.0 - self.decay_factor * self.delta_time).max(0.0)
    }

    #[inline]
    fn blend(&self) -> f32 {
        self.diffuse_factor.clamp(0.0, 1.0)
    }
}

/// Run one decay/diffusion pass and swap the result into the trail.
///
/// With the `parallel` feature rows are processed on Rayon's thread pool;
/// each row reads only the immutable source buffer, so the result is
/// identical either way.
pub fn diffuse_and_decay(maps: &mut TrailMaps, params: &DiffuseParams) {
    let shape = maps.shape();
    let width = shape.width as usize;
    let (src, dst) = maps.split_mut();

    #[cfg(not(feature = "parallel"))]
    {
        dst.chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| diffuse_row(src, shape, y, row, params));
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        dst.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| diffuse_row(src, shape, y, row, params));
    }

    maps.swap();
}

fn diffuse_row(src: &[Rgba], shape: GridShape, y: usize, row: &mut [Rgba], params: &DiffuseParams) {
    let width = shape.width as usize;
    let k = params.kernel_size as usize;
    let y0 = y.saturating_sub(k);
    let y1 = (y + k).min(shape.height as usize - 1);
    let blend = params.blend();
    let decay = params.decay_multiplier();

    for (x, out) in row.iter_mut().enumerate() {
        let x0 = x.saturating_sub(k);
        let x1 = (x + k).min(width - 1);

        let mut sum = Rgba::ZERO;
        for yy in y0..=y1 {
            let base = yy * width;
            for &c in &src[base + x0..=base + x1] {
                sum += c;
            }
        }
        let samples = ((x1 - x0 + 1) * (y1 - y0 + 1)) as f32;

        let original = src[y * width + x];
        let diffused = original.lerp(sum * samples.recip(), blend);
        *out = diffused * decay;
    }
}
