//! The two trail buffers.
//!
//! # Double buffering
//!
//! Diffusion reads every cell's neighborhood from the trail as it stood
//! before the pass and writes the result somewhere else.  `TrailMaps` owns
//! both buffers side by side; after each pass the roles are exchanged with a
//! pointer swap instead of a copy:
//!
//! ```ignore
//! let (src, dst) = maps.split_mut();   // &[Rgba], &mut [Rgba]
//! blur(src, dst);
//! maps.swap();                         // dst is now the readable trail
//! ```
//!
//! Because the swap takes `&mut self`, nothing can hold a read of the trail
//! while a pass is writing it.

use slime_core::{GridShape, Rgba};

use crate::{GridError, GridResult};

/// Which of the two buffers an accessor addresses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BufferKind {
    /// The readable trail: sensed by agents, deposited into, shown by hosts.
    Trail,
    /// Output of the diffusion pass in flight; becomes `Trail` on swap.
    Scratch,
}

/// Two equally sized row-major color buffers.
///
/// Cell `(x, y)` lives at index `y * width + x` in both buffers.  Accessors
/// do no bounds handling beyond slice indexing: passing a coordinate outside
/// the grid panics.
#[derive(Clone, Debug)]
pub struct TrailMaps {
    shape:   GridShape,
    trail:   Vec<Rgba>,
    scratch: Vec<Rgba>,
}

impl TrailMaps {
    /// Allocate two zeroed buffers of `shape`.
    pub fn new(shape: GridShape) -> GridResult<Self> {
        if shape.is_degenerate() {
            return Err(GridError::ZeroDimension(shape));
        }
        let cells = shape.cell_count();
        Ok(Self {
            shape,
            trail:   vec![Rgba::ZERO; cells],
            scratch: vec![Rgba::ZERO; cells],
        })
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Replace both buffers with fresh zeroed ones of `shape`.
    ///
    /// Old contents are discarded even when `shape` is unchanged.
    pub fn resize(&mut self, shape: GridShape) -> GridResult<()> {
        *self = Self::new(shape)?;
        Ok(())
    }

    /// Zero both buffers in place, keeping their allocations.
    pub fn clear(&mut self) {
        self.trail.fill(Rgba::ZERO);
        self.scratch.fill(Rgba::ZERO);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        self.shape.cell_id(x, y).index()
    }

    #[inline]
    fn buffer(&self, kind: BufferKind) -> &[Rgba] {
        match kind {
            BufferKind::Trail   => &self.trail,
            BufferKind::Scratch => &self.scratch,
        }
    }

    #[inline]
    fn buffer_mut(&mut self, kind: BufferKind) -> &mut [Rgba] {
        match kind {
            BufferKind::Trail   => &mut self.trail,
            BufferKind::Scratch => &mut self.scratch,
        }
    }

    #[inline]
    pub fn get(&self, kind: BufferKind, x: u32, y: u32) -> Rgba {
        self.buffer(kind)[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, kind: BufferKind, x: u32, y: u32, color: Rgba) {
        let i = self.index(x, y);
        self.buffer_mut(kind)[i] = color;
    }

    /// Add `color` onto the trail cell at `(x, y)`.
    #[inline]
    pub fn deposit(&mut self, x: u32, y: u32, color: Rgba) {
        let i = self.index(x, y);
        self.trail[i] += color;
    }

    /// Read-only view of the current trail, row-major.
    #[inline]
    pub fn trail(&self) -> &[Rgba] {
        &self.trail
    }

    /// Mutable view of the current trail, row-major.
    #[inline]
    pub fn trail_mut(&mut self) -> &mut [Rgba] {
        &mut self.trail
    }

    /// Borrow the trail for reading and the scratch buffer for writing.
    #[inline]
    pub fn split_mut(&mut self) -> (&[Rgba], &mut [Rgba]) {
        (&self.trail, &mut self.scratch)
    }

    /// Exchange the buffers: scratch becomes the readable trail.
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.trail, &mut self.scratch);
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Sum of `weight()` over every trail cell.
    pub fn total_intensity(&self) -> f64 {
        self.trail.iter().map(|c| c.weight() as f64).sum()
    }

    /// Largest `weight()` of any trail cell.
    pub fn max_intensity(&self) -> f32 {
        self.trail.iter().map(|c| c.weight()).fold(0.0, f32::max)
    }
}
