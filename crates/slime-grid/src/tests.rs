//! Unit tests for slime-grid.

#[cfg(test)]
mod maps {
    use slime_core::{GridShape, Rgba};

    use crate::{BufferKind, TrailMaps};

    #[test]
    fn new_is_zeroed() {
        let maps = TrailMaps::new(GridShape::new(3, 2)).unwrap();
        for y in 0..2 {
            for x in 0..3 {
                assert!(maps.get(BufferKind::Trail, x, y).is_zero());
                assert!(maps.get(BufferKind::Scratch, x, y).is_zero());
            }
        }
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(TrailMaps::new(GridShape::new(0, 4)).is_err());
        assert!(TrailMaps::new(GridShape::new(4, 0)).is_err());
    }

    #[test]
    fn clear_zeroes_every_cell() {
        for (w, h) in [(1, 1), (2, 7), (16, 9)] {
            let mut maps = TrailMaps::new(GridShape::new(w, h)).unwrap();
            for y in 0..h {
                for x in 0..w {
                    maps.set(BufferKind::Trail, x, y, Rgba::WHITE);
                    maps.set(BufferKind::Scratch, x, y, Rgba::WHITE);
                }
            }
            maps.clear();
            for y in 0..h {
                for x in 0..w {
                    assert!(maps.get(BufferKind::Trail, x, y).is_zero(), "{w}x{h} ({x},{y})");
                    assert!(maps.get(BufferKind::Scratch, x, y).is_zero(), "{w}x{h} ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn set_and_get_address_separate_buffers() {
        let mut maps = TrailMaps::new(GridShape::new(2, 2)).unwrap();
        maps.set(BufferKind::Scratch, 1, 0, Rgba::WHITE);
        assert!(maps.get(BufferKind::Trail, 1, 0).is_zero());
        assert_eq!(maps.get(BufferKind::Scratch, 1, 0), Rgba::WHITE);
    }

    #[test]
    fn deposit_is_additive() {
        let mut maps = TrailMaps::new(GridShape::new(2, 2)).unwrap();
        let c = Rgba::new(0.5, 0.25, 0.0, 1.0);
        maps.deposit(1, 1, c);
        maps.deposit(1, 1, c);
        assert_eq!(maps.get(BufferKind::Trail, 1, 1), Rgba::new(1.0, 0.5, 0.0, 2.0));
    }

    #[test]
    fn swap_exchanges_roles() {
        let mut maps = TrailMaps::new(GridShape::new(1, 1)).unwrap();
        maps.set(BufferKind::Scratch, 0, 0, Rgba::WHITE);
        maps.swap();
        assert_eq!(maps.get(BufferKind::Trail, 0, 0), Rgba::WHITE);
        assert!(maps.get(BufferKind::Scratch, 0, 0).is_zero());
    }

    #[test]
    fn resize_recreates_both_buffers() {
        let mut maps = TrailMaps::new(GridShape::new(2, 2)).unwrap();
        maps.set(BufferKind::Trail, 0, 0, Rgba::WHITE);
        maps.resize(GridShape::new(4, 3)).unwrap();
        assert_eq!(maps.shape(), GridShape::new(4, 3));
        assert_eq!(maps.trail().len(), 12);
        assert!(maps.get(BufferKind::Trail, 0, 0).is_zero());

        maps.set(BufferKind::Trail, 0, 0, Rgba::WHITE);
        maps.resize(GridShape::new(4, 3)).unwrap();
        assert!(maps.get(BufferKind::Trail, 0, 0).is_zero());
    }

    #[test]
    #[should_panic]
    fn out_of_range_access_panics() {
        let maps = TrailMaps::new(GridShape::new(2, 2)).unwrap();
        let _ = maps.get(BufferKind::Trail, 0, 2);
    }

    #[test]
    fn intensity_statistics() {
        let mut maps = TrailMaps::new(GridShape::new(2, 1)).unwrap();
        maps.set(BufferKind::Trail, 0, 0, Rgba::new(1.0, 1.0, 1.0, 1.0));
        maps.set(BufferKind::Trail, 1, 0, Rgba::new(0.5, 0.0, 0.0, 0.0));
        assert!((maps.total_intensity() - 3.5).abs() < 1e-9);
        assert_eq!(maps.max_intensity(), 3.0);
    }
}

#[cfg(test)]
mod diffuse {
    use slime_core::{GridShape, Rgba};

    use crate::{diffuse_and_decay, BufferKind, DiffuseParams, TrailMaps};

    fn params(decay: f32, kernel: u32) -> DiffuseParams {
        DiffuseParams {
            decay_factor:   decay,
            diffuse_factor: 1.0,
            kernel_size:    kernel,
            delta_time:     1.0,
        }
    }

    fn patterned(shape: GridShape) -> TrailMaps {
        let mut maps = TrailMaps::new(shape).unwrap();
        for y in 0..shape.height {
            for x in 0..shape.width {
                let v = (x * 7 + y * 13) as f32 * 0.1;
                maps.set(BufferKind::Trail, x, y, Rgba::new(v, v * 0.5, 0.0, 1.0));
            }
        }
        maps
    }

    #[test]
    fn zero_decay_zero_kernel_is_identity() {
        let shape = GridShape::new(5, 4);
        let mut maps = patterned(shape);
        let before = maps.trail().to_vec();
        diffuse_and_decay(&mut maps, &params(0.0, 0));
        assert_eq!(maps.trail(), before.as_slice());
    }

    #[test]
    fn corner_cell_averages_over_clipped_neighborhood() {
        let mut maps = TrailMaps::new(GridShape::new(2, 2)).unwrap();
        maps.set(BufferKind::Trail, 0, 0, Rgba::new(1.0, 0.0, 0.0, 0.0));
        diffuse_and_decay(&mut maps, &params(0.0, 1));
        // Every cell's 3×3 box clips to the whole 2×2 grid: 4 samples, not 9.
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(maps.get(BufferKind::Trail, x, y).r, 0.25, "cell ({x},{y})");
            }
        }
    }

    #[test]
    fn edge_cell_uses_six_samples() {
        let mut maps = TrailMaps::new(GridShape::new(3, 3)).unwrap();
        maps.set(BufferKind::Trail, 1, 0, Rgba::new(6.0, 0.0, 0.0, 0.0));
        diffuse_and_decay(&mut maps, &params(0.0, 1));
        // (1,0) sees a 3×2 clipped box; the centre (1,1) sees the full 3×3.
        assert!((maps.get(BufferKind::Trail, 1, 0).r - 1.0).abs() < 1e-6);
        assert!((maps.get(BufferKind::Trail, 1, 1).r - 6.0 / 9.0).abs() < 1e-6);
        // (0,2) and (2,2) are out of reach of (1,0).
        assert_eq!(maps.get(BufferKind::Trail, 0, 2).r, 0.0);
        assert_eq!(maps.get(BufferKind::Trail, 2, 2).r, 0.0);
    }

    #[test]
    fn decay_scales_values() {
        let mut maps = TrailMaps::new(GridShape::new(1, 1)).unwrap();
        maps.set(BufferKind::Trail, 0, 0, Rgba::new(2.0, 0.0, 0.0, 0.0));
        let p = DiffuseParams { delta_time: 0.5, ..params(1.0, 0) };
        diffuse_and_decay(&mut maps, &p);
        assert!((maps.get(BufferKind::Trail, 0, 0).r - 1.0).abs() < 1e-6);
    }

    #[test]
    fn decay_multiplier_never_negative() {
        let p = params(5.0, 0);
        assert_eq!(p.decay_multiplier(), 0.0);

        let mut maps = TrailMaps::new(GridShape::new(2, 1)).unwrap();
        maps.set(BufferKind::Trail, 0, 0, Rgba::WHITE);
        diffuse_and_decay(&mut maps, &p);
        assert!(maps.trail().iter().all(|c| c.is_zero()));
    }

    #[test]
    fn diffuse_factor_blends_toward_average() {
        let mut maps = TrailMaps::new(GridShape::new(2, 1)).unwrap();
        maps.set(BufferKind::Trail, 0, 0, Rgba::new(1.0, 0.0, 0.0, 0.0));
        let p = DiffuseParams { diffuse_factor: 0.5, ..params(0.0, 1) };
        diffuse_and_decay(&mut maps, &p);
        // average = 0.5 for both cells; halfway from original toward it.
        assert!((maps.get(BufferKind::Trail, 0, 0).r - 0.75).abs() < 1e-6);
        assert!((maps.get(BufferKind::Trail, 1, 0).r - 0.25).abs() < 1e-6);
    }

    #[test]
    fn zero_diffuse_factor_only_decays() {
        let shape = GridShape::new(4, 4);
        let mut maps = patterned(shape);
        let before = maps.trail().to_vec();
        let p = DiffuseParams { diffuse_factor: 0.0, delta_time: 0.5, ..params(1.0, 2) };
        diffuse_and_decay(&mut maps, &p);
        for (after, before) in maps.trail().iter().zip(&before) {
            assert!((after.r - before.r * 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn diffusion_conserves_mass_on_interior_blob() {
        let mut maps = TrailMaps::new(GridShape::new(9, 9)).unwrap();
        maps.set(BufferKind::Trail, 4, 4, Rgba::new(9.0, 0.0, 0.0, 0.0));
        diffuse_and_decay(&mut maps, &params(0.0, 1));
        let total: f32 = maps.trail().iter().map(|c| c.r).sum();
        assert!((total - 9.0).abs() < 1e-4, "got {total}");
    }

    #[test]
    fn large_kernel_covers_whole_grid() {
        let mut maps = TrailMaps::new(GridShape::new(3, 2)).unwrap();
        maps.set(BufferKind::Trail, 2, 1, Rgba::new(6.0, 0.0, 0.0, 0.0));
        diffuse_and_decay(&mut maps, &params(0.0, 50));
        assert!(maps.trail().iter().all(|c| (c.r - 1.0).abs() < 1e-6));
    }
}
