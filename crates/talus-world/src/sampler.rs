use fastnoise_lite::{FastNoiseLite, NoiseType};
use rand::Rng;

use crate::config::{NoiseLayer, validate_layers};
use crate::error::WorldGenError;

/// Fixed seed for the shared coherent-noise source. Layer variety comes
/// entirely from per-layer scales and drawn phase offsets, so replaying
/// the same offsets reproduces the same heights.
pub const NOISE_SEED: i32 = 1337;

#[derive(Clone, Copy, Debug)]
struct LayerPhase {
    scale: f32,
    height_weight: f32,
    offset_x: f32,
    offset_z: f32,
}

/// Layered 2D height function over one chunk's footprint.
///
/// Owns one Perlin source plus the phase offsets drawn for this build;
/// immutable after construction.
pub struct HeightSampler {
    noise: FastNoiseLite,
    layers: Vec<LayerPhase>,
}

impl HeightSampler {
    /// Validates `layers` and draws `(offset_x, offset_z)` in `[0,1)` for
    /// each layer from `rng`, one x-draw then one z-draw, in layer order.
    pub fn new<R: Rng>(layers: &[NoiseLayer], rng: &mut R) -> Result<Self, WorldGenError> {
        validate_layers(layers)?;
        let phases = layers
            .iter()
            .map(|l| LayerPhase {
                scale: l.scale,
                height_weight: l.height_weight,
                offset_x: rng.gen_range(0.0..1.0),
                offset_z: rng.gen_range(0.0..1.0),
            })
            .collect();
        Ok(Self::from_phases(phases))
    }

    /// Builds a sampler with explicit phase offsets instead of drawing
    /// them. `offsets` pairs up with `layers` by index and must match it
    /// in length.
    pub fn with_phase_offsets(
        layers: &[NoiseLayer],
        offsets: &[(f32, f32)],
    ) -> Result<Self, WorldGenError> {
        validate_layers(layers)?;
        if offsets.len() != layers.len() {
            return Err(WorldGenError::PhaseOffsetCount {
                layers: layers.len(),
                offsets: offsets.len(),
            });
        }
        let phases = layers
            .iter()
            .zip(offsets)
            .map(|(l, &(offset_x, offset_z))| LayerPhase {
                scale: l.scale,
                height_weight: l.height_weight,
                offset_x,
                offset_z,
            })
            .collect();
        Ok(Self::from_phases(phases))
    }

    fn from_phases(layers: Vec<LayerPhase>) -> Self {
        let mut noise = FastNoiseLite::with_seed(NOISE_SEED);
        noise.set_noise_type(Some(NoiseType::Perlin));
        noise.set_frequency(Some(1.0));
        Self { noise, layers }
    }

    /// The phase offsets drawn for this build, in layer order.
    pub fn phase_offsets(&self) -> Vec<(f32, f32)> {
        self.layers
            .iter()
            .map(|l| (l.offset_x, l.offset_z))
            .collect()
    }

    /// Coherent noise remapped to [0,1]. Zero-gradient lattice points map
    /// to the 0.5 midpoint.
    #[inline]
    fn sample01(&self, u: f32, v: f32) -> f32 {
        ((self.noise.get_noise_2d(u, v) + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Terrain height for column `(x, z)` of a `dims = (sx, sy, sz)` chunk:
    /// per layer, `round(sample01((x/sx + ox)·scale, (z/sz + oz)·scale) · sy)`
    /// weighted by `height_weight`, summed over layers.
    pub fn height_for(&self, x: usize, z: usize, dims: (usize, usize, usize)) -> f32 {
        let (sx, sy, sz) = dims;
        let mut height = 0.0f32;
        for l in &self.layers {
            let u = (x as f32 / sx as f32 + l.offset_x) * l.scale;
            let v = (z as f32 / sz as f32 + l.offset_z) * l.scale;
            height += (self.sample01(u, v) * sy as f32).round() * l.height_weight;
        }
        height
    }
}
