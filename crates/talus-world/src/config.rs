use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, WorldGenError};

/// Valid range for `NoiseLayer::scale`: lower bound exclusive, upper inclusive.
pub const SCALE_RANGE: (f32, f32) = (0.1, 5.0);
/// Valid range for `NoiseLayer::height_weight`: lower bound exclusive, upper inclusive.
pub const HEIGHT_WEIGHT_RANGE: (f32, f32) = (0.1, 1.0);

/// Chunk voxel-grid extents. All three must be positive.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct ChunkDims {
    #[serde(default = "default_dim")]
    pub sx: i32,
    #[serde(default = "default_dim")]
    pub sy: i32,
    #[serde(default = "default_dim")]
    pub sz: i32,
}

fn default_dim() -> i32 {
    16
}

impl Default for ChunkDims {
    fn default() -> Self {
        Self {
            sx: default_dim(),
            sy: default_dim(),
            sz: default_dim(),
        }
    }
}

impl ChunkDims {
    pub const fn new(sx: i32, sy: i32, sz: i32) -> Self {
        Self { sx, sy, sz }
    }

    /// Checks all extents are positive and returns them as usizes.
    pub fn validate(&self) -> Result<(usize, usize, usize), WorldGenError> {
        for (axis, value) in [('x', self.sx), ('y', self.sy), ('z', self.sz)] {
            if value <= 0 {
                return Err(WorldGenError::InvalidDimension { axis, value });
            }
        }
        Ok((self.sx as usize, self.sy as usize, self.sz as usize))
    }

    /// Cell count, or `None` when an extent is negative or the product
    /// overflows `usize`.
    #[inline]
    pub fn checked_volume(&self) -> Option<usize> {
        let sx = usize::try_from(self.sx).ok()?;
        let sy = usize::try_from(self.sy).ok()?;
        let sz = usize::try_from(self.sz).ok()?;
        sx.checked_mul(sy)?.checked_mul(sz)
    }
}

/// One coherent-noise contribution to the terrain height field.
///
/// Layer heights are summed, not blended, so a low-frequency layer can
/// carry macro relief while a high-frequency layer adds detail on top.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct NoiseLayer {
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default = "default_height_weight")]
    pub height_weight: f32,
}

fn default_scale() -> f32 {
    1.6
}

fn default_height_weight() -> f32 {
    0.8
}

impl Default for NoiseLayer {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            height_weight: default_height_weight(),
        }
    }
}

impl NoiseLayer {
    pub const fn new(scale: f32, height_weight: f32) -> Self {
        Self {
            scale,
            height_weight,
        }
    }

    pub fn validate(&self, layer: usize) -> Result<(), WorldGenError> {
        let checks = [
            ("scale", self.scale, SCALE_RANGE),
            ("height_weight", self.height_weight, HEIGHT_WEIGHT_RANGE),
        ];
        for (name, value, (min, max)) in checks {
            if !(value > min && value <= max) || !value.is_finite() {
                return Err(WorldGenError::InvalidParameter {
                    layer,
                    name,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// Validates every layer in order; the first violation wins.
pub fn validate_layers(layers: &[NoiseLayer]) -> Result<(), WorldGenError> {
    for (i, layer) in layers.iter().enumerate() {
        layer.validate(i)?;
    }
    Ok(())
}

/// TOML-loadable terrain build parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct TerrainConfig {
    #[serde(default)]
    pub dims: ChunkDims,
    #[serde(default = "default_layers")]
    pub layers: Vec<NoiseLayer>,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_layers() -> Vec<NoiseLayer> {
    vec![NoiseLayer::new(1.6, 0.8), NoiseLayer::new(4.0, 0.25)]
}

fn default_seed() -> u64 {
    0
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            dims: ChunkDims::default(),
            layers: default_layers(),
            seed: default_seed(),
        }
    }
}

impl TerrainConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
