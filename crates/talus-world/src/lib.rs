//! Terrain parameters, validation, and the layered height sampler.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod sampler;

pub use config::{ChunkDims, NoiseLayer, TerrainConfig};
pub use error::{ConfigError, WorldGenError};
pub use sampler::HeightSampler;
