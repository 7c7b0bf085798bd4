use std::path::PathBuf;

use thiserror::Error;

/// Input validation failures. All are detected before any generation or
/// buffer writes begin; none are retried.
#[derive(Debug, Error)]
pub enum WorldGenError {
    #[error("chunk dimension {axis} must be positive, got {value}")]
    InvalidDimension { axis: char, value: i32 },
    #[error("noise layer {layer}: {name} = {value} outside ({min}, {max}]")]
    InvalidParameter {
        layer: usize,
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("chunk of {sx}x{sy}x{sz} cells exceeds addressable memory")]
    ResourceExhausted { sx: i32, sy: i32, sz: i32 },
    #[error("{offsets} phase offset pair(s) supplied for {layers} layer(s)")]
    PhaseOffsetCount { layers: usize, offsets: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
