use std::path::PathBuf;

/// Crate-level error type.
///
/// The windowing core itself never fails under normal misuse: unknown window
/// ids and disallowed transitions are silent no-ops, and out-of-range sizes
/// are clamped. What remains is the unrecoverable construction-time condition
/// (no usable surface) and configuration I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("surface container is unavailable or has empty bounds")]
    SurfaceUnavailable,

    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
