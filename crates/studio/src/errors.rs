use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Heightmap error: {0}")]
    Heightmap(#[from] heightmap::HeightmapError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preset error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown command: {0} (type `help` for a list)")]
    UnknownCommand(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("No image: please generate an image first")]
    NoImage,
}

pub type Result<T> = std::result::Result<T, StudioError>;
