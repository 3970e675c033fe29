use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuidelineConfigError {
    #[error(
        "Missing or invalid file extension in guideline config file. It must be `toml`, `yaml`, `yml` or `json`"
    )]
    InvalidFileType,
    #[error("Invalid guideline threshold: {0}")]
    InvalidThreshold(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type GuidelineConfigResult<T> = std::result::Result<T, GuidelineConfigError>;
