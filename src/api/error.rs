use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SCHOOLHUB_API_URL is not set")]
    MissingBaseUrl,
    #[error("SCHOOLHUB_API_URL must not be empty")]
    EmptyBaseUrl,
}
