use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("the secret is not a valid base64 encoding: {0}")]
    InvalidSecretEncoding(#[from] data_encoding::DecodeError),
    #[error("period must be greater than zero")]
    InvalidPeriod,
    #[error("code length must be greater than zero")]
    InvalidLength,
    #[error("timestamp is out of range for the given period")]
    TimestampOutOfRange,
    #[error("no secret given, pass --secret or set one in the config file")]
    MissingSecret,
    #[error("unable to parse config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
