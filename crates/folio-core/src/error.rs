use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Page error: {0}")]
    Page(String),
}

pub type Result<T> = std::result::Result<T, Error>;
