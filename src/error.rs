use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Bad flag table: {0}")]
    BadFlagTable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
