/// Errors raised while setting a game up.
///
/// The per-frame simulation never fails; only construction-time work
/// (parsing a map, decoding the viewmodel image, terminal I/O) does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("map line {line}, column {column}: unexpected glyph {found:?}")]
    MapParse {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("malformed map: {0}")]
    MapShape(String),
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
