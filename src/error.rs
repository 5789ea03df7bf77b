use thiserror::Error;

pub type GearMapResult<T> = Result<T, GearMapError>;

#[derive(Debug, Error)]
pub enum GearMapError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
