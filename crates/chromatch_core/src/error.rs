use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChromatchError {
    #[error("invalid hex color literal {0:?}")]
    InvalidHex(String),

    #[error("palette {0:?} has no colors")]
    EmptyPalette(String),
}

pub type Result<T> = std::result::Result<T, ChromatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hex_message() {
        let err = ChromatchError::InvalidHex("#12345".to_string());
        assert_eq!(err.to_string(), "invalid hex color literal \"#12345\"");
    }

    #[test]
    fn test_empty_palette_message() {
        let err = ChromatchError::EmptyPalette("mytheme".to_string());
        assert_eq!(err.to_string(), "palette \"mytheme\" has no colors");
    }
}
