use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Mapping table does not hold exactly one code per letter A–Z.
    #[error("Soundex mapping must have 26 characters (got {len})")]
    MappingLength {
        /// Number of characters actually supplied.
        len: usize,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Unsupported output format.
    #[error("Format non supporté : {format}")]
    UnsupportedFormat {
        /// The format string that is unsupported.
        format: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_length_message_names_expected_size() {
        let err = CoreError::MappingLength { len: 25 };
        let msg = err.to_string();
        assert!(msg.contains("26 characters"));
        assert!(msg.contains("25"));
    }
}
