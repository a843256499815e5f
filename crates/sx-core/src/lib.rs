/// Mapping table, output code and configuration shared by the sndx workspace.
///
/// Cette crate ne contient aucun algorithme : seulement les types validés
/// que l'encodeur (`sx-phonetic`) et le binaire (`sx-app`) se partagent.

pub mod code;
pub mod config;
pub mod error;
pub mod mapping;

pub use code::SoundexCode;
pub use config::SoundexConfig;
pub use error::CoreError;
pub use mapping::{DEFAULT_MAPPING, SoundexMapping};
