use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::mapping::SoundexMapping;

/// Configuration complète de l'encodeur et de la sortie.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine ; la
/// table de correspondance est validée au chargement, jamais pendant
/// l'encodage.
///
/// # Example
/// ```
/// use sx_core::config::{OutputFormat, SoundexConfig};
/// let config = SoundexConfig::default();
/// assert_eq!(config.format, OutputFormat::Text);
/// assert_eq!(config.method, "soundex");
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SoundexConfig {
    // === Encodeur ===
    /// Table A–Z, déjà validée.
    pub mapping: SoundexMapping,

    // === Sortie ===
    /// "Text" | "Json"
    pub format: OutputFormat,
    /// Nom de la méthode, utilisé comme clé dans la sortie JSON.
    pub method: String,
}

/// Output format consumed by the serialization front-end.
///
/// # Example
/// ```
/// use sx_core::config::OutputFormat;
/// let f: OutputFormat = "json".parse().unwrap();
/// assert_eq!(f, OutputFormat::Json);
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `input<TAB>code` line per entry.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CoreError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Default method name reported alongside each code.
pub const DEFAULT_METHOD: &str = "soundex";

impl Default for SoundexConfig {
    fn default() -> Self {
        Self {
            mapping: SoundexMapping::default(),
            format: OutputFormat::Text,
            method: DEFAULT_METHOD.to_string(),
        }
    }
}

impl SoundexConfig {
    /// Replace the mapping with its textual form, validating it first.
    ///
    /// # Errors
    /// Returns [`CoreError::MappingLength`] if `text` is not 26 characters
    /// long; the current mapping is then left untouched.
    pub fn set_mapping(&mut self, text: &str) -> Result<(), CoreError> {
        self.mapping = SoundexMapping::parse(text)?;
        Ok(())
    }

    /// Reject values that parsed but cannot be used.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if the method name is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.method.trim().is_empty() {
            return Err(CoreError::Config("method ne peut pas être vide".into()));
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    encoder: Option<EncoderSection>,
    output: Option<OutputSection>,
}

/// Encoder section, all fields optional for partial override.
#[derive(Deserialize)]
struct EncoderSection {
    mapping: Option<String>,
}

/// Output section, all fields optional.
#[derive(Deserialize)]
struct OutputSection {
    format: Option<OutputFormat>,
    method: Option<String>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the TOML is malformed, the mapping is not 26
/// characters long or the method name is blank.
///
/// # Example
/// ```
/// use sx_core::config::{parse_config, OutputFormat};
/// let config = parse_config("[output]\nformat = \"Json\"").unwrap();
/// assert_eq!(config.format, OutputFormat::Json);
/// assert_eq!(config.method, "soundex");
/// ```
pub fn parse_config(content: &str) -> Result<SoundexConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = SoundexConfig::default();

    if let Some(e) = file.encoder {
        if let Some(v) = e.mapping {
            config
                .set_mapping(&v)
                .with_context(|| format!("[encoder] mapping = \"{v}\""))?;
        }
    }

    if let Some(o) = file.output {
        if let Some(v) = o.format {
            config.format = v;
        }
        if let Some(v) = o.method {
            config.method = v;
        }
    }

    config.validate()?;
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
/// ```no_run
/// use sx_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("sndx.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<SoundexConfig> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let config =
        parse_config(&content).with_context(|| format!("Config invalide dans {}", path.display()))?;

    log::debug!(
        "Config chargée depuis {} (mapping {}, format {:?})",
        path.display(),
        config.mapping,
        config.format
    );
    Ok(config)
}
