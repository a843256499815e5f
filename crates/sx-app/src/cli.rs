use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sx_core::config::{OutputFormat, SoundexConfig};

/// sndx — empreintes phonétiques Soundex.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Mots à encoder. Sans mot ni --file, lecture sur l'entrée standard.
    pub words: Vec<String>,

    /// Fichier d'entrée : un mot par ligne.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Fichier de configuration TOML. Défaut : sndx.toml.
    #[arg(short, long, default_value = "sndx.toml")]
    pub config: PathBuf,

    /// Table de 26 codes A–Z (remplace celle de la config).
    #[arg(long)]
    pub mapping: Option<String>,

    /// Format de sortie : text, json.
    #[arg(long)]
    pub format: Option<String>,

    /// Nom de la méthode dans la sortie JSON.
    #[arg(long)]
    pub method: Option<String>,

    /// Comparer exactement deux mots.
    #[arg(long, default_value_t = false)]
    pub compare: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that the input flags are consistent.
    ///
    /// # Errors
    /// Returns an error if words and `--file` are both given, or if
    /// `--compare` is not given exactly two words.
    pub fn validate_inputs(&self) -> anyhow::Result<()> {
        if self.file.is_some() && !self.words.is_empty() {
            anyhow::bail!("Mots et --file sont exclusifs. Spécifiez l'un OU l'autre.");
        }
        if self.compare && self.words.len() != 2 {
            anyhow::bail!(
                "--compare attend exactement deux mots ({} fournis).",
                self.words.len()
            );
        }
        Ok(())
    }

    /// Apply the command-line overrides on top of a loaded config.
    ///
    /// # Errors
    /// Returns an error if `--mapping` is not 26 characters long, `--format`
    /// is unknown or the resulting config is invalid.
    pub fn apply_overrides(&self, mut config: SoundexConfig) -> anyhow::Result<SoundexConfig> {
        if let Some(ref mapping) = self.mapping {
            config
                .set_mapping(mapping)
                .with_context(|| format!("--mapping \"{mapping}\""))?;
        }
        if let Some(ref format) = self.format {
            config.format = format.parse::<OutputFormat>()?;
        }
        if let Some(ref method) = self.method {
            config.method.clone_from(method);
        }
        config.validate()?;
        Ok(config)
    }
}
