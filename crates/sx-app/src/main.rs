use anyhow::Result;
use clap::Parser;
use sx_core::config::SoundexConfig;
use sx_phonetic::batch::encode_batch;
use sx_phonetic::encoder::Encoder;

pub mod cli;
pub mod input;
pub mod output;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider les entrées
    cli.validate_inputs()?;

    // 4. Charger la config, puis les overrides CLI (mapping validé ici, avant tout encodage)
    let config = cli.apply_overrides(resolve_config(&cli)?)?;
    let encoder = Encoder::new(config.mapping);
    log::info!("Mapping actif : {}", config.mapping);

    // 5. Mode comparaison
    if cli.compare {
        let rendered = output::render_comparison(
            &encoder,
            [cli.words[0].as_str(), cli.words[1].as_str()],
            &config,
        )?;
        println!("{rendered}");
        return Ok(());
    }

    // 6. Encoder et sérialiser
    let words = input::load_words(&cli)?;
    let codes = encode_batch(&encoder, &words);
    let rendered = output::render(&words, &codes, &config)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Resolve config: --config if the file exists, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<SoundexConfig> {
    if cli.config.exists() {
        sx_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(SoundexConfig::default())
    }
}
