use std::fmt::Write as _;

use anyhow::Result;
use serde_json::{Map, Value, json};
use sx_core::code::SoundexCode;
use sx_core::config::{OutputFormat, SoundexConfig};
use sx_phonetic::encoder::Encoder;
use sx_phonetic::similarity::{score, sounds_like};

/// Render `(input, code)` pairs in the configured format.
///
/// Text: one `input<TAB>code` line per entry. Json: an array of objects
/// `{"input": ..., "<method>": ...}`.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(words: &[String], codes: &[SoundexCode], config: &SoundexConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render_text(words, codes)),
        OutputFormat::Json => {
            let entries: Vec<Value> = words
                .iter()
                .zip(codes)
                .map(|(w, c)| entry(w, c, &config.method))
                .collect::<Result<_>>()?;
            Ok(serde_json::to_string_pretty(&entries)?)
        }
    }
}

/// Encode two words and render both codes plus the verdict.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_comparison(
    encoder: &Encoder,
    [a, b]: [&str; 2],
    config: &SoundexConfig,
) -> Result<String> {
    let (code_a, code_b) = (encoder.encode_str(a), encoder.encode_str(b));
    let shared = score(encoder, a, b);
    let alike = sounds_like(encoder, a, b);

    match config.format {
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "{a}\t{code_a}")?;
            writeln!(out, "{b}\t{code_b}")?;
            write!(
                out,
                "sounds alike: {} ({shared}/4)",
                if alike { "yes" } else { "no" }
            )?;
            Ok(out)
        }
        OutputFormat::Json => {
            let first = entry(a, &code_a, &config.method)?;
            let second = entry(b, &code_b, &config.method)?;
            let doc = json!({
                "entries": [first, second],
                "sounds_like": alike,
                "shared_positions": shared,
            });
            Ok(serde_json::to_string_pretty(&doc)?)
        }
    }
}

fn render_text(words: &[String], codes: &[SoundexCode]) -> String {
    words
        .iter()
        .zip(codes)
        .map(|(w, c)| format!("{w}\t{c}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn entry(word: &str, code: &SoundexCode, method: &str) -> Result<Value> {
    let mut obj = Map::new();
    obj.insert("input".into(), Value::String(word.to_string()));
    obj.insert(method.to_string(), serde_json::to_value(code)?);
    Ok(Value::Object(obj))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> SoundexCode {
        let c: Vec<char> = s.chars().collect();
        SoundexCode::from_chars([c[0], c[1], c[2], c[3]])
    }

    #[test]
    fn text_is_tab_separated() {
        let words = vec!["Robert".to_string(), "Ashcraft".to_string()];
        let codes = [code("R163"), code("A261")];
        let out = render(&words, &codes, &SoundexConfig::default()).unwrap();
        assert_eq!(out, "Robert\tR163\nAshcraft\tA261");
    }

    #[test]
    fn json_uses_method_as_key() {
        let config = SoundexConfig {
            format: OutputFormat::Json,
            method: "phonetic".into(),
            ..SoundexConfig::default()
        };
        let words = vec!["Tymczak".to_string()];
        let out = render(&words, &[code("T522")], &config).unwrap();

        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!([{ "input": "Tymczak", "phonetic": "T522" }]));
    }

    #[test]
    fn empty_input_renders_empty() {
        let config = SoundexConfig {
            format: OutputFormat::Json,
            ..SoundexConfig::default()
        };
        assert_eq!(render(&[], &[], &SoundexConfig::default()).unwrap(), "");
        assert_eq!(render(&[], &[], &config).unwrap(), "[]");
    }

    #[test]
    fn comparison_text_verdict() {
        // R163 vs R150: initial and first code agree
        let out =
            render_comparison(&Encoder::default(), ["Robert", "Rubin"], &SoundexConfig::default())
                .unwrap();
        assert_eq!(out, "Robert\tR163\nRubin\tR150\nsounds alike: no (2/4)");

        let out = render_comparison(&Encoder::default(), ["Smith", "Smyth"], &SoundexConfig::default())
            .unwrap();
        assert!(out.ends_with("sounds alike: yes (4/4)"));
    }

    #[test]
    fn comparison_json() {
        let config = SoundexConfig {
            format: OutputFormat::Json,
            ..SoundexConfig::default()
        };
        let out = render_comparison(&Encoder::default(), ["Robert", "Rupert"], &config).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["sounds_like"], json!(true));
        assert_eq!(parsed["shared_positions"], json!(4));
        assert_eq!(parsed["entries"][1]["soundex"], json!("R163"));
    }
}
