//! Print resolved strings for the active language.
//!
//! Usage:
//!   i18n-strings                        # Every string in the resolved language
//!   i18n-strings --lang fr 3 5          # Strings 3 and 5, French requested
//!   i18n-strings --plus-english         # Append English text for review
//!
//! Optional environment variables:
//! - I18N_LANGUAGE (preferred language code; `--lang` overrides it and must
//!   match a supported language)
//! - I18N_AMBIENT_LOCALE (defaults to LC_ALL / LC_MESSAGES / LANG)
//! - I18N_PERSIST (set to false to skip saving the resolved language)
//! - I18N_PREFERENCE_FILE (defaults to the user config directory)
//! - I18N_PREFERENCE_TTL_DAYS (no expiry by default)

use anyhow::{bail, Context, Result};
use i18n_strings::config::Config;
use i18n_strings::i18n::{Language, LanguageRegistry, Localizer, StringId};
use tracing::{debug, info};

/// Parsed command line.
struct Args {
    language: Option<String>,
    plus_english: bool,
    ids: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        language: None,
        plus_english: false,
        ids: Vec::new(),
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" => {
                args.language = Some(iter.next().context("--lang needs a language code")?);
            }
            "--plus-english" => args.plus_english = true,
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            _ => args.ids.push(arg),
        }
    }

    Ok(args)
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("i18n_strings=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let mut config = Config::from_env()?;
    if let Some(code) = args.language {
        // Unlike I18N_LANGUAGE, a mistyped --lang is reported instead of ignored
        let language = Language::from_code(LanguageRegistry::get(), &code)
            .context("Invalid --lang")?;
        debug!("--lang '{}' matches '{}'", code, language.code());
        config.preferred_language = Some(code);
    }

    // A misordered catalog is fatal: the error ends the process here
    let localizer = Localizer::from_config(&config).context("String catalog failed validation")?;

    let ids: Vec<StringId> = if args.ids.is_empty() {
        (0..localizer.len())
            .map(|i| {
                StringId::from_index(i)
                    .with_context(|| format!("String index {} exceeds the identifier range", i))
            })
            .collect::<Result<_>>()?
    } else {
        args.ids
            .iter()
            .map(|raw| {
                StringId::parse(raw, localizer.len())
                    .with_context(|| format!("Unknown string identifier: {}", raw))
            })
            .collect::<Result<_>>()?
    };

    let served = ids.len();
    for id in ids {
        if args.plus_english {
            println!("{}\t{}", id, localizer.get_string_plus_english(id));
        } else {
            println!("{}\t{}", id, localizer.get_string(id));
        }
    }

    info!(
        "Served {} strings in '{}'",
        served,
        localizer.active_language().code()
    );
    debug!(
        "Localizer metrics: {}",
        serde_json::to_string(&localizer.metrics().report())?
    );

    Ok(())
}
