//! Check every supported language's bundle against the default bundle.
//!
//! Usage:
//!   TRANSLATIONS_DIR=public cargo run --bin check-bundles
//!
//! Reads `<TRANSLATIONS_DIR>/translations/<code>.json` for each language and
//! exits with an error if any bundle is missing keys or fails to parse.

use anyhow::{bail, Context, Result};
use site_i18n::config::Config;
use site_i18n::i18n::{BundleValidator, Language, TranslationBundle};
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

fn read_bundle(root: &Path, language: Language) -> Result<TranslationBundle> {
    let path = root
        .join("translations")
        .join(format!("{}.json", language.code()));
    let text = fs::read_to_string(&path).context(format!("Failed to read {}", path.display()))?;

    TranslationBundle::from_json(&text).context(format!("Failed to parse {}", path.display()))
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("check_bundles=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let root = config
        .translations_dir
        .context("TRANSLATIONS_DIR not set")?;
    let root = Path::new(&root);

    let canonical_language = Language::canonical();
    let canonical = read_bundle(root, canonical_language)?;
    info!(
        "Checking bundles against {} ({} keys)",
        canonical_language,
        canonical.leaves().len()
    );

    let mut failed = 0;
    for language in Language::supported() {
        if language == canonical_language {
            continue;
        }

        let bundle = match read_bundle(root, language) {
            Ok(bundle) => bundle,
            Err(e) => {
                error!("{}: {:#}", language, e);
                failed += 1;
                continue;
            }
        };

        let report = BundleValidator::validate(&canonical, &bundle);
        for message in &report.errors {
            error!("{}: {}", language, message);
        }
        for message in &report.warnings {
            warn!("{}: {}", language, message);
        }

        if report.has_errors() {
            failed += 1;
        } else {
            info!("✓ {} ({})", language, language.native_name());
        }
    }

    if failed > 0 {
        bail!("{} bundle(s) failed validation", failed);
    }

    info!("All bundles are complete");
    Ok(())
}
