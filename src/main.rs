//! Preview how a page localizes, without a browser.
//!
//! Usage:
//!   cargo run -- /es/plans                     # Resolve and load for a page
//!   cargo run -- /es/plans hero.title nav.home # Also look up keys
//!   cargo run -- /es/plans --switch de         # Show the language-switch target
//!
//! Optional environment variables:
//! - SITE_URL (defaults to http://localhost:8000)
//! - TRANSLATIONS_DIR (read bundles from disk instead of HTTP)
//! - BROWSER_LOCALE (falls back to LC_ALL, then LANG)
//! - REQUEST_TIMEOUT_SECS (defaults to 10)

use anyhow::{bail, Context, Result};
use reqwest::Url;
use site_i18n::config::Config;
use site_i18n::dom::Document;
use site_i18n::i18n::{BundleSource, FsSource, HttpSource, I18nSession, Navigator, PageContext};
use tracing::{info, warn};

/// Prints the switch target instead of leaving the page.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&mut self, url: Url) {
        println!("Switch target:   {}", url);
    }
}

struct Args {
    page: String,
    switch_to: Option<String>,
    keys: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut page = None;
    let mut switch_to = None;
    let mut keys = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--switch" => {
                switch_to = Some(args.next().context("--switch needs a language code")?);
            }
            _ if page.is_none() => page = Some(arg),
            _ => keys.push(arg),
        }
    }

    let Some(page) = page else {
        bail!("Usage: site-i18n <page-path-or-url> [--switch <code>] [key...]");
    };

    Ok(Args {
        page,
        switch_to,
        keys,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_i18n=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let args = parse_args()?;

    let page = PageContext::new(config.page_url(&args.page)?, config.browser_locale.clone());
    info!("Previewing {}", page.url);

    let source: Box<dyn BundleSource> = match &config.translations_dir {
        Some(dir) => {
            info!("Reading bundles from {}", dir);
            Box::new(FsSource::new(dir, page.url.path()))
        }
        None => Box::new(
            HttpSource::new(page.url.clone(), config.request_timeout())
                .context("Failed to build HTTP client")?,
        ),
    };

    let mut document = Document::new();
    let session = I18nSession::initialize(&page, &mut document, source.as_ref())
        .await
        .context("Failed to load translations")?;

    let active = session.current_language();
    println!("Language:        {} ({})", active, active.native_name());
    println!("Bundle language: {}", session.bundle_language());
    if !document.title().is_empty() {
        println!("Title:           {}", document.title());
    }
    if let Some(description) = session.store().bundle().meta().description {
        println!("Description:     {}", description);
    }

    for key in &args.keys {
        println!("{} = {}", key, session.t(key));
    }

    if let Some(code) = &args.switch_to {
        if let Err(e) = session.switch_to(code, &mut PrintNavigator) {
            warn!("Language switch skipped: {}", e);
        }
    }

    println!("{}", serde_json::to_string_pretty(&session.metrics())?);

    Ok(())
}
