use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use website_content::config::Config;
use website_content::content::{admin, catalog, load_documents, TranslatedEntity};
use website_content::i18n::{Language, TranslationMetrics};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("website_content=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [type_name, path] = args.as_slice() else {
        bail!("Usage: content-audit <entity-type> <documents.json>");
    };

    let config = Config::from_env()?;
    let kind = catalog::lookup(type_name)
        .with_context(|| format!("Unknown entity type '{}'", type_name))?;

    let languages: Vec<String> = Language::supported()
        .iter()
        .map(|language| format!("{} ({})", language.native_name(), language))
        .collect();
    info!(
        "Auditing {} documents from {} in {}; cursor starts at {}",
        kind.name,
        path,
        languages.join(", "),
        config.default_language.native_name()
    );
    let documents = load_documents(path)?;

    let mut invalid = 0usize;
    for (index, document) in documents.into_iter().enumerate() {
        let entity = TranslatedEntity::from_document(kind, document, config.default_language)
            .with_context(|| format!("Document #{} is not a valid {}", index, kind.name))?;

        println!("{}\t{}", entity, admin::status_cell(&entity));

        for (language, report) in entity.validate() {
            for error in &report.errors {
                warn!("{} [{}]: {}", entity.placeholder_label(), language, error);
            }
            for warning in &report.warnings {
                info!("{} [{}]: {}", entity.placeholder_label(), language, warning);
            }
            if report.has_errors() {
                invalid += 1;
            }
        }
    }

    let report = TranslationMetrics::global().report();
    info!(
        "Checked {} language slots: {} filled, {} missing ({:.1}% complete), {} malformed values",
        report.status_checks,
        report.filled,
        report.missing,
        report.completeness_rate,
        report.malformed_values
    );

    if config.strict_validation && invalid > 0 {
        bail!("{} translation records failed validation", invalid);
    }

    Ok(())
}
