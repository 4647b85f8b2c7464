//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for the supported languages and their order
//! - `language`: validated `Language` value type
//! - `validator`: checks stored translation records against their entity type
//! - `metrics`: translation completeness counters
//!
//! # Example
//!
//! ```rust,ignore
//! use website_content::i18n::Language;
//!
//! let uzbek = Language::from_code("uz")?;
//! for language in Language::supported() {
//!     println!("{} ({})", language.native_name(), language.code());
//! }
//! ```

mod language;
mod metrics;
mod registry;
mod validator;

pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{TranslationValidator, ValidationReport};
