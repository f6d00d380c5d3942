use crate::error::EngineError;
use derive_builder::Builder;
use pgn_index_shared_kernel::{Variant, YearMonth};
use std::path::PathBuf;

/// Host the archives are downloaded from.
pub const DEFAULT_BASE_URL: &str = "https://database.lichess.org";

/// File name of the rendered page inside the source root.
pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Root holding one subdirectory per variant.
    pub source_dir: PathBuf,
    /// Directory holding `index.html.tpl`, `table.html.tpl` and `style.css`.
    #[builder(default = "PathBuf::from(\".\")")]
    pub template_dir: PathBuf,
    /// Page output; `<source_dir>/index.html` when unset.
    #[builder(default)]
    pub output_path: Option<PathBuf>,
    #[builder(default = "Variant::defaults()")]
    pub variants: Vec<Variant>,
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    pub base_url: String,
    #[builder(default = "YearMonth::CLOCK_DATA_SINCE")]
    pub clock_since: YearMonth,
}

impl Config {
    pub fn variant_dir(&self, variant: &Variant) -> PathBuf {
        self.source_dir.join(variant.as_str())
    }

    pub fn index_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| self.source_dir.join(INDEX_FILE))
    }

    /// Base URL without trailing slashes, ready for joining path segments.
    pub fn download_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl From<ConfigBuilderError> for EngineError {
    fn from(err: ConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_defaults() {
        let config = ConfigBuilder::default()
            .source_dir("/srv/db")
            .build()
            .unwrap();

        assert_eq!(config.template_dir, PathBuf::from("."));
        assert_eq!(config.variants, Variant::defaults());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.clock_since.to_string(), "2017-04");
        assert_eq!(config.index_path(), PathBuf::from("/srv/db/index.html"));
    }

    #[test]
    fn builder_requires_source_dir() {
        let err = ConfigBuilder::default().build().unwrap_err();
        let err = EngineError::from(err);
        assert!(err.to_string().contains("source_dir"));
    }

    #[test]
    fn download_root_trims_slashes() {
        let config = ConfigBuilder::default()
            .source_dir("db")
            .base_url("https://example.org//")
            .build()
            .unwrap();
        assert_eq!(config.download_root(), "https://example.org");
    }

    #[test]
    fn explicit_output_wins() {
        let config = ConfigBuilder::default()
            .source_dir("db")
            .output_path(Some(PathBuf::from("out/page.html")))
            .build()
            .unwrap();
        assert_eq!(config.index_path(), PathBuf::from("out/page.html"));
    }
}
