// src/config.rs
use crate::args::Args;
use anyhow::{Context, Result};
pub use pgn_index_engine::config::{Config, ConfigBuilder};
use pgn_index_shared_kernel::{Variant, YearMonth};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings read from `--config`. Every field is optional; command line
/// flags override whatever is set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub variants: Option<Vec<Variant>>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub clock_since: Option<YearMonth>,
    #[serde(default)]
    pub templates: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Resolves the engine configuration: flags, then the config file, then defaults.
pub fn resolve(args: &Args) -> Result<Config> {
    let file = match &args.site.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    merge(args, file)
}

fn merge(args: &Args, file: FileConfig) -> Result<Config> {
    let site = &args.site;
    let mut builder = ConfigBuilder::default();
    builder.source_dir(args.source.clone());

    if let Some(dir) = site.templates.clone().or(file.templates) {
        builder.template_dir(dir);
    }
    builder.output_path(site.output.clone().or(file.output));

    let variants = if site.variants.is_empty() {
        file.variants
    } else {
        Some(site.variants.clone())
    };
    if let Some(variants) = variants {
        builder.variants(variants);
    }
    if let Some(url) = site.base_url.clone().or(file.base_url) {
        builder.base_url(url);
    }
    if let Some(month) = site.clock_since.or(file.clock_since) {
        builder.clock_since(month);
    }

    let config = builder
        .build()
        .map_err(pgn_index_engine::EngineError::from)
        .context("building configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_without_flags() {
        let config = resolve(&parse(&["pgn_index", "/srv/db"])).unwrap();
        assert_eq!(config.source_dir, PathBuf::from("/srv/db"));
        assert_eq!(config.template_dir, PathBuf::from("."));
        assert_eq!(config.variants, Variant::defaults());
        assert_eq!(config.clock_since, YearMonth::CLOCK_DATA_SINCE);
        assert_eq!(config.index_path(), PathBuf::from("/srv/db/index.html"));
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig {
            variants: Some(vec![Variant::new("atomic").unwrap()]),
            base_url: Some("https://file.example".into()),
            clock_since: Some(YearMonth::parse("2018-01").unwrap()),
            templates: Some(PathBuf::from("file-tpl")),
            output: Some(PathBuf::from("file.html")),
        };
        let args = parse(&[
            "pgn_index",
            "--variant",
            "horde,chess960",
            "--base-url",
            "https://flag.example",
            "-t",
            "flag-tpl",
            "db",
        ]);

        let config = merge(&args, file).unwrap();
        let names: Vec<_> = config.variants.iter().map(Variant::as_str).collect();
        assert_eq!(names, ["horde", "chess960"]);
        assert_eq!(config.base_url, "https://flag.example");
        assert_eq!(config.template_dir, PathBuf::from("flag-tpl"));
        assert_eq!(config.clock_since.to_string(), "2018-01");
        assert_eq!(config.index_path(), PathBuf::from("file.html"));
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "variants": ["standard", "horde"], "clock_since": "2016-01" }}"#
        )
        .unwrap();

        let loaded = FileConfig::load(file.path()).unwrap();
        assert_eq!(loaded.variants.map(|v| v.len()), Some(2));
        assert_eq!(loaded.clock_since.map(|m| m.to_string()).as_deref(), Some("2016-01"));
        assert_eq!(loaded.base_url, None);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_variants() {
        let mut unknown = tempfile::NamedTempFile::new().unwrap();
        write!(unknown, r#"{{ "colour": "blue" }}"#).unwrap();
        assert!(FileConfig::load(unknown.path()).is_err());

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, r#"{{ "variants": ["../etc"] }}"#).unwrap();
        let err = FileConfig::load(bad.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config file"));
    }
}
