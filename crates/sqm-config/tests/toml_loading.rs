//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use sqm_config::{ConfigError, SqmConfig};
use sqm_core::{ExportFormat, StructureType};

fn layered(file: &str) -> Figment {
    Figment::from(Serialized::defaults(SqmConfig::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed("SQMARK_").split("__"))
}

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
dir = "./markers"
key = "survival_world"

[general]
default_type = "ancient_city"
default_format = "csv"
poll_interval_ms = 250
"#,
        )?;

        let config = SqmConfig::from_figment(&layered("config.toml")).expect("config loads");
        assert_eq!(config.storage.dir, "./markers");
        assert_eq!(config.storage.key, "survival_world");
        assert_eq!(config.general.structure_type(), StructureType::AncientCity);
        assert_eq!(config.general.export_format().unwrap(), ExportFormat::Csv);
        assert_eq!(config.general.poll_interval_ms, 250);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\ndefault_format = \"json\"\n")?;

        let config = SqmConfig::from_figment(&layered("config.toml")).expect("config loads");
        assert_eq!(config.general.default_type, "monument");
        assert_eq!(config.general.poll_interval_ms, 800);
        assert_eq!(config.storage.key, "squaremap_structures_v21");
        assert_eq!(config.general.export_format().unwrap(), ExportFormat::Json);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[storage]\nkey = \"from_toml\"\n")?;
        jail.set_env("SQMARK_STORAGE__KEY", "from_env");
        jail.set_env("SQMARK_GENERAL__POLL_INTERVAL_MS", "1000");

        let config = SqmConfig::from_figment(&layered("config.toml")).expect("config loads");
        assert_eq!(config.storage.key, "from_env");
        assert_eq!(config.general.poll_interval_ms, 1000);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sqmark")?;
        jail.create_file(".sqmark/config.toml", "[general]\ndefault_type = \"village\"\n")?;

        let config = SqmConfig::load().expect("config loads");
        assert_eq!(config.general.structure_type(), StructureType::Village);
        Ok(())
    });
}

#[test]
fn invalid_format_is_reported() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\ndefault_format = \"yaml\"\n")?;

        let err = SqmConfig::from_figment(&layered("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "general.default_format"));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general\ndefault_type = ")?;

        let err = SqmConfig::from_figment(&layered("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
