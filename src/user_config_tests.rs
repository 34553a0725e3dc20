use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_empty_toml_produces_defaults() {
    let cfg: UserConfig = toml::from_str("").expect("Should parse empty TOML");
    assert_eq!(cfg, UserConfig::default());
    assert_eq!(cfg.api.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(cfg.api.timeout_secs, 30);
    assert_eq!(cfg.tenant.default_slug, "demo-org");
}

#[test]
fn test_partial_api_section_fills_defaults() {
    let toml_str = "[api]\nendpoint = \"https://pm.example.com/graphql\"\n";
    let cfg: UserConfig = toml::from_str(toml_str).expect("Should parse [api] section");
    assert_eq!(cfg.api.endpoint, "https://pm.example.com/graphql");
    assert_eq!(cfg.api.timeout_secs, 30);
    assert_eq!(cfg.tenant, TenantConfig::default());
}

#[test]
fn test_tenant_section() {
    let toml_str = "[tenant]\ndefault_slug = \"acme\"\n";
    let cfg: UserConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.tenant.default_slug, "acme");
}

#[test]
fn test_unknown_field_rejected() {
    let toml_str = "[api]\nendpont = \"typo\"\n";
    let result: Result<UserConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

#[test]
fn test_load_absent_file_returns_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_user_config_from(&path).expect("absent file is not an error");
    assert_eq!(cfg, UserConfig::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "# minipm user config\n\n[api]\ntimeout_secs = 5\n\n[tenant]\ndefault_slug = \"beta\"\n",
    )
    .expect("write config");

    let cfg = load_user_config_from(&path).expect("parse config");
    assert_eq!(cfg.api.timeout_secs, 5);
    assert_eq!(cfg.api.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(cfg.tenant.default_slug, "beta");
}

#[test]
fn test_load_invalid_toml_is_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api\nendpoint = 1").expect("write config");
    let err = load_user_config_from(&path).unwrap_err();
    assert!(matches!(err, UserConfigError::Toml(_)));
}
