use super::*;

fn binding<'a>(config: &'a AppConfig, name: &str) -> Option<&'a str> {
    config.keybindings.bindings.get(name).map(String::as_str)
}

#[test]
fn embedded_defaults_parse() {
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
    assert_eq!(config.general.page_size, 5);
}

#[test]
fn default_config_matches_classic_picker() {
    let config = AppConfig::default();
    assert_eq!(config.general.prompt, "Select Kubernetes cluster context");
    assert!(config.features.mark_current);
    assert!(config.features.search);
    assert!(!config.features.details);
    assert!(config.features.color);
}

#[test]
fn default_keybindings_cover_picker_commands() {
    let config = AppConfig::default();
    for name in ["up", "down", "select", "cancel", "clear_filter"] {
        assert!(binding(&config, name).is_some(), "missing binding for {name}");
    }
    assert_eq!(binding(&config, "select"), Some("enter"));
    assert!(validate_keybindings(&config.keybindings).is_empty());
    assert!(check_collisions(&config.keybindings).is_empty());
}

#[test]
fn partial_toml_only_features_merges_with_defaults() {
    let mut base = AppConfig::default();
    let user: AppConfig = toml::from_str("[features]\ndetails = true\n").unwrap();
    base.merge(user);

    assert!(base.features.details);
    assert!(base.features.search);
    assert_eq!(base.general.page_size, 5);
    assert_eq!(binding(&base, "cancel"), Some("esc"));
}

#[test]
fn keybindings_merge_per_key() {
    let mut base = AppConfig::default();
    let user: AppConfig = toml::from_str("[keybindings]\nup = \"ctrl+p\"\n").unwrap();
    base.merge(user);

    assert_eq!(binding(&base, "up"), Some("ctrl+p"));
    assert_eq!(binding(&base, "down"), Some("down"));
}

#[test]
fn dashed_aliases_are_accepted() {
    let raw = "[general]\npage-size = 8\n[features]\nmark-current = false\n[theme]\ntext-dim = \"#6c7086\"\n";
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.page_size, 8);
    assert!(!config.features.mark_current);
    assert_eq!(config.theme.text_dim, "#6c7086");
}

#[test]
fn zero_page_size_is_clamped() {
    let config: AppConfig = toml::from_str("[general]\npage_size = 0\n").unwrap();
    assert_eq!(config.general.page_size(), 1);
}

#[test]
fn invalid_keybindings_are_dropped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[keybindings]\nselect = \"bogus+key+x\"\n").unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert!(binding(&config, "select").is_none());
    assert_eq!(binding(&config, "cancel"), Some("esc"));
}

#[test]
fn non_ascii_key_survives_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[keybindings]\nselect = \"é\"\n").unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(binding(&config, "select"), Some("é"));
}

#[test]
fn load_from_rejects_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general\n").unwrap();
    assert!(AppConfig::load_from(&path).is_err());
}

#[test]
fn init_at_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    AppConfig::init_at(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    let err = AppConfig::init_at(&path).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}
