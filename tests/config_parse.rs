use opskit::config::Config;

#[test]
fn parse_example_config() {
    let raw = include_str!("../opskit.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.fleet.shell, "sh");
    assert_eq!(cfg.repos.len(), 2);

    let dashboard = cfg.repos.get("dashboard").expect("dashboard entry");
    assert_eq!(dashboard.branch, "develop");
    assert_eq!(dashboard.folder_name, "dashboard");
}

#[test]
fn empty_config_uses_defaults() {
    let cfg: Config = toml::from_str("").expect("parse empty TOML");
    assert_eq!(cfg.logging.level, "info");
    assert!(!cfg.logging.write_to_file);
    assert_eq!(cfg.fleet.shell, "sh");
    assert!(cfg.repos.is_empty());
}
