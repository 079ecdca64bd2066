use tasktrail::config::Config;
use tasktrail::icons::IconTheme;
use tasktrail::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_view, "tasks");
    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert_eq!(config.tracker.days_back, 5);
    assert_eq!(config.tracker.header_title, "Daily Tasks");
    assert_eq!(config.tracker.add_button_text, "Add Task");
    assert_eq!(config.tracker.id_column_width, 30);
    assert!(config.tracker.show_delete_button);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    config.tracker.days_back = 0;
    assert!(config.validate().is_err());
    config.tracker.days_back = 367;
    assert!(config.validate().is_err());

    config.tracker.days_back = 7;
    config.tracker.id_column_width = 100;
    assert!(config.validate().is_err());

    config.tracker.id_column_width = 40;
    config.ui.default_view = "calendar".to_string();
    assert!(config.validate().is_err());

    config.ui.default_view = "grid".to_string();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_date_format_rejected() {
    let mut config = Config::default();
    config.tracker.date_format = "%Q".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("%Q"));
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_view = \"tasks\""));
    assert!(toml_str.contains("days_back = 5"));
    assert!(toml_str.contains("icon_theme = \"unicode\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[tracker]
days_back = 7
initial_tasks = ["Exercise", "Read"]

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.tracker.days_back, 7);
    assert_eq!(config.tracker.initial_tasks, vec!["Exercise", "Read"]);
    assert!(config.logging.enabled);

    assert_eq!(config.ui.default_view, "tasks");
    assert_eq!(config.tracker.date_format, datetime::HEADER_DATE_FORMAT);
    assert_eq!(config.tracker.empty_message, "No tasks available");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_view, default_config.ui.default_view);
    assert_eq!(config.tracker.days_back, default_config.tracker.days_back);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file_and_generate() {
    let dir = std::env::temp_dir().join(format!("tasktrail-config-test-{}", std::process::id()));
    let path = dir.join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Tasktrail Configuration File"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.tracker.days_back, 5);

    std::fs::write(&path, "[tracker]\ndays_back = 0\n").unwrap();
    assert!(Config::load_from_file(&path).is_err());

    let _ = std::fs::remove_dir_all(&dir);
}
