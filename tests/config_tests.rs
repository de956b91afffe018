//! Integration tests for configuration management

use degree_calc::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert!(
        !config.audit.report_name.is_empty(),
        "Default report_name should not be empty"
    );
    assert!(config.audit.student_id.is_empty());
    assert!(config.audit.requirements_file.is_empty());
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
reports_dir = "./reports"

[audit]
student_id = "cs1190421"
requirements_file = "/etc/degreecalc/requirements.toml"
report_name = "my_audit"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.audit.student_id, "cs1190421");
    assert_eq!(
        config.audit.requirements_file,
        "/etc/degreecalc/requirements.toml"
    );
    assert_eq!(config.audit.report_name, "my_audit");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "warn"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "warn");
    assert!(config.logging.file.is_empty());
    assert!(!config.logging.verbose);
    assert!(config.paths.reports_dir.is_empty());
    assert!(config.audit.report_name.is_empty());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
level = "info"
file = "$DEGREE_CALC/degreecalc.log"

[paths]
reports_dir = "$DEGREE_CALC/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    let dir = Config::get_degreecalc_dir();

    assert_eq!(
        PathBuf::from(&config.logging.file),
        dir.join("degreecalc.log")
    );
    assert_eq!(PathBuf::from(&config.paths.reports_dir), dir.join("reports"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level"), Some("debug".to_string()));

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose"), Some("true".to_string()));

    config
        .set("report_name", "final_year")
        .expect("Failed to set report_name");
    assert_eq!(config.get("report-name"), Some("final_year".to_string()));

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();

    config.set("student_id", "ee3180001").expect("Failed to set");
    config
        .unset("student_id", &defaults)
        .expect("Failed to unset student_id");

    assert_eq!(config.audit.student_id, defaults.audit.student_id);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config
        .set("requirements_file", "/srv/reqs.toml")
        .expect("Failed to set requirements_file");
    config.save_to(&config_file).expect("Failed to save config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config file");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.audit.requirements_file, "/srv/reqs.toml");
}

#[test]
fn test_load_from_creates_missing_file() {
    let (_temp_dir, config_file) = setup_temp_config();
    assert!(!config_file.exists());

    let config = Config::load_from(&config_file);

    assert!(config_file.exists());
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_load_from_backfills_new_fields() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::write(&config_file, "[logging]\nlevel = \"error\"\n").expect("Failed to write");

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.audit.report_name, "degree_audit");

    let content = fs::read_to_string(&config_file).expect("Failed to read config file");
    assert!(content.contains("report_name"));
}

#[test]
fn test_load_from_invalid_file_falls_back_to_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::write(&config_file, "this is not toml = [").expect("Failed to write");

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/var/log/degreecalc.log".to_string()),
        verbose: Some(true),
        reports_dir: Some("/reports".to_string()),
        student_id: Some("me1170001".to_string()),
        requirements_file: Some("/reqs.toml".to_string()),
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/var/log/degreecalc.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.reports_dir, "/reports");
    assert_eq!(config.audit.student_id, "me1170001");
    assert_eq!(config.audit.requirements_file, "/reqs.toml");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let original = config.clone();

    let overrides = ConfigOverrides {
        student_id: Some("cs5190421".to_string()),
        ..ConfigOverrides::default()
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.audit.student_id, "cs5190421");
    assert_eq!(config.logging.level, original.logging.level);
    assert_eq!(config.paths.reports_dir, original.paths.reports_dir);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display = config.to_string();

    assert!(display.contains("[logging]"));
    assert!(display.contains("[paths]"));
    assert!(display.contains("[audit]"));
    assert!(display.contains("reports_dir"));
    assert!(display.contains("report_name"));
}

#[test]
fn test_requirement_table_from_configured_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let table_file = temp_dir.path().join("requirements.toml");
    fs::write(&table_file, "[programs.XY1]\nDC = 40\nPE = 6.5\n").expect("Failed to write");

    let mut config = Config::from_defaults();
    config
        .set("requirements_file", &table_file.to_string_lossy())
        .expect("Failed to set requirements_file");

    let table = config
        .requirement_table()
        .expect("Failed to load requirement table");
    let code = "XY1".parse().expect("valid program code");
    assert!(table.contains(&code));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_get_degreecalc_dir() {
    let dir = Config::get_degreecalc_dir();
    assert!(dir.ends_with("degreecalc"));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    assert!(path.starts_with(Config::get_degreecalc_dir()));

    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    assert!(file_name == "config.toml" || file_name == "dconfig.toml");
}

#[test]
fn test_example_requirement_table_matches_builtin() {
    use degree_calc::core::models::RequirementTable;

    let example = RequirementTable::from_toml(include_str!("../assets/requirements.example.toml"))
        .expect("example table parses");
    let builtin = RequirementTable::builtin();

    for (code, requirements) in example.iter() {
        let expected = builtin
            .requirements_for(code)
            .expect("example programs are built in");
        assert_eq!(requirements, expected, "{code}");
    }
}

#[test]
fn test_runtime_overrides_are_not_saved() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut stored = Config::load_from(&config_file);
    let overrides = ConfigOverrides {
        student_id: Some("xx9000".to_string()),
        requirements_file: Some("/tmp/one-run.toml".to_string()),
        ..ConfigOverrides::default()
    };
    let runtime = stored.with_overrides(&overrides);
    assert_eq!(runtime.audit.student_id, "xx9000");

    stored.set("level", "info").expect("Failed to set level");
    stored.save_to(&config_file).expect("Failed to save config");

    let reloaded = Config::load_from(&config_file);
    assert_eq!(reloaded.logging.level, "info");
    assert!(reloaded.audit.student_id.is_empty());
    assert!(reloaded.audit.requirements_file.is_empty());
}
