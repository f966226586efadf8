use std::collections::HashMap;
use std::path::PathBuf;

use slotgrid::config::{AppConfig, DEFAULT_BIND};
use slotgrid::SlotgridError;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults_when_nothing_is_set() {
    let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.bind, DEFAULT_BIND);
    assert_eq!(cfg.data_dir, PathBuf::from("data"));
    assert!(cfg.api_base.is_none());
    assert!(cfg.api_token.is_none());
    assert!(cfg.cors_origins.is_empty());
}

#[test]
fn test_values_are_read_and_trimmed() {
    let cfg = AppConfig::from_lookup(lookup(&[
        ("SLOTGRID_BIND", "0.0.0.0:9000"),
        ("SLOTGRID_DATA_DIR", " /srv/timetables "),
        ("SLOTGRID_API_BASE", "https://timetable.example.edu/"),
        ("SLOTGRID_API_TOKEN", "abc123"),
        ("SLOTGRID_CORS_ORIGINS", "http://localhost:3000, ,https://app.example.edu"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind, "0.0.0.0:9000");
    assert_eq!(cfg.data_dir, PathBuf::from("/srv/timetables"));
    assert_eq!(cfg.api_base.as_deref(), Some("https://timetable.example.edu"));
    assert_eq!(cfg.api_token.as_deref(), Some("abc123"));
    assert_eq!(cfg.cors_origins, vec!["http://localhost:3000", "https://app.example.edu"]);
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let cfg = AppConfig::from_lookup(lookup(&[("SLOTGRID_BIND", "  "), ("SLOTGRID_API_TOKEN", "")])).unwrap();
    assert_eq!(cfg.bind, DEFAULT_BIND);
    assert!(cfg.api_token.is_none());
}

#[test]
fn test_invalid_values_are_rejected() {
    let err = AppConfig::from_lookup(lookup(&[("SLOTGRID_BIND", "8080")])).unwrap_err();
    assert!(matches!(err, SlotgridError::Config(_)));

    let err = AppConfig::from_lookup(lookup(&[("SLOTGRID_API_BASE", "ftp://files.example.edu")])).unwrap_err();
    assert!(matches!(err, SlotgridError::Config(_)));
}
