use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |var| map.get(var).cloned()
}

#[test]
fn defaults_when_environment_is_empty() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.service.is_placeholder());
}

#[test]
fn reads_port_and_service_values() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("SUPABASE_URL", "https://abcd.supabase.co/"),
        ("SUPABASE_ANON_KEY", "anon"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.service.url, "https://abcd.supabase.co");
    assert_eq!(cfg.service.anon_key, "anon");
}

#[test]
fn blank_port_falls_back_to_default() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn rejects_non_numeric_port() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { var: "PORT", value: "eighty".into() });
}
