// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn loads_minimal_settings_with_defaults_filled_in() {
    let yaml = r#"
backup_dir: /var/backups/sx
tenants_config_path: /etc/sx/tenants.yaml
"#;
    let settings = Settings::from_yaml_str(yaml).unwrap();
    assert_eq!(settings.backup_dir, "/var/backups/sx");
    assert_eq!(settings.cache.default_ttl_secs, 3600);
    assert_eq!(settings.task_manager.queues, vec!["default".to_string()]);
}

#[test]
fn substitutes_environment_variables_before_parsing() {
    std::env::set_var("SX_TEST_BACKUP_DIR", "/tmp/sx-backups");
    let yaml = r#"
backup_dir: ${SX_TEST_BACKUP_DIR}
tenants_config_path: /etc/sx/tenants.yaml
"#;
    let settings = Settings::from_yaml_str(yaml).unwrap();
    assert_eq!(settings.backup_dir, "/tmp/sx-backups");
    std::env::remove_var("SX_TEST_BACKUP_DIR");
}

#[test]
fn unresolved_placeholder_is_left_in_place_not_fatal() {
    std::env::remove_var("SX_TEST_DOES_NOT_EXIST");
    let yaml = r#"
backup_dir: ${SX_TEST_DOES_NOT_EXIST}
tenants_config_path: /etc/sx/tenants.yaml
"#;
    let settings = Settings::from_yaml_str(yaml).unwrap();
    assert_eq!(settings.backup_dir, "${SX_TEST_DOES_NOT_EXIST}");
}

#[test]
fn explicit_cache_and_task_manager_sections_override_defaults() {
    let yaml = r#"
backup_dir: /var/backups/sx
tenants_config_path: /etc/sx/tenants.yaml
cache:
  default_ttl_secs: 120
  cleanup_interval_secs: 5
  cleanup_sample_size: 10
  cleanup_expired_threshold: 0.5
task_manager:
  queues: [webhooks, backups]
  shutdown_timeout_secs: 30
shutdown:
  plugin_timeout_secs: 3
"#;
    let settings = Settings::from_yaml_str(yaml).unwrap();
    assert_eq!(settings.cache.default_ttl_secs, 120);
    assert_eq!(settings.task_manager.queues, vec!["webhooks".to_string(), "backups".to_string()]);
    assert_eq!(settings.shutdown.plugin_timeout_secs, 3);
}
