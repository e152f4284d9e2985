mod common;

use kharcha::config::Config;

#[test]
fn defaults_cover_the_entry_form_vocabularies() {
    let config = Config::default();
    assert!(config.payment_apps.contains(&config.default_used_app));
    assert!(config.accounts.contains(&config.default_used_account));
    assert!(config.categories.contains(&config.default_category));
}

#[test]
fn config_round_trips_through_the_manager() {
    let (_storage, manager) = common::setup_test_env();

    let mut config = manager.load().expect("defaults when absent");
    config.default_used_app = "Paytm".into();
    manager.save(&config).expect("save config");

    let reloaded = manager.load().expect("load saved config");
    assert_eq!(reloaded, config);
}

#[test]
fn missing_config_file_is_not_an_error() {
    let (_storage, manager) = common::setup_test_env();
    let config = manager.load().expect("load defaults");
    assert_eq!(config, Config::default());
}
