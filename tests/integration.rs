// SPDX-License-Identifier: MPL-2.0
use showreel::config::{self, Config, DEFAULT_SETTLE_DELAY_MS};
use showreel::i18n::fluent::I18n;
use std::time::Duration;
use std::path::Path;
use tempfile::tempdir;

fn write_config(config: &Config, path: &Path) {
    let content = toml::to_string_pretty(config).expect("Failed to serialize config");
    std::fs::write(path, content).expect("Failed to write config");
}

#[test]
fn language_follows_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    write_config(&english, &path);
    let loaded = config::load_from_path(&path).expect("Failed to load english config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("viewer-close-button"), "Close");

    let mut spanish = Config::default();
    spanish.general.language = Some("es".to_string());
    write_config(&spanish, &path);
    let loaded = config::load_from_path(&path).expect("Failed to load spanish config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "es");
    assert_eq!(i18n.tr("viewer-close-button"), "Cerrar");
}

#[test]
fn cli_language_beats_config() {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    let i18n = I18n::new(Some("es".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "es");
}

#[test]
fn every_english_key_exists_in_spanish() {
    let english = I18n::new(Some("en-US".to_string()), &Config::default());
    let spanish = I18n::new(Some("es".to_string()), &Config::default());
    for key in [
        "viewer-loading",
        "viewer-error-heading",
        "embed-loading",
        "embed-buy-button",
        "embed-error-timeout",
        "error-media-not-found",
        "gallery-empty",
        "page-pricing-heading",
        "placement-closing",
    ] {
        assert!(!english.tr(key).starts_with("MISSING"), "{key} missing in en-US");
        assert!(!spanish.tr(key).starts_with("MISSING"), "{key} missing in es");
    }
}

#[test]
fn fallback_contact_is_interpolated() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let text = i18n.tr_with_args("embed-fallback-contact", &[("contact", "sales@shop.test")]);
    assert!(text.contains("sales@shop.test"));
}

#[test]
fn viewer_settings_come_from_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[viewer]\nsettle_delay_ms = 40\nstart_muted = true\n\n\
         [[gallery.items]]\nsource = \"a.mp4\"\n\n[[gallery.items]]\nsource = \"b.mov\"\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.settle_delay(), Duration::from_millis(40));
    assert!(config.mute_policy().start_muted);
    assert_eq!(config.catalog().len(), 2);
}

#[test]
fn defaults_apply_without_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(
        config.settle_delay(),
        Duration::from_millis(DEFAULT_SETTLE_DELAY_MS)
    );
    assert_eq!(config.embed_timeout(), Duration::from_secs(10));
}
