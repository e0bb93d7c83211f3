//! # 语言 / 主题集成测试
//!
//! 模拟多次访问：每次访问用同一个存储重新初始化上下文。

use folio_core::i18n::{EN, ES};
use folio_core::preferences::{MemoryStore, RecordingRoot};
use folio_core::{Locale, Preferences, Theme};

#[test]
fn test_choice_survives_reload() {
    // 第一次访问：默认西班牙语
    let prefs = Preferences::init(MemoryStore::default(), RecordingRoot::default());
    assert_eq!(prefs.locale(), Locale::Es);
    let (store, _) = prefs.shutdown();

    // 第二次访问：切换为英语和深色
    let mut prefs = Preferences::init(store, RecordingRoot::default());
    prefs.set_locale(Locale::En);
    prefs.set_theme(Theme::Dark);
    let (store, _) = prefs.shutdown();

    // 第三次访问：沿用上次的选择
    let prefs = Preferences::init(store, RecordingRoot::default());
    assert_eq!(prefs.locale(), Locale::En);
    assert_eq!(prefs.theme(), Theme::Dark);
    assert_eq!(prefs.t().contact.send, "Send message");

    let (_, root) = prefs.shutdown();
    assert_eq!(root.get("lang"), Some("en"));
    assert_eq!(root.get("data-theme"), Some("dark"));
}

#[test]
fn test_corrupted_storage_recovers() {
    let store = MemoryStore::with(&[("lang", "\"en\""), ("theme", "")]);
    let prefs = Preferences::init(store, RecordingRoot::default());
    assert_eq!(prefs.locale(), Locale::Es);
    assert_eq!(prefs.theme(), Theme::Light);

    let (store, _) = prefs.shutdown();
    assert_eq!(store.values.get("lang").map(String::as_str), Some("es"));
    assert_eq!(store.values.get("theme").map(String::as_str), Some("light"));
}

#[test]
fn test_unavailable_storage_keeps_session_state() {
    let mut prefs = Preferences::init(MemoryStore::failing(), RecordingRoot::default());
    prefs.toggle_locale();
    assert_eq!(prefs.locale(), Locale::En);
    assert_eq!(prefs.t().nav.home, "Home");
}

#[test]
fn test_translation_tables_match() {
    assert_eq!(ES.keys(), EN.keys());
    let nav: Vec<String> = ES
        .keys()
        .into_iter()
        .filter(|k| k.starts_with("nav."))
        .collect();
    insta::assert_debug_snapshot!(nav, @r#"
    [
        "nav.about",
        "nav.close_menu",
        "nav.contact",
        "nav.dark_mode",
        "nav.experience",
        "nav.home",
        "nav.light_mode",
        "nav.open_menu",
        "nav.projects",
        "nav.skills",
        "nav.switch_to_dark",
        "nav.switch_to_light",
    ]
    "#);
}
