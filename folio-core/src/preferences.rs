//! # Preferences 模块
//!
//! 语言 / 主题上下文。
//!
//! 存储和文档根节点都通过 trait 注入，由宿主显式构造并传入：
//! - [`PreferenceStore`]：浏览器里是 localStorage
//! - [`DocumentRoot`]：浏览器里是 `<html>` 元素
//!
//! 每次变更都在 setter 返回前完成持久化和属性同步。
//! 存储写入失败只记录日志，不影响当前会话。

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};

use crate::error::StorageError;
use crate::i18n::Translations;

/// 语言的存储键
pub const LOCALE_KEY: &str = "lang";
/// 主题的存储键
pub const THEME_KEY: &str = "theme";

/// 语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// 西班牙语（主语言）
    #[default]
    Es,
    /// 英语
    En,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// 另一种语言
    pub fn toggled(&self) -> Self {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }
}

impl FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// 倾斜卡片高光使用的颜色（主题主色，15% 透明度）
    pub fn glare_color(&self) -> &'static str {
        match self {
            Theme::Light => "rgba(13, 148, 136, 0.15)",
            Theme::Dark => "rgba(45, 212, 191, 0.15)",
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 键值存储
pub trait PreferenceStore {
    /// 读取，不存在或不可用时返回 `None`
    fn load(&self, key: &str) -> Option<String>;

    /// 写入
    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// 文档根节点
pub trait DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// 语言 / 主题上下文
#[derive(Debug)]
pub struct Preferences<S: PreferenceStore, D: DocumentRoot> {
    store: S,
    root: D,
    locale: Locale,
    theme: Theme,
}

impl<S: PreferenceStore, D: DocumentRoot> Preferences<S, D> {
    /// 从存储初始化
    ///
    /// 缺失或无效的值回退到默认值；初始化结束时两个属性都已同步到文档根节点，
    /// 规范化后的值也已写回存储。
    pub fn init(store: S, root: D) -> Self {
        let locale = read_or_default::<Locale>(&store, LOCALE_KEY);
        let theme = read_or_default::<Theme>(&store, THEME_KEY);

        let mut prefs = Self {
            store,
            root,
            locale,
            theme,
        };
        prefs.apply_locale();
        prefs.apply_theme();
        info!(locale = %locale, theme = %theme, "preferences initialized");
        prefs
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// 当前语言的翻译表
    pub fn t(&self) -> &'static Translations {
        Translations::for_locale(self.locale)
    }

    /// 设置语言，返回是否发生变化
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        if self.locale == locale {
            return false;
        }
        self.locale = locale;
        self.apply_locale();
        info!(locale = %locale, "locale changed");
        true
    }

    /// 设置主题，返回是否发生变化
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if self.theme == theme {
            return false;
        }
        self.theme = theme;
        self.apply_theme();
        info!(theme = %theme, "theme changed");
        true
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.set_locale(self.locale.toggled());
        self.locale
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    /// 拆解上下文，交还存储和根节点
    pub fn shutdown(self) -> (S, D) {
        (self.store, self.root)
    }

    fn apply_locale(&mut self) {
        let code = self.locale.code();
        self.persist(LOCALE_KEY, code);
        self.root.set_attribute("lang", code);
    }

    fn apply_theme(&mut self) {
        let code = self.theme.code();
        self.persist(THEME_KEY, code);
        self.root.set_attribute("data-theme", code);
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.store(key, value) {
            warn!(error = %e, key, "failed to persist preference");
        }
    }
}

fn read_or_default<T: FromStr + Default>(store: &impl PreferenceStore, key: &str) -> T {
    store
        .load(key)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

// ========== 内存实现 ==========

/// 内存存储，用于测试和无浏览器环境
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub values: HashMap<String, String>,
    /// 为 `true` 时所有写入失败
    pub fail_writes: bool,
    /// 成功写入的次数
    pub writes: usize,
}

impl MemoryStore {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// 记录属性写入的根节点
#[derive(Debug, Default, Clone)]
pub struct RecordingRoot {
    pub attributes: HashMap<String, String>,
}

impl RecordingRoot {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl DocumentRoot for RecordingRoot {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}
