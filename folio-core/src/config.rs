//! # Config 模块
//!
//! 站点配置，集中管理可调的参数。
//!
//! ## 配置优先级
//!
//! 1. `site.json`（由宿主在编译期嵌入）
//! 2. 默认值
//!
//! 缺失的字段逐个回退到默认值；整份文件无法解析时使用全部默认值并记录警告。

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::contact::is_valid_email;
use crate::content::PROFILE;
use crate::error::ConfigError;
use crate::motion::Millis;
use crate::rotator::MIN_INTERVAL_MS;

/// 站点配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// 联系表单配置
    #[serde(default)]
    pub contact: ContactConfig,

    /// 动效配置
    #[serde(default)]
    pub motion: MotionConfig,

    /// 导航栏配置
    #[serde(default)]
    pub nav: NavConfig,
}

/// 联系表单配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// 表单服务地址
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// 表单服务的 access key
    ///
    /// 未配置时改用 mailto 链接。
    #[serde(default)]
    pub access_key: Option<String>,

    /// mailto 的收件人
    #[serde(default = "default_recipient")]
    pub recipient: String,

    /// 成功提示显示多久（毫秒）
    #[serde(default = "default_success_reset_ms")]
    pub success_reset_ms: Millis,
}

/// 动效配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// 首屏轮播间隔（毫秒）
    #[serde(default = "default_rotator_interval_ms")]
    pub rotator_interval_ms: Millis,

    /// 统计数字的计数时长（毫秒）
    #[serde(default = "default_count_up_duration_ms")]
    pub count_up_duration_ms: Millis,

    /// 入场效果的可见阈值 (0.0 - 1.0)
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f32,
}

/// 导航栏配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// 滚动超过多少像素后导航栏切换为紧凑样式
    #[serde(default = "default_scrolled_offset_px")]
    pub scrolled_offset_px: f32,
}

// 默认值函数
fn default_endpoint() -> String {
    "https://api.web3forms.com/submit".to_string()
}

fn default_recipient() -> String {
    PROFILE.email.to_string()
}

fn default_success_reset_ms() -> Millis {
    5000
}

fn default_rotator_interval_ms() -> Millis {
    3000
}

fn default_count_up_duration_ms() -> Millis {
    2000
}

fn default_reveal_threshold() -> f32 {
    0.1
}

fn default_scrolled_offset_px() -> f32 {
    50.0
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            access_key: None,
            recipient: default_recipient(),
            success_reset_ms: default_success_reset_ms(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            rotator_interval_ms: default_rotator_interval_ms(),
            count_up_duration_ms: default_count_up_duration_ms(),
            reveal_threshold: default_reveal_threshold(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_offset_px: default_scrolled_offset_px(),
        }
    }
}

impl SiteConfig {
    /// 严格解析
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 解析配置
    ///
    /// 解析或验证失败时返回默认配置并打印警告。
    pub fn from_json(json: &str) -> Self {
        match Self::parse(json) {
            Ok(config) => {
                info!("site config loaded");
                config
            }
            Err(e) => {
                warn!(error = %e, "site config rejected, using defaults");
                Self::default()
            }
        }
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.contact.endpoint.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "contact.endpoint must be https: {}",
                self.contact.endpoint
            )));
        }

        if !is_valid_email(&self.contact.recipient) {
            return Err(ConfigError::Validation(format!(
                "contact.recipient is not an email: {}",
                self.contact.recipient
            )));
        }

        if self.motion.rotator_interval_ms < MIN_INTERVAL_MS {
            return Err(ConfigError::Validation(format!(
                "motion.rotator_interval_ms must be at least {MIN_INTERVAL_MS}"
            )));
        }

        if self.motion.count_up_duration_ms == 0 {
            return Err(ConfigError::Validation(
                "motion.count_up_duration_ms must be positive".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.motion.reveal_threshold) {
            return Err(ConfigError::Validation(
                "motion.reveal_threshold must be within 0.0 - 1.0".to_string(),
            ));
        }

        if self.nav.scrolled_offset_px < 0.0 {
            return Err(ConfigError::Validation(
                "nav.scrolled_offset_px must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.contact.success_reset_ms, 5000);
        assert_eq!(config.motion.rotator_interval_ms, 3000);
        assert_eq!(config.nav.scrolled_offset_px, 50.0);
        assert_eq!(config.contact.access_key, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SiteConfig::from_json(r#"{ "contact": { "access_key": "abc" } }"#);
        assert_eq!(config.contact.access_key.as_deref(), Some("abc"));
        assert_eq!(config.contact.endpoint, "https://api.web3forms.com/submit");
        assert_eq!(config.motion, MotionConfig::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = SiteConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let loaded = SiteConfig::parse(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(SiteConfig::from_json("{ not json"), SiteConfig::default());
        assert!(matches!(SiteConfig::parse("42"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_validation() {
        let mut config = SiteConfig::default();

        // 轮播间隔过短
        config.motion.rotator_interval_ms = 500;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
        config.motion.rotator_interval_ms = 3000;

        // 阈值越界
        config.motion.reveal_threshold = 1.5;
        assert!(config.validate().is_err());
        config.motion.reveal_threshold = 0.1;

        // 非 https
        config.contact.endpoint = "http://example.com".to_string();
        assert!(config.validate().is_err());
    }
}
