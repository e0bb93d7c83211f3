//! # Contact 模块
//!
//! 联系表单：字段校验、提交方式的选择、提交结果到表单状态的映射。
//!
//! 真正的网络请求由宿主完成，这里只产出 [`Submission`] 并消化结果：
//!
//! ```text
//! Idle ──submit──► Loading ──ok──► Success ──5s──► Idle
//!   ▲                 │
//!   └──── edit ◄── Error(msg)
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::ContactConfig;
use crate::error::ContactError;
use crate::i18n::Translations;
use crate::motion::Millis;

/// 表单字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// 校验必填字段和邮箱格式
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField { field });
            }
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail {
                email: self.email.clone(),
            });
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// 宽松的邮箱检查：`local@domain.tld`，不含空白
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.starts_with('.'),
        None => false,
    }
}

/// 表单状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    /// 已本地化的错误消息
    Error(String),
}

impl FormStatus {
    /// 提交中禁用输入框和按钮
    pub fn inputs_disabled(&self) -> bool {
        matches!(self, FormStatus::Loading)
    }
}

/// 表单服务的请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub from_name: String,
    pub subject: String,
}

/// 表单服务的响应体
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// 提交方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// 没有配置表单服务时，打开邮件客户端
    Mailto(String),
    /// POST 到表单服务
    Post {
        endpoint: String,
        payload: SubmissionPayload,
    },
}

/// 校验表单并决定提交方式
pub fn plan(
    form: &ContactForm,
    config: &ContactConfig,
    t: &Translations,
) -> Result<Submission, ContactError> {
    form.validate()?;

    let name = form.name.trim();
    let email = form.email.trim();
    let access_key = config
        .access_key
        .as_deref()
        .filter(|key| !key.trim().is_empty());
    match access_key {
        Some(access_key) => Ok(Submission::Post {
            endpoint: config.endpoint.clone(),
            payload: SubmissionPayload {
                access_key: access_key.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                message: form.message.clone(),
                from_name: t.contact.form_sender.to_string(),
                subject: format!("{} {}", t.contact.form_subject, name),
            },
        }),
        None => {
            let subject = format!("{} - {}", t.contact.email_subject, name);
            let body = format!(
                "{}\n\n{}: {}\n{}: {}",
                form.message, t.contact.name_label, name, t.contact.email_label, email
            );
            Ok(Submission::Mailto(format!(
                "mailto:{}?subject={}&body={}",
                config.recipient,
                percent_encode(&subject),
                percent_encode(&body)
            )))
        }
    }
}

/// 提交结果到表单状态
pub fn outcome(result: &Result<SubmissionResponse, ContactError>, t: &Translations) -> FormStatus {
    match result {
        Ok(response) if response.success => FormStatus::Success,
        Ok(response) => FormStatus::Error(
            response
                .message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(t.contact.error_default)
                .to_string(),
        ),
        Err(e) => FormStatus::Error(error_message(e, t).to_string()),
    }
}

/// 错误对应的本地化消息
pub fn error_message(error: &ContactError, t: &Translations) -> &'static str {
    match error {
        ContactError::MissingField { .. } => t.contact.error_required,
        ContactError::InvalidEmail { .. } => t.contact.error_email,
        ContactError::Network { .. } | ContactError::Decode { .. } => t.contact.error_connection,
    }
}

/// 按 `encodeURIComponent` 的规则编码
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

// ========== 表单状态机 ==========

/// 联系表单的完整状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    status: FormStatus,
    reset_at: Option<Millis>,
}

impl ContactState {
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// 开始提交：校验并规划，成功时进入 Loading（mailto 除外）
    pub fn submit(&mut self, config: &ContactConfig, t: &Translations) -> Option<Submission> {
        if self.status.inputs_disabled() {
            return None;
        }
        match plan(&self.form, config, t) {
            Ok(submission) => {
                if matches!(submission, Submission::Post { .. }) {
                    self.status = FormStatus::Loading;
                    self.reset_at = None;
                }
                Some(submission)
            }
            Err(e) => {
                warn!(error = %e, "contact form rejected");
                self.status = FormStatus::Error(error_message(&e, t).to_string());
                None
            }
        }
    }

    /// 请求结束
    ///
    /// 成功时清空表单，并在 `reset_after` 毫秒后回到 Idle。
    pub fn finish(
        &mut self,
        result: Result<SubmissionResponse, ContactError>,
        t: &Translations,
        now: Millis,
        reset_after: Millis,
    ) {
        match &result {
            Ok(response) if response.success => info!("contact message sent"),
            Ok(response) => warn!(reply = ?response.message, "contact service reported failure"),
            Err(e) => warn!(error = %e, "contact request failed"),
        }
        self.status = outcome(&result, t);
        if self.status == FormStatus::Success {
            self.form.clear();
            self.reset_at = Some(now + reset_after);
        }
    }

    /// 成功消息到期后回到 Idle，返回是否发生变化
    pub fn tick(&mut self, now: Millis) -> bool {
        match self.reset_at {
            Some(deadline) if now >= deadline && self.status == FormStatus::Success => {
                self.status = FormStatus::Idle;
                self.reset_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn reset_at(&self) -> Option<Millis> {
        self.reset_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{EN, ES};

    fn config(access_key: Option<&str>) -> ContactConfig {
        ContactConfig {
            access_key: access_key.map(str::to_string),
            recipient: "me@example.com".to_string(),
            ..ContactConfig::default()
        }
    }

    fn filled() -> ContactForm {
        ContactForm::new("Ana Paz", "ana@example.com", "Hola!")
    }

    #[test]
    fn test_validate() {
        assert_eq!(filled().validate(), Ok(()));
        assert_eq!(
            ContactForm::new(" ", "a@b.co", "x").validate(),
            Err(ContactError::MissingField { field: "name" })
        );
        assert_eq!(
            ContactForm::new("a", "a@b.co", "").validate(),
            Err(ContactError::MissingField { field: "message" })
        );
        assert!(matches!(
            ContactForm::new("a", "not-an-email", "x").validate(),
            Err(ContactError::InvalidEmail { .. })
        ));
    }

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@.co"));
    }

    #[test]
    fn test_plan_post() {
        let submission = plan(&filled(), &config(Some("key-1")), &EN).unwrap();
        let Submission::Post { endpoint, payload } = submission else {
            panic!("expected post");
        };
        assert_eq!(endpoint, "https://api.web3forms.com/submit");
        assert_eq!(payload.access_key, "key-1");
        assert_eq!(payload.from_name, "Web Portfolio");
        assert_eq!(payload.subject, "New message from Ana Paz");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["email"], "ana@example.com");
        assert_eq!(json["message"], "Hola!");
    }

    #[test]
    fn test_plan_mailto_without_key() {
        for key in [None, Some("  ")] {
            let submission = plan(&filled(), &config(key), &ES).unwrap();
            assert_eq!(
                submission,
                Submission::Mailto(
                    "mailto:me@example.com?subject=Contacto%20desde%20Portafolio%20-%20Ana%20Paz\
                     &body=Hola!%0A%0ANombre%3A%20Ana%20Paz%0AEmail%3A%20ana%40example.com"
                        .to_string()
                )
            );
        }
    }

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(percent_encode("ñ"), "%C3%B1");
        assert_eq!(percent_encode("(it's)*~"), "(it's)*~");
    }

    #[test]
    fn test_outcome() {
        let ok = Ok(SubmissionResponse {
            success: true,
            message: None,
        });
        assert_eq!(outcome(&ok, &EN), FormStatus::Success);

        let rejected = Ok(SubmissionResponse {
            success: false,
            message: Some("Invalid access key".to_string()),
        });
        assert_eq!(
            outcome(&rejected, &EN),
            FormStatus::Error("Invalid access key".to_string())
        );

        let silent = Ok(SubmissionResponse::default());
        assert_eq!(
            outcome(&silent, &ES),
            FormStatus::Error(ES.contact.error_default.to_string())
        );

        let network = Err(ContactError::Network {
            message: "offline".to_string(),
        });
        assert_eq!(
            outcome(&network, &EN),
            FormStatus::Error(EN.contact.error_connection.to_string())
        );
    }

    #[test]
    fn test_response_decoding() {
        let response: SubmissionResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.message, None);
    }

    #[test]
    fn test_state_success_resets_after_delay() {
        let mut state = ContactState {
            form: filled(),
            ..ContactState::default()
        };
        let submission = state.submit(&config(Some("k")), &EN);
        assert!(matches!(submission, Some(Submission::Post { .. })));
        assert_eq!(state.status(), &FormStatus::Loading);
        assert!(state.status().inputs_disabled());

        // 提交中不能重复提交
        assert_eq!(state.submit(&config(Some("k")), &EN), None);

        let response = SubmissionResponse {
            success: true,
            message: None,
        };
        state.finish(Ok(response), &EN, 1000, 5000);
        assert_eq!(state.status(), &FormStatus::Success);
        assert_eq!(state.form, ContactForm::default());

        assert!(!state.tick(5999));
        assert!(state.tick(6000));
        assert_eq!(state.status(), &FormStatus::Idle);
        assert!(!state.tick(7000));
    }

    #[test]
    fn test_state_validation_error() {
        let mut state = ContactState::default();
        assert_eq!(state.submit(&config(Some("k")), &EN), None);
        assert_eq!(
            state.status(),
            &FormStatus::Error(EN.contact.error_required.to_string())
        );
    }

    #[test]
    fn test_state_error_keeps_form() {
        let mut state = ContactState {
            form: filled(),
            ..ContactState::default()
        };
        state.submit(&config(Some("k")), &EN);
        state.finish(
            Err(ContactError::Decode {
                message: "eof".to_string(),
            }),
            &EN,
            0,
            5000,
        );
        assert_eq!(state.form, filled());
        assert_eq!(state.reset_at(), None);
        assert!(!state.tick(10_000));
    }
}
