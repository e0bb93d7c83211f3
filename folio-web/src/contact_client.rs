//! 表单服务客户端

use folio_core::ContactError;
use folio_core::contact::{SubmissionPayload, SubmissionResponse};
use tracing::debug;

/// POST 表单内容，响应体按 JSON 解析
///
/// 服务返回的失败（`success: false`）不是错误，由调用方按响应处理。
pub async fn send(
    endpoint: &str,
    payload: &SubmissionPayload,
) -> Result<SubmissionResponse, ContactError> {
    debug!(endpoint, "sending contact form");
    let response = reqwest::Client::new()
        .post(endpoint)
        .header("Accept", "application/json")
        .json(payload)
        .send()
        .await
        .map_err(|e| ContactError::Network {
            message: e.to_string(),
        })?;

    response
        .json::<SubmissionResponse>()
        .await
        .map_err(|e| ContactError::Decode {
            message: e.to_string(),
        })
}
