//! Response Envelope
//!
//! 成功レスポンスの共通形式: `{ "status": "success", "data": { ... } }`
//! (失敗時の形式は `AppError` の `IntoResponse` が担当する)

use serde::Serialize;

/// Success body shared by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Success without a payload
    pub fn empty() -> Self {
        Self {
            status: "success",
            data: None,
        }
    }
}
