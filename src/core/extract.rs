//! 核心请求提取器

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use super::error::{CoreError, NOT_JSON_MESSAGE};

/// JSON 对象请求体
///
/// 与 `axum::Json` 不同，任何解析失败（缺少 `Content-Type`、语法错误、
/// 非对象的顶层值、字段类型不符）都会变成 [`CoreError::BadRequest`]。
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        decode_object(value).map(JsonBody)
    }
}

/// 把 JSON 值解码为目标结构，只接受对象
///
/// 字段类型不符时，错误信息指出出错的字段。
pub fn decode_object<T: DeserializeOwned>(value: Value) -> Result<T, CoreError> {
    let Value::Object(fields) = value else {
        return Err(CoreError::BadRequest(NOT_JSON_MESSAGE.to_string()));
    };

    match serde_json::from_value(Value::Object(fields.clone())) {
        Ok(decoded) => Ok(decoded),
        Err(e) => {
            debug!("请求体字段不符合要求: {}", e);
            Err(CoreError::BadRequest(field_error_message::<T>(&fields, &e)))
        }
    }
}

/// 逐个字段单独解码，找出第一个导致失败的字段
fn field_error_message<T: DeserializeOwned>(
    fields: &Map<String, Value>,
    error: &serde_json::Error,
) -> String {
    fields
        .iter()
        .find_map(|(key, value)| {
            let single: Map<String, Value> = [(key.clone(), value.clone())].into_iter().collect();
            serde_json::from_value::<T>(Value::Object(single))
                .err()
                .map(|e| format!("Invalid field '{}': {}", key, e))
        })
        .unwrap_or_else(|| format!("Invalid request body: {}", error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: Option<String>,
        nick: Option<String>,
    }

    #[test]
    fn test_decode_object_accepts_objects() {
        let sample: Sample = decode_object(json!({ "name": "a" })).unwrap();
        assert_eq!(sample.name.as_deref(), Some("a"));

        let empty: Sample = decode_object(json!({})).unwrap();
        assert!(empty.name.is_none());
        assert!(empty.nick.is_none());
    }

    #[test]
    fn test_decode_object_rejects_non_objects() {
        let not_json = CoreError::BadRequest(NOT_JSON_MESSAGE.to_string());
        assert_eq!(decode_object::<Sample>(json!(["a"])).unwrap_err(), not_json);
        assert_eq!(decode_object::<Sample>(json!("a")).unwrap_err(), not_json);
    }

    #[test]
    fn test_decode_object_names_mistyped_field() {
        let err = decode_object::<Sample>(json!({ "name": "a", "nick": 7 })).unwrap_err();
        let message = match err {
            CoreError::BadRequest(message) => message,
            other => panic!("expected BadRequest, got {:?}", other),
        };
        assert!(message.starts_with("Invalid field 'nick': "), "{}", message);
        assert!(message.contains("expected a string"), "{}", message);
    }
}
