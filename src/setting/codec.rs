//! Request and response bodies of the setting read/write endpoints.
//!
//! Write body: `{"value": <value>, "context": <text>}`, `context` omitted when absent.
//! Read response: `{"data": {"value": <value>}}`.
//! Write response: `{"data": {"value": <value>, "success": <bool>, "message": <text>}}`.

use super::{SettingDescriptor, SettingKind, SettingType, SettingValue, WriteResult};
use crate::error::Error;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

/// `{"data": ...}` wrapper around every API payload.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Deserialize)]
struct ReadData<T> {
    value: T,
}

#[derive(Deserialize)]
struct WriteData<T> {
    value: T,
    success: bool,
    #[serde(default)]
    message: String,
}

pub fn encode_write_body(
    descriptor: SettingDescriptor<'_>,
    value: &SettingValue,
    context: Option<&str>,
) -> Result<Vec<u8>, Error> {
    descriptor.expect_kind(value.kind())?;

    let mut body = json!({ "value": value });
    if let Some(context) = context {
        body["context"] = json!(context);
    }
    Ok(body.to_string().into_bytes())
}

/// Decodes the value of a read response as `T`.
pub fn decode_read<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    let envelope: Envelope<ReadData<T>> = serde_json::from_slice(bytes)?;
    Ok(envelope.data.value)
}

/// Decodes a write response with the value as `T`.
pub fn decode_write<T: DeserializeOwned>(bytes: &[u8]) -> Result<WriteResult<T>, Error> {
    let envelope: Envelope<WriteData<T>> = serde_json::from_slice(bytes)?;
    let data = envelope.data;
    Ok(WriteResult {
        value: data.value,
        success: data.success,
        message: data.message,
    })
}

pub fn decode_read_value(descriptor: SettingDescriptor<'_>, bytes: &[u8]) -> Result<SettingValue, Error> {
    match descriptor.kind {
        SettingKind::Text => decode_read::<String>(bytes).map(SettingValue::Text),
        SettingKind::Boolean => decode_read::<bool>(bytes).map(SettingValue::Boolean),
        SettingKind::Integer => decode_read::<i64>(bytes).map(SettingValue::Integer),
    }
}

pub fn decode_write_result(
    descriptor: SettingDescriptor<'_>,
    bytes: &[u8],
) -> Result<WriteResult, Error> {
    match descriptor.kind {
        SettingKind::Text => decode_write::<String>(bytes).map(|r| r.map(SettingValue::Text)),
        SettingKind::Boolean => decode_write::<bool>(bytes).map(|r| r.map(SettingValue::Boolean)),
        SettingKind::Integer => decode_write::<i64>(bytes).map(|r| r.map(SettingValue::Integer)),
    }
}

/// Typed counterpart of [`encode_write_body`].
pub fn encode_typed<T: SettingType>(
    descriptor: SettingDescriptor<'_>,
    value: T,
    context: Option<&str>,
) -> Result<Vec<u8>, Error> {
    encode_write_body(descriptor, &value.into(), context)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::setting::registry::{self, KNOWN_SETTINGS};
    use serde_json::Value;

    fn body_json(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    /// Wraps the `value` of an encoded write body into a read response.
    fn echo_as_read_response(body: &[u8]) -> Vec<u8> {
        let value = body_json(body)["value"].clone();
        json!({ "data": { "value": value } }).to_string().into_bytes()
    }

    fn sample(kind: SettingKind) -> SettingValue {
        match kind {
            SettingKind::Text => SettingValue::Text("23:59".to_string()),
            SettingKind::Boolean => SettingValue::Boolean(true),
            SettingKind::Integer => SettingValue::Integer(85),
        }
    }

    #[test]
    fn encode_without_context() {
        let body = encode_write_body(registry::CHARGE_START, &"16:00".into(), None).unwrap();
        assert_eq!(json!({ "value": "16:00" }), body_json(&body));
        assert!(body_json(&body).get("context").is_none());
    }

    #[test]
    fn encode_with_context() {
        let body = encode_write_body(
            registry::CHARGE_LIMIT,
            &SettingValue::Integer(80),
            Some("manual override"),
        )
        .unwrap();
        assert_eq!(
            json!({ "value": 80, "context": "manual override" }),
            body_json(&body)
        );
    }

    #[test]
    fn encode_kind_mismatch() {
        let result = encode_write_body(registry::CHARGE_ENABLED, &"true".into(), None);
        assert!(matches!(
            result,
            Err(Error::Encoding {
                expected: SettingKind::Boolean,
                actual: SettingKind::Text,
                ..
            })
        ));
    }

    #[test]
    fn encode_typed_bool() {
        let body = encode_typed(registry::ECO_MODE_ENABLED, false, None).unwrap();
        assert_eq!(json!({ "value": false }), body_json(&body));
    }

    #[test]
    fn round_trip_known_settings() {
        for (name, descriptor) in KNOWN_SETTINGS {
            let value = sample(descriptor.kind);
            let body = encode_write_body(*descriptor, &value, None).unwrap();
            let decoded = decode_read_value(*descriptor, &echo_as_read_response(&body)).unwrap();
            assert_eq!(value, decoded, "{}", name);
        }
    }

    #[test]
    fn decode_read_per_kind() {
        let text = decode_read_value(registry::CHARGE_START, br#"{"data":{"value":"01:00"}}"#);
        assert_eq!(SettingValue::Text("01:00".to_string()), text.unwrap());

        let integer = decode_read_value(registry::CHARGE_LIMIT, br#"{"data":{"value":100}}"#);
        assert_eq!(SettingValue::Integer(100), integer.unwrap());

        let boolean = decode_read_value(registry::CHARGE_ENABLED, br#"{"data":{"value":false}}"#);
        assert_eq!(SettingValue::Boolean(false), boolean.unwrap());
    }

    #[test]
    fn decode_read_wrong_json_type() {
        let result = decode_read_value(registry::CHARGE_ENABLED, br#"{"data":{"value":"true"}}"#);
        assert!(matches!(result, Err(Error::Decoding(_))));

        let result = decode_read_value(registry::CHARGE_LIMIT, br#"{"data":{"value":"100"}}"#);
        assert!(matches!(result, Err(Error::Decoding(_))));
    }

    #[test]
    fn decode_read_malformed() {
        let result = decode_read_value(registry::CHARGE_START, b"Not Found");
        assert!(matches!(result, Err(Error::Decoding(_))));

        let result = decode_read_value(registry::CHARGE_START, br#"{"value":"01:00"}"#);
        assert!(matches!(result, Err(Error::Decoding(_))));
    }

    #[test]
    fn decode_write() {
        let body = br#"{"data":{"value":"16:00","success":true,"message":"Written Successfully"}}"#;
        let result = decode_write_result(registry::CHARGE_END, body).unwrap();
        assert_eq!(
            WriteResult {
                value: SettingValue::Text("16:00".to_string()),
                success: true,
                message: "Written Successfully".to_string(),
            },
            result
        );
    }

    #[test]
    fn decode_write_rejected() {
        let body = br#"{"data":{"value":101,"success":false,"message":"Value out of range"}}"#;
        let result = decode_write_result(registry::CHARGE_LIMIT, body).unwrap();
        assert!(!result.success);
        assert_eq!(SettingValue::Integer(101), result.value);
        assert_eq!("Value out of range", result.message);
    }

    #[test]
    fn decode_write_missing_success() {
        let result = decode_write_result(registry::CHARGE_LIMIT, br#"{"data":{"value":100}}"#);
        assert!(matches!(result, Err(Error::Decoding(_))));
    }
}
