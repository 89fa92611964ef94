//! Typed contract call arguments.
//!
//! A [`ContractParameter`] describes one argument independently of its script
//! encoding. Constructors validate sizes, so every value that exists can be
//! encoded unless it is one of the two placeholder variants (`Any` and
//! `InteropInterface`).

use crate::contract_parameter_type::ContractParameterType;
use crate::error::{ContractError, ContractResult};
use crate::helper::compress_public_key;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use neo_sdk_config::{COMPRESSED_PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use neo_sdk_core::{UInt160, UInt256};
use neo_sdk_cryptography::EncodePoint;
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::fmt;

/// Represents the possible values of contract parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameterValue {
    /// Null placeholder, typically from an RPC result
    Any,
    Boolean(bool),
    Integer(BigInt),
    ByteArray(Vec<u8>),
    String(String),
    Hash160(UInt160),
    Hash256(UInt256),
    /// Compressed SEC1 point
    PublicKey([u8; COMPRESSED_PUBLIC_KEY_SIZE]),
    Signature(Vec<u8>),
    Array(Vec<ContractParameter>),
    /// Ordered key/value pairs
    Map(Vec<(ContractParameter, ContractParameter)>),
    /// Unresolved host handle
    InteropInterface,
}

/// Represents a parameter of a contract method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractParameter {
    /// Display name; never affects encoding
    pub name: Option<String>,

    /// The value of the parameter
    pub value: ContractParameterValue,
}

impl ContractParameter {
    fn from_value(value: ContractParameterValue) -> Self {
        Self { name: None, value }
    }

    pub fn any() -> Self {
        Self::from_value(ContractParameterValue::Any)
    }

    pub fn boolean(value: bool) -> Self {
        Self::from_value(ContractParameterValue::Boolean(value))
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self::from_value(ContractParameterValue::Integer(value.into()))
    }

    pub fn byte_array(value: impl Into<Vec<u8>>) -> Self {
        Self::from_value(ContractParameterValue::ByteArray(value.into()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::from_value(ContractParameterValue::String(value.into()))
    }

    pub fn hash160(value: UInt160) -> Self {
        Self::from_value(ContractParameterValue::Hash160(value))
    }

    pub fn hash256(value: UInt256) -> Self {
        Self::from_value(ContractParameterValue::Hash256(value))
    }

    /// A public key from 33 compressed or 65 uncompressed SEC1 bytes.
    pub fn public_key(bytes: &[u8]) -> ContractResult<Self> {
        let key = compress_public_key(bytes)?;
        Ok(Self::from_value(ContractParameterValue::PublicKey(key)))
    }

    /// A public key from any point encoder.
    pub fn from_point(point: &impl EncodePoint) -> ContractResult<Self> {
        Self::public_key(&point.encode_point(true))
    }

    /// A 64-byte signature, or 65 bytes with a trailing recovery id.
    pub fn signature(bytes: &[u8]) -> ContractResult<Self> {
        if bytes.len() != SIGNATURE_SIZE && bytes.len() != SIGNATURE_SIZE + 1 {
            return Err(ContractError::InvalidKeyLength(bytes.len()));
        }
        Ok(Self::from_value(ContractParameterValue::Signature(
            bytes.to_vec(),
        )))
    }

    pub fn array(items: Vec<ContractParameter>) -> Self {
        Self::from_value(ContractParameterValue::Array(items))
    }

    pub fn map(entries: Vec<(ContractParameter, ContractParameter)>) -> Self {
        Self::from_value(ContractParameterValue::Map(entries))
    }

    pub fn interop_interface() -> Self {
        Self::from_value(ContractParameterValue::InteropInterface)
    }

    /// Attaches a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The type tag of the value.
    pub fn param_type(&self) -> ContractParameterType {
        match &self.value {
            ContractParameterValue::Any => ContractParameterType::Any,
            ContractParameterValue::Boolean(_) => ContractParameterType::Boolean,
            ContractParameterValue::Integer(_) => ContractParameterType::Integer,
            ContractParameterValue::ByteArray(_) => ContractParameterType::ByteArray,
            ContractParameterValue::String(_) => ContractParameterType::String,
            ContractParameterValue::Hash160(_) => ContractParameterType::Hash160,
            ContractParameterValue::Hash256(_) => ContractParameterType::Hash256,
            ContractParameterValue::PublicKey(_) => ContractParameterType::PublicKey,
            ContractParameterValue::Signature(_) => ContractParameterType::Signature,
            ContractParameterValue::Array(_) => ContractParameterType::Array,
            ContractParameterValue::Map(_) => ContractParameterType::Map,
            ContractParameterValue::InteropInterface => ContractParameterType::InteropInterface,
        }
    }

    /// Converts the parameter to its JSON object form.
    pub fn to_json(&self) -> Value {
        let value = match &self.value {
            ContractParameterValue::Any | ContractParameterValue::InteropInterface => Value::Null,
            ContractParameterValue::Boolean(b) => Value::Bool(*b),
            ContractParameterValue::Integer(i) => Value::String(i.to_string()),
            ContractParameterValue::ByteArray(bytes)
            | ContractParameterValue::Signature(bytes) => Value::String(BASE64.encode(bytes)),
            ContractParameterValue::String(s) => Value::String(s.clone()),
            ContractParameterValue::Hash160(h) => Value::String(h.to_hex_string()),
            ContractParameterValue::Hash256(h) => Value::String(h.to_hex_string()),
            ContractParameterValue::PublicKey(key) => Value::String(hex::encode(key)),
            ContractParameterValue::Array(items) => {
                Value::Array(items.iter().map(ContractParameter::to_json).collect())
            }
            ContractParameterValue::Map(entries) => Value::Array(
                entries
                    .iter()
                    .map(|(k, v)| json!({ "key": k.to_json(), "value": v.to_json() }))
                    .collect(),
            ),
        };

        let mut object = Map::new();
        object.insert("type".into(), Value::String(self.param_type().to_string()));
        object.insert("value".into(), value);
        if let Some(name) = &self.name {
            object.insert("name".into(), Value::String(name.clone()));
        }
        Value::Object(object)
    }

    /// Converts a JSON object back into a parameter.
    pub fn from_json(json: &Value) -> ContractResult<Self> {
        let object = json
            .as_object()
            .ok_or_else(|| ContractError::format("parameter must be an object"))?;
        let param_type: ContractParameterType = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ContractError::format("missing or invalid 'type' field"))?
            .parse()
            .map_err(ContractError::InvalidFormat)?;
        let null = Value::Null;
        let value = object.get("value").unwrap_or(&null);

        let mut parameter = match param_type {
            ContractParameterType::Any => Self::any(),
            ContractParameterType::InteropInterface => Self::interop_interface(),
            ContractParameterType::Boolean => Self::boolean(
                value
                    .as_bool()
                    .ok_or_else(|| ContractError::format("invalid Boolean value"))?,
            ),
            ContractParameterType::Integer => Self::integer(parse_integer(value)?),
            ContractParameterType::ByteArray => Self::byte_array(decode_base64(value)?),
            ContractParameterType::Signature => Self::signature(&decode_base64(value)?)?,
            ContractParameterType::String => Self::string(expect_str(value, "String")?),
            ContractParameterType::Hash160 => {
                Self::hash160(UInt160::parse(expect_str(value, "Hash160")?)?)
            }
            ContractParameterType::Hash256 => {
                Self::hash256(UInt256::parse(expect_str(value, "Hash256")?)?)
            }
            ContractParameterType::PublicKey => {
                let bytes = hex::decode(expect_str(value, "PublicKey")?)
                    .map_err(|e| ContractError::format(e.to_string()))?;
                Self::public_key(&bytes)?
            }
            ContractParameterType::Array => Self::array(
                expect_array(value, "Array")?
                    .iter()
                    .map(Self::from_json)
                    .collect::<ContractResult<_>>()?,
            ),
            ContractParameterType::Map => Self::map(
                expect_array(value, "Map")?
                    .iter()
                    .map(|entry| {
                        let key = entry
                            .get("key")
                            .ok_or_else(|| ContractError::format("map entry without 'key'"))?;
                        let value = entry
                            .get("value")
                            .ok_or_else(|| ContractError::format("map entry without 'value'"))?;
                        Ok::<_, ContractError>((Self::from_json(key)?, Self::from_json(value)?))
                    })
                    .collect::<ContractResult<_>>()?,
            ),
            ContractParameterType::Void => {
                return Err(ContractError::format("Void is not a parameter type"))
            }
        };

        if let Some(name) = object.get("name").and_then(Value::as_str) {
            parameter.name = Some(name.to_string());
        }
        Ok(parameter)
    }
}

fn expect_str<'a>(value: &'a Value, what: &str) -> ContractResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| ContractError::format(format!("invalid {what} value")))
}

fn expect_array<'a>(value: &'a Value, what: &str) -> ContractResult<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| ContractError::format(format!("invalid {what} value")))
}

fn parse_integer(value: &Value) -> ContractResult<BigInt> {
    match value {
        Value::String(s) => s
            .parse::<BigInt>()
            .map_err(|e| ContractError::format(format!("invalid Integer value: {e}"))),
        Value::Number(n) => n
            .as_i64()
            .map(BigInt::from)
            .or_else(|| n.as_u64().map(BigInt::from))
            .ok_or_else(|| ContractError::format("Integer value must be whole")),
        _ => Err(ContractError::format("invalid Integer value")),
    }
}

fn decode_base64(value: &Value) -> ContractResult<Vec<u8>> {
    BASE64
        .decode(expect_str(value, "base64")?)
        .map_err(|e| ContractError::format(e.to_string()))
}

impl Serialize for ContractParameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContractParameter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Value::deserialize(deserializer)?;
        Self::from_json(&json).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContractParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name}: ")?;
        }
        match &self.value {
            ContractParameterValue::Any => f.write_str("Any"),
            ContractParameterValue::Boolean(b) => write!(f, "{b}"),
            ContractParameterValue::Integer(i) => write!(f, "{i}"),
            ContractParameterValue::ByteArray(bytes)
            | ContractParameterValue::Signature(bytes) => write!(f, "0x{}", hex::encode(bytes)),
            ContractParameterValue::String(s) => write!(f, "{s:?}"),
            ContractParameterValue::Hash160(h) => write!(f, "{h}"),
            ContractParameterValue::Hash256(h) => write!(f, "{h}"),
            ContractParameterValue::PublicKey(key) => f.write_str(&hex::encode(key)),
            ContractParameterValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            ContractParameterValue::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            ContractParameterValue::InteropInterface => f.write_str("InteropInterface"),
        }
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<BigInt> for ContractParameter {
    fn from(value: BigInt) -> Self {
        Self::integer(value)
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<UInt160> for ContractParameter {
    fn from(value: UInt160) -> Self {
        Self::hash160(value)
    }
}

impl From<UInt256> for ContractParameter {
    fn from(value: UInt256) -> Self {
        Self::hash256(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_type() {
        assert_eq!(
            ContractParameter::integer(5).param_type(),
            ContractParameterType::Integer
        );
        assert_eq!(
            ContractParameter::map(vec![]).param_type(),
            ContractParameterType::Map
        );
    }

    #[test]
    fn test_signature_length() {
        assert!(ContractParameter::signature(&[0; 64]).is_ok());
        assert!(ContractParameter::signature(&[0; 65]).is_ok());
        assert_eq!(
            ContractParameter::signature(&[0; 63]),
            Err(ContractError::InvalidKeyLength(63))
        );
    }

    #[test]
    fn test_public_key_is_compressed() {
        let mut key = [0x07u8; 65];
        key[0] = 0x04;
        let parameter = ContractParameter::public_key(&key).unwrap();
        match parameter.value {
            ContractParameterValue::PublicKey(k) => assert_eq!(k[0], 0x03),
            other => panic!("unexpected value {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        let parameter = ContractParameter::array(vec![
            ContractParameter::integer(1),
            ContractParameter::string("a").with_name("s"),
        ]);
        assert_eq!(parameter.to_string(), "[1, s: \"a\"]");
    }

    #[test]
    fn test_json_integer_forms() {
        let from_string =
            ContractParameter::from_json(&json!({"type": "Integer", "value": "-42"})).unwrap();
        let from_number =
            ContractParameter::from_json(&json!({"type": "Integer", "value": -42})).unwrap();
        assert_eq!(from_string, from_number);
        assert_eq!(from_string.to_json()["value"], json!("-42"));
    }
}
