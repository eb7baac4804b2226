//! Inverter settings: value kinds, descriptors and the wire codec.
//!
//! Every setting is addressed by a numeric ID (sent as a string) and carries a value of one of three
//! kinds. [`registry`] names the well-known ones; anything else can still be addressed with
//! [`SettingDescriptor::new`].

pub mod codec;
pub mod registry;

use crate::error::Error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    Text,
    Boolean,
    Integer,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingKind::Text => f.write_str("text"),
            SettingKind::Boolean => f.write_str("boolean"),
            SettingKind::Integer => f.write_str("integer"),
        }
    }
}

/// Setting value as it travels on the wire: a JSON string, boolean or integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Text(String),
    Boolean(bool),
    Integer(i64),
}

impl SettingValue {
    pub fn kind(&self) -> SettingKind {
        match self {
            SettingValue::Text(_) => SettingKind::Text,
            SettingValue::Boolean(_) => SettingKind::Boolean,
            SettingValue::Integer(_) => SettingKind::Integer,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SettingValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_owned())
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Boolean(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Integer(value)
    }
}

/// Identifies a setting on the wire: its ID and declared value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettingDescriptor<'a> {
    pub id: &'a str,
    pub kind: SettingKind,
}

impl<'a> SettingDescriptor<'a> {
    pub const fn new(id: &'a str, kind: SettingKind) -> Self {
        SettingDescriptor { id, kind }
    }

    pub const fn text(id: &'a str) -> Self {
        Self::new(id, SettingKind::Text)
    }

    pub const fn boolean(id: &'a str) -> Self {
        Self::new(id, SettingKind::Boolean)
    }

    pub const fn integer(id: &'a str) -> Self {
        Self::new(id, SettingKind::Integer)
    }

    /// Fails with [`Error::Encoding`] unless `kind` is the declared kind of this setting.
    pub fn expect_kind(&self, kind: SettingKind) -> Result<(), Error> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(Error::Encoding {
                id: self.id.to_owned(),
                expected: self.kind,
                actual: kind,
            })
        }
    }
}

/// Rust type carrying the value of a setting of kind [`SettingType::KIND`].
pub trait SettingType: Serialize + DeserializeOwned + Into<SettingValue> {
    const KIND: SettingKind;
}

impl SettingType for String {
    const KIND: SettingKind = SettingKind::Text;
}

impl SettingType for bool {
    const KIND: SettingKind = SettingKind::Boolean;
}

impl SettingType for i64 {
    const KIND: SettingKind = SettingKind::Integer;
}

/// Outcome of a write. `success == false` means the inverter rejected the value; `value` is whatever
/// the server reported back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult<T = SettingValue> {
    pub value: T,
    pub success: bool,
    pub message: String,
}

impl<T> WriteResult<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> WriteResult<U> {
        WriteResult {
            value: f(self.value),
            success: self.success,
            message: self.message,
        }
    }
}
