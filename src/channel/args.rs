use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("Expected Bool")]
    ExpectedBool,
    #[error("Expected a map of arguments")]
    ExpectedMap,
    #[error("Missing required key '{0}'")]
    MissingKey(&'static str),
    #[error("Key '{key}' must be a {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },
}

impl ArgError {
    pub const CODE: &'static str = "BAD_ARGS";
}

pub fn as_bool(args: &Value) -> Result<bool, ArgError> {
    args.as_bool().ok_or(ArgError::ExpectedBool)
}

pub fn as_map(args: &Value) -> Result<&Map<String, Value>, ArgError> {
    args.as_object().ok_or(ArgError::ExpectedMap)
}

pub fn require_str<'a>(map: &'a Map<String, Value>, key: &'static str) -> Result<&'a str, ArgError> {
    let value = map.get(key).ok_or(ArgError::MissingKey(key))?;
    value.as_str().ok_or(ArgError::WrongType {
        key,
        expected: "String",
    })
}

pub fn require_bool(map: &Map<String, Value>, key: &'static str) -> Result<bool, ArgError> {
    let value = map.get(key).ok_or(ArgError::MissingKey(key))?;
    value.as_bool().ok_or(ArgError::WrongType {
        key,
        expected: "Bool",
    })
}
