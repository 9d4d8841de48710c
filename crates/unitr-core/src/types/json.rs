//! JSON interchange: `{"mathjs": "Unit", "value": 5, "unit": "cm"}`

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::UnitValue;
use crate::context::Context;
use crate::error::{Result, UnitError};
use crate::numeric::Numeric;

/// Value of the `mathjs` tag
pub const JSON_TAG: &str = "Unit";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitJson<N> {
    pub mathjs: String,
    pub value: Option<N>,
    pub unit: String,
}

impl<N: Numeric> UnitValue<N> {
    pub fn to_json_repr(&self) -> UnitJson<N> {
        UnitJson {
            mathjs: JSON_TAG.to_string(),
            value: self.value().cloned(),
            unit: self.format_units(),
        }
    }
}

impl<N: Numeric + Serialize> UnitValue<N> {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.to_json_repr()).map_err(|e| UnitError::InvalidJson(e.to_string()))
    }
}

impl<N: Numeric + DeserializeOwned> UnitJson<N> {
    /// Decode and check the `mathjs` tag
    pub fn parse(text: &str) -> Result<Self> {
        let json: Self = serde_json::from_str(text).map_err(|e| UnitError::InvalidJson(e.to_string()))?;
        if json.mathjs != JSON_TAG {
            return Err(UnitError::InvalidJson(format!(
                "expected \"mathjs\": \"{JSON_TAG}\", found \"{}\"",
                json.mathjs
            )));
        }
        Ok(json)
    }
}

pub(crate) fn from_json<N: Numeric + DeserializeOwned>(text: &str, ctx: &Arc<Context<N>>) -> Result<UnitValue<N>> {
    let json = UnitJson::<N>::parse(text)?;
    UnitValue::parse_with_value(&json.unit, json.value, ctx)
}
