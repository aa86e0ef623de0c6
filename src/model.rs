//! Data model for component specs, independent of any output format.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Top-level shape of the first YAML document in a component file.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SpecFile {
    #[serde(default)]
    pub spec: Option<ComponentSpec>,
}

/// The `spec:` block of a component.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ComponentSpec {
    /// Keyed by input name; iteration order is the presentation order.
    #[serde(default, deserialize_with = "input_map")]
    pub inputs: BTreeMap<String, ComponentInput>,
}

impl ComponentSpec {
    pub fn has_types(&self) -> bool {
        self.inputs.values().any(|i| !i.input_type.is_empty())
    }

    pub fn has_options(&self) -> bool {
        self.inputs.values().any(|i| !i.options.is_empty())
    }

    pub fn has_regex(&self) -> bool {
        self.inputs.values().any(|i| !i.regex.is_empty())
    }
}

/// A single documented input. Empty strings and lists mean "not set".
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComponentInput {
    #[serde(deserialize_with = "scalar_string")]
    pub default: String,
    #[serde(deserialize_with = "scalar_string")]
    pub description: String,
    #[serde(deserialize_with = "scalar_list")]
    pub options: Vec<String>,
    #[serde(rename = "type", deserialize_with = "scalar_string")]
    pub input_type: String,
    #[serde(deserialize_with = "scalar_string")]
    pub regex: String,
}

/// One documentation unit: a spec file plus optional prose.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub spec: Option<ComponentSpec>,
}

impl Component {
    /// Header text with surrounding whitespace removed, if any is left.
    pub fn header_text(&self) -> Option<&str> {
        trimmed(&self.header)
    }

    /// Footer text with surrounding whitespace removed, if any is left.
    pub fn footer_text(&self) -> Option<&str> {
        trimmed(&self.footer)
    }

    /// True when there is nothing to render for this component.
    pub fn is_empty(&self) -> bool {
        self.header_text().is_none() && self.footer_text().is_none() && self.spec.is_none()
    }
}

fn trimmed(text: &Option<String>) -> Option<&str> {
    text.as_deref().map(str::trim).filter(|t| !t.is_empty())
}

// -- Scalar coercion ----------------------------------------------------------

/// Text of a scalar input value.
///
/// Files read through [`crate::yaml`] only carry strings and nulls here, so
/// the written form is kept. Typed values from other deserializers fall back
/// to their canonical form.
fn scalar_text<E: de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s),
        Value::Tagged(tagged) => scalar_text(tagged.value),
        Value::Sequence(_) => Err(E::custom("expected a scalar, found a sequence")),
        Value::Mapping(_) => Err(E::custom("expected a scalar, found a mapping")),
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_text(Value::deserialize(deserializer)?)
}

fn scalar_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Vec<Value>>::deserialize(deserializer)? {
        Some(values) => values.into_iter().map(scalar_text).collect(),
        None => Ok(Vec::new()),
    }
}

/// `inputs:` and each `name:` beneath it may be left bare (null).
fn input_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, ComponentInput>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Option<ComponentInput>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, input)| (name, input.unwrap_or_default()))
        .collect())
}
