//! Header labels registry
use std::{collections::HashMap, io::Read, str::FromStr};

use itertools::Itertools;
use strum::IntoEnumIterator;

#[cfg(feature = "log")]
use log::{debug, error};

use crate::{
    descriptor::{data_fields, expand},
    error::{HeaderError, RegistryError},
    label::Label,
};

/// Description table shipped with this library
const BUILTIN_DESCRIPTIONS: &str = include_str!("../db/header_descriptions.json");

/// [HeaderRegistry] pairs every [Label] with its format descriptor
/// and its human readable description. It is immutable once loaded
/// and is shared by reference between file producers.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRegistry {
    descriptions: HashMap<Label, String>,
    auto_formatted: Vec<Label>,
}

impl HeaderRegistry {
    /// Loads the description table shipped with this library
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_json_str(BUILTIN_DESCRIPTIONS)
    }

    /// Loads a description table from JSON content,
    /// which must be an object of label to description text.
    pub fn from_json_str(content: &str) -> Result<Self, RegistryError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        Self::from_json_value(value)
    }

    /// Loads a description table from a JSON [Read]able interface
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, RegistryError> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_json_value(value)
    }

    fn from_json_value(value: serde_json::Value) -> Result<Self, RegistryError> {
        let object = match value {
            serde_json::Value::Object(object) => object,
            other => {
                return Err(RegistryError::TypeMismatch {
                    key: String::from("description table"),
                    found: json_type(&other).to_string(),
                })
            },
        };

        let mut descriptions = HashMap::with_capacity(object.len());
        for (key, value) in object {
            match value {
                serde_json::Value::String(text) => {
                    descriptions.insert(key, text);
                },
                other => {
                    return Err(RegistryError::TypeMismatch {
                        key,
                        found: json_type(&other).to_string(),
                    })
                },
            }
        }

        Self::from_descriptions(descriptions)
    }

    /// Builds a [HeaderRegistry] from a label to description mapping.
    /// Every known label must be described, and only known labels may be described.
    pub fn from_descriptions<K, V, I>(descriptions: I) -> Result<Self, RegistryError>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut described = HashMap::new();
        let mut unknown = Vec::new();

        for (key, description) in descriptions {
            match Label::from_str(key.as_ref()) {
                Ok(label) => {
                    described.insert(label, description.into());
                },
                Err(_) => unknown.push(key.as_ref().to_string()),
            }
        }

        if let Some(label) = Label::iter().find(|label| !described.contains_key(label)) {
            #[cfg(feature = "log")]
            error!("missing description for \"{}\"", label);
            return Err(RegistryError::MissingDescription(label.to_string()));
        }

        if let Some(key) = unknown.into_iter().sorted().next() {
            #[cfg(feature = "log")]
            error!("no format for described label \"{}\"", key);
            return Err(RegistryError::MissingDescription(key));
        }

        let auto_formatted = Self::auto_formatted(Label::iter())?;

        #[cfg(feature = "log")]
        debug!(
            "header registry: {} labels, {} auto formatted",
            described.len(),
            auto_formatted.len()
        );

        Ok(Self {
            descriptions: described,
            auto_formatted,
        })
    }

    /// Selects the labels that enumerate one word per data field,
    /// sorted by label text.
    fn auto_formatted<I: Iterator<Item = Label>>(labels: I) -> Result<Vec<Label>, RegistryError> {
        let mut selected = Vec::new();
        for label in labels {
            let tokens = expand(label.descriptor())?;
            if data_fields(&tokens) == label.words() {
                selected.push(label);
            }
        }
        selected.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
        Ok(selected)
    }

    /// Format descriptor of given [Label]
    pub fn descriptor(&self, label: Label) -> &'static str {
        label.descriptor()
    }

    /// Human readable description of given [Label]
    pub fn description(&self, label: Label) -> &str {
        self.descriptions
            .get(&label)
            .map(|s| s.as_str())
            .unwrap_or_default()
    }

    /// Labels whose text enumerates one word per data field, so lines
    /// can be formatted generically. Sorted by label text.
    pub fn auto_formatted_labels(&self) -> &[Label] {
        &self.auto_formatted
    }

    /// Returns true if given [Label] is auto formatted
    pub fn is_auto_formatted(&self, label: Label) -> bool {
        self.auto_formatted.contains(&label)
    }

    /// Identifies a [Label] from its text
    pub fn label(&self, text: &str) -> Result<Label, HeaderError> {
        Label::from_str(text)
            .ok()
            .filter(|label| self.descriptions.contains_key(label))
            .ok_or_else(|| HeaderError::UnknownLabel(text.to_string()))
    }

    /// Returns true if this label text is known
    pub fn contains(&self, text: &str) -> bool {
        self.label(text).is_ok()
    }

    /// Iterates all registered labels
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        Label::iter().filter(|label| self.descriptions.contains_key(label))
    }
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn builtin_table() -> serde_json::Map<String, serde_json::Value> {
        match serde_json::from_str(BUILTIN_DESCRIPTIONS).unwrap() {
            serde_json::Value::Object(object) => object,
            _ => panic!("builtin table should be an object"),
        }
    }

    #[test]
    fn builtin() {
        let registry = HeaderRegistry::builtin().unwrap();
        assert_eq!(registry.labels().count(), 32);
        for label in Label::iter() {
            assert!(!registry.description(label).is_empty());
            assert_eq!(registry.descriptor(label), label.descriptor());
            assert_eq!(registry.label(label.as_ref()), Ok(label));
        }
        assert!(registry.contains("COMMENT"));
        assert!(!registry.contains("MARKER NAME"));
        assert_eq!(
            registry.label("MARKER NAME"),
            Err(HeaderError::UnknownLabel("MARKER NAME".to_string()))
        );
    }

    #[test]
    fn reader() {
        let registry = HeaderRegistry::from_json_reader(BUILTIN_DESCRIPTIONS.as_bytes()).unwrap();
        assert_eq!(registry, HeaderRegistry::builtin().unwrap());
    }

    #[test]
    fn missing_description() {
        let mut table = builtin_table();
        table.remove("COMMENT");
        let content = serde_json::Value::Object(table).to_string();
        match HeaderRegistry::from_json_str(&content) {
            Err(RegistryError::MissingDescription(label)) => assert_eq!(label, "COMMENT"),
            other => panic!("expecting missing description, got {:?}", other),
        }
    }

    #[test]
    fn unknown_description() {
        let mut table = builtin_table();
        table.insert(
            "MARKER NAME".to_string(),
            serde_json::Value::String("Name of antenna marker".to_string()),
        );
        let content = serde_json::Value::Object(table).to_string();
        match HeaderRegistry::from_json_str(&content) {
            Err(RegistryError::MissingDescription(label)) => assert_eq!(label, "MARKER NAME"),
            other => panic!("expecting missing description, got {:?}", other),
        }
    }

    #[test]
    fn wrong_value_type() {
        let mut table = builtin_table();
        table.insert("COMMENT".to_string(), serde_json::Value::from(123));
        let content = serde_json::Value::Object(table).to_string();
        match HeaderRegistry::from_json_str(&content) {
            Err(RegistryError::TypeMismatch { key, found }) => {
                assert_eq!(key, "COMMENT");
                assert_eq!(found, "number");
            },
            other => panic!("expecting type mismatch, got {:?}", other),
        }
        assert!(matches!(
            HeaderRegistry::from_json_str("[\"COMMENT\"]"),
            Err(RegistryError::TypeMismatch { .. })
        ));
        assert!(matches!(
            HeaderRegistry::from_json_str("{\"COMMENT\""),
            Err(RegistryError::Json(_))
        ));
    }

    #[test]
    fn from_descriptions() {
        let descriptions = Label::iter()
            .map(|label| (label.to_string(), "test"))
            .collect::<Vec<_>>();
        let registry = HeaderRegistry::from_descriptions(descriptions).unwrap();
        assert_eq!(registry.description(Label::Exponent), "test");
        assert!(HeaderRegistry::from_descriptions(Vec::<(String, String)>::new()).is_err());
    }

    #[test]
    fn auto_formatted_labels() {
        let registry = HeaderRegistry::builtin().unwrap();
        let labels = registry.auto_formatted_labels();
        assert_eq!(labels.len(), 26);
        for label in [
            Label::VersionType,
            Label::EpochOfFirstMap,
            Label::EpochOfLastMap,
            Label::EpochOfCurrentMap,
            Label::EndOfHeader,
            Label::EndOfFile,
        ] {
            assert!(!registry.is_auto_formatted(label), "{}", label);
        }
        for label in [
            Label::ProgramRunByDate,
            Label::SystemStationsSatellites,
            Label::LatitudeGrid,
            Label::GridLocator,
            Label::Comment,
            Label::Interval,
        ] {
            assert!(registry.is_auto_formatted(label), "{}", label);
        }
        assert_eq!(labels[0], Label::NumberOfMaps);
        assert!(labels
            .windows(2)
            .all(|pair| pair[0].as_ref() < pair[1].as_ref()));
    }
}
