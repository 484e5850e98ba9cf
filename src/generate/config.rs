use std::str::FromStr;

use super::error::GenerateError;
use crate::base::{PACKAGE_SEPARATOR, PATH_SEPARATOR};

/// Default artifact file extension.
pub const DEFAULT_EXTENSION: &str = "schema";

/// Which formatter produces artifact content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentKind {
    /// JSON description of the message's fields.
    #[default]
    Schema,
    /// Fixed marker content.
    Placeholder,
}

impl FromStr for ContentKind {
    type Err = GenerateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "schema" => Ok(ContentKind::Schema),
            "placeholder" => Ok(ContentKind::Placeholder),
            other => Err(GenerateError::invalid_parameter(format!(
                "unknown content kind `{other}` (expected `schema` or `placeholder`)"
            ))),
        }
    }
}

/// Generator settings taken from the plugin parameter string.
///
/// The parameter is a comma-separated list of `key=value` pairs, e.g.
/// `content=placeholder,extension=avsc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub content: ContentKind,
    /// Artifact file extension, without the dot.
    pub extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            content: ContentKind::default(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Parse the plugin parameter string. `None` yields the defaults.
    pub fn from_parameter(parameter: Option<&str>) -> Result<Self, GenerateError> {
        let mut config = Self::default();
        let Some(parameter) = parameter else {
            return Ok(config);
        };

        for pair in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let Some((key, value)) = pair.split_once('=') else {
                return Err(GenerateError::invalid_parameter(format!(
                    "expected `key=value`, got `{pair}`"
                )));
            };
            match key.trim() {
                "content" => config.content = value.trim().parse()?,
                "extension" => config.extension = parse_extension(value.trim())?,
                other => {
                    return Err(GenerateError::invalid_parameter(format!(
                        "unknown key `{other}`"
                    )));
                }
            }
        }
        Ok(config)
    }
}

fn parse_extension(value: &str) -> Result<String, GenerateError> {
    let valid = !value.is_empty()
        && !value
            .chars()
            .any(|c| c == PACKAGE_SEPARATOR || c == PATH_SEPARATOR || c == '\\');
    if valid {
        Ok(value.to_string())
    } else {
        Err(GenerateError::invalid_parameter(format!(
            "invalid extension `{value}`"
        )))
    }
}
