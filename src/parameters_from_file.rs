//! Supports reading link lengths from YAML file (optional)

use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

use crate::parameter_error::ParameterError;
use crate::parameters::planar_arm::LinkLengths;

const ROOT_KEY: &str = "planar_arm_link_lengths";

impl LinkLengths {
    /// Read the arm configuration from YAML file. YAML file like this is supported:
    /// ```yaml
    /// # The default manipulator
    /// planar_arm_link_lengths:
    ///   upper_arm: 150.0
    ///   forearm: 120.0
    ///   palm: 60.0
    /// ```
    /// All three lengths are required, must be finite and positive. Integers are accepted.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let lengths = Self::from_yaml_str(&contents)?;
        tracing::debug!("Link lengths read from {}: {:?}", path.display(), lengths);
        Ok(lengths)
    }

    /// Same as [LinkLengths::from_yaml_file] but parses the YAML text directly.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        let doc = docs.first()
            .ok_or_else(|| ParameterError::MissingField(ROOT_KEY.to_string()))?;

        let section = &doc[ROOT_KEY];
        if section.is_badvalue() {
            return Err(ParameterError::MissingField(ROOT_KEY.to_string()));
        }

        Ok(LinkLengths {
            upper_arm: length(section, "upper_arm")?,
            forearm: length(section, "forearm")?,
            palm: length(section, "palm")?,
        })
    }
}

/// Extract a single length, accepting both reals and integers.
fn length(section: &Yaml, name: &str) -> Result<f64, ParameterError> {
    let value = match &section[name] {
        Yaml::BadValue => {
            return Err(ParameterError::MissingField(format!("{}.{}", ROOT_KEY, name)));
        }
        Yaml::Integer(i) => *i as f64,
        Yaml::Real(_) => section[name].as_f64().ok_or_else(|| {
            ParameterError::ParseError(format!("{} is not a valid number", name))
        })?,
        other => {
            return Err(ParameterError::ParseError(format!(
                "{} must be a number (got {:?})", name, other
            )));
        }
    };

    if !value.is_finite() || value <= 0.0 {
        return Err(ParameterError::InvalidLength { name: name.to_string(), value });
    }
    Ok(value)
}
