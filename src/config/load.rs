//! Loading run specifications from YAML files

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::schema::FinetuneSpec;
use super::validate::validate_config;

/// Load and validate a run specification from a YAML file
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<FinetuneSpec> {
    let yaml = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    parse_config(&yaml)
}

/// Parse and validate a run specification from YAML text
pub fn parse_config(yaml: &str) -> Result<FinetuneSpec> {
    let spec: FinetuneSpec = serde_yaml::from_str(yaml)
        .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))?;

    validate_config(&spec).map_err(|e| Error::Config(format!("Invalid config: {e}")))?;

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_YAML: &str = r#"
model:
  name: gemma-3n-E2B-it

data:
  dataset: unsloth/Radiology_mini
  batch_size: 1

optimizer:
  name: adamw
  lr: 0.0002
"#;

    #[test]
    fn test_load_valid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(MINIMAL_YAML.as_bytes()).unwrap();

        let spec = load_config(temp_file.path()).unwrap();
        assert_eq!(spec.model.name, "gemma-3n-E2B-it");
        assert_eq!(spec.data.batch_size, 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("does-not-exist.yaml");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_parse_invalid_values() {
        let yaml = MINIMAL_YAML.replace("batch_size: 1", "batch_size: 0");
        let result = parse_config(&yaml);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_parse_malformed_yaml() {
        let result = parse_config("this is not valid yaml: [}");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
