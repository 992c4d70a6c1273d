use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::de::DeserializeOwned;

use crate::api::Generator;
use crate::api::types::{Dataset, FormSpec, PromptSpec, RuleSpec};

/// Which generation endpoint a spec file targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
    Form,
    Rule,
    Prompt,
}

/// Reads the spec file for `mode` and asks the backend to generate a
/// dataset from it. The dataset is printed as JSON.
#[tracing::instrument(skip(generator))]
pub async fn generate(generator: &Generator, mode: GenerateMode, spec_path: &Path) -> Result<()> {
    debug!("Generating ({:?}) from {:?}", mode, spec_path);

    let dataset = match mode {
        GenerateMode::Form => {
            let spec: FormSpec = load_spec(spec_path)?;
            generator.from_form(&spec).await?
        }
        GenerateMode::Rule => {
            let spec: RuleSpec = load_spec(spec_path)?;
            generator.from_rules(&spec).await?
        }
        GenerateMode::Prompt => {
            let spec: PromptSpec = load_spec(spec_path)?;
            generator.from_prompt(&spec).await?
        }
    };

    print_dataset(&dataset)?;
    Ok(())
}

fn load_spec<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid spec file {:?}", path))
}

fn print_dataset(dataset: &Dataset) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(dataset)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_spec_form() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"fields": [{{"name": "age", "kind": "int"}}], "rows": 50}}"#
        )
        .unwrap();

        let spec: FormSpec = load_spec(file.path()).unwrap();
        assert_eq!(spec.rows, 50);
        assert_eq!(spec.fields[0].kind, "int");
    }

    #[test]
    fn test_load_spec_missing_file() {
        let result: Result<FormSpec> = load_spec(Path::new("/nonexistent/spec.json"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read spec file"));
    }

    #[test]
    fn test_load_spec_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result: Result<PromptSpec> = load_spec(file.path());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid spec file"));
    }
}
