use std::path::Path;

use crate::data::model::DatasetSpec;

/// Input files, relative to the working directory.
pub const MALE_CSV: &str = "data/male.csv";
pub const FEMALE_CSV: &str = "data/female.csv";

/// Column rewritten in every input.
pub const NAME_COLUMN: &str = "name";

/// What the pipeline reads and which column it lowercases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Processed in order; all are read before any is written.
    pub inputs: Vec<DatasetSpec>,
    pub column: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            inputs: vec![
                DatasetSpec::new("male", MALE_CSV),
                DatasetSpec::new("female", FEMALE_CSV),
            ],
            column: NAME_COLUMN.to_string(),
        }
    }
}

impl PipelineConfig {
    /// The default inputs resolved against `root` instead of the working directory.
    pub fn rooted_at(root: &Path) -> Self {
        let mut config = Self::default();
        for input in &mut config.inputs {
            input.path = root.join(&input.path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_male_then_female_name_column() {
        let config = PipelineConfig::default();
        let labels: Vec<&str> = config.inputs.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["male", "female"]);
        assert_eq!(config.inputs[0].path, Path::new("data/male.csv"));
        assert_eq!(config.column, "name");
    }

    #[test]
    fn rooted_at_prefixes_every_input() {
        let config = PipelineConfig::rooted_at(Path::new("/tmp/work"));
        assert_eq!(config.inputs[1].path, Path::new("/tmp/work/data/female.csv"));
    }
}
