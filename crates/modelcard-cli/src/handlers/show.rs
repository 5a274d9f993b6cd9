//! Show command handler.
//!
//! Prints a report for every record in the input, or for the single
//! record selected with `--name`.

use std::path::Path;

use modelcard_core::{ModelDescription, ModelRecord};

use crate::error::CliError;
use crate::presentation::{StyleRenderer, print_models};
use crate::utils::input::load_records;

/// Execute the show command.
///
/// # Errors
///
/// This function will return an error if:
/// - The input cannot be read or parsed
/// - No record matches `name`
/// - Any selected record lacks a required field (nothing is printed)
pub fn execute(
    input: &Path,
    name: Option<&str>,
    renderer: &dyn StyleRenderer,
) -> Result<(), CliError> {
    let records = load_records(input)?;
    let models = select_models(records, name)?;

    tracing::debug!(count = models.len(), "Printing model reports");
    print_models(&models, renderer)?;
    Ok(())
}

/// Filter records by name and convert every survivor.
///
/// All conversions happen before any output so a bad record never leaves
/// a partial listing behind.
pub fn select_models(
    records: Vec<ModelRecord>,
    name: Option<&str>,
) -> Result<Vec<ModelDescription>, CliError> {
    let selected: Vec<ModelRecord> = match name {
        Some(query) if query.trim().is_empty() => {
            return Err(CliError::Arguments("--name cannot be empty".to_string()));
        }
        Some(query) => {
            let matching: Vec<_> = records
                .into_iter()
                .filter(|record| record.matches_name(query))
                .collect();
            if matching.is_empty() {
                return Err(CliError::NotFound(query.to_string()));
            }
            matching
        }
        None => records,
    };

    selected
        .into_iter()
        .map(|record| ModelDescription::try_from(record).map_err(CliError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelcard_core::ModelError;

    fn record(name: &str) -> ModelRecord {
        ModelRecord::from(ModelDescription::new(name, "Label", "Text.", 10, 5))
    }

    #[test]
    fn test_select_all() {
        let models = select_models(vec![record("models/a"), record("models/b")], None).unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[1].name, "models/b");
    }

    #[test]
    fn test_select_by_short_name() {
        let models =
            select_models(vec![record("models/a"), record("models/b")], Some("b")).unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "models/b");
    }

    #[test]
    fn test_select_unknown_name() {
        let err = select_models(vec![record("models/a")], Some("z")).unwrap_err();
        assert!(matches!(err, CliError::NotFound(ref n) if n == "z"));
    }

    #[test]
    fn test_select_empty_name() {
        let err = select_models(vec![record("models/a")], Some(" ")).unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
    }

    #[test]
    fn test_any_missing_field_fails_whole_selection() {
        let broken = ModelRecord {
            output_token_limit: None,
            ..record("models/b")
        };
        let err = select_models(vec![record("models/a"), broken], None).unwrap_err();
        assert!(matches!(
            err,
            CliError::Model(ModelError::MissingField {
                field: "output_token_limit"
            })
        ));
    }

    #[test]
    fn test_filter_skips_broken_unselected_records() {
        let broken = ModelRecord {
            description: None,
            ..record("models/b")
        };
        let models = select_models(vec![record("models/a"), broken], Some("a")).unwrap();
        assert_eq!(models.len(), 1);
    }
}
