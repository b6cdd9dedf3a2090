//! Feature schema: the ordered column list the model was trained on.

use std::path::Path;

use serde::{Deserialize, Serialize};

use railcast_core::FeatureVector;

use crate::error::ModelError;

/// Training-schema descriptor supplied at process start.
///
/// `feature_columns` fixes the exact input order for inference; the
/// numerical/categorical split is introspection metadata for clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub feature_columns: Vec<String>,
    pub numerical_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
}

impl FeatureSchema {
    pub fn new(
        feature_columns: Vec<String>,
        numerical_columns: Vec<String>,
        categorical_columns: Vec<String>,
    ) -> Self {
        Self {
            feature_columns,
            numerical_columns,
            categorical_columns,
        }
    }

    /// Load the schema descriptor from a JSON artifact.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Artifact {
            path: path.display().to_string(),
            source,
        })?;
        let schema: Self = serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        schema.validate()?;
        Ok(schema)
    }

    /// Structural sanity: non-empty, and every column classified exactly once.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.feature_columns.is_empty() {
            return Err(ModelError::SchemaMismatch(
                "schema declares no feature columns".to_string(),
            ));
        }
        for column in &self.feature_columns {
            let numerical = self.numerical_columns.contains(column);
            let categorical = self.categorical_columns.contains(column);
            if numerical == categorical {
                return Err(ModelError::SchemaMismatch(format!(
                    "column {column} must be classified as exactly one of numerical/categorical"
                )));
            }
        }
        Ok(())
    }

    /// Project a derived feature vector into model input order.
    ///
    /// The deriver's insertion order carries no contract; this projection is
    /// the single place the training order is enforced.
    pub fn project(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        self.feature_columns
            .iter()
            .map(|column| {
                features
                    .get(column)
                    .ok_or_else(|| ModelError::MissingFeature(column.clone()))
            })
            .collect()
    }

    pub fn width(&self) -> usize {
        self.feature_columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railcast_core::WagonType;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(
            vec!["b".to_string(), "a".to_string()],
            vec!["b".to_string(), "a".to_string()],
            vec![],
        )
    }

    #[test]
    fn project_follows_schema_order_not_insertion_order() {
        let features = FeatureVector::new(vec![("a", 1.0), ("b", 2.0)], WagonType::Boy, 50.0);
        let projected = schema().project(&features).unwrap();
        assert_eq!(projected, vec![2.0, 1.0]);
    }

    #[test]
    fn project_reports_missing_column() {
        let features = FeatureVector::new(vec![("a", 1.0)], WagonType::Boy, 50.0);
        let err = schema().project(&features).unwrap_err();
        assert!(matches!(err, ModelError::MissingFeature(name) if name == "b"));
    }

    #[test]
    fn validate_rejects_unclassified_column() {
        let schema = FeatureSchema::new(
            vec!["a".to_string()],
            vec![],
            vec![],
        );
        assert!(schema.validate().is_err());
    }
}
