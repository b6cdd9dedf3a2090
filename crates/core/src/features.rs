//! Derived feature vector handed to the model boundary.

use crate::reference::WagonType;

/// Ordered feature mapping, built once per request and never mutated.
///
/// Keys are inserted in training-schema order by the deriver; the model
/// boundary re-projects them through its own column list before inference,
/// so the order here is a convention, not a contract.
///
/// The wagon type and capacity ride along as typed fields because the
/// constraint engine consumes them directly; the capacity also appears in
/// `values` under `quantity_per_wagon_tonnes` for the model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<(&'static str, f64)>,
    wagon_type: WagonType,
    wagon_capacity: f64,
}

impl FeatureVector {
    pub fn new(
        values: Vec<(&'static str, f64)>,
        wagon_type: WagonType,
        wagon_capacity: f64,
    ) -> Self {
        Self {
            values,
            wagon_type,
            wagon_capacity,
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn wagon_type(&self) -> WagonType {
        self.wagon_type
    }

    pub fn wagon_capacity(&self) -> f64 {
        self.wagon_capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_finds_inserted_keys() {
        let vector = FeatureVector::new(
            vec![("demand_next_7days", 700.0), ("month", 8.0)],
            WagonType::Boy,
            54.79,
        );
        assert_eq!(vector.get("month"), Some(8.0));
        assert_eq!(vector.get("absent"), None);
        assert_eq!(vector.len(), 2);
        assert_eq!(vector.wagon_capacity(), 54.79);
    }
}
