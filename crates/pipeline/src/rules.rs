//! Business-rule constraint engine.
//!
//! Rules run in a fixed order and each appends its identifier to the audit
//! trail only when it actually changed the outcome. The order is load-bearing:
//! the minimum-dispatch guarantee (rule 4) deliberately overrides the
//! availability clamp (rule 2), so a final supply may exceed the clamp by up
//! to one wagon's capacity.

use std::sync::Arc;

use railcast_core::{ConstraintResult, FeatureVector, Rule, StockyardId};
use railcast_reference::ReferenceDataProvider;

/// Apply the ordered rule sequence to a raw model prediction.
///
/// Pure: availability is passed in, the engine wrapper resolves it.
/// Wagon rounding is round-half-away-from-zero (`f64::round`); half a wagon
/// of demand dispatches the wagon.
pub fn apply_rules(
    raw_prediction: f64,
    features: &FeatureVector,
    available_wagons: u32,
) -> ConstraintResult {
    let wagon_capacity = features.wagon_capacity();
    let mut rules_applied = Vec::new();
    let mut supply = raw_prediction;

    // Rule 1: no negative supply.
    if raw_prediction < 0.0 {
        supply = 0.0;
        rules_applied.push(Rule::NegativeSupplyClipped);
    }

    // Rule 2: don't exceed the wagons actually available.
    let max_supply = f64::from(available_wagons) * wagon_capacity;
    if supply > max_supply {
        supply = max_supply;
        rules_applied.push(Rule::WagonCapacityLimit);
    }

    // Rule 3: quantize to full wagons.
    let mut wagons_required = (supply / wagon_capacity).round() as u32;
    let rounded_supply = f64::from(wagons_required) * wagon_capacity;
    if rounded_supply != supply {
        supply = rounded_supply;
        rules_applied.push(Rule::WagonRounding);
    }

    // Rule 4: minimum dispatch. A positive signal never rounds away to
    // nothing.
    if raw_prediction > 0.0 && wagons_required == 0 {
        wagons_required = 1;
        supply = wagon_capacity;
        rules_applied.push(Rule::MinimumSupply);
    }

    if rules_applied.is_empty() {
        rules_applied.push(Rule::NoRulesApplied);
    }

    ConstraintResult {
        final_supply: supply,
        wagons_required,
        wagon_type: features.wagon_type(),
        wagon_capacity,
        rules_applied,
    }
}

/// Constraint engine bound to a reference-data backend for availability.
pub struct ConstraintEngine {
    provider: Arc<dyn ReferenceDataProvider>,
}

impl ConstraintEngine {
    pub fn new(provider: Arc<dyn ReferenceDataProvider>) -> Self {
        Self { provider }
    }

    pub async fn apply(
        &self,
        raw_prediction: f64,
        features: &FeatureVector,
        stockyard_id: &StockyardId,
    ) -> ConstraintResult {
        let available_wagons = self.provider.available_wagons(stockyard_id).await;
        apply_rules(raw_prediction, features, available_wagons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railcast_core::WagonType;

    fn features(capacity: f64) -> FeatureVector {
        FeatureVector::new(
            vec![("quantity_per_wagon_tonnes", capacity)],
            WagonType::Boy,
            capacity,
        )
    }

    #[test]
    fn negative_prediction_is_clipped_to_zero() {
        let result = apply_rules(-120.0, &features(50.0), 45);
        assert_eq!(result.final_supply, 0.0);
        assert_eq!(result.wagons_required, 0);
        assert_eq!(result.rules_applied, vec![Rule::NegativeSupplyClipped]);
    }

    #[test]
    fn supply_is_clamped_to_available_wagons() {
        // 5 wagons x 50 t = 250 t ceiling.
        let result = apply_rules(400.0, &features(50.0), 5);
        assert_eq!(result.final_supply, 250.0);
        assert_eq!(result.wagons_required, 5);
        assert_eq!(result.rules_applied, vec![Rule::WagonCapacityLimit]);
    }

    #[test]
    fn rounding_fixture_matches_reference_case() {
        // 600 / 54.79 = 10.95 -> 11 wagons -> 602.69 t.
        let result = apply_rules(600.0, &features(54.79), 45);
        assert_eq!(result.wagons_required, 11);
        assert!((result.final_supply - 602.69).abs() < 1e-9);
        assert_eq!(result.rules_applied, vec![Rule::WagonRounding]);
    }

    #[test]
    fn half_a_wagon_rounds_up() {
        // Pinned policy: round-half-away-from-zero, not banker's rounding.
        let result = apply_rules(525.0, &features(50.0), 45);
        assert_eq!(result.wagons_required, 11);
        assert_eq!(result.final_supply, 550.0);
    }

    #[test]
    fn positive_signal_forces_at_least_one_wagon() {
        // 10 / 50 = 0.2 rounds to zero wagons; rule 4 forces one.
        let result = apply_rules(10.0, &features(50.0), 45);
        assert_eq!(result.wagons_required, 1);
        assert_eq!(result.final_supply, 50.0);
        assert_eq!(
            result.rules_applied,
            vec![Rule::WagonRounding, Rule::MinimumSupply]
        );
    }

    #[test]
    fn minimum_dispatch_overrides_availability_clamp() {
        // Zero wagons available: rule 2 clamps to 0, rule 4 still dispatches
        // one wagon. Intentional precedence.
        let result = apply_rules(100.0, &features(50.0), 0);
        assert_eq!(result.wagons_required, 1);
        assert_eq!(result.final_supply, 50.0);
        assert_eq!(
            result.rules_applied,
            vec![Rule::WagonCapacityLimit, Rule::MinimumSupply]
        );
    }

    #[test]
    fn exact_multiple_within_availability_fires_no_rules() {
        let result = apply_rules(100.0, &features(50.0), 45);
        assert_eq!(result.final_supply, 100.0);
        assert_eq!(result.wagons_required, 2);
        assert_eq!(result.rules_applied, vec![Rule::NoRulesApplied]);
    }

    #[tokio::test]
    async fn engine_resolves_availability_from_provider() {
        use railcast_reference::StaticReferenceProvider;

        let engine = ConstraintEngine::new(Arc::new(StaticReferenceProvider::new()));
        // CMO_LOC_005 has 25 wagons: 25 x 50 = 1250 t ceiling.
        let result = engine
            .apply(2000.0, &features(50.0), &StockyardId::new("CMO_LOC_005"))
            .await;
        assert_eq!(result.final_supply, 1250.0);
        assert_eq!(result.wagons_required, 25);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: final supply is non-negative and an exact wagon
            /// multiple, and the trail is never empty.
            #[test]
            fn result_is_wagon_quantized(
                raw in -10_000.0f64..10_000.0,
                capacity in 1.0f64..100.0,
                available in 0u32..100,
            ) {
                let result = apply_rules(raw, &features(capacity), available);

                prop_assert!(result.final_supply >= 0.0);
                prop_assert!(!result.rules_applied.is_empty());
                let reconstructed = f64::from(result.wagons_required) * result.wagon_capacity;
                prop_assert_eq!(result.final_supply, reconstructed);
            }

            /// Property: the engine is a fixed point; re-applying it to its
            /// own output changes nothing.
            #[test]
            fn reapplication_is_identity(
                raw in -10_000.0f64..10_000.0,
                capacity in 1.0f64..100.0,
                available in 0u32..100,
            ) {
                let first = apply_rules(raw, &features(capacity), available);
                let second = apply_rules(first.final_supply, &features(capacity), available);

                prop_assert_eq!(first.final_supply, second.final_supply);
                prop_assert_eq!(first.wagons_required, second.wagons_required);
            }
        }
    }
}
