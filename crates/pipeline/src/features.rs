//! Deterministic feature derivation.
//!
//! Expands the four request fields plus reference data into the full
//! 52-column vector the model was trained on. Pure function of its inputs
//! for a fixed timestamp.

use std::f64::consts::TAU;

use chrono::{DateTime, Datelike, Utc};

use railcast_core::{FeatureVector, PredictionRequest, ReferenceData};
use railcast_model::FeatureSchema;

/// Training column order. The shipped `models/feature_schema.json` artifact
/// lists the same names in the same order.
pub const FEATURE_COLUMNS: [&str; 52] = [
    "current_inventory_tonnes",
    "inventory_7day_avg",
    "inventory_7day_min",
    "days_of_inventory_available",
    "storage_utilization_pct",
    "total_daily_demand_tonnes",
    "demand_7day_avg",
    "demand_30day_avg",
    "demand_7day_std",
    "demand_next_7days",
    "demand_next_30days",
    "demand_lag_1",
    "demand_lag_7",
    "demand_lag_30",
    "quantity_per_wagon_tonnes",
    "wagon_type_required",
    "loading_cost",
    "distance_from_plant_km",
    "transportation_lead_time_days",
    "transportation_cost_per_tonne",
    "day_of_week",
    "month",
    "quarter",
    "is_weekend",
    "week_of_year",
    "day_of_year",
    "month_sin",
    "month_cos",
    "day_sin",
    "day_cos",
    "num_customers",
    "avg_priority",
    "available_wagons_count",
    "total_rake_capacity_wagons",
    "potential_wagons_needed",
    "wagon_utilization_pct",
    "bokaro_plant_capacity_daily",
    "plant_utilization_pct",
    "plant_production_available",
    "high_plant_utilization",
    "medium_plant_utilization",
    "stockyard_capacity_max_tonnes",
    "safety_stock_tonnes",
    "high_utilization_risk",
    "medium_utilization_risk",
    "fill_rate_last_30days",
    "stockout_incidents_last_30days",
    "on_time_delivery_pct",
    "stockout_risk_high",
    "stockout_risk_medium",
    "stockout_risk_low",
    "inventory_turnover_ratio",
];

/// Fixed stand-ins for telemetry feeds that are not wired up yet.
///
/// The model was trained against these exact values; they must be emitted
/// verbatim, not recomputed, until the upstream pipelines exist.
mod simulated {
    pub const NUM_CUSTOMERS: f64 = 8.0;
    pub const AVG_PRIORITY: f64 = 2.5;
    pub const AVAILABLE_WAGONS_COUNT: f64 = 45.0;
    pub const TOTAL_RAKE_CAPACITY_WAGONS: f64 = 200.0;
    pub const WAGON_UTILIZATION_PCT: f64 = 75.0;
    pub const PLANT_CAPACITY_DAILY: f64 = 850.0;
    pub const PLANT_UTILIZATION_PCT: f64 = 85.0;
    pub const PLANT_PRODUCTION_AVAILABLE: f64 = 722.5;
    pub const HIGH_PLANT_UTILIZATION: f64 = 0.0;
    pub const MEDIUM_PLANT_UTILIZATION: f64 = 1.0;
    pub const SAFETY_STOCK_TONNES: f64 = 500.0;
    pub const HIGH_UTILIZATION_RISK: f64 = 0.0;
    pub const MEDIUM_UTILIZATION_RISK: f64 = 0.0;
    pub const FILL_RATE_LAST_30DAYS: f64 = 92.5;
    pub const STOCKOUT_INCIDENTS_LAST_30DAYS: f64 = 1.0;
    pub const ON_TIME_DELIVERY_PCT: f64 = 89.0;
    pub const STOCKOUT_RISK_HIGH: f64 = 0.0;
    pub const STOCKOUT_RISK_MEDIUM: f64 = 0.0;
    pub const STOCKOUT_RISK_LOW: f64 = 1.0;
}

/// Derive the full feature vector for one request.
///
/// `as_of` pins the time-of-year features; pass the same timestamp and the
/// output is bit-reproducible.
pub fn derive(
    request: &PredictionRequest,
    reference: &ReferenceData,
    as_of: DateTime<Utc>,
) -> FeatureVector {
    let inventory = request.current_inventory;
    let demand = request.next_7day_demand;

    // Deliberately 1.0 (not 0.0) when there is no demand: several downstream
    // features divide by this value.
    let avg_daily_demand = if demand > 0.0 { demand / 7.0 } else { 1.0 };
    let days_of_inventory = if avg_daily_demand > 0.0 {
        inventory / avg_daily_demand
    } else {
        365.0
    };
    let turnover = if inventory > 0.0 {
        avg_daily_demand * 30.0 / inventory
    } else {
        0.0
    };

    // Monday-based weekday in [0, 6]; month in [1, 12].
    let weekday = f64::from(as_of.weekday().num_days_from_monday());
    let month = f64::from(as_of.month());
    let quarter = f64::from((as_of.month() - 1) / 3 + 1);
    let is_weekend = if as_of.weekday().num_days_from_monday() >= 5 {
        1.0
    } else {
        0.0
    };

    let values = vec![
        ("current_inventory_tonnes", inventory),
        ("inventory_7day_avg", inventory * 0.95),
        ("inventory_7day_min", inventory * 0.85),
        ("days_of_inventory_available", days_of_inventory),
        (
            "storage_utilization_pct",
            inventory / reference.max_storage_capacity_tonnes * 100.0,
        ),
        ("total_daily_demand_tonnes", avg_daily_demand),
        ("demand_7day_avg", avg_daily_demand),
        ("demand_30day_avg", avg_daily_demand * 0.9),
        ("demand_7day_std", avg_daily_demand * 0.2),
        ("demand_next_7days", demand),
        ("demand_next_30days", demand * 4.0),
        ("demand_lag_1", avg_daily_demand * 0.95),
        ("demand_lag_7", avg_daily_demand * 0.9),
        ("demand_lag_30", avg_daily_demand * 0.85),
        ("quantity_per_wagon_tonnes", reference.wagon_capacity_tonnes),
        ("wagon_type_required", reference.wagon_type.label_code()),
        ("loading_cost", reference.loading_cost),
        ("distance_from_plant_km", reference.distance_km),
        ("transportation_lead_time_days", reference.distance_km / 200.0),
        ("transportation_cost_per_tonne", reference.distance_km * 5.0),
        ("day_of_week", weekday),
        ("month", month),
        ("quarter", quarter),
        ("is_weekend", is_weekend),
        ("week_of_year", f64::from(as_of.iso_week().week())),
        ("day_of_year", f64::from(as_of.ordinal())),
        ("month_sin", (TAU * month / 12.0).sin()),
        ("month_cos", (TAU * month / 12.0).cos()),
        ("day_sin", (TAU * weekday / 7.0).sin()),
        ("day_cos", (TAU * weekday / 7.0).cos()),
        ("num_customers", simulated::NUM_CUSTOMERS),
        ("avg_priority", simulated::AVG_PRIORITY),
        ("available_wagons_count", simulated::AVAILABLE_WAGONS_COUNT),
        (
            "total_rake_capacity_wagons",
            simulated::TOTAL_RAKE_CAPACITY_WAGONS,
        ),
        (
            "potential_wagons_needed",
            demand / reference.wagon_capacity_tonnes,
        ),
        ("wagon_utilization_pct", simulated::WAGON_UTILIZATION_PCT),
        ("bokaro_plant_capacity_daily", simulated::PLANT_CAPACITY_DAILY),
        ("plant_utilization_pct", simulated::PLANT_UTILIZATION_PCT),
        (
            "plant_production_available",
            simulated::PLANT_PRODUCTION_AVAILABLE,
        ),
        ("high_plant_utilization", simulated::HIGH_PLANT_UTILIZATION),
        (
            "medium_plant_utilization",
            simulated::MEDIUM_PLANT_UTILIZATION,
        ),
        (
            "stockyard_capacity_max_tonnes",
            reference.max_storage_capacity_tonnes,
        ),
        ("safety_stock_tonnes", simulated::SAFETY_STOCK_TONNES),
        ("high_utilization_risk", simulated::HIGH_UTILIZATION_RISK),
        ("medium_utilization_risk", simulated::MEDIUM_UTILIZATION_RISK),
        ("fill_rate_last_30days", simulated::FILL_RATE_LAST_30DAYS),
        (
            "stockout_incidents_last_30days",
            simulated::STOCKOUT_INCIDENTS_LAST_30DAYS,
        ),
        ("on_time_delivery_pct", simulated::ON_TIME_DELIVERY_PCT),
        ("stockout_risk_high", simulated::STOCKOUT_RISK_HIGH),
        ("stockout_risk_medium", simulated::STOCKOUT_RISK_MEDIUM),
        ("stockout_risk_low", simulated::STOCKOUT_RISK_LOW),
        ("inventory_turnover_ratio", turnover),
    ];

    FeatureVector::new(
        values,
        reference.wagon_type,
        reference.wagon_capacity_tonnes,
    )
}

/// Schema matching [`FEATURE_COLUMNS`], for tests and artifact generation.
pub fn training_schema() -> FeatureSchema {
    let feature_columns: Vec<String> = FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect();
    let categorical_columns = vec!["wagon_type_required".to_string()];
    let numerical_columns = feature_columns
        .iter()
        .filter(|c| !categorical_columns.contains(c))
        .cloned()
        .collect();
    FeatureSchema::new(feature_columns, numerical_columns, categorical_columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use railcast_core::{ProductId, StockyardId};

    fn request() -> PredictionRequest {
        PredictionRequest {
            stockyard_id: StockyardId::new("CMO_LOC_001"),
            product_id: ProductId::new("PROD_HRP_001"),
            current_inventory: 2000.0,
            next_7day_demand: 700.0,
        }
    }

    fn reference() -> ReferenceData {
        ReferenceData {
            wagon_capacity_tonnes: 54.79,
            wagon_type: railcast_core::WagonType::Boy,
            loading_cost: 1500.0,
            distance_km: 1617.27,
            max_storage_capacity_tonnes: 5000.0,
        }
    }

    // Saturday.
    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 17, 10, 30, 0).unwrap()
    }

    #[test]
    fn derives_consequential_features_exactly() {
        let features = derive(&request(), &reference(), as_of());

        assert_eq!(features.get("total_daily_demand_tonnes"), Some(100.0));
        assert_eq!(features.get("days_of_inventory_available"), Some(20.0));
        assert_eq!(features.get("storage_utilization_pct"), Some(40.0));
        assert_eq!(
            features.get("inventory_turnover_ratio"),
            Some(100.0 * 30.0 / 2000.0)
        );
        assert_eq!(
            features.get("potential_wagons_needed"),
            Some(700.0 / 54.79)
        );
        assert_eq!(
            features.get("transportation_lead_time_days"),
            Some(1617.27 / 200.0)
        );
    }

    #[test]
    fn zero_demand_defaults_daily_demand_to_one() {
        let request = PredictionRequest {
            next_7day_demand: 0.0,
            ..request()
        };
        let features = derive(&request, &reference(), as_of());
        assert_eq!(features.get("total_daily_demand_tonnes"), Some(1.0));
        assert_eq!(features.get("days_of_inventory_available"), Some(2000.0));
    }

    #[test]
    fn zero_inventory_zeroes_turnover() {
        let request = PredictionRequest {
            current_inventory: 0.0,
            ..request()
        };
        let features = derive(&request, &reference(), as_of());
        assert_eq!(features.get("inventory_turnover_ratio"), Some(0.0));
    }

    #[test]
    fn time_features_use_cyclical_encoding() {
        let features = derive(&request(), &reference(), as_of());

        // 2024-08-17 is a Saturday: weekday 5, month 8, Q3, ISO week 33.
        assert_eq!(features.get("day_of_week"), Some(5.0));
        assert_eq!(features.get("month"), Some(8.0));
        assert_eq!(features.get("quarter"), Some(3.0));
        assert_eq!(features.get("is_weekend"), Some(1.0));
        assert_eq!(features.get("week_of_year"), Some(33.0));
        assert_eq!(features.get("day_of_year"), Some(230.0));
        assert_eq!(features.get("month_sin"), Some((TAU * 8.0 / 12.0).sin()));
        assert_eq!(features.get("month_cos"), Some((TAU * 8.0 / 12.0).cos()));
        assert_eq!(features.get("day_sin"), Some((TAU * 5.0 / 7.0).sin()));
        assert_eq!(features.get("day_cos"), Some((TAU * 5.0 / 7.0).cos()));
    }

    #[test]
    fn derivation_is_deterministic_for_fixed_timestamp() {
        let first = derive(&request(), &reference(), as_of());
        let second = derive(&request(), &reference(), as_of());
        assert_eq!(first, second);
    }

    #[test]
    fn vector_covers_every_training_column_in_order() {
        let features = derive(&request(), &reference(), as_of());
        assert_eq!(features.len(), FEATURE_COLUMNS.len());
        let keys: Vec<&str> = features.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, FEATURE_COLUMNS);
    }

    #[test]
    fn training_schema_projects_derived_vector() {
        let schema = training_schema();
        schema.validate().unwrap();
        let features = derive(&request(), &reference(), as_of());
        let projected = schema.project(&features).unwrap();
        assert_eq!(projected.len(), 52);
        assert_eq!(projected[0], 2000.0);
    }
}
