//! Constraint-engine output and the business-rule audit trail.

use serde::{Deserialize, Serialize};

use crate::reference::WagonType;

/// Identifier of a business rule, recorded in the audit trail when (and only
/// when) the rule actually changed the outcome.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    NegativeSupplyClipped,
    WagonCapacityLimit,
    WagonRounding,
    MinimumSupply,
    NoRulesApplied,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::NegativeSupplyClipped => "negative_supply_clipped",
            Rule::WagonCapacityLimit => "wagon_capacity_limit",
            Rule::WagonRounding => "wagon_rounding",
            Rule::MinimumSupply => "minimum_supply",
            Rule::NoRulesApplied => "no_rules_applied",
        }
    }
}

impl core::fmt::Display for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final wagon-allocation decision after the ordered rule sequence.
///
/// `final_supply` is always a non-negative integer multiple of
/// `wagon_capacity`; `rules_applied` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintResult {
    pub final_supply: f64,
    pub wagons_required: u32,
    pub wagon_type: WagonType,
    pub wagon_capacity: f64,
    pub rules_applied: Vec<Rule>,
}

impl ConstraintResult {
    pub fn rule_names(&self) -> Vec<String> {
        self.rules_applied.iter().map(|r| r.to_string()).collect()
    }
}
