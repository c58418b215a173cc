//! Solver tuning parameters, market profiles and algorithm selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ValidationError, ValidationResult, ensure_non_negative};

/// Soft-constraint costs, tolerances and objective weights for one solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationParams {
    pub price_tolerance: f64,
    pub flavor_tolerance: f64,
    pub flavor_penalty_per_unit: f64,
    pub expiry_penalty_per_day: f64,
    pub weight_acid: f64,
    pub weight_bitter: f64,
    pub weight_sweet: f64,
    pub weight_caffeine: f64,
    /// Passed through to the solver; never enforced client-side
    pub solver_timeout_sec: f64,
}

impl OptimizationParams {
    /// Cheapest blend, loose flavor match, push old stock out first
    pub fn for_mass_market() -> Self {
        Self {
            price_tolerance: 1000.0,
            flavor_tolerance: 1.5,
            flavor_penalty_per_unit: 5000.0,
            expiry_penalty_per_day: 200.0,
            weight_acid: 0.5,
            weight_bitter: 1.5,
            weight_sweet: 0.5,
            weight_caffeine: 1.0,
            solver_timeout_sec: 5.0,
        }
    }

    pub fn for_balanced_market() -> Self {
        Self {
            price_tolerance: 5000.0,
            flavor_tolerance: 0.5,
            flavor_penalty_per_unit: 20000.0,
            expiry_penalty_per_day: 100.0,
            weight_acid: 1.0,
            weight_bitter: 2.0,
            weight_sweet: 1.0,
            weight_caffeine: 1.0,
            solver_timeout_sec: 5.0,
        }
    }

    /// Tight flavor match, price may drift, fresh stock is acceptable
    pub fn for_specialty_market() -> Self {
        Self {
            price_tolerance: 20000.0,
            flavor_tolerance: 0.2,
            flavor_penalty_per_unit: 100000.0,
            expiry_penalty_per_day: 20.0,
            weight_acid: 2.0,
            weight_bitter: 1.0,
            weight_sweet: 2.0,
            weight_caffeine: 0.5,
            solver_timeout_sec: 10.0,
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        ensure_non_negative("priceTolerance", self.price_tolerance)?;
        ensure_non_negative("flavorTolerance", self.flavor_tolerance)?;
        ensure_non_negative("flavorPenaltyPerUnit", self.flavor_penalty_per_unit)?;
        ensure_non_negative("expiryPenaltyPerDay", self.expiry_penalty_per_day)?;
        ensure_non_negative("weightAcid", self.weight_acid)?;
        ensure_non_negative("weightBitter", self.weight_bitter)?;
        ensure_non_negative("weightSweet", self.weight_sweet)?;
        ensure_non_negative("weightCaffeine", self.weight_caffeine)?;
        ensure_non_negative("solverTimeoutSec", self.solver_timeout_sec)?;
        Ok(())
    }
}

impl Default for OptimizationParams {
    fn default() -> Self {
        Self::for_balanced_market()
    }
}

/// Named parameter preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamsProfile {
    Mass,
    #[default]
    Balanced,
    Specialty,
}

impl ParamsProfile {
    pub fn params(&self) -> OptimizationParams {
        match self {
            ParamsProfile::Mass => OptimizationParams::for_mass_market(),
            ParamsProfile::Balanced => OptimizationParams::for_balanced_market(),
            ParamsProfile::Specialty => OptimizationParams::for_specialty_market(),
        }
    }
}

impl FromStr for ParamsProfile {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mass" => Ok(ParamsProfile::Mass),
            "balanced" => Ok(ParamsProfile::Balanced),
            "specialty" => Ok(ParamsProfile::Specialty),
            _ => Err(ValidationError::UnknownProfile { input: s.to_string() }),
        }
    }
}

/// Solver strategy requested from the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    #[default]
    Default,
    Hybrid,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Default => write!(f, "DEFAULT"),
            Algorithm::Hybrid => write!(f, "HYBRID"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEFAULT" => Ok(Algorithm::Default),
            "HYBRID" => Ok(Algorithm::Hybrid),
            _ => Err(ValidationError::UnknownAlgorithm { input: s.to_string() }),
        }
    }
}
