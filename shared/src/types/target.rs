//! Blend target types: modes, flavor axes and operator target selections

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ValidationError, ValidationResult, ensure_non_negative, parse_non_negative};
use crate::messages::sentinel;

/// Lower bound on any selected batch's share of the blend
pub const MIN_RATIO: f64 = 0.05;

/// Preset optimization goal understood by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptimizationMode {
    PriceOptimized,
    Balanced,
    QualityOptimized,
}

impl OptimizationMode {
    /// Fixed order used by the comparison view
    pub const ALL: [OptimizationMode; 3] = [
        OptimizationMode::PriceOptimized,
        OptimizationMode::Balanced,
        OptimizationMode::QualityOptimized,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OptimizationMode::PriceOptimized => "Price (Mass)",
            OptimizationMode::Balanced => "Balanced",
            OptimizationMode::QualityOptimized => "Quality (Specialty)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationMode::PriceOptimized => "PRICE_OPTIMIZED",
            OptimizationMode::Balanced => "BALANCED",
            OptimizationMode::QualityOptimized => "QUALITY_OPTIMIZED",
        }
    }
}

impl fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizationMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "PRICE_OPTIMIZED" | "PRICE" => Ok(OptimizationMode::PriceOptimized),
            "BALANCED" => Ok(OptimizationMode::Balanced),
            "QUALITY_OPTIMIZED" | "QUALITY" => Ok(OptimizationMode::QualityOptimized),
            _ => Err(ValidationError::UnknownMode { input: s.to_string() }),
        }
    }
}

/// Flavor dimension scored by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlavorAxis {
    Acid,
    Bitter,
    Sweet,
    Caffeine,
}

impl FlavorAxis {
    pub const ALL: [FlavorAxis; 4] = [FlavorAxis::Acid, FlavorAxis::Bitter, FlavorAxis::Sweet, FlavorAxis::Caffeine];

    pub fn label(&self) -> &'static str {
        match self {
            FlavorAxis::Acid => "Acid",
            FlavorAxis::Bitter => "Bitter",
            FlavorAxis::Sweet => "Sweet",
            FlavorAxis::Caffeine => "Caffeine",
        }
    }
}

/// One optional flavor target: an enable toggle plus the entered value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisToggle {
    pub enabled: bool,
    pub value: f64,
}

impl AxisToggle {
    pub fn on(value: f64) -> Self {
        Self { enabled: true, value }
    }

    pub fn off() -> Self {
        Self { enabled: false, value: 0.0 }
    }

    /// Build from form text; the text is ignored while the toggle is off
    pub fn parse(field: &str, enabled: bool, raw: Option<&str>) -> ValidationResult<Self> {
        if !enabled {
            return Ok(Self::off());
        }
        Ok(Self::on(parse_non_negative(field, raw)?))
    }

    pub fn resolve(&self) -> Option<f64> {
        self.enabled.then_some(self.value)
    }
}

impl From<Option<f64>> for AxisToggle {
    fn from(value: Option<f64>) -> Self {
        value.map_or_else(AxisToggle::off, AxisToggle::on)
    }
}

/// Operator target selections as entered, before request construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSelection {
    pub mode: OptimizationMode,
    pub target_price: f64,
    pub acid: AxisToggle,
    pub bitter: AxisToggle,
    pub sweet: AxisToggle,
    pub caffeine: AxisToggle,
    pub total_output_kg: f64,
    pub max_batch_types: u32,
}

impl Default for TargetSelection {
    fn default() -> Self {
        Self {
            mode: OptimizationMode::Balanced,
            target_price: 160000.0,
            acid: AxisToggle::on(5.5),
            bitter: AxisToggle::on(6.0),
            sweet: AxisToggle::on(5.0),
            caffeine: AxisToggle::on(2.0),
            total_output_kg: 100.0,
            max_batch_types: 3,
        }
    }
}

impl TargetSelection {
    pub fn axis(&self, axis: FlavorAxis) -> &AxisToggle {
        match axis {
            FlavorAxis::Acid => &self.acid,
            FlavorAxis::Bitter => &self.bitter,
            FlavorAxis::Sweet => &self.sweet,
            FlavorAxis::Caffeine => &self.caffeine,
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        ensure_non_negative("targetPrice", self.target_price)?;
        ensure_non_negative("totalOutputKg", self.total_output_kg)?;
        for axis in FlavorAxis::ALL {
            if let Some(value) = self.axis(axis).resolve() {
                ensure_non_negative(axis.label(), value)?;
            }
        }
        Ok(())
    }

    /// Resolve toggles into the target the solver receives
    pub fn to_target(&self) -> OptimizationTarget {
        OptimizationTarget {
            mode: self.mode,
            target_price: self.target_price,
            target_acid: self.acid.resolve(),
            target_bitter: self.bitter.resolve(),
            target_sweet: self.sweet.resolve(),
            target_caffeine: self.caffeine.resolve(),
            total_output_kg: self.total_output_kg,
            max_batch_types: self.max_batch_types,
            min_ratio: MIN_RATIO,
        }
    }
}

/// Target profile sent to the solver.
///
/// Unconstrained flavor axes are `None` here and travel as `-1` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationTarget {
    pub mode: OptimizationMode,
    pub target_price: f64,
    #[serde(with = "sentinel")]
    pub target_acid: Option<f64>,
    #[serde(with = "sentinel")]
    pub target_bitter: Option<f64>,
    #[serde(with = "sentinel")]
    pub target_sweet: Option<f64>,
    #[serde(with = "sentinel")]
    pub target_caffeine: Option<f64>,
    pub total_output_kg: f64,
    pub max_batch_types: u32,
    pub min_ratio: f64,
}

impl OptimizationTarget {
    pub fn axis(&self, axis: FlavorAxis) -> Option<f64> {
        match axis {
            FlavorAxis::Acid => self.target_acid,
            FlavorAxis::Bitter => self.target_bitter,
            FlavorAxis::Sweet => self.target_sweet,
            FlavorAxis::Caffeine => self.target_caffeine,
        }
    }

    /// Same target under a different mode
    pub fn with_mode(&self, mode: OptimizationMode) -> Self {
        Self { mode, ..self.clone() }
    }
}
