//! Emissions breakdown returned by the calculation service

use serde::Serialize;

/// Emissions for one category, in kg CO₂
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEmission {
    pub category: String,
    pub kg_co2: f64,
}

/// Recommendation text for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRecommendation {
    pub category: String,
    pub text: String,
}

/// Fully populated result of one calculation.
///
/// Every field has an empty/zero default; decoding never fails because a
/// key is absent. Category order follows the service's response.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EmissionsResult {
    pub emissions: Vec<CategoryEmission>,
    pub total_carbon: f64,
    pub recommendations: Vec<CategoryRecommendation>,
    pub overall_recommendations: Vec<String>,
}

impl EmissionsResult {
    pub fn emission(&self, category: &str) -> Option<f64> {
        self.emissions
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.kg_co2)
    }

    pub fn recommendation(&self, category: &str) -> Option<&str> {
        self.recommendations
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.text.as_str())
    }

    pub fn has_recommendations(&self) -> bool {
        !self.recommendations.is_empty()
    }
}

/// Format a metric value the way the results panel shows it (`12.5`, `3`)
pub fn format_amount(value: f64) -> String {
    format!("{}", value)
}
