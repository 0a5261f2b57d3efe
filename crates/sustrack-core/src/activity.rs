//! Daily activity record submitted to the calculation service

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the six activity quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityField {
    KmDriven,
    ElectricityKwh,
    MeatMeals,
    WasteKg,
    WaterLiters,
    EnergyUsageKwh,
}

impl ActivityField {
    /// All fields in form order
    pub const ALL: [ActivityField; 6] = [
        ActivityField::KmDriven,
        ActivityField::ElectricityKwh,
        ActivityField::MeatMeals,
        ActivityField::WasteKg,
        ActivityField::WaterLiters,
        ActivityField::EnergyUsageKwh,
    ];

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityField::KmDriven => "Distance traveled by car (km)",
            ActivityField::ElectricityKwh => "Electricity used at home (kWh)",
            ActivityField::MeatMeals => "Number of meat-based meals",
            ActivityField::WasteKg => "Waste generated (kg)",
            ActivityField::WaterLiters => "Water used (liters)",
            ActivityField::EnergyUsageKwh => "Other energy usage (kWh)",
        }
    }

    /// Wire name in the request payload
    pub fn key(&self) -> &'static str {
        match self {
            ActivityField::KmDriven => "km_driven",
            ActivityField::ElectricityKwh => "electricity_kwh",
            ActivityField::MeatMeals => "meat_meals",
            ActivityField::WasteKg => "waste_kg",
            ActivityField::WaterLiters => "water_liters",
            ActivityField::EnergyUsageKwh => "energy_usage_kwh",
        }
    }

    /// Whether the field only accepts whole numbers
    pub fn is_integer(&self) -> bool {
        matches!(self, ActivityField::MeatMeals)
    }
}

/// The six-field record of daily activity quantities.
///
/// Serializes to exactly the request body the calculation service expects.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivityInput {
    pub km_driven: f64,
    pub electricity_kwh: f64,
    pub meat_meals: u32,
    pub waste_kg: f64,
    pub water_liters: f64,
    pub energy_usage_kwh: f64,
}

impl ActivityInput {
    pub fn get(&self, field: ActivityField) -> f64 {
        match field {
            ActivityField::KmDriven => self.km_driven,
            ActivityField::ElectricityKwh => self.electricity_kwh,
            ActivityField::MeatMeals => f64::from(self.meat_meals),
            ActivityField::WasteKg => self.waste_kg,
            ActivityField::WaterLiters => self.water_liters,
            ActivityField::EnergyUsageKwh => self.energy_usage_kwh,
        }
    }

    /// Set a field, clamping negatives (and NaN) to zero.
    ///
    /// The meal count is truncated to a whole number and saturates at `u32::MAX`.
    pub fn set(&mut self, field: ActivityField, value: f64) {
        let value = if value.is_finite() && value > 0.0 {
            value
        } else if value == f64::INFINITY {
            f64::MAX
        } else {
            0.0
        };
        match field {
            ActivityField::KmDriven => self.km_driven = value,
            ActivityField::ElectricityKwh => self.electricity_kwh = value,
            ActivityField::MeatMeals => {
                self.meat_meals = value.trunc().min(f64::from(u32::MAX)) as u32
            }
            ActivityField::WasteKg => self.waste_kg = value,
            ActivityField::WaterLiters => self.water_liters = value,
            ActivityField::EnergyUsageKwh => self.energy_usage_kwh = value,
        }
    }

    /// Reject records that could not have come from the form (negative or non-finite)
    pub fn validate(&self) -> Result<()> {
        for field in ActivityField::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(Error::invalid_input(format!(
                    "{} must be a finite number",
                    field.key()
                )));
            }
            if value < 0.0 {
                return Err(Error::invalid_input(format!(
                    "{} must not be negative",
                    field.key()
                )));
            }
        }
        Ok(())
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
