use rocket::serde::{ Deserialize, Serialize };

/// A tracked macro-nutrient measurement, e.g. 12 g of fat.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(crate = "rocket::serde", default)]
pub struct Macro {
    pub amount: f64,
    pub unit: String
}

impl Macro {
    pub fn new(amount: f64, unit: &str) -> Self {
        Macro { amount, unit: unit.to_string() }
    }

    pub fn is_valid(&self) -> bool {
        self.amount > 0.0 && !self.unit.is_empty()
    }

    /// A macro left at its zero default was never filled in.
    pub fn is_blank(&self) -> bool {
        self.amount == 0.0 || self.amount.is_nan()
    }
}
