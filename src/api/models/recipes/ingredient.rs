use rocket::serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(crate = "rocket::serde", default)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String
}

impl Ingredient {
    pub fn new(name: &str, quantity: f64, unit: &str) -> Self {
        Ingredient {
            name: name.to_string(),
            quantity,
            unit: unit.to_string()
        }
    }

    /// Whether this ingredient could be persisted as-is: trimmed name and unit present, positive quantity.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.quantity > 0.0 && !self.unit.trim().is_empty()
    }
}
