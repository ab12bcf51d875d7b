mod recipe;
mod ingredient;
mod nutrient_macro;

pub use recipe::*;
pub use ingredient::*;
pub use nutrient_macro::*;
