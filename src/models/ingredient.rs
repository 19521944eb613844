use serde::{Deserialize, Serialize};

/// A single ingredient line of a recipe.
///
/// `unit_of_measure` is an opaque label: it is displayed and carried through
/// scaling but never converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    pub quantity: f64,

    #[serde(rename = "unit")]
    pub unit_of_measure: String,

    pub calories: f64,

    pub food_group: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit_of_measure: impl Into<String>,
        calories: f64,
        food_group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_of_measure: unit_of_measure.into(),
            calories,
            food_group: food_group.into(),
        }
    }

    /// Non-empty name, finite non-negative quantity and calories.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.quantity.is_finite()
            && self.quantity >= 0.0
            && self.calories.is_finite()
            && self.calories >= 0.0
    }

    /// Lowercase food group, used for case-insensitive filtering.
    pub fn food_group_key(&self) -> String {
        self.food_group.to_lowercase()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} {}, {} cal [{}]",
            self.name, self.quantity, self.unit_of_measure, self.calories, self.food_group
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ingredient() -> Ingredient {
        Ingredient::new("Flour", 250.0, "g", 910.0, "Grains")
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_ingredient().is_valid());

        let mut zero = sample_ingredient();
        zero.quantity = 0.0;
        zero.calories = 0.0;
        assert!(zero.is_valid());
    }

    #[test]
    fn test_is_valid_rejects_negative_and_nan() {
        let mut negative = sample_ingredient();
        negative.quantity = -1.0;
        assert!(!negative.is_valid());

        let mut nan = sample_ingredient();
        nan.calories = f64::NAN;
        assert!(!nan.is_valid());

        let mut unnamed = sample_ingredient();
        unnamed.name = "  ".to_string();
        assert!(!unnamed.is_valid());
    }

    #[test]
    fn test_serde_uses_unit_key() {
        let json = serde_json::to_value(sample_ingredient()).unwrap();
        assert_eq!(json["unit"], "g");
        assert_eq!(json["food_group"], "Grains");
    }
}
