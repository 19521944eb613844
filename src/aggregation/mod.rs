pub mod breakdown;

pub use breakdown::{food_group_breakdown, percentage_sum, FoodGroupShare};
