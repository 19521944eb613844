/// Decimal places kept on scaled quantities and calories.
pub const SCALE_DECIMALS: u32 = 2;

/// Decimal places kept on food-group percentages.
pub const PERCENT_DECIMALS: u32 = 2;

/// Quick-pick factors offered by the interactive scale prompt: half, double, triple.
pub const SCALE_PRESETS: [f64; 3] = [0.5, 2.0, 3.0];

/// Minimum Jaro-Winkler similarity for a fuzzy recipe-name suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy candidates shown to the user.
pub const FUZZY_MAX_CANDIDATES: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Food groups
// ─────────────────────────────────────────────────────────────────────────────

pub const GRAINS: &str = "Grains";
pub const PROTEINS: &str = "Proteins";
pub const VEGETABLES: &str = "Vegetables";
pub const FRUITS: &str = "Fruits";
pub const DAIRY: &str = "Dairy";
pub const ADDED_SUGARS: &str = "Added Sugars";
pub const OILS_AND_SOLID_FATS: &str = "Oils & Solid Fats";
pub const OTHERS: &str = "Others";

/// Well-known food groups, in the order the add-recipe prompt lists them.
///
/// The set is open: recipes may carry any other label.
pub const FOOD_GROUPS: [&str; 8] = [
    GRAINS,
    PROTEINS,
    VEGETABLES,
    FRUITS,
    DAIRY,
    ADDED_SUGARS,
    OILS_AND_SOLID_FATS,
    OTHERS,
];

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Width in characters of a 100% bar in the breakdown chart.
pub const CHART_WIDTH: usize = 40;
