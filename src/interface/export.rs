use std::path::Path;

use crate::aggregation::FoodGroupShare;
use crate::error::Result;

/// Write a food-group breakdown to a CSV file for charting elsewhere.
pub fn write_breakdown_csv(shares: &[FoodGroupShare], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["food_group", "total_quantity", "percentage"])?;

    for share in shares {
        wtr.write_record([
            share.food_group.clone(),
            format!("{:.2}", share.total_quantity),
            format!("{:.2}", share.percentage),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render a food-group breakdown as pretty JSON.
pub fn breakdown_json(shares: &[FoodGroupShare]) -> Result<String> {
    Ok(serde_json::to_string_pretty(shares)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_shares() -> Vec<FoodGroupShare> {
        vec![
            FoodGroupShare {
                food_group: "Oils & Solid Fats".to_string(),
                total_quantity: 3.0,
                percentage: 75.0,
            },
            FoodGroupShare {
                food_group: "Others".to_string(),
                total_quantity: 1.0,
                percentage: 25.0,
            },
        ]
    }

    #[test]
    fn test_write_breakdown_csv() {
        let file = NamedTempFile::new().unwrap();
        write_breakdown_csv(&sample_shares(), file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "food_group,total_quantity,percentage");
        assert_eq!(lines[1], "Oils & Solid Fats,3.00,75.00");
        assert_eq!(lines[2], "Others,1.00,25.00");
    }

    #[test]
    fn test_breakdown_json() {
        let json = breakdown_json(&sample_shares()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["food_group"], "Oils & Solid Fats");
        assert_eq!(value[1]["percentage"], 25.0);
    }
}
