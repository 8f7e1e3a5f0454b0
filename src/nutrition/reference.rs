// ABOUTME: Built-in per-100g reference table of common foods
// ABOUTME: Ordered sequence of calorie, protein, and fat profiles used by the estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! Built-in food reference data.
//!
//! The table is an ordered slice, not a map: partial-name matching scans
//! entries in definition order and the first hit wins, so iteration order
//! is part of the lookup contract. Keys are lowercase; matching happens
//! against normalized input (see [`crate::nutrition::estimator`]).

use serde::Serialize;

/// Nutrition values per 100 grams of a food
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroProfile {
    /// Kilocalories per 100 g
    pub calories: f64,
    /// Protein in grams per 100 g
    pub protein_g: f64,
    /// Fat in grams per 100 g
    pub fat_g: f64,
}

/// A named entry in the reference table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodReference {
    /// Lowercase food name used for matching
    pub name: &'static str,
    /// Nutrition per 100 g
    pub per_100g: MacroProfile,
}

const fn entry(name: &'static str, calories: f64, protein_g: f64, fat_g: f64) -> FoodReference {
    FoodReference {
        name,
        per_100g: MacroProfile {
            calories,
            protein_g,
            fat_g,
        },
    }
}

/// The built-in reference table, in definition order.
///
/// Ordering matters: earlier entries shadow later ones during partial
/// matching ("pineapple juice" resolves to "apple", which appears first,
/// not "pineapple").
pub const REFERENCE_FOODS: &[FoodReference] = &[
    // Fruits
    entry("apple", 52.0, 0.3, 0.2),
    entry("banana", 89.0, 1.1, 0.3),
    entry("orange", 47.0, 0.9, 0.1),
    entry("grapes", 62.0, 0.6, 0.2),
    entry("strawberry", 32.0, 0.7, 0.3),
    entry("mango", 60.0, 0.8, 0.4),
    entry("pineapple", 50.0, 0.5, 0.1),
    entry("watermelon", 30.0, 0.6, 0.2),
    entry("avocado", 160.0, 2.0, 14.7),
    // Vegetables
    entry("broccoli", 34.0, 2.8, 0.4),
    entry("carrot", 41.0, 0.9, 0.2),
    entry("spinach", 23.0, 2.9, 0.4),
    entry("tomato", 18.0, 0.9, 0.2),
    entry("potato", 77.0, 2.0, 0.1),
    entry("onion", 40.0, 1.1, 0.1),
    entry("cucumber", 16.0, 0.7, 0.1),
    entry("lettuce", 15.0, 1.4, 0.2),
    entry("bell pepper", 31.0, 1.0, 0.3),
    // Grains
    entry("rice", 130.0, 2.7, 0.3),
    entry("bread", 265.0, 9.0, 3.2),
    entry("pasta", 131.0, 5.0, 1.1),
    entry("oats", 389.0, 16.9, 6.9),
    entry("quinoa", 120.0, 4.4, 1.9),
    entry("wheat", 327.0, 13.2, 2.5),
    entry("corn", 86.0, 3.3, 1.4),
    // Proteins
    entry("chicken", 165.0, 31.0, 3.6),
    entry("pork", 242.0, 27.3, 13.9),
    entry("fish", 206.0, 22.0, 12.0),
    entry("salmon", 208.0, 25.4, 12.4),
    entry("tuna", 144.0, 30.0, 1.0),
    entry("egg", 155.0, 13.0, 11.0),
    entry("tofu", 76.0, 8.0, 4.8),
    // Dairy
    entry("milk", 42.0, 3.4, 1.0),
    entry("cheese", 402.0, 25.0, 33.0),
    entry("yogurt", 59.0, 10.0, 0.4),
    entry("butter", 717.0, 0.9, 81.0),
    // Nuts and seeds
    entry("almonds", 579.0, 21.2, 49.9),
    entry("peanuts", 567.0, 25.8, 49.2),
    entry("walnuts", 654.0, 15.2, 65.2),
    entry("cashews", 553.0, 18.2, 43.9),
    // Other
    entry("chocolate", 546.0, 4.9, 31.3),
    entry("sugar", 387.0, 0.0, 0.0),
    entry("honey", 304.0, 0.3, 0.0),
    entry("oil", 884.0, 0.0, 100.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size_and_bounds() {
        assert_eq!(REFERENCE_FOODS.len(), 44);
        assert_eq!(REFERENCE_FOODS[0].name, "apple");
        assert_eq!(REFERENCE_FOODS[REFERENCE_FOODS.len() - 1].name, "oil");
    }

    #[test]
    fn test_keys_are_normalized() {
        for food in REFERENCE_FOODS {
            assert_eq!(
                food.name,
                food.name.trim().to_lowercase(),
                "table key '{}' must be lowercase and trimmed",
                food.name
            );
        }
    }

    #[test]
    fn test_keys_are_unique() {
        for (index, food) in REFERENCE_FOODS.iter().enumerate() {
            assert!(
                !REFERENCE_FOODS[..index].iter().any(|f| f.name == food.name),
                "duplicate table key '{}'",
                food.name
            );
        }
    }

    #[test]
    fn test_apple_precedes_pineapple() {
        let apple = REFERENCE_FOODS.iter().position(|f| f.name == "apple");
        let pineapple = REFERENCE_FOODS.iter().position(|f| f.name == "pineapple");
        assert!(apple < pineapple);
    }

    #[test]
    fn test_profiles_are_plausible() {
        for food in REFERENCE_FOODS {
            let p = food.per_100g;
            assert!(p.calories >= 0.0 && p.calories <= 900.0, "{}", food.name);
            assert!(p.protein_g >= 0.0 && p.protein_g <= 100.0, "{}", food.name);
            assert!(p.fat_g >= 0.0 && p.fat_g <= 100.0, "{}", food.name);
        }
    }
}
