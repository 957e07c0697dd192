//! Input validation helpers
//!
//! Field rules for menu item payloads. Each check is independent and
//! appends its message to the caller's error list, so a payload that
//! breaks several rules reports all of them in one response.

use crate::store::models::Category;

// ── Field rule limits ───────────────────────────────────────────────

/// Minimum item name length
pub const MIN_NAME_LEN: usize = 3;

/// Minimum item description length
pub const MIN_DESCRIPTION_LEN: usize = 10;

// ── Field checks (create/update payloads) ───────────────────────────

pub fn check_name(value: &str, errors: &mut Vec<String>) {
    if value.len() < MIN_NAME_LEN {
        errors.push(format!("name must be at least {MIN_NAME_LEN} characters"));
    }
}

pub fn check_description(value: &str, errors: &mut Vec<String>) {
    if value.len() < MIN_DESCRIPTION_LEN {
        errors.push(format!(
            "description must be at least {MIN_DESCRIPTION_LEN} characters"
        ));
    }
}

pub fn check_price(value: f64, errors: &mut Vec<String>) {
    // NaN fails this comparison as well
    if !(value > 0.0) {
        errors.push("price must be greater than 0".to_string());
    }
}

/// Check the category name and return the parsed value when it is valid.
pub fn check_category(value: &str, errors: &mut Vec<String>) -> Option<Category> {
    match value.parse::<Category>() {
        Ok(category) => Some(category),
        Err(_) => {
            errors.push(format!(
                "category must be one of {}",
                Category::NAMES.join(", ")
            ));
            None
        }
    }
}

pub fn check_ingredients(values: &[String], errors: &mut Vec<String>) {
    if values.is_empty() {
        errors.push("ingredients must contain at least one entry".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_shorter_than_three_chars_is_rejected() {
        let mut errors = Vec::new();
        check_name("AB", &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("name"));

        errors.clear();
        check_name("ABC", &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn description_shorter_than_ten_chars_is_rejected() {
        let mut errors = Vec::new();
        check_description("too short", &mut errors);
        assert_eq!(errors.len(), 1);

        errors.clear();
        check_description("long enough to pass", &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn price_must_be_positive() {
        let mut errors = Vec::new();
        check_price(0.0, &mut errors);
        check_price(-1.5, &mut errors);
        assert_eq!(errors.len(), 2);

        errors.clear();
        check_price(0.01, &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn category_must_be_a_known_name() {
        let mut errors = Vec::new();
        assert_eq!(check_category("dessert", &mut errors), Some(Category::Dessert));
        assert!(errors.is_empty());

        assert_eq!(check_category("snack", &mut errors), None);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("appetizer, entree, dessert, beverage"));
    }

    #[test]
    fn ingredients_must_not_be_empty() {
        let mut errors = Vec::new();
        check_ingredients(&[], &mut errors);
        assert_eq!(errors.len(), 1);

        errors.clear();
        check_ingredients(&["beef".to_string()], &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn checks_accumulate_across_fields() {
        let mut errors = Vec::new();
        check_name("AB", &mut errors);
        check_description("short", &mut errors);
        check_price(0.0, &mut errors);
        check_category("snack", &mut errors);
        check_ingredients(&[], &mut errors);
        assert_eq!(errors.len(), 5);
    }
}
