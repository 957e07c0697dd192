//! Menu Item Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::validation;

/// Menu item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizer,
    Entree,
    Dessert,
    Beverage,
}

impl Category {
    /// All accepted category names, in the order they are reported to clients
    pub const NAMES: [&'static str; 4] = ["appetizer", "entree", "dessert", "beverage"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizer => "appetizer",
            Category::Entree => "entree",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appetizer" => Ok(Category::Appetizer),
            "entree" => Ok(Category::Entree),
            "dessert" => Ok(Category::Dessert),
            "beverage" => Ok(Category::Beverage),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// Menu item model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Store-assigned identifier, immutable after creation
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

/// Create payload for `POST /api/menu`
///
/// Every field is optional at the wire level so that missing fields are
/// reported through the accumulated validation error list instead of a
/// deserialization failure. `category` stays a raw string for the same
/// reason.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub available: Option<bool>,
}

impl MenuItemCreate {
    /// Check every field rule and convert into the validated form.
    ///
    /// Rules are independent; all violations are collected before the
    /// payload is rejected. `available` defaults to true when absent.
    pub fn validated(self) -> Result<NewMenuItem, Vec<String>> {
        let mut errors = Vec::new();

        match &self.name {
            Some(name) => validation::check_name(name, &mut errors),
            None => errors.push("name is required".to_string()),
        }
        match &self.description {
            Some(description) => validation::check_description(description, &mut errors),
            None => errors.push("description is required".to_string()),
        }
        match self.price {
            Some(price) => validation::check_price(price, &mut errors),
            None => errors.push("price is required".to_string()),
        }
        let category = match &self.category {
            Some(raw) => validation::check_category(raw, &mut errors),
            None => {
                errors.push("category is required".to_string());
                None
            }
        };
        match &self.ingredients {
            Some(ingredients) => validation::check_ingredients(ingredients, &mut errors),
            None => errors.push("ingredients is required".to_string()),
        }

        match (
            self.name,
            self.description,
            self.price,
            category,
            self.ingredients,
        ) {
            (Some(name), Some(description), Some(price), Some(category), Some(ingredients))
                if errors.is_empty() =>
            {
                Ok(NewMenuItem {
                    name,
                    description,
                    price,
                    category,
                    ingredients,
                    available: self.available.unwrap_or(true),
                })
            }
            _ => Err(errors),
        }
    }
}

/// Update payload for `PUT /api/menu/:id`
///
/// Partial merge semantics: only supplied fields are validated and
/// applied. There is deliberately no `id` field, so a client-supplied id
/// in the body is dropped and the path id always wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl MenuItemUpdate {
    /// Check the rules for every supplied field and convert into a patch.
    pub fn validated(self) -> Result<MenuItemPatch, Vec<String>> {
        let mut errors = Vec::new();

        if let Some(name) = &self.name {
            validation::check_name(name, &mut errors);
        }
        if let Some(description) = &self.description {
            validation::check_description(description, &mut errors);
        }
        if let Some(price) = self.price {
            validation::check_price(price, &mut errors);
        }
        let category = match &self.category {
            Some(raw) => validation::check_category(raw, &mut errors),
            None => None,
        };
        if let Some(ingredients) = &self.ingredients {
            validation::check_ingredients(ingredients, &mut errors);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(MenuItemPatch {
            name: self.name,
            description: self.description,
            price: self.price,
            category,
            ingredients: self.ingredients,
            available: self.available,
        })
    }
}

/// Validated create payload, ready for the store
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub available: bool,
}

/// Validated partial update, ready for the store
#[derive(Debug, Clone, Default)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub ingredients: Option<Vec<String>>,
    pub available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> MenuItemCreate {
        MenuItemCreate {
            name: Some("Taco".to_string()),
            description: Some("A tasty taco with beef".to_string()),
            price: Some(5.5),
            category: Some("entree".to_string()),
            ingredients: Some(vec!["beef".to_string()]),
            available: None,
        }
    }

    #[test]
    fn category_parses_lowercase_names() {
        assert_eq!("appetizer".parse::<Category>(), Ok(Category::Appetizer));
        assert_eq!("beverage".parse::<Category>(), Ok(Category::Beverage));
        assert!("snack".parse::<Category>().is_err());
        assert!("Entree".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Dessert).unwrap();
        assert_eq!(json, "\"dessert\"");
    }

    #[test]
    fn menu_item_available_defaults_on_deserialize() {
        let item: MenuItem = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Fresh Lemonade",
                "description": "House-made lemonade with fresh lemons and mint",
                "price": 3.99,
                "category": "beverage",
                "ingredients": ["lemons", "sugar", "water", "mint"]
            }"#,
        )
        .unwrap();
        assert!(item.available);
    }

    #[test]
    fn create_validated_defaults_available_to_true() {
        let new = valid_create().validated().unwrap();
        assert!(new.available);
        assert_eq!(new.category, Category::Entree);
    }

    #[test]
    fn create_validated_keeps_explicit_available() {
        let mut payload = valid_create();
        payload.available = Some(false);
        assert!(!payload.validated().unwrap().available);
    }

    #[test]
    fn create_validated_collects_every_violation() {
        let payload = MenuItemCreate {
            name: Some("AB".to_string()),
            description: Some("short".to_string()),
            price: Some(0.0),
            category: Some("snack".to_string()),
            ingredients: Some(vec![]),
            available: None,
        };
        let errors = payload.validated().unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn create_validated_reports_missing_fields() {
        let errors = MenuItemCreate::default().validated().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().any(|e| e == "name is required"));
        assert!(errors.iter().any(|e| e == "ingredients is required"));
    }

    #[test]
    fn update_validated_checks_only_supplied_fields() {
        let patch = MenuItemUpdate {
            price: Some(9.99),
            ..Default::default()
        }
        .validated()
        .unwrap();
        assert_eq!(patch.price, Some(9.99));
        assert!(patch.name.is_none());
    }

    #[test]
    fn update_validated_rejects_bad_supplied_field() {
        let errors = MenuItemUpdate {
            name: Some("A".to_string()),
            category: Some("snack".to_string()),
            ..Default::default()
        }
        .validated()
        .unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
