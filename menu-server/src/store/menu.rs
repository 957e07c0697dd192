//! In-memory menu store
//!
//! Owns the menu item collection and id assignment. Items are kept in a
//! plain `Vec` so listing preserves insertion order and lookups are linear
//! scans, which is all the collection sizes here call for. Ids come from a
//! monotonic counter and are never reused, even after deletions.

use crate::store::models::{Category, MenuItem, MenuItemPatch, NewMenuItem};

/// Ordered, mutable collection of menu items
#[derive(Debug, Clone)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    next_id: u64,
}

impl MenuStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-populated with the house menu
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for new in seed_items() {
            store.create(new);
        }
        store
    }

    /// All items in insertion order
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    /// Append a new item, assigning the next id
    pub fn create(&mut self, new: NewMenuItem) -> MenuItem {
        let item = MenuItem {
            id: self.next_id,
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            ingredients: new.ingredients,
            available: new.available,
        };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    /// Merge supplied fields over the existing item; the id never changes
    pub fn update(&mut self, id: u64, patch: MenuItemPatch) -> Option<MenuItem> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(price) = patch.price {
            item.price = price;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(ingredients) = patch.ingredients {
            item.ingredients = ingredients;
        }
        if let Some(available) = patch.available {
            item.available = available;
        }

        Some(item.clone())
    }

    /// Remove and return the item with the given id
    pub fn delete(&mut self, id: u64) -> Option<MenuItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_items() -> Vec<NewMenuItem> {
    fn item(
        name: &str,
        description: &str,
        price: f64,
        category: Category,
        ingredients: &[&str],
        available: bool,
    ) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            available,
        }
    }

    vec![
        item(
            "Classic Burger",
            "Beef patty with lettuce, tomato, and cheese on a sesame seed bun",
            12.99,
            Category::Entree,
            &["beef", "lettuce", "tomato", "cheese", "bun"],
            true,
        ),
        item(
            "Chicken Caesar Salad",
            "Grilled chicken breast over romaine lettuce with parmesan and croutons",
            11.50,
            Category::Entree,
            &[
                "chicken",
                "romaine lettuce",
                "parmesan cheese",
                "croutons",
                "caesar dressing",
            ],
            true,
        ),
        item(
            "Mozzarella Sticks",
            "Crispy breaded mozzarella served with marinara sauce",
            8.99,
            Category::Appetizer,
            &["mozzarella cheese", "breadcrumbs", "marinara sauce"],
            true,
        ),
        item(
            "Chocolate Lava Cake",
            "Warm chocolate cake with molten center, served with vanilla ice cream",
            7.99,
            Category::Dessert,
            &["chocolate", "flour", "eggs", "butter", "vanilla ice cream"],
            true,
        ),
        item(
            "Fresh Lemonade",
            "House-made lemonade with fresh lemons and mint",
            3.99,
            Category::Beverage,
            &["lemons", "sugar", "water", "mint"],
            true,
        ),
        item(
            "Fish and Chips",
            "Beer-battered cod with seasoned fries and coleslaw",
            14.99,
            Category::Entree,
            &["cod", "beer batter", "potatoes", "coleslaw", "tartar sauce"],
            false,
        ),
    ]
}
