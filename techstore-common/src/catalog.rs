//! Fixed product catalog

use serde::{Deserialize, Serialize};

/// A product shown in the storefront grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Whole dollars
    pub price: u32,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Price as shown on the card, e.g. `$699`
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// The hardcoded catalog, in display order.
pub fn catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Smartphone X", 699),
        Product::new(2, "Laptop Pro", 1299),
        Product::new(3, "Tablet Air", 499),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_prices() {
        let products = catalog();
        let summary: Vec<(u32, &str, String)> = products
            .iter()
            .map(|p| (p.id, p.name.as_str(), p.price_label()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "Smartphone X", "$699".to_string()),
                (2, "Laptop Pro", "$1299".to_string()),
                (3, "Tablet Air", "$499".to_string()),
            ]
        );
    }

    #[test]
    fn test_catalog_is_stable_across_calls() {
        assert_eq!(catalog(), catalog());
    }
}
