//! Product catalog
//!
//! Categories group priced products. Each product lists the gain
//! categories it unlocks in the engine.

use crate::error::CatalogError;
use once_cell::sync::Lazy;
use roi_core::GainCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

static BUILTIN: Lazy<Catalog> = Lazy::new(Catalog::servicepro);

/// How products within a category may be combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    /// At most one product across all exclusive categories
    #[serde(alias = "single")]
    Exclusive,
    /// Independent toggles
    #[serde(alias = "multiple")]
    Additive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_one_time: f64,
    pub price_monthly: f64,
    #[serde(default)]
    pub gains: Vec<GainCategory>,
}

impl Product {
    fn new(
        id: &str,
        name: &str,
        description: &str,
        price_one_time: f64,
        price_monthly: f64,
        gains: &[GainCategory],
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price_one_time,
            price_monthly,
            gains: gains.to_vec(),
        }
    }

    pub fn unlocks(&self, gain: GainCategory) -> bool {
        self.gains.contains(&gain)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub name: String,
    pub description: String,
    pub selection_type: SelectionType,
    pub products: Vec<Product>,
}

impl ProductCategory {
    pub fn is_exclusive(&self) -> bool {
        self.selection_type == SelectionType::Exclusive
    }
}

/// Ordered, read-only registry of product categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    categories: Vec<ProductCategory>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative prices
    pub fn new(categories: Vec<ProductCategory>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for product in categories.iter().flat_map(|c| &c.products) {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            if product.price_one_time < 0.0 {
                return Err(CatalogError::NegativePrice {
                    id: product.id.clone(),
                    field: "one-time",
                });
            }
            if product.price_monthly < 0.0 {
                return Err(CatalogError::NegativePrice {
                    id: product.id.clone(),
                    field: "monthly",
                });
            }
        }

        Ok(Self { categories })
    }

    /// The shipped ServicePro catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse a catalog from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        #[derive(Deserialize)]
        struct CatalogFile {
            categories: Vec<ProductCategory>,
        }

        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file.categories)
    }

    /// Load a catalog from a YAML file
    pub fn load(path: &str) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml(&content)?;
        tracing::info!(
            path,
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn list_categories(&self) -> &[ProductCategory] {
        &self.categories
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories.iter().flat_map(|c| c.products.iter())
    }

    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products().find(|p| p.id == id)
    }

    pub fn category_of(&self, id: &str) -> Option<&ProductCategory> {
        self.categories
            .iter()
            .find(|c| c.products.iter().any(|p| p.id == id))
    }

    pub fn is_exclusive(&self, id: &str) -> bool {
        self.category_of(id).is_some_and(|c| c.is_exclusive())
    }

    /// Ids of every product in every exclusive category
    pub fn exclusive_ids(&self) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|c| c.is_exclusive())
            .flat_map(|c| c.products.iter().map(|p| p.id.as_str()))
            .collect()
    }

    fn servicepro() -> Self {
        use GainCategory::*;

        let all = GainCategory::ALL;
        Self {
            categories: vec![
                ProductCategory {
                    name: "ServicePro AI Platform".to_string(),
                    description: "Bundled packages for complete digital transformation.".to_string(),
                    selection_type: SelectionType::Exclusive,
                    products: vec![
                        Product::new(
                            "solo",
                            "SOLO Package",
                            "Website, AI chatbot, booking, database, email/SMS, Google integrations.",
                            1299.0,
                            29.0,
                            &all,
                        ),
                        Product::new(
                            "crew",
                            "CREW Package",
                            "Everything in SOLO + multi-user, unlimited customers, invoicing, payments.",
                            2499.0,
                            59.0,
                            &all,
                        ),
                        Product::new(
                            "fleet",
                            "FLEET Package",
                            "Everything in CREW + multi-location, route optimization, full CRM, API.",
                            3999.0,
                            99.0,
                            &all,
                        ),
                    ],
                },
                ProductCategory {
                    name: "A La Carte Tools".to_string(),
                    description: "Select individual tools when you only need one piece of the puzzle."
                        .to_string(),
                    selection_type: SelectionType::Additive,
                    products: vec![
                        Product::new(
                            "chatbot",
                            "AI Chatbot",
                            "24/7 lead capture, FAQs, warm hand-offs.",
                            0.0,
                            49.0,
                            &[CallsCaptured, ConversionLift, AfterHoursBookings],
                        ),
                        Product::new(
                            "booking",
                            "Booking System",
                            "Self-serve scheduling, reminders, calendar sync.",
                            0.0,
                            39.0,
                            &[TimeSavings, NoShowReduction],
                        ),
                        Product::new(
                            "crm",
                            "Simple CRM",
                            "Pipeline tracking, customer notes, follow-ups.",
                            0.0,
                            59.0,
                            &[ConversionLift],
                        ),
                        Product::new(
                            "analytics",
                            "Analytics Dashboard",
                            "Dashboards for leads, bookings, revenue, and ROI.",
                            0.0,
                            29.0,
                            &[],
                        ),
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin();
        let crew = catalog.find_product("crew").unwrap();
        assert_eq!(crew.price_one_time, 2499.0);
        assert_eq!(crew.price_monthly, 59.0);
        assert_eq!(crew.gains.len(), 5);
        assert!(catalog.find_product("nope").is_none());
    }

    #[test]
    fn test_category_order_is_fixed() {
        let names: Vec<_> = Catalog::builtin()
            .list_categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["ServicePro AI Platform", "A La Carte Tools"]);
    }

    #[test]
    fn test_exclusive_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.exclusive_ids(), ["solo", "crew", "fleet"]);
        assert!(catalog.is_exclusive("fleet"));
        assert!(!catalog.is_exclusive("crm"));
        assert!(!catalog.is_exclusive("missing"));
    }

    #[test]
    fn test_analytics_unlocks_nothing() {
        let analytics = Catalog::builtin().find_product("analytics").unwrap();
        assert!(GainCategory::ALL.iter().all(|g| !analytics.unlocks(*g)));
    }

    #[test]
    fn test_from_yaml_accepts_single_and_multiple_aliases() {
        let yaml = r#"
categories:
  - name: Packages
    description: Bundles
    selectionType: single
    products:
      - id: basic
        name: Basic
        description: Starter bundle
        priceOneTime: 500
        priceMonthly: 10
        gains: [timeSavings]
  - name: Tools
    description: Extras
    selectionType: multiple
    products:
      - id: sms
        name: SMS
        description: Reminders
        priceOneTime: 0
        priceMonthly: 5
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();
        assert!(catalog.is_exclusive("basic"));
        assert!(!catalog.is_exclusive("sms"));
        assert!(catalog.find_product("sms").unwrap().gains.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let yaml = r#"
categories:
  - name: A
    description: a
    selectionType: additive
    products:
      - { id: x, name: X, description: x, priceOneTime: 0, priceMonthly: 1 }
      - { id: x, name: X2, description: x, priceOneTime: 0, priceMonthly: 2 }
"#;
        let err = Catalog::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProduct(id) if id == "x"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let yaml = r#"
categories:
  - name: A
    description: a
    selectionType: additive
    products:
      - { id: x, name: X, description: x, priceOneTime: -1, priceMonthly: 1 }
"#;
        assert!(matches!(
            Catalog::from_yaml(yaml),
            Err(CatalogError::NegativePrice { .. })
        ));
    }
}
