//! Frontend Models
//!
//! Data structures matching the catalog service records.

use serde::{Deserialize, Deserializer, Serialize};

/// Drink temperature, also the filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoffeeType {
    Hot,
    Cold,
}

impl CoffeeType {
    /// Wire name, also used as the query value
    pub fn as_str(&self) -> &'static str {
        match self {
            CoffeeType::Hot => "HOT",
            CoffeeType::Cold => "COLD",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            CoffeeType::Hot => "type-badge hot",
            CoffeeType::Cold => "type-badge cold",
        }
    }
}

/// Catalog entry (matches service payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeItem {
    pub id: i64,
    pub name: String,
    pub coffee_type: CoffeeType,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub price: f64,
}

/// Treat `null` like a missing field
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Number of stock photos cycled through by id
const IMAGE_COUNT: i64 = 3;

impl CoffeeItem {
    /// Price with exactly two fraction digits, e.g. `$4.50`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Stock photo picked from the id
    pub fn image_path(&self) -> String {
        format!("/coffee-{}.jpg", self.id.rem_euclid(IMAGE_COUNT) + 1)
    }
}

/// User-selected type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterState {
    #[default]
    All,
    Hot,
    Cold,
}

impl FilterState {
    /// Filter buttons in display order
    pub const CHOICES: [FilterState; 3] = [FilterState::All, FilterState::Hot, FilterState::Cold];

    /// Server-side type selection; `None` requests the full catalog
    pub fn coffee_type(&self) -> Option<CoffeeType> {
        match self {
            FilterState::All => None,
            FilterState::Hot => Some(CoffeeType::Hot),
            FilterState::Cold => Some(CoffeeType::Cold),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterState::All => "All",
            FilterState::Hot => "Hot",
            FilterState::Cold => "Cold",
        }
    }

    /// Button class for this filter while `active` is selected
    pub fn button_class(self, active: FilterState) -> &'static str {
        if self == active {
            "filter-btn active"
        } else {
            "filter-btn"
        }
    }
}
