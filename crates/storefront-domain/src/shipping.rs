//! Shipping methods, rates and locations.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shipping method offered by the backend.
///
/// When the backend returned only an unexpanded method reference, just the
/// identifier is populated; the rest stays `None`. Partial data is normal
/// here, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
    /// Backend shipping method identifier.
    pub shipping_method_id: String,
    /// Locale-resolved name.
    pub name: Option<String>,
    /// Locale-resolved description.
    pub description: Option<String>,
    /// Rates per shipping zone, when the method was expanded.
    pub rates: Option<Vec<ShippingRate>>,
}

impl ShippingMethod {
    /// Create an unexpanded method carrying only its identifier.
    pub fn reference(shipping_method_id: impl Into<String>) -> Self {
        Self {
            shipping_method_id: shipping_method_id.into(),
            ..Self::default()
        }
    }
}

/// A single rate of a shipping method's zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRate {
    /// Identifier of the zone this rate belongs to.
    pub shipping_rate_id: String,
    /// Zone name, when the zone was expanded.
    pub name: Option<String>,
    /// Locations the zone covers, when the zone was expanded.
    pub locations: Option<Vec<ShippingLocation>>,
    /// Rate price.
    pub price: Option<Money>,
}

/// A location covered by a shipping zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingLocation {
    /// ISO country code.
    pub country: String,
    /// State within the country, when the zone narrows to one.
    pub state: Option<String>,
}
