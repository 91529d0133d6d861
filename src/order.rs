//! # Order Wire Model
//!
//! Inbound order payload as the upstream order system sends it. Wire names
//! are camelCase; a handful of fields are polymorphic (number or string)
//! and normalized during deserialization.
//!
//! Required nested structures (`customerDetails`, `priceSummary`,
//! `businessAddress`, `lineItems`) fail deserialization when absent;
//! optional blocks and per-item notes are `Option` and omitted from the
//! receipt when missing.

use serde::Deserialize;

/// Bundled example order, used by tests and the offline render command.
pub const SAMPLE_ORDER: &str = include_str!("fixtures/sample-order.json");

/// A single order as received from the upstream order system.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Display order number. Upstream sends either a string or a bare
    /// number.
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub order_number: String,

    /// Creation timestamp, RFC 3339 string or epoch milliseconds.
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub created_date: String,

    pub fulfillment_status: String,

    /// `"Delivery"` enables the delivery-address block; any other value
    /// is displayed verbatim.
    pub fulfillment_method: String,

    /// `"PAID"` or anything else (rendered as NOT PAID).
    pub payment_status: String,

    pub business_name: String,
    pub business_address: BusinessAddress,
    #[serde(default)]
    pub business_phone_number: Option<String>,
    pub website_url: String,

    pub customer_details: CustomerDetails,

    /// Despite the upstream field name, this is the *delivery* address.
    /// Rendered only for delivery orders.
    #[serde(default)]
    pub pickup_address: Option<DeliveryAddress>,

    /// May be empty; emptiness is not rejected.
    pub line_items: Vec<LineItem>,

    pub price_summary: PriceSummary,
}

impl Order {
    /// Whether the delivery-address block applies to this order.
    pub fn is_delivery(&self) -> bool {
        self.fulfillment_method == "Delivery"
    }

    /// Whether payment settled upstream.
    pub fn is_paid(&self) -> bool {
        self.payment_status == "PAID"
    }
}

/// Business street address as formatted by the upstream geocoder.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAddress {
    pub google_formatted_address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub address_line: String,
    pub city: String,
    pub subdivision: String,
    pub postal_code: String,
}

/// One purchased item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub quantity: u32,
    /// Item name. Upstream payloads use either `name` or `title`.
    #[serde(alias = "title")]
    pub name: String,
    pub variant: String,
    /// Formatted, currency-prefixed price string. Displayed verbatim,
    /// never parsed.
    pub price: String,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub modifiers: Option<String>,
}

/// Price totals. The numeric amounts gate whether their formatted
/// counterparts are rendered; the formatted strings are displayed
/// verbatim.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub subtotal_formatted_amount: String,
    pub tax_formatted_amount: String,
    #[serde(default)]
    pub shipping_amount: f64,
    #[serde(default)]
    pub shipping_formatted_amount: String,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default)]
    pub discount_formatted_amount: String,
    pub total_formatted_amount: String,
}

fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
    })
}
