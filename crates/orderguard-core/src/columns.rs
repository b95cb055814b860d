//! Column names and value domains of the order-records dataset.

pub const ORDER_ID: &str = "Order ID";
pub const QTY: &str = "Qty";
pub const AMOUNT: &str = "Amount";
pub const CURRENCY: &str = "currency";
pub const SHIP_COUNTRY: &str = "ship-country";
pub const STATUS: &str = "Status";

/// Every order is expected to be billed in this currency.
pub const EXPECTED_CURRENCY: &str = "INR";

/// Every order is expected to ship to this country.
pub const EXPECTED_SHIP_COUNTRY: &str = "IN";

/// The closed set of valid order statuses.
pub const ALLOWED_STATUSES: [&str; 4] = ["Shipped", "Cancelled", "Pending", "Shipping"];
