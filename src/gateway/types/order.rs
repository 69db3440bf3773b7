//! Order request types

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::money::StrictDecimal;

/// Place-order request body
///
/// Wire names follow the existing clients (`productname`, `unitprice`);
/// camelCase and snake_case spellings are accepted too.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(rename = "productname", alias = "productName", alias = "product_name")]
    #[validate(length(min = 1, message = "productname cannot be empty"))]
    #[schema(example = "Gibson gitaar")]
    pub product_name: String,

    #[serde(rename = "unitprice", alias = "unitPrice", alias = "unit_price")]
    #[schema(value_type = f64, example = 2399.00)]
    pub unit_price: StrictDecimal,

    #[validate(range(min = 0, message = "quantity cannot be negative"))]
    #[schema(example = 5)]
    pub quantity: i32,
}
