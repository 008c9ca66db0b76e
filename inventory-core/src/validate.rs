use crate::records::{NewDeliveryAgent, NewItem};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}

/// Raw add-item form input, exactly as typed by the user.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ItemForm {
    pub product_name: String,
    pub quantity: String,
    pub country: String,
    pub month: String,
    pub cost_price: String,
    pub selling_price: String,
    pub current_price: String,
    pub sales: String,
    pub expiry_date: String,
}

impl ItemForm {
    /// Parses every field, rejecting input that does not parse instead
    /// of coercing it.
    pub fn parse(&self) -> Result<NewItem, ValidationError> {
        let product_name = required("product_name", &self.product_name)?;
        let country = required("country", &self.country)?;
        let quantity = parse_required::<u32>("quantity", &self.quantity)?;
        let month = parse_required::<u8>("month", &self.month)?;

        let item = NewItem {
            product_name,
            quantity,
            cost_price: parse_optional("cost_price", &self.cost_price)?,
            selling_price: parse_optional("selling_price", &self.selling_price)?,
            current_price: parse_optional("current_price", &self.current_price)?,
            sales: parse_optional("sales", &self.sales)?,
            expiry_date: Some(self.expiry_date.trim())
                .filter(|s| !s.is_empty())
                .map(ToString::to_string),
            country: country.to_lowercase(),
            month,
        };
        validate_new_item(&item)?;
        Ok(item)
    }
}

pub fn validate_new_item(item: &NewItem) -> Result<(), ValidationError> {
    if item.product_name.trim().is_empty() {
        return Err(ValidationError::Missing("product_name"));
    }
    if item.country.trim().is_empty() {
        return Err(ValidationError::Missing("country"));
    }
    if !(1..=12).contains(&item.month) {
        return Err(ValidationError::OutOfRange {
            field: "month",
            value: item.month.to_string(),
        });
    }
    for (field, price) in [
        ("cost_price", item.cost_price),
        ("selling_price", item.selling_price),
        ("current_price", item.current_price),
    ] {
        if let Some(price) = price {
            check_price(field, price)?;
        }
    }
    Ok(())
}

pub fn validate_new_agent(agent: &NewDeliveryAgent) -> Result<(), ValidationError> {
    if agent.name.trim().is_empty() {
        return Err(ValidationError::Missing("name"));
    }
    if agent.location.trim().is_empty() {
        return Err(ValidationError::Missing("location"));
    }
    Ok(())
}

pub fn check_price(field: &'static str, price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field,
            value: price.to_string(),
        });
    }
    Ok(())
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Missing(field));
    }
    Ok(value.to_string())
}

fn parse_required<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, ValidationError> {
    let value = required(field, value)?;
    value
        .parse::<T>()
        .map_err(|_| ValidationError::InvalidNumber { field, value })
}

fn parse_optional<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<Option<T>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
