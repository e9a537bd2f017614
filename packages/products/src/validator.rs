use crate::types::{NewProduct, ProductCreateInput, ProductUpdateInput};

/// Validation errors for product data
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates and coerces create input into a `NewProduct`.
///
/// barcode, serial, name and price are required; empty strings and a
/// zero price count as absent. Price may arrive as a number or a
/// numeric string; stock likewise, defaulting to 0 when absent or
/// unparseable.
pub fn validate_product_data(
    data: &ProductCreateInput,
) -> Result<NewProduct, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let barcode = data.barcode.as_deref().map(str::trim).unwrap_or("");
    if barcode.is_empty() {
        errors.push(ValidationError::new("barcode", "barcode is required"));
    }

    let serial = data.serial.as_deref().map(str::trim).unwrap_or("");
    if serial.is_empty() {
        errors.push(ValidationError::new("serial", "serial is required"));
    }

    let name = data.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        errors.push(ValidationError::new("name", "name is required"));
    }

    let price = match data.price.as_ref().map(|p| p.as_f64()) {
        Some(Some(p)) if p.is_finite() && p != 0.0 => p,
        Some(Some(p)) if p == 0.0 => {
            // A zero price counts as absent.
            errors.push(ValidationError::new("price", "price is required"));
            0.0
        }
        Some(_) => {
            // Unparseable text, or a NaN/infinity that sneaked through
            // a string form. Never persisted.
            errors.push(ValidationError::new("price", "price must be numeric"));
            0.0
        }
        None => {
            errors.push(ValidationError::new("price", "price is required"));
            0.0
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    let stock = data.stock.as_ref().and_then(|s| s.as_i64()).unwrap_or(0);

    Ok(NewProduct {
        barcode: barcode.to_string(),
        serial: serial.to_string(),
        name: name.to_string(),
        brand: data.brand.clone().unwrap_or_default(),
        category: data.category.clone().unwrap_or_default(),
        price,
        description: data.description.clone().unwrap_or_default(),
        stock,
    })
}

/// Validates product update data
pub fn validate_product_update(data: &ProductUpdateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(ref barcode) = data.barcode {
        if barcode.trim().is_empty() {
            errors.push(ValidationError::new("barcode", "barcode cannot be empty"));
        }
    }

    if let Some(ref serial) = data.serial {
        if serial.trim().is_empty() {
            errors.push(ValidationError::new("serial", "serial cannot be empty"));
        }
    }

    if let Some(ref name) = data.name {
        if name.trim().is_empty() {
            errors.push(ValidationError::new("name", "name cannot be empty"));
        }
    }

    errors
}
