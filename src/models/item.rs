use validator::{Validate, ValidationError, ValidationErrors};

/// Description stored on items added without one.
pub const DEFAULT_DESCRIPTION: &str = "none";

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
}

// request dto
#[derive(Debug, Clone, Validate)]
pub struct StoreItemRequest {
    #[validate(length(min = 1, message = "Item name is required"))]
    #[validate(custom = "validate_item_name")]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub quantity: u32,

    pub description: Option<String>,
}

/// Partial update for an existing item. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ItemPatch {
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    pub quantity: Option<u32>,
}

fn validate_item_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("Item name is required"));
    }
    Ok(())
}

// range(min = 0.0) lets NaN through
fn validate_finite_price(price: f64) -> Result<(), ValidationErrors> {
    if price.is_finite() {
        return Ok(());
    }
    let mut errors = ValidationErrors::new();
    errors.add("price", ValidationError::new("Price must be a finite number"));
    Err(errors)
}

/// Folds `-0.0` into `0.0` so it never renders as "$-0".
fn normalize_price(price: f64) -> f64 {
    if price == 0.0 {
        0.0
    } else {
        price
    }
}

// custom error
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl StoreItemRequest {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Builds a patch from the "none"/0 convention, where a sentinel value
    /// means the field was not given. Zero prices and quantities are
    /// therefore unreachable through this constructor.
    pub fn from_sentinels(description: &str, price: f64, quantity: u32) -> Self {
        Self {
            description: (description != DEFAULT_DESCRIPTION).then(|| description.to_string()),
            price: (price != 0.0).then_some(price),
            quantity: (quantity != 0).then_some(quantity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.price.is_none() && self.quantity.is_none()
    }

    /// Validates the patch and normalizes its price.
    pub fn validated(mut self) -> Result<Self, ItemError> {
        self.validate()?;
        if let Some(price) = self.price {
            validate_finite_price(price)?;
            self.price = Some(normalize_price(price));
        }
        Ok(self)
    }
}

impl Item {
    pub fn new(request: StoreItemRequest) -> Result<Self, ItemError> {
        request.validate()?;
        validate_finite_price(request.price)?;

        let description = request
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        Ok(Self {
            name: request.name.trim().to_string(),
            price: normalize_price(request.price),
            quantity: request.quantity,
            description,
        })
    }

    pub fn cost(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Overwrites the fields present in `patch`, returning whether anything changed.
    pub fn apply(&mut self, patch: ItemPatch) -> bool {
        let mut updated = false;

        if let Some(description) = patch.description {
            if self.description != description {
                self.description = description;
                updated = true;
            }
        }

        if let Some(price) = patch.price {
            if self.price != price {
                self.price = price;
                updated = true;
            }
        }

        if let Some(quantity) = patch.quantity {
            if self.quantity != quantity {
                self.quantity = quantity;
                updated = true;
            }
        }

        updated
    }
}
