use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    models::{
        cart::ShoppingCart,
        item::{Item, ItemPatch, StoreItemRequest},
    },
    utils::validation::validate_name,
};

#[derive(Error, Debug)]
pub enum CartServiceError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Item '{name}' not found in cart")]
    ItemNotFound { name: String },
}

/// Boundary between user input and the cart. Owns the cart for one session.
pub struct CartService {
    cart: ShoppingCart,
}

impl CartService {
    pub fn new(customer_name: &str, current_date: &str) -> Result<Self, CartServiceError> {
        let customer_name = validate_name(customer_name).map_err(|e| {
            CartServiceError::ValidationError {
                message: format!("Customer name: {}", e),
            }
        })?;

        info!(
            "Opening cart for customer '{}' on {}",
            customer_name, current_date
        );

        Ok(Self {
            cart: ShoppingCart::new(customer_name, current_date.trim()),
        })
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    pub fn into_cart(self) -> ShoppingCart {
        self.cart
    }

    /// Appends an already built item.
    pub fn add(&mut self, item: Item) {
        info!(
            "Adding '{}' x{} @ {} to cart",
            item.name, item.quantity, item.price
        );
        self.cart.add(item);
        debug!("Cart now holds {} units", self.cart.item_count());
    }

    pub fn add_item(&mut self, request: StoreItemRequest) -> Result<&Item, CartServiceError> {
        let item = Item::new(request).map_err(|e| CartServiceError::ValidationError {
            message: format!("Item validation failed: {}", e),
        })?;

        let name = item.name.clone();
        self.add(item);
        self.cart
            .items()
            .last()
            .ok_or(CartServiceError::ItemNotFound { name })
    }

    pub fn remove_item(&mut self, name: &str) -> Result<Item, CartServiceError> {
        let name = Self::lookup_name(name)?;

        match self.cart.remove(name) {
            Some(item) => {
                info!("Removed '{}' from cart", item.name);
                Ok(item)
            }
            None => {
                warn!("Remove skipped, item '{}' not in cart", name);
                Err(CartServiceError::ItemNotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    pub fn change_quantity(&mut self, name: &str, quantity: u32) -> Result<&Item, CartServiceError> {
        self.modify_item(name, ItemPatch::new().quantity(quantity))
    }

    pub fn modify_item(&mut self, name: &str, patch: ItemPatch) -> Result<&Item, CartServiceError> {
        let name = Self::lookup_name(name)?;

        let patch = patch
            .validated()
            .map_err(|e| CartServiceError::ValidationError {
                message: format!("Item update validation failed: {}", e),
            })?;

        if patch.is_empty() {
            debug!("Empty patch for '{}'", name);
        }

        match self.cart.modify(name, patch) {
            Some((item, true)) => {
                info!(
                    "Updated '{}': quantity {}, price {}, description '{}'",
                    item.name, item.quantity, item.price, item.description
                );
                Ok(item)
            }
            Some((item, false)) => {
                debug!("No change applied to '{}'", item.name);
                Ok(item)
            }
            None => {
                warn!("Modify skipped, item '{}' not in cart", name);
                Err(CartServiceError::ItemNotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    fn lookup_name(name: &str) -> Result<&str, CartServiceError> {
        validate_name(name).map_err(|e| CartServiceError::ValidationError {
            message: format!("Item name: {}", e),
        })
    }
}
