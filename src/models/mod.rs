pub mod cart;
pub mod item;

pub use cart::ShoppingCart;
pub use item::{Item, ItemPatch, StoreItemRequest};
