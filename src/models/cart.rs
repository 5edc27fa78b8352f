use std::io::{self, Write};

use crate::models::item::{Item, ItemPatch};
use crate::utils::formatting::{format_cart_summary, format_item_descriptions, SummaryStyle};

/// Items selected by one customer during a session, kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingCart {
    customer_name: String,
    current_date: String,
    items: Vec<Item>,
}

impl ShoppingCart {
    pub fn new(customer_name: impl Into<String>, current_date: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            current_date: current_date.into(),
            items: Vec::new(),
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn current_date(&self) -> &str {
        &self.current_date
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first item named `name`. Matching is exact and case-sensitive.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let position = self.items.iter().position(|item| item.name == name)?;
        Some(self.items.remove(position))
    }

    /// Applies `patch` to the first item named `name`. The flag reports
    /// whether any field actually changed.
    pub fn modify(&mut self, name: &str, patch: ItemPatch) -> Option<(&Item, bool)> {
        let item = self.items.iter_mut().find(|item| item.name == name)?;
        let updated = item.apply(patch);
        Some((&*item, updated))
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Total number of units across all items, not the number of lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(Item::cost).sum()
    }

    pub fn print_summary<W: Write + ?Sized>(&self, out: &mut W, style: SummaryStyle) -> io::Result<()> {
        out.write_all(format_cart_summary(self, style).as_bytes())
    }

    pub fn print_descriptions<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(format_item_descriptions(self).as_bytes())
    }
}
