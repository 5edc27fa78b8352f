use std::fmt;

use clap::ValueEnum;
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::models::{cart::ShoppingCart, item::Item};

pub const EMPTY_CART_MARKER: &str = "SHOPPING CART IS EMPTY";

/// Layout of the cart summary printed by the "o" menu option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SummaryStyle {
    #[default]
    Plain,
    Table,
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryStyle::Plain => write!(f, "plain"),
            SummaryStyle::Table => write!(f, "table"),
        }
    }
}

#[derive(Tabled)]
struct CartTableRow {
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Quantity")]
    quantity: u32,
    #[tabled(rename = "Unit Price")]
    price: String,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

/// Whole amounts render without decimals, everything else with exactly two.
pub fn format_money(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn format_total(amount: f64) -> String {
    format!("Total: {}", format_money(amount))
}

pub fn format_item_cost(item: &Item) -> String {
    format!(
        "{} {} @ {} = {}",
        item.name,
        item.quantity,
        format_money(item.price),
        format_money(item.cost())
    )
}

pub fn format_cart_header(cart: &ShoppingCart) -> String {
    format!("{}'s Shopping Cart - {}", cart.customer_name(), cart.current_date())
}

pub fn format_cart_summary(cart: &ShoppingCart, style: SummaryStyle) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", format_cart_header(cart)));
    output.push_str(&format!("Number of Items: {}\n", cart.item_count()));

    if cart.is_empty() {
        output.push_str(&format!("{}\n", EMPTY_CART_MARKER));
        output.push_str(&format!("{}\n", format_total(0.0)));
        return output;
    }

    match style {
        SummaryStyle::Plain => {
            for item in cart.items() {
                output.push_str(&format!("{}\n", format_item_cost(item)));
            }
        }
        SummaryStyle::Table => {
            output.push_str(&format!("{}\n", format_cart_table(cart)));
        }
    }

    output.push_str(&format!("{}\n", format_total(cart.total_cost())));
    output
}

pub fn format_item_descriptions(cart: &ShoppingCart) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", format_cart_header(cart)));
    output.push_str("Item Descriptions\n");
    for item in cart.items() {
        output.push_str(&format!("{}: {}\n", item.name, item.description));
    }

    output
}

pub fn format_cart_table(cart: &ShoppingCart) -> String {
    if cart.is_empty() {
        return String::new();
    }

    let rows: Vec<CartTableRow> = cart
        .items()
        .iter()
        .map(|item| CartTableRow {
            name: item.name.clone(),
            quantity: item.quantity,
            price: format_money(item.price),
            subtotal: format_money(item.cost()),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}
