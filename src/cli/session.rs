use std::io::Write;

use anyhow::{Context, Result};
use console::{style, Emoji};
use tracing::{debug, info, warn};

use crate::{
    cli::{
        menu::{MenuOption, MENU},
        prompt::Prompter,
    },
    models::{
        cart::ShoppingCart,
        item::{Item, StoreItemRequest},
    },
    services::{CartService, CartServiceError},
    utils::formatting::{format_item_cost, format_total, SummaryStyle},
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");

/// One customer's visit: header prompts, the two opening items, then the menu.
pub struct ShoppingSession<P, W> {
    prompter: P,
    out: W,
    style: SummaryStyle,
    today: String,
}

impl<P: Prompter, W: Write> ShoppingSession<P, W> {
    /// `today` is offered as the default answer to the date prompt.
    pub fn new(prompter: P, out: W, style: SummaryStyle, today: impl Into<String>) -> Self {
        Self {
            prompter,
            out,
            style,
            today: today.into(),
        }
    }

    /// Runs until the customer quits and hands back the final cart.
    pub fn run(mut self) -> Result<ShoppingCart> {
        let mut service = self.open_cart()?;

        let (first, second) = self.read_opening_items()?;
        service.add(first);
        service.add(second);

        self.menu_loop(&mut service)?;

        let cart = service.into_cart();
        info!(
            "Session finished with {} units totalling {:.2}",
            cart.item_count(),
            cart.total_cost()
        );
        Ok(cart)
    }

    fn open_cart(&mut self) -> Result<CartService> {
        let customer_name = self.prompter.ask_text("Enter customer's name", None)?;
        let current_date = self
            .prompter
            .ask_text("Enter today's date", Some(self.today.as_str()))?;

        writeln!(self.out, "Customer name: {}", customer_name)?;
        writeln!(self.out, "Today's date: {}", current_date)?;

        CartService::new(&customer_name, &current_date).context("Failed to open shopping cart")
    }

    fn read_opening_items(&mut self) -> Result<(Item, Item)> {
        let first = self.read_item("Item 1")?;
        writeln!(self.out)?;
        let second = self.read_item("Item 2")?;

        writeln!(self.out, "\n{}", style("TOTAL COST").bold())?;
        writeln!(self.out, "{}", format_item_cost(&first))?;
        writeln!(self.out, "{}", format_item_cost(&second))?;
        writeln!(self.out, "{}", format_total(first.cost() + second.cost()))?;

        Ok((first, second))
    }

    fn read_item(&mut self, label: &str) -> Result<Item> {
        writeln!(self.out, "{}", style(label).bold())?;

        let name = self.prompter.ask_text("Enter the item name", None)?;
        let price = self.prompter.ask_price("Enter the item price")?;
        let quantity = self.prompter.ask_quantity("Enter the item quantity")?;

        Item::new(StoreItemRequest::new(name, price, quantity))
            .with_context(|| format!("Invalid entry for {}", label))
    }

    fn menu_loop(&mut self, service: &mut CartService) -> Result<()> {
        loop {
            writeln!(self.out, "\n{}", MENU)?;

            let choice = self
                .prompter
                .ask_optional_text("Choose an option")?
                .unwrap_or_default();
            let Some(option) = MenuOption::parse(&choice) else {
                debug!("Ignoring unknown menu option '{}'", choice);
                continue;
            };
            debug!("Menu option '{}' selected", option);

            if option != MenuOption::Quit {
                writeln!(self.out, "{}", style(option.heading()).bold().cyan())?;
            }

            match option {
                MenuOption::AddItem => self.handle_add_item(service)?,
                MenuOption::RemoveItem => self.handle_remove_item(service)?,
                MenuOption::ChangeQuantity => self.handle_change_quantity(service)?,
                MenuOption::Descriptions => service.cart().print_descriptions(&mut self.out)?,
                MenuOption::Summary => service.cart().print_summary(&mut self.out, self.style)?,
                MenuOption::Quit => {
                    info!("Customer chose to quit");
                    return Ok(());
                }
            }
        }
    }

    fn handle_add_item(&mut self, service: &mut CartService) -> Result<()> {
        let name = self.prompter.ask_text("Enter the item name", None)?;
        let description = self.prompter.ask_optional_text("Enter the item description")?;
        let price = self.prompter.ask_price("Enter the item price")?;
        let quantity = self.prompter.ask_quantity("Enter the item quantity")?;

        let mut request = StoreItemRequest::new(name, price, quantity);
        if let Some(description) = description {
            request = request.description(description);
        }

        match service.add_item(request) {
            Ok(item) => {
                writeln!(self.out, "{}Added {} to cart", CHECKMARK, style(&item.name).green())?;
            }
            Err(e) => {
                writeln!(self.out, "{}Failed to add item: {}", CROSS, style(&e).red())?;
                warn!("Failed to add item: {}", e);
            }
        }

        Ok(())
    }

    fn handle_remove_item(&mut self, service: &mut CartService) -> Result<()> {
        let name = self.prompter.ask_text("Enter name of item to remove", None)?;

        match service.remove_item(&name) {
            Ok(item) => {
                writeln!(self.out, "{}Removed {} from cart", CHECKMARK, style(&item.name).green())?;
            }
            Err(CartServiceError::ItemNotFound { .. }) => {
                writeln!(self.out, "{}Item not found in cart. Nothing removed.", CROSS)?;
            }
            Err(e) => {
                writeln!(self.out, "{}Failed to remove item: {}", CROSS, style(&e).red())?;
                warn!("Failed to remove item: {}", e);
            }
        }

        Ok(())
    }

    fn handle_change_quantity(&mut self, service: &mut CartService) -> Result<()> {
        let name = self.prompter.ask_text("Enter the item name", None)?;
        let quantity = self.prompter.ask_quantity("Enter the new quantity")?;

        match service.change_quantity(&name, quantity) {
            Ok(item) => {
                writeln!(
                    self.out,
                    "{}{} quantity is now {}",
                    CHECKMARK,
                    style(&item.name).green(),
                    item.quantity
                )?;
            }
            Err(CartServiceError::ItemNotFound { .. }) => {
                writeln!(self.out, "{}Item not found in cart. Nothing modified.", CROSS)?;
            }
            Err(e) => {
                writeln!(self.out, "{}Failed to change quantity: {}", CROSS, style(&e).red())?;
                warn!("Failed to change quantity: {}", e);
            }
        }

        Ok(())
    }
}
