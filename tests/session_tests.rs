use shopping_cart_cli::cli::{ScriptedPrompter, ShoppingSession};
use shopping_cart_cli::models::ShoppingCart;
use shopping_cart_cli::utils::formatting::SummaryStyle;

const OPENING: [&str; 8] = ["Ada", "May 1, 2024", "Pencil", "2", "5", "Eraser", "0.75", "3"];

fn run_session(menu_answers: &[&str], style: SummaryStyle) -> (anyhow::Result<ShoppingCart>, String) {
    console::set_colors_enabled(false);

    let answers: Vec<&str> = OPENING.iter().chain(menu_answers.iter()).copied().collect();
    let mut out = Vec::new();
    let result = ShoppingSession::new(ScriptedPrompter::new(answers), &mut out, style, "January 1, 2020").run();

    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_opening_items_and_total_cost() {
    let (result, output) = run_session(&["q"], SummaryStyle::Plain);
    let cart = result.unwrap();

    assert_eq!(cart.customer_name(), "Ada");
    assert_eq!(cart.current_date(), "May 1, 2024");
    assert_eq!(cart.items().len(), 2);

    assert!(output.contains("Customer name: Ada\n"));
    assert!(output.contains("Today's date: May 1, 2024\n"));
    assert!(output.contains("TOTAL COST\nPencil 5 @ $2 = $10\nEraser 3 @ $0.75 = $2.25\nTotal: $12.25\n"));
}

#[test]
fn test_opening_output_spacing() {
    let (result, output) = run_session(&["q"], SummaryStyle::Plain);
    result.unwrap();

    assert!(output.starts_with(
        "Customer name: Ada\n\
         Today's date: May 1, 2024\n\
         Item 1\n\
         \n\
         Item 2\n\
         \n\
         TOTAL COST\n"
    ));
}

#[test]
fn test_blank_date_takes_default() {
    console::set_colors_enabled(false);

    let answers = ["Ada", "", "Pen", "1", "1", "Cap", "2", "1", "q"];
    let mut out = Vec::new();
    let cart = ShoppingSession::new(ScriptedPrompter::new(answers), &mut out, SummaryStyle::Plain, "January 1, 2020")
        .run()
        .unwrap();

    assert_eq!(cart.current_date(), "January 1, 2020");
}

#[test]
fn test_output_shopping_cart() {
    let (result, output) = run_session(&["o", "q"], SummaryStyle::Plain);
    result.unwrap();

    assert!(output.contains(
        "OUTPUT SHOPPING CART\n\
         Ada's Shopping Cart - May 1, 2024\n\
         Number of Items: 8\n\
         Pencil 5 @ $2 = $10\n\
         Eraser 3 @ $0.75 = $2.25\n\
         Total: $12.25\n"
    ));
}

#[test]
fn test_table_summary_style() {
    let (result, output) = run_session(&["o", "q"], SummaryStyle::Table);
    result.unwrap();

    assert!(output.contains("Unit Price"));
    assert!(output.contains("Total: $12.25\n"));
}

#[test]
fn test_add_item_with_and_without_description() {
    let (result, output) = run_session(
        &["a", "Pen", "blue ink", "1.5", "2", "A", "Cap", "", "4", "1", "i", "q"],
        SummaryStyle::Plain,
    );
    let cart = result.unwrap();

    assert_eq!(cart.item_count(), 11);
    assert_eq!(cart.find("Cap").unwrap().description, "none");
    assert!(output.contains("ADD ITEM TO CART\n"));
    assert!(output.contains(
        "Item Descriptions\nPencil: none\nEraser: none\nPen: blue ink\nCap: none\n"
    ));
}

#[test]
fn test_invalid_numbers_are_asked_again() {
    let (result, _) = run_session(&["a", "Pen", "", "-1", "abc", "1.5", "-2", "2.5", "2", "q"], SummaryStyle::Plain);
    let cart = result.unwrap();

    let pen = cart.find("Pen").unwrap();
    assert_eq!(pen.price, 1.5);
    assert_eq!(pen.quantity, 2);
}

#[test]
fn test_remove_item() {
    let (result, output) = run_session(&["r", "Ghost", "r", "Pencil", "o", "q"], SummaryStyle::Plain);
    let cart = result.unwrap();

    assert!(output.contains("Item not found in cart. Nothing removed.\n"));
    assert!(cart.find("Pencil").is_none());
    assert_eq!(cart.item_count(), 3);
    assert!(output.contains("Number of Items: 3\nEraser 3 @ $0.75 = $2.25\nTotal: $2.25\n"));
}

#[test]
fn test_remove_everything_shows_empty_cart() {
    let (result, output) = run_session(&["r", "Pencil", "r", "Eraser", "o", "q"], SummaryStyle::Plain);
    assert!(result.unwrap().is_empty());
    assert!(output.contains("Number of Items: 0\nSHOPPING CART IS EMPTY\nTotal: $0\n"));
}

#[test]
fn test_change_quantity() {
    let (result, output) = run_session(&["c", "Ghost", "4", "c", "Eraser", "0", "q"], SummaryStyle::Plain);
    let cart = result.unwrap();

    assert!(output.contains("Item not found in cart. Nothing modified.\n"));
    let eraser = cart.find("Eraser").unwrap();
    assert_eq!(eraser.quantity, 0);
    assert_eq!(eraser.price, 0.75);
    assert_eq!(cart.item_count(), 5);
}

#[test]
fn test_unknown_option_shows_menu_again() {
    let (result, output) = run_session(&["x", "Q"], SummaryStyle::Plain);
    result.unwrap();

    assert_eq!(output.matches("MENU\n").count(), 2);
}

#[test]
fn test_blank_option_shows_menu_again() {
    let (result, output) = run_session(&["", "  ", "q"], SummaryStyle::Plain);
    result.unwrap();

    assert_eq!(output.matches("MENU\n").count(), 3);
}

#[test]
fn test_running_out_of_input_is_an_error() {
    let (result, _) = run_session(&["a", "Pen"], SummaryStyle::Plain);
    assert!(result.is_err());
}
