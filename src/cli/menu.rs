use std::fmt;

pub const MENU: &str = "MENU\n\
a - Add item to cart\n\
r - Remove item from cart\n\
c - Change item quantity\n\
i - Output items' descriptions\n\
o - Output shopping cart\n\
q - Quit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddItem,
    RemoveItem,
    ChangeQuantity,
    Descriptions,
    Summary,
    Quit,
}

impl MenuOption {
    /// Parses a menu letter, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "a" => Some(MenuOption::AddItem),
            "r" => Some(MenuOption::RemoveItem),
            "c" => Some(MenuOption::ChangeQuantity),
            "i" => Some(MenuOption::Descriptions),
            "o" => Some(MenuOption::Summary),
            "q" => Some(MenuOption::Quit),
            _ => None,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            MenuOption::AddItem => "ADD ITEM TO CART",
            MenuOption::RemoveItem => "REMOVE ITEM FROM CART",
            MenuOption::ChangeQuantity => "CHANGE ITEM QUANTITY",
            MenuOption::Descriptions => "OUTPUT ITEMS' DESCRIPTIONS",
            MenuOption::Summary => "OUTPUT SHOPPING CART",
            MenuOption::Quit => "QUIT",
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuOption::AddItem => write!(f, "a"),
            MenuOption::RemoveItem => write!(f, "r"),
            MenuOption::ChangeQuantity => write!(f, "c"),
            MenuOption::Descriptions => write!(f, "i"),
            MenuOption::Summary => write!(f, "o"),
            MenuOption::Quit => write!(f, "q"),
        }
    }
}
