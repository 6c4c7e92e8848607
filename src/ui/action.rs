//! Menu actions and their argument prompts

use crossterm::event::KeyCode;

/// A menu entry the user can trigger with a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewProduct,
    AddToCart,
    ViewCart,
    RemoveFromCart,
    UpdateQuantity,
    Checkout,
    RecentlyViewed,
    Recommendations,
    RemoveProduct,
    UpdateProduct,
    SortByName,
    SortByPrice,
    SortById,
    BinarySearch,
    LinearSearch,
    ProcessOrders,
}

impl Action {
    /// Menu order
    pub const ALL: [Action; 16] = [
        Action::ViewProduct,
        Action::AddToCart,
        Action::ViewCart,
        Action::RemoveFromCart,
        Action::UpdateQuantity,
        Action::Checkout,
        Action::RecentlyViewed,
        Action::Recommendations,
        Action::RemoveProduct,
        Action::UpdateProduct,
        Action::SortByName,
        Action::SortByPrice,
        Action::SortById,
        Action::BinarySearch,
        Action::LinearSearch,
        Action::ProcessOrders,
    ];

    /// Hotkey that triggers this action
    pub fn key(self) -> char {
        match self {
            Action::ViewProduct => 'v',
            Action::AddToCart => 'a',
            Action::ViewCart => 'k',
            Action::RemoveFromCart => 'r',
            Action::UpdateQuantity => 'u',
            Action::Checkout => 'c',
            Action::RecentlyViewed => 'h',
            Action::Recommendations => 'g',
            Action::RemoveProduct => 'd',
            Action::UpdateProduct => 'e',
            Action::SortByName => 'n',
            Action::SortByPrice => 'p',
            Action::SortById => 'i',
            Action::BinarySearch => 's',
            Action::LinearSearch => 'f',
            Action::ProcessOrders => 'o',
        }
    }

    /// Find the action bound to a key
    pub fn from_key(code: KeyCode) -> Option<Action> {
        match code {
            KeyCode::Char(c) => {
                let c = c.to_ascii_lowercase();
                Action::ALL.into_iter().find(|action| action.key() == c)
            }
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::ViewProduct => "View product details",
            Action::AddToCart => "Add to cart",
            Action::ViewCart => "View cart",
            Action::RemoveFromCart => "Remove from cart",
            Action::UpdateQuantity => "Update cart quantity",
            Action::Checkout => "Checkout",
            Action::RecentlyViewed => "Recently viewed",
            Action::Recommendations => "Recommendations",
            Action::RemoveProduct => "Admin: remove product",
            Action::UpdateProduct => "Admin: update product",
            Action::SortByName => "Sort by name",
            Action::SortByPrice => "Sort by price",
            Action::SortById => "Sort by id",
            Action::BinarySearch => "Search by id (binary)",
            Action::LinearSearch => "Find by id (linear)",
            Action::ProcessOrders => "Process orders",
        }
    }

    /// Prompt text for each argument, in the order they are asked
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Action::ViewProduct => &["Product ID to view"],
            Action::AddToCart => &["Product ID to add to cart", "Quantity"],
            Action::RemoveFromCart => &["Product ID to remove from cart"],
            Action::UpdateQuantity => &["Product ID to update quantity", "New quantity"],
            Action::Recommendations => &["Product ID to get recommendations"],
            Action::RemoveProduct => &["Product ID to remove"],
            Action::UpdateProduct => &[
                "Product ID to update",
                "New name",
                "New price",
                "New stock",
            ],
            Action::BinarySearch | Action::LinearSearch => &["Product ID to search"],
            Action::ViewCart
            | Action::Checkout
            | Action::RecentlyViewed
            | Action::SortByName
            | Action::SortByPrice
            | Action::SortById
            | Action::ProcessOrders => &[],
        }
    }
}

/// Arguments collected so far for an action that needs input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub action: Action,
    pub values: Vec<String>,
    pub buffer: String,
}

impl Prompt {
    pub fn new(action: Action) -> Self {
        Prompt {
            action,
            values: Vec::new(),
            buffer: String::new(),
        }
    }

    /// Label of the field currently being typed
    pub fn current_label(&self) -> &'static str {
        self.action
            .fields()
            .get(self.values.len())
            .copied()
            .unwrap_or("")
    }

    /// Accept the buffer as the current field; returns true once every field is filled
    pub fn commit_field(&mut self) -> bool {
        self.values.push(std::mem::take(&mut self.buffer));
        self.values.len() >= self.action.fields().len()
    }
}
