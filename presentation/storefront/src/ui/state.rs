use business::domain::cart::model::Cart;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

use super::command::Command;

/// The catalog request, set once at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Pending,
    Loaded(Vec<Product>),
    Failed,
}

/// Everything the storefront displays. Owned by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub catalog: CatalogState,
    pub cart: Cart,
    pub cart_open: bool,
}

/// Result of feeding one command to the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Changed,
    Rejected(Notice),
    ShowHelp,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    UnknownProduct(ProductId),
    CatalogUnavailable,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::UnknownProduct(id) => write!(f, "There is no product #{} in the catalog.", id),
            Notice::CatalogUnavailable => write!(f, "The catalog is not available."),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CatalogState::Pending)
    }
}

impl AppState {
    pub fn new(catalog: CatalogState) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            cart_open: false,
        }
    }

    pub fn products(&self) -> Option<&[Product]> {
        match &self.catalog {
            CatalogState::Loaded(products) => Some(products.as_slice()),
            _ => None,
        }
    }

    /// Line items keep their own copy of the product, so `+` in the drawer
    /// resolves there first.
    fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.cart
            .get(id)
            .map(|item| &item.product)
            .or_else(|| self.products()?.iter().find(|p| p.id == id))
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        let loaded = self.products().is_some();
        match command {
            Command::Help => Outcome::ShowHelp,
            Command::Quit => Outcome::Quit,
            _ if !loaded => Outcome::Rejected(Notice::CatalogUnavailable),
            Command::Add(id) => {
                let Some(product) = self.find_product(id) else {
                    return Outcome::Rejected(Notice::UnknownProduct(id));
                };
                self.cart = self.cart.add_to_cart(product);
                tracing::debug!(product_id = %id, items = self.cart.total_item_count(), "Added to cart");
                Outcome::Changed
            }
            Command::Remove(id) => {
                self.cart = self.cart.remove_from_cart(id);
                tracing::debug!(product_id = %id, items = self.cart.total_item_count(), "Removed from cart");
                Outcome::Changed
            }
            Command::ToggleCart => {
                self.cart_open = !self.cart_open;
                Outcome::Changed
            }
            Command::OpenCart => {
                self.cart_open = true;
                Outcome::Changed
            }
            Command::CloseCart => {
                self.cart_open = false;
                Outcome::Changed
            }
        }
    }
}
