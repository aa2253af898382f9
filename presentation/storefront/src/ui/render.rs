use std::fmt::Write;

use colored::Colorize;

use business::domain::cart::model::{Cart, CartLineItem};
use business::domain::product::model::Product;

use super::state::{AppState, CatalogState};

pub const LOADING_MESSAGE: &str = "Loading products...";
pub const FAILURE_MESSAGE: &str = "Something went wrong...";

pub const HELP: &str = "\
Commands:
  add <id>      put one unit of a product in the cart (alias: + <id>)
  remove <id>   take one unit out of the cart (aliases: rm, - <id>)
  cart          open or close the cart drawer
  open | close  show or hide the cart drawer
  help          show this list
  quit          leave the store";

/// Full screen for the current state: badge, product grid and, when open,
/// the cart drawer.
pub fn render(state: &AppState) -> String {
    let products = match &state.catalog {
        CatalogState::Pending => return LOADING_MESSAGE.to_string(),
        CatalogState::Failed => return FAILURE_MESSAGE.red().to_string(),
        CatalogState::Loaded(products) => products,
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", badge(&state.cart));
    out.push('\n');
    for product in products {
        out.push_str(&render_product(product));
        out.push('\n');
    }
    if state.cart_open {
        out.push_str(&render_drawer(&state.cart));
    }
    out
}

/// Cart affordance with the number of units as its badge.
pub fn badge(cart: &Cart) -> String {
    format!(
        "{} {}",
        "[Cart]".bold(),
        format!("({})", cart.total_item_count()).magenta()
    )
}

pub fn render_product(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        format!("#{}", product.id).dimmed(),
        product.title.bold()
    );
    let _ = writeln!(out, "    {}", product.category.italic());
    let _ = writeln!(out, "    {}", product.description);
    let _ = writeln!(out, "    {}", product.image.as_str().blue());
    let _ = writeln!(out, "    ${}", product.price);
    let _ = writeln!(out, "    {}", format!("> add {}", product.id).green());
    out
}

pub fn render_drawer(cart: &Cart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "== Your Shopping Cart ==".bold());
    if cart.is_empty() {
        let _ = writeln!(out, "No items in cart.");
    }
    for item in cart.items() {
        out.push_str(&render_line_item(item));
    }
    let _ = writeln!(out, "{}", format!("Total: ${}", cart.total_price()).bold());
    out
}

pub fn render_line_item(item: &CartLineItem) -> String {
    let id = item.id();
    let mut out = String::new();
    let _ = writeln!(out, "{}", item.product.title.bold());
    let _ = writeln!(
        out,
        "    Price: ${}    Total: ${}",
        item.product.price,
        item.line_total()
    );
    let _ = writeln!(
        out,
        "    {} {} {}",
        format!("[- {}]", id).yellow(),
        item.quantity,
        format!("[+ {}]", id).yellow()
    );
    let _ = writeln!(out, "    {}", item.product.image.as_str().blue());
    out
}
