use std::num::NonZeroU32;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{Price, ProductId};

/// A product in the cart together with how many units were picked.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub product: Product,
    pub quantity: NonZeroU32,
}

impl CartLineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Ordered line items, at most one per product id.
///
/// New products are appended; quantity changes never move an item. Every
/// transition returns a fresh `Cart` and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// One more unit of `product`: bumps the existing line in place or
    /// appends a new line with quantity 1.
    pub fn add_to_cart(&self, product: &Product) -> Cart {
        let mut items = self.items.clone();
        match items.iter_mut().find(|item| item.id() == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => items.push(CartLineItem::new(product.clone())),
        }
        Cart { items }
    }

    /// One less unit of `id`. A line at quantity 1 disappears; an unknown id
    /// yields an equal cart.
    pub fn remove_from_cart(&self, id: ProductId) -> Cart {
        let items = self
            .items
            .iter()
            .filter_map(|item| {
                if item.id() != id {
                    return Some(item.clone());
                }
                NonZeroU32::new(item.quantity.get() - 1).map(|quantity| CartLineItem {
                    product: item.product.clone(),
                    quantity,
                })
            })
            .collect();
        Cart { items }
    }

    /// Sum of all quantities, shown as the cart badge.
    pub fn total_item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity.get()).sum()
    }

    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use proptest::prelude::*;

    fn product(id: u64, price: f64) -> Product {
        Product::new(NewProductProps {
            id,
            category: "jewelery".to_string(),
            description: "A product".to_string(),
            image: format!("https://fakestoreapi.com/img/{}.jpg", id),
            price,
            title: format!("Product {}", id),
        })
        .unwrap()
    }

    fn quantities(cart: &Cart) -> Vec<(u64, u32)> {
        cart.items()
            .iter()
            .map(|item| (item.id().value(), item.quantity.get()))
            .collect()
    }

    #[test]
    fn should_start_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price().to_string(), "0.00");
    }

    #[test]
    fn should_append_new_product_with_quantity_one() {
        let cart = Cart::new().add_to_cart(&product(1, 9.99));

        assert_eq!(quantities(&cart), vec![(1, 1)]);
    }

    #[test]
    fn should_increment_existing_line_in_place() {
        let cart = Cart::new()
            .add_to_cart(&product(1, 1.0))
            .add_to_cart(&product(2, 1.0))
            .add_to_cart(&product(1, 1.0));

        assert_eq!(quantities(&cart), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn should_leave_original_cart_untouched() {
        let original = Cart::new().add_to_cart(&product(1, 1.0));

        let _added = original.add_to_cart(&product(1, 1.0));
        let _removed = original.remove_from_cart(ProductId::new(1));

        assert_eq!(quantities(&original), vec![(1, 1)]);
    }

    #[test]
    fn should_decrement_line_with_quantity_above_one() {
        let cart = Cart::new()
            .add_to_cart(&product(1, 1.0))
            .add_to_cart(&product(1, 1.0))
            .add_to_cart(&product(2, 1.0));

        let cart = cart.remove_from_cart(ProductId::new(1));

        assert_eq!(quantities(&cart), vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn should_drop_line_when_quantity_reaches_zero() {
        let cart = Cart::new()
            .add_to_cart(&product(1, 1.0))
            .add_to_cart(&product(2, 1.0))
            .add_to_cart(&product(3, 1.0));

        let cart = cart.remove_from_cart(ProductId::new(2));

        assert_eq!(quantities(&cart), vec![(1, 1), (3, 1)]);
        assert!(cart.get(ProductId::new(2)).is_none());
    }

    #[test]
    fn should_ignore_removal_of_absent_product() {
        let cart = Cart::new().add_to_cart(&product(1, 1.0));

        let after = cart.remove_from_cart(ProductId::new(99));

        assert_eq!(after, cart);
    }

    #[test]
    fn should_compute_line_total() {
        let cart = Cart::new()
            .add_to_cart(&product(1, 9.99))
            .add_to_cart(&product(1, 9.99));

        let line = cart.get(ProductId::new(1)).unwrap();

        assert_eq!(line.line_total().to_string(), "19.98");
    }

    #[test]
    fn should_walk_through_add_and_remove_scenario() {
        let a = product(1, 9.99);
        let b = product(2, 5.00);

        let cart = Cart::new().add_to_cart(&a);
        assert_eq!(quantities(&cart), vec![(1, 1)]);

        let cart = cart.add_to_cart(&a);
        assert_eq!(quantities(&cart), vec![(1, 2)]);
        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(
            cart.get(a.id).unwrap().line_total().to_string(),
            "19.98"
        );

        let cart = cart.add_to_cart(&b);
        assert_eq!(quantities(&cart), vec![(1, 2), (2, 1)]);
        assert_eq!(cart.total_price().to_string(), "24.98");

        let cart = cart.remove_from_cart(a.id);
        assert_eq!(quantities(&cart), vec![(1, 1), (2, 1)]);

        let cart = cart.remove_from_cart(a.id);
        assert_eq!(quantities(&cart), vec![(2, 1)]);

        let cart = cart.remove_from_cart(a.id);
        assert_eq!(quantities(&cart), vec![(2, 1)]);
    }

    fn arb_cart() -> impl Strategy<Value = Cart> {
        prop::collection::vec((0u64..8, 0u32..4), 0..20).prop_map(|ops| {
            ops.into_iter().fold(Cart::new(), |cart, (id, op)| {
                if op == 0 {
                    cart.remove_from_cart(ProductId::new(id))
                } else {
                    cart.add_to_cart(&product(id, 1.25))
                }
            })
        })
    }

    proptest! {
        #[test]
        fn add_then_remove_restores_quantities(cart in arb_cart(), id in 0u64..10) {
            let restored = cart.add_to_cart(&product(id, 1.25)).remove_from_cart(ProductId::new(id));

            let mut before = quantities(&cart);
            let mut after = quantities(&restored);
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn remove_of_absent_id_is_noop(cart in arb_cart(), id in 100u64..200) {
            prop_assert_eq!(cart.remove_from_cart(ProductId::new(id)), cart);
        }

        #[test]
        fn add_increments_only_target(cart in arb_cart(), id in 0u64..10) {
            let target = ProductId::new(id);
            let previous = cart.get(target).map_or(0, |item| item.quantity.get());

            let added = cart.add_to_cart(&product(id, 1.25));

            prop_assert_eq!(added.get(target).map(|item| item.quantity.get()), Some(previous + 1));
            prop_assert_eq!(added.items().iter().filter(|item| item.id() == target).count(), 1);
            for item in cart.items().iter().filter(|item| item.id() != target) {
                prop_assert_eq!(added.get(item.id()), Some(item));
            }
        }

        #[test]
        fn remove_at_quantity_one_drops_line(cart in arb_cart()) {
            for item in cart.items().iter().filter(|item| item.quantity.get() == 1) {
                prop_assert!(cart.remove_from_cart(item.id()).get(item.id()).is_none());
            }
        }

        #[test]
        fn remove_preserves_relative_order(cart in arb_cart(), id in 0u64..8) {
            let removed = cart.remove_from_cart(ProductId::new(id));

            let order: Vec<u64> = cart
                .items()
                .iter()
                .map(|item| item.id().value())
                .filter(|item_id| removed.get(ProductId::new(*item_id)).is_some())
                .collect();
            let remaining: Vec<u64> = removed.items().iter().map(|item| item.id().value()).collect();
            prop_assert_eq!(order, remaining);
        }

        #[test]
        fn total_item_count_is_sum_of_quantities(cart in arb_cart()) {
            let sum: u32 = quantities(&cart).iter().map(|(_, quantity)| quantity).sum();
            prop_assert_eq!(cart.total_item_count(), sum);
        }
    }
}
