//! End-to-end storefront session tests: browsing, cart, customizer,
//! bulk quotes, and the checkout lifecycle driven through [`Storefront`].

use fwh_commerce::prelude::*;
use std::path::Path;

/// Event sink that counts what the storefront raised.
#[derive(Debug, Default)]
struct RecordingEvents {
    cart_opens: u32,
    orders_placed: u32,
}

impl StorefrontEvents for RecordingEvents {
    fn cart_opened(&mut self) {
        self.cart_opens += 1;
    }

    fn order_placed(&mut self) {
        self.orders_placed += 1;
    }
}

/// Capture stub that accepts any file.
struct FileCapture;

impl ImageCapture for FileCapture {
    fn capture(&mut self, file: &Path) -> Option<ImageRef> {
        file.to_str().map(ImageRef::new)
    }
}

/// Capture stub that never produces an image.
struct NoCapture;

impl ImageCapture for NoCapture {
    fn capture(&mut self, _file: &Path) -> Option<ImageRef> {
        None
    }
}

#[test]
fn test_full_shopping_journey() {
    let mut store = Storefront::new(Catalog::demo());

    store.filter = FilterCriteria::new().with_query("saree");
    let hits = store.filtered_products();
    assert_eq!(hits.len(), 1);
    let id = hits[0].id.clone();

    store.open_product(id.clone()).unwrap();
    assert_eq!(store.page(), Page::Product);
    assert_eq!(store.active_product().unwrap().id, id);

    store.add_to_cart(id, 1, Variant::none()).unwrap();
    assert_eq!(store.cart_count(), 1);

    store.goto(Page::Checkout);
    assert_eq!(store.checkout_view(), CheckoutView::Step(CheckoutStep::Customer));

    store.checkout_mut().customer.email = "amina@example.com".to_string();
    store.checkout_mut().advance().unwrap();
    store.checkout_mut().advance().unwrap();
    assert_eq!(store.checkout_view(), CheckoutView::Step(CheckoutStep::Review));

    store.place_order().unwrap();
    assert!(store.cart().is_empty());
    assert_eq!(store.checkout_view(), CheckoutView::Placed);

    // Re-entering checkout keeps the confirmation on screen.
    store.goto(Page::Checkout);
    assert_eq!(store.checkout_view(), CheckoutView::Placed);

    // Browsing away discards it; checkout is then blocked on the empty cart.
    store.goto(Page::Home);
    store.goto(Page::Checkout);
    assert_eq!(store.checkout_view(), CheckoutView::Blocked);
}

#[test]
fn test_checkout_blocked_until_cart_has_items() {
    let mut store = Storefront::new(Catalog::demo());
    store.goto(Page::Checkout);
    assert_eq!(store.checkout_view(), CheckoutView::Blocked);

    store.add_to_cart("pn-3001", 1, Variant::none()).unwrap();
    assert_eq!(store.checkout_view(), CheckoutView::Step(CheckoutStep::Customer));
}

#[test]
fn test_place_order_requires_review_step() {
    let mut store = Storefront::new(Catalog::demo());
    store.add_to_cart("pn-3001", 2, Variant::none()).unwrap();
    store.goto(Page::Checkout);

    let err = store.place_order().unwrap_err();
    assert!(matches!(err, StoreError::InvalidCheckoutTransition { .. }));

    // The failed placement changed nothing.
    assert_eq!(store.cart_count(), 2);
    assert_eq!(store.checkout_view(), CheckoutView::Step(CheckoutStep::Customer));
}

#[test]
fn test_leaving_checkout_abandons_the_flow() {
    let mut store = Storefront::new(Catalog::demo());
    store.add_to_cart("dr-4001", 1, Variant::none()).unwrap();
    store.goto(Page::Checkout);
    store.checkout_mut().customer.email = "amina@example.com".to_string();
    store.checkout_mut().advance().unwrap();

    store.goto(Page::Shop);
    store.goto(Page::Checkout);

    assert_eq!(store.checkout_view(), CheckoutView::Step(CheckoutStep::Customer));
    assert!(store.checkout().customer.email.is_empty());
}

#[test]
fn test_filter_survives_navigation() {
    let mut store = Storefront::new(Catalog::demo());
    store.filter = FilterCriteria::new().with_category(Category::Sports);
    store.goto(Page::Shop);
    store.goto(Page::Home);

    let hits = store.filtered_products();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|p| p.category == Category::Sports));
}

#[test]
fn test_offer_order_merges_with_existing_line() {
    let mut store = Storefront::new(Catalog::demo());
    store
        .add_to_cart(CUSTOM_JERSEY_ID, 1, Variant::none())
        .unwrap();

    let index = store.start_offer_order().unwrap();
    assert_eq!(index, 0);
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart().line(0).unwrap().quantity, 21);
}

#[test]
fn test_customizer_commits_merge_until_the_form_changes() {
    let mut store = Storefront::new(Catalog::demo());
    store.customizer.name = "ROSSI".to_string();
    store.customizer.number = "10".to_string();

    let first = store.commit_customizer().unwrap();
    let second = store.commit_customizer().unwrap();
    assert_eq!(first, second);
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart().line(first).unwrap().quantity, 2);

    store.customizer.color = GarmentColor::Black;
    let third = store.commit_customizer().unwrap();
    assert_ne!(third, first);
    assert_eq!(store.cart().len(), 2);
    assert_eq!(store.cart().line(third).unwrap().quantity, 1);
}

#[test]
fn test_logo_stays_on_the_form() {
    let mut store = Storefront::new(Catalog::demo());
    store.upload_logo(&mut FileCapture, Path::new("logos/team.png"));
    assert_eq!(
        store.customizer.logo.as_ref().map(ImageRef::as_str),
        Some("logos/team.png")
    );

    let index = store.commit_customizer().unwrap();
    let line = store.cart().line(index).unwrap();
    assert!(line.variant.get("logo").is_none());
    assert_eq!(line.variant.iter().count(), 5);

    // A capture that produces nothing clears the previous logo.
    store.upload_logo(&mut NoCapture, Path::new("logos/team.png"));
    assert!(store.customizer.logo.is_none());
}

#[test]
fn test_bulk_quote_follows_the_slider() {
    let mut store = Storefront::new(Catalog::demo());
    store.set_bulk_quantity(150);
    let quote = store.bulk_quote();
    assert_eq!(quote.unit_price, Money::new(389));
    assert_eq!(quote.total, Money::new(38_900));

    store.set_bulk_quantity(1);
    assert_eq!(store.bulk_quantity(), BULK_QUANTITY_MIN);
    store.set_bulk_quantity(9_999);
    assert_eq!(store.bulk_quantity(), BULK_QUANTITY_MAX);
}

#[test]
fn test_unknown_product_leaves_cart_untouched() {
    let mut store = Storefront::new(Catalog::demo());
    store.add_to_cart("sr-1001", 1, Variant::none()).unwrap();

    let err = store.add_to_cart("zz-9999", 1, Variant::none()).unwrap_err();
    assert!(matches!(err, StoreError::UnknownProduct(id) if id == "zz-9999"));
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart_count(), 1);
}

#[test]
fn test_events_fire_once_per_action() {
    let mut store = Storefront::with_events(Catalog::demo(), RecordingEvents::default());

    store.add_to_cart("sr-1001", 1, Variant::none()).unwrap();
    store.add_to_cart("pn-3001", 2, Variant::none()).unwrap();
    assert_eq!(store.events().cart_opens, 2);

    // Failed adds raise nothing.
    assert!(store.add_to_cart("zz-9999", 1, Variant::none()).is_err());
    assert_eq!(store.events().cart_opens, 2);

    // Offer orders and customizer commits go through the same path.
    store.start_offer_order().unwrap();
    assert_eq!(store.events().cart_opens, 3);
    store.commit_customizer().unwrap();
    assert_eq!(store.events().cart_opens, 4);

    // Failed placements raise nothing either.
    store.goto(Page::Checkout);
    assert!(store.place_order().is_err());
    assert_eq!(store.events().orders_placed, 0);

    store.checkout_mut().advance().unwrap();
    store.checkout_mut().advance().unwrap();
    store.place_order().unwrap();
    assert_eq!(store.events().orders_placed, 1);
}

#[test]
fn test_cart_pricing_through_the_session() {
    let mut store = Storefront::new(Catalog::demo());
    store.add_to_cart("ts-2001", 3, Variant::none()).unwrap();
    store.add_to_cart("sr-1001", 1, Variant::none()).unwrap();

    let pricing = store.cart_pricing();
    assert_eq!(pricing.subtotal, Money::new(14_100));
    assert_eq!(pricing.grand_total, Money::new(14_100));
    assert_eq!(pricing.grand_total.display(), "$141.00");
}
