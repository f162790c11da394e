//! Storefront session controller.
//!
//! Owns the catalog and every piece of interactive state: cart, filter
//! criteria, checkout flow, customizer form, and navigation. Hosts drive
//! it from a single thread and render whatever its accessors return;
//! display-side reactions (opening the cart drawer, showing the order
//! confirmation) arrive through the [`StorefrontEvents`] sink.

use crate::cart::{Cart, CartPricing, Variant};
use crate::catalog::{BulkQuote, Catalog, FilterCriteria, Product};
use crate::checkout::{CheckoutFlow, CheckoutStep};
use crate::customizer::{CustomizerForm, ImageCapture, CUSTOM_JERSEY_ID};
use crate::error::StoreError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Quantity added by the promotions page quick order.
const OFFER_ORDER_QUANTITY: u32 = 20;

/// Smallest quantity the bulk quote form accepts.
pub const BULK_QUANTITY_MIN: u32 = 20;
/// Largest quantity the bulk quote form accepts.
pub const BULK_QUANTITY_MAX: u32 = 2000;
/// Quantity the bulk quote form starts at.
const BULK_QUANTITY_DEFAULT: u32 = 100;

/// Pages the storefront can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Page {
    #[default]
    Home,
    Shop,
    Custom,
    Sports,
    Offers,
    Bulk,
    Charity,
    Help,
    /// Product detail view, reached through [`Storefront::open_product`].
    Product,
    Checkout,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Shop => "shop",
            Page::Custom => "custom",
            Page::Sports => "sports",
            Page::Offers => "offers",
            Page::Bulk => "bulk",
            Page::Charity => "charity",
            Page::Help => "help",
            Page::Product => "product",
            Page::Checkout => "checkout",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Shop => "Shop",
            Page::Custom => "Custom",
            Page::Sports => "Sports",
            Page::Offers => "Promotions",
            Page::Bulk => "Bulk Orders",
            Page::Charity => "Charity",
            Page::Help => "Help Center",
            Page::Product => "Product",
            Page::Checkout => "Checkout",
        }
    }
}

/// Display-side hooks the storefront raises as it mutates state.
///
/// The default implementations do nothing, so sinks only override what
/// they care about.
pub trait StorefrontEvents {
    /// An item was just added; the cart drawer should open.
    fn cart_opened(&mut self) {}

    /// An order was just placed.
    fn order_placed(&mut self) {}
}

/// No-op event sink.
impl StorefrontEvents for () {}

/// What the checkout page should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutView {
    /// The cart is empty and nothing was placed; prompt to add items.
    Blocked,
    /// The flow is at the given step.
    Step(CheckoutStep),
    /// The order confirmation.
    Placed,
}

/// A single shopper's storefront session.
#[derive(Debug)]
pub struct Storefront<E = ()> {
    catalog: Catalog,
    cart: Cart,
    /// Current listing filter, edited in place by the host.
    pub filter: FilterCriteria,
    checkout: CheckoutFlow,
    /// Customizer form state, edited in place by the host.
    pub customizer: CustomizerForm,
    page: Page,
    active_product: Option<ProductId>,
    bulk_quantity: u32,
    events: E,
}

impl Storefront {
    /// Create a session with no event sink.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_events(catalog, ())
    }
}

impl<E: StorefrontEvents> Storefront<E> {
    /// Create a session that raises display events on `events`.
    pub fn with_events(catalog: Catalog, events: E) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            filter: FilterCriteria::new(),
            checkout: CheckoutFlow::new(),
            customizer: CustomizerForm::default(),
            page: Page::Home,
            active_product: None,
            bulk_quantity: BULK_QUANTITY_DEFAULT,
            events,
        }
    }

    /// The catalog this session sells from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current page.
    pub fn page(&self) -> Page {
        self.page
    }

    /// The event sink.
    pub fn events(&self) -> &E {
        &self.events
    }

    // ---- navigation ----

    /// Navigate to a page.
    ///
    /// Any destination other than checkout abandons the in-progress
    /// checkout flow and closes the product detail view. Entering
    /// checkout (the cart drawer's "Checkout" action) keeps the flow
    /// where it is, so the confirmation survives until the shopper
    /// navigates away.
    pub fn goto(&mut self, page: Page) {
        if page != Page::Checkout {
            self.checkout.reset();
            self.active_product = None;
        }
        self.page = page;
        debug!(page = page.as_str(), "navigated");
    }

    /// Open the product detail view.
    pub fn open_product(&mut self, id: impl Into<ProductId>) -> Result<(), StoreError> {
        let id = id.into();
        if self.catalog.find(&id).is_none() {
            return Err(StoreError::UnknownProduct(id.to_string()));
        }
        debug!(product = %id, "opened product detail");
        self.active_product = Some(id);
        self.page = Page::Product;
        Ok(())
    }

    /// The product shown by the detail view, if one is open.
    pub fn active_product(&self) -> Option<&Product> {
        self.active_product
            .as_ref()
            .and_then(|id| self.catalog.find(id))
    }

    /// Products matching the current filter, in catalog order.
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.catalog)
    }

    // ---- cart ----

    /// Add a product to the cart and open the cart drawer.
    pub fn add_to_cart(
        &mut self,
        product_id: impl Into<ProductId>,
        quantity: u32,
        variant: Variant,
    ) -> Result<usize, StoreError> {
        let product_id = product_id.into();
        let index = self
            .cart
            .add(&self.catalog, product_id.clone(), quantity, variant)?;
        info!(product = %product_id, quantity, "added to cart");
        self.events.cart_opened();
        Ok(index)
    }

    /// Remove a cart line. Reports whether anything was removed.
    pub fn remove_line(&mut self, index: usize) -> bool {
        self.cart.remove(index)
    }

    /// Change a cart line's quantity (clamped to at least 1).
    pub fn set_line_quantity(&mut self, index: usize, quantity: u32) -> bool {
        self.cart.set_quantity(index, quantity)
    }

    /// The cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total item count for the cart badge.
    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    /// Pricing breakdown for the cart drawer and order summary.
    pub fn cart_pricing(&self) -> CartPricing {
        self.cart.pricing(&self.catalog)
    }

    // ---- promotions and bulk quotes ----

    /// The promotions page quick order: 20 custom jerseys, no
    /// customization, merged like any other add.
    pub fn start_offer_order(&mut self) -> Result<usize, StoreError> {
        self.add_to_cart(CUSTOM_JERSEY_ID, OFFER_ORDER_QUANTITY, Variant::none())
    }

    /// The bulk quote form quantity.
    pub fn bulk_quantity(&self) -> u32 {
        self.bulk_quantity
    }

    /// Set the bulk quote quantity, clamped to the form's range.
    pub fn set_bulk_quantity(&mut self, quantity: u32) {
        self.bulk_quantity = quantity.clamp(BULK_QUANTITY_MIN, BULK_QUANTITY_MAX);
    }

    /// Quote for the current bulk quantity.
    pub fn bulk_quote(&self) -> BulkQuote {
        BulkQuote::for_quantity(self.bulk_quantity)
    }

    // ---- customizer ----

    /// Capture a logo for the customizer through the host capability.
    ///
    /// A capability that produces nothing clears any previous logo.
    pub fn upload_logo(&mut self, capture: &mut dyn ImageCapture, file: &Path) {
        self.customizer.logo = capture.capture(file);
    }

    /// Add the current customizer selections to the cart.
    ///
    /// Always one unit of the custom team jersey. The form keeps its
    /// state afterwards so the shopper can iterate on the design.
    pub fn commit_customizer(&mut self) -> Result<usize, StoreError> {
        let variant = self.customizer.variant();
        self.add_to_cart(CUSTOM_JERSEY_ID, 1, variant)
    }

    // ---- checkout ----

    /// The checkout flow state.
    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    /// Mutable access to the checkout flow for form edits and advancing.
    pub fn checkout_mut(&mut self) -> &mut CheckoutFlow {
        &mut self.checkout
    }

    /// What the checkout page should show right now.
    pub fn checkout_view(&self) -> CheckoutView {
        if self.checkout.is_placed() {
            CheckoutView::Placed
        } else if self.cart.is_empty() {
            CheckoutView::Blocked
        } else {
            CheckoutView::Step(self.checkout.step())
        }
    }

    /// Place the order: the flow becomes terminal and the cart empties in
    /// the same call.
    pub fn place_order(&mut self) -> Result<(), StoreError> {
        self.checkout.place()?;
        self.cart.clear();
        info!("order placed");
        self.events.order_placed();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_on_home() {
        let store = Storefront::new(Catalog::demo());
        assert_eq!(store.page(), Page::Home);
        assert!(store.cart().is_empty());
        assert_eq!(store.bulk_quantity(), 100);
    }

    #[test]
    fn test_open_product() {
        let mut store = Storefront::new(Catalog::demo());
        store.open_product("dr-4001").unwrap();
        assert_eq!(store.page(), Page::Product);
        assert_eq!(store.active_product().unwrap().id.as_str(), "dr-4001");

        let err = store.open_product("zz-9999").unwrap_err();
        assert!(matches!(err, StoreError::UnknownProduct(_)));
    }

    #[test]
    fn test_navigation_closes_detail_view() {
        let mut store = Storefront::new(Catalog::demo());
        store.open_product("dr-4001").unwrap();
        store.goto(Page::Shop);
        assert!(store.active_product().is_none());
    }

    #[test]
    fn test_bulk_quantity_clamps_to_range() {
        let mut store = Storefront::new(Catalog::demo());
        store.set_bulk_quantity(5);
        assert_eq!(store.bulk_quantity(), BULK_QUANTITY_MIN);
        store.set_bulk_quantity(1_000_000);
        assert_eq!(store.bulk_quantity(), BULK_QUANTITY_MAX);
        store.set_bulk_quantity(500);
        assert_eq!(store.bulk_quote().quantity, 500);
    }
}
