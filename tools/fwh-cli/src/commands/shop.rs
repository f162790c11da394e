//! Interactive shopping session.

use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use fwh_commerce::prelude::*;

use super::ShopArgs;
use crate::context::Context;
use crate::output::{price_cell, Output};

/// Event sink that narrates storefront reactions.
struct SessionEvents {
    output: Output,
}

impl StorefrontEvents for SessionEvents {
    fn cart_opened(&mut self) {
        self.output.debug("Cart drawer opened");
    }

    fn order_placed(&mut self) {
        self.output
            .success("Order placed. Thank you for shopping with heart!");
    }
}

/// Logo capture backed by the local filesystem.
struct FileCapture;

impl ImageCapture for FileCapture {
    fn capture(&mut self, file: &Path) -> Option<ImageRef> {
        if file.is_file() {
            Some(ImageRef::new(file.to_string_lossy()))
        } else {
            None
        }
    }
}

type Session = Storefront<SessionEvents>;

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The interactive shop does not support --json");
    }

    let catalog = match args.catalog.as_deref() {
        Some(path) => ctx.load_catalog_at(path)?,
        None => ctx.load_catalog()?,
    };
    let mut store = Storefront::with_events(
        catalog,
        SessionEvents {
            output: ctx.output.clone(),
        },
    );

    ctx.output
        .header(&format!("Welcome to {}", ctx.config.store.name));
    for product in store.catalog().featured() {
        ctx.output
            .list_item(&format!("{} ({})", product.title, product.price.display()));
    }

    loop {
        println!();
        let choices = [
            "Browse the shop",
            "Search products",
            "View a product",
            "Customize a jersey",
            "Promotions",
            "Bulk quote",
            "View cart",
            "Checkout",
            "Leave the store",
        ];
        let selection = Select::new()
            .with_prompt(format!("Where to? ({} items in cart)", store.cart_count()))
            .items(&choices)
            .default(0)
            .interact()?;

        match selection {
            0 => browse(&mut store, ctx)?,
            1 => search(&mut store, ctx)?,
            2 => view_product(&mut store, ctx)?,
            3 => customize(&mut store, ctx)?,
            4 => promotions(&mut store, ctx)?,
            5 => bulk_quote(&mut store, ctx)?,
            6 => view_cart(&mut store, ctx)?,
            7 => checkout(&mut store, ctx)?,
            _ => break,
        }
    }

    ctx.output.info("Come back soon!");
    Ok(())
}

fn browse(store: &mut Session, ctx: &Context) -> Result<()> {
    let categories = ["All", "Men", "Women", "Sports", "Custom"];
    let selection = Select::new()
        .with_prompt("Category")
        .items(&categories)
        .default(0)
        .interact()?;

    store.goto(Page::Shop);
    store.filter = match Category::from_str(categories[selection]) {
        Some(category) => FilterCriteria::new().with_category(category),
        None => FilterCriteria::new(),
    };

    print_listing(store, ctx);
    Ok(())
}

fn search(store: &mut Session, ctx: &Context) -> Result<()> {
    let query: String = Input::new()
        .with_prompt("Search")
        .allow_empty(true)
        .interact_text()?;

    store.goto(Page::Shop);
    store.filter = FilterCriteria::new().with_query(query);

    print_listing(store, ctx);
    Ok(())
}

fn view_product(store: &mut Session, ctx: &Context) -> Result<()> {
    let id: String = Input::new().with_prompt("Product ID").interact_text()?;

    if let Err(e) = store.open_product(id.as_str()) {
        ctx.output.warn(&e.to_string());
        return Ok(());
    }

    let (product_id, title, price, rating, customizable) = match store.active_product() {
        Some(product) => (
            product.id.clone(),
            product.title.clone(),
            product.price,
            product.rating,
            product.customizable,
        ),
        None => return Ok(()),
    };

    ctx.output.header(&title);
    ctx.output.kv("Price", &price_cell(&price));
    ctx.output.kv("Rating", &format!("{:.1} / 5", rating));
    if customizable {
        ctx.output
            .info("This item can be customized from the main menu.");
    }

    if Confirm::new()
        .with_prompt("Add to cart?")
        .default(true)
        .interact()?
    {
        let quantity: u32 = Input::new()
            .with_prompt("Quantity")
            .default(1)
            .interact_text()?;
        let result = store.add_to_cart(product_id, quantity, Variant::none());
        report_add(result, store, ctx);
    }

    Ok(())
}

fn customize(store: &mut Session, ctx: &Context) -> Result<()> {
    store.goto(Page::Custom);
    ctx.output.header("Customizer");

    let garments = [
        BaseGarment::TeamJersey,
        BaseGarment::PoloShirt,
        BaseGarment::TShirt,
        BaseGarment::Dress,
    ];
    let labels: Vec<&str> = garments.iter().map(|g| g.display_name()).collect();
    let selection = Select::new()
        .with_prompt("Garment")
        .items(&labels)
        .default(0)
        .interact()?;
    store.customizer.garment = garments[selection];

    let colors = [
        GarmentColor::Crimson,
        GarmentColor::RoyalBlue,
        GarmentColor::Emerald,
        GarmentColor::Black,
        GarmentColor::White,
    ];
    let labels: Vec<&str> = colors.iter().map(|c| c.display_name()).collect();
    let selection = Select::new()
        .with_prompt("Color")
        .items(&labels)
        .default(0)
        .interact()?;
    store.customizer.color = colors[selection];

    let sizes = [
        GarmentSize::Xs,
        GarmentSize::S,
        GarmentSize::M,
        GarmentSize::L,
        GarmentSize::Xl,
        GarmentSize::Xxl,
    ];
    let labels: Vec<&str> = sizes.iter().map(|s| s.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Size")
        .items(&labels)
        .default(2)
        .interact()?;
    store.customizer.size = sizes[selection];

    store.customizer.name = Input::new()
        .with_prompt("Name to print (optional)")
        .allow_empty(true)
        .interact_text()?;
    store.customizer.number = Input::new()
        .with_prompt("Number to print (optional)")
        .allow_empty(true)
        .interact_text()?;

    let logo: String = Input::new()
        .with_prompt("Logo file (optional)")
        .allow_empty(true)
        .interact_text()?;
    if !logo.is_empty() {
        store.upload_logo(&mut FileCapture, Path::new(&logo));
        if store.customizer.logo.is_some() {
            ctx.output.info("Logo attached.");
        } else {
            ctx.output
                .warn("No usable image there; continuing without a logo.");
        }
    }

    ctx.output
        .info(&format!("Your design: {}", store.customizer.variant().summary()));

    if Confirm::new()
        .with_prompt("Add to cart?")
        .default(true)
        .interact()?
    {
        let result = store.commit_customizer();
        report_add(result, store, ctx);
    }

    Ok(())
}

fn promotions(store: &mut Session, ctx: &Context) -> Result<()> {
    store.goto(Page::Offers);
    ctx.output.header("Promotions");

    for deal in store.catalog().deals() {
        ctx.output.list_item(&format!(
            "{} for {} ({})",
            deal.label,
            deal.price.display(),
            deal.note
        ));
    }

    if Confirm::new()
        .with_prompt("Start a 20 jersey team order?")
        .default(false)
        .interact()?
    {
        let result = store.start_offer_order();
        report_add(result, store, ctx);
    }

    Ok(())
}

fn bulk_quote(store: &mut Session, ctx: &Context) -> Result<()> {
    store.goto(Page::Bulk);

    let quantity: u32 = Input::new()
        .with_prompt(format!(
            "How many shirts? ({}-{})",
            BULK_QUANTITY_MIN, BULK_QUANTITY_MAX
        ))
        .default(store.bulk_quantity())
        .interact_text()?;

    store.set_bulk_quantity(quantity);
    let quote = store.bulk_quote();

    if quote.quantity != quantity {
        ctx.output
            .warn(&format!("Quantity adjusted to {}.", quote.quantity));
    }

    ctx.output.kv("Quantity", &quote.quantity.to_string());
    ctx.output.kv("Unit price", &price_cell(&quote.unit_price));
    ctx.output.kv("Order total", &price_cell(&quote.total));

    Ok(())
}

fn view_cart(store: &mut Session, ctx: &Context) -> Result<()> {
    ctx.output.header("Your cart");

    if store.cart().is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    print_cart(store, ctx);

    let actions = ["Change a quantity", "Remove a line", "Back"];
    let selection = Select::new()
        .with_prompt("Cart actions")
        .items(&actions)
        .default(2)
        .interact()?;

    match selection {
        0 => {
            let line: usize = Input::new().with_prompt("Line number").interact_text()?;
            let quantity: u32 = Input::new().with_prompt("New quantity").interact_text()?;
            if line == 0 || !store.set_line_quantity(line - 1, quantity) {
                ctx.output.warn("No such line.");
            }
        }
        1 => {
            let line: usize = Input::new().with_prompt("Line number").interact_text()?;
            if line == 0 || !store.remove_line(line - 1) {
                ctx.output.warn("No such line.");
            }
        }
        _ => {}
    }

    Ok(())
}

fn checkout(store: &mut Session, ctx: &Context) -> Result<()> {
    store.goto(Page::Checkout);
    ctx.output.header("Checkout");

    loop {
        match store.checkout_view() {
            CheckoutView::Blocked => {
                ctx.output.warn("Your cart is empty. Add something first.");
                break;
            }
            CheckoutView::Placed => {
                ctx.output.success("Order confirmed. You are all set!");
                break;
            }
            CheckoutView::Step(CheckoutStep::Customer) => {
                ctx.output.step(1, 3, "Customer details");
                let flow = store.checkout_mut();
                flow.customer.email = prompt("Email")?;
                flow.customer.name = prompt("Full name")?;
                flow.customer.phone = prompt("Phone")?;
                flow.customer.address = prompt("Address")?;
                flow.customer.city = prompt("City")?;
                flow.customer.state = prompt("State")?;
                flow.customer.zip = prompt("ZIP")?;
                flow.advance()?;
            }
            CheckoutView::Step(CheckoutStep::Payment) => {
                // Nothing is charged or verified; this is a walkthrough.
                ctx.output.step(2, 3, "Payment details");
                let flow = store.checkout_mut();
                flow.payment.card_number = prompt("Card number")?;
                flow.payment.expiry = prompt("Expiry")?;
                flow.payment.cvc = prompt("CVC")?;
                flow.advance()?;
            }
            CheckoutView::Step(CheckoutStep::Review) => {
                ctx.output.step(3, 3, "Review");
                print_cart(store, ctx);
                let ship_to = store.checkout().customer.one_line();
                if !ship_to.is_empty() {
                    ctx.output.kv("Ship to", &ship_to);
                }

                if Confirm::new()
                    .with_prompt("Place the order?")
                    .default(true)
                    .interact()?
                {
                    store.place_order()?;
                } else {
                    ctx.output.warn("Order not placed. Your cart is untouched.");
                }
                break;
            }
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}

fn print_listing(store: &Session, ctx: &Context) {
    let products = store.filtered_products();
    if products.is_empty() {
        ctx.output.info("No products match.");
        return;
    }
    for product in products {
        ctx.output.list_item(&format!(
            "{}  {} ({})",
            product.id.as_str(),
            product.title,
            product.price.display()
        ));
    }
}

fn print_cart(store: &Session, ctx: &Context) {
    for (index, line) in store.cart().lines().iter().enumerate() {
        let title = store
            .catalog()
            .find(&line.product_id)
            .map(|p| p.title.as_str())
            .unwrap_or("(unavailable)");
        ctx.output
            .list_item(&format!("{}. {} x{}", index + 1, title, line.quantity));
        if !line.variant.is_empty() {
            ctx.output.info(&format!("     {}", line.variant.summary()));
        }
    }

    let pricing = store.cart_pricing();
    let shipping = if pricing.shipping_total.is_zero() {
        "Free".to_string()
    } else {
        pricing.shipping_total.display()
    };
    ctx.output.kv("Subtotal", &price_cell(&pricing.subtotal));
    ctx.output.kv("Shipping", &shipping);
    ctx.output.kv("Total", &price_cell(&pricing.grand_total));
}

fn report_add(result: Result<usize, StoreError>, store: &Session, ctx: &Context) {
    match result {
        Ok(_) => ctx.output.success(&format!(
            "Added. Cart now holds {} item(s).",
            store.cart_count()
        )),
        Err(e) => ctx.output.warn(&e.to_string()),
    }
}
