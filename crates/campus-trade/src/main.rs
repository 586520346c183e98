//! # Campus Trade Demo
//!
//! Walks one trading session end to end:
//! 1. Registers a seller and a buyer.
//! 2. Lists a book and places an order for it.
//! 3. Applies the condition, status and email updates.
//! 4. Prints everything held, then removes the book.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! CAMPUS_TRADE_LOG_FORMAT=full RUST_LOG=debug cargo run
//! ```

use campus_trade::marketplace::Marketplace;
use campus_trade::model::{Book, Condition, Order, User};
use campus_trade::settings::Settings;
use catalog_framework::tracing::setup_tracing;
use tracing::{error, info, info_span};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    setup_tracing(settings.log_format.into());

    info!("Starting campus trade demo");

    let mut market = Marketplace::new();

    info_span!("users").in_scope(|| {
        let seller = User::seller("Anna", "S001", "anna@school.edu", "Anna's Book Shop");
        let buyer = User::buyer("Ben", "B001", "ben@school.edu", "Dorm 5, Room 102");

        info!(seller = ?seller.get_info(), "Seller info");
        info!(buyer = ?buyer.get_info(), "Buyer info");

        market.users.add(seller);
        market.users.add(buyer);
    });

    info_span!("listing").in_scope(|| {
        match Book::new(
            "BK001",
            "Python Basics",
            "John Smith",
            "S001",
            19.9,
            Condition::LikeNew,
        ) {
            Ok(book) => {
                market.books.add(book);
            }
            Err(e) => error!(error = %e, "Book rejected"),
        }

        match Order::new("OD001", "B001", "BK001", 19.9) {
            Ok(order) => {
                market.orders.add(order);
            }
            Err(e) => error!(error = %e, "Order rejected"),
        }
    });

    info_span!("updates").in_scope(|| {
        if let Some(book) = market.books.get_mut("BK001") {
            book.update_condition("sold");
        }
        if let Some(order) = market.orders.get_mut("OD001") {
            order.update_status("paid");
        }
        if let Some(buyer) = market.users.get_mut("B001") {
            buyer.change_email("ben_new@school.edu");
        }
    });

    let summary = market.summary();
    info!(users = ?summary.users, "All users");
    info!(books = ?summary.books, "All books");
    info!(orders = ?summary.orders, "All orders");

    info_span!("cleanup").in_scope(|| {
        market.books.remove("BK001");
    });

    info!(books = market.books.len(), "Demo completed");
    Ok(())
}
