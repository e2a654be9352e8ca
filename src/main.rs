//! Port Logistics - Binary Entry Point
//!
//! Scripted walkthrough of the inventory workflows; exercises the
//! library end to end without any interactive input.

use port_logistics::{DateIndex, ExpiryDate, LogisticsEngine, LogisticsError};

fn main() -> Result<(), LogisticsError> {
    println!("===========================================");
    println!("  Port Logistics - Inventory Core");
    println!("===========================================");
    println!();

    let mut index = DateIndex::with_capacity(16);
    let mut engine = LogisticsEngine::new();

    // Receive three shipments with distinct expiry dates
    println!("Receiving shipments...");
    engine.receive(&mut index, ExpiryDate::new(20250601)?, "Bananas", 100)?;
    engine.receive(&mut index, ExpiryDate::new(20250515)?, "Mangoes", 50)?;
    engine.receive(&mut index, ExpiryDate::new(20250701)?, "Pineapples", 30)?;
    println!("  {} entries indexed, tree height {}", index.len(), index.height());
    println!();

    // Dispatch targets the soonest-to-expire batch
    println!("Placing dispatch orders...");
    let ticket = engine.place_order(&mut index, "Guapi", 20)?;
    println!(
        "  Ticket #{}: {} x{} -> {} (expiry {}, {} left)",
        ticket.id,
        ticket.product,
        ticket.quantity,
        ticket.destination,
        ticket.date,
        ticket.remaining_stock,
    );

    match engine.place_order(&mut index, "Tumaco", 60) {
        Ok(_) => println!("  Unexpected: oversized order accepted"),
        Err(e) => println!("  Rejected oversized order: {}", e),
    }
    println!();

    // Cancel the placed order; stock is restored exactly
    println!("Cancelling the Guapi order...");
    let restored = engine.cancel_order(&mut index, ExpiryDate::new(20250515)?, "Guapi", 20)?;
    println!("  Restored {} units", restored);
    println!();

    // Report: ascending by expiry date, soonest first
    println!("Inventory report:");
    let report = engine.report(&index)?;
    for line in &report.lines {
        println!(
            "  {} | {:<12} | stock {:>4} | pending orders {}",
            line.date, line.product, line.stock, line.pending_orders,
        );
    }
    println!();
    println!("  Fingerprint: {}", report.fingerprint_hex());

    Ok(())
}
