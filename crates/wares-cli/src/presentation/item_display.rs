//! Detail rendering for a single catalog item.

use wares_core::Item;

use super::tables::print_separator;

/// Print the full detail block for an item.
pub fn display_item_detail(item: &Item) {
    println!("{} (ID: {})", item.name, item.id);
    print_separator(48);
    println!("  Category: {}", item.category);
    println!("  Price:    {:.2}", item.price);
    if let Some(description) = &item.description {
        println!("  About:    {description}");
    }
    println!(
        "  Added:    {}",
        item.created_at.format("%Y-%m-%d %H:%M:%S")
    );
}
