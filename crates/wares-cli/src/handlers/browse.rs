//! Handler for the `browse` command.
//!
//! A line-driven browser over the catalog: a fixed-height window onto the
//! current page, incremental loading when scrolling past the end, and
//! debounced search. Failed fetches stay on screen with a reload hint
//! instead of aborting the session.

use std::sync::Arc;

use wares_client::{DEBOUNCE_DELAY, ItemFeed, Viewport};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::truncate_string;
use crate::utils::input;

/// Run the interactive browser until the user quits.
pub async fn execute(ctx: &CliContext, height: usize, limit: usize) -> Result<(), CliError> {
    let mut feed = ItemFeed::with_page_size(Arc::clone(ctx.gateway()), limit);
    let mut viewport = Viewport::new(height);

    feed.refresh().await;

    loop {
        render(&feed, &viewport);

        let line =
            input::prompt_string("[j]down [k]up [n]ext page [/term] search [c]lear [r]eload [q]uit")?;
        match line.as_str() {
            "q" => break,
            "j" => {
                let len = feed.items().len();
                let at_bottom = !viewport.scroll_down(len);
                if at_bottom && feed.has_more() && !feed.is_loading() && feed.load_more().await {
                    viewport.reset();
                }
            }
            "k" => {
                viewport.scroll_up();
            }
            "n" => {
                if feed.load_more().await {
                    viewport.reset();
                }
            }
            "r" => {
                feed.refresh().await;
            }
            "c" => {
                apply_search(&mut feed, String::new()).await;
                viewport.reset();
            }
            "" => {} // just redraw
            term if term.starts_with('/') => {
                apply_search(&mut feed, term.trim_start_matches('/').to_string()).await;
                viewport.reset();
            }
            other => println!("Unknown command: '{other}'"),
        }
    }

    Ok(())
}

/// Submit a search term and wait out the debounce before applying it.
async fn apply_search(feed: &mut ItemFeed, term: String) {
    feed.set_search(term);
    tokio::time::sleep(DEBOUNCE_DELAY).await;
    feed.tick().await;
}

fn render(feed: &ItemFeed, viewport: &Viewport) {
    println!();
    let term = feed.search_term();
    if term.is_empty() {
        println!("Items ({} total, page {}):", feed.total(), feed.page());
    } else {
        println!(
            "Items matching '{}' ({} total, page {}):",
            term,
            feed.total(),
            feed.page()
        );
    }

    if let Some(error) = feed.last_error() {
        println!("  !! Last fetch failed: {error} ('r' reloads)");
    }

    if feed.items().is_empty() {
        println!("  (no items)");
        return;
    }

    let range = viewport.visible_range(feed.items().len());
    let first = range.start + 1;
    let last = range.end;
    for item in &feed.items()[range] {
        println!(
            "  {:>5}  {:<32} {:<18} {:>10.2}",
            item.id,
            truncate_string(&item.name, 31),
            truncate_string(&item.category, 17),
            item.price,
        );
    }

    let page_len = feed.items().len();
    if feed.has_more() {
        println!("  rows {first}-{last} of {page_len} loaded; 'n' fetches more");
    } else {
        println!("  rows {first}-{last} of {page_len}; end of results");
    }
}
