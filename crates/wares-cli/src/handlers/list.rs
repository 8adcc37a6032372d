//! Handler for the `list` command.

use wares_client::PageQuery;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_separator, truncate_string};

/// Fetch one page of items and print it as a table.
pub async fn execute(
    ctx: &CliContext,
    page: usize,
    limit: usize,
    query: Option<String>,
) -> Result<(), CliError> {
    let mut page_query = PageQuery::new(page, limit);
    if let Some(term) = query {
        page_query = page_query.with_term(term);
    }

    let listing = ctx.gateway().fetch_page(&page_query).await?;

    if listing.items.is_empty() {
        match listing.search_query.as_deref() {
            Some(term) => println!("No items match '{term}'."),
            None => {
                println!("No items in the catalog yet.");
                println!("Use 'wares add' to create the first one.");
            }
        }
        return Ok(());
    }

    let meta = &listing.pagination;
    match listing.search_query.as_deref() {
        Some(term) => println!(
            "Found {} item(s) matching '{}' (page {} of {}):",
            meta.total, term, meta.page, meta.total_pages
        ),
        None => println!(
            "Found {} item(s) (page {} of {}):",
            meta.total, meta.page, meta.total_pages
        ),
    }
    println!();

    println!(
        "{:<5} {:<30} {:<18} {:>10}  {:<19}",
        "ID", "Name", "Category", "Price", "Added"
    );
    print_separator(86);

    for item in &listing.items {
        println!(
            "{:<5} {:<30} {:<18} {:>10.2}  {:<19}",
            item.id,
            truncate_string(&item.name, 29),
            truncate_string(&item.category, 17),
            item.price,
            item.created_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }

    if meta.has_next_page {
        println!();
        println!("More items available: try --page {}.", meta.page + 1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use wares_client::{CatalogGateway, ClientResult, CreatedItem, ItemPage, PageQuery, StatsSnapshot};
    use wares_core::{Item, ItemDraft, PageMeta};

    use crate::bootstrap::bootstrap_with;

    /// Gateway that always returns an empty page echoing the search term.
    struct EmptyGateway;

    #[async_trait]
    impl CatalogGateway for EmptyGateway {
        async fn fetch_page(&self, query: &PageQuery) -> ClientResult<ItemPage> {
            Ok(ItemPage {
                items: Vec::new(),
                pagination: PageMeta {
                    page: query.page,
                    limit: query.limit,
                    total: 0,
                    total_pages: 0,
                    has_next_page: false,
                    has_prev_page: false,
                },
                search_query: query.effective_term().map(str::to_string),
            })
        }

        async fn fetch_item(&self, _id: i64) -> ClientResult<Item> {
            unimplemented!("not used by list")
        }

        async fn create_item(&self, _draft: &ItemDraft) -> ClientResult<CreatedItem> {
            unimplemented!("not used by list")
        }

        async fn fetch_stats(&self) -> ClientResult<StatsSnapshot> {
            unimplemented!("not used by list")
        }

        async fn refresh_stats(&self) -> ClientResult<StatsSnapshot> {
            unimplemented!("not used by list")
        }
    }

    #[tokio::test]
    async fn test_empty_catalog_prints_without_error() {
        let ctx = bootstrap_with(Arc::new(EmptyGateway), "http://localhost:4001");
        super::execute(&ctx, 1, 10, None).await.unwrap();
        super::execute(&ctx, 1, 10, Some("widget".to_string()))
            .await
            .unwrap();
    }
}
