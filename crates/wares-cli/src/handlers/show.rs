//! Handler for the `show` command.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_item_detail;
use crate::utils::input;

/// Fetch one item and print its details.
///
/// A transient failure offers an interactive retry; a missing item is
/// reported once and exits non-zero. The two outcomes are deliberately
/// rendered differently.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<(), CliError> {
    loop {
        match ctx.gateway().fetch_item(id).await {
            Ok(item) => {
                display_item_detail(&item);
                return Ok(());
            }
            Err(err) if err.is_retryable() => {
                eprintln!("Failed to load item {id}: {err}");
                if input::prompt_confirmation("Retry")? {
                    continue;
                }
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use wares_client::{
        CatalogGateway, ClientError, ClientResult, CreatedItem, ItemPage, PageQuery, StatsSnapshot,
    };
    use wares_core::{Item, ItemDraft};

    use crate::bootstrap::bootstrap_with;

    /// Gateway whose items are all missing.
    struct MissingGateway;

    #[async_trait]
    impl CatalogGateway for MissingGateway {
        async fn fetch_page(&self, _query: &PageQuery) -> ClientResult<ItemPage> {
            unimplemented!("not used by show")
        }

        async fn fetch_item(&self, _id: i64) -> ClientResult<Item> {
            Err(ClientError::NotFound)
        }

        async fn create_item(&self, _draft: &ItemDraft) -> ClientResult<CreatedItem> {
            unimplemented!("not used by show")
        }

        async fn fetch_stats(&self) -> ClientResult<StatsSnapshot> {
            unimplemented!("not used by show")
        }

        async fn refresh_stats(&self) -> ClientResult<StatsSnapshot> {
            unimplemented!("not used by show")
        }
    }

    #[tokio::test]
    async fn test_missing_item_fails_without_retry_prompt() {
        let ctx = bootstrap_with(Arc::new(MissingGateway), "http://localhost:4001");
        let err = super::execute(&ctx, 42).await.unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Item not found");
    }
}
