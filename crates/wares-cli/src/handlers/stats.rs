//! Handler for the `stats` command.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print catalog statistics with their cache provenance.
pub async fn execute(ctx: &CliContext, refresh: bool) -> Result<(), CliError> {
    let stats = if refresh {
        ctx.gateway().refresh_stats().await?
    } else {
        ctx.gateway().fetch_stats().await?
    };

    if let Some(message) = &stats.message {
        println!("{message}");
        println!();
    }

    println!("Catalog statistics:");
    println!("  Items:         {}", stats.total);
    println!("  Average price: {:.2}", stats.average_price);
    if stats.cached {
        println!(
            "  Source:        cache ({}s old)",
            stats.cache_age.unwrap_or(0)
        );
    } else {
        println!("  Source:        freshly computed");
    }

    Ok(())
}
