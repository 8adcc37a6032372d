//! Handler for the `add` command.

use wares_core::ItemDraft;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_item_detail;
use crate::utils::input;

/// Create an item, prompting for any fields not given as flags.
pub async fn execute(
    ctx: &CliContext,
    name: Option<String>,
    category: Option<String>,
    price: Option<f64>,
) -> Result<(), CliError> {
    let name = match name {
        Some(value) => value,
        None => input::prompt_string("Item name")?,
    };
    let category = match category {
        Some(value) => value,
        None => input::prompt_string("Category")?,
    };
    let price = match price {
        Some(value) => value,
        None => input::prompt_float("Price")?,
    };

    let draft = ItemDraft {
        name,
        category,
        price,
    };

    // Validate locally before sending; the API only answers with a
    // generic 400, while the domain error names the offending field.
    if let Err(err) = draft.clone().validate() {
        return Err(CliError::Arguments(err.to_string()));
    }

    let created = ctx.gateway().create_item(&draft).await?;

    println!();
    println!("{}", created.message);
    println!();
    display_item_detail(&created.item);

    Ok(())
}
