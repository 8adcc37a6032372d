//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the stable HTTP API contract with explicit
//! serialization control. They decouple internal domain types from the
//! external API representation and carry the request-side validation
//! rules of the listing endpoint.

pub mod items;
pub mod stats;
pub mod system;

pub use items::{BrowseQuery, ItemCreatedDto, ItemsPageDto, ListItemsQuery};
pub use stats::{StatsDto, StatsRefreshDto};
pub use system::HealthDto;
