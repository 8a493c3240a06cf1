//! Dashboard module
//!
//! Provides the page with the transfers table, summary cards and charts, and
//! the search endpoint that refreshes them for a filtered set of transfers.

mod cards;
mod charts;
mod handlers;
mod search_form;
mod summary;
mod table;

pub use handlers::{get_dashboard_page, search_transactions};
pub use summary::RecipientLabel;
