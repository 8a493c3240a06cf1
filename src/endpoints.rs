//! The API endpoints URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The page with the transfers table, summary cards and charts.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route that returns the dashboard results for a search.
pub const SEARCH_TRANSACTIONS: &str = "/api/transactions/search";
/// The route that reloads the data file.
pub const RELOAD_DATA: &str = "/api/data/reload";
