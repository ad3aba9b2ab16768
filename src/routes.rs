//! Path-based view selection and the navigation seam.
//!
//! The engine itself never drives a router; it only needs "navigate to a path
//! with an optional state payload" and "read the current query parameters".
//! Both live behind the [`Navigator`] trait so the host shell (and tests)
//! decide what navigation actually means.

use std::collections::HashMap;

use crate::model::ProductId;

/// The views a path can select. Unknown paths resolve to `Home` rather than
/// erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Shop,
    ProductDetail(ProductId),
    Checkout,
    OrderConfirmation,
    Search { query: String },
}

impl Route {
    /// Renders the route as a path, query string included where one applies.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Shop => "/shop".to_string(),
            Route::ProductDetail(id) => format!("/product/{id}"),
            Route::Checkout => "/checkout".to_string(),
            Route::OrderConfirmation => "/order-confirmation".to_string(),
            Route::Search { query } => format!("/search?q={}", urlencoding::encode(query)),
        }
    }

    /// Parses a path (with optional query string) into a route.
    ///
    /// Anything unrecognized, including a product path with a malformed id,
    /// falls back to `Home`.
    pub fn parse(path_and_query: &str) -> Route {
        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (path, query),
            None => (path_and_query, ""),
        };

        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/shop" => Route::Shop,
            "/checkout" => Route::Checkout,
            "/order-confirmation" => Route::OrderConfirmation,
            "/search" => {
                let params = parse_query(query);
                Route::Search {
                    query: params.get("q").cloned().unwrap_or_default(),
                }
            }
            path => match path.strip_prefix("/product/") {
                Some(raw_id) => match raw_id.parse::<u64>() {
                    Ok(id) => Route::ProductDetail(ProductId(id)),
                    Err(_) => Route::Home,
                },
                None => Route::Home,
            },
        }
    }
}

/// Decodes a query string into a key/value map. Malformed pairs are skipped.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let key = urlencoding::decode(key).ok()?;
            let value = urlencoding::decode(value).ok()?;
            Some((key.into_owned(), value.into_owned()))
        })
        .collect()
}

/// The navigation surface the host shell provides.
pub trait Navigator: Send + Sync {
    /// Navigates to a route, optionally carrying a state payload (e.g. the
    /// placed order for the confirmation view).
    fn navigate(&self, route: Route, payload: Option<serde_json::Value>);

    /// Query parameters of the current location.
    fn current_query(&self) -> HashMap<String, String>;
}
