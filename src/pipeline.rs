//! The derivation pipeline: from the full catalog to the exact page to render.
//!
//! Pure functions only. The pipeline reads the catalog and filter slices and
//! never mutates either, so deriving a page is free of side effects and
//! identical inputs always produce identical pages.
//!
//! Stage order is fixed: every filter runs before the sort, and the sort runs
//! before pagination. The filters themselves commute; the sort and the page
//! slice do not.

use crate::model::{FilterState, Product, SortKey};

/// The slice of products a listing view renders, plus the pagination facts
/// the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<Product>,
    /// Size of the filtered set before pagination.
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// Runs the full chain: filter, stable sort, paginate.
pub fn derive_page(products: &[Product], filters: &FilterState) -> PageView {
    let mut matched: Vec<Product> = products
        .iter()
        .filter(|p| matches_filters(p, filters))
        .cloned()
        .collect();
    sort_products(&mut matched, filters.sort_by);
    paginate(matched, filters)
}

/// Whether a product survives every filter criterion.
pub fn matches_filters(product: &Product, filters: &FilterState) -> bool {
    matches_query(product, &filters.query)
        && filters.category.map_or(true, |c| product.category == c)
        && in_price_range(product, filters.price_range)
        && matches_stock(product, filters.in_stock, filters.out_of_stock)
        && matches_brand(product, &filters.brands)
        && product.rating >= f32::from(filters.min_rating)
}

/// Case-insensitive substring match over title, description and category.
fn matches_query(product: &Product, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    product.title.to_lowercase().contains(&query)
        || product.description.to_lowercase().contains(&query)
        || product.category.as_str().contains(&query)
}

/// Inclusive on both ends.
fn in_price_range(product: &Product, (min, max): (f64, f64)) -> bool {
    product.price >= min && product.price <= max
}

/// One checkbox active filters to that status; both or neither pass everything.
fn matches_stock(product: &Product, in_stock: bool, out_of_stock: bool) -> bool {
    if in_stock == out_of_stock {
        return true;
    }
    if in_stock {
        product.in_stock
    } else {
        !product.in_stock
    }
}

/// OR semantics across the selected brands; unbranded products only pass when
/// no brand is selected.
fn matches_brand(product: &Product, brands: &[String]) -> bool {
    if brands.is_empty() {
        return true;
    }
    product
        .brand
        .as_deref()
        .is_some_and(|b| brands.iter().any(|selected| selected.eq_ignore_ascii_case(b)))
}

/// Stable sort by the selected key. `Default` keeps input order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

/// Cuts the filtered set down to the requested page, or returns it whole when
/// show-all is active.
fn paginate(items: Vec<Product>, filters: &FilterState) -> PageView {
    let total_items = items.len();

    if filters.show_all {
        return PageView {
            items,
            total_items,
            total_pages: 1,
            page: 1,
        };
    }

    let per_page = filters.per_page.max(1);
    let total_pages = (total_items + per_page - 1) / per_page;
    let start = (filters.page - 1) * per_page;
    let items = items.into_iter().skip(start).take(per_page).collect();

    PageView {
        items,
        total_items,
        total_pages,
        page: filters.page,
    }
}
