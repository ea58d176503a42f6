//! The three marketplace pages, each a configuration of the sync core.

pub mod listings;
pub mod new_product;
pub mod product;

use crate::{domain::products::ProductId, paths::Route};

/// Sign-in page that protected views redirect to.
pub const LOGIN_ROUTE: &str = "/login";

/// Listings page.
pub const PRODUCTS_ROUTE: &str = "/products";

/// Collection every product lives under.
pub const PRODUCTS_COLLECTION: &str = "products";

/// Route of a product's detail page.
#[must_use]
pub fn product_route(id: &ProductId) -> Route {
    Route::new(format!("{PRODUCTS_ROUTE}/{id}"))
}
