//! Listings page: every product, no sign-in required.

use serde_json::Value;
use tracing::warn;

use crate::{
    channels::Snapshot,
    domain::products::{Product, ProductId},
    paths::{DataPath, RouteParams},
    sync::{
        AuthPolicy, DataSource, MountError, ViewConfig, ViewData, ViewHandle, ViewState,
        ViewSyncController,
    },
    views::{PRODUCTS_COLLECTION, product_route},
};

/// Products under the collection, ordered by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing(pub Vec<Product>);

impl ViewData for Listing {
    fn from_snapshot(snapshot: &Snapshot) -> Self {
        let children = match &snapshot.value {
            None => return Self::default(),
            Some(Value::Object(children)) => children,
            Some(_) => {
                warn!(path = %snapshot.path, "collection snapshot is not an object");
                return Self::default();
            }
        };

        let mut products: Vec<Product> = children
            .iter()
            .filter_map(|(key, value)| {
                Product::decode(ProductId::new(key.as_str()), value)
                    .inspect_err(|error| {
                        warn!(
                            path = %snapshot.path,
                            key = %key,
                            %error,
                            "skipping malformed product"
                        );
                    })
                    .ok()
            })
            .collect();

        products.sort_by(|a, b| a.id.cmp(&b.id));

        Self(products)
    }
}

pub type ListingsHandle = ViewHandle<Listing>;

/// The whole `products` collection, open to anonymous visitors.
#[must_use]
pub fn config() -> ViewConfig {
    ViewConfig {
        name: "listings",
        data: DataSource::Fixed(DataPath::collection(PRODUCTS_COLLECTION)),
        auth: AuthPolicy::Optional,
        writes: None,
    }
}

/// Mount the listings page.
///
/// # Errors
///
/// Never fails for the fixed collection path; the signature matches the
/// other pages.
pub fn open(controller: &ViewSyncController) -> Result<ListingsHandle, MountError> {
    controller.mount(config(), &RouteParams::new())
}

/// Navigate from the listings to a product's detail page.
pub fn open_product(handle: &ListingsHandle, id: &ProductId) {
    handle.navigate(&product_route(id));
}

/// What the listings page shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListingPresentation<'a> {
    Loading,
    Empty,
    Items(&'a [Product]),
}

/// Map the view state to what the page shows.
#[must_use]
pub fn present(state: &ViewState<Listing>) -> ListingPresentation<'_> {
    if state.loading {
        return ListingPresentation::Loading;
    }

    match &state.data {
        None => ListingPresentation::Loading,
        Some(Listing(products)) if products.is_empty() => ListingPresentation::Empty,
        Some(Listing(products)) => ListingPresentation::Items(products),
    }
}
