//! Product detail page.

use tracing::warn;

use crate::{
    channels::Snapshot,
    domain::products::{Product, ProductId},
    paths::{DataPath, Route, RouteParams},
    sync::{
        AuthPolicy, DataSource, MountError, ViewConfig, ViewData, ViewHandle, ViewState,
        ViewSyncController,
    },
    views::{LOGIN_ROUTE, PRODUCTS_COLLECTION, PRODUCTS_ROUTE},
};

/// Route parameter holding the product key.
pub const ID_PARAM: &str = "id";

/// Result of resolving `products/{id}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetail {
    /// A well-formed product record.
    Found(Product),

    /// Nothing usable is stored at the path.
    NotFound,
}

impl ViewData for ProductDetail {
    fn from_snapshot(snapshot: &Snapshot) -> Self {
        let (Some(key), Some(value)) = (snapshot.path.last_key(), &snapshot.value) else {
            return Self::NotFound;
        };

        match Product::decode(ProductId::new(key), value) {
            Ok(product) => Self::Found(product),
            Err(error) => {
                warn!(path = %snapshot.path, %error, "malformed product snapshot");

                Self::NotFound
            }
        }
    }
}

pub type ProductHandle = ViewHandle<ProductDetail>;

/// `products/{id}` for signed-in visitors; others go to the login page.
#[must_use]
pub fn config() -> ViewConfig {
    ViewConfig {
        name: "product",
        data: DataSource::Keyed {
            collection: DataPath::collection(PRODUCTS_COLLECTION),
            param: ID_PARAM.to_string(),
        },
        auth: AuthPolicy::Required {
            redirect: Route::new(LOGIN_ROUTE),
        },
        writes: None,
    }
}

/// Route parameters selecting product `id`.
#[must_use]
pub fn params(id: &str) -> RouteParams {
    RouteParams::new().with(ID_PARAM, id)
}

/// Mount the detail page for `id`.
///
/// # Errors
///
/// Returns an error when `id` is not a valid key.
pub fn open(controller: &ViewSyncController, id: &str) -> Result<ProductHandle, MountError> {
    controller.mount(config(), &params(id))
}

/// Switch a mounted detail page to another product.
///
/// # Errors
///
/// Returns an error when `id` is not a valid key or the page is unmounted.
pub fn show(handle: &mut ProductHandle, id: &str) -> Result<(), MountError> {
    handle.set_route(&params(id))
}

/// Close button: back to the listings.
pub fn return_to_products(handle: &ProductHandle) {
    handle.navigate(&Route::new(PRODUCTS_ROUTE));
}

/// What the detail page shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductPresentation<'a> {
    Loading,
    NotFound,
    Detail(&'a Product),
}

/// Map the view state to what the page shows.
#[must_use]
pub fn present(state: &ViewState<ProductDetail>) -> ProductPresentation<'_> {
    if state.loading {
        return ProductPresentation::Loading;
    }

    match &state.data {
        None => ProductPresentation::Loading,
        Some(ProductDetail::NotFound) => ProductPresentation::NotFound,
        Some(ProductDetail::Found(product)) => ProductPresentation::Detail(product),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::sync::{ViewEvent, reduce};

    use super::*;

    fn snapshot(value: Option<Value>) -> TestResult<Snapshot> {
        Ok(Snapshot::new(DataPath::parse("products/p1")?, value))
    }

    #[test]
    fn absent_value_is_not_found() -> TestResult {
        assert_eq!(
            ProductDetail::from_snapshot(&snapshot(None)?),
            ProductDetail::NotFound
        );
        assert_eq!(
            ProductDetail::from_snapshot(&snapshot(Some(Value::Null))?),
            ProductDetail::NotFound
        );

        Ok(())
    }

    #[test]
    fn malformed_value_is_not_found() -> TestResult {
        let detail = ProductDetail::from_snapshot(&snapshot(Some(json!({ "name": 7 })))?);

        assert_eq!(detail, ProductDetail::NotFound);

        Ok(())
    }

    #[test]
    fn value_decodes_with_key_from_path() -> TestResult {
        let detail = ProductDetail::from_snapshot(&snapshot(Some(json!({
            "name": "Desk",
            "desc": "Oak",
            "price": 20,
            "created": "2024-01-01T00:00:00Z",
        })))?);

        let ProductDetail::Found(product) = detail else {
            return Err(format!("expected Found, got {detail:?}").into());
        };

        assert_eq!(product.id, "p1");
        assert_eq!(product.name, "Desk");

        Ok(())
    }

    #[test]
    fn presentation_separates_loading_from_not_found() {
        let mut state = ViewState::new(true);

        assert_eq!(present(&state), ProductPresentation::Loading);

        reduce(&mut state, ViewEvent::Data(ProductDetail::NotFound));

        assert_eq!(present(&state), ProductPresentation::NotFound);
    }

    #[test]
    fn config_requires_sign_in() {
        let config = config();

        assert_eq!(
            config.auth,
            AuthPolicy::Required {
                redirect: Route::new("/login")
            }
        );
    }
}
