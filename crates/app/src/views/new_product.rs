//! Create product page: a signed-in form that writes under `products`.

use crate::{
    domain::products::ProductDraft,
    paths::{DataPath, Route, RouteParams},
    sync::{
        AuthPolicy, DataSource, MountError, PendingWrite, SubmitError, ViewConfig, ViewHandle,
        ViewSyncController,
    },
    views::{LOGIN_ROUTE, PRODUCTS_COLLECTION},
};

/// The form reads nothing from the store.
pub type NewProductHandle = ViewHandle<()>;

/// No data source; signed-in visitors only; writes under `products`.
#[must_use]
pub fn config() -> ViewConfig {
    ViewConfig {
        name: "new_product",
        data: DataSource::None,
        auth: AuthPolicy::Required {
            redirect: Route::new(LOGIN_ROUTE),
        },
        writes: Some(DataPath::collection(PRODUCTS_COLLECTION)),
    }
}

/// Mount the create page.
///
/// # Errors
///
/// Never fails; no route parameters are read.
pub fn open(controller: &ViewSyncController) -> Result<NewProductHandle, MountError> {
    controller.mount(config(), &RouteParams::new())
}

/// Post the form.
///
/// # Errors
///
/// Returns a validation error without writing when the draft is incomplete.
pub fn post(handle: &NewProductHandle, draft: ProductDraft) -> Result<PendingWrite, SubmitError> {
    handle.submit(draft)
}
