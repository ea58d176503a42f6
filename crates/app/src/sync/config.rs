//! Per-view configuration.

use crate::{
    paths::{DataPath, Route, RouteParams},
    sync::errors::MountError,
};

/// Where a view's data subscription points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The view renders without remote data.
    None,

    /// A path that does not depend on the route.
    Fixed(DataPath),

    /// `collection/{param}`, with the key taken from the route.
    Keyed { collection: DataPath, param: String },
}

impl DataSource {
    /// Resolve the subscription path for the given route parameters.
    ///
    /// # Errors
    ///
    /// Returns an error when the route lacks the key parameter or the key is
    /// not a valid path segment.
    pub fn resolve(&self, params: &RouteParams) -> Result<Option<DataPath>, MountError> {
        match self {
            Self::None => Ok(None),
            Self::Fixed(path) => Ok(Some(path.clone())),
            Self::Keyed { collection, param } => {
                let key = params
                    .get(param)
                    .ok_or_else(|| MountError::MissingRouteParam(param.clone()))?;

                Ok(Some(collection.child(key)?))
            }
        }
    }
}

/// What a view does when nobody is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Anonymous visitors may stay.
    Optional,

    /// Anonymous visitors are sent to `redirect`.
    Required { redirect: Route },
}

impl AuthPolicy {
    /// True when anonymous visitors are redirected.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Required { .. })
    }
}

/// Static description of a page: what it reads, who may see it and where it
/// writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// Short name used in log events.
    pub name: &'static str,

    pub data: DataSource,

    pub auth: AuthPolicy,

    /// Collection that `submit` creates records under, if the view writes.
    pub writes: Option<DataPath>,
}
