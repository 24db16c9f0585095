//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.

use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Wrap a configured client.
    pub(crate) fn new(client: ApiClient) -> Self {
        Self {
            client: Rc::new(client),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
