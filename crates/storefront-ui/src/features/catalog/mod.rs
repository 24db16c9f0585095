//! Catalog feature wiring.
//!
//! # Design
//! - Keep session state and reducers DOM-free so they test natively.
//! - Fetching goes through [`source::CatalogSource`]; the browser client lives
//!   in `services::api`.
//! - The view only reads store selectors and emits [`actions::ShopAction`]s.

pub mod actions;
pub mod source;
pub mod state;
#[cfg(test)]
pub mod testing;
#[cfg(target_arch = "wasm32")]
pub mod view;
