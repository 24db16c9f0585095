//! Core, DOM-free primitives and helpers for the storefront UI.
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod logic;
pub mod render;
pub mod store;
pub mod wishlist;
