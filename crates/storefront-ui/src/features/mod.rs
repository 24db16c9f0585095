//! Feature slices: state, actions, and (wasm-only) views per surface.
pub mod catalog;
#[cfg(target_arch = "wasm32")]
pub mod landing;
pub mod modal;
