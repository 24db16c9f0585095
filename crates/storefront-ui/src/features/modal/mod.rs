//! Product detail modal.
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
