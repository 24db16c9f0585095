//! Landing page feature.
pub mod view;
