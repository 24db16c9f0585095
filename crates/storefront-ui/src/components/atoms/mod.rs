//! Small, prop-driven building blocks.
pub(crate) mod empty_state;
pub(crate) mod search_input;
