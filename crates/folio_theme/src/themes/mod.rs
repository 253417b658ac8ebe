//! Built-in themes
//!
//! One module per theme, each exposing `theme()`. Groups several themes have
//! in common live in `shared`.

pub(crate) mod brutalism;
pub(crate) mod liquid_glass;
pub(crate) mod minimalism;
pub(crate) mod synthwave;
pub(crate) mod terminal;

mod shared;
