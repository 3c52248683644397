//! Visual theme for the review card window.

mod styles;

pub use styles::GLOBAL_STYLES;
