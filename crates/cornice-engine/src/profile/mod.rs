//! Corner profile engine.
//!
//! An [`EdgeEffect`] maps a layer index and a corner width to a border
//! segment width. [`compute_profile`] evaluates every layer and clamps the
//! results into a [`BorderProfile`].

mod effect;
mod engine;

pub use effect::EdgeEffect;
pub use engine::{
    compute_profile, effective_width, normalize_width, BorderProfile, DEFAULT_WIDTH, MAX_WIDTH,
};
