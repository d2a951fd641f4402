//! Client-side presentation support: the built-in portfolio content used
//! when the API is unreachable, and the hero typewriter effect.

pub mod snapshot;
pub mod typewriter;

pub use snapshot::{PortfolioSnapshot, load_snapshot};
pub use typewriter::{HERO_PHRASES, Phase, Typewriter, TypewriterHandle, TypewriterTiming};
