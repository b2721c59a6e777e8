//! spritefield-core (renderer-agnostic)
//!
//! A fixed-capacity, columnar store of animatable sprite attributes laid
//! out for direct GPU consumption: every logical per-sprite value is
//! expanded to the four corners of its quad, every animated attribute
//! carries a current/base twin pair, and an in-flight transition can be
//! redirected at any moment by folding it into a new base state (rebasing)
//! with the same easing curve the rasterizer applies per vertex. No
//! scheduler, no per-frame callbacks, no history.

pub mod atlas;
pub mod channel;
pub mod config;
pub mod ease;
pub mod error;
pub mod handle;
pub mod ids;
pub mod quad;
pub mod query;
pub mod rebase;
pub mod store;
pub mod texture;

// Re-exports for consumers (renderer adapters and hosts)
pub use atlas::{ImageAtlas, ImageCompletion, ImageData};
pub use channel::Channel;
pub use config::Config;
pub use ease::Easing;
pub use error::StoreError;
pub use handle::SpriteHandle;
pub use ids::SpriteId;
pub use quad::{CORNERS_PER_SPRITE, INDICES_PER_SPRITE};
pub use rebase::blend_between;
pub use store::{ChannelKind, SpriteStore};
pub use texture::TextureSlot;
