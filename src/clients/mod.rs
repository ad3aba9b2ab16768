//! Type-safe wrappers around [`SliceClient`](crate::framework::SliceClient).

pub mod cart_client;
pub mod catalog_client;
pub mod filter_client;
pub mod handle;
pub mod popup_client;
pub mod recent_client;
pub mod wishlist_client;

pub use cart_client::*;
pub use catalog_client::*;
pub use filter_client::*;
pub use handle::*;
pub use popup_client::*;
pub use recent_client::*;
pub use wishlist_client::*;
