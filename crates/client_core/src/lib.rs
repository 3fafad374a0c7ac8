//! Client-side building blocks of the portfolio site: the experience
//! carousel, the theme store and the API client.

pub mod carousel;
pub mod client;
pub mod driver;
pub mod error;
pub mod gesture;
pub mod theme_store;

pub use carousel::{
    visual_weight, CarouselConfig, CarouselController, CarouselEffect, CarouselEvent, SlideState,
    VisibilityEntry, VisualWeight,
};
pub use client::{LoadState, PortfolioClient};
pub use driver::{spawn as spawn_carousel, CarouselHandle};
pub use error::{CarouselError, ClientError};
pub use theme_store::ThemeStore;
