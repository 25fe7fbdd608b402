pub mod clock;
pub mod config;
pub mod error;
pub mod gallery;
pub mod perf;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, EasingType, GalleryConfig};
pub use error::{Error, Result};
pub use gallery::{Carousel, GalleryItem};
