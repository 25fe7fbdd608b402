//! Slide transition system for the gallery view
//!
//! Slides glide between the left, center and right slots with configurable
//! easing and duration.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing curves (cubic, quintic, exponential, bezier)
//! - `timing` - Time calculation utilities (progress, frame duration)
//!
//! ## L3 Molecular Layer
//! - `animation` - Transition controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use folio_tui::transition::SlideAnimator;
//!
//! let mut animator = SlideAnimator::new(&config.gallery, mode);
//!
//! // After a carousel navigation
//! if let Some(transition) = carousel.next() {
//!     animator.start(&transition, carousel.len(), Instant::now());
//! }
//!
//! // In the main loop, sample the poses for this frame
//! let slides = animator.sample(current, len, Instant::now());
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

pub use animation::{AnimatedSlide, SlideAnimator};
pub use easing::{CubicBezier, EasingType, EasingTypeExt};
