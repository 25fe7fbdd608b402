//! L3 Molecular Layer: Slide transition controller
//!
//! Combines easing curves and timing utilities to move slides between the
//! three slots when the carousel navigates.

use std::time::{Duration, Instant};

use folio_core::gallery::projection::window;
use folio_core::gallery::{Pose, SlidePosition, SlideVariant, Transition};
use folio_core::perf::GalleryMode;
use folio_core::GalleryConfig;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, progress};

/// A slide with its pose for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedSlide {
    pub index: usize,
    /// Continuous slot coordinate: -1.0 left, 0.0 center, 1.0 right
    pub slot: f64,
    pub pose: Pose,
    /// Dropping out of the window; drawn beneath everything else
    pub leaving: bool,
    /// Stacking order, higher on top. Zero until the caller assigns the
    /// projected value.
    pub z_index: u8,
}

impl AnimatedSlide {
    /// A slide resting in its slot
    pub fn at_rest(index: usize, position: SlidePosition) -> Self {
        Self {
            index,
            slot: position.offset() as f64,
            pose: SlideVariant::Rest(position).pose(),
            leaving: false,
            z_index: 0,
        }
    }

    pub fn is_center(&self) -> bool {
        !self.leaving && self.slot.abs() < 0.5
    }
}

/// Start and end state of one slide during a transition
#[derive(Debug, Clone, Copy)]
struct PoseTrack {
    index: usize,
    from_slot: f64,
    to_slot: f64,
    from: Pose,
    to: Pose,
    leaving: bool,
}

impl PoseTrack {
    fn at(&self, t: f64) -> AnimatedSlide {
        AnimatedSlide {
            index: self.index,
            slot: self.from_slot + (self.to_slot - self.from_slot) * t,
            pose: Pose::lerp(self.from, self.to, t),
            leaving: self.leaving,
            z_index: 0,
        }
    }
}

/// Active transition state
#[derive(Debug, Clone)]
struct ActiveTransition {
    start: Instant,
    tracks: Vec<PoseTrack>,
}

/// Slide transition controller
///
/// Call `start()` with each [`Transition`] the carousel returns, then
/// `sample()` every frame to get the slides to draw.
#[derive(Debug, Clone)]
pub struct SlideAnimator {
    duration: Duration,
    easing: EasingType,
    enabled: bool,
    active: Option<ActiveTransition>,
}

impl Default for SlideAnimator {
    fn default() -> Self {
        Self::new(&GalleryConfig::default(), GalleryMode::Animated)
    }
}

impl SlideAnimator {
    pub fn new(config: &GalleryConfig, mode: GalleryMode) -> Self {
        let duration = Duration::from_millis(config.transition_ms);
        let enabled = mode == GalleryMode::Animated
            && !duration.is_zero()
            && config.easing != EasingType::None;
        Self {
            duration,
            easing: config.easing,
            enabled,
            active: None,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check if a transition is still running at `now`
    #[inline]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !is_complete(active.start, self.duration, now))
    }

    /// Begin animating `transition`; replaces any transition in flight
    pub fn start(&mut self, transition: &Transition, len: usize, now: Instant) {
        if !self.enabled || len == 0 {
            self.active = None;
            return;
        }

        let before = window(transition.from, len);
        let after = window(transition.to, len);
        let mut tracks = Vec::with_capacity(4);

        for &(index, position) in &after {
            let to = SlideVariant::Rest(position).pose();
            let to_slot = position.offset() as f64;
            let previous = before.iter().find(|(seen, _)| *seen == index);

            let track = match (transition.entering, previous) {
                (Some((entering, variant)), _) if entering == index => PoseTrack {
                    index,
                    from_slot: to_slot,
                    to_slot,
                    from: variant.pose(),
                    to,
                    leaving: false,
                },
                (_, Some(&(_, old_position))) => PoseTrack {
                    index,
                    from_slot: old_position.offset() as f64,
                    to_slot,
                    from: SlideVariant::Rest(old_position).pose(),
                    to,
                    leaving: false,
                },
                // Revealed by a jump without an entering pose: appears at rest
                _ => PoseTrack {
                    index,
                    from_slot: to_slot,
                    to_slot,
                    from: to,
                    to,
                    leaving: false,
                },
            };
            tracks.push(track);
        }

        if let Some((index, variant)) = transition.exiting {
            let gone = !after.iter().any(|(kept, _)| *kept == index);
            if let Some(&(_, old_position)) = before.iter().find(|(seen, _)| *seen == index) {
                if gone {
                    let slot = old_position.offset() as f64;
                    tracks.push(PoseTrack {
                        index,
                        from_slot: slot,
                        to_slot: slot,
                        from: SlideVariant::Rest(old_position).pose(),
                        to: variant.pose(),
                        leaving: true,
                    });
                }
            }
        }

        self.active = Some(ActiveTransition { start: now, tracks });
    }

    /// Drop a finished transition. Returns true while one is still running.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.is_animating(now) {
            return true;
        }
        self.active = None;
        false
    }

    /// Jump every slide to its resting pose
    pub fn finish(&mut self) {
        self.active = None;
    }

    /// Slides to draw at `now` around `current`
    pub fn sample(&self, current: usize, len: usize, now: Instant) -> Vec<AnimatedSlide> {
        match &self.active {
            Some(active) if !is_complete(active.start, self.duration, now) => {
                let t = self.easing.apply(progress(active.start, self.duration, now));
                active.tracks.iter().map(|track| track.at(t)).collect()
            }
            _ => window(current, len)
                .into_iter()
                .map(|(index, position)| AnimatedSlide::at_rest(index, position))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::gallery::{Carousel, GalleryItem};
    use folio_core::ManualClock;

    fn carousel(n: usize) -> Carousel<ManualClock> {
        let items = (0..n)
            .map(|i| GalleryItem::new(format!("{i}.png"), format!("Item {i}")))
            .collect();
        Carousel::with_config(items, &GalleryConfig::default(), ManualClock::new())
    }

    fn animator() -> SlideAnimator {
        SlideAnimator::new(&GalleryConfig::default(), GalleryMode::Animated)
    }

    #[test]
    fn test_disabled_in_reduced_mode() {
        let config = GalleryConfig::default();
        assert!(!SlideAnimator::new(&config, GalleryMode::Reduced).is_enabled());

        let instant = GalleryConfig {
            transition_ms: 0,
            ..Default::default()
        };
        assert!(!SlideAnimator::new(&instant, GalleryMode::Animated).is_enabled());

        let mut animator = SlideAnimator::new(&config, GalleryMode::Reduced);
        let mut gallery = carousel(5);
        let now = Instant::now();
        let transition = gallery.next().unwrap();
        animator.start(&transition, 5, now);
        assert!(!animator.is_animating(now));
    }

    #[test]
    fn test_rest_poses_when_idle() {
        let slides = animator().sample(0, 5, Instant::now());
        assert_eq!(slides.len(), 3);
        let center = slides.iter().find(|s| s.index == 0).unwrap();
        assert_eq!(center.pose, Pose::CENTER);
        assert!(center.is_center());
        let left = slides.iter().find(|s| s.index == 4).unwrap();
        assert_eq!(left.slot, -1.0);
        assert_eq!(left.pose, Pose::SIDE);
    }

    #[test]
    fn test_forward_transition_tracks() {
        let mut animator = animator();
        let mut gallery = carousel(5);
        let start = Instant::now();
        let transition = gallery.next().unwrap();
        animator.start(&transition, 5, start);

        let slides = animator.sample(1, 5, start);
        // Four tracks: three resting targets plus the slide pushed out left
        assert_eq!(slides.len(), 4);

        let entering = slides.iter().find(|s| s.index == 2).unwrap();
        assert_eq!(entering.pose, SlideVariant::EnterFromRight.pose());

        let moving = slides.iter().find(|s| s.index == 1).unwrap();
        assert_eq!(moving.slot, 1.0);

        let leaving = slides.iter().find(|s| s.index == 4).unwrap();
        assert!(leaving.leaving);
        assert_eq!(leaving.pose, Pose::SIDE);
    }

    #[test]
    fn test_transition_settles_at_rest() {
        let mut animator = animator();
        let mut gallery = carousel(5);
        let start = Instant::now();
        let transition = gallery.next().unwrap();
        animator.start(&transition, 5, start);

        let mid = start + Duration::from_millis(300);
        assert!(animator.is_animating(mid));
        let moving = animator
            .sample(1, 5, mid)
            .into_iter()
            .find(|s| s.index == 1)
            .unwrap();
        assert!(moving.slot > 0.0 && moving.slot < 1.0);

        let end = start + Duration::from_millis(650);
        assert!(!animator.update(end));
        let slides = animator.sample(1, 5, end);
        assert_eq!(slides.len(), 3);
        assert!(slides.iter().all(|s| !s.leaving));
        assert_eq!(slides.iter().find(|s| s.is_center()).unwrap().index, 1);
    }

    #[test]
    fn test_jump_has_one_enter_and_one_exit() {
        let mut animator = animator();
        let mut gallery = carousel(7);
        let start = Instant::now();
        let transition = gallery.go_to(4).unwrap();
        animator.start(&transition, 7, start);

        let slides = animator.sample(4, 7, start);
        let rest = |s: &AnimatedSlide| SlideVariant::Rest(SlidePosition::from_offset(s.slot as isize)).pose();
        let arriving: Vec<_> = slides
            .iter()
            .filter(|s| !s.leaving && s.pose != rest(s))
            .map(|s| s.index)
            .collect();
        assert_eq!(arriving, vec![5]);
        assert_eq!(slides.iter().find(|s| s.index == 5).unwrap().pose, SlideVariant::EnterFromRight.pose());

        // Slides revealed by the jump start in their resting pose
        assert_eq!(slides.iter().find(|s| s.index == 4).unwrap().pose, Pose::CENTER);
        assert_eq!(slides.iter().find(|s| s.index == 3).unwrap().pose, Pose::SIDE);

        assert_eq!(slides.iter().filter(|s| s.leaving).count(), 1);
        assert_eq!(slides.iter().find(|s| s.leaving).unwrap().index, 0);
    }

    #[test]
    fn test_single_item_has_no_tracks_to_leave() {
        let mut animator = animator();
        let mut gallery = carousel(1);
        let start = Instant::now();
        let transition = gallery.next().unwrap();
        animator.start(&transition, 1, start);
        let slides = animator.sample(0, 1, start);
        assert_eq!(slides.len(), 1);
        assert!(!slides[0].leaving);
    }
}
