//! Slide positions, navigation direction and the poses slides animate between.

/// Display role of a slide in the three-slot window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlidePosition {
    Left,
    Center,
    Right,
}

impl SlidePosition {
    /// Slot for an offset relative to the current index
    pub fn from_offset(offset: isize) -> Self {
        match offset.signum() {
            0 => SlidePosition::Center,
            -1 => SlidePosition::Left,
            _ => SlidePosition::Right,
        }
    }

    pub fn offset(self) -> isize {
        match self {
            SlidePosition::Left => -1,
            SlidePosition::Center => 0,
            SlidePosition::Right => 1,
        }
    }

    /// Where the occupant of this slot goes when the window shifts.
    ///
    /// Returns the new slot (or `None` when the slide leaves the window) and
    /// the variant it animates towards.
    pub fn transition(self, direction: PageDirection) -> (Option<SlidePosition>, SlideVariant) {
        let shifted = self.offset() - direction.signum() as isize;
        if (-1..=1).contains(&shifted) {
            let position = SlidePosition::from_offset(shifted);
            (Some(position), SlideVariant::Rest(position))
        } else {
            // Only reachable with a non-None direction
            let exit = direction
                .exiting_variant()
                .unwrap_or(SlideVariant::Rest(self));
            (None, exit)
        }
    }
}

/// Sign of the most recent navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageDirection {
    /// No navigation has happened yet
    #[default]
    None,
    Forward,
    Backward,
}

impl PageDirection {
    pub fn signum(self) -> i8 {
        match self {
            PageDirection::None => 0,
            PageDirection::Forward => 1,
            PageDirection::Backward => -1,
        }
    }

    /// Initial pose for the slide revealed by a move in this direction
    pub fn entering_variant(self) -> Option<SlideVariant> {
        match self {
            PageDirection::None => None,
            PageDirection::Forward => Some(SlideVariant::EnterFromRight),
            PageDirection::Backward => Some(SlideVariant::EnterFromLeft),
        }
    }

    /// Pose for the slide pushed out by a move in this direction
    pub fn exiting_variant(self) -> Option<SlideVariant> {
        match self {
            PageDirection::None => None,
            PageDirection::Forward => Some(SlideVariant::ExitToLeft),
            PageDirection::Backward => Some(SlideVariant::ExitToRight),
        }
    }

    /// Side slot new content enters from
    pub fn active_side(self) -> Option<SlidePosition> {
        match self {
            PageDirection::None => None,
            PageDirection::Forward => Some(SlidePosition::Right),
            PageDirection::Backward => Some(SlidePosition::Left),
        }
    }
}

/// Named animation target for a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideVariant {
    Rest(SlidePosition),
    EnterFromLeft,
    EnterFromRight,
    ExitToLeft,
    ExitToRight,
}

impl SlideVariant {
    pub fn pose(self) -> Pose {
        match self {
            SlideVariant::Rest(SlidePosition::Center) => Pose::CENTER,
            SlideVariant::Rest(SlidePosition::Left) => Pose::SIDE,
            SlideVariant::Rest(SlidePosition::Right) => Pose::SIDE.mirrored(),
            SlideVariant::EnterFromLeft => Pose {
                x_percent: -20.0,
                opacity: 0.0,
                scale: 0.6,
                rotate_y: 45.0,
                ..Pose::SIDE
            },
            SlideVariant::EnterFromRight => SlideVariant::EnterFromLeft.pose().mirrored(),
            SlideVariant::ExitToLeft => Pose {
                x_percent: -25.0,
                opacity: 0.0,
                scale: 0.5,
                rotate_y: 50.0,
                ..Pose::SIDE
            },
            SlideVariant::ExitToRight => SlideVariant::ExitToLeft.pose().mirrored(),
        }
    }
}

/// Visual state of a slide: horizontal offset (percent of its slot),
/// opacity, scale, Y rotation in degrees, brightness and blur radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x_percent: f64,
    pub opacity: f64,
    pub scale: f64,
    pub rotate_y: f64,
    pub brightness: f64,
    pub blur: f64,
}

impl Pose {
    pub const CENTER: Pose = Pose {
        x_percent: 0.0,
        opacity: 1.0,
        scale: 1.0,
        rotate_y: 0.0,
        brightness: 1.0,
        blur: 0.0,
    };

    /// Resting pose of the left slot; the right slot mirrors it
    pub const SIDE: Pose = Pose {
        x_percent: 0.0,
        opacity: 0.25,
        scale: 0.7,
        rotate_y: 28.0,
        brightness: 0.55,
        blur: 1.0,
    };

    pub fn mirrored(self) -> Pose {
        Pose {
            x_percent: -self.x_percent,
            rotate_y: -self.rotate_y,
            ..self
        }
    }

    /// Interpolate every channel between two poses
    pub fn lerp(from: Pose, to: Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            x_percent: mix(from.x_percent, to.x_percent),
            opacity: mix(from.opacity, to.opacity),
            scale: mix(from.scale, to.scale),
            rotate_y: mix(from.rotate_y, to.rotate_y),
            brightness: mix(from.brightness, to.brightness),
            blur: mix(from.blur, to.blur),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_shift_moves_slots_left() {
        let (pos, variant) = SlidePosition::Center.transition(PageDirection::Forward);
        assert_eq!(pos, Some(SlidePosition::Left));
        assert_eq!(variant, SlideVariant::Rest(SlidePosition::Left));

        let (pos, _) = SlidePosition::Right.transition(PageDirection::Forward);
        assert_eq!(pos, Some(SlidePosition::Center));

        let (pos, variant) = SlidePosition::Left.transition(PageDirection::Forward);
        assert_eq!(pos, None);
        assert_eq!(variant, SlideVariant::ExitToLeft);
    }

    #[test]
    fn test_backward_shift_pushes_right_slot_out() {
        let (pos, variant) = SlidePosition::Right.transition(PageDirection::Backward);
        assert_eq!(pos, None);
        assert_eq!(variant, SlideVariant::ExitToRight);

        let (pos, _) = SlidePosition::Left.transition(PageDirection::Backward);
        assert_eq!(pos, Some(SlidePosition::Center));
    }

    #[test]
    fn test_no_direction_keeps_slot() {
        for slot in [SlidePosition::Left, SlidePosition::Center, SlidePosition::Right] {
            assert_eq!(slot.transition(PageDirection::None), (Some(slot), SlideVariant::Rest(slot)));
        }
    }

    #[test]
    fn test_side_poses_mirror() {
        let left = SlideVariant::Rest(SlidePosition::Left).pose();
        let right = SlideVariant::Rest(SlidePosition::Right).pose();
        assert_eq!(left.rotate_y, 28.0);
        assert_eq!(right.rotate_y, -28.0);
        assert_eq!(left.opacity, right.opacity);

        let enter_right = SlideVariant::EnterFromRight.pose();
        assert_eq!(enter_right.x_percent, 20.0);
        assert_eq!(enter_right.rotate_y, -45.0);
        assert_eq!(SlideVariant::ExitToLeft.pose().scale, 0.5);
    }

    #[test]
    fn test_pose_lerp_endpoints() {
        let from = SlideVariant::EnterFromRight.pose();
        let to = Pose::CENTER;
        assert_eq!(Pose::lerp(from, to, 0.0), from);
        assert_eq!(Pose::lerp(from, to, 1.0), to);
        let mid = Pose::lerp(from, to, 0.5);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
    }
}
