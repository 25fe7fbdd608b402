//! Frame-aligned throttles.
//!
//! The host loop calls [`FrameThrottle::on_frame`] once per rendered frame.
//! Calls between frames only overwrite the pending arguments, so the callback
//! always sees the latest ones and never runs more than once per frame.

use std::marker::PhantomData;

/// Coalesces calls and delivers the latest arguments after N frame ticks
pub struct FrameThrottle<F, A, R> {
    func: F,
    frames: u8,
    pending: Option<Pending<A>>,
    _result: PhantomData<fn() -> R>,
}

struct Pending<A> {
    args: A,
    frames_left: u8,
}

/// Deliver at most once per frame, on the next frame
pub fn raf_throttle<F, A, R>(func: F) -> FrameThrottle<F, A, R>
where
    F: FnMut(A) -> R,
{
    FrameThrottle::single(func)
}

/// Deliver at most once per frame, two frames after the first call
pub fn double_raf_throttle<F, A, R>(func: F) -> FrameThrottle<F, A, R>
where
    F: FnMut(A) -> R,
{
    FrameThrottle::double(func)
}

impl<F, A, R> FrameThrottle<F, A, R>
where
    F: FnMut(A) -> R,
{
    pub fn single(func: F) -> Self {
        Self::deferred(func, 1)
    }

    pub fn double(func: F) -> Self {
        Self::deferred(func, 2)
    }

    fn deferred(func: F, frames: u8) -> Self {
        Self {
            func,
            frames: frames.max(1),
            pending: None,
            _result: PhantomData,
        }
    }

    /// Record `args`, requesting a frame if none is pending
    pub fn call(&mut self, args: A) {
        match &mut self.pending {
            Some(pending) => pending.args = args,
            None => {
                self.pending = Some(Pending {
                    args,
                    frames_left: self.frames,
                })
            }
        }
    }

    /// Advance one frame; runs the callback when its frame arrives
    pub fn on_frame(&mut self) -> Option<R> {
        let pending = self.pending.as_mut()?;
        pending.frames_left = pending.frames_left.saturating_sub(1);
        if pending.frames_left > 0 {
            return None;
        }
        let Pending { args, .. } = self.pending.take()?;
        Some((self.func)(args))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending call without running it
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<F, A, R> std::fmt::Debug for FrameThrottle<F, A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameThrottle")
            .field("frames", &self.frames)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_frame_delivers_latest() {
        let mut delivered = Vec::new();
        {
            let mut throttled = raf_throttle(|x: i32| delivered.push(x));
            throttled.call(1);
            throttled.call(2);
            throttled.call(3);
            assert!(throttled.is_pending());

            assert_eq!(throttled.on_frame(), Some(()));
            assert!(!throttled.is_pending());
            // Nothing new: the frame is a no-op
            assert_eq!(throttled.on_frame(), None);

            throttled.call(4);
            throttled.on_frame();
        }
        assert_eq!(delivered, vec![3, 4]);
    }

    #[test]
    fn test_double_frame_waits_two_ticks() {
        let mut throttled = double_raf_throttle(|x: u16| x);
        throttled.call(10);
        assert_eq!(throttled.on_frame(), None);
        throttled.call(20);
        assert_eq!(throttled.on_frame(), Some(20));
        assert_eq!(throttled.on_frame(), None);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut throttled = raf_throttle(|x: u8| x);
        throttled.call(1);
        throttled.cancel();
        assert_eq!(throttled.on_frame(), None);
    }
}
