//! Rotation state shared by every slideshow on the site.
//!
//! One engine instance owns the current index, the last navigation
//! direction and the autoplay clock for an ordered set of slides. Pages
//! decide how much of it to wire up: the landing splash only drives the
//! clock, the homepage adds hover pause and manual navigation, the lawyer
//! directory uses manual navigation alone. The engine is plain Rust; the
//! real `gloo_timers` interval lives in the page component and feeds
//! elapsed time in through [`Carousel::advance`].

use thiserror::Error;

/// Which way the active slide travelled last. Only used to pick the
/// entry/exit animation variant; it has no effect on state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    EmptySlides,
    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,
    #[error("slide index {index} is out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    slides: Vec<T>,
    current: usize,
    direction: Direction,
    autoplay_enabled: bool,
    interval_ms: u32,
    // Time accumulated toward the next autoplay firing.
    elapsed_ms: u32,
}

impl<T> Carousel<T> {
    /// Builds an engine over a non-empty slide set. Autoplay starts
    /// enabled with a full `interval_ms` until the first firing.
    pub fn new(slides: Vec<T>, interval_ms: u32) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptySlides);
        }
        if interval_ms == 0 {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Self {
            slides,
            current: 0,
            direction: Direction::Forward,
            autoplay_enabled: true,
            interval_ms,
            elapsed_ms: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &T {
        &self.slides[self.current]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Advances to the following slide, wrapping past the end.
    pub fn next(&mut self) {
        self.direction = Direction::Forward;
        self.current = (self.current + 1) % self.slides.len();
        self.elapsed_ms = 0;
    }

    /// Steps back to the previous slide, wrapping past the start.
    pub fn prev(&mut self) {
        self.direction = Direction::Backward;
        self.current = (self.current + self.slides.len() - 1) % self.slides.len();
        self.elapsed_ms = 0;
    }

    /// Jumps straight to `index`, picking the travel direction relative
    /// to the current slide. An out-of-range index is a caller bug: the
    /// call is rejected and state is left untouched, never clamped.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slides.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
        self.elapsed_ms = 0;
        Ok(())
    }

    /// Suspends autoplay and discards any partially elapsed interval, so
    /// a pending firing never lands late. Idempotent.
    pub fn pause(&mut self) {
        self.autoplay_enabled = false;
        self.elapsed_ms = 0;
    }

    /// Re-enables autoplay with a full interval ahead of the next firing.
    /// Calling while already enabled just restarts the countdown.
    pub fn resume(&mut self) {
        self.autoplay_enabled = true;
        self.elapsed_ms = 0;
    }

    /// Feeds elapsed wall-clock time into the autoplay clock. Fires
    /// `next()` once per full interval crossed and returns how many
    /// firings happened; sub-interval remainders carry over. Inert while
    /// paused.
    pub fn advance(&mut self, elapsed_ms: u32) -> usize {
        if !self.autoplay_enabled {
            return 0;
        }
        self.elapsed_ms += elapsed_ms;
        let mut fired = 0;
        while self.elapsed_ms >= self.interval_ms {
            let remainder = self.elapsed_ms - self.interval_ms;
            self.next();
            self.elapsed_ms = remainder;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Carousel<&'static str> {
        Carousel::new(vec!["A", "B", "C"], 2000).unwrap()
    }

    #[test]
    fn next_wraps_visiting_each_index_in_order() {
        let mut c = engine();
        let mut seen = Vec::new();
        for _ in 0..3 {
            c.next();
            seen.push(c.current_index());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut c = engine();
        c.prev();
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn go_to_accepts_bounds_and_rejects_out_of_range() {
        let mut c = engine();
        assert!(c.go_to(0).is_ok());
        assert!(c.go_to(2).is_ok());
        assert_eq!(
            c.go_to(3),
            Err(CarouselError::OutOfRange { index: 3, len: 3 })
        );
        // Rejected call leaves state untouched.
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.current_slide(), &"C");
    }

    #[test]
    fn direction_tracks_navigation() {
        let mut c = engine();
        c.next();
        assert_eq!(c.direction(), Direction::Forward);
        c.prev();
        assert_eq!(c.direction(), Direction::Backward);
        c.go_to(2).unwrap();
        assert_eq!(c.direction(), Direction::Forward);
        c.go_to(1).unwrap();
        assert_eq!(c.direction(), Direction::Backward);
        // Jumping to the slide already shown travels backward.
        c.go_to(1).unwrap();
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn autoplay_cadence_fires_once_per_interval() {
        let mut c = Carousel::new(vec!["A", "B", "C"], 1000).unwrap();
        assert_eq!(c.advance(3500), 3);
        assert_eq!(c.current_index(), 0);
        // The 500ms remainder carries over.
        assert_eq!(c.advance(500), 1);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn pause_suppresses_autoplay_entirely() {
        let mut c = engine();
        c.pause();
        assert_eq!(c.advance(5000), 0);
        assert_eq!(c.current_index(), 0);
        assert!(!c.autoplay_enabled());
    }

    #[test]
    fn pause_discards_partially_elapsed_interval() {
        let mut c = engine();
        c.advance(1500);
        c.pause();
        c.resume();
        // The 1500ms from before the pause must not carry over.
        assert_eq!(c.advance(1999), 0);
        assert_eq!(c.advance(1), 1);
    }

    #[test]
    fn resume_restarts_the_full_interval() {
        let mut c = Carousel::new(vec!["A", "B", "C"], 1000).unwrap();
        c.pause();
        c.resume();
        assert_eq!(c.advance(999), 0);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.advance(1), 1);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn resume_while_running_resets_the_countdown() {
        let mut c = engine();
        c.advance(1900);
        c.resume();
        assert_eq!(c.advance(1999), 0);
        assert_eq!(c.advance(1), 1);
    }

    #[test]
    fn manual_navigation_restarts_the_countdown() {
        let mut c = engine();
        c.advance(1900);
        c.next();
        assert_eq!(c.advance(1999), 0);
        assert_eq!(c.advance(1), 1);
    }

    #[test]
    fn empty_slide_set_fails_at_construction() {
        let err = Carousel::<&str>::new(vec![], 2000).unwrap_err();
        assert_eq!(err, CarouselError::EmptySlides);
    }

    #[test]
    fn zero_interval_fails_at_construction() {
        let err = Carousel::new(vec!["A"], 0).unwrap_err();
        assert_eq!(err, CarouselError::ZeroInterval);
    }

    #[test]
    fn hover_pause_then_resume_delays_the_next_firing() {
        // t=0 construct, t=500 pointer enters, t=3000 it leaves,
        // one full interval after that the next slide shows.
        let mut c = engine();
        assert_eq!(c.current_slide(), &"A");
        c.advance(500);
        c.pause();
        c.advance(2500);
        c.resume();
        assert_eq!(c.advance(2000), 1);
        assert_eq!(c.current_slide(), &"B");
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn indicator_click_while_paused_keeps_autoplay_suspended() {
        let mut c = engine();
        c.advance(500);
        c.pause();
        c.go_to(2).unwrap();
        assert_eq!(c.current_slide(), &"C");
        assert_eq!(c.direction(), Direction::Forward);
        assert_eq!(c.advance(5000), 0);
        assert!(!c.autoplay_enabled());
    }

    #[test]
    fn single_slide_engine_rotates_in_place() {
        let mut c = Carousel::new(vec!["only"], 1000).unwrap();
        c.next();
        assert_eq!(c.current_index(), 0);
        c.prev();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.advance(3000), 3);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn errors_render_useful_messages() {
        assert_eq!(
            CarouselError::OutOfRange { index: 4, len: 3 }.to_string(),
            "slide index 4 is out of range for 3 slides"
        );
        assert_eq!(
            CarouselError::EmptySlides.to_string(),
            "carousel needs at least one slide"
        );
    }
}
