use crate::config;

/// Scroll position that lands a section's top just below the fixed header.
pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - config::HEADER_OFFSET).max(0.0)
}

fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    started_at: f64,
    duration: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, started_at: f64, duration: f64) -> Self {
        Self { from, to, started_at, duration }
    }

    fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn position_at(&self, now: f64) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out_quad(t)
    }
}

/// Drives smooth anchor scrolling. Holds at most one animation; a new request
/// replaces whatever is in flight and starts from the current position.
#[derive(Debug, Default)]
pub struct AnchorNavigator {
    animation: Option<ScrollAnimation>,
}

impl AnchorNavigator {
    pub fn navigate(&mut self, target: f64, current: f64, now: f64) {
        self.animation = Some(ScrollAnimation::new(
            current,
            target,
            now,
            config::SCROLL_DURATION_MS,
        ));
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Position for this frame. The final frame yields the exact target, after
    /// which the navigator is idle and returns `None`.
    pub fn tick(&mut self, now: f64) -> Option<f64> {
        let animation = self.animation?;
        if animation.is_finished(now) {
            self.animation = None;
        }
        Some(animation.position_at(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_rest(navigator: &mut AnchorNavigator, mut now: f64) -> (f64, f64) {
        let mut last = f64::NAN;
        while let Some(position) = navigator.tick(now) {
            last = position;
            now += f64::from(config::FRAME_INTERVAL_MS);
        }
        (last, now)
    }

    #[test]
    fn target_clears_the_fixed_header() {
        assert_eq!(scroll_target(1400.0), 1330.0);
        assert_eq!(scroll_target(30.0), 0.0);
    }

    #[test]
    fn animation_starts_at_origin_and_ends_exactly_on_target() {
        let animation = ScrollAnimation::new(100.0, 900.0, 0.0, 500.0);
        assert_eq!(animation.position_at(0.0), 100.0);
        assert_eq!(animation.position_at(250.0), 500.0);
        assert_eq!(animation.position_at(500.0), 900.0);
        assert_eq!(animation.position_at(10_000.0), 900.0);
        assert!(!animation.is_finished(499.0));
        assert!(animation.is_finished(500.0));
    }

    #[test]
    fn upward_and_downward_navigation_behave_the_same() {
        let down = ScrollAnimation::new(0.0, 1000.0, 0.0, 500.0);
        let up = ScrollAnimation::new(1000.0, 0.0, 0.0, 500.0);
        for now in [0.0, 100.0, 250.0, 400.0, 500.0] {
            assert!((down.position_at(now) + up.position_at(now) - 1000.0).abs() < 1e-9);
        }
    }

    #[test]
    fn settles_at_target_then_goes_idle() {
        let mut navigator = AnchorNavigator::default();
        navigator.navigate(scroll_target(600.0), 0.0, 0.0);
        let (last, _) = run_to_rest(&mut navigator, 0.0);
        assert_eq!(last, 530.0);
        assert!(!navigator.is_animating());
        assert_eq!(navigator.tick(1_000.0), None);
    }

    #[test]
    fn latest_navigation_wins() {
        let mut navigator = AnchorNavigator::default();
        navigator.navigate(scroll_target(600.0), 0.0, 0.0);
        let midway = navigator.tick(100.0).expect("animating");
        assert!(midway > 0.0 && midway < 530.0);

        navigator.navigate(scroll_target(2600.0), midway, 116.0);
        let (last, finished_at) = run_to_rest(&mut navigator, 132.0);
        assert_eq!(last, 2530.0);
        assert!(finished_at >= 116.0 + config::SCROLL_DURATION_MS);
    }

    #[test]
    fn idle_navigator_produces_no_frames() {
        let mut navigator = AnchorNavigator::default();
        assert!(!navigator.is_animating());
        assert_eq!(navigator.tick(0.0), None);
    }
}
