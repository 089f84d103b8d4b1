// SPDX-License-Identifier: MPL-2.0
//! Time-based transitions for the card's slide and border color.
//!
//! A [`Tween`] eases from its current value to a new target whenever it is
//! retargeted, using the CSS `ease` timing curve.

use iced::time::Instant;
use iced::Color;
use std::time::Duration;

/// A CSS-style cubic Bézier timing curve through `(0,0)` and `(1,1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// `cubic-bezier(0.25, 0.1, 0.25, 1.0)`
pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f32 = 1e-6;

impl CubicBezier {
    /// `x1` and `x2` must lie in `0.0..=1.0` for the curve to be a function of time.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased output for a linear `progress` in `0.0..=1.0`.
    #[must_use]
    pub fn at(&self, progress: f32) -> f32 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(progress);
        sample(self.y1, self.y2, t)
    }

    /// Finds the curve parameter whose x coordinate is `x`.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = sample(self.x1, self.x2, t) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = slope(self.x1, self.x2, t);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            t -= error / slope;
        }

        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = sample(self.x1, self.x2, t);
            if (value - x).abs() < SOLVE_EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }
}

// One coordinate of the curve, with end points fixed at 0 and 1.
fn sample(p1: f32, p2: f32, t: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn slope(p1: f32, p2: f32, t: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Values that can be blended between two end points.
pub trait Interpolate: Copy + PartialEq {
    fn interpolate(self, to: Self, amount: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(self, to: Self, amount: f32) -> Self {
        self + (to - self) * amount
    }
}

impl Interpolate for Color {
    /// Blends in premultiplied alpha, so fading from transparent keeps the
    /// target hue instead of passing through black.
    fn interpolate(self, to: Self, amount: f32) -> Self {
        let alpha = self.a.interpolate(to.a, amount);
        if alpha <= f32::EPSILON {
            return Color { a: 0.0, ..to };
        }
        let channel = |from: f32, target: f32| {
            (from * self.a).interpolate(target * to.a, amount) / alpha
        };
        Color {
            r: channel(self.r, to.r),
            g: channel(self.g, to.g),
            b: channel(self.b, to.b),
            a: alpha,
        }
    }
}

/// An eased transition towards `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    started_at: Instant,
    duration: Duration,
}

impl<T: Interpolate> Tween<T> {
    /// A tween resting at `value`.
    #[must_use]
    pub fn settled(value: T, duration: Duration, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started_at: now,
            duration,
        }
    }

    /// Value at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> T {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.interpolate(self.to, EASE.at(progress))
    }

    /// Starts easing from the value at `now` towards `to`.
    ///
    /// Retargeting to the current target keeps the running transition.
    pub fn retarget(&mut self, to: T, now: Instant) {
        if to == self.to {
            return;
        }
        self.from = self.value(now);
        self.to = to;
        self.started_at = now;
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        self.from != self.to && self.progress(now) < 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}
