//! Damped-spring smoothing for continuously driven channels (tilt, highlight).

use crate::constants::{
    FRAME_DT_MAX_SEC, HIGHLIGHT_OPACITY_DAMPING, HIGHLIGHT_OPACITY_STIFFNESS, SPRING_MASS,
    SPRING_MAX_SUBSTEP_SEC, SPRING_REST_DELTA, SPRING_REST_SPEED, TILT_DAMPING, TILT_STIFFNESS,
};

/// Physical parameters of a spring channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Tilt and highlight-position channels.
    pub const TILT: SpringConfig = SpringConfig {
        stiffness: TILT_STIFFNESS,
        damping: TILT_DAMPING,
        mass: SPRING_MASS,
    };

    /// Highlight intensity; stiffer so the light fades in quickly.
    pub const OPACITY: SpringConfig = SpringConfig {
        stiffness: HIGHLIGHT_OPACITY_STIFFNESS,
        damping: HIGHLIGHT_OPACITY_DAMPING,
        mass: SPRING_MASS,
    };

    /// `damping / (2 * sqrt(stiffness * mass))`; 1.0 is critical.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::TILT
    }
}

/// A scalar that chases its target through spring dynamics.
///
/// Only `set_target` and `tick` change it. Retargeting keeps the current
/// velocity, so a new target never causes a jump.
#[derive(Clone, Copy, Debug)]
pub struct SmoothedValue {
    current: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
}

impl SmoothedValue {
    pub fn new(initial: f32, config: SpringConfig) -> Self {
        Self {
            current: initial,
            velocity: 0.0,
            target: initial,
            config,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.current == self.target && self.velocity == 0.0
    }

    /// Advances the spring by `dt_sec` and returns whether it is at rest.
    ///
    /// Uses semi-implicit Euler over sub-steps no longer than
    /// `SPRING_MAX_SUBSTEP_SEC`; `dt_sec` is capped at `FRAME_DT_MAX_SEC`.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        if self.is_settled() {
            return true;
        }
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, FRAME_DT_MAX_SEC)
        } else {
            0.0
        };
        if dt > 0.0 {
            let steps = (dt / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
            let h = dt / steps as f32;
            let SpringConfig {
                stiffness,
                damping,
                mass,
            } = self.config;
            for _ in 0..steps {
                let displacement = self.current - self.target;
                let accel = (-stiffness * displacement - damping * self.velocity) / mass;
                self.velocity += accel * h;
                self.current += self.velocity * h;
            }
        }
        if (self.current - self.target).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
        {
            self.current = self.target;
            self.velocity = 0.0;
        }
        self.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_springs_are_at_least_critically_damped() {
        assert!(SpringConfig::TILT.damping_ratio() >= 1.0);
        assert!(SpringConfig::OPACITY.damping_ratio() >= 1.0);
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut s = SmoothedValue::new(0.0, SpringConfig::TILT);
        s.set_target(10.0);
        s.tick(0.0);
        assert_eq!(s.current(), 0.0);
        assert_eq!(s.velocity(), 0.0);
    }

    #[test]
    fn non_finite_dt_is_ignored() {
        let mut s = SmoothedValue::new(1.0, SpringConfig::TILT);
        s.set_target(2.0);
        s.tick(f32::NAN);
        assert_eq!(s.current(), 1.0);
    }
}
