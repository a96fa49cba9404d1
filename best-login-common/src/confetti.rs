//! Confetti particle simulation
//!
//! Particles are launched from both bottom corners toward the middle of the
//! screen, slowed by drag and pulled down by gravity. A particle retires once
//! it falls back below the floor. Units are pixels and milliseconds.

use crate::config::ConfettiConfig;

const GRAVITY: f64 = 0.0022;
const DRAG_PER_MS: f64 = 0.9995;
const FALLBACK_COLOR: &str = "#ffffff";

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    color: usize,
}

/// One burst of confetti on a `width` x `height` surface
#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    particles: Vec<Particle>,
    colors: Vec<String>,
    width: f64,
    height: f64,
}

impl ConfettiBurst {
    pub fn new(config: &ConfettiConfig, width: f64, height: f64, rng: &mut fastrand::Rng) -> Self {
        let colors = if config.colors.is_empty() {
            vec![FALLBACK_COLOR.to_string()]
        } else {
            config.colors.clone()
        };

        // Launch speed scales with the surface so bursts peak around mid-height
        let lift = (2.0 * GRAVITY * height * 0.75).sqrt();

        let particles = (0..config.count)
            .map(|i| {
                let from_left = i % 2 == 0;
                let vx = (0.15 + rng.f64() * 0.45) * width / 1000.0;
                let vy = -lift * (0.7 + rng.f64() * 0.4);
                Particle {
                    x: if from_left { 0.0 } else { width },
                    y: height,
                    vx: if from_left { vx } else { -vx },
                    vy,
                    radius: config.radius * (0.6 + rng.f64() * 0.6),
                    color: rng.usize(..colors.len()),
                }
            })
            .collect();

        Self {
            particles,
            colors,
            width,
            height,
        }
    }

    /// Advance the simulation by `dt_ms` milliseconds
    pub fn step(&mut self, dt_ms: f64) {
        let drag = DRAG_PER_MS.powf(dt_ms);
        for particle in &mut self.particles {
            particle.vy += GRAVITY * dt_ms;
            particle.vx *= drag;
            particle.vy *= drag;
            particle.x += particle.vx * dt_ms;
            particle.y += particle.vy * dt_ms;
        }

        let floor = self.height;
        self.particles
            .retain(|particle| particle.vy <= 0.0 || particle.y - particle.radius <= floor);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn color_of(&self, particle: &Particle) -> &str {
        &self.colors[particle.color]
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 16.0;

    fn burst(count: usize) -> ConfettiBurst {
        let config = ConfettiConfig {
            count,
            ..ConfettiConfig::default()
        };
        ConfettiBurst::new(&config, 1280.0, 720.0, &mut fastrand::Rng::with_seed(3))
    }

    #[test]
    fn test_spawns_configured_count() {
        let burst = burst(150);
        assert_eq!(burst.particles().len(), 150);
        assert!(!burst.is_finished());
    }

    #[test]
    fn test_launches_from_both_corners_upward() {
        let burst = burst(10);
        let (width, height) = burst.size();

        for particle in burst.particles() {
            assert!(particle.x == 0.0 || particle.x == width);
            assert_eq!(particle.y, height);
            assert!(particle.vy < 0.0);
            assert!(particle.vx.signum() == if particle.x == 0.0 { 1.0 } else { -1.0 });
        }
    }

    #[test]
    fn test_colors_come_from_palette() {
        let burst = burst(50);
        let palette = ConfettiConfig::default().colors;

        for particle in burst.particles() {
            assert!(palette.iter().any(|c| c == burst.color_of(particle)));
        }
    }

    #[test]
    fn test_empty_palette_uses_fallback() {
        let config = ConfettiConfig {
            colors: Vec::new(),
            count: 3,
            ..ConfettiConfig::default()
        };
        let burst = ConfettiBurst::new(&config, 100.0, 100.0, &mut fastrand::Rng::with_seed(1));

        for particle in burst.particles() {
            assert_eq!(burst.color_of(particle), FALLBACK_COLOR);
        }
    }

    #[test]
    fn test_burst_finishes() {
        let mut burst = burst(150);

        let mut frames = 0;
        while !burst.is_finished() {
            burst.step(FRAME_MS);
            frames += 1;
            assert!(frames < 2_000, "confetti never settled");
        }
    }

    #[test]
    fn test_particles_rise_before_falling() {
        let mut burst = burst(1);
        let start = burst.particles()[0].y;

        burst.step(FRAME_MS);
        assert!(burst.particles()[0].y < start);
    }

    #[test]
    fn test_zero_particles_is_finished() {
        assert!(burst(0).is_finished());
    }
}
