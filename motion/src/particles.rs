//! Ambient particle network drawn behind the page.
//!
//! Particles drift at constant velocity and bounce off the viewport edges.
//! Each frame draws every particle plus a faint link to every later particle
//! within range, fainter with distance.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::Rng;

use crate::config::ParticleConfig;
use crate::input::Point;

/// One drifting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move one step, then reverse velocity on any axis where the new
    /// position is outside `[0, extent]`. Positions are not clamped.
    pub fn integrate(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// An RGB color with alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub alpha: f64,
}

impl Rgba {
    #[must_use]
    pub fn new(rgb: [u8; 3], alpha: f64) -> Self {
        Self { rgb, alpha }
    }

    /// CSS `rgba(...)` string.
    #[must_use]
    pub fn css(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgba({r}, {g}, {b}, {})", self.alpha)
    }
}

/// A 2D drawing target.
pub trait Surface {
    type Error;

    /// Erase a `width` x `height` area from the origin.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<(), Self::Error>;

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) -> Result<(), Self::Error>;
}

/// The particle set and the extents it lives in.
#[derive(Debug, Clone)]
pub struct ParticleField {
    pub config: ParticleConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    #[must_use]
    pub fn new(config: ParticleConfig) -> Self {
        Self { config, width: 0.0, height: 0.0, particles: Vec::new() }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Adopt new viewport extents. Existing particles are left in place; call
    /// [`ParticleField::init_particles`] to regenerate them.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Replace the whole set with `config.count` fresh particles.
    pub fn init_particles<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let c = &self.config;
        let (w, h) = (self.width, self.height);
        self.particles = (0..c.count)
            .map(|_| Particle {
                x: rng.random::<f64>() * w,
                y: rng.random::<f64>() * h,
                vx: (rng.random::<f64>() - 0.5) * 2.0 * c.max_speed,
                vy: (rng.random::<f64>() - 0.5) * 2.0 * c.max_speed,
                radius: c.min_radius + rng.random::<f64>() * (c.max_radius - c.min_radius),
            })
            .collect();
    }

    /// Stroke alpha for a link of length `distance`, or `None` if the link is
    /// out of range or would be invisible.
    #[must_use]
    pub fn link_alpha(&self, distance: f64) -> Option<f64> {
        if distance >= self.config.link_distance {
            return None;
        }
        let alpha = self.config.link_base_alpha - distance / self.config.link_alpha_falloff;
        (alpha > 0.0).then_some(alpha)
    }

    /// Advance one step and draw it.
    ///
    /// Particles are processed in index order; a particle's links are drawn
    /// right after it moves, so later particles are linked at their positions
    /// from the previous frame.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `surface`.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear(self.width, self.height)?;

        let fill = Rgba::new(self.config.rgb, self.config.fill_alpha);
        for i in 0..self.particles.len() {
            self.particles[i].integrate(self.width, self.height);
            let p = self.particles[i];
            surface.fill_circle(p.position(), p.radius, fill)?;

            for other in &self.particles[i + 1..] {
                let distance = p.position().distance(other.position());
                if let Some(alpha) = self.link_alpha(distance) {
                    let color = Rgba::new(self.config.rgb, alpha);
                    surface.stroke_line(p.position(), other.position(), color, self.config.link_width)?;
                }
            }
        }
        Ok(())
    }
}

/// Running flag for the redraw loop.
///
/// The host requests the next animation frame only while this is running, so
/// regenerating particles never spawns a second loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameLoop {
    running: bool,
}

impl FrameLoop {
    /// Mark the loop running. Returns `true` if it was stopped, meaning the
    /// caller must kick off the first frame.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.running, true)
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
