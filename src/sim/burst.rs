//! Particle bursts
//!
//! A pool is either idle (no particles) or playing one burst. Activation
//! replaces whatever was playing with a fresh ring of particles flying out
//! from the origin; each tick they drift, fade and shrink until the last one
//! is gone and the pool goes idle again.

use glam::Vec2;
use rand::Rng;

use crate::tuning::BurstTuning;

/// A single spark
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Opacity, 0-1. The particle dies when this reaches zero.
    pub alpha: f32,
}

impl Particle {
    fn step(&mut self, fade: f32, shrink: f32) {
        self.pos += self.vel;
        self.alpha -= fade;
        self.size *= shrink;
    }

    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }
}

/// Independently configured particle pool
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    active: bool,
    tuning: BurstTuning,
}

impl ParticlePool {
    pub fn new(tuning: BurstTuning) -> Self {
        Self {
            particles: Vec::with_capacity(tuning.count),
            active: false,
            tuning,
        }
    }

    /// Start a burst at `origin`, discarding any burst still playing
    pub fn activate<R: Rng + ?Sized>(&mut self, origin: Vec2, rng: &mut R) {
        self.particles.clear();
        self.active = true;

        for _ in 0..self.tuning.count {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = self.tuning.speed.sample(rng);
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::from_angle(angle) * speed,
                size: self.tuning.size.sample(rng),
                alpha: self.tuning.start_alpha,
            });
        }
    }

    /// Move, fade and shrink every particle, then drop the dead ones.
    /// Does nothing while idle.
    pub fn advance(&mut self) {
        if !self.active {
            return;
        }

        let (fade, shrink) = (self.tuning.fade, self.tuning.shrink);
        for particle in &mut self.particles {
            particle.step(fade, shrink);
        }
        self.particles.retain(Particle::is_alive);

        if self.particles.is_empty() {
            self.active = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Render colour of a particle from this pool
    pub fn color_of(&self, particle: &Particle) -> [f32; 4] {
        self.tuning.rgba(particle.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Spread;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_activate_spawns_full_burst() {
        let mut pool = ParticlePool::new(BurstTuning::player());
        let origin = Vec2::new(200.0, 150.0);
        pool.activate(origin, &mut rng());

        assert!(pool.is_active());
        assert_eq!(pool.len(), 30);
        let tuning = BurstTuning::player();
        for p in pool.particles() {
            assert_eq!(p.pos, origin);
            assert_eq!(p.alpha, 1.0);
            assert!(tuning.size.contains(p.size));
            let speed = p.vel.length();
            assert!(speed >= tuning.speed.min - 1e-4 && speed <= tuning.speed.max + 1e-4);
        }
    }

    #[test]
    fn test_activate_replaces_running_burst() {
        let mut rng = rng();
        let mut pool = ParticlePool::new(BurstTuning::coin());
        pool.activate(Vec2::ZERO, &mut rng);
        for _ in 0..10 {
            pool.advance();
        }
        pool.activate(Vec2::new(50.0, 50.0), &mut rng);
        assert_eq!(pool.len(), 30);
        assert!(pool.particles().iter().all(|p| p.pos == Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn test_advance_moves_fades_and_shrinks() {
        let mut pool = ParticlePool::new(BurstTuning::player());
        pool.activate(Vec2::ZERO, &mut rng());
        let before = pool.particles().to_vec();
        pool.advance();
        for (old, new) in before.iter().zip(pool.particles()) {
            assert_eq!(new.pos, old.pos + old.vel);
            assert!((new.alpha - (old.alpha - 0.02)).abs() < 1e-6);
            assert!((new.size - old.size * 0.95).abs() < 1e-5);
        }
    }

    #[test]
    fn test_advance_on_idle_pool_is_noop() {
        let mut pool = ParticlePool::new(BurstTuning::coin());
        pool.advance();
        assert!(!pool.is_active());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_faint_particle_dies_after_one_tick() {
        let tuning = BurstTuning {
            count: 1,
            start_alpha: 0.05,
            fade: 0.2,
            ..BurstTuning::coin()
        };
        let mut pool = ParticlePool::new(tuning);
        pool.activate(Vec2::ZERO, &mut rng());
        assert_eq!(pool.len(), 1);
        pool.advance();
        assert!(pool.is_empty());
        assert!(!pool.is_active());
    }

    #[test]
    fn test_pool_drains_monotonically() {
        for tuning in [BurstTuning::coin(), BurstTuning::player()] {
            let limit = tuning.lifetime_ticks() + 1;
            let mut pool = ParticlePool::new(tuning);
            pool.activate(Vec2::ZERO, &mut rng());

            let mut last = pool.len();
            let mut ticks = 0;
            while pool.is_active() {
                pool.advance();
                ticks += 1;
                assert!(pool.len() <= last);
                last = pool.len();
                assert!(ticks <= limit, "burst outlived its fade");
            }
            assert!(pool.is_empty());
        }
    }

    #[test]
    fn test_uneven_alphas_retained_in_order() {
        let mut pool = ParticlePool::new(BurstTuning {
            count: 0,
            speed: Spread::new(0.0, 0.0),
            ..BurstTuning::player()
        });
        pool.active = true;
        for (i, alpha) in [0.01, 0.5, 0.015, 0.8, 0.01].into_iter().enumerate() {
            pool.particles.push(Particle {
                pos: Vec2::new(i as f32, 0.0),
                vel: Vec2::ZERO,
                size: 5.0,
                alpha,
            });
        }
        pool.advance();
        // Adjacent dead particles must not shield each other from removal
        let xs: Vec<f32> = pool.particles().iter().map(|p| p.pos.x).collect();
        assert_eq!(xs, vec![1.0, 3.0]);
        assert!(pool.is_active());
    }

    #[test]
    fn test_color_uses_particle_alpha() {
        let mut pool = ParticlePool::new(BurstTuning::player());
        pool.activate(Vec2::ZERO, &mut rng());
        pool.advance();
        let p = &pool.particles()[0];
        let rgba = pool.color_of(p);
        assert_eq!(&rgba[..3], &[0.0, 1.0, 1.0]);
        assert_eq!(rgba[3], p.alpha);
    }
}
