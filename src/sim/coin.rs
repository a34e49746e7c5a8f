//! Collectible coin and its spawner

use glam::Vec2;
use rand::Rng;

use super::state::PlayArea;
use crate::tuning::CoinTuning;

/// The single collectible on the field
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub pos: Vec2,
    pub radius: f32,
}

impl Coin {
    /// A coin placed at a fresh random spot
    pub fn spawn<R: Rng + ?Sized>(area: PlayArea, tuning: &CoinTuning, rng: &mut R) -> Self {
        Self {
            pos: spawn_position(area, tuning.radius, tuning.padding, rng),
            radius: tuning.radius,
        }
    }

    /// Move to a new random spot. Returns where the coin was, so effects can
    /// start from the old location.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        area: PlayArea,
        tuning: &CoinTuning,
        rng: &mut R,
    ) -> Vec2 {
        let previous = self.pos;
        self.pos = spawn_position(area, self.radius, tuning.padding, rng);
        previous
    }
}

/// Uniform random position with `radius + padding` clearance from every edge
pub fn spawn_position<R: Rng + ?Sized>(
    area: PlayArea,
    radius: f32,
    padding: f32,
    rng: &mut R,
) -> Vec2 {
    let margin = radius + padding;
    let center = area.center();
    Vec2::new(
        spawn_axis(margin, area.width - margin, center.x, rng),
        spawn_axis(margin, area.height - margin, center.y, rng),
    )
}

/// `fallback` is used when the area is too small to honour the margin on both sides
fn spawn_axis<R: Rng + ?Sized>(lo: f32, hi: f32, fallback: f32, rng: &mut R) -> f32 {
    if hi > lo {
        rng.random_range(lo..=hi)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_respawn_returns_previous_position() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = CoinTuning::default();
        let area = PlayArea::new(800.0, 600.0);
        let mut coin = Coin::spawn(area, &tuning, &mut rng);
        let before = coin.pos;
        let previous = coin.respawn(area, &tuning, &mut rng);
        assert_eq!(previous, before);
        assert_ne!(coin.pos, before);
    }

    #[test]
    fn test_tiny_area_spawns_at_center() {
        let mut rng = Pcg32::seed_from_u64(1);
        let pos = spawn_position(PlayArea::new(40.0, 30.0), 15.0, 10.0, &mut rng);
        assert_eq!(pos, Vec2::new(20.0, 15.0));
    }

    #[test]
    fn test_spawn_covers_the_padded_rectangle() {
        let mut rng = Pcg32::seed_from_u64(3);
        let area = PlayArea::new(800.0, 600.0);
        let (mut min_x, mut max_x) = (f32::MAX, f32::MIN);
        for _ in 0..2000 {
            let pos = spawn_position(area, 15.0, 10.0, &mut rng);
            min_x = min_x.min(pos.x);
            max_x = max_x.max(pos.x);
        }
        assert!(min_x < 60.0);
        assert!(max_x > 740.0);
    }

    proptest! {
        #[test]
        fn prop_spawn_stays_inside_padding(
            seed in any::<u64>(),
            width in 60.0f32..4000.0,
            height in 60.0f32..4000.0,
        ) {
            let tuning = CoinTuning::default();
            let margin = tuning.radius + tuning.padding;
            let mut rng = Pcg32::seed_from_u64(seed);
            let area = PlayArea::new(width, height);
            for _ in 0..16 {
                let pos = spawn_position(area, tuning.radius, tuning.padding, &mut rng);
                prop_assert!(pos.x >= margin && pos.x <= width - margin);
                prop_assert!(pos.y >= margin && pos.y <= height - margin);
            }
        }
    }
}
