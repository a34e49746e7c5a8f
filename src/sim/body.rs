//! The player-controlled body

use glam::Vec2;

use super::input::{Direction, InputState};
use super::state::PlayArea;
use crate::tuning::BodyTuning;

/// Player position and velocity (pixels, pixels per tick)
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl PlayerBody {
    pub fn new(tuning: &BodyTuning) -> Self {
        Self {
            pos: Vec2::from_array(tuning.start),
            vel: Vec2::ZERO,
            radius: tuning.radius,
        }
    }

    /// One tick of movement: input acceleration, drag, speed cap, integration
    /// and inelastic wall bounces.
    pub fn advance(&mut self, input: &InputState, area: PlayArea, tuning: &BodyTuning) {
        let accel = tuning.acceleration;
        if input.held(Direction::Up) {
            self.vel.y -= accel;
        }
        if input.held(Direction::Down) {
            self.vel.y += accel;
        }
        if input.held(Direction::Left) {
            self.vel.x -= accel;
        }
        if input.held(Direction::Right) {
            self.vel.x += accel;
        }

        self.vel *= tuning.friction;
        self.clamp_speed(tuning.max_speed);

        self.pos += self.vel;
        self.resolve_walls(area, tuning.restitution);
    }

    /// Clamp each velocity component to `[-max_speed, max_speed]`
    pub fn clamp_speed(&mut self, max_speed: f32) {
        self.vel = self
            .vel
            .clamp(Vec2::splat(-max_speed), Vec2::splat(max_speed));
    }

    /// Push the body back inside the play area, reversing and damping the
    /// velocity on each axis that hit a wall.
    pub fn resolve_walls(&mut self, area: PlayArea, restitution: f32) {
        let (x, vx) = bounce_axis(self.pos.x, self.vel.x, self.radius, area.width, restitution);
        let (y, vy) = bounce_axis(self.pos.y, self.vel.y, self.radius, area.height, restitution);
        self.pos = Vec2::new(x, y);
        self.vel = Vec2::new(vx, vy);
    }
}

fn bounce_axis(mut pos: f32, mut vel: f32, radius: f32, extent: f32, restitution: f32) -> (f32, f32) {
    let max = extent - radius;
    if pos < radius {
        pos = radius;
        vel *= -restitution;
    }
    if pos > max {
        pos = max;
        vel *= -restitution;
    }
    (pos, vel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Key;
    use proptest::prelude::*;

    fn area() -> PlayArea {
        PlayArea::new(800.0, 600.0)
    }

    #[test]
    fn test_idle_body_stays_put() {
        let tuning = BodyTuning::default();
        let mut body = PlayerBody::new(&tuning);
        body.advance(&InputState::new(), area(), &tuning);
        assert_eq!(body.pos, Vec2::new(100.0, 100.0));
        assert_eq!(body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_acceleration_then_friction() {
        let tuning = BodyTuning::default();
        let mut body = PlayerBody::new(&tuning);
        let mut input = InputState::new();
        input.press(Key::D);
        input.press(Key::ArrowUp);
        body.advance(&input, area(), &tuning);
        assert!((body.vel.x - 0.475).abs() < 1e-6);
        assert!((body.vel.y + 0.475).abs() < 1e-6);
        assert!((body.pos.x - 100.475).abs() < 1e-4);
        assert!((body.pos.y - 99.525).abs() < 1e-4);
    }

    #[test]
    fn test_velocity_clamped_to_max_speed() {
        let tuning = BodyTuning::default();
        let mut body = PlayerBody::new(&tuning);
        body.vel = Vec2::new(12.0, -30.0);
        body.clamp_speed(tuning.max_speed);
        assert_eq!(body.vel, Vec2::new(10.0, -10.0));
    }

    #[test]
    fn test_overspeed_clamped_during_advance() {
        let tuning = BodyTuning::default();
        let mut body = PlayerBody::new(&tuning);
        body.pos = Vec2::new(400.0, 300.0);
        body.vel = Vec2::new(12.0, 0.0);
        body.advance(&InputState::new(), area(), &tuning);
        // 12 * 0.95 = 11.4, capped at 10
        assert_eq!(body.vel.x, 10.0);
        assert_eq!(body.pos.x, 410.0);
    }

    #[test]
    fn test_left_wall_bounce() {
        let tuning = BodyTuning::default();
        let mut body = PlayerBody::new(&tuning);
        body.pos = Vec2::new(30.0, 300.0);
        body.vel = Vec2::new(-10.0, 0.0);
        body.advance(&InputState::new(), area(), &tuning);
        assert_eq!(body.pos.x, tuning.radius);
        // -10 * 0.95 = -9.5, reversed at half strength
        assert!((body.vel.x - 4.75).abs() < 1e-6);
    }

    #[test]
    fn test_bottom_right_corner_bounce() {
        let tuning = BodyTuning::default();
        let mut body = PlayerBody::new(&tuning);
        body.pos = Vec2::new(770.0, 570.0);
        body.vel = Vec2::new(10.0, 10.0);
        body.advance(&InputState::new(), area(), &tuning);
        assert_eq!(body.pos, Vec2::new(775.0, 575.0));
        assert!(body.vel.x < 0.0 && body.vel.y < 0.0);
    }

    fn key_strategy() -> impl Strategy<Value = InputState> {
        proptest::array::uniform8(any::<bool>()).prop_map(|flags| {
            let mut input = InputState::new();
            for (key, pressed) in Key::ALL.into_iter().zip(flags) {
                input.set(key, pressed);
            }
            input
        })
    }

    proptest! {
        #[test]
        fn prop_body_stays_in_bounds(
            width in 60.0f32..2000.0,
            height in 60.0f32..2000.0,
            inputs in proptest::collection::vec(key_strategy(), 1..200),
        ) {
            let tuning = BodyTuning::default();
            let area = PlayArea::new(width, height);
            let mut body = PlayerBody::new(&tuning);
            for input in &inputs {
                body.advance(input, area, &tuning);
                prop_assert!(body.pos.x >= tuning.radius);
                prop_assert!(body.pos.x <= width - tuning.radius);
                prop_assert!(body.pos.y >= tuning.radius);
                prop_assert!(body.pos.y <= height - tuning.radius);
                prop_assert!(body.vel.x.abs() <= tuning.max_speed);
                prop_assert!(body.vel.y.abs() <= tuning.max_speed);
            }
        }
    }
}
