//! Data-driven game balance
//!
//! Every magic number of the game lives in one of these tables. The host may
//! override any subset of them with a JSON document; missing fields keep
//! their defaults. All rates are per simulation tick (see `consts::SIM_HZ`).

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::consts::MAX_PARTICLES;

/// Why a tuning document was rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("malformed tuning document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must lie in {range} (got {value})")]
    OutOfRange {
        field: &'static str,
        range: &'static str,
        value: f32,
    },
    #[error("{field} must be finite (got {value})")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must be at most {max} (got {value})")]
    TooMany {
        field: &'static str,
        max: usize,
        value: usize,
    },
    #[error("{field} range is inverted ({min} > {max})")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
}

/// Closed interval `[min, max]` sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spread {
    pub min: f32,
    pub max: f32,
}

impl Spread {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform draw within the interval. A degenerate interval yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.random_range(self.min..=self.max)
        } else {
            self.min
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, field: &'static str) -> Result<(), TuningError> {
        finite(field, self.min)?;
        finite(field, self.max)?;
        if self.min > self.max {
            return Err(TuningError::InvertedRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        if self.min < 0.0 {
            return Err(TuningError::OutOfRange {
                field,
                range: "[0, inf)",
                value: self.min,
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NotPositive { field, value })
    }
}

/// Open unit interval, used for multiplicative decay factors
fn unit_factor(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(TuningError::OutOfRange {
            field,
            range: "(0, 1)",
            value,
        })
    }
}

/// Player body physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyTuning {
    pub radius: f32,
    /// Velocity added per tick while a direction is held
    pub acceleration: f32,
    /// Velocity multiplier applied every tick (drag)
    pub friction: f32,
    /// Per-axis velocity cap
    pub max_speed: f32,
    /// Fraction of speed kept (and reversed) on a wall bounce
    pub restitution: f32,
    pub start: [f32; 2],
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            radius: 25.0,
            acceleration: 0.5,
            friction: 0.95,
            max_speed: 10.0,
            restitution: 0.5,
            start: [100.0, 100.0],
        }
    }
}

impl BodyTuning {
    fn validate(&self) -> Result<(), TuningError> {
        positive("body.radius", self.radius)?;
        positive("body.acceleration", self.acceleration)?;
        positive("body.max_speed", self.max_speed)?;
        unit_factor("body.friction", self.friction)?;
        finite("body.start", self.start[0])?;
        finite("body.start", self.start[1])?;
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(TuningError::OutOfRange {
                field: "body.restitution",
                range: "[0, 1]",
                value: self.restitution,
            });
        }
        Ok(())
    }
}

/// Collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinTuning {
    pub radius: f32,
    /// Extra gap kept between a fresh coin and the play-area edge
    pub padding: f32,
}

impl Default for CoinTuning {
    fn default() -> Self {
        Self {
            radius: 15.0,
            padding: 10.0,
        }
    }
}

impl CoinTuning {
    fn validate(&self) -> Result<(), TuningError> {
        positive("coin.radius", self.radius)?;
        finite("coin.padding", self.padding)?;
        if self.padding < 0.0 {
            return Err(TuningError::OutOfRange {
                field: "coin.padding",
                range: "[0, inf)",
                value: self.padding,
            });
        }
        Ok(())
    }
}

/// One particle burst flavour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstTuning {
    /// Particles spawned per activation
    pub count: usize,
    pub speed: Spread,
    pub size: Spread,
    /// Opacity every particle starts with, in (0, 1]
    pub start_alpha: f32,
    /// Opacity lost per tick
    pub fade: f32,
    /// Size multiplier applied every tick
    pub shrink: f32,
    /// RGB, 0-255
    pub color: [u8; 3],
}

impl Default for BurstTuning {
    fn default() -> Self {
        Self::player()
    }
}

impl BurstTuning {
    /// Gold sparks thrown from where the coin was
    pub fn coin() -> Self {
        Self {
            count: 30,
            speed: Spread::new(4.0, 7.0),
            size: Spread::new(5.0, 8.0),
            start_alpha: 1.0,
            fade: 0.02,
            shrink: 0.95,
            color: [255, 223, 0],
        }
    }

    /// Cyan ring around the player
    pub fn player() -> Self {
        Self {
            count: 30,
            speed: Spread::new(5.0, 8.0),
            size: Spread::new(8.0, 11.0),
            start_alpha: 1.0,
            fade: 0.02,
            shrink: 0.95,
            color: [0, 255, 255],
        }
    }

    /// RGBA in the 0-1 range the renderer expects
    pub fn rgba(&self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.color;
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            alpha.clamp(0.0, 1.0),
        ]
    }

    /// Upper bound on how many ticks a burst stays alive
    pub fn lifetime_ticks(&self) -> u32 {
        (self.start_alpha / self.fade).ceil() as u32
    }

    fn validate(&self, fields: &BurstFields) -> Result<(), TuningError> {
        if self.count > MAX_PARTICLES {
            return Err(TuningError::TooMany {
                field: fields.count,
                max: MAX_PARTICLES,
                value: self.count,
            });
        }
        self.speed.check(fields.speed)?;
        self.size.check(fields.size)?;
        if !(self.start_alpha > 0.0 && self.start_alpha <= 1.0) {
            return Err(TuningError::OutOfRange {
                field: fields.start_alpha,
                range: "(0, 1]",
                value: self.start_alpha,
            });
        }
        positive(fields.fade, self.fade)?;
        unit_factor(fields.shrink, self.shrink)
    }
}

/// Field names reported by burst validation errors
struct BurstFields {
    count: &'static str,
    speed: &'static str,
    size: &'static str,
    start_alpha: &'static str,
    fade: &'static str,
    shrink: &'static str,
}

const COIN_BURST_FIELDS: BurstFields = BurstFields {
    count: "coin_burst.count",
    speed: "coin_burst.speed",
    size: "coin_burst.size",
    start_alpha: "coin_burst.start_alpha",
    fade: "coin_burst.fade",
    shrink: "coin_burst.shrink",
};

const PLAYER_BURST_FIELDS: BurstFields = BurstFields {
    count: "player_burst.count",
    speed: "player_burst.speed",
    size: "player_burst.size",
    start_alpha: "player_burst.start_alpha",
    fade: "player_burst.fade",
    shrink: "player_burst.shrink",
};

/// Overlay `patch` onto `base`, recursing through objects
fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                merge(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, patch) => *base = patch,
    }
}

/// Complete balance sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub body: BodyTuning,
    pub coin: CoinTuning,
    pub coin_burst: BurstTuning,
    pub player_burst: BurstTuning,
    /// Phase advance per tick of the player's glow
    pub pulse_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            body: BodyTuning::default(),
            coin: CoinTuning::default(),
            coin_burst: BurstTuning::coin(),
            player_burst: BurstTuning::player(),
            pulse_speed: 0.05,
        }
    }
}

impl Tuning {
    /// Parse and validate a (possibly partial) JSON tuning document. Fields
    /// left out at any depth keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Tuning::default())?;
        merge(&mut merged, overrides);
        let tuning: Tuning = serde_json::from_value(merged)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        self.body.validate()?;
        self.coin.validate()?;
        self.coin_burst.validate(&COIN_BURST_FIELDS)?;
        self.player_burst.validate(&PLAYER_BURST_FIELDS)?;
        finite("pulse_speed", self.pulse_speed)?;
        if self.pulse_speed < 0.0 {
            return Err(TuningError::OutOfRange {
                field: "pulse_speed",
                range: "[0, inf)",
                value: self.pulse_speed,
            });
        }
        Ok(())
    }
}
