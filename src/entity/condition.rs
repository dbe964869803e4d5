//! Per-actor condition tracking: nutrition, thirst, exhaustion
//!
//! A `ConditionState` is exclusively owned by one actor and mutated only
//! through its own operations. Decay is lazy and time-driven: reads that
//! care about freshness run `update` first, which consumes the elapsed
//! tick window exactly once. All numeric inputs clamp into range rather
//! than error.

use serde::{Deserialize, Serialize};

use crate::core::calendar::TimeSource;
use crate::core::config::ConditionConfig;
use crate::core::types::Tick;

/// Nutrient level bounds
pub const MIN_NUTRIENT: f32 = 0.0;
pub const MAX_NUTRIENT: f32 = 100.0;

/// Minimum ticks between successful drinks (one sip per 1.5 sim-seconds)
const DRINK_COOLDOWN_TICKS: Tick = 30;
/// Drinking is refused once thirst is nearly topped off
const DRINK_CUTOFF: f32 = 95.0;
/// Passive thirst drain: 1 point per this many ticks at modifier 1.0
const THIRST_DRAIN_DIVISOR: f32 = 240.0;
/// One exhaustion point burns off over this many ticks
const EXHAUSTION_TICKS_PER_POINT: f32 = 20.0;
/// Extra thirst drained per tick of exhaustion burned
const EXHAUSTION_THIRST_DRAIN: f32 = 0.025;
/// Skill scale ceiling (percent basis for the vitality computation)
const MAX_SKILL: f32 = 100.0;

/// Tracked nutrient kinds
///
/// Closed enumeration; levels live in a fixed array indexed by `as usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    Grain,
    Fruit,
    Vegetables,
    Protein,
    Dairy,
}

impl Nutrient {
    pub const COUNT: usize = 5;
    pub const ALL: [Nutrient; Nutrient::COUNT] = [
        Nutrient::Grain,
        Nutrient::Fruit,
        Nutrient::Vegetables,
        Nutrient::Protein,
        Nutrient::Dairy,
    ];

    /// Lowercase name used as the snapshot key
    pub fn name(&self) -> &'static str {
        match self {
            Nutrient::Grain => "grain",
            Nutrient::Fruit => "fruit",
            Nutrient::Vegetables => "vegetables",
            Nutrient::Protein => "protein",
            Nutrient::Dairy => "dairy",
        }
    }

    /// Baseline drain in points per tick, before the global decay modifier
    ///
    /// Tuned against a 24 000-tick day: fruit spoils from the body fastest
    /// (~2 weeks from full to empty), protein lingers longest (~5 weeks).
    pub fn decay_rate(&self) -> f32 {
        match self {
            Nutrient::Grain => 0.0002,
            Nutrient::Fruit => 0.0003,
            Nutrient::Vegetables => 0.00025,
            Nutrient::Protein => 0.00012,
            Nutrient::Dairy => 0.00018,
        }
    }
}

/// Placeholder skill block feeding the vitality computation
///
/// Skill tracking is not implemented yet; this stub reports a fixed 100%
/// average behind the same interface the nutrient average uses, so a real
/// skill table can replace it without changing `max_vitality`'s contract.
/// Intentionally absent from the snapshot schema.
#[derive(Debug, Clone, Default)]
pub struct SkillSet;

impl SkillSet {
    // TODO: replace with a learned-skill table once the skill system lands
    pub fn average(&self) -> f32 {
        MAX_SKILL
    }
}

/// Depletable condition record for a single actor
#[derive(Debug, Clone)]
pub struct ConditionState {
    /// Levels indexed by `Nutrient as usize`, each in [MIN_NUTRIENT, MAX_NUTRIENT]
    nutrients: [f32; Nutrient::COUNT],
    /// 0 = parched, 100 = sated
    thirst: f32,
    /// 0 = rested, 100 = spent; burns off over time, draining extra thirst
    exhaustion: f32,
    last_update_tick: Tick,
    last_drink_tick: Tick,
    skills: SkillSet,
}

impl ConditionState {
    /// Fresh state for a newly observed actor: 80% nutrient saturation,
    /// thirst at 70, no exhaustion, both clocks stamped from `time`.
    pub fn new(time: &impl TimeSource) -> Self {
        let now = time.current_tick();
        Self {
            nutrients: [0.8 * MAX_NUTRIENT; Nutrient::COUNT],
            thirst: 70.0,
            exhaustion: 0.0,
            last_update_tick: now,
            last_drink_tick: now,
            skills: SkillSet,
        }
    }

    /// Restore a persisted actor
    pub fn from_snapshot(snapshot: &ConditionSnapshot) -> Self {
        let mut state = Self {
            nutrients: [0.0; Nutrient::COUNT],
            thirst: 0.0,
            exhaustion: 0.0,
            last_update_tick: 0,
            last_drink_tick: 0,
            skills: SkillSet,
        };
        state.restore(snapshot);
        state
    }

    /// Current level for `kind`, after applying pending decay
    pub fn nutrient(&mut self, config: &ConditionConfig, time: &impl TimeSource, kind: Nutrient) -> f32 {
        self.update(config, time);
        self.nutrients[kind as usize]
    }

    /// Store a level directly, clamped. No time update.
    pub fn set_nutrient(&mut self, kind: Nutrient, value: f32) {
        self.nutrients[kind as usize] = value.clamp(MIN_NUTRIENT, MAX_NUTRIENT);
    }

    /// Apply pending decay, then adjust the level by `delta`, clamped
    pub fn add_nutrient(
        &mut self,
        config: &ConditionConfig,
        time: &impl TimeSource,
        kind: Nutrient,
        delta: f32,
    ) {
        self.update(config, time);
        self.set_nutrient(kind, self.nutrients[kind as usize] + delta);
    }

    pub fn thirst(&self) -> f32 {
        self.thirst
    }

    pub fn set_thirst(&mut self, value: f32) {
        self.thirst = value.clamp(0.0, 100.0);
    }

    pub fn exhaustion(&self) -> f32 {
        self.exhaustion
    }

    pub fn set_exhaustion(&mut self, value: f32) {
        self.exhaustion = value.clamp(0.0, 100.0);
    }

    pub fn add_exhaustion(&mut self, delta: f32) {
        self.set_exhaustion(self.exhaustion + delta);
    }

    /// Consume the elapsed tick window and apply decay
    ///
    /// Idempotent per call boundary: the window is consumed exactly once,
    /// so a second call at the same tick is a no-op. A rewound clock
    /// saturates the window to zero rather than crediting resources; the
    /// update clock restamps to `now` either way.
    pub fn update(&mut self, config: &ConditionConfig, time: &impl TimeSource) {
        let now = time.current_tick();
        let elapsed = now.saturating_sub(self.last_update_tick) as f32;

        for kind in Nutrient::ALL {
            let drained = kind.decay_rate() * config.decay_modifier * elapsed;
            self.set_nutrient(kind, self.nutrients[kind as usize] - drained);
        }

        // Passive thirst drain for normal living
        self.thirst -= config.thirst_modifier * elapsed / THIRST_DRAIN_DIVISOR;

        if self.exhaustion > 0.0 {
            // Exhaustion converts to a tick budget; whatever portion of the
            // window it covers drains extra thirst.
            let budget_ticks = self.exhaustion * EXHAUSTION_TICKS_PER_POINT;
            let consumed_ticks = if budget_ticks < elapsed {
                self.exhaustion = 0.0;
                budget_ticks
            } else {
                self.exhaustion -= elapsed / EXHAUSTION_TICKS_PER_POINT;
                elapsed
            };
            self.thirst -= EXHAUSTION_THIRST_DRAIN * consumed_ticks;
        }

        if self.thirst < 0.0 {
            self.thirst = 0.0;
        }
        self.last_update_tick = now;
    }

    /// Attempt to restore `amount` thirst
    ///
    /// Refused (false, no mutation) within the sip cooldown or once thirst
    /// is above the top-off cutoff. The caller must check the result to
    /// tell "no effect" from "thirst restored".
    pub fn drink(&mut self, time: &impl TimeSource, amount: f32) -> bool {
        let now = time.current_tick();
        let elapsed = now.saturating_sub(self.last_drink_tick);
        if elapsed < DRINK_COOLDOWN_TICKS || self.thirst > DRINK_CUTOFF {
            return false;
        }
        self.last_drink_tick = now;
        self.set_thirst(self.thirst + amount);
        true
    }

    fn nutrient_average(&self) -> f32 {
        self.nutrients.iter().sum::<f32>() / Nutrient::COUNT as f32
    }

    /// Derived vitality capacity; never stored, always recomputed
    pub fn max_vitality(&self, config: &ConditionConfig) -> f32 {
        let nutrient_percent = self.nutrient_average() / MAX_NUTRIENT;
        let skill_percent = self.skills.average() / MAX_SKILL;
        let combined = (nutrient_percent + skill_percent) / 2.0;
        vitality_curve(combined, config)
    }

    /// Flat persisted view of this state, after applying pending decay
    pub fn snapshot(&mut self, config: &ConditionConfig, time: &impl TimeSource) -> ConditionSnapshot {
        self.update(config, time);
        ConditionSnapshot {
            grain: self.nutrients[Nutrient::Grain as usize],
            fruit: self.nutrients[Nutrient::Fruit as usize],
            vegetables: self.nutrients[Nutrient::Vegetables as usize],
            protein: self.nutrients[Nutrient::Protein as usize],
            dairy: self.nutrients[Nutrient::Dairy as usize],
            thirst: self.thirst,
            exhaustion: self.exhaustion,
            last_update_tick: self.last_update_tick,
            last_drink_tick: self.last_drink_tick,
        }
    }

    /// Overwrite all fields from a snapshot, clamping on load
    pub fn restore(&mut self, snapshot: &ConditionSnapshot) {
        self.set_nutrient(Nutrient::Grain, snapshot.grain);
        self.set_nutrient(Nutrient::Fruit, snapshot.fruit);
        self.set_nutrient(Nutrient::Vegetables, snapshot.vegetables);
        self.set_nutrient(Nutrient::Protein, snapshot.protein);
        self.set_nutrient(Nutrient::Dairy, snapshot.dairy);
        self.set_thirst(snapshot.thirst);
        self.set_exhaustion(snapshot.exhaustion);
        self.last_update_tick = snapshot.last_update_tick;
        self.last_drink_tick = snapshot.last_drink_tick;
    }
}

/// Two-segment piecewise-linear map from combined condition percent to
/// vitality capacity
///
/// Anchored at `min_vitality` for percent <= 0.1, `base_vitality` at 0.4,
/// `max_vitality` for percent >= 1.0, linear within each segment. Safe as
/// long as the config anchors are strictly ordered (`validate` enforces
/// this at load).
pub fn vitality_curve(combined_percent: f32, config: &ConditionConfig) -> f32 {
    const MIN_THRESHOLD: f32 = 0.1;
    const BASE_THRESHOLD: f32 = 0.4;
    const MAX_THRESHOLD: f32 = 1.0;

    if combined_percent < BASE_THRESHOLD {
        if combined_percent <= MIN_THRESHOLD {
            return config.min_vitality;
        }
        let span = BASE_THRESHOLD - MIN_THRESHOLD;
        let rise = config.base_vitality - config.min_vitality;
        config.min_vitality + (combined_percent - MIN_THRESHOLD) * rise / span
    } else {
        if combined_percent >= MAX_THRESHOLD {
            return config.max_vitality;
        }
        let span = MAX_THRESHOLD - BASE_THRESHOLD;
        let rise = config.max_vitality - config.base_vitality;
        config.base_vitality + (combined_percent - BASE_THRESHOLD) * rise / span
    }
}

/// Flat persisted form of a `ConditionState`
///
/// One field per nutrient by name plus thirst, exhaustion, and both
/// clocks. Every field defaults so partial snapshots load as zero.
/// Skills are deliberately not part of the schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionSnapshot {
    #[serde(default)]
    pub grain: f32,
    #[serde(default)]
    pub fruit: f32,
    #[serde(default)]
    pub vegetables: f32,
    #[serde(default)]
    pub protein: f32,
    #[serde(default)]
    pub dairy: f32,
    #[serde(default)]
    pub thirst: f32,
    #[serde(default)]
    pub exhaustion: f32,
    #[serde(default)]
    pub last_update_tick: Tick,
    #[serde(default)]
    pub last_drink_tick: Tick,
}
