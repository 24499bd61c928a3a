//! Parameter definitions and the shared parameter store.
//!
//! Every tunable number in the sketch goes through here: the control panels
//! (DOM sliders on the web, keyboard on native) are generated from
//! [`PARAM_DEFS`], and the render loop snapshots a [`ParameterStore`] once
//! per frame. Writes happen only from UI callbacks, reads only from the
//! per-frame callback, so no ordering beyond the host event loop is needed.

use std::fmt;

/// Identifier for one tunable sketch parameter.
///
/// Discriminants index into [`PARAM_DEFS`] and the store's value array, so
/// the set of store keys is exactly the set of definitions by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamId {
    TimeMultiplier,
    NoiseSize,
    NoiseScale,
    NoiseDetailOctave,
    NoiseDetailFalloff,
    NoiseOffset,
    NumberOfCircles,
}

pub const PARAM_COUNT: usize = 7;

/// Static description of a parameter: display name, range, widget step and
/// default value. All plain numbers.
#[derive(Clone, Copy, Debug)]
pub struct ParamDef {
    pub id: ParamId,
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

/// The one table both control panels are built from.
pub const PARAM_DEFS: [ParamDef; PARAM_COUNT] = [
    ParamDef {
        id: ParamId::TimeMultiplier,
        name: "timeMultiplier",
        min: 0.0,
        max: 1.0,
        step: 0.0001,
        default: 0.0001,
    },
    ParamDef {
        id: ParamId::NoiseSize,
        name: "noiseSize",
        min: 0.0,
        max: 100.0,
        step: 1.0,
        default: 80.0,
    },
    ParamDef {
        id: ParamId::NoiseScale,
        name: "noiseScale",
        min: 0.0,
        max: 10.0,
        step: 0.1,
        default: 5.0,
    },
    ParamDef {
        id: ParamId::NoiseDetailOctave,
        name: "noiseDetailOctave",
        min: 0.0,
        max: 10.0,
        step: 1.0,
        default: 5.0,
    },
    ParamDef {
        id: ParamId::NoiseDetailFalloff,
        name: "noiseDetailFalloff",
        min: 0.0,
        max: 1.0,
        step: 0.05,
        default: 0.5,
    },
    ParamDef {
        id: ParamId::NoiseOffset,
        name: "noiseOffset",
        min: 10.0,
        max: 1000.0,
        step: 10.0,
        default: 100.0,
    },
    ParamDef {
        id: ParamId::NumberOfCircles,
        name: "numberOfCircles",
        min: 1.0,
        max: 10.0,
        step: 1.0,
        default: 3.0,
    },
];

impl ParamId {
    pub const ALL: [ParamId; PARAM_COUNT] = [
        ParamId::TimeMultiplier,
        ParamId::NoiseSize,
        ParamId::NoiseScale,
        ParamId::NoiseDetailOctave,
        ParamId::NoiseDetailFalloff,
        ParamId::NoiseOffset,
        ParamId::NumberOfCircles,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn def(self) -> &'static ParamDef {
        &PARAM_DEFS[self.index()]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Name lookup for DOM wiring. Unknown names are not an error; callers
    /// drop `None` silently.
    pub fn from_name(name: &str) -> Option<ParamId> {
        Self::ALL.iter().copied().find(|id| id.name() == name)
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared mapping from parameter to current numeric value, read once per
/// rendered frame by the drawing routine.
///
/// Seeded from the definition defaults at startup, mutated in place on every
/// control change, and alive for the process/page lifetime. Values stay
/// within `[min, max]` only as far as the controls themselves clamp; nothing
/// here validates a write.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterStore {
    values: [f32; PARAM_COUNT],
}

impl ParameterStore {
    pub fn new() -> Self {
        let mut values = [0.0; PARAM_COUNT];
        for def in &PARAM_DEFS {
            values[def.id.index()] = def.default;
        }
        Self { values }
    }

    #[inline]
    pub fn get(&self, id: ParamId) -> f32 {
        self.values[id.index()]
    }

    #[inline]
    pub fn set(&mut self, id: ParamId, value: f32) {
        self.values[id.index()] = value;
    }

    /// Restore every parameter to its declared default.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Move `id` by `steps` widget increments, clamped to the definition
    /// range the way a range input clamps its value.
    pub fn nudge(&mut self, id: ParamId, steps: f32) {
        let def = id.def();
        let v = (self.get(id) + steps * def.step).clamp(def.min, def.max);
        self.set(id, v);
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
