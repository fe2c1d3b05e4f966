//! Position adjustments
//!
//! A position without parameters is written as its bare name
//! (`"position": "dodge"`); a parameterised one becomes a nested document
//! (`"position": {"name": "dodge", "width": 0.9}`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Options;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosKind {
    Identity,
    Stack,
    Fill,
    Dodge,
    Jitter,
    Nudge,
    JitterDodge,
}

impl PosKind {
    pub fn name(&self) -> &'static str {
        match self {
            PosKind::Identity => "identity",
            PosKind::Stack => "stack",
            PosKind::Fill => "fill",
            PosKind::Dodge => "dodge",
            PosKind::Jitter => "jitter",
            PosKind::Nudge => "nudge",
            PosKind::JitterDodge => "jitterdodge",
        }
    }
}

/// Position adjustment of a layer
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub kind: PosKind,
    pub parameters: Options,
}

impl Position {
    fn new(kind: PosKind, parameters: Options) -> Self {
        Self { kind, parameters }
    }

    pub fn to_value(&self) -> Value {
        if self.parameters.is_empty() {
            Value::from(self.kind.name())
        } else {
            Options::new()
                .with("name", self.kind.name())
                .merge(self.parameters.clone())
                .into_value()
        }
    }
}

fn num(value: impl Into<Option<f64>>) -> Option<Value> {
    value.into().map(Value::from)
}

pub fn position_identity() -> Position {
    Position::new(PosKind::Identity, Options::new())
}

/// Stack overlapping objects; `vjust` positions them vertically within the stack.
pub fn position_stack(vjust: impl Into<Option<f64>>) -> Position {
    Position::new(PosKind::Stack, Options::of([("vjust", num(vjust))]))
}

/// Stack and normalise each stack to a height of one.
pub fn position_fill(vjust: impl Into<Option<f64>>) -> Position {
    Position::new(PosKind::Fill, Options::of([("vjust", num(vjust))]))
}

pub fn position_dodge(width: impl Into<Option<f64>>) -> Position {
    Position::new(PosKind::Dodge, Options::of([("width", num(width))]))
}

pub fn position_jitter(
    width: impl Into<Option<f64>>,
    height: impl Into<Option<f64>>,
    seed: impl Into<Option<i64>>,
) -> Position {
    Position::new(
        PosKind::Jitter,
        Options::of([
            ("width", num(width)),
            ("height", num(height)),
            ("seed", seed.into().map(Value::from)),
        ]),
    )
}

pub fn position_nudge(x: impl Into<Option<f64>>, y: impl Into<Option<f64>>) -> Position {
    Position::new(PosKind::Nudge, Options::of([("x", num(x)), ("y", num(y))]))
}

pub fn position_jitter_dodge(
    dodge_width: impl Into<Option<f64>>,
    jitter_width: impl Into<Option<f64>>,
    jitter_height: impl Into<Option<f64>>,
    seed: impl Into<Option<i64>>,
) -> Position {
    Position::new(
        PosKind::JitterDodge,
        Options::of([
            ("dodge_width", num(dodge_width)),
            ("jitter_width", num(jitter_width)),
            ("jitter_height", num(jitter_height)),
            ("seed", seed.into().map(Value::from)),
        ]),
    )
}
