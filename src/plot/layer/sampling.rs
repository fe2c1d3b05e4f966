//! Data sampling applied by the engine before drawing a layer
//!
//! Samplings chain with `+`; the engine applies them in order.

use serde_json::Value;
use std::ops::Add;

use crate::Options;

#[derive(Debug, Clone, PartialEq)]
pub enum Sampling {
    /// Disable the engine's default sampling
    None,
    /// One or more sampling steps, applied in order
    Steps(Vec<Options>),
}

impl Sampling {
    fn step(name: &str, n: u32, seed: Option<i64>) -> Self {
        let step = Options::new()
            .with("name", name)
            .with("n", n)
            .merge(Options::of([("seed", seed.map(Value::from))]));
        Sampling::Steps(vec![step])
    }

    pub fn to_value(&self) -> Value {
        match self {
            Sampling::None => Value::from("none"),
            Sampling::Steps(steps) if steps.len() == 1 => steps[0].clone().into_value(),
            Sampling::Steps(steps) => {
                Value::Array(steps.iter().cloned().map(Options::into_value).collect())
            }
        }
    }
}

impl Add for Sampling {
    type Output = Sampling;

    fn add(self, rhs: Sampling) -> Sampling {
        match (self, rhs) {
            (Sampling::None, other) | (other, Sampling::None) => other,
            (Sampling::Steps(mut left), Sampling::Steps(right)) => {
                left.extend(right);
                Sampling::Steps(left)
            }
        }
    }
}

pub fn sampling_none() -> Sampling {
    Sampling::None
}

pub fn sampling_random(n: u32, seed: impl Into<Option<i64>>) -> Sampling {
    Sampling::step("random", n, seed.into())
}

pub fn sampling_pick(n: u32) -> Sampling {
    Sampling::step("pick", n, None)
}

pub fn sampling_systematic(n: u32) -> Sampling {
    Sampling::step("systematic", n, None)
}

pub fn sampling_group_random(n: u32, seed: impl Into<Option<i64>>) -> Sampling {
    Sampling::step("group_random", n, seed.into())
}

pub fn sampling_group_systematic(n: u32) -> Sampling {
    Sampling::step("group_systematic", n, None)
}

pub fn sampling_random_stratified(
    n: u32,
    seed: impl Into<Option<i64>>,
    min_subsample: impl Into<Option<u32>>,
) -> Sampling {
    let mut sampling = Sampling::step("random_stratified", n, seed.into());
    if let (Sampling::Steps(steps), Some(min)) = (&mut sampling, min_subsample.into()) {
        steps[0].insert("min_subsample", min);
    }
    sampling
}

/// Visvalingam-Whyatt polyline simplification
pub fn sampling_vertex_vw(n: u32) -> Sampling {
    Sampling::step("vertex_vw", n, None)
}

/// Douglas-Peucker polyline simplification
pub fn sampling_vertex_dp(n: u32) -> Sampling {
    Sampling::step("vertex_dp", n, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_none_is_a_string() {
        assert_eq!(sampling_none().to_value(), json!("none"));
    }

    #[test]
    fn test_single_step_is_an_object() {
        assert_eq!(
            sampling_random(100, 7).to_value(),
            json!({"name": "random", "n": 100, "seed": 7})
        );
        assert_eq!(sampling_pick(10).to_value(), json!({"name": "pick", "n": 10}));
    }

    #[test]
    fn test_chained_steps_keep_order() {
        let sampling = sampling_pick(50) + sampling_systematic(10) + sampling_none();
        assert_eq!(
            sampling.to_value(),
            json!([
                {"name": "pick", "n": 50},
                {"name": "systematic", "n": 10}
            ])
        );
    }

    #[test]
    fn test_random_stratified_min_subsample() {
        assert_eq!(
            sampling_random_stratified(20, None, 3).to_value(),
            json!({"name": "random_stratified", "n": 20, "min_subsample": 3})
        );
    }
}
