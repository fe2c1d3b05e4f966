//! Statistic kinds and statistic options

use serde::{Deserialize, Serialize};

use crate::{Capability, Options};

/// Enum of all statistical transforms computed by the rendering engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Identity,
    Count,
    Bin,
    Density,
    YDensity,
    Boxplot,
    Smooth,
    Contour,
}

impl StatKind {
    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Identity => "identity",
            StatKind::Count => "count",
            StatKind::Bin => "bin",
            StatKind::Density => "density",
            StatKind::YDensity => "ydensity",
            StatKind::Boxplot => "boxplot",
            StatKind::Smooth => "smooth",
            StatKind::Contour => "contour",
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Statistic of a layer plus statistic parameters
///
/// The document carries the statistic as a bare name under `stat`; its
/// parameters sit next to it at the layer level.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub kind: StatKind,
    pub parameters: Options,
}

impl Stat {
    pub fn new(kind: StatKind) -> Self {
        Self {
            kind,
            parameters: Options::new(),
        }
    }

    /// Attach parameters, e.g. `Stat::bin().with_parameters(BinStatParameters::default().bins(20))`
    pub fn with_parameters(mut self, parameters: impl Capability) -> Self {
        self.parameters.extend(parameters.fragment());
        self
    }

    pub fn identity() -> Self {
        Self::new(StatKind::Identity)
    }

    pub fn count() -> Self {
        Self::new(StatKind::Count)
    }

    pub fn bin() -> Self {
        Self::new(StatKind::Bin)
    }

    pub fn density() -> Self {
        Self::new(StatKind::Density)
    }

    pub fn ydensity() -> Self {
        Self::new(StatKind::YDensity)
    }

    pub fn boxplot() -> Self {
        Self::new(StatKind::Boxplot)
    }

    pub fn smooth() -> Self {
        Self::new(StatKind::Smooth)
    }

    pub fn contour() -> Self {
        Self::new(StatKind::Contour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::layer::stat::BinStatParameters;
    use serde_json::json;

    #[test]
    fn test_stat_names() {
        assert_eq!(Stat::ydensity().kind.name(), "ydensity");
        assert_eq!(StatKind::Count.to_string(), "count");
    }

    #[test]
    fn test_stat_parameters_omit_unset() {
        let stat = Stat::bin().with_parameters(BinStatParameters::default().bins(20));
        assert_eq!(stat.parameters.into_value(), json!({"bins": 20}));
    }
}
