//! Statistic parameter and statistic aesthetic capabilities
//!
//! These blocks are shared between a geom and its statistic layer, e.g.
//! [`SmoothStatParameters`] drives both `geom_smooth` and `stat_smooth`.

use serde_json::Value;

use crate::Num;

capability! {
    /// Binning of a continuous variable
    pub struct BinStatParameters {
        bins: i64 => "bins",
        binwidth: Num => "binwidth",
        /// Center of one of the bins
        center: Num => "center",
        /// Boundary between two bins
        boundary: Num => "boundary",
    }
}

capability! {
    /// Kernel density estimation
    pub struct DensityStatParameters {
        /// Bandwidth: a number or a rule name such as `"nrd0"`
        bw: Value => "bw",
        kernel: String => "kernel",
        n: i64 => "n",
        trim: bool => "trim",
        adjust: Num => "adjust",
        full_scan_max: i64 => "full_scan_max",
        quantiles: Vec<f64> => "quantiles",
    }
}

capability! {
    pub struct YDensityStatAesthetics {
        weight: Num => "weight",
    }
}

capability! {
    /// Density along y, computed per x group
    pub struct YDensityStatParameters {
        /// `"area"`, `"count"` or `"width"`
        scale: String => "scale",
        tails_cutoff: Num => "tails_cutoff",
        bw: Value => "bw",
        kernel: String => "kernel",
        n: i64 => "n",
        trim: bool => "trim",
        adjust: Num => "adjust",
        full_scan_max: i64 => "full_scan_max",
        quantiles: Vec<f64> => "quantiles",
    }
}

capability! {
    pub struct BoxplotStatAesthetics {
        width: Num => "width",
        weight: Num => "weight",
    }
}

capability! {
    pub struct BoxplotStatParameters {
        /// Box widths proportional to the square root of the group size
        var_width: bool => "var_width",
        /// Whisker length as a multiple of the interquartile range
        coef: Num => "coef",
    }
}

capability! {
    /// Smoothed conditional mean
    pub struct SmoothStatParameters {
        /// `"lm"`, `"loess"` or `"lowess"`
        method: String => "method",
        n: i64 => "n",
        level: Num => "level",
        se: bool => "se",
        span: Num => "span",
        /// Polynomial degree for `"lm"`
        deg: i64 => "deg",
        seed: i64 => "seed",
        max_n: i64 => "max_n",
    }
}

capability! {
    pub struct ContourStatParameters {
        bins: i64 => "bins",
        binwidth: Num => "binwidth",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Capability;
    use serde_json::json;

    #[test]
    fn test_density_bandwidth_accepts_rule_or_number() {
        let rule = DensityStatParameters::default().bw("nrd0");
        assert_eq!(rule.fragment().get("bw"), Some(&json!("nrd0")));

        let fixed = DensityStatParameters::default().bw(0.3);
        assert_eq!(fixed.fragment().get("bw"), Some(&json!(0.3)));
    }

    #[test]
    fn test_smooth_parameters_in_declared_order() {
        let params = SmoothStatParameters::default()
            .seed(1)
            .se(false)
            .method("loess");
        assert_eq!(
            params.fragment().into_value(),
            json!({"method": "loess", "se": false, "seed": 1})
        );
    }
}
