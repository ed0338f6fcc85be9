//! Mathematical utilities for sample statistics
//!
//! This module provides the distribution functions needed across the
//! workspace, currently the normal distribution.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Normal distribution utilities
    pub mod normal {
        use crate::error::{Error, Result};
        use serde::{Deserialize, Serialize};
        use statrs::function::erf::erfc;
        use std::f64::consts::FRAC_1_SQRT_2;
        use tracing::trace;

        // Wichura (1988), Algorithm AS241 PPND16. Coefficients are listed from
        // the constant term upwards; denominators carry their implicit leading 1.

        /// Numerator for |p - 0.5| <= 0.425
        const CENTRAL_NUM: [f64; 8] = [
            3.387_132_872_796_366_608_0e0,
            1.331_416_678_917_843_774_5e2,
            1.971_590_950_306_551_442_7e3,
            1.373_169_376_550_946_112_5e4,
            4.592_195_393_154_987_145_7e4,
            6.726_577_092_700_870_085_3e4,
            3.343_057_558_358_812_810_5e4,
            2.509_080_928_730_122_672_7e3,
        ];

        const CENTRAL_DEN: [f64; 8] = [
            1.0,
            4.231_333_070_160_091_125_2e1,
            6.871_870_074_920_579_083_0e2,
            5.394_196_021_424_751_107_7e3,
            2.121_379_430_158_659_586_7e4,
            3.930_789_580_009_271_061_0e4,
            2.872_908_573_572_194_267_4e4,
            5.226_495_278_852_854_561_0e3,
        ];

        /// Numerator for r = sqrt(-ln(min(p, 1 - p))) <= 5
        const TAIL_NUM: [f64; 8] = [
            1.423_437_110_749_683_577_34e0,
            4.630_337_846_156_545_295_90e0,
            5.769_497_221_460_691_405_50e0,
            3.647_848_324_763_204_605_04e0,
            1.270_458_252_452_368_382_58e0,
            2.417_807_251_774_506_117_70e-1,
            2.272_384_498_926_918_458_33e-2,
            7.745_450_142_783_414_076_40e-4,
        ];

        const TAIL_DEN: [f64; 8] = [
            1.0,
            2.053_191_626_637_758_821_87e0,
            1.676_384_830_183_803_849_40e0,
            6.897_673_349_851_000_045_50e-1,
            1.481_039_764_274_800_745_90e-1,
            1.519_866_656_361_645_719_66e-2,
            5.475_938_084_995_344_946_00e-4,
            1.050_750_071_644_416_843_24e-9,
        ];

        /// Numerator for r > 5
        const FAR_TAIL_NUM: [f64; 8] = [
            6.657_904_643_501_103_777_20e0,
            5.463_784_911_164_114_369_90e0,
            1.784_826_539_917_291_335_80e0,
            2.965_605_718_285_048_912_30e-1,
            2.653_218_952_657_612_309_30e-2,
            1.242_660_947_388_078_438_60e-3,
            2.711_555_568_743_487_578_15e-5,
            2.010_334_399_292_288_132_65e-7,
        ];

        const FAR_TAIL_DEN: [f64; 8] = [
            1.0,
            5.998_322_065_558_879_376_90e-1,
            1.369_298_809_227_358_053_10e-1,
            1.487_536_129_085_061_485_25e-2,
            7.868_691_311_456_132_591_00e-4,
            1.846_318_317_510_054_681_80e-5,
            1.421_511_758_316_445_888_70e-7,
            2.044_263_103_389_939_785_64e-15,
        ];

        /// Horner evaluation starting from the highest-order coefficient
        #[inline]
        fn polynomial(coefficients: &[f64; 8], r: f64) -> f64 {
            coefficients[..7]
                .iter()
                .rev()
                .fold(coefficients[7], |acc, &c| acc * r + c)
        }

        /// Standard normal quantile for p strictly inside (0, 1)
        fn standard_ppf(p: f64) -> f64 {
            let q = p - 0.5;
            if q.abs() <= 0.425 {
                trace!(p, "central region");
                let r = 0.180625 - q * q;
                return q * polynomial(&CENTRAL_NUM, r) / polynomial(&CENTRAL_DEN, r);
            }

            let r = (-p.min(1.0 - p).ln()).sqrt();
            let val = if r <= 5.0 {
                trace!(p, r, "tail region");
                let r = r - 1.6;
                polynomial(&TAIL_NUM, r) / polynomial(&TAIL_DEN, r)
            } else {
                trace!(p, r, "far tail region");
                let r = r - 5.0;
                polynomial(&FAR_TAIL_NUM, r) / polynomial(&FAR_TAIL_DEN, r)
            };

            if q < 0.0 {
                -val
            } else {
                val
            }
        }

        /// Inverse cumulative distribution function of `N(mean, scale²)`
        ///
        /// Returns `x` with `Φ((x - mean) / scale) = p`. Uses Wichura's AS241
        /// rational approximations, which are accurate to about 1e-16 over
        /// the whole open interval.
        ///
        /// # Errors
        ///
        /// `InvalidParameter` when `scale` is not positive or `p` lies outside
        /// `[0, 1]`. `p == 0` and `p == 1` are not errors; they map to
        /// negative and positive infinity.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use stats_core::math::distributions::normal;
        ///
        /// let z = normal::quantile(0.025, 0.0, 1.0).unwrap();
        /// assert!((z + 1.959_963_984_540_054).abs() < 1e-12);
        /// assert_eq!(normal::quantile(1.0, 3.0, 2.0).unwrap(), f64::INFINITY);
        /// assert!(normal::quantile(0.5, 0.0, 0.0).is_err());
        /// ```
        pub fn quantile(p: f64, mean: f64, scale: f64) -> Result<f64> {
            if scale.is_nan() || scale <= 0.0 {
                tracing::debug!(scale, "rejected non-positive scale");
                return Err(Error::invalid_scale(scale));
            }
            Error::check_probability(p)?;

            if p == 0.0 {
                return Ok(f64::NEG_INFINITY);
            }
            if p == 1.0 {
                return Ok(f64::INFINITY);
            }

            Ok(mean + scale * standard_ppf(p))
        }

        /// Quantile of the standard normal distribution
        #[inline]
        pub fn standard_quantile(p: f64) -> Result<f64> {
            quantile(p, 0.0, 1.0)
        }

        /// Cumulative distribution function of `N(mean, scale²)`
        ///
        /// Evaluated through the complementary error function so the lower
        /// tail keeps its relative precision.
        pub fn cdf(x: f64, mean: f64, scale: f64) -> Result<f64> {
            if scale.is_nan() || scale <= 0.0 {
                return Err(Error::invalid_scale(scale));
            }
            let z = (x - mean) / scale;
            Ok(0.5 * erfc(-z * FRAC_1_SQRT_2))
        }

        /// Location and scale of a normal distribution
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        pub struct NormalParams {
            pub mean: f64,
            pub scale: f64,
        }

        impl Default for NormalParams {
            fn default() -> Self {
                Self {
                    mean: 0.0,
                    scale: 1.0,
                }
            }
        }

        impl NormalParams {
            /// Create parameters, rejecting a non-positive scale
            pub fn new(mean: f64, scale: f64) -> Result<Self> {
                if scale.is_nan() || scale <= 0.0 {
                    return Err(Error::invalid_scale(scale));
                }
                Ok(Self { mean, scale })
            }

            pub fn quantile(&self, p: f64) -> Result<f64> {
                quantile(p, self.mean, self.scale)
            }

            pub fn cdf(&self, x: f64) -> Result<f64> {
                cdf(x, self.mean, self.scale)
            }
        }

    }
}
