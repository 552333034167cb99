//! Pure function table: binary operators, scientific functions, angle
//! units, and display formatting.
//!
//! Everything here is stateless f64 math. Domain violations (division by
//! zero, negative factorial, `nPr`/`nCr` with `n < r`) return NaN rather
//! than erroring, and NaN propagates through later operations under
//! standard floating-point semantics.

use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI};

/// Angle unit used by the forward and inverse trigonometric functions.
///
/// Forward trig converts its input from the active unit to radians;
/// inverse trig converts the radian result back. The hyperbolic
/// functions always work in radians and ignore the active unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Degrees (360 per full turn), the session default.
    #[default]
    Degrees,
    /// Radians.
    Radians,
    /// Gradians (400 per full turn).
    Gradians,
}

impl AngleUnit {
    /// Converts a value in this unit to radians.
    #[must_use]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value * (PI / 180.0),
            Self::Radians => value,
            Self::Gradians => value * (PI / 200.0),
        }
    }

    /// Converts a radian value back into this unit.
    #[must_use]
    pub fn from_radians(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value * (180.0 / PI),
            Self::Radians => value,
            Self::Gradians => value * (200.0 / PI),
        }
    }

    /// Rotates Degrees -> Radians -> Gradians -> Degrees.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Gradians,
            Self::Gradians => Self::Degrees,
        }
    }

    /// Short indicator label for the widget header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Degrees => "deg",
            Self::Radians => "rad",
            Self::Gradians => "grad",
        }
    }
}

/// Mathematical constants the widget can insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constant {
    /// The circle constant.
    Pi,
    /// Euler's number.
    E,
}

impl Constant {
    /// Numeric value of the constant.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => PI,
            Self::E => E,
        }
    }

    /// Symbol appended to the trace when the constant is inserted.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pi => "\u{3c0}",
            Self::E => "e",
        }
    }
}

/// Memory register commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryOp {
    /// M+ adds the display value to the register.
    Add,
    /// M- subtracts the display value from the register.
    Subtract,
    /// MR copies the register into the display.
    Recall,
    /// MC zeroes the register.
    Clear,
}

/// Binary operations, resolved strictly left to right with no precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division; a zero divisor yields NaN, not an error.
    Divide,
    /// Exponentiation.
    Power,
    /// Percent-of: `a * b / 100`.
    Percent,
    /// Permutations `n! / (n - r)!`; NaN when `n < r`.
    Npr,
    /// Combinations `n! / (r! (n - r)!)`; NaN when `n < r`.
    Ncr,
}

impl BinaryOp {
    /// Operator symbol used in the trace and history records.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Percent => "%",
            Self::Npr => "nPr",
            Self::Ncr => "nCr",
        }
    }

    /// Applies the operation to two operands.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
            Self::Power => a.powf(b),
            Self::Percent => a * (b / 100.0),
            Self::Npr => permutation(a, b),
            Self::Ncr => combination(a, b),
        }
    }
}

/// Unary scientific functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryFn {
    /// Square root.
    Sqrt,
    /// Cube root.
    Cbrt,
    /// Square.
    Square,
    /// Reciprocal `1 / x`.
    Reciprocal,
    /// Factorial; 0 maps to 1, negative inputs to NaN.
    Factorial,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Log10,
    /// Exponential `e^x`.
    Exp,
    /// Sine in the active angle unit.
    Sin,
    /// Cosine in the active angle unit.
    Cos,
    /// Tangent in the active angle unit.
    Tan,
    /// Inverse sine, result in the active angle unit.
    Asin,
    /// Inverse cosine, result in the active angle unit.
    Acos,
    /// Inverse tangent, result in the active angle unit.
    Atan,
    /// Hyperbolic sine, always radians.
    Sinh,
    /// Hyperbolic cosine, always radians.
    Cosh,
    /// Hyperbolic tangent, always radians.
    Tanh,
}

impl UnaryFn {
    /// Symbol used when formatting `"sym(x) = result"` records.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sqrt => "\u{221a}",
            Self::Cbrt => "\u{221b}",
            Self::Square => "sqr",
            Self::Reciprocal => "1/x",
            Self::Factorial => "n!",
            Self::Ln => "ln",
            Self::Log10 => "log",
            Self::Exp => "exp",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "sin\u{207b}\u{b9}",
            Self::Acos => "cos\u{207b}\u{b9}",
            Self::Atan => "tan\u{207b}\u{b9}",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
        }
    }

    /// Applies the function to a value under the given angle unit.
    ///
    /// Only the six circular trig functions consult `unit`; the
    /// hyperbolic family deliberately stays in radians.
    #[must_use]
    pub fn apply(self, x: f64, unit: AngleUnit) -> f64 {
        match self {
            Self::Sqrt => x.sqrt(),
            Self::Cbrt => x.cbrt(),
            Self::Square => x * x,
            Self::Reciprocal => 1.0 / x,
            Self::Factorial => factorial(x),
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
            Self::Exp => x.exp(),
            Self::Sin => unit.to_radians(x).sin(),
            Self::Cos => unit.to_radians(x).cos(),
            Self::Tan => unit.to_radians(x).tan(),
            Self::Asin => unit.from_radians(x.asin()),
            Self::Acos => unit.from_radians(x.acos()),
            Self::Atan => unit.from_radians(x.atan()),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
        }
    }
}

/// Iterative factorial over f64.
///
/// Returns 1 for 0, NaN for negative inputs, and otherwise the product
/// 2..n. No overflow guard: large inputs drift into floating-point
/// approximation and eventually infinity.
#[must_use]
pub fn factorial(n: f64) -> f64 {
    if n < 0.0 {
        return f64::NAN;
    }
    if n == 0.0 {
        return 1.0;
    }
    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    result
}

/// Permutations `nPr = n! / (n - r)!`; NaN when `n < r`.
#[must_use]
pub fn permutation(n: f64, r: f64) -> f64 {
    if n < r {
        return f64::NAN;
    }
    factorial(n) / factorial(n - r)
}

/// Combinations `nCr = n! / (r! (n - r)!)`; NaN when `n < r`.
#[must_use]
pub fn combination(n: f64, r: f64) -> f64 {
    if n < r {
        return f64::NAN;
    }
    factorial(n) / (factorial(r) * factorial(n - r))
}

/// Formats a number the way the display shows it.
///
/// Integer-valued floats print without a decimal point, fractional
/// results are trimmed of trailing zeros, and the NaN/infinity
/// sentinels print as `NaN`, `Infinity` and `-Infinity`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if n.fract() == 0.0 {
        // Past 2^53 the i64 path would saturate; plain Display never
        // switches to exponent notation for f64.
        if n.abs() < 9.0e15 {
            return format!("{}", n as i64);
        }
        return format!("{n}");
    }
    let s = format!("{n:.10}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== AngleUnit tests =====

    #[test]
    fn test_degrees_to_radians() {
        assert!((AngleUnit::Degrees.to_radians(180.0) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_gradians_to_radians() {
        assert!((AngleUnit::Gradians.to_radians(200.0) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_radians_identity() {
        assert_eq!(AngleUnit::Radians.to_radians(1.25), 1.25);
        assert_eq!(AngleUnit::Radians.from_radians(1.25), 1.25);
    }

    #[test]
    fn test_angle_unit_round_trip() {
        for unit in [AngleUnit::Degrees, AngleUnit::Radians, AngleUnit::Gradians] {
            let back = unit.from_radians(unit.to_radians(42.5));
            assert!((back - 42.5).abs() < 1e-9, "{unit:?} round trip");
        }
    }

    #[test]
    fn test_angle_unit_cycle() {
        assert_eq!(AngleUnit::Degrees.cycled(), AngleUnit::Radians);
        assert_eq!(AngleUnit::Radians.cycled(), AngleUnit::Gradians);
        assert_eq!(AngleUnit::Gradians.cycled(), AngleUnit::Degrees);
    }

    #[test]
    fn test_angle_unit_labels() {
        assert_eq!(AngleUnit::Degrees.label(), "deg");
        assert_eq!(AngleUnit::Radians.label(), "rad");
        assert_eq!(AngleUnit::Gradians.label(), "grad");
    }

    #[test]
    fn test_angle_unit_default() {
        assert_eq!(AngleUnit::default(), AngleUnit::Degrees);
    }

    // ===== Constant tests =====

    #[test]
    fn test_constants() {
        assert_eq!(Constant::Pi.value(), PI);
        assert_eq!(Constant::E.value(), E);
        assert_eq!(Constant::Pi.symbol(), "π");
        assert_eq!(Constant::E.symbol(), "e");
    }

    // ===== BinaryOp tests =====

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(BinaryOp::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(BinaryOp::Subtract.apply(10.0, 4.0), 6.0);
        assert_eq!(BinaryOp::Multiply.apply(6.0, 7.0), 42.0);
        assert_eq!(BinaryOp::Divide.apply(20.0, 4.0), 5.0);
    }

    #[test]
    fn test_divide_by_zero_is_nan() {
        assert!(BinaryOp::Divide.apply(1.0, 0.0).is_nan());
        assert!(BinaryOp::Divide.apply(-3.5, 0.0).is_nan());
        // A negative zero divisor is still a zero divisor
        assert!(BinaryOp::Divide.apply(1.0, -0.0).is_nan());
    }

    #[test]
    fn test_power() {
        assert_eq!(BinaryOp::Power.apply(2.0, 10.0), 1024.0);
        assert!((BinaryOp::Power.apply(9.0, 0.5) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_percent() {
        assert_eq!(BinaryOp::Percent.apply(200.0, 15.0), 30.0);
        assert_eq!(BinaryOp::Percent.apply(50.0, 50.0), 25.0);
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(BinaryOp::Add.symbol(), "+");
        assert_eq!(BinaryOp::Subtract.symbol(), "-");
        assert_eq!(BinaryOp::Multiply.symbol(), "*");
        assert_eq!(BinaryOp::Divide.symbol(), "/");
        assert_eq!(BinaryOp::Power.symbol(), "^");
        assert_eq!(BinaryOp::Percent.symbol(), "%");
        assert_eq!(BinaryOp::Npr.symbol(), "nPr");
        assert_eq!(BinaryOp::Ncr.symbol(), "nCr");
    }

    // ===== Factorial / combinatorics tests =====

    #[test]
    fn test_factorial_base_cases() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(5.0), 120.0);
        assert_eq!(factorial(10.0), 3_628_800.0);
    }

    #[test]
    fn test_factorial_negative_is_nan() {
        assert!(factorial(-3.0).is_nan());
        assert!(factorial(-0.5).is_nan());
    }

    #[test]
    fn test_factorial_large_does_not_panic() {
        // No overflow guard: drifts into approximation, then infinity
        assert!(factorial(170.0).is_finite());
        assert!(factorial(171.0).is_infinite());
    }

    #[test]
    fn test_permutation() {
        assert_eq!(permutation(4.0, 2.0), 12.0);
        assert_eq!(permutation(5.0, 5.0), 120.0);
        assert_eq!(permutation(5.0, 0.0), 1.0);
    }

    #[test]
    fn test_combination() {
        assert_eq!(combination(4.0, 2.0), 6.0);
        assert_eq!(combination(5.0, 5.0), 1.0);
        assert_eq!(combination(6.0, 1.0), 6.0);
    }

    #[test]
    fn test_n_less_than_r_is_nan() {
        assert!(permutation(2.0, 5.0).is_nan());
        assert!(combination(2.0, 5.0).is_nan());
        assert!(BinaryOp::Npr.apply(2.0, 5.0).is_nan());
        assert!(BinaryOp::Ncr.apply(2.0, 5.0).is_nan());
    }

    // ===== UnaryFn tests =====

    #[test]
    fn test_roots_and_powers() {
        assert_eq!(UnaryFn::Sqrt.apply(9.0, AngleUnit::Degrees), 3.0);
        assert_eq!(UnaryFn::Cbrt.apply(27.0, AngleUnit::Degrees), 3.0);
        assert_eq!(UnaryFn::Square.apply(12.0, AngleUnit::Degrees), 144.0);
        assert_eq!(UnaryFn::Reciprocal.apply(4.0, AngleUnit::Degrees), 0.25);
    }

    #[test]
    fn test_sqrt_negative_is_nan() {
        assert!(UnaryFn::Sqrt.apply(-1.0, AngleUnit::Degrees).is_nan());
    }

    #[test]
    fn test_logs_and_exp() {
        assert!((UnaryFn::Ln.apply(E, AngleUnit::Degrees) - 1.0).abs() < 1e-12);
        assert!((UnaryFn::Log10.apply(1000.0, AngleUnit::Degrees) - 3.0).abs() < 1e-12);
        assert_eq!(UnaryFn::Exp.apply(0.0, AngleUnit::Degrees), 1.0);
        assert!(UnaryFn::Ln.apply(-1.0, AngleUnit::Degrees).is_nan());
    }

    #[test]
    fn test_trig_uses_angle_unit() {
        let sin90deg = UnaryFn::Sin.apply(90.0, AngleUnit::Degrees);
        assert!((sin90deg - 1.0).abs() < 1e-12);

        let sin100grad = UnaryFn::Sin.apply(100.0, AngleUnit::Gradians);
        assert!((sin100grad - 1.0).abs() < 1e-12);

        let sin_half_pi = UnaryFn::Sin.apply(PI / 2.0, AngleUnit::Radians);
        assert!((sin_half_pi - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_trig_returns_active_unit() {
        let asin1_deg = UnaryFn::Asin.apply(1.0, AngleUnit::Degrees);
        assert!((asin1_deg - 90.0).abs() < 1e-9);

        let atan1_grad = UnaryFn::Atan.apply(1.0, AngleUnit::Gradians);
        assert!((atan1_grad - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_asin_out_of_domain_is_nan() {
        assert!(UnaryFn::Asin.apply(1.5, AngleUnit::Degrees).is_nan());
        assert!(UnaryFn::Acos.apply(-2.0, AngleUnit::Radians).is_nan());
    }

    #[test]
    fn test_sin_asin_round_trip_per_unit() {
        for unit in [AngleUnit::Degrees, AngleUnit::Radians, AngleUnit::Gradians] {
            for x in [-1.0, -0.5, 0.0, 0.25, 0.99, 1.0] {
                let angle = UnaryFn::Asin.apply(x, unit);
                let back = UnaryFn::Sin.apply(angle, unit);
                assert!((back - x).abs() < 1e-9, "{unit:?} sin(asin({x}))");
            }
        }
    }

    #[test]
    fn test_hyperbolic_ignores_angle_unit() {
        // sinh/cosh/tanh always operate in radians, whatever the unit says
        for unit in [AngleUnit::Degrees, AngleUnit::Radians, AngleUnit::Gradians] {
            assert_eq!(UnaryFn::Sinh.apply(1.0, unit), 1.0_f64.sinh());
            assert_eq!(UnaryFn::Cosh.apply(1.0, unit), 1.0_f64.cosh());
            assert_eq!(UnaryFn::Tanh.apply(1.0, unit), 1.0_f64.tanh());
        }
    }

    #[test]
    fn test_unary_factorial() {
        assert_eq!(UnaryFn::Factorial.apply(5.0, AngleUnit::Degrees), 120.0);
        assert!(UnaryFn::Factorial.apply(-3.0, AngleUnit::Degrees).is_nan());
    }

    #[test]
    fn test_reciprocal_of_zero_is_infinite() {
        assert!(UnaryFn::Reciprocal
            .apply(0.0, AngleUnit::Degrees)
            .is_infinite());
    }

    // ===== format_number tests =====

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_decimal() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(2.5000), "2.5");
    }

    #[test]
    fn test_format_number_rounds_float_noise() {
        // asin(0.5) in degrees computes 29.999999999999996
        assert_eq!(format_number(29.999_999_999_999_996), "30");
    }

    #[test]
    fn test_format_number_sentinels() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_number_large_factorial() {
        // 20! exceeds the compact integer path but must stay exact-looking
        assert_eq!(format_number(factorial(20.0)), "2432902008176640000");
    }

    #[test]
    fn test_format_number_tiny_fraction_collapses_to_zero() {
        assert_eq!(format_number(1e-14), "0");
    }
}
