//! Unified Calculator Driver
//!
//! Behavioral checks are written once against [`CalculatorDriver`] and run
//! against any front end that can press keys and read the display.

use crate::core::engine::{ClearLabel, Engine, ReadModel};
use crate::core::key::{parse_keys, Key, ParseKeyError};
use crate::core::{Operator, ERROR_MARKER};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocket_calc::prelude::*;
///
/// fn verify_sum<D: CalculatorDriver>(driver: &mut D) {
///     driver.enter("7 + 8 =").unwrap();
///     assert_eq!(driver.display(), "15");
/// }
///
/// verify_sum(&mut EngineDriver::new());
/// ```
pub trait CalculatorDriver {
    /// Presses a single key
    fn press(&mut self, key: Key);

    /// Gets the formatted display text
    fn display(&self) -> String;

    /// Gets the equation trace
    fn equation(&self) -> String;

    /// Gets the AC/C label
    fn clear_label(&self) -> ClearLabel;

    /// Returns true when `op` is the armed operator
    fn is_highlighted(&self, op: Operator) -> bool;

    /// Returns the calculator to its initial state
    fn reset(&mut self);

    /// Presses every key in order
    fn press_all(&mut self, keys: &[Key]) {
        for &key in keys {
            self.press(key);
        }
    }

    /// Parses a key script and presses it
    fn enter(&mut self, script: &str) -> Result<(), ParseKeyError> {
        let keys = parse_keys(script)?;
        self.press_all(&keys);
        Ok(())
    }
}

/// Driver pressing keys directly on an [`Engine`]
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: Engine,
}

impl EngineDriver {
    /// Creates a driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver around an existing engine
    #[must_use]
    pub fn with_engine(engine: Engine) -> Self {
        Self { engine }
    }

    /// Returns a reference to the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the current read model
    #[must_use]
    pub fn read_model(&self) -> ReadModel {
        self.engine.read_model()
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, key: Key) {
        self.engine.press(key);
    }

    fn display(&self) -> String {
        self.engine.display()
    }

    fn equation(&self) -> String {
        self.engine.equation().to_string()
    }

    fn clear_label(&self) -> ClearLabel {
        self.engine.clear_button_label()
    }

    fn is_highlighted(&self, op: Operator) -> bool {
        self.engine.is_operator_highlighted(op)
    }

    fn reset(&mut self) {
        self.engine.press(Key::Clear);
    }
}

// ===== Unified Behavior Checks =====
// These work with ANY CalculatorDriver implementation

fn enter_script<D: CalculatorDriver>(driver: &mut D, script: &str) {
    driver
        .enter(script)
        .unwrap_or_else(|e| panic!("bad key script {script:?}: {e}"));
}

/// Verifies the four operations and the equation trace
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (script, display, equation) in [
        ("7 + 8 =", "15", "7 + 8 ="),
        ("10 - 4 =", "6", "10 - 4 ="),
        ("6 × 7 =", "42", "6 × 7 ="),
        ("20 ÷ 4 =", "5", "20 ÷ 4 ="),
    ] {
        driver.reset();
        enter_script(driver, script);
        assert_eq!(driver.display(), display, "{script}");
        assert_eq!(driver.equation(), equation, "{script}");
    }
    driver.reset();
}

/// Verifies left-to-right chaining and operator replacement
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter_script(driver, "2 + 3 ×");
    assert_eq!(driver.display(), "5");
    assert!(driver.is_highlighted(Operator::Multiply));
    enter_script(driver, "4 =");
    assert_eq!(driver.display(), "20");

    driver.reset();
    enter_script(driver, "9 + - 4 =");
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.equation(), "9 - 4 =");
    driver.reset();
}

/// Verifies the 9-digit entry limit, sign toggle and percent
pub fn verify_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter_script(driver, "1234567890");
    assert_eq!(driver.display(), "123,456,789");

    driver.reset();
    enter_script(driver, "±");
    assert_eq!(driver.display(), "0");
    enter_script(driver, "5 ±");
    assert_eq!(driver.display(), "-5");
    enter_script(driver, "±");
    assert_eq!(driver.display(), "5");

    driver.reset();
    enter_script(driver, "5 %");
    assert_eq!(driver.display(), "0.05");
    driver.reset();
}

/// Verifies division by zero is sticky until clear
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter_script(driver, "1 ÷ 0 =");
    assert_eq!(driver.display(), ERROR_MARKER);
    assert_eq!(driver.equation(), "");

    enter_script(driver, "5 + 2 = ± %");
    assert_eq!(driver.display(), ERROR_MARKER);

    driver.reset();
    assert_eq!(driver.display(), "0");
}

/// Verifies the AC/C label
pub fn verify_clear_label<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.clear_label(), ClearLabel::AllClear);
    enter_script(driver, "3");
    assert_eq!(driver.clear_label(), ClearLabel::Clear);
    driver.reset();
    assert_eq!(driver.clear_label(), ClearLabel::AllClear);
}

/// Complete verification suite
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_entry(driver);
    verify_error_handling(driver);
    verify_clear_label(driver);
}
