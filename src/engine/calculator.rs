// ============================================================================
// Basic Calculator Session
// Keypad state driven through the sequential evaluator
// ============================================================================

use super::evaluator::{checked_apply_operator, checked_finalize, Operator};
use crate::interfaces::{CalculatorEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{parse_operand, CalcError, CalcResult};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pending half of an expression: the running value and the operator waiting
/// for its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvaluationState {
    pub pending_operand: Option<f64>,
    pub pending_operator: Option<Operator>,
}

/// Keys on the basic calculator keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

impl Key {
    /// Map a typed character to a key.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Key::Digit(c)),
            '.' => Some(Key::Decimal),
            '=' => Some(Key::Equals),
            'C' | 'c' => Some(Key::Clear),
            '⌫' | '\u{8}' => Some(Key::Backspace),
            _ => Operator::from_symbol(c).map(Key::Operator),
        }
    }
}

/// Basic four-function calculator.
///
/// Holds the display buffer and pending state; all arithmetic goes through
/// the evaluator's pure functions. A result that is not a finite number never
/// reaches the display: the session resets and reports the error instead.
pub struct BasicCalculator {
    display: String,
    state: EvaluationState,
    /// Next digit starts a new number instead of appending
    new_number: bool,
    error: Option<CalcError>,
    event_handler: Arc<dyn EventHandler>,
}

impl BasicCalculator {
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            display: "0".to_string(),
            state: EvaluationState::default(),
            new_number: true,
            error: None,
            event_handler,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Text in the main display
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Caption above the display while an operator is pending, e.g. `"12 ×"`
    pub fn pending_expression(&self) -> Option<String> {
        match (self.state.pending_operand, self.state.pending_operator) {
            (Some(value), Some(op)) => Some(format!("{} {}", format_result(value), op)),
            _ => None,
        }
    }

    pub fn state(&self) -> EvaluationState {
        self.state
    }

    /// Error from the last operation, until the next key press
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    /// Current display as a number
    pub fn value(&self) -> CalcResult<f64> {
        parse_operand(&self.display)
    }

    // ========================================================================
    // Keypad
    // ========================================================================

    /// Dispatch a key press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal(),
            Key::Operator(op) => self.press_operator(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
            Key::Backspace => self.backspace(),
        }
    }

    /// Feed typed characters; unknown characters are skipped.
    pub fn press_str(&mut self, keys: &str) {
        for key in keys.chars().filter_map(Key::from_char) {
            self.press(key);
        }
    }

    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        self.error = None;

        if self.new_number {
            self.display.clear();
            self.display.push(digit);
            self.new_number = false;
        } else if self.display == "0" {
            self.display.clear();
            self.display.push(digit);
        } else {
            self.display.push(digit);
        }
        self.display_changed();
    }

    pub fn input_decimal(&mut self) {
        self.error = None;

        if self.new_number {
            self.display = "0.".to_string();
            self.new_number = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self.display_changed();
    }

    pub fn backspace(&mut self) {
        self.error = None;

        if self.display.chars().count() > 1 {
            self.display.pop();
            // A lone sign is not a number
            if self.display == "-" {
                self.reset_display();
            } else {
                // Edited text is a number being typed, even right after an operator
                self.new_number = false;
            }
        } else {
            self.reset_display();
        }
        self.display_changed();
    }

    /// Operator press.
    ///
    /// The first press adopts the display as the running value. Later presses
    /// fold the display into it with the operator that was pending, so
    /// `2 + 3 ×` shows `5`. The display is always the right-hand side, even
    /// when no new number was typed: `2 + +` folds to `4`.
    pub fn press_operator(&mut self, op: Operator) {
        self.error = None;

        let current = match parse_operand(&self.display) {
            Ok(value) => value,
            Err(err) => return self.fail(err),
        };

        match (self.state.pending_operand, self.state.pending_operator) {
            (Some(left), Some(pending)) => {
                let result = match checked_apply_operator(Some(left), current, pending) {
                    Ok(result) => result,
                    Err(err) => return self.fail(err),
                };
                self.display = format_result(result);
                self.state.pending_operand = Some(result);
                self.event_handler.on_event(CalculatorEvent::OperatorApplied {
                    operator: pending,
                    left,
                    right: current,
                    result,
                });
            },
            _ => {
                self.state.pending_operand = Some(current);
                self.event_handler.on_event(CalculatorEvent::OperandAdopted {
                    value: current,
                    pending: op,
                });
            },
        }

        self.state.pending_operator = Some(op);
        self.new_number = true;
    }

    /// Equals press. Does nothing unless an operator is pending.
    pub fn equals(&mut self) {
        let (Some(left), Some(op)) = (self.state.pending_operand, self.state.pending_operator)
        else {
            return;
        };
        self.error = None;

        let current = match parse_operand(&self.display) {
            Ok(value) => value,
            Err(err) => return self.fail(err),
        };

        let result = match checked_finalize(Some(left), current, Some(op)) {
            Ok(result) => result,
            Err(err) => return self.fail(err),
        };

        self.display = format_result(result);
        self.state = EvaluationState::default();
        self.new_number = true;

        self.event_handler.on_event(CalculatorEvent::Evaluated {
            operator: op,
            left,
            right: current,
            result,
        });
    }

    pub fn clear(&mut self) {
        self.reset();
        self.error = None;
        self.event_handler.on_event(CalculatorEvent::Cleared);
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn reset(&mut self) {
        self.state = EvaluationState::default();
        self.reset_display();
    }

    fn reset_display(&mut self) {
        self.display = "0".to_string();
        self.new_number = true;
    }

    fn display_changed(&self) {
        self.event_handler.on_event(CalculatorEvent::DisplayChanged {
            display: self.display.clone(),
        });
    }

    fn fail(&mut self, error: CalcError) {
        tracing::debug!(%error, display = %self.display, "calculator reset after invalid result");
        self.reset();
        self.error = Some(error);
        self.event_handler
            .on_event(CalculatorEvent::InvalidResult { error });
    }
}

impl Default for BasicCalculator {
    fn default() -> Self {
        Self::new(Arc::new(NoOpEventHandler))
    }
}

impl fmt::Debug for BasicCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCalculator")
            .field("display", &self.display)
            .field("state", &self.state)
            .field("new_number", &self.new_number)
            .field("error", &self.error)
            .finish()
    }
}

/// Shortest text that reads back as the same value; `-0` shows as `0`.
fn format_result(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<CalculatorEvent>>);

    impl EventHandler for Recorder {
        fn on_event(&self, event: CalculatorEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn calc() -> BasicCalculator {
        BasicCalculator::default()
    }

    #[test]
    fn test_initial_state() {
        let c = calc();
        assert_eq!(c.display(), "0");
        assert_eq!(c.state(), EvaluationState::default());
        assert_eq!(c.pending_expression(), None);
        assert_eq!(c.value(), Ok(0.0));
    }

    #[test]
    fn test_digit_entry() {
        let mut c = calc();
        c.press_str("0012");
        assert_eq!(c.display(), "12");

        c.input_digit('x');
        assert_eq!(c.display(), "12");
    }

    #[test]
    fn test_decimal_entry() {
        let mut c = calc();
        c.press_str(".5.2");
        assert_eq!(c.display(), "0.52");
    }

    #[test]
    fn test_left_to_right_evaluation() {
        let mut c = calc();
        c.press_str("2+3×4=");
        assert_eq!(c.display(), "20");
        assert_eq!(c.state(), EvaluationState::default());
    }

    #[test]
    fn test_running_result_shown_on_operator() {
        let mut c = calc();
        c.press_str("2+3*");
        assert_eq!(c.display(), "5");
        assert_eq!(c.pending_expression().as_deref(), Some("5 ×"));
        assert_eq!(c.state().pending_operand, Some(5.0));
    }

    #[test]
    fn test_subtract_equals() {
        let mut c = calc();
        c.press_str("10-4=");
        assert_eq!(c.display(), "6");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let mut c = calc();
        c.press_str("42=");
        assert_eq!(c.display(), "42");
    }

    #[test]
    fn test_chain_after_equals() {
        let mut c = calc();
        c.press_str("6÷4=");
        assert_eq!(c.display(), "1.5");
        c.press_str("*2=");
        assert_eq!(c.display(), "3");
    }

    #[test]
    fn test_repeated_operator_folds_display() {
        let mut c = calc();
        c.press_str("8+-2=");
        assert_eq!(c.display(), "14");

        let mut c = calc();
        c.press_str("2++");
        assert_eq!(c.display(), "4");
        assert_eq!(c.state().pending_operand, Some(4.0));
        assert_eq!(c.state().pending_operator, Some(Operator::Add));
    }

    #[test]
    fn test_backspace_after_operator_uses_shown_number() {
        let mut c = calc();
        c.press_str("12+");
        c.backspace();
        assert_eq!(c.display(), "1");

        c.press_str("×3=");
        assert_eq!(c.display(), "39");
    }

    #[test]
    fn test_backspace_then_digit_appends() {
        let mut c = calc();
        c.press_str("12+");
        c.backspace();
        c.input_digit('5');
        assert_eq!(c.display(), "15");
    }

    #[test]
    fn test_division_by_zero_never_displayed() {
        let mut c = calc();
        c.press_str("5/0=");
        assert_eq!(c.display(), "0");
        assert_eq!(c.error(), Some(CalcError::DivisionByZero));
        assert_eq!(c.state(), EvaluationState::default());

        c.input_digit('7');
        assert_eq!(c.error(), None);
        assert_eq!(c.display(), "7");
    }

    #[test]
    fn test_division_by_zero_mid_chain() {
        let mut c = calc();
        c.press_str("5/0+");
        assert_eq!(c.error(), Some(CalcError::DivisionByZero));
        assert_eq!(c.pending_expression(), None);
    }

    #[test]
    fn test_backspace() {
        let mut c = calc();
        c.press_str("123");
        c.backspace();
        assert_eq!(c.display(), "12");
        c.backspace();
        c.backspace();
        assert_eq!(c.display(), "0");

        // After backspacing to zero, the next digit starts fresh
        c.input_digit('4');
        assert_eq!(c.display(), "4");
    }

    #[test]
    fn test_backspace_on_negative_result() {
        let mut c = calc();
        c.press_str("3-8=");
        assert_eq!(c.display(), "-5");
        c.backspace();
        assert_eq!(c.display(), "0");
        assert_eq!(c.value(), Ok(0.0));
    }

    #[test]
    fn test_clear() {
        let mut c = calc();
        c.press_str("9×9");
        c.clear();
        assert_eq!(c.display(), "0");
        assert_eq!(c.state(), EvaluationState::default());
    }

    #[test]
    fn test_floating_point_display() {
        let mut c = calc();
        c.press_str(".1+.2=");
        assert_eq!(c.display(), "0.30000000000000004");
    }

    #[test]
    fn test_events() {
        let recorder = Arc::new(Recorder::default());
        let mut c = BasicCalculator::new(recorder.clone());
        c.press_str("2+3=C");

        let events = recorder.0.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                CalculatorEvent::DisplayChanged {
                    display: "2".to_string(),
                },
                CalculatorEvent::OperandAdopted {
                    value: 2.0,
                    pending: Operator::Add,
                },
                CalculatorEvent::DisplayChanged {
                    display: "3".to_string(),
                },
                CalculatorEvent::Evaluated {
                    operator: Operator::Add,
                    left: 2.0,
                    right: 3.0,
                    result: 5.0,
                },
                CalculatorEvent::Cleared,
            ]
        );
    }

    #[test]
    fn test_display_edit_events() {
        let recorder = Arc::new(Recorder::default());
        let mut c = BasicCalculator::new(recorder.clone());
        c.input_decimal();
        c.input_digit('7');
        c.backspace();

        let events = recorder.0.lock().unwrap();
        let shown: Vec<&str> = events
            .iter()
            .filter_map(|e| match e {
                CalculatorEvent::DisplayChanged { display } => Some(display.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(shown, vec!["0.", "0.7", "0."]);
    }

    #[test]
    fn test_invalid_result_event() {
        let recorder = Arc::new(Recorder::default());
        let mut c = BasicCalculator::new(recorder.clone());
        c.press_str("1/0=");

        let events = recorder.0.lock().unwrap();
        assert_eq!(
            events.last(),
            Some(&CalculatorEvent::InvalidResult {
                error: CalcError::DivisionByZero
            })
        );
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_char('7'), Some(Key::Digit('7')));
        assert_eq!(Key::from_char('÷'), Some(Key::Operator(Operator::Divide)));
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('.'), Some(Key::Decimal));
        assert_eq!(Key::from_char('C'), Some(Key::Clear));
        assert_eq!(Key::from_char('⌫'), Some(Key::Backspace));
        assert_eq!(Key::from_char('?'), None);
        assert_eq!(Key::from_char(','), None);
        assert_eq!(Key::from_char('\n'), None);
    }
}
