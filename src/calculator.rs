//! Chained-calculation engine behind the calculator view.
//!
//! Operations resolve eagerly left to right: choosing a new operator
//! evaluates the pending one first, so `5 + 3 × 2 =` is 16, not 11.
//! Division by zero and non-finite results collapse the engine into a
//! terminal `"Error"` state that only a clear (or fresh digit entry)
//! recovers from.

/// In-band sentinel for an invalid arithmetic result.
pub const ERROR_SENTINEL: &str = "Error";

/// Completed calculations kept for display, most recent first.
pub const HISTORY_LIMIT: usize = 5;

/// Longest operand the user can type.
pub const MAX_OPERAND_LEN: usize = 12;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percent,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
            Operator::Percent => '%',
        }
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct Calculator {
    current: String,
    previous: Option<String>,
    op: Option<Operator>,
    expression: String,
    just_computed: bool,
    history: Vec<String>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The operand being typed, or the last result after equals.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The running expression line shown above the value.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn in_error(&self) -> bool {
        self.current == ERROR_SENTINEL
    }

    /// Append a digit or decimal point to the current operand.
    ///
    /// Silently ignores a second decimal point and anything past the
    /// operand length cap. After equals or an error, typing a digit
    /// starts a fresh entry.
    pub fn append_digit(&mut self, d: char) {
        if !d.is_ascii_digit() && d != '.' {
            return;
        }
        if self.just_computed || self.in_error() {
            self.previous = None;
            self.op = None;
            self.current = d.to_string();
            self.expression = d.to_string();
            self.just_computed = false;
            return;
        }
        if d == '.' && self.current.contains('.') {
            return;
        }
        if self.current.len() >= MAX_OPERAND_LEN {
            return;
        }
        self.current.push(d);
        self.expression.push(d);
    }

    /// Select an operator, resolving any pending operation first.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.in_error() {
            return;
        }

        if self.just_computed {
            // Chain off the displayed result.
            self.previous = Some(self.current.clone());
            self.op = Some(op);
            self.expression = format!("{} {} ", self.current, op.symbol());
            self.current.clear();
            self.just_computed = false;
            return;
        }

        if self.current.is_empty() {
            // Changing the operator before the second operand exists. The
            // expression keeps the chain as typed, only its trailing
            // operator swaps.
            if self.previous.is_some() {
                self.op = Some(op);
                let mut kept = self.expression.trim_end().to_string();
                kept.pop();
                self.expression = format!("{} {} ", kept.trim_end(), op.symbol());
            }
            return;
        }

        match (&self.previous, self.op) {
            (Some(prev), Some(pending)) => {
                let result = evaluate(prev, &self.current, pending);
                if result == ERROR_SENTINEL {
                    self.enter_error_state();
                    return;
                }
                self.push_history(prev.clone(), pending, self.current.clone(), &result);
                self.expression.push_str(&format!(" {} ", op.symbol()));
                self.previous = Some(result);
                self.op = Some(op);
                self.current.clear();
            }
            _ => {
                // First operator of the session.
                self.previous = Some(self.current.clone());
                self.op = Some(op);
                self.expression.push_str(&format!(" {} ", op.symbol()));
                self.current.clear();
            }
        }
    }

    /// Equals: resolve the pending operation and freeze the result.
    pub fn compute_result(&mut self) {
        if self.in_error() {
            return;
        }
        let (prev, op) = match (self.previous.clone(), self.op) {
            (Some(p), Some(o)) if !self.current.is_empty() => (p, o),
            _ => return,
        };

        let result = evaluate(&prev, &self.current, op);
        if result == ERROR_SENTINEL {
            self.enter_error_state();
            return;
        }
        self.push_history(prev, op, self.current.clone(), &result);
        self.expression.push_str(&format!(" = {}", result));
        self.current = result;
        self.previous = None;
        self.op = None;
        self.just_computed = true;
    }

    /// Remove the last typed character. Right after a result (or in the
    /// error state) this restarts entry entirely.
    pub fn delete_last(&mut self) {
        if self.just_computed || self.in_error() {
            self.clear_all();
            return;
        }
        self.current.pop();
        self.expression.pop();
    }

    /// Reset everything except the history.
    pub fn clear_all(&mut self) {
        self.current.clear();
        self.previous = None;
        self.op = None;
        self.expression.clear();
        self.just_computed = false;
    }

    fn enter_error_state(&mut self) {
        self.current = ERROR_SENTINEL.to_string();
        self.previous = None;
        self.op = None;
        self.just_computed = false;
    }

    fn push_history(&mut self, a: String, op: Operator, b: String, result: &str) {
        self.history
            .insert(0, format!("{} {} {} = {}", a, op.symbol(), b, result));
        self.history.truncate(HISTORY_LIMIT);
    }
}

/// Evaluate one binary operation on textual operands.
///
/// Whole-number chains of `+ - ×` stay in exact integer arithmetic so
/// repeated operations never pick up float error; everything else runs
/// in `f64`. Returns [`ERROR_SENTINEL`] for division by zero, parse
/// failures, and non-finite results.
pub fn evaluate(a: &str, b: &str, op: Operator) -> String {
    let a = a.replace(',', "");
    let b = b.replace(',', "");

    if matches!(
        op,
        Operator::Add | Operator::Subtract | Operator::Multiply
    ) {
        if let (Ok(x), Ok(y)) = (a.parse::<i64>(), b.parse::<i64>()) {
            let exact = match op {
                Operator::Add => x.checked_add(y),
                Operator::Subtract => x.checked_sub(y),
                Operator::Multiply => x.checked_mul(y),
                _ => unreachable!(),
            };
            if let Some(v) = exact {
                return v.to_string();
            }
            // Overflow: fall through to floats.
        }
    }

    let (x, y) = match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => (x, y),
        _ => return ERROR_SENTINEL.to_string(),
    };

    let value = match op {
        Operator::Add => x + y,
        Operator::Subtract => x - y,
        Operator::Multiply => x * y,
        Operator::Divide => {
            if y == 0.0 {
                return ERROR_SENTINEL.to_string();
            }
            x / y
        }
        Operator::Percent => (x / 100.0) * y,
    };

    if !value.is_finite() {
        return ERROR_SENTINEL.to_string();
    }
    format_float(value)
}

/// Render a float result, trimming unreadable fractional tails.
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return (value as i64).to_string();
    }
    let plain = value.to_string();
    if plain.contains('.') && plain.len() > 12 {
        let rounded = format!("{:.10}", value);
        rounded
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        plain
    }
}

/// Group the integer part of a numeric string with thousands separators,
/// leaving the fraction untouched. `"Error"` and scientific notation
/// pass through unchanged.
pub fn format_number(num: &str) -> String {
    if num.is_empty() || num == ERROR_SENTINEL {
        return num.to_string();
    }
    if num.contains('e') || num.contains('E') {
        return num.to_string();
    }

    let (integer, fraction) = match num.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (num, None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(calc: &mut Calculator, digits: &str) {
        for d in digits.chars() {
            calc.append_digit(d);
        }
    }

    #[test]
    fn exact_integer_addition() {
        assert_eq!(
            evaluate("999999999999", "1", Operator::Add),
            "1000000000000"
        );
    }

    #[test]
    fn exact_integer_subtraction_and_multiplication() {
        assert_eq!(evaluate("1000000", "1", Operator::Subtract), "999999");
        assert_eq!(evaluate("123456789", "1000", Operator::Multiply), "123456789000");
    }

    #[test]
    fn integer_overflow_falls_back_to_float() {
        let result = evaluate("9223372036854775807", "9223372036854775807", Operator::Multiply);
        assert_ne!(result, ERROR_SENTINEL);
        assert!(result.parse::<f64>().unwrap() > 0.0);
    }

    #[test]
    fn division_by_zero_is_the_error_sentinel() {
        assert_eq!(evaluate("10", "0", Operator::Divide), "Error");
        assert_eq!(evaluate("0", "0", Operator::Divide), "Error");
        assert_eq!(evaluate("-3.5", "0", Operator::Divide), "Error");
    }

    #[test]
    fn unparseable_operands_are_errors() {
        assert_eq!(evaluate("", "1", Operator::Add), "Error");
        assert_eq!(evaluate("abc", "1", Operator::Add), "Error");
    }

    #[test]
    fn percent_is_a_over_hundred_times_b() {
        assert_eq!(evaluate("50", "200", Operator::Percent), "100");
        assert_eq!(evaluate("10", "90", Operator::Percent), "9");
    }

    #[test]
    fn comma_formatted_operands_are_stripped() {
        assert_eq!(evaluate("1,000", "2,000", Operator::Add), "3000");
    }

    #[test]
    fn long_fractions_are_trimmed() {
        let result = evaluate("1", "3", Operator::Divide);
        assert!(result.starts_with("0.333333"));
        assert!(result.len() <= 12);
        assert!(!result.ends_with('0'));
    }

    #[test]
    fn chaining_resolves_left_to_right() {
        let mut calc = Calculator::new();
        calc.append_digit('5');
        calc.choose_operator(Operator::Add);
        calc.append_digit('3');
        calc.choose_operator(Operator::Multiply);
        calc.append_digit('2');
        calc.compute_result();

        // Not 11: the × resolved 5 + 3 = 8 before chaining 8 × 2.
        assert_eq!(calc.current(), "16");
        assert_eq!(calc.history()[0], "8 × 2 = 16");
        assert_eq!(calc.history()[1], "5 + 3 = 8");
    }

    #[test]
    fn expression_tracks_the_chain() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "12");
        calc.choose_operator(Operator::Add);
        type_digits(&mut calc, "34");
        calc.compute_result();
        assert_eq!(calc.expression(), "12 + 34 = 46");
    }

    #[test]
    fn operator_can_be_replaced_before_second_operand() {
        let mut calc = Calculator::new();
        calc.append_digit('8');
        calc.choose_operator(Operator::Add);
        calc.choose_operator(Operator::Multiply);
        calc.append_digit('3');
        calc.compute_result();
        assert_eq!(calc.current(), "24");
        assert_eq!(calc.history()[0], "8 × 3 = 24");
    }

    #[test]
    fn replacing_the_operator_keeps_the_typed_chain_visible() {
        let mut calc = Calculator::new();
        calc.append_digit('5');
        calc.choose_operator(Operator::Add);
        calc.append_digit('3');
        calc.choose_operator(Operator::Multiply);
        calc.choose_operator(Operator::Divide);
        assert_eq!(calc.expression(), "5 + 3 ÷ ");

        calc.append_digit('2');
        calc.compute_result();
        assert_eq!(calc.current(), "4");
        assert_eq!(calc.expression(), "5 + 3 ÷ 2 = 4");
    }

    #[test]
    fn operator_chaining_into_division_by_zero_errors() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "10");
        calc.choose_operator(Operator::Divide);
        calc.append_digit('0');

        // The + resolves the pending 10 ÷ 0 and hits the error state
        // without ever pressing equals.
        calc.choose_operator(Operator::Add);
        assert_eq!(calc.current(), "Error");
        assert!(calc.history().is_empty());

        // Still terminal: further operators and equals stay no-ops.
        calc.choose_operator(Operator::Multiply);
        assert_eq!(calc.current(), "Error");
        calc.compute_result();
        assert_eq!(calc.current(), "Error");
    }

    #[test]
    fn operator_with_nothing_entered_is_a_noop() {
        let mut calc = Calculator::new();
        calc.choose_operator(Operator::Add);
        assert_eq!(calc.current(), "");
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn history_keeps_five_entries_most_recent_first() {
        let mut calc = Calculator::new();
        for d in ['1', '2', '3', '4', '5', '6', '7'] {
            calc.append_digit(d);
            calc.choose_operator(Operator::Add);
            calc.append_digit('0');
            calc.compute_result();
        }
        assert_eq!(calc.history().len(), HISTORY_LIMIT);
        assert_eq!(calc.history()[0], "7 + 0 = 7");
        assert_eq!(calc.history()[4], "3 + 0 = 3");
    }

    #[test]
    fn division_by_zero_enters_terminal_error_state() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "10");
        calc.choose_operator(Operator::Divide);
        calc.append_digit('0');
        calc.compute_result();
        assert_eq!(calc.current(), "Error");

        // Operators and equals are no-ops against the error state.
        calc.choose_operator(Operator::Add);
        assert_eq!(calc.current(), "Error");
        calc.compute_result();
        assert_eq!(calc.current(), "Error");

        // Digit entry restarts like the post-equals reset.
        calc.append_digit('7');
        assert_eq!(calc.current(), "7");
        assert_eq!(calc.expression(), "7");
    }

    #[test]
    fn clear_recovers_from_error_state() {
        let mut calc = Calculator::new();
        calc.append_digit('1');
        calc.choose_operator(Operator::Divide);
        calc.append_digit('0');
        calc.compute_result();
        assert_eq!(calc.current(), "Error");
        calc.clear_all();
        assert_eq!(calc.current(), "");
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn digit_after_equals_starts_fresh() {
        let mut calc = Calculator::new();
        calc.append_digit('2');
        calc.choose_operator(Operator::Add);
        calc.append_digit('2');
        calc.compute_result();
        assert_eq!(calc.current(), "4");

        calc.append_digit('9');
        assert_eq!(calc.current(), "9");
        assert_eq!(calc.expression(), "9");
    }

    #[test]
    fn operator_after_equals_chains_off_the_result() {
        let mut calc = Calculator::new();
        calc.append_digit('6');
        calc.choose_operator(Operator::Multiply);
        calc.append_digit('7');
        calc.compute_result();
        assert_eq!(calc.current(), "42");

        calc.choose_operator(Operator::Subtract);
        calc.append_digit('2');
        calc.compute_result();
        assert_eq!(calc.current(), "40");
        assert_eq!(calc.history()[0], "42 - 2 = 40");
    }

    #[test]
    fn delete_after_equals_clears_everything() {
        let mut calc = Calculator::new();
        calc.append_digit('5');
        calc.choose_operator(Operator::Add);
        calc.append_digit('5');
        calc.compute_result();
        calc.delete_last();
        assert_eq!(calc.current(), "");
        assert_eq!(calc.expression(), "");

        let mut cleared = Calculator::new();
        cleared.append_digit('5');
        cleared.choose_operator(Operator::Add);
        cleared.append_digit('5');
        cleared.compute_result();
        cleared.clear_all();
        assert_eq!(calc.current(), cleared.current());
        assert_eq!(calc.expression(), cleared.expression());
    }

    #[test]
    fn delete_removes_last_typed_character() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "123");
        calc.delete_last();
        assert_eq!(calc.current(), "12");
        assert_eq!(calc.expression(), "12");
    }

    #[test]
    fn clear_all_is_idempotent() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "42");
        calc.choose_operator(Operator::Add);
        calc.clear_all();
        let once = calc.clone();
        calc.clear_all();
        assert!(calc == once);
        assert_eq!(calc.current(), "");
    }

    #[test]
    fn clear_all_keeps_history() {
        let mut calc = Calculator::new();
        calc.append_digit('1');
        calc.choose_operator(Operator::Add);
        calc.append_digit('1');
        calc.compute_result();
        calc.clear_all();
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn digit_entry_round_trips_decimal_text() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "120.75");
        assert_eq!(calc.current(), "120.75");
    }

    #[test]
    fn second_decimal_point_is_rejected() {
        let mut calc = Calculator::new();
        calc.append_digit('.');
        assert_eq!(calc.current(), ".");
        calc.append_digit('.');
        assert_eq!(calc.current(), ".");

        type_digits(&mut calc, "5.5");
        assert_eq!(calc.current(), ".55");
        assert!(calc.current().matches('.').count() == 1);
    }

    #[test]
    fn operand_length_is_capped() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "12345678901234567890");
        assert_eq!(calc.current().len(), MAX_OPERAND_LEN);
    }

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number("1234567.89"), "1,234,567.89");
        assert_eq!(format_number("1000"), "1,000");
        assert_eq!(format_number("999"), "999");
        assert_eq!(format_number("-1234567"), "-1,234,567");
    }

    #[test]
    fn format_number_passes_special_values_through() {
        assert_eq!(format_number("Error"), "Error");
        assert_eq!(format_number("1.5e20"), "1.5e20");
        assert_eq!(format_number(""), "");
        assert_eq!(format_number("0.5"), "0.5");
    }
}
