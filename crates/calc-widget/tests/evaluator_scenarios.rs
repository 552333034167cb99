//! End-to-end scenarios for the calculator through its public surface.

use calc_widget::prelude::*;

fn press(eval: &mut Evaluator, keys: &str) {
    for ch in keys.chars() {
        match ch {
            '0'..='9' => eval.apply(InputEvent::Digit(ch.to_digit(10).unwrap() as u8)),
            '.' => eval.apply(InputEvent::DecimalPoint),
            '+' => eval.apply(InputEvent::Operator(BinaryOp::Add)),
            '-' => eval.apply(InputEvent::Operator(BinaryOp::Subtract)),
            '*' => eval.apply(InputEvent::Operator(BinaryOp::Multiply)),
            '/' => eval.apply(InputEvent::Operator(BinaryOp::Divide)),
            '^' => eval.apply(InputEvent::Operator(BinaryOp::Power)),
            '=' => eval.apply(InputEvent::Equals),
            _ => panic!("unmapped key {ch}"),
        }
    }
}

// ===== Digit entry =====

#[test]
fn digit_by_digit_entry_matches_whole_number() {
    let mut eval = Evaluator::new();
    press(&mut eval, "1234.75");
    assert_eq!(eval.state().display(), "1234.75");
}

#[test]
fn leading_zeros_collapse() {
    let mut eval = Evaluator::new();
    press(&mut eval, "0007");
    assert_eq!(eval.state().display(), "7");
}

// ===== Chaining without precedence =====

#[test]
fn chaining_evaluates_left_to_right() {
    let mut eval = Evaluator::new();
    press(&mut eval, "2+3*4=");
    assert_eq!(eval.state().display(), "20");
}

#[test]
fn long_chain() {
    let mut eval = Evaluator::new();
    press(&mut eval, "100-10/9*2=");
    // ((100 - 10) / 9) * 2
    assert_eq!(eval.state().display(), "20");
}

#[test]
fn chain_records_every_intermediate_step() {
    let mut eval = Evaluator::new();
    press(&mut eval, "2+3*4=");
    let history: Vec<String> = eval.state().history().iter().map(str::to_string).collect();
    assert_eq!(history, vec!["2 + 3 = 5", "5 * 4 = 20"]);
}

// ===== NaN propagation =====

#[test]
fn divide_by_zero_yields_nan() {
    for numerator in ["1", "0.5", "42"] {
        let mut eval = Evaluator::new();
        press(&mut eval, numerator);
        press(&mut eval, "/0=");
        assert_eq!(eval.state().display(), "NaN", "{numerator} / 0");
    }
}

#[test]
fn nan_flows_through_following_operations() {
    let mut eval = Evaluator::new();
    press(&mut eval, "1/0=+2=");
    assert_eq!(eval.state().display(), "NaN");
    press(&mut eval, "*5=");
    assert_eq!(eval.state().display(), "NaN");
}

#[test]
fn negative_factorial_yields_nan() {
    let mut eval = Evaluator::new();
    press(&mut eval, "0-3=");
    eval.apply(InputEvent::Function(UnaryFn::Factorial));
    assert_eq!(eval.state().display(), "NaN");
}

#[test]
fn combinatorics_table() {
    let mut eval = Evaluator::new();
    press(&mut eval, "4");
    eval.apply(InputEvent::Operator(BinaryOp::Ncr));
    press(&mut eval, "2=");
    assert_eq!(eval.state().display(), "6");

    eval.apply(InputEvent::Clear);
    press(&mut eval, "4");
    eval.apply(InputEvent::Operator(BinaryOp::Npr));
    press(&mut eval, "2=");
    assert_eq!(eval.state().display(), "12");

    eval.apply(InputEvent::Clear);
    press(&mut eval, "2");
    eval.apply(InputEvent::Operator(BinaryOp::Ncr));
    press(&mut eval, "5=");
    assert_eq!(eval.state().display(), "NaN");
}

#[test]
fn factorial_function_key() {
    let mut eval = Evaluator::new();
    press(&mut eval, "5");
    eval.apply(InputEvent::Function(UnaryFn::Factorial));
    assert_eq!(eval.state().display(), "120");
    assert_eq!(eval.state().history().last(), Some("n!(5) = 120"));
}

// ===== Angle units =====

#[test]
fn sin_of_asin_round_trips_in_every_unit() {
    for cycles in 0..3 {
        for x in ["0.5", "1", "0.25"] {
            let mut eval = Evaluator::new();
            for _ in 0..cycles {
                eval.apply(InputEvent::CycleAngleUnit);
            }
            let unit = eval.state().angle_unit();
            press(&mut eval, x);
            eval.apply(InputEvent::Function(UnaryFn::Asin));
            eval.apply(InputEvent::Function(UnaryFn::Sin));
            let value: f64 = eval.state().display().parse().unwrap();
            let expected: f64 = x.parse().unwrap();
            assert!((value - expected).abs() < 1e-9, "sin(asin({x})) in {unit:?}");
        }
    }
}

#[test]
fn hyperbolics_ignore_angle_unit() {
    let mut deg = Evaluator::new();
    press(&mut deg, "1");
    deg.apply(InputEvent::Function(UnaryFn::Tanh));

    let mut grad = Evaluator::new();
    grad.apply(InputEvent::CycleAngleUnit);
    grad.apply(InputEvent::CycleAngleUnit);
    press(&mut grad, "1");
    grad.apply(InputEvent::Function(UnaryFn::Tanh));

    assert_eq!(deg.state().display(), grad.state().display());
}

// ===== Clear and history monotonicity =====

#[test]
fn clear_resets_display_but_keeps_history() {
    let mut eval = Evaluator::new();
    press(&mut eval, "5+3=");
    assert_eq!(eval.state().history().len(), 1);
    eval.apply(InputEvent::Clear);
    assert_eq!(eval.state().display(), "0");
    assert_eq!(eval.state().first_operand(), None);
    assert_eq!(eval.state().pending_op(), None);
    assert_eq!(eval.state().history().len(), 1);
}

#[test]
fn history_never_shrinks() {
    let mut eval = Evaluator::new();
    let mut last_len = 0;
    let script = "5+3=*2=9";
    for ch in script.chars() {
        press(&mut eval, &ch.to_string());
        let len = eval.state().history().len();
        assert!(len >= last_len, "history shrank after {ch}");
        last_len = len;
    }
    eval.apply(InputEvent::Function(UnaryFn::Sqrt));
    assert!(eval.state().history().len() >= last_len);
    eval.apply(InputEvent::Clear);
    assert_eq!(eval.state().history().len(), last_len + 1);
}

// ===== Export =====

#[test]
fn export_is_one_line_per_entry_in_order() {
    let mut eval = Evaluator::new();
    press(&mut eval, "1+2=");
    press(&mut eval, "3*4=");
    press(&mut eval, "9");
    eval.apply(InputEvent::Function(UnaryFn::Sqrt));

    let export = eval.export_history();
    let lines: Vec<&str> = export.lines().collect();
    assert_eq!(lines, vec!["1 + 2 = 3", "3 * 4 = 12", "√(9) = 3"]);
    assert!(!export.ends_with('\n'));
}

// ===== End-to-end scenarios =====

#[test]
fn five_plus_three_scenario() {
    let mut eval = Evaluator::new();
    eval.apply(InputEvent::Digit(5));
    eval.apply(InputEvent::Operator(BinaryOp::Add));
    eval.apply(InputEvent::Digit(3));
    eval.apply(InputEvent::Equals);
    assert_eq!(eval.state().display(), "8");
    let history: Vec<String> = eval.state().history().iter().map(str::to_string).collect();
    assert_eq!(history, vec!["5 + 3 = 8"]);
}

#[test]
fn sqrt_of_nine_scenario() {
    let mut eval = Evaluator::new();
    press(&mut eval, "9");
    eval.apply(InputEvent::Function(UnaryFn::Sqrt));
    assert_eq!(eval.state().display(), "3");
    assert!(eval.state().history().iter().any(|l| l == "√(9) = 3"));
}

// ===== Brackets and backspace =====

#[test]
fn bracket_counter_tracks_balance_only() {
    let mut eval = Evaluator::new();
    eval.apply(InputEvent::Bracket('('));
    eval.apply(InputEvent::Bracket('('));
    eval.apply(InputEvent::Bracket(')'));
    assert_eq!(eval.state().open_brackets(), 1);
    assert_eq!(eval.state().trace(), "(()");
}

#[test]
fn closing_unopened_bracket_is_ignored() {
    let mut eval = Evaluator::new();
    eval.apply(InputEvent::Bracket(')'));
    eval.apply(InputEvent::Bracket('}'));
    assert_eq!(eval.state().open_brackets(), 0);
    assert_eq!(eval.state().trace(), "");
}

#[test]
fn backspace_mirrors_bracket_adjustment() {
    let mut eval = Evaluator::new();
    eval.apply(InputEvent::Bracket('('));
    eval.apply(InputEvent::Bracket(')'));
    assert_eq!(eval.state().open_brackets(), 0);
    // Removing the ")" restores its decrement
    eval.apply(InputEvent::Backspace);
    assert_eq!(eval.state().open_brackets(), 1);
    // Removing the "(" takes its increment back
    eval.apply(InputEvent::Backspace);
    assert_eq!(eval.state().open_brackets(), 0);
}

#[test]
fn backspace_trims_display_and_trace_together() {
    let mut eval = Evaluator::new();
    press(&mut eval, "123");
    eval.apply(InputEvent::Backspace);
    assert_eq!(eval.state().display(), "12");
    assert_eq!(eval.state().trace(), "12");
    eval.apply(InputEvent::Backspace);
    eval.apply(InputEvent::Backspace);
    assert_eq!(eval.state().display(), "0");
    assert_eq!(eval.state().trace(), "");
    // One more on the floor is a no-op reset
    eval.apply(InputEvent::Backspace);
    assert_eq!(eval.state().display(), "0");
}

// ===== Memory =====

#[test]
fn memory_register_flow() {
    let mut eval = Evaluator::new();
    press(&mut eval, "5");
    eval.apply(InputEvent::Memory(MemoryOp::Add));
    eval.apply(InputEvent::Clear);
    press(&mut eval, "2");
    eval.apply(InputEvent::Memory(MemoryOp::Subtract));
    eval.apply(InputEvent::Memory(MemoryOp::Recall));
    assert_eq!(eval.state().display(), "3");
    assert_eq!(eval.state().trace(), "Memory Recall (3)");
    eval.apply(InputEvent::Memory(MemoryOp::Clear));
    assert_eq!(eval.state().memory(), 0.0);
}

// ===== Constants =====

#[test]
fn constants_set_display_and_trace() {
    let mut eval = Evaluator::new();
    eval.apply(InputEvent::Constant(Constant::Pi));
    assert_eq!(eval.state().display(), "3.1415926536");
    assert_eq!(eval.state().trace(), "π");

    let mut eval = Evaluator::new();
    eval.apply(InputEvent::Constant(Constant::E));
    assert_eq!(eval.state().display(), "2.7182818285");
}

// ===== History recall =====

#[test]
fn recalling_an_entry_restores_its_result() {
    let mut eval = Evaluator::new();
    press(&mut eval, "6*7=");
    let entry = eval.state().history().last().unwrap().to_string();
    eval.apply(InputEvent::Clear);
    eval.recall_history_entry(&entry).unwrap();
    assert_eq!(eval.state().display(), "42");
    assert_eq!(eval.state().trace(), "6 * 7 = 42");
    assert_eq!(eval.state().pending_op(), None);
}

#[test]
fn recalling_a_malformed_entry_fails() {
    let mut eval = Evaluator::new();
    let err = eval.recall_history_entry("not a record").unwrap_err();
    assert!(matches!(err, CalcError::EntryWithoutResult { .. }));
}
