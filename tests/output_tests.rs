// tests/output_tests.rs

use serde_json::json;
use spoken_math::ast::{BinOp, Expr, Function};
use spoken_math::convert;
use spoken_math::output::{to_json, to_json_string, to_latex, to_spoken, to_tree};

fn spoken(input: &str) -> String {
    to_spoken(&convert(input).unwrap())
}

fn latex(input: &str) -> String {
    to_latex(&convert(input).unwrap())
}

fn tree(input: &str) -> String {
    to_tree(&convert(input).unwrap())
}

// ============================================================================
// Canonical spoken form
// ============================================================================

#[test]
fn test_spoken_uses_english_vocabulary() {
    assert_eq!(
        spoken("klammer auf 1 und x klammer zu mal 3"),
        "open parenthesis 1 plus x close parenthesis times 3"
    );
    assert_eq!(spoken("wurzel aus x geteilt durch 2"), "square root of x divided by 2");
    assert_eq!(spoken("a abziehen b"), "a minus b");
}

#[test]
fn test_spoken_canonical_function_names() {
    assert_eq!(spoken("sinus x"), "sin x");
    assert_eq!(spoken("cosine x"), "cos x");
    assert_eq!(spoken("ln x"), "log x");
    assert_eq!(spoken("tangent open bracket x plus 1 close bracket"), "tan open parenthesis x plus 1 close parenthesis");
}

#[test]
fn test_spoken_drops_redundant_groups() {
    assert_eq!(
        spoken("open parenthesis 1 times 2 close parenthesis plus 3"),
        "1 times 2 plus 3"
    );
    assert_eq!(
        spoken("open parenthesis open parenthesis x close parenthesis close parenthesis"),
        "x"
    );
    assert_eq!(
        spoken("open parenthesis a minus b close parenthesis minus c"),
        "a minus b minus c"
    );
}

#[test]
fn test_spoken_keeps_required_groups() {
    assert_eq!(
        spoken("a divided by open parenthesis b times c close parenthesis"),
        "a divided by open parenthesis b times c close parenthesis"
    );
    assert_eq!(
        spoken("open parenthesis x plus 1 close parenthesis to the power of 2"),
        "open parenthesis x plus 1 close parenthesis to the power of 2"
    );
}

#[test]
fn test_spoken_numbers_keep_their_digits() {
    assert_eq!(spoken("2.50 plus -1"), "2.50 plus -1");
}

#[test]
fn test_display_is_spoken_form() {
    let expr = convert("sin x plus 1").unwrap();
    assert_eq!(format!("{}", expr), "sin x plus 1");
}

// ============================================================================
// LaTeX
// ============================================================================

#[test]
fn test_latex_arithmetic() {
    assert_eq!(latex("1 plus 2 times x"), r"1 + 2 \cdot x");
    assert_eq!(latex("x over 2 plus 1"), r"\frac{x}{2} + 1");
    assert_eq!(
        latex("2 times open parenthesis x minus 1 close parenthesis"),
        r"2 \cdot \left(x - 1\right)"
    );
    assert_eq!(latex("x minus -3"), r"x - \left(-3\right)");
}

#[test]
fn test_latex_powers() {
    assert_eq!(latex("x hoch 2"), "x^{2}");
    assert_eq!(latex("x hoch open bracket n plus 1 close bracket"), "x^{n + 1}");
    assert_eq!(
        latex("sin x to the power of 2"),
        r"\left(\sin\left(x\right)\right)^{2}"
    );
}

#[test]
fn test_latex_symbols() {
    assert_eq!(latex("theta plus 1"), r"\mathit{theta} + 1");
    assert_eq!(latex("x_max"), r"\mathit{x\_max}");
}

#[test]
fn test_latex_nested_functions() {
    assert_eq!(
        latex("square root of abs x"),
        r"\sqrt{\left|x\right|}"
    );
    assert_eq!(latex("exp ln x"), r"e^{\log\left(x\right)}");
}

// ============================================================================
// Tree form
// ============================================================================

#[test]
fn test_tree_form() {
    assert_eq!(tree("2 plus 3 times 4"), "(add 2 (mul 3 4))");
    assert_eq!(tree("sinus x hoch 2"), "(pow (sin x) 2)");
    assert_eq!(tree("wurzel aus 2.50"), "(sqrt 2.50)");
    assert_eq!(tree("arcsin y durch 2"), "(div (arcsin y) 2)");
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_binary() {
    let expr = convert("2 plus x").unwrap();
    assert_eq!(
        to_json(&expr),
        json!({
            "type": "binary",
            "op": "add",
            "left": { "type": "number", "value": "2" },
            "right": { "type": "symbol", "name": "x" },
        })
    );
}

#[test]
fn test_json_power_and_function() {
    let expr = Expr::power(
        Expr::function(Function::Sqrt, Expr::symbol("y")),
        Expr::number(-1),
    );
    assert_eq!(
        to_json(&expr),
        json!({
            "type": "power",
            "base": {
                "type": "function",
                "name": "sqrt",
                "argument": { "type": "symbol", "name": "y" },
            },
            "exponent": { "type": "number", "value": "-1" },
        })
    );
}

#[test]
fn test_json_numbers_are_exact_strings() {
    let expr = convert("0.1 plus 0.2").unwrap();
    let value = to_json(&expr);
    assert_eq!(value["left"]["value"], "0.1");
    assert_eq!(value["right"]["value"], "0.2");

    let long = convert("-98765432109876543210987654321098765432.5").unwrap();
    assert_eq!(
        to_json(&long)["value"],
        "-98765432109876543210987654321098765432.5"
    );
    assert_eq!(
        to_latex(&Expr::power(long, Expr::number(2))),
        r"\left(-98765432109876543210987654321098765432.5\right)^{2}"
    );
}

#[test]
fn test_json_string_compact_and_pretty() {
    let expr = Expr::binary(BinOp::Mul, Expr::number(3), Expr::symbol("z"));

    let compact = to_json_string(&expr, false).unwrap();
    assert!(!compact.contains('\n'));

    let pretty = to_json_string(&expr, true).unwrap();
    assert!(pretty.contains('\n'));

    let reparsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(reparsed, to_json(&expr));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
        reparsed
    );
}
