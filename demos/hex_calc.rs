// ============================================================================
// Hex Calculator Example
// ============================================================================
//
// Usage:
//   cargo run --example hex_calc -- <lhs> <op> [<rhs>]
//
// Binary ops: + - cmp
// Unary ops:  neg halve double
//
//   cargo run --example hex_calc -- -c7252a193ae07.7a51de9ea0538c5 + d09079.1e6d601
//   cargo run --features logging --example hex_calc -- 0.0000000000000001 halve

use hexfixed::prelude::*;
use std::process::ExitCode;

fn describe(value: Fixedpoint) -> String {
    match value.tag() {
        Tag::ValidNonNegative | Tag::ValidNegative => format(value),
        Tag::Error => "error: malformed operand".to_string(),
        Tag::PositiveOverflow => "positive overflow".to_string(),
        Tag::NegativeOverflow => "negative overflow".to_string(),
        Tag::PositiveUnderflow => "positive underflow".to_string(),
        Tag::NegativeUnderflow => "negative underflow".to_string(),
    }
}

fn operand(text: &str) -> Result<Fixedpoint, String> {
    parse_hex(text).map_err(|e| format!("{text:?}: {e}"))
}

fn run(args: &[String]) -> Result<String, String> {
    match args {
        [lhs, op, rhs] => {
            let (lhs, rhs) = (operand(lhs)?, operand(rhs)?);
            match op.as_str() {
                "+" => Ok(describe(add(lhs, rhs))),
                "-" => Ok(describe(sub(lhs, rhs))),
                "cmp" => Ok(hexfixed::engine::compare_i32(lhs, rhs).to_string()),
                other => Err(format!("unknown binary operator {other:?}")),
            }
        }
        [value, op] => {
            let value = operand(value)?;
            match op.as_str() {
                "neg" => Ok(describe(negate(value))),
                "halve" => Ok(describe(halve(value))),
                "double" => Ok(describe(double(value))),
                other => Err(format!("unknown unary operator {other:?}")),
            }
        }
        _ => Err("usage: hex_calc <lhs> <op> [<rhs>]".to_string()),
    }
}

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
