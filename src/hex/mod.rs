// ============================================================================
// Hex Module
// Hexadecimal text notation: validation, parsing, and formatting
// ============================================================================
//
// Notation: [-]WHOLE[.FRAC], hex digits in either case, at most 16 digits
// per side. Either side may be empty. The canonical output form is
// lowercase with no leading whole zeros and no trailing fraction zeros.

mod formatter;
mod parser;
mod validator;

pub use formatter::{format, INVALID_TEXT, MAX_FORMATTED_LEN};
pub use parser::{parse, parse_hex, FIELD_DIGITS};
pub use validator::hex_is_valid;
