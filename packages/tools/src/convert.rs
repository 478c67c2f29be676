//! Decimal to binary and hexadecimal conversion.

use std::fmt;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn to_base(mut n: u128, base: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(DIGITS[(n % base) as usize] as char);
        n /= base;
    }
    digits.iter().rev().collect()
}

pub fn decimal_to_binary(n: u128) -> String {
    to_base(n, 2)
}

pub fn decimal_to_hexadecimal(n: u128) -> String {
    to_base(n, 16)
}

/// Keep the lines that are plain ASCII digit strings.
pub fn parse_decimals(text: &str) -> Vec<u128> {
    text.lines()
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|token| match token.parse::<u128>() {
            Ok(n) => Some(n),
            Err(e) => {
                tracing::debug!("Dropping '{}': {}", token, e);
                None
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub decimal: u128,
    pub binary: String,
    pub hexadecimal: String,
}

impl Conversion {
    pub fn new(decimal: u128) -> Self {
        Self {
            decimal,
            binary: decimal_to_binary(decimal),
            hexadecimal: decimal_to_hexadecimal(decimal),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decimal: {}, Binary: {}, Hexadecimal: {}",
            self.decimal, self.binary, self.hexadecimal
        )
    }
}

pub fn convert_all(text: &str) -> Vec<Conversion> {
    parse_decimals(text)
        .into_iter()
        .map(Conversion::new)
        .collect()
}
