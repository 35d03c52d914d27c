use std::fmt;

use super::errors::DomainError;

const CPF_LENGTH: usize = 11;

/// A validated Brazilian individual taxpayer number (CPF).
///
/// Formatting characters (`.`, `-` and whitespace) are accepted on input and
/// dropped; only the 11 digits are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId {
    digits: [u8; CPF_LENGTH],
}

impl TaxId {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let mut digits = [0u8; CPF_LENGTH];
        let mut len = 0;
        for c in raw.chars() {
            if c == '.' || c == '-' || c.is_whitespace() {
                continue;
            }
            let digit = c.to_digit(10).ok_or_else(DomainError::invalid_cpf)?;
            if len == CPF_LENGTH {
                return Err(DomainError::invalid_cpf());
            }
            digits[len] = digit as u8;
            len += 1;
        }
        if len != CPF_LENGTH || digits.iter().all(|d| *d == digits[0]) {
            return Err(DomainError::invalid_cpf());
        }
        if check_digit(&digits[..9]) != digits[9] || check_digit(&digits[..10]) != digits[10] {
            return Err(DomainError::invalid_cpf());
        }
        Ok(Self { digits })
    }

    /// The 11 digits without formatting.
    pub fn digits(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

/// Weights run from `len + 1` down to 2 over the given prefix.
fn check_digit(prefix: &[u8]) -> u8 {
    let weight_start = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * (weight_start - i as u32))
        .sum();
    let rest = sum % 11;
    if rest < 2 {
        0
    } else {
        (11 - rest) as u8
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.digits();
        write!(f, "{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}
