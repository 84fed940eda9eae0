// Checked Arithmetic
//
// Every operation on reserve or share quantities goes through here so that
// overflow, underflow and division by zero surface as AmmError instead of
// wrapping. Amounts are u64; intermediate products are widened to u128.

use crate::errors::AmmError;

pub trait SafeMath: Sized {
    fn safe_add(self, v: Self) -> Result<Self, AmmError>;
    fn safe_sub(self, v: Self) -> Result<Self, AmmError>;
    fn safe_mul(self, v: Self) -> Result<Self, AmmError>;
    fn safe_div(self, v: Self) -> Result<Self, AmmError>;
}

macro_rules! impl_safe_math {
    ($type:ty) => {
        impl SafeMath for $type {
            fn safe_add(self, v: $type) -> Result<$type, AmmError> {
                self.checked_add(v).ok_or(AmmError::Overflow)
            }

            fn safe_sub(self, v: $type) -> Result<$type, AmmError> {
                self.checked_sub(v).ok_or(AmmError::Underflow)
            }

            fn safe_mul(self, v: $type) -> Result<$type, AmmError> {
                self.checked_mul(v).ok_or(AmmError::Overflow)
            }

            fn safe_div(self, v: $type) -> Result<$type, AmmError> {
                self.checked_div(v).ok_or(AmmError::DivideByZero)
            }
        }
    };
}

impl_safe_math!(u64);
impl_safe_math!(u128);

/// Narrow a u128 intermediate back to a u64 amount.
pub fn to_u64(value: u128) -> Result<u64, AmmError> {
    u64::try_from(value).map_err(|_| AmmError::Overflow)
}

/// `floor(a * b / d)` with a u128 intermediate.
pub fn mul_div_floor(a: u64, b: u64, d: u64) -> Result<u64, AmmError> {
    let product = (a as u128).safe_mul(b as u128)?;
    to_u64(product.safe_div(d as u128)?)
}

/// `ceil(a * b / d)` with a u128 intermediate.
pub fn mul_div_ceil(a: u64, b: u64, d: u64) -> Result<u64, AmmError> {
    let product = (a as u128).safe_mul(b as u128)?;
    let quotient = product.safe_div(d as u128)?;
    let quotient = if product % (d as u128) == 0 {
        quotient
    } else {
        quotient.safe_add(1)?
    };
    to_u64(quotient)
}

/// Integer square root, `floor(sqrt(n))`, by Newton's method.
///
/// The initial guess `2^(bits/2 + 1)` is always above the true root, so the
/// iterates decrease monotonically until they stop moving.
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    let shift = (127 - n.leading_zeros()) / 2 + 1;
    let mut x = 1u128 << shift;

    loop {
        let next = (x + n / x) / 2;
        if next >= x {
            return x;
        }
        x = next;
    }
}
