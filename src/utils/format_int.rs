use std::fmt;

/// Integer printed with `'` between groups of three digits, e.g. `1'234'567`.
pub struct NiceInt(i128);

impl NiceInt {
    pub fn from(value: impl Into<i128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as i128)
    }
}

impl fmt::Display for NiceInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let head = digits.len() % 3;
        if head != 0 {
            f.write_str(&digits[..head])?;
        }
        for (i, group) in digits.as_bytes()[head..].chunks(3).enumerate() {
            if head != 0 || i != 0 {
                f.write_str("'")?;
            }
            // ASCII digits, so every chunk is valid UTF-8
            f.write_str(std::str::from_utf8(group).map_err(|_| fmt::Error)?)?;
        }
        Ok(())
    }
}
