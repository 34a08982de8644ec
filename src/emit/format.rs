/// Largest number of fixed decimal places accepted; more than f32 carries
pub const MAX_FIXED_DECIMALS: u8 = 9;

/// How coordinates are written as C float literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Shortest decimal that parses back to the same `f32`, always with a
    /// fractional part or exponent (`0.0`, `0.1`, `1e-7`)
    #[default]
    Shortest,
    /// Exactly this many decimal places
    Fixed(u8),
}

impl Precision {
    /// `None` selects [`Precision::Shortest`]; fixed places are capped at
    /// [`MAX_FIXED_DECIMALS`]
    pub fn from_decimals(decimals: Option<u8>) -> Self {
        match decimals {
            None => Precision::Shortest,
            Some(n) => Precision::Fixed(n.min(MAX_FIXED_DECIMALS)),
        }
    }

    pub fn format(self, value: f32) -> String {
        match self {
            Precision::Shortest => format!("{:?}", value),
            Precision::Fixed(places) => {
                let s = format!("{:.*}", places as usize, value);
                // -0.000 -> 0.000
                match s.strip_prefix('-') {
                    Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
                    _ => s,
                }
            }
        }
    }
}
