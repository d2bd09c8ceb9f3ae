//! How many matching rules a deletion may remove.

/// Upper bound on the number of rules [`delete_rules`] removes.
///
/// Numbers convert with the usual policy: zero or less means every match,
/// a positive number is the bound. `None` and NaN fall back to the default,
/// which removes only the most recent match.
///
/// [`delete_rules`]: crate::StylesheetHandle::delete_rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackCount {
    /// Only the last matching rule.
    #[default]
    Last,
    /// Every matching rule.
    All,
    /// At most this many matching rules.
    AtMost(usize),
}

impl BackCount {
    /// Resolve to a concrete bound for a rule list of `len` rules.
    pub fn limit(self, len: usize) -> usize {
        match self {
            Self::Last => 1,
            Self::All => len,
            Self::AtMost(n) => n,
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for BackCount {
                fn from(n: $ty) -> Self {
                    if n <= 0 {
                        Self::All
                    } else {
                        Self::AtMost(usize::try_from(n).unwrap_or(usize::MAX))
                    }
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for BackCount {
                fn from(n: $ty) -> Self {
                    if n == 0 {
                        Self::All
                    } else {
                        Self::AtMost(usize::try_from(n).unwrap_or(usize::MAX))
                    }
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for BackCount {
    /// Fractions truncate toward zero, so `0.5` removes nothing.
    fn from(n: f64) -> Self {
        if n.is_nan() {
            Self::Last
        } else if n <= 0.0 || n.is_infinite() {
            Self::All
        } else {
            // Saturating cast; the value is finite and positive here.
            Self::AtMost(n.trunc() as usize)
        }
    }
}

impl From<f32> for BackCount {
    fn from(n: f32) -> Self {
        Self::from(f64::from(n))
    }
}

impl<T: Into<BackCount>> From<Option<T>> for BackCount {
    fn from(n: Option<T>) -> Self {
        n.map_or(Self::Last, Into::into)
    }
}
