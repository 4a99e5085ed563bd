use crate::error::{ErrorKind, Result};
use num_traits::{CheckedAdd, Zero};
use std::fmt::{Debug, Display, Formatter};

/// A weight-type usable in the shortest path algorithms of this crate.
///
/// Sums of weights are always computed with overflow checks, so there is no infinity value of this type.
/// Unreachable vertices are represented by [`Distance::Unreachable`] instead.
pub trait Weight: Ord + Copy + Debug + Display + Zero + CheckedAdd {
    /// Returns true if this weight is smaller than zero.
    #[inline]
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

macro_rules! impl_weight {
    ($weight_type:ty) => {
        impl Weight for $weight_type {}
    };
}

impl_weight!(usize);
impl_weight!(isize);
impl_weight!(u8);
impl_weight!(i8);
impl_weight!(u16);
impl_weight!(i16);
impl_weight!(u32);
impl_weight!(i32);
impl_weight!(u64);
impl_weight!(i64);
impl_weight!(u128);
impl_weight!(i128);

/// The length of a shortest path, or `Unreachable` if there is no path.
///
/// The variant order makes every finite distance compare smaller than `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<WeightType> {
    /// A path of the given length exists.
    Finite(WeightType),
    /// No path exists.
    Unreachable,
}

impl<WeightType: Weight> Distance<WeightType> {
    /// The distance of a vertex to itself.
    #[inline]
    pub fn zero() -> Self {
        Distance::Finite(WeightType::zero())
    }

    /// Returns true if this distance is not `Unreachable`.
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the length of the path, or `None` if there is no path.
    #[inline]
    pub fn finite(&self) -> Option<WeightType> {
        match self {
            Distance::Finite(weight) => Some(*weight),
            Distance::Unreachable => None,
        }
    }

    /// Extends this distance by an edge of the given weight.
    /// `Unreachable` stays `Unreachable`, and a sum outside of the range of `WeightType` is reported
    /// as [`PathSum::AboveMaximum`] or [`PathSum::BelowMinimum`], depending on the sign of the weight.
    #[inline]
    pub fn extend(self, weight: WeightType) -> PathSum<WeightType> {
        match self {
            Distance::Finite(distance) => match distance.checked_add(&weight) {
                Some(sum) => PathSum::Distance(Distance::Finite(sum)),
                None if weight.is_negative() => PathSum::BelowMinimum,
                None => PathSum::AboveMaximum,
            },
            Distance::Unreachable => PathSum::Distance(Distance::Unreachable),
        }
    }

    /// Concatenates two paths. If any of them does not exist, the result is `Unreachable`.
    #[inline]
    pub fn concatenate(self, other: Self) -> PathSum<WeightType> {
        match other {
            Distance::Finite(weight) => self.extend(weight),
            Distance::Unreachable => PathSum::Distance(Distance::Unreachable),
        }
    }

    /// Like [`extend`](Distance::extend), but a sum that does not fit into `WeightType` is an error.
    #[inline]
    pub fn checked_add_weight(self, weight: WeightType) -> Result<Self> {
        self.extend(weight).into_result()
    }

    /// Like [`concatenate`](Distance::concatenate), but a sum that does not fit into `WeightType` is an error.
    #[inline]
    pub fn checked_add(self, other: Self) -> Result<Self> {
        self.concatenate(other).into_result()
    }
}

/// The length of a path that was extended by an edge or another path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSum<WeightType> {
    /// The length fits into the weight type.
    Distance(Distance<WeightType>),
    /// The length is larger than the maximum of the weight type.
    AboveMaximum,
    /// The length is smaller than the minimum of the weight type.
    BelowMinimum,
}

impl<WeightType> PathSum<WeightType> {
    /// Returns the sum if it fits, and `WeightOverflow` otherwise.
    pub fn into_result(self) -> Result<Distance<WeightType>> {
        match self {
            PathSum::Distance(distance) => Ok(distance),
            PathSum::AboveMaximum | PathSum::BelowMinimum => bail!(ErrorKind::WeightOverflow),
        }
    }
}

impl<WeightType: Weight> From<WeightType> for Distance<WeightType> {
    fn from(weight: WeightType) -> Self {
        Distance::Finite(weight)
    }
}

impl<WeightType: Display> Display for Distance<WeightType> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(weight) => write!(f, "{}", weight),
            Distance::Unreachable => write!(f, "inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Distance, PathSum};
    use crate::error::ErrorKind;

    #[test]
    fn test_unreachable_is_larger_than_any_finite_distance() {
        assert!(Distance::Finite(i64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(-5) < Distance::Finite(3));
        assert_eq!(
            Distance::Finite(7).min(Distance::Unreachable),
            Distance::Finite(7)
        );
    }

    #[test]
    fn test_unreachable_short_circuits() {
        let unreachable = Distance::<i32>::Unreachable;
        assert_eq!(unreachable.checked_add_weight(-3).unwrap(), unreachable);
        assert_eq!(
            Distance::Finite(4).checked_add(unreachable).unwrap(),
            unreachable
        );
        assert_eq!(
            Distance::Finite(4).checked_add_weight(-6).unwrap(),
            Distance::Finite(-2)
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let error = Distance::Finite(i8::MAX).checked_add_weight(1).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::WeightOverflow));
    }

    #[test]
    fn test_overflow_direction() {
        assert_eq!(Distance::Finite(200u8).extend(100), PathSum::AboveMaximum);
        assert_eq!(Distance::Finite(-100i8).extend(-100), PathSum::BelowMinimum);
        assert_eq!(Distance::Finite(100i8).extend(100), PathSum::AboveMaximum);
        assert_eq!(
            Distance::Finite(-100i8).extend(100),
            PathSum::Distance(Distance::Finite(0))
        );
        assert_eq!(
            Distance::Finite(250u8).concatenate(Distance::Finite(10)),
            PathSum::AboveMaximum
        );
        assert_eq!(
            Distance::<u8>::Unreachable.extend(u8::MAX),
            PathSum::Distance(Distance::Unreachable)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Distance::Finite(-2).to_string(), "-2");
        assert_eq!(Distance::<u8>::Unreachable.to_string(), "inf");
    }
}
