//! Non-empty, ordered fault sequence carried by `Validation::Invalid`.

use std::fmt;

use smallvec::{SmallVec, smallvec};

use crate::error::ContractViolation;

/// A non-empty, ordered sequence of faults.
///
/// Order is insertion order; [`Faults::append`] keeps the receiver's faults
/// before the argument's. Up to two faults are stored inline.
///
/// # Examples
///
/// ```rust
/// use outcomes::Faults;
///
/// let faults = Faults::single("name required").append(Faults::from_parts("bad email", ["bad age"]));
/// assert_eq!(faults.into_vec(), vec!["name required", "bad email", "bad age"]);
///
/// assert!(Faults::<&str>::try_from_iter(Vec::new()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<E>", into = "Vec<E>", bound(serialize = "E: Clone + serde::Serialize"))
)]
pub struct Faults<E> {
    items: SmallVec<[E; 2]>,
}

impl<E> Faults<E> {
    /// A sequence holding exactly one fault.
    pub fn single(fault: E) -> Self {
        Self {
            items: smallvec![fault],
        }
    }

    /// A sequence holding `first` followed by `rest`, in order.
    pub fn from_parts<I>(first: E, rest: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut items: SmallVec<[E; 2]> = smallvec![first];
        items.extend(rest);
        Self { items }
    }

    /// Builds a sequence from an arbitrary iterator.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::EmptyFaults`] if the iterator yields nothing.
    pub fn try_from_iter<I>(faults: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = E>,
    {
        let items: SmallVec<[E; 2]> = faults.into_iter().collect();
        if items.is_empty() {
            Err(ContractViolation::EmptyFaults {
                container: "Validation",
            })
        } else {
            Ok(Self { items })
        }
    }

    /// Concatenates two sequences: `self`'s faults first, then `other`'s.
    #[must_use]
    pub fn append(mut self, other: Self) -> Self {
        self.items.extend(other.items);
        self
    }

    /// Returns a sequence with `fault` added at the end.
    #[must_use]
    pub fn with(mut self, fault: E) -> Self {
        self.items.push(fault);
        self
    }

    /// Transforms every fault, preserving order.
    pub fn map<E2, F>(self, function: F) -> Faults<E2>
    where
        F: FnMut(E) -> E2,
    {
        Faults {
            items: self.items.into_iter().map(function).collect(),
        }
    }

    /// Number of faults; always at least one.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: a fault sequence is never empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The earliest fault.
    pub fn first(&self) -> &E {
        &self.items[0]
    }

    /// The latest fault.
    pub fn last(&self) -> &E {
        &self.items[self.items.len() - 1]
    }

    /// Iterates over the faults in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Views the faults as a slice.
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Converts into a `Vec`, preserving order.
    pub fn into_vec(self) -> Vec<E> {
        self.items.into_vec()
    }
}

impl<E: fmt::Debug> fmt::Debug for Faults<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for Faults<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (index, fault) in self.items.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{fault}")?;
        }
        formatter.write_str("]")
    }
}

impl<E> TryFrom<Vec<E>> for Faults<E> {
    type Error = ContractViolation;

    fn try_from(faults: Vec<E>) -> Result<Self, Self::Error> {
        Self::try_from_iter(faults)
    }
}

impl<E> From<Faults<E>> for Vec<E> {
    fn from(faults: Faults<E>) -> Self {
        faults.into_vec()
    }
}

impl<E> IntoIterator for Faults<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Faults<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_append_keeps_receiver_first() {
        let combined = Faults::from_parts(1, [2]).append(Faults::from_parts(3, [4, 5]));
        assert_eq!(combined.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(*combined.first(), 1);
        assert_eq!(*combined.last(), 5);
    }

    #[rstest]
    fn test_try_from_iter_rejects_empty() {
        let result = Faults::<String>::try_from_iter(std::iter::empty());
        assert_eq!(
            result,
            Err(ContractViolation::EmptyFaults {
                container: "Validation"
            })
        );
    }

    #[rstest]
    fn test_display_lists_faults() {
        let faults = Faults::from_parts("a", ["b"]);
        assert_eq!(faults.to_string(), "[a, b]");
        assert_eq!(format!("{faults:?}"), "[\"a\", \"b\"]");
    }

    #[rstest]
    fn test_with_appends_single_fault() {
        let faults = Faults::single('x').with('y');
        assert_eq!(faults.len(), 2);
        assert!(!faults.is_empty());
    }
}
