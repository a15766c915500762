//! Direction and ordering selectors.

/// Direction in which tabulated points are taken, relative to a reference
/// point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sense {
    /// Points at and after the reference point.
    #[default]
    Forward,
    /// Points at and before the reference point.
    Backward,
}

impl Sense {
    /// Returns true for [`Sense::Forward`].
    #[must_use]
    pub fn is_forward(self) -> bool {
        self == Sense::Forward
    }

    /// Returns true for [`Sense::Backward`].
    #[must_use]
    pub fn is_backward(self) -> bool {
        self == Sense::Backward
    }
}

/// Ordering of an enumerated output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Natural generation order.
    Regular,
    /// Natural order reversed.
    Reversed,
}

impl Order {
    /// Returns true for [`Order::Regular`].
    #[must_use]
    pub fn is_regular(self) -> bool {
        self == Order::Regular
    }

    /// Returns true for [`Order::Reversed`].
    #[must_use]
    pub fn is_reversed(self) -> bool {
        self == Order::Reversed
    }

    /// Applies the ordering to a regularly ordered vector.
    #[must_use]
    pub fn apply<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self.is_reversed() {
            items.reverse();
        }
        items
    }
}
