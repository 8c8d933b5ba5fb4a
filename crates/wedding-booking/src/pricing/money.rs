use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Monetary amount in whole cents. Every price, discount and total flows through this type.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(pub u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Subtracts `other`, clamping at zero instead of wrapping.
    pub const fn saturating_sub(self, other: Cents) -> Cents {
        Cents(self.0.saturating_sub(other.0))
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Cents> for Cents {
    fn sum<I: Iterator<Item = &'a Cents>>(iter: I) -> Cents {
        iter.copied().sum()
    }
}

/// Renders as US dollars, e.g. `$5,200.00`.
impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}.{:02}",
            group_thousands(self.0 / 100),
            self.0 % 100
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Cents(520_000).to_string(), "$5,200.00");
        assert_eq!(Cents(1_234_567_890).to_string(), "$12,345,678.90");
        assert_eq!(Cents(100_000).to_string(), "$1,000.00");
    }

    #[test]
    fn display_handles_small_amounts() {
        assert_eq!(Cents::ZERO.to_string(), "$0.00");
        assert_eq!(Cents(7).to_string(), "$0.07");
        assert_eq!(Cents(15_000).to_string(), "$150.00");
    }

    #[test]
    fn saturating_sub_clamps_at_zero() {
        assert_eq!(Cents(3_000).saturating_sub(Cents(10_000)), Cents::ZERO);
        assert_eq!(Cents(10_000).saturating_sub(Cents(3_000)), Cents(7_000));
    }

    #[test]
    fn sum_adds_every_amount() {
        let amounts = [Cents(30_000), Cents(30_000), Cents(15_000)];
        assert_eq!(amounts.iter().sum::<Cents>(), Cents(75_000));
        assert_eq!(Vec::<Cents>::new().into_iter().sum::<Cents>(), Cents::ZERO);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&Cents(500_000)).expect("serialize cents");
        assert_eq!(json, "500000");
    }
}
