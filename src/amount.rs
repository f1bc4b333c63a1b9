use crate::Error;
use serde::Serialize;
use std::{convert::TryFrom, fmt};

// Satoshi, within 0..=i64::MAX.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);
    pub const MAX: Amount = Amount(i64::MAX as u64);

    pub fn to_sat(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).filter(|sum| *sum <= Self::MAX.0).map(Amount)
    }
}

impl TryFrom<i64> for Amount {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Amount)
            .map_err(|_| Error::invalid_argument(format!("Negative amount {}", value)))
    }
}

impl TryFrom<u64> for Amount {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value <= Self::MAX.0 {
            Ok(Amount(value))
        } else {
            Err(Error::invalid_argument(format!("Amount {} out of range", value)))
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} sat", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Amount;
    use crate::ErrorKind;
    use std::convert::TryFrom;

    #[test]
    fn from_signed() {
        assert_eq!(Amount::try_from(1000i64).map(Amount::to_sat), Ok(1000));
        assert_eq!(Amount::try_from(0i64), Ok(Amount::ZERO));
        assert_eq!(Amount::try_from(i64::MAX), Ok(Amount::MAX));
        let error = Amount::try_from(-1i64).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert_eq!(error.message(), "Negative amount -1");
    }

    #[test]
    fn from_unsigned() {
        assert_eq!(Amount::try_from(i64::MAX as u64), Ok(Amount::MAX));
        let error = Amount::try_from(u64::MAX).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn checked_add() {
        let a = Amount::try_from(1000i64).unwrap();
        let b = Amount::try_from(2500i64).unwrap();
        assert_eq!(a.checked_add(b).map(Amount::to_sat), Some(3500));
        assert_eq!(Amount::MAX.checked_add(a), None);
    }

    #[test]
    fn display() {
        assert_eq!(Amount::try_from(2500i64).unwrap().to_string(), "2500 sat");
    }
}
