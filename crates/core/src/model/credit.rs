use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CreditError {
    #[error("{value} is not an allowed credit value (expected one of 0, 20, 40, 60, 80, 100, 120)")]
    NotAllowed { value: u16 },

    #[error("invalid credit value: {raw:?}")]
    Unparsable { raw: String },
}

/// A credit count restricted to the 20-credit buckets a module can award.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct Credit(u16);

impl Credit {
    pub const STEP: u16 = 20;
    pub const MAX: u16 = 120;

    /// Every allowed value, lowest first.
    pub const ALL: [Credit; 7] = [
        Credit(0),
        Credit(20),
        Credit(40),
        Credit(60),
        Credit(80),
        Credit(100),
        Credit(120),
    ];

    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Credit {
    type Error = CreditError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value <= Self::MAX && value % Self::STEP == 0 {
            Ok(Self(value))
        } else {
            Err(CreditError::NotAllowed { value })
        }
    }
}

impl From<Credit> for u16 {
    fn from(credit: Credit) -> Self {
        credit.0
    }
}

impl FromStr for Credit {
    type Err = CreditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<u16>()
            .map_err(|_| CreditError::Unparsable {
                raw: trimmed.to_string(),
            })?;
        Self::try_from(value)
    }
}

impl fmt::Debug for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credit({})", self.0)
    }
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three selectors on the credit-entry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CreditField {
    Pass,
    Defer,
    Fail,
}

impl CreditField {
    pub const ALL: [CreditField; 3] = [CreditField::Pass, CreditField::Defer, CreditField::Fail];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CreditField::Pass => "Pass Credits",
            CreditField::Defer => "Defer Credits",
            CreditField::Fail => "Fail Credits",
        }
    }

    /// Stable identifier, matching the request field name.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            CreditField::Pass => "pass_credit",
            CreditField::Defer => "defer_credit",
            CreditField::Fail => "fail_credit",
        }
    }
}

/// Pass/defer/fail credits submitted for a single calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CreditTuple {
    pub pass: Credit,
    pub defer: Credit,
    pub fail: Credit,
}

impl CreditTuple {
    #[must_use]
    pub fn new(pass: Credit, defer: Credit, fail: Credit) -> Self {
        Self { pass, defer, fail }
    }

    /// Build a tuple from raw integers.
    ///
    /// # Errors
    ///
    /// Returns `CreditError::NotAllowed` for the first value outside the allowed set.
    pub fn from_values(pass: u16, defer: u16, fail: u16) -> Result<Self, CreditError> {
        Ok(Self {
            pass: Credit::try_from(pass)?,
            defer: Credit::try_from(defer)?,
            fail: Credit::try_from(fail)?,
        })
    }

    #[must_use]
    pub fn get(&self, field: CreditField) -> Credit {
        match field {
            CreditField::Pass => self.pass,
            CreditField::Defer => self.defer,
            CreditField::Fail => self.fail,
        }
    }

    #[must_use]
    pub fn with(mut self, field: CreditField, credit: Credit) -> Self {
        match field {
            CreditField::Pass => self.pass = credit,
            CreditField::Defer => self.defer = credit,
            CreditField::Fail => self.fail = credit,
        }
        self
    }
}

impl fmt::Display for CreditTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.pass, self.defer, self.fail)
    }
}
