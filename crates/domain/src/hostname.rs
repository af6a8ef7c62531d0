use crate::DomainError;
use std::fmt;
use std::str::FromStr;

const MAX_HOSTNAME_LEN: usize = 253;

/// Host name accepted by the forward and record probes.
///
/// Only structural checks happen here; whether the name exists is the
/// resolver's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(String);

impl Hostname {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Hostname {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty()
            || name.len() > MAX_HOSTNAME_LEN
            || name.chars().any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(DomainError::InvalidDomainName(s.to_string()));
        }
        Ok(Self(name.to_string()))
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
