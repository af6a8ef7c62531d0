use crate::DomainError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Dotted-decimal IPv4 address given on the command line.
///
/// Parsing is deliberately literal: the input must split on `.` into exactly
/// four tokens and every token must parse as an integer in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Address {
    octets: [u8; 4],
}

impl Ipv4Address {
    pub fn new(octets: [u8; 4]) -> Self {
        Self { octets }
    }

    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    pub fn to_ipv4(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets)
    }
}

impl FromStr for Ipv4Address {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(DomainError::InvalidIpAddress(s.to_string()));
        }

        let mut octets = [0u8; 4];
        for (octet, part) in octets.iter_mut().zip(&parts) {
            *octet = part
                .parse::<u8>()
                .map_err(|_| DomainError::InvalidIpAddress(s.to_string()))?;
        }

        Ok(Self { octets })
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.octets;
        write!(f, "{}.{}.{}.{}", o[0], o[1], o[2], o[3])
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(address: Ipv4Address) -> Self {
        address.to_ipv4()
    }
}
