use {
    crate::PagerError,
    std::{fmt, str::FromStr},
};

/// Page replacement policy.
///
/// Decides which occupied frame gives up its page when a fault happens and
/// every frame is already in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Evicts the page loaded earliest. Hits do not refresh the load order.
    #[default]
    Fifo,

    /// Evicts the page that was used least recently.
    Lru,

    /// Evicts the page that was used most recently.
    Mru,

    /// Evicts the page loaded most recently.
    Lifo,

    /// Evicts the page whose next use lies farthest in the future.
    ///
    /// Needs the whole reference stream upfront, so it only serves as the
    /// best-case baseline for the other policies.
    Optimal,
}

impl Policy {
    /// All supported policies.
    pub const ALL: [Policy; 5] = [
        Policy::Fifo,
        Policy::Lru,
        Policy::Mru,
        Policy::Lifo,
        Policy::Optimal,
    ];

    /// Upper-case name of the policy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Mru => "MRU",
            Policy::Lifo => "LIFO",
            Policy::Optimal => "OPTIMAL",
        }
    }

    /// Whether victim selection looks ahead into the reference stream.
    #[must_use]
    pub const fn needs_reference_stream(self) -> bool {
        matches!(self, Policy::Optimal)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Policy {
    type Err = PagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIFO" => Ok(Policy::Fifo),
            "LRU" => Ok(Policy::Lru),
            "MRU" => Ok(Policy::Mru),
            "LIFO" => Ok(Policy::Lifo),
            "OPTIMAL" | "OPT" => Ok(Policy::Optimal),
            _ => Err(PagerError::UnknownPolicy(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        for policy in Policy::ALL {
            assert_eq!(policy.name().parse::<Policy>(), Ok(policy));
            assert_eq!(policy.to_string().to_lowercase().parse::<Policy>(), Ok(policy));
        }
        assert_eq!(" opt ".parse::<Policy>(), Ok(Policy::Optimal));
        assert_eq!("Lru".parse::<Policy>(), Ok(Policy::Lru));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "clock".parse::<Policy>(),
            Err(PagerError::UnknownPolicy("clock".into()))
        );
        assert!("".parse::<Policy>().is_err());
    }

    #[test]
    fn look_ahead() {
        let needing: Vec<_> = Policy::ALL
            .into_iter()
            .filter(|p| p.needs_reference_stream())
            .collect();
        assert_eq!(needing, vec![Policy::Optimal]);
    }
}
