//! Named record collections.

use std::fmt;

/// A named, unordered set of records of one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Donations,
    Users,
}

impl Collection {
    /// Name used by the persistence layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Donations => "donations",
            Collection::Users => "users",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
