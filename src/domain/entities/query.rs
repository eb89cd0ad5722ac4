/// A resolved geographic region (city + state)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub city: String,
    pub state: String,
}

impl Region {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}

/// What the sender asked for: a restaurant name plus an optional location.
///
/// Invariant: `name` is never empty. City and state are either both set
/// (from a `name @ city, state` body, or after location resolution) or
/// both unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantQuery {
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl RestaurantQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: None,
            state: None,
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.city = Some(region.city);
        self.state = Some(region.state);
        self
    }

    /// True when both city and state are known
    pub fn has_location(&self) -> bool {
        self.city.is_some() && self.state.is_some()
    }
}
