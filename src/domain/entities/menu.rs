/// One dish on a menu, with vegetarian status already decided by the
/// menu collaborator. The interpreter consumes the flag, never computes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub is_vegetarian: bool,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, is_vegetarian: bool) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            is_vegetarian,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A restaurant's flattened menu as returned by the menu collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub restaurant: String,
    pub address: String,
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(restaurant: impl Into<String>) -> Self {
        Self {
            restaurant: restaurant.into(),
            address: String::new(),
            items: Vec::new(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
