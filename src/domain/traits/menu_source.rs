use async_trait::async_trait;

use crate::application::errors::MenuLookupError;
use crate::domain::entities::Menu;

/// Menu-data collaborator, keyed by restaurant name and location.
///
/// Implementations decide both how restaurants are matched and how each
/// item's vegetarian flag is populated.
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Look up a restaurant's menu
    async fn lookup(&self, name: &str, city: &str, state: &str) -> Result<Menu, MenuLookupError>;
}
