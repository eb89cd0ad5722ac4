use async_trait::async_trait;

use crate::domain::entities::Region;

/// Area-code to region collaborator.
///
/// An area code is the leading digits of the sender's number in national
/// format, used as a proxy for where they are texting from.
#[async_trait]
pub trait RegionLookup: Send + Sync {
    /// Resolve an area code to a region, or None when unmapped
    async fn lookup(&self, area_code: &str) -> Option<Region>;
}
