//! altea-protocols
//!
//! Developmental/behavioral assessment protocol definitions. Pure data — each
//! protocol's categories and items are built once in a `LazyLock` static and
//! shared read-only; nothing here mutates after load.

pub mod catalog;
pub mod error;
pub mod protocols;

use catalog::{item_category_id, ProtocolCategory, ProtocolItem, ScaleFamily};
use error::ProtocolError;

/// Trait implemented by each assessment protocol.
pub trait Protocol: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this protocol (e.g., "ablls_r", "portage").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "ABLLS-R", "Portage Guide").
    fn name(&self) -> &str;

    /// The scoring family shared by every item of this protocol.
    fn family(&self) -> ScaleFamily;

    /// The ordered categories this protocol scores.
    fn categories(&self) -> &[ProtocolCategory];

    /// Look up a category by id.
    fn category(&self, category_id: &str) -> Result<&ProtocolCategory, ProtocolError> {
        self.categories()
            .iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| ProtocolError::UnknownCategory {
                protocol_id: self.id().to_string(),
                category_id: category_id.to_string(),
            })
    }

    /// Look up an item by id. The owning category is decoded from the id
    /// prefix, so no secondary index is needed.
    fn item(&self, item_id: &str) -> Result<&ProtocolItem, ProtocolError> {
        let not_found = || ProtocolError::UnknownItem {
            protocol_id: self.id().to_string(),
            item_id: item_id.to_string(),
        };
        let category = self
            .category(item_category_id(item_id))
            .map_err(|_| not_found())?;
        category
            .items
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(not_found)
    }
}

/// Return all registered protocols.
pub fn all_protocols() -> Vec<Box<dyn Protocol>> {
    vec![
        Box::new(protocols::ablls_r::AbllsR),
        Box::new(protocols::vb_mapp::VbMapp),
        Box::new(protocols::portage::Portage),
        Box::new(protocols::carolina::Carolina),
    ]
}

/// Look up a protocol by ID.
pub fn get_protocol(id: &str) -> Result<Box<dyn Protocol>, ProtocolError> {
    all_protocols()
        .into_iter()
        .find(|p| p.id() == id)
        .ok_or_else(|| ProtocolError::UnknownProtocol(id.to_string()))
}
