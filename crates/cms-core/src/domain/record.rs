// ============================================================================
// CMS Core - Record abstraction
// File: crates/cms-core/src/domain/record.rs
// Description: What every storable content entity exposes to the stores
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Debug, Display};
use uuid::Uuid;
use validator::Validate;

/// Identifier of a stored record.
pub trait RecordId:
    Clone + Debug + Display + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Picks the id for a record created in a process-local store.
    fn next(existing: &[Self]) -> Self;
}

impl RecordId for Uuid {
    fn next(_existing: &[Self]) -> Self {
        Uuid::new_v4()
    }
}

impl RecordId for i64 {
    fn next(existing: &[Self]) -> Self {
        existing.iter().copied().max().unwrap_or(0) + 1
    }
}

/// A content entity managed through the CRUD gateway.
///
/// `Draft` carries the writable fields. Creating a record assigns the id
/// and any server-side fields; updating replaces every writable field and
/// keeps the rest.
pub trait Record: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static {
    type Id: RecordId;
    type Draft: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + Validate + 'static;

    /// Resource name used in routes, upstream paths and error messages.
    const RESOURCE: &'static str;

    fn id(&self) -> &Self::Id;

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    fn apply_draft(&mut self, draft: Self::Draft);
}
