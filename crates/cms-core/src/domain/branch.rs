// ============================================================================
// CMS Core - Branch Entity
// File: crates/cms-core/src/domain/branch.rs
// Description: Service branch, owned by the upstream backend
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::record::Record;
use super::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub branch_id: i64,
    pub branch_name: String,
    pub address: String,
    pub work_days: String,
    pub work_hours: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    pub province_name: String,
    pub district_name: String,
    pub region_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BranchDraft {
    #[validate(custom(function = "validate_not_blank"), length(max = 255))]
    pub branch_name: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub address: String,

    #[serde(default)]
    pub work_days: String,

    #[serde(default)]
    pub work_hours: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude out of range"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude out of range"))]
    pub longitude: f64,

    #[serde(default)]
    pub phone_numbers: Vec<String>,

    #[serde(default)]
    pub province_name: String,

    #[serde(default)]
    pub district_name: String,

    #[serde(default)]
    pub region_name: String,
}

impl Record for Branch {
    type Id = i64;
    type Draft = BranchDraft;

    const RESOURCE: &'static str = "branches";

    fn id(&self) -> &i64 {
        &self.branch_id
    }

    fn from_draft(branch_id: i64, draft: BranchDraft) -> Self {
        Self {
            branch_id,
            branch_name: draft.branch_name,
            address: draft.address,
            work_days: draft.work_days,
            work_hours: draft.work_hours,
            latitude: draft.latitude,
            longitude: draft.longitude,
            phone_numbers: draft.phone_numbers,
            province_name: draft.province_name,
            district_name: draft.district_name,
            region_name: draft.region_name,
        }
    }

    fn apply_draft(&mut self, draft: BranchDraft) {
        let branch_id = self.branch_id;
        *self = Self::from_draft(branch_id, draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_validated() {
        let draft: BranchDraft = serde_json::from_str(
            r#"{"branch_name":"Central","address":"Peace Ave 1","latitude":147.9,"longitude":106.9}"#,
        )
        .unwrap();
        assert!(draft.validate().is_err());
    }
}
