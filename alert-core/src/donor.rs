use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The canonical eight blood types, in the order the site lists them.
pub const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub fn is_canonical_blood_type(group: &str) -> bool {
    BLOOD_TYPES.iter().any(|t| t.eq_ignore_ascii_case(group))
}

/// A registered donor as the donor REST API serializes it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub blood_type: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Donor search: exact blood-group match when `blood_group` is non-empty,
/// case-insensitive address substring match when `city` is non-empty. Empty
/// filters pass everything.
pub fn filter_donors<'a>(donors: &'a [Donor], blood_group: &str, city: &str) -> Vec<&'a Donor> {
    let city = city.to_lowercase();
    donors
        .iter()
        .filter(|d| blood_group.is_empty() || d.blood_type == blood_group)
        .filter(|d| city.is_empty() || d.address.to_lowercase().contains(&city))
        .collect()
}

/// Blood-type frequency tally for the admin dashboard chart. BTreeMap keeps
/// the output order deterministic.
pub fn blood_type_counts(donors: &[Donor]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for donor in donors {
        *counts.entry(donor.blood_type.clone()).or_insert(0) += 1;
    }
    counts
}
