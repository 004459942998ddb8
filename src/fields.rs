//! Closed form-field key set and current field values.

use serde::{Deserialize, Serialize};

/// Identifier of one contract form field.
///
/// The set is closed: no key can be added or removed at runtime, and clause
/// placeholders resolve only against these identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    OwnerName,
    OwnerAddress,
    CaregiverName,
    CaregiverAddress,
    StartDate,
    EndDate,
    Fee,
    Currency,
}

impl FieldKey {
    /// All keys in declaration order.
    pub const ALL: [FieldKey; 8] = [
        FieldKey::OwnerName,
        FieldKey::OwnerAddress,
        FieldKey::CaregiverName,
        FieldKey::CaregiverAddress,
        FieldKey::StartDate,
        FieldKey::EndDate,
        FieldKey::Fee,
        FieldKey::Currency,
    ];

    /// Placeholder identifier spelling used inside clause templates.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::OwnerName => "ownerName",
            FieldKey::OwnerAddress => "ownerAddress",
            FieldKey::CaregiverName => "caregiverName",
            FieldKey::CaregiverAddress => "caregiverAddress",
            FieldKey::StartDate => "startDate",
            FieldKey::EndDate => "endDate",
            FieldKey::Fee => "fee",
            FieldKey::Currency => "currency",
        }
    }

    /// Resolve a placeholder identifier into a key.
    pub fn parse(identifier: &str) -> Option<FieldKey> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == identifier)
    }
}

impl core::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values for the closed field set.
///
/// Values are free-form strings; dates and fee amounts are interpolated
/// verbatim without validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFields {
    pub owner_name: String,
    pub owner_address: String,
    pub caregiver_name: String,
    pub caregiver_address: String,
    pub start_date: String,
    pub end_date: String,
    pub fee: String,
    pub currency: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            owner_name: String::new(),
            owner_address: String::new(),
            caregiver_name: "TALITA SOBRENOME SOBRENOME".to_string(),
            caregiver_address: "Rua 0, Bairro X".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            fee: String::new(),
            currency: "R$".to_string(),
        }
    }
}

impl FormFields {
    /// Current value for `key`.
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::OwnerName => &self.owner_name,
            FieldKey::OwnerAddress => &self.owner_address,
            FieldKey::CaregiverName => &self.caregiver_name,
            FieldKey::CaregiverAddress => &self.caregiver_address,
            FieldKey::StartDate => &self.start_date,
            FieldKey::EndDate => &self.end_date,
            FieldKey::Fee => &self.fee,
            FieldKey::Currency => &self.currency,
        }
    }

    /// Overwrite the value for `key`.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::OwnerName => &mut self.owner_name,
            FieldKey::OwnerAddress => &mut self.owner_address,
            FieldKey::CaregiverName => &mut self.caregiver_name,
            FieldKey::CaregiverAddress => &mut self.caregiver_address,
            FieldKey::StartDate => &mut self.start_date,
            FieldKey::EndDate => &mut self.end_date,
            FieldKey::Fee => &mut self.fee,
            FieldKey::Currency => &mut self.currency,
        };
        *slot = value.into();
    }
}
