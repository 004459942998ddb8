//! Contract session state: field values plus the clause list.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::assemble::assemble_contract;
use crate::clauses::ClauseList;
use crate::fields::{FieldKey, FormFields};

/// Seed clause templates shipped with the editor.
pub fn standard_clauses() -> ClauseList {
    ClauseList::from_templates([
        "O presente contrato tem como objeto a prestação de serviços de cuidado \
         de pets durante o período de ${startDate} até ${endDate}.",
        "O valor total pelos serviços prestados será de ${currency} ${fee} , \
         pagos diretamente ao(à) cuidador(a).",
        "O(a) cuidador(a) compromete-se a cuidar do(s) pet(s) com zelo, seguindo \
         as orientações do(a) contratante, incluindo alimentação, higiene e \
         eventuais medicações.",
        "Ambas as partes assumem responsabilidade pelas informações prestadas e \
         declaram ciência sobre os termos deste contrato.",
    ])
}

/// Mutable session state feeding the assembly/layout pipeline.
///
/// This is the only stateful component; interpolation, assembly, and layout
/// are pure transformations over a snapshot of it. Lifetime is one session,
/// nothing persists across runs except what callers serialize themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractState {
    pub fields: FormFields,
    pub clauses: ClauseList,
}

impl Default for ContractState {
    fn default() -> Self {
        Self {
            fields: FormFields::default(),
            clauses: standard_clauses(),
        }
    }
}

impl ContractState {
    /// Overwrite one form-field value.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.fields.set(key, value);
    }

    /// Assemble the contract text dated with the local clock (`dd/mm/yyyy`).
    pub fn contract_text(&self) -> String {
        let today = Local::now().format("%d/%m/%Y").to_string();
        self.contract_text_dated(&today)
    }

    /// Assemble the contract text with an explicit `Data:` line value.
    pub fn contract_text_dated(&self, date: &str) -> String {
        assemble_contract(&self.fields, self.clauses.clauses(), date)
    }
}
