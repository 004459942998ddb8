use contract_press::{ContractState, FieldKey};

const SAMPLE: &str = r#"
clauses = [
    "Serviço de ${startDate} a ${endDate}, valor ${currency} ${fee}.",
    "Entrega das chaves em ${ownerAddress}.",
]

[fields]
ownerName = "Ana"
ownerAddress = "Rua A"
caregiverName = "Bia"
caregiverAddress = "Rua B"
startDate = "01/01"
endDate = "02/02"
fee = "100"
"#;

#[test]
fn contract_file_parses_and_drives_assembly() {
    let state: ContractState = toml::from_str(SAMPLE).expect("sample contract file parses");
    assert_eq!(state.clauses.len(), 2);
    // `currency` is absent from the file and falls back to the seeded default.
    assert_eq!(state.fields.get(FieldKey::Currency), "R$");
    assert_eq!(state.fields.get(FieldKey::OwnerName), "Ana");

    let doc = state.contract_text_dated("27/08/2026");
    assert!(
        doc.contains("CLÁUSULA 1ª – Serviço de 01/01 a 02/02, valor R$ 100."),
        "first clause missing or malformed:\n{doc}"
    );
    assert!(doc.contains("CLÁUSULA 2ª – Entrega das chaves em Rua A."));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let state: ContractState = toml::from_str("").expect("empty contract file parses");
    assert_eq!(state, ContractState::default());
    assert!(!state.clauses.is_empty(), "defaults seed the standard clauses");

    let partial: ContractState =
        toml::from_str("clauses = [\"só uma\"]").expect("clauses-only file parses");
    assert_eq!(partial.clauses.clauses(), ["só uma"]);
    assert_eq!(partial.fields.get(FieldKey::Currency), "R$");
}

#[test]
fn serialized_form_round_trips_without_session_state() {
    let mut state: ContractState = toml::from_str(SAMPLE).expect("sample contract file parses");
    // In-flight editing state must never reach the persisted form.
    assert!(state.clauses.begin_edit(0));
    state.clauses.set_draft("rascunho não salvo");

    let raw = toml::to_string(&state).expect("state serializes");
    assert!(!raw.contains("rascunho"));

    let reparsed: ContractState = toml::from_str(&raw).expect("round trip parses");
    assert_eq!(reparsed.clauses.clauses(), state.clauses.clauses());
    assert_eq!(reparsed.fields, state.fields);
    assert_eq!(reparsed.clauses.editing(), None);
    assert_eq!(reparsed.clauses.draft(), "");
}
