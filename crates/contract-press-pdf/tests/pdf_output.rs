use std::sync::Arc;

use contract_press::{
    ClauseList, ContractState, FieldKey, LayoutConfig, LayoutEngine, TextMeasurer,
};
use contract_press_pdf::{export_contract_dated, render_pdf, TimesRoman, CONTRACT_FILENAME};

fn sample_state() -> ContractState {
    let mut state = ContractState::default();
    state.set_field(FieldKey::OwnerName, "Ana");
    state.set_field(FieldKey::OwnerAddress, "Rua A");
    state.set_field(FieldKey::CaregiverName, "Bia");
    state.set_field(FieldKey::CaregiverAddress, "Rua B");
    state.set_field(FieldKey::StartDate, "01/01");
    state.set_field(FieldKey::EndDate, "02/02");
    state.set_field(FieldKey::Fee, "100");
    state
}

fn count_subslices(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

#[test]
fn metrics_are_sane_and_match_known_advances() {
    let font = TimesRoman;
    assert_eq!(font.text_width("", 12.0), 0.0);
    // 1000-unit size makes widths read directly in AFM units.
    assert_eq!(font.text_width("0", 1000.0), 500.0);
    assert_eq!(font.text_width(" ", 1000.0), 250.0);
    assert!(font.text_width("Hello world", 12.0) > font.text_width("Hello", 12.0));
    // Accented capitals share the base letter's advance.
    assert_eq!(font.text_width("Á", 1000.0), font.text_width("A", 1000.0));
    // Unmapped characters measure as `?` instead of failing.
    assert_eq!(
        font.text_width("\u{2192}", 1000.0),
        font.text_width("?", 1000.0)
    );
}

#[test]
fn times_wraps_boilerplate_within_usable_width() {
    let cfg = LayoutConfig::a4();
    let engine = LayoutEngine::new(cfg, Arc::new(TimesRoman));
    let text = sample_state().contract_text_dated("27/08/2026");
    let pages = engine.paginate(&text);
    assert!(!pages.is_empty());

    let font = TimesRoman;
    for page in &pages {
        for line in &page.lines {
            let single_token = line.text.split_whitespace().count() == 1;
            assert!(
                single_token || font.text_width(&line.text, cfg.font_size) <= cfg.usable_width(),
                "line `{}` exceeds usable width",
                line.text
            );
        }
    }
}

#[test]
fn pdf_bytes_carry_header_trailer_and_font() {
    let bytes = export_contract_dated(&sample_state(), "27/08/2026");
    assert!(bytes.starts_with(b"%PDF-"), "missing PDF header");
    assert!(count_subslices(&bytes, b"%%EOF") == 1, "missing PDF trailer");
    assert!(count_subslices(&bytes, b"Times-Roman") >= 1);
    assert!(count_subslices(&bytes, b"WinAnsiEncoding") >= 1);
}

#[test]
fn page_object_count_tracks_layout_page_count() {
    let cfg = LayoutConfig::a4();
    let engine = LayoutEngine::new(cfg, Arc::new(TimesRoman));

    let mut state = sample_state();
    // Enough repeated clauses to spill onto several pages.
    let long = "O(a) cuidador(a) compromete-se a cuidar do(s) pet(s) com zelo, \
                seguindo as orientações do(a) contratante, incluindo alimentação, \
                higiene e eventuais medicações."
        .to_string();
    state.clauses = ClauseList::from_templates(vec![long; 40]);

    let pages = engine.paginate(&state.contract_text_dated("27/08/2026"));
    assert!(pages.len() >= 2, "expected a multi-page contract");

    let bytes = render_pdf(&pages, &cfg);
    let count_entry = format!("/Count {}", pages.len());
    assert_eq!(
        count_subslices(&bytes, count_entry.as_bytes()),
        1,
        "page tree should declare {} kids",
        pages.len()
    );
}

#[test]
fn export_is_deterministic_for_a_fixed_date() {
    let state = sample_state();
    let first = export_contract_dated(&state, "27/08/2026");
    let second = export_contract_dated(&state, "27/08/2026");
    assert_eq!(first, second, "export must be a pure function of state + date");
}

#[test]
fn default_filename_is_stable() {
    assert_eq!(CONTRACT_FILENAME, "Contrato_Cuidadora_Pets.pdf");
}
