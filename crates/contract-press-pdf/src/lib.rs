//! PDF backend for `contract-press`: Times-Roman metrics implementing the
//! layout measurement capability, and a `pdf-writer` page serializer.
//!
//! Pages use the non-embedded Standard-14 Times-Roman font with WinAnsi
//! encoding, so output needs no font file and every placed line draws with
//! a single `Td`/`Tj` pair at the position the layout engine chose.

#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

mod times_roman;

use std::sync::Arc;

use contract_press::{ContractState, LayoutConfig, LayoutEngine, LayoutPage, TextMeasurer};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

/// Default filename for generated contract documents.
pub const CONTRACT_FILENAME: &str = "Contrato_Cuidadora_Pets.pdf";

const FONT_RESOURCE: Name<'static> = Name(b"F1");

/// Standard-14 Times-Roman metrics.
///
/// A total measurement function: characters without a WinAnsi mapping
/// measure as `?`, so layout never observes a metric failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimesRoman;

impl TimesRoman {
    /// Width of `text` at `font_size`, in points.
    pub fn width_at(&self, text: &str, font_size: f32) -> f32 {
        let milli: u32 = text.chars().map(times_roman::advance_milli).sum();
        milli as f32 * font_size / 1000.0
    }
}

impl TextMeasurer for TimesRoman {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        self.width_at(text, font_size)
    }
}

/// Serialize laid-out pages into a PDF byte buffer.
///
/// Emits one page object and content stream per [`LayoutPage`], a shared
/// Type1 Times-Roman resource with `WinAnsiEncoding`, and a media box from
/// `cfg`. Line text is WinAnsi-encoded with `?` for unmapped characters.
pub fn render_pdf(pages: &[LayoutPage], cfg: &LayoutConfig) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let font_id = Ref::new(3);
    let mut next_id = 4;
    let mut alloc = || {
        let id = Ref::new(next_id);
        next_id += 1;
        id
    };

    let page_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);
    pdf.type1_font(font_id)
        .base_font(Name(b"Times-Roman"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for ((page, &page_id), &content_id) in pages.iter().zip(&page_ids).zip(&content_ids) {
        let mut obj = pdf.page(page_id);
        obj.media_box(Rect::new(0.0, 0.0, cfg.page_width, cfg.page_height));
        obj.parent(page_tree_id);
        obj.contents(content_id);
        obj.resources().fonts().pair(FONT_RESOURCE, font_id);
        obj.finish();

        let mut content = Content::new();
        for line in &page.lines {
            let encoded = times_roman::encode_winansi(&line.text);
            content.begin_text();
            content.set_font(FONT_RESOURCE, cfg.font_size);
            content.next_line(line.x, line.y);
            content.show(Str(&encoded));
            content.end_text();
        }
        pdf.stream(content_id, &content.finish());
    }

    pdf.finish()
}

/// Run the full export pipeline from current state, dated with the local
/// clock: interpolate, assemble, paginate, serialize.
///
/// Nothing is cached; every call recomputes from the state it is given.
pub fn export_contract(state: &ContractState) -> Vec<u8> {
    pdf_for_text(&state.contract_text())
}

/// Same pipeline as [`export_contract`] with an explicit `Data:` line value.
pub fn export_contract_dated(state: &ContractState, date: &str) -> Vec<u8> {
    pdf_for_text(&state.contract_text_dated(date))
}

fn pdf_for_text(text: &str) -> Vec<u8> {
    let cfg = LayoutConfig::a4();
    let engine = LayoutEngine::new(cfg, Arc::new(TimesRoman));
    let pages = engine.paginate(text);
    log::debug!("serializing {} page(s)", pages.len());
    render_pdf(&pages, &cfg)
}
