//! Contract text assembly: boilerplate, numbered clauses, signatures.

use core::fmt::Write as _;

use crate::fields::FormFields;
use crate::template::interpolate;

const TITLE: &str = "CONTRATO DE PRESTAÇÃO DE SERVIÇOS DE CUIDADOR(A) DE PETS";
const CLOSING: &str = "E por estarem justos e contratados, firmam o presente instrumento.";
const SIGNATURE_RULE: &str = "____________________________________";

/// Assemble the full contract text from current field values and clauses.
///
/// Clause numbering is strictly positional at assembly time: the clause at
/// index `i` renders as `CLÁUSULA <i+1>ª – <interpolated text>`. Blank lines
/// between sections are meaningful vertical spacers for the layout engine.
/// `date` is printed verbatim on the trailing `Data:` line.
pub fn assemble_contract(fields: &FormFields, clauses: &[String], date: &str) -> String {
    let mut doc = String::with_capacity(1024);

    doc.push_str(TITLE);
    doc.push_str("\n\n");
    let _ = writeln!(
        doc,
        "CONTRATANTE: {}, residente à {}.\n",
        fields.owner_name, fields.owner_address
    );
    let _ = writeln!(
        doc,
        "CONTRATADO(A): {}, residente à {}.\n",
        fields.caregiver_name, fields.caregiver_address
    );

    for (index, clause) in clauses.iter().enumerate() {
        let _ = write!(
            doc,
            "CLÁUSULA {}ª – {}\n\n",
            index + 1,
            interpolate(clause, fields)
        );
    }

    doc.push_str(CLOSING);
    doc.push_str("\n\n");
    doc.push_str(SIGNATURE_RULE);
    let _ = writeln!(doc, "\n{} – CONTRATANTE\n", fields.owner_name);
    doc.push_str(SIGNATURE_RULE);
    let _ = writeln!(doc, "\n{} – CONTRATADO(A)\n", fields.caregiver_name);
    let _ = write!(doc, "Data: {date}");

    doc
}
