use std::env;
use std::fs;
use std::process::ExitCode;

use contract_press::ContractState;
use contract_press_pdf::{export_contract, export_contract_dated, CONTRACT_FILENAME};

#[derive(Clone, Debug)]
struct Args {
    input: Option<String>,
    out: String,
    date: Option<String>,
    preview: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input: None,
            out: CONTRACT_FILENAME.to_string(),
            date: None,
            preview: false,
        }
    }
}

fn main() -> ExitCode {
    match run(env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("{}", help_text());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    let cfg = parse_args(args)?;

    let state = match &cfg.input {
        Some(path) => {
            let raw =
                fs::read_to_string(path).map_err(|err| format!("read {path}: {err}"))?;
            toml::from_str::<ContractState>(&raw)
                .map_err(|err| format!("parse {path}: {err}"))?
        }
        None => ContractState::default(),
    };

    if cfg.preview {
        let text = match &cfg.date {
            Some(date) => state.contract_text_dated(date),
            None => state.contract_text(),
        };
        println!("{text}");
        return Ok(());
    }

    let bytes = match &cfg.date {
        Some(date) => export_contract_dated(&state, date),
        None => export_contract(&state),
    };
    fs::write(&cfg.out, &bytes).map_err(|err| format!("write {}: {err}", cfg.out))?;
    println!("wrote {} ({} bytes)", cfg.out, bytes.len());
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<Args, String> {
    let mut cfg = Args::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                cfg.input = Some(take_value(&args, i, "--input")?);
            }
            "--out" => {
                i += 1;
                cfg.out = take_value(&args, i, "--out")?;
            }
            "--date" => {
                i += 1;
                cfg.date = Some(take_value(&args, i, "--date")?);
            }
            "--preview" => cfg.preview = true,
            "--help" | "-h" => return Err("usage".to_string()),
            other => return Err(format!("unknown argument `{other}`")),
        }
        i += 1;
    }
    Ok(cfg)
}

fn take_value(args: &[String], index: usize, flag: &str) -> Result<String, String> {
    args.get(index)
        .cloned()
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn help_text() -> String {
    [
        "contract-press: assemble a contract and export it as a paginated PDF",
        "",
        "usage: contract-press [--input contrato.toml] [--out FILE] [--date dd/mm/yyyy] [--preview]",
        "",
        "  --input FILE   TOML contract file: optional [fields] table (camelCase",
        "                 keys) and optional top-level `clauses` string array;",
        "                 omitted -> seeded defaults",
        "  --out FILE     output path (default: Contrato_Cuidadora_Pets.pdf)",
        "  --date DATE    value for the trailing Data: line (default: today)",
        "  --preview      print the assembled contract text instead of a PDF",
    ]
    .join("\n")
}
