//! Human-readable report rendering. Everything goes to stderr so stdout
//! stays clean for `--json`.

use cfopsum_engine::{Diagnostic, RunResult};

pub fn print_diagnostic(diag: &Diagnostic) {
    let context = match (&diag.file, &diag.sheet) {
        (Some(file), Some(sheet)) => format!("{file} · {sheet}: "),
        (Some(file), None) => format!("{file}: "),
        _ => String::new(),
    };
    eprintln!("{}: {context}{}", diag.severity, diag.message);
}

pub fn print_report(result: &RunResult) {
    if result.records.is_empty() {
        return;
    }

    eprintln!();
    eprintln!("per arquivo/sheet:");
    for record in &result.records {
        eprintln!(
            "  {:<40} entrada {:>16}   saída {:>16}",
            format!("{} · {}", record.file, record.sheet),
            format_brl(record.total_in),
            format_brl(record.total_out),
        );
    }

    eprintln!();
    eprintln!("per arquivo:");
    for agg in &result.files {
        eprintln!(
            "  {:<40} entrada {:>16}   saída {:>16}",
            agg.file,
            format_brl(agg.sum_in),
            format_brl(agg.sum_out),
        );
    }

    eprintln!();
    eprintln!("totais gerais:");
    eprintln!(
        "  entrada (CFOP 1xx, 2xx, 3xx): {}",
        format_brl(result.totals.sum_in)
    );
    eprintln!(
        "  saída   (CFOP 5xx, 6xx, 7xx): {}",
        format_brl(result.totals.sum_out)
    );
}

/// Format a value as Brazilian currency: `R$ 1.234,56`.
///
/// Rounds to cents for display only; stored values are never rounded.
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}
