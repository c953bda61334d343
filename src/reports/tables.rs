use cipherforge::optimizer::{Alternate, RunSummary};
use cipherforge::scorer::ScoreDetails;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

const PREVIEW_CHARS: usize = 60;

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}

pub fn runs(runs: &[RunSummary]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Restart").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Best Seen"),
        Cell::new("Gens"),
        Cell::new("Overrides"),
        Cell::new("Key"),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let best = runs.iter().map(|r| r.score).fold(f64::NEG_INFINITY, f64::max);
    for r in runs {
        let mut score = Cell::new(format!("{:.2}", r.score));
        if r.score == best {
            score = score.fg(Color::Green).add_attribute(Attribute::Bold);
        }
        let restart = if r.cancelled {
            format!("{} (stopped)", r.restart)
        } else {
            r.restart.to_string()
        };
        table.add_row(vec![
            Cell::new(restart),
            score,
            Cell::new(format!("{:.2}", r.best_so_far)),
            Cell::new(r.generations),
            Cell::new(r.overrides),
            Cell::new(r.mapping.to_string()),
        ]);
    }

    println!("\n=== RESTARTS ===");
    println!("{}", table);
}

pub fn score_breakdown(text: &str, d: &ScoreDetails) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Text").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Bigram"),
        Cell::new("Trigram"),
        Cell::new("Dict"),
        Cell::new("Words"),
    ]);
    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new(preview(text)),
        Cell::new(format!("{:.2}", d.total)).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", d.bigram)),
        Cell::new(format!("{:.2}", d.trigram)),
        Cell::new(format!("{:.2}", d.dictionary)),
        Cell::new(format!("{}/{}", d.valid_words, d.total_words)),
    ]);

    println!("\n=== SCORE ===");
    println!("{}", table);
}

pub fn alternates(alts: &[Alternate]) {
    if alts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Plaintext"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for a in alts {
        table.add_row(vec![
            Cell::new(a.variant),
            Cell::new(format!("{:.2}", a.score)),
            Cell::new(preview(&a.plaintext)),
        ]);
    }

    println!("\n=== ALTERNATE DECRYPTIONS ===");
    println!("{}", table);
}
