use cipherforge::mapping::Mapping;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

/// Two-row key table: cipher letters on top, their plaintext images below.
pub fn print_key(name: &str, mapping: &Mapping) {
    println!("\nKey: {} ({})", name, mapping);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cols = 13;
    let pairs: Vec<(char, char)> = mapping.pairs().collect();

    for chunk in pairs.chunks(cols) {
        let cipher: Vec<Cell> = chunk
            .iter()
            .map(|(c, _)| {
                Cell::new(c)
                    .set_alignment(CellAlignment::Center)
                    .add_attribute(Attribute::Dim)
            })
            .collect();
        let plain: Vec<Cell> = chunk
            .iter()
            .map(|(_, p)| {
                Cell::new(p.to_ascii_lowercase())
                    .set_alignment(CellAlignment::Center)
                    .add_attribute(Attribute::Bold)
            })
            .collect();
        table.add_row(cipher);
        table.add_row(plain);
    }
    println!("{}", table);
}
