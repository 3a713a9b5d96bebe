//! Console rendering of chains and reconstructed paths.

use crate::blockchain::Block;
use crate::transaction::TransactionRecord;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::{Attribute, Cell, Color as TableColor, ContentArrangement, Table};

/// Records joined with `", "`; an empty batch renders as `-`.
pub fn format_transactions(transactions: &[TransactionRecord]) -> String {
    if transactions.is_empty() {
        return "-".to_string();
    }
    transactions
        .iter()
        .map(TransactionRecord::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `Block 1: 0x.. | 0x.. | B 47 EOS, B 31 TRX`
pub fn format_block_line(label: &str, block: &Block) -> String {
    format!(
        "{}: {} | {} | {}",
        label,
        block.current_hash(),
        block.previous_hash(),
        format_transactions(block.transactions())
    )
}

/// Block numbers are printed in hex, starting at 1.
pub fn block_label(position: usize) -> String {
    format!("{:X}", position + 1)
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(TableColor::Cyan)
        .add_attribute(Attribute::Bold)
}

fn new_table(plain: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(if plain { NOTHING } else { UTF8_FULL })
        .set_content_arrangement(ContentArrangement::Dynamic);
    if plain {
        table.force_no_tty();
    }
    table
}

/// Chain in append order, genesis first.
pub fn chain_table(blocks: &[Block], plain: bool) -> Table {
    let mut table = new_table(plain);
    table.set_header(vec![
        header_cell("Block"),
        header_cell("CurrentID"),
        header_cell("PreviousID"),
        header_cell("Transactions"),
    ]);

    for (i, block) in blocks.iter().enumerate() {
        let previous = if block.is_genesis() {
            Cell::new(block.previous_hash()).fg(TableColor::Grey)
        } else {
            Cell::new(block.previous_hash()).fg(TableColor::White)
        };
        table.add_row(vec![
            Cell::new(block_label(i)).fg(TableColor::White),
            Cell::new(block.current_hash()).fg(TableColor::Green),
            previous,
            Cell::new(format_transactions(block.transactions())),
        ]);
    }
    table
}

/// Reconstructed path, head first.
pub fn path_table(blocks: &[Block], plain: bool) -> Table {
    let mut table = new_table(plain);
    table.set_header(vec![
        header_cell("CurrentID"),
        header_cell("PreviousID"),
        header_cell("Transactions"),
    ]);

    for block in blocks {
        table.add_row(vec![
            Cell::new(block.current_hash()).fg(TableColor::Green),
            Cell::new(block.previous_hash()).fg(TableColor::White),
            Cell::new(format_transactions(block.transactions())),
        ]);
    }
    table
}
