//! Leitura da planilha e montagem da tabela de busca

mod cell;

pub use cell::cell_text;

use crate::config::ColumnNames;
use crate::error::{RenameError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use case_renamer_common::{build_lookup, LookupTable, Record};
use std::path::Path;

/// Tabela carregada + estatísticas da leitura
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: LookupTable,
    /// Linhas de dados lidas (sem o cabeçalho)
    pub rows_read: usize,
    /// Linhas descartadas por número do processo vazio
    pub empty_ids_dropped: usize,
    /// Linhas descartadas por número do processo repetido
    pub duplicates_dropped: usize,
}

/// Índices das colunas obrigatórias no cabeçalho
struct ColumnIndex {
    process_id: usize,
    client: usize,
    opponent: usize,
    lawyer: usize,
}

pub fn load_table(path: &Path, sheet_name: &str, columns: &ColumnNames) -> Result<LoadedTable> {
    if !path.exists() {
        return Err(RenameError::SourceNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;

    let sheet_names = workbook.sheet_names();
    if !sheet_names.iter().any(|name| name == sheet_name) {
        return Err(RenameError::MissingSheet {
            sheet: sheet_name.to_string(),
            available: sheet_names.join(", "),
        });
    }

    let range = workbook.worksheet_range(sheet_name)?;
    let mut rows = range.rows();

    let header = rows
        .next()
        .ok_or_else(|| RenameError::EmptyData(sheet_name.to_string()))?;
    let index = locate_columns(header, columns)?;

    let mut rows_read = 0;
    let mut empty_ids_dropped = 0;
    let mut entries = Vec::new();

    for row in rows {
        rows_read += 1;

        let Some(identifier) = row_text(row, index.process_id) else {
            empty_ids_dropped += 1;
            continue;
        };

        let record = Record::new(
            row_text(row, index.lawyer),
            row_text(row, index.client),
            row_text(row, index.opponent),
        );
        entries.push((identifier, record));
    }

    if entries.is_empty() {
        return Err(RenameError::EmptyData(sheet_name.to_string()));
    }

    let (table, duplicates_dropped) = build_lookup(entries);

    Ok(LoadedTable {
        table,
        rows_read,
        empty_ids_dropped,
        duplicates_dropped,
    })
}

/// Procura cada coluna obrigatória pelo nome EXATO do cabeçalho
fn locate_columns(header: &[Data], columns: &ColumnNames) -> Result<ColumnIndex> {
    let find = |name: &str| {
        header
            .iter()
            .position(|cell| matches!(cell, Data::String(s) if s == name))
    };

    let found: Vec<Option<usize>> = columns.required().iter().map(|name| find(*name)).collect();

    let missing: Vec<&str> = columns
        .required()
        .into_iter()
        .zip(&found)
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| name)
        .collect();

    match found.as_slice() {
        [Some(process_id), Some(client), Some(opponent), Some(lawyer)] => Ok(ColumnIndex {
            process_id: *process_id,
            client: *client,
            opponent: *opponent,
            lawyer: *lawyer,
        }),
        _ => Err(RenameError::MissingColumn(
            missing
                .iter()
                .map(|name| format!("'{}'", name))
                .collect::<Vec<_>>()
                .join(", "),
        )),
    }
}

fn row_text(row: &[Data], index: usize) -> Option<String> {
    row.get(index).and_then(cell_text)
}
