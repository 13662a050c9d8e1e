//! Tipos de dados compartilhados
//!
//! - Record: dados de uma linha da planilha
//! - LookupTable: número do processo → Record

use std::collections::HashMap;

/// Dados de um processo lidos da planilha
///
/// Campos ausentes (célula vazia) ficam como `None` e são substituídos
/// por um marcador na hora de montar o nome do arquivo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub lawyer: Option<String>,   // ADVOGADO
    pub client: Option<String>,   // Cliente principal
    pub opponent: Option<String>, // Contrário principal
}

impl Record {
    pub fn new(
        lawyer: Option<String>,
        client: Option<String>,
        opponent: Option<String>,
    ) -> Self {
        Self { lawyer, client, opponent }
    }
}

/// Tabela de busca: número do processo → Record
///
/// Construída uma vez por execução e somente lida depois disso.
/// Em chaves repetidas vale a primeira ocorrência.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    records: HashMap<String, Record>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insere somente se a chave ainda não existe.
    ///
    /// Retorna `false` quando a chave já estava na tabela (duplicata descartada).
    pub fn insert_first(&mut self, identifier: String, record: Record) -> bool {
        use std::collections::hash_map::Entry;

        match self.records.entry(identifier) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&Record> {
        self.records.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.records.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Monta a tabela a partir das linhas na ordem da planilha
///
/// # Returns
/// * `(tabela, duplicatas_descartadas)`
pub fn build_lookup<I>(rows: I) -> (LookupTable, usize)
where
    I: IntoIterator<Item = (String, Record)>,
{
    let mut table = LookupTable::new();
    let mut duplicates = 0;

    for (identifier, record) in rows {
        if !table.insert_first(identifier, record) {
            duplicates += 1;
        }
    }

    (table, duplicates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lawyer: &str) -> Record {
        Record::new(Some(lawyer.to_string()), None, None)
    }

    #[test]
    fn test_insert_first_keeps_first() {
        let mut table = LookupTable::new();
        assert!(table.insert_first("123".into(), record("Dr. A")));
        assert!(!table.insert_first("123".into(), record("Dr. B")));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("123").unwrap().lawyer.as_deref(), Some("Dr. A"));
    }

    #[test]
    fn test_build_lookup_counts_duplicates() {
        let rows = vec![
            ("12345".to_string(), record("Dr. Fulano")),
            ("67890".to_string(), record("Dra. Ciclana")),
            ("12345".to_string(), record("Outro")),
            ("12345".to_string(), record("Mais um")),
        ];

        let (table, duplicates) = build_lookup(rows);

        assert_eq!(table.len(), 2);
        assert_eq!(duplicates, 2);
        assert_eq!(table.get("12345").unwrap().lawyer.as_deref(), Some("Dr. Fulano"));
        assert!(table.contains("67890"));
        assert!(!table.contains("99999"));
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let (table, _) = build_lookup(vec![("ABC-1".to_string(), Record::default())]);
        assert!(table.get("abc-1").is_none());
        assert!(table.get("ABC-1 ").is_none());
        assert!(table.get("ABC-1").is_some());
    }

    #[test]
    fn test_empty_lookup() {
        let (table, duplicates) = build_lookup(Vec::new());
        assert!(table.is_empty());
        assert_eq!(duplicates, 0);
    }
}
