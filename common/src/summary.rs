//! Contadores do resumo final

/// Resultado do processamento de um arquivo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Renomeado (ou renomeação planejada, em simulação)
    Renamed,
    /// Já estava com o nome correto
    AlreadyNamed,
    /// Número do processo não encontrado na planilha
    NotFound,
    /// Falhou em todas as tentativas
    Failed,
}

/// Resumo de uma execução
///
/// Cada arquivo listado cai em exatamente um contador.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub total_files: usize,
    pub renamed: usize,
    pub already_named: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl RenameSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        self.total_files += 1;
        match outcome {
            FileOutcome::Renamed => self.renamed += 1,
            FileOutcome::AlreadyNamed => self.already_named += 1,
            FileOutcome::NotFound => self.not_found += 1,
            FileOutcome::Failed => self.errors += 1,
        }
    }

    /// Renomeados + já corretos
    pub fn successes(&self) -> usize {
        self.renamed + self.already_named
    }

    pub fn is_consistent(&self) -> bool {
        self.successes() + self.not_found + self.errors == self.total_files
    }
}
