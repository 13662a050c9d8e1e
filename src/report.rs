//! Saída no console: progresso e resumo

use crate::config::Config;
use crate::renamer::RenameEvent;
use crate::table::LoadedTable;
use case_renamer_common::{FileOutcome, RenameSummary};
use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Instant;

/// Recebe o andamento de uma execução
pub trait Reporter {
    fn on_start(&mut self, _config: &Config, _folder: &Path) {}

    fn on_table_loaded(&mut self, _loaded: &LoadedTable) {}

    fn on_scan(&mut self, _folder: &Path, _file_count: usize) {}

    fn on_event(&mut self, event: &RenameEvent);

    fn on_file_done(&mut self, _outcome: FileOutcome) {}

    fn on_summary(&mut self, _summary: &RenameSummary) {}
}

/// Texto de um evento, do jeito que aparece no console
pub fn format_event(event: &RenameEvent, dry_run: bool) -> String {
    match event {
        RenameEvent::NotInTable { file_name } => format!(
            "⚠ Arquivo '{}' não encontrado na planilha. Não será renomeado.",
            file_name
        ),
        RenameEvent::AlreadyNamed { file_name } => {
            format!("- Ignorando: '{}' já está com o nome correto.", file_name)
        }
        RenameEvent::Renamed { from, to, .. } => {
            let label = if dry_run { "Seria renomeado" } else { "Renomeado" };
            format!("✔ {}: '{}' -> '{}'", label, from, to)
        }
        RenameEvent::RetryScheduled {
            file_name,
            attempt,
            max_attempts,
            error,
            delay,
        } => format!(
            "⚠ Não foi possível renomear '{}' (tentativa {}/{}). Erro: {}. Tentando novamente em {}s...",
            file_name,
            attempt,
            max_attempts,
            error,
            delay.as_secs_f32()
        ),
        RenameEvent::Failed { error, .. } => format!("❌ {}", error),
    }
}

/// Linhas do resumo final
pub fn summary_lines(summary: &RenameSummary) -> Vec<String> {
    vec![
        format!("Total de arquivos na pasta: {}", summary.total_files),
        format!("Arquivos renomeados/já corretos: {}", summary.successes()),
        format!("Arquivos não encontrados na planilha: {}", summary.not_found),
        format!("Arquivos com erro de renomeação: {}", summary.errors),
    ]
}

pub struct ConsoleReporter {
    verbose: bool,
    dry_run: bool,
    progress: Option<ProgressBar>,
    started_at: DateTime<Local>,
    started: Instant,
}

impl ConsoleReporter {
    pub fn new(verbose: bool, dry_run: bool) -> Self {
        Self {
            verbose,
            dry_run,
            progress: None,
            started_at: Local::now(),
            started: Instant::now(),
        }
    }

    /// Imprime sem quebrar a barra de progresso
    fn line(&self, message: &str) {
        match &self.progress {
            Some(pb) => pb.println(message),
            None => println!("{}", message),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn on_start(&mut self, config: &Config, folder: &Path) {
        self.started_at = Local::now();
        self.started = Instant::now();

        println!("\n--- Iniciando o processo de renomeação de arquivos ---");
        if self.dry_run {
            println!("(SIMULAÇÃO: nenhum arquivo será alterado)");
        }
        println!("Planilha de referência: '{}'", config.spreadsheet_path.display());
        println!("Aba da planilha: '{}'", config.sheet_name);
        println!("Pasta de arquivos a serem renomeados: '{}'", folder.display());
        println!("Início: {}", self.started_at.format("%d/%m/%Y %H:%M:%S"));
        if self.verbose {
            println!(
                "Colunas: '{}', '{}', '{}', '{}'",
                config.columns.process_id,
                config.columns.client,
                config.columns.opponent,
                config.columns.lawyer
            );
            println!(
                "Tentativas: {} (espera de {}s)",
                config.max_attempts, config.retry_delay_secs
            );
        }
        println!("{}", "-".repeat(50));
    }

    fn on_table_loaded(&mut self, loaded: &LoadedTable) {
        println!("✔ Planilha carregada. Total de {} linhas lidas.", loaded.rows_read);

        if loaded.empty_ids_dropped > 0 {
            println!(
                "⚠ {} linha(s) sem número do processo foram ignoradas.",
                loaded.empty_ids_dropped
            );
        }

        if loaded.duplicates_dropped > 0 {
            println!(
                "⚠ Duplicatas encontradas no número do processo: {} linha(s) removida(s), mantida a primeira ocorrência.",
                loaded.duplicates_dropped
            );
        }

        println!("✔ {} processos únicos para busca.", loaded.table.len());
    }

    fn on_scan(&mut self, folder: &Path, file_count: usize) {
        println!(
            "✔ Encontrados {} arquivos na pasta '{}'.",
            file_count,
            folder.display()
        );

        if file_count == 0 {
            println!("\n⚠ NENHUM arquivo encontrado na pasta especificada. Nada para renomear.");
            return;
        }

        println!("\nIniciando renomeação dos arquivos...");

        let pb = ProgressBar::new(file_count as u64);
        let style = ProgressStyle::with_template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        self.progress = Some(pb);
    }

    fn on_event(&mut self, event: &RenameEvent) {
        let mut message = format_event(event, self.dry_run);

        if self.verbose {
            if let RenameEvent::Renamed { attempts, .. } = event {
                message.push_str(&format!(" ({} tentativa(s))", attempts));
            }
        }

        self.line(&message);
    }

    fn on_file_done(&mut self, _outcome: FileOutcome) {
        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
    }

    fn on_summary(&mut self, summary: &RenameSummary) {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }

        if summary.total_files == 0 {
            return;
        }

        println!("\n--- Processo de Renomeação Concluído ---");
        for line in summary_lines(summary) {
            println!("{}", line);
        }

        if self.verbose {
            println!(
                "  (renomeados: {}, já corretos: {})",
                summary.renamed, summary.already_named
            );
        }

        println!("Tempo total: {:.1}s", self.started.elapsed().as_secs_f32());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenameError;
    use std::time::Duration;

    #[test]
    fn test_format_renamed() {
        let event = RenameEvent::Renamed {
            from: "12345.pdf".into(),
            to: "12345 - A - B X C.pdf".into(),
            attempts: 1,
        };
        assert_eq!(
            format_event(&event, false),
            "✔ Renomeado: '12345.pdf' -> '12345 - A - B X C.pdf'"
        );
        assert!(format_event(&event, true).contains("Seria renomeado"));
    }

    #[test]
    fn test_format_retry() {
        let event = RenameEvent::RetryScheduled {
            file_name: "12345.pdf".into(),
            attempt: 1,
            max_attempts: 3,
            error: "arquivo em uso".into(),
            delay: Duration::from_secs(1),
        };
        let text = format_event(&event, false);
        assert!(text.contains("tentativa 1/3"));
        assert!(text.contains("arquivo em uso"));
        assert!(text.contains("1s"));
    }

    #[test]
    fn test_format_failed() {
        let event = RenameEvent::Failed {
            target: "novo.pdf".into(),
            error: RenameError::RenameFailed {
                file: "12345.pdf".into(),
                attempts: 3,
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "negado"),
            },
        };
        let text = format_event(&event, false);
        assert!(text.starts_with("❌"));
        assert!(text.contains("12345.pdf"));
        assert!(text.contains("negado"));
    }

    #[test]
    fn test_summary_lines() {
        let summary = RenameSummary {
            total_files: 4,
            renamed: 2,
            already_named: 1,
            not_found: 1,
            errors: 0,
        };
        let lines = summary_lines(&summary);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Total de arquivos na pasta: 4");
        assert_eq!(lines[1], "Arquivos renomeados/já corretos: 3");
        assert_eq!(lines[2], "Arquivos não encontrados na planilha: 1");
        assert_eq!(lines[3], "Arquivos com erro de renomeação: 0");
    }
}
