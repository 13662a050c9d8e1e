//! Renomeação dos arquivos encontrados na pasta
//!
//! Para cada arquivo cuja base (sem extensão) é um número de processo da
//! planilha, monta o novo nome e renomeia com tentativas limitadas.
//! Falhas de um arquivo não interrompem os demais: só entram no resumo.

mod fs;
mod retry;

pub use fs::{DryRunFileSystem, FileSystem, RealFileSystem};
pub use retry::{run_with_retry, Exhausted, RetryDecision, RetryPolicy};

use crate::error::RenameError;
use crate::report::Reporter;
use crate::scanner::FileEntry;
use case_renamer_common::{
    split_extension, synthesize_name, FileOutcome, LookupTable, Record, RenameSummary,
};
use std::time::Duration;

/// Monta o novo nome: (processo, dados, extensão) → nome do arquivo
pub type NameFn = fn(&str, &Record, &str) -> String;

/// Eventos emitidos durante a renomeação
#[derive(Debug)]
pub enum RenameEvent {
    /// Número do processo não está na planilha
    NotInTable { file_name: String },
    /// Já está com o nome correto, nada a fazer
    AlreadyNamed { file_name: String },
    Renamed {
        from: String,
        to: String,
        attempts: u32,
    },
    /// Tentativa falhou, haverá nova tentativa após `delay`
    RetryScheduled {
        file_name: String,
        attempt: u32,
        max_attempts: u32,
        error: String,
        delay: Duration,
    },
    /// Todas as tentativas falharam
    Failed { target: String, error: RenameError },
}

/// Processa todos os arquivos e devolve o resumo
pub fn rename_files<F, R>(
    files: &[FileEntry],
    table: &LookupTable,
    policy: &RetryPolicy,
    fs: &mut F,
    reporter: &mut R,
) -> RenameSummary
where
    F: FileSystem + ?Sized,
    R: Reporter + ?Sized,
{
    rename_files_with(files, table, policy, synthesize_name, fs, reporter)
}

/// Igual a [`rename_files`], com a regra de nome informada
pub fn rename_files_with<F, R>(
    files: &[FileEntry],
    table: &LookupTable,
    policy: &RetryPolicy,
    namer: NameFn,
    fs: &mut F,
    reporter: &mut R,
) -> RenameSummary
where
    F: FileSystem + ?Sized,
    R: Reporter + ?Sized,
{
    let mut summary = RenameSummary::default();

    for entry in files {
        let outcome = rename_entry(entry, table, policy, namer, fs, reporter);
        summary.record(outcome);
        reporter.on_file_done(outcome);
    }

    summary
}

/// Processa um arquivo
pub fn rename_entry<F, R>(
    entry: &FileEntry,
    table: &LookupTable,
    policy: &RetryPolicy,
    namer: NameFn,
    fs: &mut F,
    reporter: &mut R,
) -> FileOutcome
where
    F: FileSystem + ?Sized,
    R: Reporter + ?Sized,
{
    let (stem, extension) = split_extension(&entry.file_name);
    let identifier = stem.trim();

    let Some(record) = table.get(identifier) else {
        reporter.on_event(&RenameEvent::NotInTable {
            file_name: entry.file_name.clone(),
        });
        return FileOutcome::NotFound;
    };

    let new_name = namer(identifier, record, extension);

    if new_name == entry.file_name {
        reporter.on_event(&RenameEvent::AlreadyNamed {
            file_name: entry.file_name.clone(),
        });
        return FileOutcome::AlreadyNamed;
    }

    let target = entry.path.with_file_name(&new_name);
    let max_attempts = policy.attempts();

    let result = run_with_retry(
        policy,
        |_| fs.rename(&entry.path, &target),
        |attempt, err, delay| {
            reporter.on_event(&RenameEvent::RetryScheduled {
                file_name: entry.file_name.clone(),
                attempt,
                max_attempts,
                error: err.to_string(),
                delay,
            })
        },
    );

    match result {
        Ok(((), attempts)) => {
            reporter.on_event(&RenameEvent::Renamed {
                from: entry.file_name.clone(),
                to: new_name,
                attempts,
            });
            FileOutcome::Renamed
        }
        Err(Exhausted { error, attempts }) => {
            reporter.on_event(&RenameEvent::Failed {
                target: new_name,
                error: RenameError::RenameFailed {
                    file: entry.file_name.clone(),
                    attempts,
                    source: error,
                },
            });
            FileOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_renamer_common::build_lookup;
    use std::io;
    use std::path::{Path, PathBuf};

    /// Registra as chamadas e falha nas primeiras `fail_first`
    struct ScriptedFs {
        calls: Vec<(PathBuf, PathBuf)>,
        fail_first: usize,
    }

    impl ScriptedFs {
        fn new(fail_first: usize) -> Self {
            Self { calls: Vec::new(), fail_first }
        }
    }

    impl FileSystem for ScriptedFs {
        fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
            self.calls.push((from.to_path_buf(), to.to_path_buf()));
            if self.calls.len() <= self.fail_first {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "arquivo em uso"))
            } else {
                Ok(())
            }
        }
    }

    /// Guarda os eventos como texto curto
    #[derive(Default)]
    struct Events(Vec<String>);

    impl Reporter for Events {
        fn on_event(&mut self, event: &RenameEvent) {
            let label = match event {
                RenameEvent::NotInTable { file_name } => format!("not_found {}", file_name),
                RenameEvent::AlreadyNamed { file_name } => format!("already {}", file_name),
                RenameEvent::Renamed { to, attempts, .. } => format!("renamed {} #{}", to, attempts),
                RenameEvent::RetryScheduled { attempt, max_attempts, .. } => {
                    format!("retry {}/{}", attempt, max_attempts)
                }
                RenameEvent::Failed { error, .. } => format!("failed {}", error),
            };
            self.0.push(label);
        }
    }

    const EXPECTED: &str = "12345 - Dr. Fulano - Empresa A X Empresa B.pdf";

    fn table() -> LookupTable {
        let (table, _) = build_lookup(vec![(
            "12345".to_string(),
            Record::new(
                Some("Dr. Fulano".into()),
                Some("Empresa A".into()),
                Some("Empresa B".into()),
            ),
        )]);
        table
    }

    fn entry(name: &str) -> FileEntry {
        FileEntry {
            path: PathBuf::from("/pasta").join(name),
            file_name: name.to_string(),
        }
    }

    fn instant(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            delay: Duration::ZERO,
        }
    }

    fn run(name: &str, fs: &mut ScriptedFs, max_attempts: u32) -> (FileOutcome, Vec<String>) {
        let mut events = Events::default();
        let outcome = rename_entry(
            &entry(name),
            &table(),
            &instant(max_attempts),
            synthesize_name,
            fs,
            &mut events,
        );
        (outcome, events.0)
    }

    #[test]
    fn test_rename_match() {
        let mut fs = ScriptedFs::new(0);
        let (outcome, events) = run("12345.pdf", &mut fs, 3);

        assert_eq!(outcome, FileOutcome::Renamed);
        assert_eq!(
            fs.calls,
            vec![(PathBuf::from("/pasta/12345.pdf"), PathBuf::from("/pasta").join(EXPECTED))]
        );
        assert_eq!(events, vec![format!("renamed {} #1", EXPECTED)]);
    }

    #[test]
    fn test_stem_is_trimmed_before_lookup() {
        let mut fs = ScriptedFs::new(0);
        let (outcome, _) = run(" 12345 .pdf", &mut fs, 3);

        assert_eq!(outcome, FileOutcome::Renamed);
        assert_eq!(fs.calls[0].1, PathBuf::from("/pasta").join(EXPECTED));
    }

    #[test]
    fn test_extension_is_preserved() {
        let mut fs = ScriptedFs::new(0);
        run("12345.DOCX", &mut fs, 3);

        assert_eq!(
            fs.calls[0].1,
            PathBuf::from("/pasta/12345 - Dr. Fulano - Empresa A X Empresa B.DOCX")
        );
    }

    #[test]
    fn test_not_in_table_is_untouched() {
        let mut fs = ScriptedFs::new(0);
        let (outcome, events) = run("99999.pdf", &mut fs, 3);

        assert_eq!(outcome, FileOutcome::NotFound);
        assert!(fs.calls.is_empty());
        assert_eq!(events, vec!["not_found 99999.pdf"]);
    }

    #[test]
    fn test_already_named_makes_no_call() {
        fn keep_name(identifier: &str, _: &Record, extension: &str) -> String {
            format!("{}{}", identifier, extension)
        }

        let mut fs = ScriptedFs::new(0);
        let mut events = Events::default();

        let summary = rename_files_with(
            &[entry("12345.pdf")],
            &table(),
            &instant(3),
            keep_name,
            &mut fs,
            &mut events,
        );

        assert!(fs.calls.is_empty());
        assert_eq!(summary.already_named, 1);
        assert_eq!(summary.successes(), 1);
        assert_eq!(events.0, vec!["already 12345.pdf"]);
    }

    #[test]
    fn test_renamed_file_is_not_matched_again() {
        let mut fs = ScriptedFs::new(0);
        let (outcome, _) = run(EXPECTED, &mut fs, 3);

        assert_eq!(outcome, FileOutcome::NotFound);
        assert!(fs.calls.is_empty());
    }

    #[test]
    fn test_retry_then_success() {
        let mut fs = ScriptedFs::new(2);
        let (outcome, events) = run("12345.pdf", &mut fs, 3);

        assert_eq!(outcome, FileOutcome::Renamed);
        assert_eq!(fs.calls.len(), 3);
        assert_eq!(
            events,
            vec![
                "retry 1/3".to_string(),
                "retry 2/3".to_string(),
                format!("renamed {} #3", EXPECTED),
            ]
        );
    }

    #[test]
    fn test_retry_bound_exact() {
        for max_attempts in 1..=5 {
            let mut fs = ScriptedFs::new(usize::MAX);
            let (outcome, events) = run("12345.pdf", &mut fs, max_attempts);

            assert_eq!(outcome, FileOutcome::Failed);
            assert_eq!(fs.calls.len(), max_attempts as usize);

            let retries = events.iter().filter(|e| e.starts_with("retry")).count();
            assert_eq!(retries, max_attempts as usize - 1);
            assert!(events.last().unwrap().starts_with("failed"));
        }
    }

    #[test]
    fn test_failed_event_message() {
        let mut fs = ScriptedFs::new(usize::MAX);
        let (_, events) = run("12345.pdf", &mut fs, 3);

        let last = events.last().unwrap();
        assert!(last.contains("'12345.pdf'"));
        assert!(last.contains("3 tentativa"));
        assert!(last.contains("arquivo em uso"));
    }

    #[test]
    fn test_rename_files_summary_is_consistent() {
        let files = vec![entry("12345.pdf"), entry("99999.pdf"), entry("00000.txt")];
        let mut fs = ScriptedFs::new(0);

        let summary = rename_files(&files, &table(), &instant(3), &mut fs, &mut Events::default());

        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.successes(), 1);
        assert_eq!(summary.not_found, 2);
        assert_eq!(summary.errors, 0);
        assert!(summary.is_consistent());
    }

    #[test]
    fn test_one_failure_does_not_stop_the_batch() {
        let (table, _) = build_lookup(vec![
            ("1".to_string(), Record::default()),
            ("2".to_string(), Record::default()),
        ]);
        let files = vec![entry("1.pdf"), entry("2.pdf")];
        // 2 falhas: esgota o primeiro arquivo, o segundo passa de primeira
        let mut fs = ScriptedFs::new(2);

        let summary = rename_files(&files, &table, &instant(2), &mut fs, &mut Events::default());

        assert_eq!(summary.errors, 1);
        assert_eq!(summary.renamed, 1);
        assert_eq!(fs.calls.len(), 3);
        assert!(summary.is_consistent());
    }
}
