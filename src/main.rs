use case_renamer::{cli, config, error, prompt, renamer, report, runner, sample};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{RenameError, Result};
use renamer::{DryRunFileSystem, FileSystem, RealFileSystem};
use report::ConsoleReporter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command_or_default();

    let pause = matches!(command, Commands::Run { no_pause: false, .. });

    let result = execute(&cli, command);

    if let Err(e) = &result {
        report_fatal(e);
    }

    if pause {
        if let Err(e) = prompt::wait_for_enter() {
            eprintln!("{}", e);
        }
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn execute(cli: &Cli, command: Commands) -> Result<()> {
    let config = load_config(cli)?;

    match command {
        Commands::Run { folder, dry_run, .. } => {
            let folder = match folder {
                Some(folder) => folder,
                None => prompt::prompt_folder()?,
            };

            let mut reporter = ConsoleReporter::new(cli.verbose, dry_run);
            let mut fs: Box<dyn FileSystem> = if dry_run {
                Box::new(DryRunFileSystem)
            } else {
                Box::new(RealFileSystem)
            };

            runner::run_batch(&config, &folder, fs.as_mut(), &mut reporter)?;
        }

        Commands::Config { show, init } => {
            if init {
                let path = match &cli.config {
                    Some(path) => {
                        Config::default().save_to(path)?;
                        path.clone()
                    }
                    None => Config::default().save()?,
                };
                println!("✔ Configuração padrão gravada em: {}", path.display());
            }

            if show || !init {
                let path = match &cli.config {
                    Some(path) => path.clone(),
                    None => Config::config_path()?,
                };
                println!("Configuração ({}):", path.display());
                println!("  Planilha: {}", config.spreadsheet_path.display());
                println!("  Aba: {}", config.sheet_name);
                println!("  Coluna do processo: {}", config.columns.process_id);
                println!("  Coluna do cliente: {}", config.columns.client);
                println!("  Coluna da parte adversa: {}", config.columns.opponent);
                println!("  Coluna do advogado: {}", config.columns.lawyer);
                println!("  Tentativas: {}", config.max_attempts);
                println!("  Espera entre tentativas: {}s", config.retry_delay_secs);
            }
        }

        Commands::Sample { root } => {
            println!("📁 Criando estrutura de teste em: {}\n", root.display());
            let layout = sample::create_sample(&root, &config)?;

            println!("✔ Planilha: {}", layout.spreadsheet.display());
            println!("✔ Arquivos: {}", layout.folder.display());
            println!("✔ Configuração: {}", layout.config_file.display());
            println!(
                "\nPara testar: case-renamer --config \"{}\" run \"{}\"",
                layout.config_file.display(),
                layout.folder.display()
            );
        }
    }

    Ok(())
}

fn report_fatal(e: &RenameError) {
    eprintln!("\n❌ ERRO FATAL: {}", e);
    if let Some(hint) = e.hint() {
        eprintln!("   {}", hint);
    }
}
