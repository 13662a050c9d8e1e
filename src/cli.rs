use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "case-renamer")]
#[command(about = "Renomeia arquivos de processos a partir de uma planilha Excel", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Mostra detalhes adicionais
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Arquivo de configuração (padrão: ~/.config/case-renamer/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Renomeia os arquivos da pasta (comando padrão)
    Run {
        /// Pasta com os arquivos (se omitida, é perguntada)
        folder: Option<PathBuf>,

        /// Simulação: mostra o que seria renomeado sem alterar nada
        #[arg(long)]
        dry_run: bool,

        /// Não espera o ENTER no final
        #[arg(long)]
        no_pause: bool,
    },

    /// Mostra ou cria o arquivo de configuração
    Config {
        /// Mostra a configuração em uso
        #[arg(long)]
        show: bool,

        /// Grava a configuração padrão no arquivo
        #[arg(long)]
        init: bool,
    },

    /// Cria uma estrutura de teste (planilha, arquivos e configuração)
    Sample {
        /// Pasta onde a estrutura será criada
        #[arg(required = true)]
        root: PathBuf,
    },
}

impl Cli {
    /// Sem subcomando: `run` interativo
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run {
            folder: None,
            dry_run: false,
            no_pause: false,
        })
    }
}
