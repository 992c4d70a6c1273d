use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use dsgen::commands;
use dsgen::commands::GenerateMode;
use dsgen::config::{ApiConfig, DEFAULT_BASE_URL};
use dsgen::api::{Analyzer, Auth, Generator, UserApi};
use dsgen::http::HttpClient;

/// dsgen - dataset generation and analysis client
///
/// Talks to a dsgen backend over its JSON API. Authentication uses a
/// session cookie issued by the backend on login; subsequent commands in
/// the same process reuse it automatically.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL (also via DSGEN_API_URL)
    #[arg(
        long = "api-url",
        env = "DSGEN_API_URL",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    pub api_url: String,

    /// Per-request timeout in milliseconds, for JSON calls and uploads
    #[arg(long = "timeout-ms", value_name = "MS", global = true)]
    pub timeout_ms: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Log in and print the authenticated account
    Login(CredentialArgs),

    /// Create an account
    Signup(SignupArgs),

    /// Show the currently authenticated account
    Me,

    /// End the session
    Logout,

    /// Generate a dataset from a spec file
    Generate(GenerateArgs),

    /// Upload a data file for analysis
    Analyze(AnalyzeArgs),

    /// List stored datasets
    Datasets(PageArgs),

    /// List past analyses
    Analyses(PageArgs),
}

#[derive(clap::Args, Debug)]
struct CredentialArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

#[derive(clap::Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub name: Option<String>,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// Which generation endpoint the spec targets
    #[arg(value_enum)]
    pub mode: Mode,

    /// Path to the JSON spec file
    #[arg(value_name = "SPEC_FILE")]
    pub spec: PathBuf,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum Mode {
    Form,
    Rule,
    Prompt,
}

impl From<Mode> for GenerateMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Form => GenerateMode::Form,
            Mode::Rule => GenerateMode::Rule,
            Mode::Prompt => GenerateMode::Prompt,
        }
    }
}

#[derive(clap::Args, Debug)]
struct AnalyzeArgs {
    /// File to upload
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Extra form fields as key=value, repeatable
    #[arg(long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,
}

#[derive(clap::Args, Debug)]
struct PageArgs {
    #[arg(long)]
    pub offset: Option<u64>,

    #[arg(long)]
    pub limit: Option<u64>,
}

impl PageArgs {
    fn page(&self) -> Option<(u64, u64)> {
        if self.offset.is_none() && self.limit.is_none() {
            return None;
        }
        Some((self.offset.unwrap_or(0), self.limit.unwrap_or(50)))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = ApiConfig::new(&cli.api_url);
    if let Some(ms) = cli.timeout_ms {
        let timeout = Duration::from_millis(ms);
        config = config.with_timeout(timeout).with_upload_timeout(timeout);
    }
    let http = HttpClient::new(config)?;

    match cli.command {
        Commands::Login(args) => {
            commands::login(&Auth::new(http), &args.email, &args.password).await?
        }
        Commands::Signup(args) => {
            commands::signup(&Auth::new(http), &args.email, &args.password, args.name).await?
        }
        Commands::Me => commands::me(&Auth::new(http)).await?,
        Commands::Logout => commands::logout(&Auth::new(http)).await?,
        Commands::Generate(args) => {
            commands::generate(&Generator::new(http), args.mode.into(), &args.spec).await?
        }
        Commands::Analyze(args) => {
            commands::analyze(&Analyzer::new(http), &args.file, &args.fields).await?
        }
        Commands::Datasets(args) => {
            commands::list_datasets(&UserApi::new(http), args.page()).await?
        }
        Commands::Analyses(args) => {
            commands::list_analyses(&UserApi::new(http), args.page()).await?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_login_parsing() {
        let cli = Cli::try_parse_from([
            "dsgen", "login", "--email", "a@b.c", "--password", "pw",
        ])
        .unwrap();
        match cli.command {
            Commands::Login(args) => {
                assert_eq!(args.email, "a@b.c");
                assert_eq!(args.password, "pw");
            }
            _ => panic!("Expected Login command"),
        }
        assert_eq!(cli.api_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_cli_generate_parsing() {
        let cli = Cli::try_parse_from(["dsgen", "generate", "form", "spec.json"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert!(matches!(args.mode, Mode::Form));
                assert_eq!(args.spec, PathBuf::from("spec.json"));
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_analyze_fields_parsing() {
        let cli = Cli::try_parse_from([
            "dsgen", "analyze", "data.csv", "--field", "label=sales", "--field", "delimiter=,",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.file, PathBuf::from("data.csv"));
                assert_eq!(args.fields, vec!["label=sales", "delimiter=,"]);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_global_api_url_parsing() {
        let cli = Cli::try_parse_from([
            "dsgen", "--api-url", "http://localhost:9999/api", "datasets",
        ])
        .unwrap();
        assert_eq!(cli.api_url, "http://localhost:9999/api");
    }

    #[test]
    fn test_cli_datasets_page() {
        let cli = Cli::try_parse_from(["dsgen", "datasets", "--limit", "10"]).unwrap();
        match cli.command {
            Commands::Datasets(args) => assert_eq!(args.page(), Some((0, 10))),
            _ => panic!("Expected Datasets command"),
        }

        let cli = Cli::try_parse_from(["dsgen", "datasets"]).unwrap();
        match cli.command {
            Commands::Datasets(args) => assert_eq!(args.page(), None),
            _ => panic!("Expected Datasets command"),
        }
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["dsgen"]);
        assert!(result.is_err());
    }
}
