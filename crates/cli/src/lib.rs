pub mod cursor;
pub mod generate;
pub mod list;
pub mod signature;
mod view;

use clap::{Args, Parser, Subcommand};
use lambda_stubs_core::StubConfig;

pub use cursor::CursorArgs;

pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    name = "lambda-stubs",
    version,
    about = "Generate lambda stubs for Java functional interfaces",
    long_about = "Finds the functional interface expected at a position in a Java file and \
                  proposes every lambda form it admits: inferred or explicit parameter types, \
                  block or expression bodies, with or without parentheses."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the lambda proposals for a position in a Java file
    List {
        #[command(flatten)]
        cursor: CursorArgs,
        #[command(flatten)]
        options: StubOptions,
    },
    /// Insert one lambda proposal into a Java file
    #[command(
        long_about = "Applies the proposal at --variant (as numbered by `list`) and prints the \
                            rewritten file. With --write the file is updated in place; with --json \
                            the edit plan is printed instead of the file."
    )]
    Generate {
        #[command(flatten)]
        cursor: CursorArgs,
        #[command(flatten)]
        options: StubOptions,
        /// Index of the proposal to apply
        #[arg(long, value_name = "INDEX")]
        variant: usize,
        /// Rewrite the file in place
        #[arg(long)]
        write: bool,
        /// Print the edit plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the proposals for a functional interface type
    #[command(
        long_about = "Resolves a type such as `BiFunction<String, Integer, Long>` against the \
                            built-in JDK catalog and prints its method signature and proposals."
    )]
    Signature {
        /// Functional interface type, with type arguments
        #[arg(value_name = "TYPE")]
        type_text: String,
        #[command(flatten)]
        options: StubOptions,
        /// Print the proposals as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start the Language Server Protocol (LSP) server
    Lsp,
}

/// Generation options shared by the commands that render lambdas.
#[derive(Args, Debug, Clone)]
pub struct StubOptions {
    /// Expression used as the lambda's result
    #[arg(long, default_value = lambda_stubs_core::render::DEFAULT_PLACEHOLDER)]
    pub placeholder: String,
    /// Omit proposals with explicit parameter types
    #[arg(long)]
    pub no_explicit_types: bool,
    /// Omit expression-bodied proposals
    #[arg(long)]
    pub no_expression_bodies: bool,
}

impl From<&StubOptions> for StubConfig {
    fn from(options: &StubOptions) -> Self {
        Self {
            placeholder: options.placeholder.clone(),
            include_explicit_types: !options.no_explicit_types,
            include_expression_bodies: !options.no_expression_bodies,
        }
    }
}

pub fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // The language server owns stdio, so it only logs to file.
    let _guard = match &cli.command {
        Commands::Lsp => lambda_stubs_core::logging::init_logging("lsp", false),
        _ => lambda_stubs_core::logging::init_logging("cli", true),
    };

    match cli.command {
        Commands::List { cursor, options } => {
            println!("{}", list::output(&cursor, &(&options).into())?);
            Ok(())
        }
        Commands::Generate {
            cursor,
            options,
            variant,
            write,
            json,
        } => {
            let request = generate::Request {
                variant,
                write,
                json,
            };
            println!("{}", generate::output(&cursor, &(&options).into(), &request)?);
            Ok(())
        }
        Commands::Signature {
            type_text,
            options,
            json,
        } => {
            println!("{}", signature::output(&type_text, &(&options).into(), json)?);
            Ok(())
        }
        Commands::Lsp => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(lambda_stubs_lsp::run_server())?;
            Ok(())
        }
    }
}
