use clap::{Parser as ClapParser, Subcommand};
use rulesql::cli::{self, CheckOptions, CheckResult, CliError, CompileRequest};
use rulesql::{CompileOptions, Dialect, TypeFallback, ValueEscaping};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "rulesql")]
#[command(about = "rulesql - Compile rule-builder filters into SQL WHERE predicates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a filter into a WHERE fragment
    Compile {
        /// Column the rules compare against (e.g. `title` or `pages.title`)
        target: String,

        /// Filter JSON (reads from stdin if not provided)
        #[arg(short, long)]
        query: Option<String>,

        /// Quoting conventions of the target database
        #[arg(long, default_value_t = Dialect::MySql, env = "RULESQL_DIALECT")]
        dialect: Dialect,

        /// Insert values without escaping single quotes
        #[arg(long)]
        verbatim: bool,

        /// Fail on type tags outside the known set
        #[arg(long)]
        strict_types: bool,
    },

    /// Validate a filter without compiling it
    Check {
        /// Filter JSON (reads from stdin if not provided)
        #[arg(short, long)]
        query: Option<String>,

        /// Print the parsed filter tree
        #[arg(long)]
        ast: bool,
    },

    /// List supported operators and the SQL they produce
    Operators,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            target,
            query,
            dialect,
            verbatim,
            strict_types,
        } => {
            let options = CompileOptions::default()
                .dialect(dialect)
                .escaping(if verbatim {
                    ValueEscaping::Verbatim
                } else {
                    ValueEscaping::Doubled
                })
                .unknown_types(if strict_types {
                    TypeFallback::Reject
                } else {
                    TypeFallback::PassThrough
                });
            run_compile(target, query, options)
        }
        Commands::Check { query, ast } => run_check(query, ast),
        Commands::Operators => {
            print!("{}", cli::operator_reference());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn read_filter(query: Option<String>) -> Result<Option<String>, CliError> {
    match query {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run_compile(
    target: String,
    query: Option<String>,
    options: CompileOptions,
) -> Result<(), CliError> {
    let request = CompileRequest {
        target,
        filter: read_filter(query)?,
        options,
    };

    if let Some(sql) = cli::execute_compile(&request)? {
        println!("{}", sql);
    }
    Ok(())
}

fn run_check(query: Option<String>, ast: bool) -> Result<(), CliError> {
    let options = CheckOptions {
        filter: read_filter(query)?,
        ast,
    };

    match cli::execute_check(&options)? {
        CheckResult::Valid => println!("Filter is valid"),
        CheckResult::Tree(tree) => println!("{}", serde_json::to_string_pretty(&tree)?),
    }
    Ok(())
}
