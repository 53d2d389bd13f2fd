use clap::{Parser as ClapParser, Subcommand};
use spoken_math::cli::{
    self, ConvertOptions, CliError, OutputFormat, TranscriptOptions,
};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "spoken-math")]
#[command(about = "Convert spoken math (English or German) into expression trees")]
#[command(version)]
struct Cli {
    /// Log pipeline stages to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a spoken phrase
    Convert {
        /// The phrase (reads from stdin if not provided)
        text: Option<String>,

        /// Output format: canonical, tree, json or latex
        #[arg(short, long, default_value = "canonical")]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Convert the text exactly as given, without lower-casing or
        /// stripping punctuation
        #[arg(long)]
        raw: bool,
    },

    /// Convert a word-level transcript (JSON array of {word, start, end})
    Transcript {
        /// Transcript JSON (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Output format: canonical, tree, json or latex
        #[arg(short, long, default_value = "canonical")]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List vocabulary, or the phrases of one category
    Vocab {
        /// Category name (omit to list categories)
        category: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            text,
            format,
            pretty,
            raw,
        } => read_input(text).and_then(|text| {
            cli::execute_convert(&ConvertOptions {
                text,
                format,
                pretty,
                normalize: !raw,
            })
        }),
        Commands::Transcript {
            input,
            format,
            pretty,
        } => read_input(input).and_then(|json| {
            cli::execute_transcript(&TranscriptOptions {
                json,
                format,
                pretty,
            })
        }),
        Commands::Vocab { category: None } => Ok(cli::get_vocab_overview().to_string()),
        Commands::Vocab {
            category: Some(category),
        } => cli::get_vocab_category(&category),
    };

    match result {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn read_input(arg: Option<String>) -> Result<String, CliError> {
    match arg {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}
