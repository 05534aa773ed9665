//! Command-line interface for testgenie
//!
//! # Usage Examples
//!
//! ```bash
//! # 10 random integers between -100 and 100, JSON output
//! testgenie generate --data-kind array
//!
//! # 5 unique sorted numbers as CSV
//! testgenie generate --data-kind array --size 5 \
//!   --no-duplicates --sorted --output-format csv
//!
//! # 3x4 matrix of integers in [0, 9]
//! testgenie generate --data-kind matrix --rows 3 --columns 4 \
//!   --min-value 0 --max-value 9
//!
//! # Mixed-case random string with digits allowed
//! testgenie generate --data-kind string --size 20 \
//!   --case-kind mixed --allow-numbers
//!
//! # Request loaded from a JSON file, reproducible with a seed
//! testgenie generate --request request.json --seed 42
//!
//! # Supported kinds, formats, and defaults
//! testgenie constraints
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use testgen_core::{CaseKind, DataKind, ElementKind, GenerationRequest, OutputFormat};

#[derive(Parser)]
#[command(name = "testgenie")]
#[command(about = "Generates randomized test-case data for algorithm-practice problems")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a test case from structural constraints
    Generate {
        /// Data kind to generate
        #[arg(long, value_enum, required_unless_present = "request")]
        data_kind: Option<DataKindArg>,

        /// Scalar type for array elements
        #[arg(long, value_enum)]
        element_kind: Option<ElementKindArg>,

        /// Element count for arrays, length for strings (default: 10)
        #[arg(long)]
        size: Option<u32>,

        /// Inclusive lower bound for numeric values (default: -100)
        #[arg(long)]
        min_value: Option<i64>,

        /// Inclusive upper bound for numeric values (default: 100)
        #[arg(long)]
        max_value: Option<i64>,

        /// Reject repeated values (retries until the sequence is distinct)
        #[arg(long)]
        no_duplicates: bool,

        /// Sort the result sequence ascending
        #[arg(long)]
        sorted: bool,

        /// Explicit charset override
        #[arg(long)]
        charset: Option<String>,

        /// Matrix row count (default: 3)
        #[arg(long)]
        rows: Option<u32>,

        /// Matrix column count (default: 3)
        #[arg(long)]
        columns: Option<u32>,

        /// Length of string elements inside arrays (default: size)
        #[arg(long)]
        string_length: Option<u32>,

        /// Letter case for the derived charset
        #[arg(long, value_enum)]
        case_kind: Option<CaseKindArg>,

        /// Include special characters in the derived charset
        #[arg(long)]
        allow_special_chars: bool,

        /// Include a space in the derived charset
        #[arg(long)]
        allow_spaces: bool,

        /// Include digits in the derived charset
        #[arg(long)]
        allow_numbers: bool,

        /// Output format for the generated value
        #[arg(long, value_enum)]
        output_format: Option<OutputFormatArg>,

        /// Request as a JSON file; explicit constraint flags are ignored
        #[arg(long, value_name = "PATH")]
        request: Option<std::path::PathBuf>,

        /// Seed for reproducible output (defaults to OS entropy)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print supported data kinds, output formats, and defaults
    Constraints,

    /// Submit feedback text
    Feedback {
        /// Feedback text
        text: String,
    },
}

#[derive(Clone, Debug, ValueEnum)]
enum DataKindArg {
    /// Flat sequence of scalar elements
    Array,
    /// Single random string
    String,
    /// Two-dimensional grid of integers
    Matrix,
    /// Binary tree (not implemented)
    Tree,
}

impl From<DataKindArg> for DataKind {
    fn from(arg: DataKindArg) -> Self {
        match arg {
            DataKindArg::Array => DataKind::Array,
            DataKindArg::String => DataKind::String,
            DataKindArg::Matrix => DataKind::Matrix,
            DataKindArg::Tree => DataKind::Tree,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
enum ElementKindArg {
    /// Random integers
    Number,
    /// Single characters
    Character,
    /// Random strings
    String,
}

impl From<ElementKindArg> for ElementKind {
    fn from(arg: ElementKindArg) -> Self {
        match arg {
            ElementKindArg::Number => ElementKind::Number,
            ElementKindArg::Character => ElementKind::Character,
            ElementKindArg::String => ElementKind::String,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
enum CaseKindArg {
    /// Lowercase letters only
    Lower,
    /// Uppercase letters only
    Upper,
    /// Both cases
    Mixed,
}

impl From<CaseKindArg> for CaseKind {
    fn from(arg: CaseKindArg) -> Self {
        match arg {
            CaseKindArg::Lower => CaseKind::Lower,
            CaseKindArg::Upper => CaseKind::Upper,
            CaseKindArg::Mixed => CaseKind::Mixed,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
enum OutputFormatArg {
    /// Bracketed JSON rendering
    Json,
    /// Comma-separated values
    Csv,
    /// Space-separated values
    PlainText,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::PlainText => OutputFormat::PlainText,
        }
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            data_kind,
            element_kind,
            size,
            min_value,
            max_value,
            no_duplicates,
            sorted,
            charset,
            rows,
            columns,
            string_length,
            case_kind,
            allow_special_chars,
            allow_spaces,
            allow_numbers,
            output_format,
            request,
            seed,
        } => {
            let request = match request {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read request file {path:?}"))?;
                    serde_json::from_str(&content)
                        .with_context(|| format!("Failed to parse request file {path:?}"))?
                }
                None => {
                    let data_kind = data_kind
                        .context("--data-kind is required when no --request file is given")?;
                    build_request(
                        data_kind,
                        element_kind,
                        size,
                        min_value,
                        max_value,
                        no_duplicates,
                        sorted,
                        charset,
                        rows,
                        columns,
                        string_length,
                        case_kind,
                        allow_special_chars,
                        allow_spaces,
                        allow_numbers,
                        output_format,
                    )
                }
            };

            let body = match seed {
                Some(seed) => testgenie::generate_seeded(&request, seed)?,
                None => testgenie::generate(&request)?,
            };
            println!("{body}");
        }
        Commands::Constraints => {
            println!("{}", testgenie::constraints());
        }
        Commands::Feedback { text } => {
            println!("{}", testgenie::submit_feedback(&text));
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn build_request(
    data_kind: DataKindArg,
    element_kind: Option<ElementKindArg>,
    size: Option<u32>,
    min_value: Option<i64>,
    max_value: Option<i64>,
    no_duplicates: bool,
    sorted: bool,
    charset: Option<String>,
    rows: Option<u32>,
    columns: Option<u32>,
    string_length: Option<u32>,
    case_kind: Option<CaseKindArg>,
    allow_special_chars: bool,
    allow_spaces: bool,
    allow_numbers: bool,
    output_format: Option<OutputFormatArg>,
) -> GenerationRequest {
    let mut request = GenerationRequest::new(data_kind.into());

    if let Some(element_kind) = element_kind {
        request = request.with_element_kind(element_kind.into());
    }
    if let Some(size) = size {
        request = request.with_size(size);
    }
    if let Some(min_value) = min_value {
        request = request.with_min_value(min_value);
    }
    if let Some(max_value) = max_value {
        request = request.with_max_value(max_value);
    }
    if no_duplicates {
        request = request.with_allow_duplicates(false);
    }
    if sorted {
        request = request.with_is_sorted(true);
    }
    if let Some(charset) = charset {
        request = request.with_charset(charset);
    }
    if let Some(rows) = rows {
        request = request.with_rows(rows);
    }
    if let Some(columns) = columns {
        request = request.with_columns(columns);
    }
    if let Some(string_length) = string_length {
        request = request.with_string_length(string_length);
    }
    if let Some(case_kind) = case_kind {
        request = request.with_case_kind(case_kind.into());
    }
    if allow_special_chars {
        request = request.with_allow_special_chars(true);
    }
    if allow_spaces {
        request = request.with_allow_spaces(true);
    }
    if allow_numbers {
        request = request.with_allow_numbers(true);
    }
    if let Some(output_format) = output_format {
        request = request.with_output_format(output_format.into());
    }

    request
}
