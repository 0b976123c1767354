use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use namecase_converter::{convert_client_case_with, ConvertOptions, WordBoundary};
use namecase_core::{Client, NameCase};
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            _ => Err(format!("Unknown input format: '{}'.", s)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "namecase",
    about = "Renames the models and enum members of a generated client"
)]
struct Opt {
    /// Naming convention to apply: none, camel, snake or pascal.
    #[structopt(long, default_value = "none")]
    name_case: NameCase,

    /// Do not treat `-` as a word separator.
    #[structopt(long)]
    ignore_hyphen_boundary: bool,

    /// Keep enum member names that start with a digit as they are.
    #[structopt(long)]
    no_sanitize_enums: bool,

    /// Input format, json or yaml. Inferred from the file extension when omitted.
    #[structopt(long)]
    format: Option<InputFormat>,

    /// Pretty-print the JSON output.
    #[structopt(long)]
    pretty: bool,

    /// Client IR document to read. Reads stdin when omitted.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,
}

impl Opt {
    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            boundary: if self.ignore_hyphen_boundary {
                WordBoundary::IgnoreHyphen
            } else {
                WordBoundary::Standard
            },
            sanitize_enum_names: !self.no_sanitize_enums,
        }
    }

    fn input_format(&self) -> InputFormat {
        self.format.unwrap_or_else(|| match &self.input {
            Some(path) => InputFormat::from_path(path),
            None => InputFormat::Json,
        })
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("NAMECASE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn parse_client(source: &str, format: InputFormat) -> Result<Client> {
    match format {
        InputFormat::Json => serde_json::from_str(source).context("Failed to parse client JSON"),
        InputFormat::Yaml => serde_yaml::from_str(source).context("Failed to parse client YAML"),
    }
}

fn run(opt: &Opt, source: &str) -> Result<String> {
    let client = parse_client(source, opt.input_format())?;

    info!(
        name_case = %opt.name_case,
        models = client.models.len(),
        services = client.services.len(),
        "converting client"
    );

    let client = convert_client_case_with(&client, opt.name_case, opt.convert_options());

    let output = if opt.pretty {
        serde_json::to_string_pretty(&client)
    } else {
        serde_json::to_string(&client)
    };

    output.context("Failed to serialize client")
}

fn main() -> Result<()> {
    init_logging();

    let opt = Opt::from_args();
    let source = read_input(opt.input.as_deref())?;

    println!("{}", run(&opt, &source)?);

    Ok(())
}
