use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::info;
use tracing_subscriber::EnvFilter;

use formrow::{
    DocumentFormat, FormOptions, FormUI, OutputDestination, OutputOptions, emit,
    parse_form_definition,
};

#[derive(Debug, Parser)]
#[command(
    name = "formrow",
    version,
    about = "Fill in a form definition as an interactive terminal form"
)]
struct Cli {
    /// Form definition: file path or "-" for stdin
    #[arg(short = 'f', long = "form", value_name = "SPEC")]
    form: String,

    /// Title shown above the rows (overrides the definition's title)
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Row to focus when the form opens
    #[arg(long = "focus", value_name = "NAME")]
    focus: Option<String>,

    /// Output destinations ("-" writes to stdout). Accepts multiple values per flag use.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Only validate rows on save, not while typing
    #[arg(long = "no-auto-validate")]
    no_auto_validate: bool,

    /// Hide the key binding help line
    #[arg(long = "no-help")]
    no_help: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let (contents, format) = read_form_spec(&cli.form)?;
    let definition = parse_form_definition(&contents, format)
        .map_err(|err| eyre!("{err:#}"))
        .wrap_err_with(|| format!("invalid form definition '{}'", cli.form))?;
    info!(fields = definition.fields.len(), "form definition loaded");

    let mut options = FormOptions::default()
        .with_auto_validate(!cli.no_auto_validate)
        .with_help(!cli.no_help);
    if let Some(title) = cli.title.as_ref() {
        options = options.with_title(title.clone());
    }

    let mut ui = FormUI::from_definition(definition)
        .map_err(|err| eyre!("{err:#}"))?
        .with_options(options);
    if let Some(name) = cli.focus.as_ref() {
        ui = ui.with_initial_focus(name.clone());
    }

    let Some(values) = ui.run().map_err(|err| eyre!("{err:#}"))? else {
        info!("form closed without saving");
        return Ok(());
    };

    let destinations = if cli.outputs.is_empty() {
        vec![OutputDestination::Stdout]
    } else {
        cli.outputs
            .iter()
            .map(|spec| OutputDestination::parse(spec))
            .collect()
    };
    let output = OutputOptions::default()
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations);
    emit(&values, &output).map_err(|err| eyre!("{err:#}"))?;
    Ok(())
}

fn read_form_spec(spec: &str) -> Result<(String, DocumentFormat)> {
    if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read form definition from stdin")?;
        return Ok((buffer, DocumentFormat::Json));
    }
    let path = Path::new(spec);
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read form definition {}", path.display()))?;
    Ok((contents, DocumentFormat::from_path(path)))
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
