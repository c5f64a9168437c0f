use crate::Table2Model::assembler::Table2Model;
use crate::Table2Model::provenance::set_model_id_from_path;
use crate::Utils::logging::init_logging;
use crate::converter_config::ConverterConfig;
use crate::errors::ConversionError;
use log::{info, warn};
use simplelog::LevelFilter;
use std::path::PathBuf;
use std::time::Instant;

pub const USAGE: &str = "table2model <metabolites> <reactions> <output.json> [config.json]";

/// Positional arguments of one run
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub metabolites: PathBuf,
    pub reactions: PathBuf,
    pub output: PathBuf,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// `args` without the program name
    pub fn parse(args: &[String]) -> Result<Self, ConversionError> {
        match args {
            [metabolites, reactions, output, rest @ ..] if rest.len() <= 1 => Ok(Self {
                metabolites: PathBuf::from(metabolites),
                reactions: PathBuf::from(reactions),
                output: PathBuf::from(output),
                config: rest.first().map(PathBuf::from),
            }),
            _ => Err(ConversionError::Usage(USAGE.to_string())),
        }
    }
}

/// Reads both tables, builds the model and writes it as JSON.
pub fn convert(args: &CliArgs) -> Result<(), ConversionError> {
    let start = Instant::now();
    let config = ConverterConfig::load(args.config.as_deref())?;
    let (mut model, report) =
        Table2Model::new(config).build(&args.metabolites, &args.reactions)?;
    if set_model_id_from_path(&mut model, &args.output).is_none() {
        warn!("cannot derive a model id from '{}'", args.output.display());
    }
    for removed in &report.removed_species {
        info!("removed unused metabolite '{}'", removed);
    }
    model.write_json(&args.output)?;
    model.pretty_print_summary();
    info!(
        "Conversion finished with {} warning(s) in {:.3} s",
        report.warnings.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Entry point of the binary.
pub fn run(args: Vec<String>) -> Result<(), ConversionError> {
    let args = CliArgs::parse(&args)?;
    init_logging(LevelFilter::Info, None)?;
    convert(&args)
}
