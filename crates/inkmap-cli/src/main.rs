use inkmap::country::Lang;
use inkmap::layout::{LayoutError, layout_reading_map};
use inkmap::{Error as RecordsError, ReadingLog};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Records(RecordsError),
    Layout(LayoutError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Records(err) => write!(f, "{err}"),
            CliError::Layout(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RecordsError> for CliError {
    fn from(value: RecordsError) -> Self {
        Self::Records(value)
    }
}

impl From<LayoutError> for CliError {
    fn from(value: LayoutError) -> Self {
        Self::Layout(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Stats,
    Group,
    Layout,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    lang: Option<Lang>,
    config: Option<String>,
}

fn usage() -> &'static str {
    "inkmap-cli\n\
\n\
USAGE:\n\
  inkmap-cli [stats] [--pretty] [<path>|-]\n\
  inkmap-cli group [--pretty] [--lang en|zh] [<path>|-]\n\
  inkmap-cli layout [--pretty] [--config <json-path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', records JSON is read from stdin.\n\
  - stats prints book/country totals for the record set.\n\
  - group prints the by-country semantic model in grouping order.\n\
  - layout prints the computed world-map cluster placements.\n\
  - --config points at an effective-config JSON with worldMap.* overrides.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "stats" => args.command = Command::Stats,
            "group" => args.command = Command::Group,
            "layout" => args.command = Command::Layout,
            "--pretty" => args.pretty = true,
            "--lang" => {
                let Some(lang) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.lang = match lang.as_str() {
                    "en" => Some(Lang::En),
                    "zh" => Some(Lang::Zh),
                    _ => return Err(CliError::Usage(usage())),
                };
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                while it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let log = ReadingLog::from_json_str(&text)?;

    match args.command {
        Command::Stats => write_json(&log.stats(), args.pretty),
        Command::Group => {
            let model = log.world_map_model_in(args.lang.unwrap_or(Lang::En));
            write_json(&model, args.pretty)
        }
        Command::Layout => {
            let effective_config = match args.config.as_deref() {
                Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
                None => serde_json::Value::Null,
            };
            let layout = layout_reading_map(&log.world_map_model(), &effective_config)?;
            write_json(&layout, args.pretty)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
