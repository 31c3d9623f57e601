// flowlang: parse, outline and chart a tiny structured-control-flow language

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use thiserror::Error;

use flowlang::flowchart::{render_document, FlowchartOptions};
use flowlang::parser::{
    ElseSeparator, GrammarOptions, Program, ProgramError, TextClass, DEFAULT_MAX_DEPTH,
};
use flowlang::ui::App;

#[derive(Debug, Parser)]
#[command(
    name = "flowlang",
    version,
    about = "Parse a tiny structured-control-flow language into an outline or a flowchart."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    grammar: GrammarArgs,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Args)]
struct GrammarArgs {
    /// Only letters and whitespace count as step and guard text
    #[arg(long, global = true)]
    words_only: bool,

    /// Require exactly one space between `else` and its statement
    #[arg(long, global = true)]
    strict_else: bool,

    /// Maximum statement nesting depth
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl GrammarArgs {
    fn options(&self) -> GrammarOptions {
        GrammarOptions {
            text: if self.words_only {
                TextClass::Words
            } else {
                TextClass::Phrases
            },
            else_separator: if self.strict_else {
                ElseSeparator::SingleSpace
            } else {
                ElseSeparator::Whitespace
            },
            max_depth: self.max_depth,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the indented outline of a program
    Print {
        /// Source file; reads stdin when absent or `-`
        file: Option<PathBuf>,
    },
    /// Render a program as an HTML flowchart
    Flowchart {
        /// Source file; reads stdin when absent or `-`
        file: Option<PathBuf>,

        /// Page title (defaults to the file name)
        #[arg(long)]
        title: Option<String>,

        /// Stylesheet URL linked from the page
        #[arg(long, default_value = "style.css")]
        stylesheet: String,

        /// Embed the default stylesheet instead of linking one
        #[arg(long)]
        inline_style: bool,

        /// Seed for box colors, for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Browse source and outline side by side in the terminal
    View {
        /// Source file
        file: PathBuf,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("cannot write '{path}': {source}")]
    Write { path: String, source: io::Error },

    #[error(transparent)]
    Program(#[from] ProgramError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = flowlang::logging::init(cli.verbose) {
        eprintln!("Warning: logger already installed: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let options = cli.grammar.options();

    match cli.command {
        Command::Print { file } => {
            let source = read_source(file.as_deref())?;
            let program = Program::parse_with(&source, options)?;
            info!("Printing {} top-level statements", program.len());
            println!("{}", program);
            Ok(())
        }
        Command::Flowchart {
            file,
            title,
            stylesheet,
            inline_style,
            seed,
            output,
        } => {
            let source = read_source(file.as_deref())?;
            let program = Program::parse_with(&source, options)?;

            let title = title
                .or_else(|| file.as_deref().and_then(display_name))
                .unwrap_or_else(|| FlowchartOptions::default().title);
            let page_options = FlowchartOptions {
                title,
                stylesheet,
                inline_style,
                seed,
            };
            let html = render_document(&program, &page_options, &mut page_options.palette());

            match output {
                Some(path) => fs::write(&path, html).map_err(|source| CliError::Write {
                    path: path.display().to_string(),
                    source,
                })?,
                None => print!("{}", html),
            }
            Ok(())
        }
        Command::View { file } => view(&file, options),
    }
}

fn view(path: &Path, options: GrammarOptions) -> Result<(), CliError> {
    let source = read_source(Some(path))?;

    eprintln!("Parsing {}...", path.display());
    let mut app = App::new(source, options);
    eprintln!("{}.", app.status_message);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(CliError::from)
}

fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn display_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| *stem != "-")
        .map(str::to_string)
}
