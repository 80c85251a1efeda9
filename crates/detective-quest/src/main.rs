//! Detective Quest
//!
//! Main entry point: walk the mansion, collect clues, accuse a suspect.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::info;

use dq_core::{
    DqError, EXIT_MARKER, ExploreState, Explorer, InputSource, LEFT_MARKER, Mansion,
    RIGHT_MARKER, ReaderInput, SessionReport, SuspectTable, evaluate,
};

/// Detective Quest: solve the mystery of the mansion
#[derive(Parser, Debug)]
#[command(name = "detective-quest")]
#[command(author, version, about = "Detective Quest - Explore the mansion and find the culprit!", long_about = None)]
struct Args {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Read answers from a file instead of the terminal
    #[arg(long = "script")]
    script: Option<PathBuf>,

    /// List every clue and its suspect before exploring
    #[arg(long = "associations")]
    associations: bool,

    /// Print the final report as JSON instead of narration
    #[arg(long = "json")]
    json: bool,
}

impl Args {
    fn init_logging(&self) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Narration on stdout, silenced in JSON mode
struct Console {
    quiet: bool,
}

impl Console {
    fn line(&self, text: impl Display) {
        if !self.quiet {
            println!("{text}");
        }
    }

    fn prompt(&self, text: &str) -> io::Result<()> {
        if !self.quiet {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{text}")?;
            stdout.flush()?;
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.init_logging();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Erro fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), DqError> {
    let mansion = Mansion::standard()?;
    let table = SuspectTable::standard()?;

    match &args.script {
        Some(path) => {
            info!(path = %path.display(), "reading answers from script");
            let file = File::open(path)?;
            play(args, &mansion, &table, ReaderInput::new(BufReader::new(file)))
        }
        None => play(args, &mansion, &table, ReaderInput::new(io::stdin().lock())),
    }
}

fn play(
    args: &Args,
    mansion: &Mansion,
    table: &SuspectTable,
    mut input: impl InputSource,
) -> Result<(), DqError> {
    let console = Console { quiet: args.json };

    console.line("Bem-vindo ao Detective Quest!");
    console.line("Explore a mansão e colete pistas para descobrir o culpado.");

    if args.associations {
        console.line("\nAssociações pista -> suspeito:");
        for (clue, suspect) in table.associations() {
            console.line(format!("- {clue} -> {suspect}"));
        }
    }

    // Exploration
    let mut explorer = Explorer::new(mansion);
    while let Some(visit) = explorer.enter()? {
        console.line(format!("\nVocê entrou na sala: {}", visit.room));
        match visit.clue {
            Some(clue) => console.line(format!("Você encontrou uma pista: {clue}")),
            None => console.line("Nenhuma pista nesta sala."),
        }

        console.prompt(&format!(
            "Deseja ir para esquerda ({LEFT_MARKER}), direita ({RIGHT_MARKER}) ou sair ({EXIT_MARKER})? "
        ))?;
        let choice = input.read_direction()?;
        if explorer.choose(choice) == ExploreState::Exited {
            console.line("\nSaindo da exploração...");
        }
    }

    // Collected clues
    console.line("\nPistas coletadas:");
    for clue in explorer.clues() {
        console.line(format!("- {clue}"));
    }

    // Accusation
    console.prompt("\nDigite o nome do suspeito que deseja acusar: ")?;
    let accusation = input
        .read_line()?
        .map(|name| evaluate(explorer.clues(), table, &name));

    match &accusation {
        Some(accusation) => {
            console.line(format!("\nVocê acusou: {}", accusation.accused));
            if accusation.verdict.is_valid() {
                console.line(format!(
                    "Acusação {}! {} evidências encontradas contra {}.",
                    accusation.verdict, accusation.evidence_count, accusation.accused
                ));
            } else {
                console.line(format!(
                    "Acusação {}. Apenas {} evidência(s) contra {}.",
                    accusation.verdict, accusation.evidence_count, accusation.accused
                ));
            }
        }
        None => console.line("\nNenhum suspeito foi acusado."),
    }

    let report = SessionReport::new(
        &explorer.visited_names(),
        explorer.clues(),
        table,
        accusation,
    );

    if let Some(lead) = &report.most_likely {
        console.line(format!(
            "Suspeito mais provável: {} ({} evidência(s)).",
            lead.suspect, lead.evidence_count
        ));
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| DqError::Io(io::Error::other(e)))?;
        println!("{json}");
    }

    Ok(())
}
