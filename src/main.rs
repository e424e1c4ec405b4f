use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, error};

use fretchord::{voice, voice_simplified, ChordError, Config, Notation, Tuning, Voicing};

/// Find guitar, ukulele or custom-tuned fingerings for chord names
#[derive(Parser, Debug)]
#[command(name = "fretchord", version, about)]
struct Args {
    /// Chord names, e.g. Am7 G/B Asus4
    #[arg(required = true)]
    chords: Vec<String>,

    /// Tuning: guitar, ukulele, or open-string offsets from middle C ("-20,-15,-10,-5,-1,4")
    #[arg(short, long, allow_hyphen_values = true)]
    tuning: Option<Tuning>,

    /// Key naming: standard (B, Bb) or h (H, B)
    #[arg(short, long)]
    notation: Option<Notation>,

    /// Only read minor, seventh, diminished and bass
    #[arg(long)]
    simplified: bool,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print JSON instead of diagrams
    #[arg(long)]
    json: bool,

    /// Show at most N fingerings per group
    #[arg(short, long, value_name = "N")]
    limit: Option<usize>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "info,fretchord=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ChordError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(tuning) = args.tuning {
        config.tuning = tuning;
    }
    if let Some(notation) = args.notation {
        config.notation = notation;
    }
    config.simplified |= args.simplified;
    debug!(?config, "effective configuration");

    let mut voicings = Vec::with_capacity(args.chords.len());
    for text in &args.chords {
        let mut voicing = if config.simplified {
            voice_simplified(text, config.notation, &config.tuning)?
        } else {
            voice(text, config.notation, &config.tuning)?
        };
        if let Some(limit) = args.limit {
            voicing.groups.truncate(limit);
        }
        voicings.push(voicing);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&voicings)?;
        println!("{}", json);
    } else {
        for voicing in &voicings {
            print_voicing(voicing, config.tuning.len());
        }
    }
    Ok(())
}

fn print_voicing(voicing: &Voicing, strings: usize) {
    println!("{}", voicing.display);
    let titles = ["right bass", "right bass, barre", "other bass", "other bass, barre"];
    for (title, group) in titles.iter().zip(voicing.groups.groups()) {
        if group.is_empty() {
            continue;
        }
        println!("  {}:", title);
        for fingering in group {
            match fingering.barre {
                Some(barre) => println!(
                    "    {}  barre {} from string {}",
                    fingering.diagram(strings),
                    barre.at,
                    barre.from + 1
                ),
                None => println!("    {}", fingering.diagram(strings)),
            }
        }
    }
    if voicing.groups.is_empty() {
        println!("  (no playable fingering)");
    }
}
