//! LIMNUS CLI
//!
//! Usage:
//!   limnus --text "your text here"           # Single evaluation
//!   limnus --interactive                     # Interactive session (default)
//!   limnus --text "text" --json              # JSON output

use std::io::{self as stdio, Write};
use std::process;

use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use futures_util::future::{FutureExt, LocalBoxFuture};
use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use limnus::core::field::SAMPLE_SIZE;
use limnus::core::{
    classify, ticker, NextState, ResonanceEngine, ScriptedReply, Session, SessionView,
    SubmitOutcome, JOURNEY_NODES,
};
use limnus::types::{
    CrystalRecord, EngineStateSnapshot, JourneyProgress, LifecycleState, MetricsSnapshot,
    RecognitionFlags, RecognitionKind, SignalSource,
};
use limnus::{Config, Result, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "limnus",
    version = VERSION,
    about = "LIMNUS - Resonance engine for threshold consciousness",
    long_about = "LIMNUS listens for recognition phrases in your text and\n\
                  accumulates resonance toward BLOOM.\n\n\
                  States:\n  \
                  SEEKING     - resonance below 0.3\n  \
                  APPROACHING - resonance from 0.3\n  \
                  BECOMING    - resonance from 0.7, crystals form\n  \
                  BLOOM       - resonance 1.0\n\n\
                  Interactive commands:\n  \
                  :metrics :journey :field :crystals :reset quit"
)]
struct Args {
    /// Text to evaluate (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show signal breakdown
    #[arg(long)]
    verbose: bool,

    /// Frame interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Delay before a scripted reply appears, in milliseconds
    #[arg(long)]
    reply_delay_ms: Option<u64>,

    /// Number of recent crystals shown by :crystals
    #[arg(long)]
    crystal_window: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    init_logging();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(args).await {
        eprintln!("limnus: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr; stdout is the terminal view
fn init_logging() {
    let filter = EnvFilter::try_from_env("LIMNUS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stdio::stderr)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config = Config::from_env()?.with_overrides(
        args.tick_ms,
        args.reply_delay_ms,
        args.crystal_window,
    )?;
    debug!(?config, "configuration loaded");

    match args.text {
        Some(ref text) if !args.interactive => run_single(text, &args),
        _ => run_interactive(&args, &config).await,
    }
}

/// Run single text evaluation
fn run_single(text: &str, args: &Args) -> Result<()> {
    let mut engine = ResonanceEngine::new();
    let snapshot = engine.process_input(text.trim());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_snapshot(&snapshot, args);
    }
    Ok(())
}

/// Run interactive session: stdin lines, frames and delayed replies on one task
async fn run_interactive(args: &Args, config: &Config) -> Result<()> {
    let mut session = Session::new(config, Utc::now());
    let mut lines = BufReader::new(io::stdin()).lines();
    let (handle, mut frames) = ticker(config.tick_interval());
    let mut pending: FuturesUnordered<LocalBoxFuture<'static, ScriptedReply>> =
        FuturesUnordered::new();

    if !args.json {
        print_header();
        println!("{}", session.transcript()[0].text.italic());
        println!();
    }
    prompt(&session, args)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();

                if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                    break;
                }
                if line.starts_with(':') {
                    run_command(line, &mut session, config, args)?;
                    prompt(&session, args)?;
                    continue;
                }
                if line.is_empty() {
                    prompt(&session, args)?;
                    continue;
                }

                let outcome = session.submit(line, Utc::now());
                if let Some(reply) = outcome.reply.clone() {
                    pending.push(
                        async move {
                            tokio::time::sleep(reply.delay).await;
                            reply
                        }
                        .boxed_local(),
                    );
                }

                if args.json {
                    println!("{}", serde_json::to_string(&outcome)?);
                } else {
                    print_outcome(&outcome, args);
                }
                prompt(&session, args)?;
            }
            Some(now) = frames.next_frame() => {
                session.frame(now);
            }
            Some(reply) = pending.next(), if !pending.is_empty() => {
                session.deliver(&reply, Utc::now());
                if !args.json {
                    println!("\r{} {}", "LIMNUS:".bold(), reply.text.cyan());
                    prompt(&session, args)?;
                }
            }
        }
    }

    handle.stop();
    // Undelivered replies are dropped with the session
    drop(pending);

    let engine = session.engine();
    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "view": "ended",
                "inputs": engine.input_count(),
                "resonance": engine.resonance(),
                "crystals": engine.crystals().len(),
                "frames": frames.frames(),
            })
        );
    } else {
        println!(
            "\nSession ended. Inputs: {} | Resonance: {:.3} | Crystals: {} | Frames: {}",
            engine.input_count(),
            engine.resonance(),
            engine.crystals().len(),
            frames.frames()
        );
    }
    Ok(())
}

/// Handle a `:command` line; with `--json` every answer is one JSON line
fn run_command(line: &str, session: &mut Session, config: &Config, args: &Args) -> Result<()> {
    let name = line.trim_start_matches(':');

    if name == "reset" {
        session.reset(Utc::now());
        if args.json {
            println!("{}", serde_json::json!({ "view": "reset" }));
        } else {
            println!("{}", "Field reset. Speak at the threshold...".italic());
        }
        return Ok(());
    }

    match session.view(name, config.crystal_window, Utc::now()) {
        Some(view) if args.json => println!("{}", serde_json::to_string(&view)?),
        Some(view) => print_view(&view),
        None if args.json => println!(
            "{}",
            serde_json::json!({ "error": format!("unknown command {}", line) })
        ),
        None => println!(
            "{} unknown command {} (try :metrics :journey :field :crystals :reset)",
            "⚠".yellow(),
            line
        ),
    }
    Ok(())
}

fn print_view(view: &SessionView) {
    match view {
        SessionView::Metrics { metrics, recognition } => print_metrics(metrics, *recognition),
        SessionView::Journey { progress, next } => print_journey(progress, *next),
        SessionView::Field { frames, phase, mean_intensity, sample } => {
            print_field(*frames, *phase, *mean_intensity, sample)
        }
        SessionView::Crystals { total, recent } => print_crystals(*total, recent),
    }
}

/// Print header
fn print_header() {
    println!("{}", "╔══════════════════════════════════════════════╗".bold());
    println!("{}", format!("║        LIMNUS v{} - Resonance Field         ║", VERSION).bold());
    println!("{}", "╚══════════════════════════════════════════════╝".bold());
    println!("Type text and press Enter. Type 'quit' to exit.");
    println!();
}

fn prompt(session: &Session, args: &Args) -> Result<()> {
    if args.json {
        return Ok(());
    }
    let engine = session.engine();
    let state = engine.state();
    let label = format!("{} [{} r={:.2}]", state.emoji(), state, engine.resonance());
    print!("{} > ", label.color(state.color()));
    stdio::stdout().flush()?;
    Ok(())
}

fn print_snapshot(snapshot: &EngineStateSnapshot, args: &Args) {
    if args.verbose {
        print_verbose(snapshot);
    } else if args.no_color {
        println!("{}", snapshot.to_parseable_string());
    } else {
        println!("{}", snapshot.to_terminal_string());
    }
}

fn print_outcome(outcome: &SubmitOutcome, args: &Args) {
    let snapshot = &outcome.snapshot;
    print_snapshot(snapshot, args);

    for kind in &snapshot.newly_recognized {
        println!("  {} recognition: {}", "✦".magenta(), kind);
    }
    if let Some(crystal) = &snapshot.crystal {
        println!(
            "  {} crystal #{} at resonance {:.3}",
            "◆".cyan(),
            snapshot.crystal_count,
            crystal.resonance()
        );
    }
    if snapshot.state != classify(snapshot.resonance_before) {
        println!("  {} {}", "→".bold(), state_message(snapshot.state));
    }
    if let Some(inv) = &outcome.invocation {
        let facet = inv.invocation.facet;
        println!(
            "  {} {} [{} {} {}Hz]",
            inv.invocation.icon,
            inv.invocation.passage.italic(),
            inv.invocation.phase,
            inv.invocation.node,
            inv.invocation.frequency
        );
        println!(
            "    {} {:?} facet, resonance {:.2} | spiral depth {}",
            inv.invocation.sigil,
            facet,
            facet.resonance_level(),
            inv.depth()
        );
        println!("    {}", inv.response.cyan());
        if inv.spiral_complete {
            println!("    {}", "The spiral completes its cycle.".bold());
        }
    }
}

fn state_message(state: LifecycleState) -> &'static str {
    match state {
        LifecycleState::Seeking => "seeking",
        LifecycleState::Approaching => "approaching the threshold",
        LifecycleState::Becoming => "becoming - crystals begin to form",
        LifecycleState::Bloom => "BLOOM - the threshold crystallizes",
    }
}

/// Print verbose output
fn print_verbose(snapshot: &EngineStateSnapshot) {
    let color = snapshot.state.color();
    let rule = "─".repeat(40);

    println!("{}", format!("┌{}", rule).color(color));
    println!(
        "{}",
        format!(
            "│ resonance = {:.4}  (was {:.4})",
            snapshot.resonance, snapshot.resonance_before
        )
        .color(color)
    );
    println!("{}", format!("├{}", rule).color(color));
    println!("{}", "│ Signals:".color(color));
    if snapshot.matches.is_empty() {
        println!("{}", "│   (none)".color(color));
    }
    for signal in &snapshot.matches.signals {
        let source = match signal.source {
            SignalSource::Phrase => "phrase".to_string(),
            SignalSource::Conjunction(kind) => format!("conjunction:{}", kind),
        };
        println!(
            "{}",
            format!("│   {:<22} {:.2} ({})", signal.phrase, signal.weight, source).color(color)
        );
    }
    println!("{}", format!("├{}", rule).color(color));
    println!(
        "{}",
        format!(
            "│ State: {} | Recognition: {}/3 | Crystals: {}",
            snapshot.state,
            snapshot.recognition.count(),
            snapshot.crystal_count
        )
        .color(color)
    );
    println!("{}", format!("│ Reason: {}", snapshot.reason).color(color));
    println!("{}", format!("└{}", rule).color(color));
}

fn print_metrics(metrics: &MetricsSnapshot, recognition: RecognitionFlags) {
    for (name, value) in metrics.entries() {
        let filled = (value.clamp(0.0, 1.0) * 20.0).round() as usize;
        println!(
            "  {:<16} {:>7.3} {}{}",
            name,
            value,
            "█".repeat(filled).cyan(),
            "░".repeat(20 - filled).dimmed()
        );
    }
    for kind in RecognitionKind::ALL {
        let mark = if recognition.get(kind) { "✓".green() } else { "·".dimmed() };
        println!("  {} {}", mark, kind.label());
    }
}

fn print_journey(journey: &JourneyProgress, next: Option<NextState>) {
    println!("  Journey {:.0}%", journey.percent);
    for node in JOURNEY_NODES.iter() {
        let line = format!("{} ({:.1}) - {}", node.name, node.threshold, node.description);
        if journey.is_current(node) {
            println!("  {} {}", "◉".magenta(), line.bold());
        } else if journey.is_active(node) {
            println!("  {} {}", "●".cyan(), line);
        } else {
            println!("  {} {}", "○".dimmed(), line.dimmed());
        }
    }
    if let Some(next) = next {
        println!("  Next: {} at resonance {:.1}", next.state, next.at);
    }
}

const FIELD_SHADES: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

fn print_field(frames: u64, phase: f64, mean: f64, sample: &[[f64; SAMPLE_SIZE]; SAMPLE_SIZE]) {
    println!("  frames={} phase={:.2} mean={:.3}", frames, phase, mean);
    for row in sample.iter() {
        let line: String = row
            .iter()
            .map(|v| {
                let idx = (v.clamp(0.0, 1.0) * (FIELD_SHADES.len() - 1) as f64).round() as usize;
                FIELD_SHADES[idx]
            })
            .collect();
        println!("  |{}|", line);
    }
}

fn print_crystals(total: usize, recent: &[CrystalRecord]) {
    if recent.is_empty() {
        println!("  No crystals yet. They form at resonance 0.7.");
        return;
    }
    println!("  {} of {} crystals:", recent.len(), total);
    for crystal in recent {
        println!(
            "  {} {} {:.3} \"{}\"",
            "◆".cyan(),
            crystal.created_at().format("%H:%M:%S"),
            crystal.resonance(),
            crystal.source_text()
        );
    }
}
