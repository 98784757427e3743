//! deskcat-headless: run the desktop cat without a window.
//!
//! Loads (or creates) the cat's personality and needs from the data
//! directory, drives the companion on a fixed 50 ms frame clock with a
//! synthetic cursor that circles the screen, strokes and feeds the cat now
//! and then, and saves its needs on exit.  Pass `--trace-dir` to also write
//! `ticks.csv` and `behavior_changes.csv`.

use std::f64::consts::TAU;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pet_behavior::{Behavior, SwitchReason};
use pet_core::{PetConfig, Point, Tick, Timestamp};
use pet_sim::{CompanionBuilder, CompanionObserver, Frame};
use pet_store::{BackgroundSnapshots, StateStore};
use pet_trace::{CsvTraceWriter, TraceObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

/// The synthetic cursor is on screen for the first half of each cycle.
const CURSOR_CYCLE_TICKS: u64 = 200;
/// Stroke the cat this often.
const PET_EVERY_TICKS:    u64 = 600;
/// Feed the cat once hunger climbs past this.
const FEED_ABOVE_HUNGER:  f64 = 60.0;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "deskcat-headless")]
#[command(about = "Run the desktop cat companion without a window")]
struct Args {
    /// TOML configuration file; defaults are used if it does not exist
    #[arg(long, default_value = "deskcat.toml")]
    config: PathBuf,

    /// Number of frames to simulate (20 per second)
    #[arg(long, default_value_t = 2_400)]
    ticks: u64,

    /// Random seed for deterministic runs (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for cat_personality.json / cat_state.json (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Write CSV traces into this directory
    #[arg(long)]
    trace_dir: Option<PathBuf>,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs what the cat does and forwards everything to an optional trace.
struct Narrator {
    trace:    Option<TraceObserver<CsvTraceWriter>>,
    changes:  usize,
    arrivals: usize,
    last:     Option<Frame>,
}

impl Narrator {
    fn new(trace: Option<TraceObserver<CsvTraceWriter>>) -> Self {
        Self { trace, changes: 0, arrivals: 0, last: None }
    }
}

impl CompanionObserver for Narrator {
    fn on_behavior_change(
        &mut self,
        tick:   Tick,
        now:    Timestamp,
        from:   Behavior,
        to:     Behavior,
        reason: SwitchReason,
    ) {
        self.changes += 1;
        tracing::info!(%tick, %from, %to, %reason, "behavior changed");
        if let Some(trace) = &mut self.trace {
            trace.on_behavior_change(tick, now, from, to, reason);
        }
    }

    fn on_arrival(&mut self, tick: Tick, position: Point) {
        self.arrivals += 1;
        tracing::debug!(%tick, %position, "target reached");
        if let Some(trace) = &mut self.trace {
            trace.on_arrival(tick, position);
        }
    }

    fn on_tick_end(&mut self, frame: &Frame) {
        self.last = Some(*frame);
        if let Some(trace) = &mut self.trace {
            trace.on_tick_end(frame);
        }
    }

    fn on_shutdown(&mut self, final_tick: Tick) {
        if let Some(trace) = &mut self.trace {
            trace.on_shutdown(final_tick);
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: &Path) -> Result<PetConfig> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "config file not found, using defaults");
        return Ok(PetConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: PetConfig = toml::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Cursor circling the middle of the screen, present for half of each cycle.
fn synthetic_cursor(config: &PetConfig, tick: Tick) -> Option<Point> {
    let phase = tick.0 % CURSOR_CYCLE_TICKS;
    if phase >= CURSOR_CYCLE_TICKS / 2 {
        return None;
    }
    let s = &config.screen;
    let angle = TAU * phase as f64 / (CURSOR_CYCLE_TICKS / 2) as f64;
    let radius = s.width.min(s.height) / 3.0;
    Some(Point::new(
        s.width / 2.0 + radius * angle.cos(),
        s.height / 2.0 + radius * angle.sin(),
    ))
}

/// `RUST_LOG` directives when set and valid, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    let args = Args::parse();

    // 1. Configuration.
    let mut config = load_config(&args.config)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    config.validate().context("invalid configuration")?;
    println!("=== deskcat-headless ===");
    println!(
        "Frames: {}  |  {:.1} s simulated  |  Data: {}",
        args.ticks,
        args.ticks as f64 * config.frame_secs(),
        config.data_dir.display()
    );
    println!();

    // 2. Persistent state and the background snapshot writer.
    let store = StateStore::new(&config.data_dir);
    let start = Timestamp::now();
    let builder = CompanionBuilder::new(config.clone(), start).restore_from(&store);
    let sink = BackgroundSnapshots::spawn(store).context("starting snapshot writer")?;
    let mut pet = builder.sink(sink).build()?;

    // 3. Optional trace.
    let trace = match &args.trace_dir {
        Some(dir) => Some(TraceObserver::new(CsvTraceWriter::new(dir)?)),
        None => None,
    };
    let mut obs = Narrator::new(trace);

    // 4. Run.
    let t0 = Instant::now();
    let mut strokes = 0;
    let mut meals = 0;
    for _ in 0..args.ticks {
        let tick = pet.clock.current_tick;
        let now = pet.clock.now();
        let frame = pet.tick(now, synthetic_cursor(&config, tick), &mut obs);

        if (tick.0 + 1).is_multiple_of(PET_EVERY_TICKS) {
            pet.pet();
            strokes += 1;
        }
        if frame.hunger > FEED_ABOVE_HUNGER {
            pet.feed();
            meals += 1;
        }
    }
    let elapsed = t0.elapsed();

    // 5. Save and close.
    pet.shutdown(&mut obs)?;
    if let Some(e) = obs.trace.as_mut().and_then(TraceObserver::take_error) {
        eprintln!("trace error: {e}");
    }

    // 6. Summary.
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  behavior changes : {}", obs.changes);
    println!("  targets reached  : {}", obs.arrivals);
    println!("  strokes / meals  : {strokes} / {meals}");
    if let Some(last) = obs.last {
        println!();
        println!("{:<10} {:<10} {:<8} {:<8} {:<8}", "Behavior", "Position", "Energy", "Hunger", "Happy");
        println!("{}", "-".repeat(48));
        let (x, y) = last.window_origin();
        println!(
            "{:<10} {:<10} {:<8.1} {:<8.1} {:<8.1}",
            last.behavior.to_string(),
            format!("{x},{y}"),
            last.energy,
            last.hunger,
            last.happiness,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn log_filter_honours_rust_log() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn synthetic_cursor_is_half_present() {
        let config = PetConfig::default();
        assert!(synthetic_cursor(&config, Tick(0)).is_some());
        assert!(synthetic_cursor(&config, Tick(CURSOR_CYCLE_TICKS / 2)).is_none());
    }
}
