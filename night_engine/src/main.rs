use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use night_core::clock::{NightClock, DEFAULT_MINUTES_PER_SECOND};
use night_core::{CompletionTracker, Director, NightContext, NightMode, TimeEventRegistry};

mod sim;
mod spec;

use sim::HostWorld;
use spec::parse_custom_spec;

/// Upper bound on frames per run; a night that fails to reach morning
/// within this budget is a wiring bug.
const MAX_TICKS: u64 = 10_000_000;

/// Headless host that runs one scripted night to morning.
#[derive(Parser, Debug)]
#[command(about = "Runs a scripted night against a toy actor simulation", version)]
struct Args {
    /// Campaign night to run (1-6, or 7 for the custom night)
    #[arg(long, default_value_t = 1)]
    night: u32,

    /// Run a challenge instead of a campaign night (1-4)
    #[arg(long, conflicts_with = "night")]
    challenge: Option<u32>,

    /// Custom-night levels as a comma-separated actor=level list
    #[arg(long)]
    custom: Option<String>,

    /// Seed for every random draw in the run
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Simulation frames per second
    #[arg(long, default_value_t = 60.0)]
    tick_rate: f32,

    /// Multiplier on the in-game clock speed
    #[arg(long, default_value_t = 1.0)]
    time_scale: f32,

    /// Path to write the run's event log and completion state as JSON
    #[arg(long)]
    event_log_json: Option<PathBuf>,

    /// Log every scripted event as it fires
    #[arg(long)]
    verbose: bool,
}

#[derive(Serialize)]
struct RunManifest<'a> {
    mode: String,
    hours: u32,
    ticks: u64,
    in_game_minutes: f32,
    completion: &'a CompletionTracker,
    call_note: Option<&'a str>,
    events: &'a [String],
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if args.tick_rate <= 0.0 {
        bail!("--tick-rate must be positive");
    }
    if args.time_scale <= 0.0 {
        bail!("--time-scale must be positive");
    }

    let registry = TimeEventRegistry::with_builtin();
    let mut ctx = NightContext::new(args.seed);
    let mut world = HostWorld::new();
    world.install_into(ctx.roster_mut(), args.seed.wrapping_add(1));

    if let Some(custom) = args.custom.as_deref() {
        let levels = parse_custom_spec(custom).context("parsing --custom levels")?;
        if args.challenge.is_some() || args.night != 7 {
            log::warn!("--custom only affects night 7");
        }
        for (id, level) in levels {
            ctx.custom_night_mut().set_level(id, level);
        }
    }

    let clock = NightClock::with_rate(DEFAULT_MINUTES_PER_SECOND * args.time_scale);
    let mut director = Director::with_clock(clock);

    match args.challenge {
        Some(id) => director.select_challenge(&registry, &mut ctx, id),
        None => director.select_night(&registry, &mut ctx, args.night),
    }
    let Some(mode) = director.mode() else {
        match args.challenge {
            Some(id) => bail!("no challenge registered under {id}"),
            None => bail!("no night registered under {}", args.night),
        }
    };
    let hours = director
        .current_hours()
        .context("selected event reports no length")?;

    let dt = 1.0 / args.tick_rate;
    let mut ticks: u64 = 0;
    while !director.night_over() {
        world.step(dt);
        director.tick(&mut ctx, dt);
        ticks += 1;
        if ticks >= MAX_TICKS {
            bail!("night did not reach morning within {MAX_TICKS} ticks");
        }
    }
    director.on_win(&mut ctx);

    let mode_label = match mode {
        NightMode::Night(n) => format!("night {n}"),
        NightMode::Challenge(id) => format!("challenge {id}"),
    };
    println!(
        "Finished {mode_label}: {hours} hours in {ticks} ticks ({:.1} in-game minutes)",
        director.clock().minutes()
    );
    println!(
        "Completion -> nights: {:?} | challenges: {:?} | next night: {}",
        ctx.completion().nights(),
        ctx.completion().challenges(),
        ctx.completion().next_night()
    );
    if let Some(note) = ctx.call_note() {
        println!("Last call note: {}", note.trim_end());
    }

    if let Some(path) = args.event_log_json.as_ref() {
        let manifest = RunManifest {
            mode: mode_label,
            hours,
            ticks,
            in_game_minutes: director.clock().minutes(),
            completion: ctx.completion(),
            call_note: ctx.call_note(),
            events: ctx.events(),
        };
        let json =
            serde_json::to_string_pretty(&manifest).context("serializing run manifest to JSON")?;
        fs::write(path, json)
            .with_context(|| format!("writing run manifest to {}", path.display()))?;
        println!("Saved run manifest to {}", path.display());
    }

    director.clear(&mut ctx);
    Ok(())
}
