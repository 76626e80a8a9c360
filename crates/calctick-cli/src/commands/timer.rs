use std::io::Write;
use std::time::Duration;

use calctick_core::{
    Clock, Config, Event, ManualClock, SystemClock, TimeTracker, TimerCommand, TimerMode,
    TrackerSnapshot,
};
use clap::Subcommand;
use serde::Serialize;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the timer live in the terminal (Ctrl-C pauses and exits)
    Run {
        /// stopwatch or countdown (defaults to timer.default_mode)
        #[arg(long)]
        mode: Option<TimerMode>,
        /// Countdown minutes (defaults to timer.countdown_minutes)
        #[arg(long)]
        minutes: Option<u32>,
        /// Countdown seconds (defaults to timer.countdown_seconds)
        #[arg(long)]
        seconds: Option<u32>,
        /// Stop after this many seconds
        #[arg(long)]
        limit_secs: Option<u64>,
    },
    /// Replay steps against a simulated clock and print the result as JSON
    ///
    /// Steps: start, pause, reset, mode=<m>, minutes=<n>, seconds=<n>, wait=<ms>
    Simulate {
        /// Starting mode (defaults to timer.default_mode)
        #[arg(long)]
        mode: Option<TimerMode>,
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

/// One scripted step for `timer simulate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Command(TimerCommand),
    Wait(u64),
}

fn parse_step(raw: &str) -> Result<Step, String> {
    let number = |v: &str| v.parse::<u32>().map_err(|e| format!("bad step '{raw}': {e}"));
    match raw.split_once('=') {
        None => match raw {
            "start" => Ok(Step::Command(TimerCommand::Start)),
            "pause" => Ok(Step::Command(TimerCommand::Pause)),
            "reset" => Ok(Step::Command(TimerCommand::Reset)),
            _ => Err(format!("unknown step: {raw}")),
        },
        Some(("mode", v)) => Ok(Step::Command(TimerCommand::SelectMode(v.parse()?))),
        Some(("minutes", v)) => Ok(Step::Command(TimerCommand::SetMinutes(number(v)?))),
        Some(("seconds", v)) => Ok(Step::Command(TimerCommand::SetSeconds(number(v)?))),
        Some(("wait", v)) => v
            .parse::<u64>()
            .map(Step::Wait)
            .map_err(|e| format!("bad step '{raw}': {e}")),
        Some(_) => Err(format!("unknown step: {raw}")),
    }
}

#[derive(Serialize)]
struct SimulationReport {
    events: Vec<Event>,
    snapshot: TrackerSnapshot,
}

/// Apply `steps` to a fresh tracker on a manual clock, ticking every
/// `tick_ms` of simulated time during waits.
fn simulate(mode: TimerMode, steps: &[Step], tick_ms: u64) -> SimulationReport {
    let clock = ManualClock::new(0);
    let mut tracker = TimeTracker::with_mode(clock.clone(), mode);
    let mut events = Vec::new();

    for step in steps {
        match *step {
            Step::Command(command) => events.extend(tracker.apply(command)),
            Step::Wait(ms) => {
                let mut left = ms;
                while left > 0 {
                    let slice = left.min(tick_ms.max(1));
                    clock.advance(slice);
                    left -= slice;
                    events.extend(tracker.tick());
                }
            }
        }
    }

    SimulationReport {
        events,
        snapshot: tracker.snapshot(),
    }
}

async fn run_live<C: Clock>(
    mut tracker: TimeTracker<C>,
    tick: Duration,
    limit: Option<Duration>,
) -> Result<(), Box<dyn std::error::Error>> {
    if tracker.start().is_none() {
        return Err("countdown duration is zero; set --minutes or --seconds".into());
    }

    let deadline = limit.map(|l| tokio::time::Instant::now() + l);
    let mut interval = tokio::time::interval(tick);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut stdout = std::io::stdout();
    let mut shown = String::new();

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let finished = tracker.tick();
                let display = tracker.display();
                if display != shown {
                    write!(stdout, "\r{display}")?;
                    stdout.flush()?;
                    shown = display;
                }
                if finished.is_some() {
                    writeln!(stdout)?;
                    tracing::info!("countdown finished");
                    break;
                }
                if deadline.is_some_and(|d| tokio::time::Instant::now() >= d) {
                    tracker.pause();
                    writeln!(stdout, "\r{}", tracker.display())?;
                    break;
                }
            }
            res = &mut ctrl_c => {
                res?;
                tracker.pause();
                writeln!(stdout, "\r{}", tracker.display())?;
                tracing::info!(display = %tracker.display(), "interrupted");
                break;
            }
        }
    }
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        TimerAction::Run {
            mode,
            minutes,
            seconds,
            limit_secs,
        } => {
            let mut tracker =
                TimeTracker::with_mode(SystemClock, mode.unwrap_or(config.timer.default_mode));
            tracker.set_minutes(minutes.unwrap_or(config.timer.countdown_minutes));
            tracker.set_seconds(seconds.unwrap_or(config.timer.countdown_seconds));

            let tick = Duration::from_millis(config.timer.tick_interval_ms);
            let limit = limit_secs.map(Duration::from_secs);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_live(tracker, tick, limit))?;
        }
        TimerAction::Simulate { mode, steps } => {
            let steps = steps
                .iter()
                .map(|s| parse_step(s))
                .collect::<Result<Vec<_>, _>>()?;
            let report = simulate(
                mode.unwrap_or(config.timer.default_mode),
                &steps,
                config.timer.tick_interval_ms,
            );
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
