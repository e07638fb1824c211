//! Brick Breaker entry point
//!
//! Headless demo: an autopilot plays rounds at the fixed tick rate without
//! sleeping, then logs how the game went.
//!
//! Usage: `brick-breaker [settings.json] [--ticks N] [--scene]`

use std::process::ExitCode;

use brick_breaker::Settings;
use brick_breaker::platform::{Autopilot, Headless, TickDriver};
use brick_breaker::renderer::Scene;
use brick_breaker::sim::GameEvent;

const DEFAULT_TICKS: u64 = 20_000;

struct Args {
    settings_path: Option<String>,
    ticks: u64,
    print_scene: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        settings_path: None,
        ticks: DEFAULT_TICKS,
        print_scene: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--scene" => args.print_scene = true,
            "--ticks" => {
                let value = iter.next().ok_or("--ticks needs a value")?;
                args.ticks = value
                    .parse()
                    .map_err(|e| format!("bad --ticks value {value:?}: {e}"))?;
            }
            _ if args.settings_path.is_none() => args.settings_path = Some(arg),
            _ => return Err(format!("unexpected argument {arg:?}")),
        }
    }
    Ok(args)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: brick-breaker [settings.json] [--ticks N] [--scene]");
            return ExitCode::FAILURE;
        }
    };

    let settings = match &args.settings_path {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Could not load settings from {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let mut driver = match TickDriver::new(settings, Headless::default()) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("Invalid settings: {e}");
            return ExitCode::FAILURE;
        }
    };
    let pilot = Autopilot::default();
    log::info!(
        "Seed {}, tick interval {:?}",
        driver.session().seed(),
        driver.interval()
    );

    let (mut lost, mut cleared, mut bricks) = (0u32, 0u32, 0u32);
    for _ in 0..args.ticks {
        if let Some(key) = pilot.next_key(driver.session()) {
            driver.key(key);
        }
        driver.tick();

        for event in driver.session_mut().drain_events() {
            match event {
                GameEvent::BrickDestroyed { .. } => bricks += 1,
                GameEvent::RoundLost => lost += 1,
                GameEvent::RoundCleared => cleared += 1,
                _ => {}
            }
        }
    }

    log::info!(
        "{} ticks: {bricks} bricks destroyed, {cleared} rounds cleared, {lost} rounds lost, {} redraws",
        args.ticks,
        driver.host().redraws
    );

    if args.print_scene {
        match Scene::from_session(driver.session()).to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Could not serialize scene: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
