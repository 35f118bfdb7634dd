// Copyright (C) 2023 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use kinema::animator::Animator;
use kinema::core::{Elbow, Plane};
use kinema::program::Program;
use kinema::scenario::{
    ArmScenario, CuboidMode, CuboidScenario, ScaraScenario, Scenario, SerialScenario,
    SweepScenario,
};
use kinema::sink::{FrameSink, LogSink};
use kinema::source::PromptSource;
use kinema::trace::CsvSink;

mod config;

#[derive(Parser)]
#[command(author = "Copyright (C) 2023 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Kinematics animation dump", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Write every frame to a CSV file.
    #[arg(long, global = true)]
    csv: Option<PathBuf>,
    /// Delay between two frames in milliseconds.
    #[arg(long, global = true)]
    interval: Option<u64>,
    /// Level of verbosity.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Move a planar arm towards a target.
    Arm {
        /// Elbow solution.
        #[arg(long)]
        elbow: Option<Elbow>,
        /// Plane the arm moves in.
        #[arg(long)]
        plane: Option<Plane>,
        /// Target first plane coordinate.
        #[arg(short, allow_negative_numbers = true)]
        x: Option<f64>,
        /// Target second plane coordinate.
        #[arg(short, allow_negative_numbers = true)]
        y: Option<f64>,
    },
    /// Ask for arm parameters until stopped.
    Interactive,
    /// Run the arm parameters from a JSON file.
    Program {
        /// Program file.
        file: PathBuf,
    },
    /// Step the joints of a planar arm.
    Sweep,
    /// Sweep and tilt a three link chain.
    Chain,
    /// Animate the SCARA manipulator.
    Scara,
    /// Rotate a box.
    Cuboid {
        /// Rotation mode (sequential, combined, placement).
        #[arg(default_value = "sequential")]
        mode: CuboidMode,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(log::LevelFilter::Off);
    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);

    let log_level = match args.verbose {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let scenario = match &args.config {
        Some(path) => kinema::Config::from_file(path)?,
        None => kinema::Config::try_from_file(vec![
            PathBuf::from(kinema::consts::DEFAULT_CONFIG_PATH),
            std::env::current_dir()?.join(kinema::consts::LOCAL_CONFIG_FILE),
        ])?,
    };

    let mut config = config::DumpConfig {
        scenario,
        csv: args.csv.clone(),
        global: kinema::GlobalConfig::default(),
    };

    config.global.bin_name = env!("CARGO_BIN_NAME").to_string();
    config.global.verbose = args.verbose;
    config.global.frame_interval = args
        .interval
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.scenario.frame_interval());

    log::info!("{} {}", config.global.bin_name, kinema::consts::VERSION);
    log::trace!("{:#?}", config);
    log::debug!("{}", config.scenario);

    run(&config, args.command)
}

fn sink(config: &config::DumpConfig) -> anyhow::Result<Box<dyn FrameSink>> {
    Ok(match &config.csv {
        Some(path) => {
            log::info!("Writing frames to {}", path.display());
            Box::new(CsvSink::from_path(path)?)
        }
        None => Box::new(LogSink::default()),
    })
}

fn run(config: &config::DumpConfig, command: Command) -> anyhow::Result<()> {
    let animator = Animator::from_config(&config.global);
    let mut sink = sink(config)?;

    let arm = &config.scenario.arm;

    let scenario: Box<dyn Scenario> = match command {
        Command::Arm { elbow, plane, x, y } => {
            let mut arm = arm.clone();
            arm.elbow = elbow.unwrap_or(arm.elbow);
            arm.plane = plane.unwrap_or(arm.plane);
            arm.target = [x.unwrap_or(arm.target[0]), y.unwrap_or(arm.target[1])];

            Box::new(ArmScenario::from_config(&arm))
        }
        Command::Interactive => {
            let mut source = PromptSource::stdio();
            let played = animator.run_interactive(&mut source, arm.plane, arm.steps, &mut sink)?;

            println!("Played {} animations", played);
            return Ok(());
        }
        Command::Program { file } => {
            let mut program = Program::load(file)?;

            log::info!("Loaded program with {} entries", program.len());

            let played = animator.run_interactive(&mut program, arm.plane, arm.steps, &mut sink)?;

            println!("Played {} animations", played);
            return Ok(());
        }
        Command::Sweep => Box::new(SweepScenario::from_config(&config.scenario.sweep)),
        Command::Chain => Box::new(SerialScenario::from_config(&config.scenario.chain)),
        Command::Scara => Box::new(ScaraScenario::from_config(&config.scenario.scara)),
        Command::Cuboid { mode } => {
            Box::new(CuboidScenario::from_config(&config.scenario.cuboid, mode))
        }
    };

    let frames = animator.play(scenario.as_ref(), &mut sink)?;

    println!("Scenario {} played {} frames", scenario.name(), frames);

    Ok(())
}
