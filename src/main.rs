use anyhow::Result;
use clap::{Parser, ValueEnum};

use tchisla::{solve_all, Solution};

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tchisla")]
#[command(about = "Write a target number using a single repeated digit, with minimum score")]
#[command(version)]
struct CliArgs {
    /// The result to make.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    target: u64,
    #[arg(short, long, value_enum, default_value = "warn")]
    log_level: LogLevel,
    /// Output results as JSON.
    #[arg(short, long)]
    json: bool,
}

fn print_solution(solution: &Solution) {
    print_witness(solution, "Z", &solution.integer);
    if let Some(rational) = &solution.rational {
        print_witness(solution, "Q", rational);
    }
}

fn print_witness(solution: &Solution, domain: &str, witness: &tchisla::Witness) {
    println!(
        "{}#{} in {}: {} digits",
        solution.target, solution.digit, domain, witness.level
    );
    println!("--------------------");
    for line in &witness.lines {
        println!("{}", line);
    }
    println!();
}

fn run(args: CliArgs) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.to_log_level_filter())
        .init();

    let solutions = solve_all(args.target)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&solutions)?);
    } else {
        for solution in &solutions {
            print_solution(solution);
        }
    }
    Ok(())
}

fn main() {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            let code = match error.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    if let Err(error) = run(args) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}
