use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use mazeroute::output;
use mazeroute::problem::Problem;
use mazeroute::router::{Router, RouterError};

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("mazeroute: {:#}", error);

            // An unreachable route gets its own exit status; nothing has been
            // written in that case.
            if error.downcast_ref::<RouterError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let problem_file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let problem = Problem::load(BufReader::new(problem_file))?;

    let mut router = Router::new(&problem);
    let route = router.route()?;
    let records = output::render(&route);

    let output_filename = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.clone().with_extension("route.json"));
    let output_file = File::create(&output_filename)
        .with_context(|| format!("failed to create {}", output_filename.display()))?;
    serde_json::to_writer(output_file, &records)?;

    Ok(())
}
