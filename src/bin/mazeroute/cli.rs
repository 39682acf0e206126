use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(about, version)]
pub struct Cli {
    #[arg(
        value_name = "PROBLEM FILE",
        help = "JSON file with the route endpoints and obstacle polygons"
    )]
    pub input: PathBuf,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Output file for the serialized route. The input filename is used by default, with the extension changed to .route.json"
    )]
    pub output: Option<PathBuf>,
}
