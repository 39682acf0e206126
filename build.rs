include!("src/bin/mazeroute/cli.rs");
use clap::CommandFactory;
use clap_mangen::Man;
use std::fs::{create_dir_all, File};
// https://rust-cli.github.io/book/in-depth/docs.html
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cmd = Cli::command();
    let man = Man::new(cmd);
    let folder = "man";
    create_dir_all(folder)?;
    let mut file = File::create(format!("{}/mazeroute.1", folder))?;
    man.render(&mut file)?;
    Ok(())
}
