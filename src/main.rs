//! Main entry point for the raceboard CLI application.

use clap::Parser;
use raceboard::{
    app::App,
    cli::{Args, Config},
    error::Result,
};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = Config::from_args(args);
    let app = App::new(config);
    app.run()
}
