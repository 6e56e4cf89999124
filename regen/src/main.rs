use std::env;

use tracing_subscriber::EnvFilter;

use regen::cli;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Stdout carries the report, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let res = cli::utf8_args(env::args_os()).and_then(|args| {
        let line = cli::command_line(args);
        tracing::debug!(%line, "raw command line");
        regen::run(&line)
    });

    println!("{}", regen::report(&res));
}
