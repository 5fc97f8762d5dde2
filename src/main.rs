// This is my entry point for the coinstring command-line tool
// The codec itself lives in the library; here I only wire up logging, config and the CLI
use clap::Parser;
use coinstring::{execute, Opt, GLOBAL_CONFIG};
use log::{error, LevelFilter};
use std::process;

fn main() {
    // I read the log level from COINSTRING_LOG so I can turn on debug output when a string won't decode
    // If that variable holds something unusable, I fall back to Info instead of refusing to start
    let level = GLOBAL_CONFIG.get_log_level().unwrap_or(LevelFilter::Info);
    env_logger::builder().filter_level(level).init();

    // I parse the command line arguments using clap - encode, decode or validate
    let opt = Opt::parse();

    // I run the command against the global config, which may supply a default version byte
    match execute(opt.command, &GLOBAL_CONFIG) {
        Ok(output) => {
            // I print whatever the command produced (an address, a decoded payload, valid/invalid)
            println!("{}", output.text);
            // A failed validation still prints "invalid", but I exit with 1 so scripts can check it
            if !output.success {
                process::exit(1);
            }
        }
        Err(e) => {
            // If something goes wrong, I log the error and exit with code 1
            error!("Error: {e}");
            process::exit(1);
        }
    }
}
