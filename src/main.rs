use std::process::ExitCode;

use log::debug;
use prim_mst::{run_files, Error};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let result = match args.as_slice() {
        [_, input, output] => run_files(input, output),
        _ => {
            let program = args.first().map(String::as_str).unwrap_or("prim_mst");
            Err(Error::Usage(format!("usage: {} <input_file> <output_file>", program)))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("run failed: {:?}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
