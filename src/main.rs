use std::io::{self, Write};
use std::process::ExitCode;

use shoe_stand::{Logger, Result, StandConfig, sample_items};

fn run() -> Result<()> {
    let config = StandConfig::default();
    let mut stand = config.build_stand(Logger::stderr())?;
    let renderer = config.build_renderer();
    let mut stdout = io::stdout().lock();

    renderer.render_to(&mut stdout, &stand)?;

    for item in sample_items() {
        if stand.is_full() {
            break;
        }
        stand.place(item);
    }

    renderer.render_to(&mut stdout, &stand)?;
    stdout.flush()?;
    stand.log_metrics();
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shoe-stand: {err}");
            ExitCode::FAILURE
        }
    }
}
