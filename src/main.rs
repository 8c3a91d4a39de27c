use argh::FromArgs;
use package_express::io_adapters::EditorInput;
use package_express::{logger, report_error, run_session};
use std::io::Write;

#[derive(FromArgs)]
/// Estimate the cost of shipping one package with Package Express.
struct Args {
    #[argh(switch, short = 'v')]
    /// write diagnostic logs to standard error.
    verbose: bool,

    #[argh(switch)]
    /// print the version and exit.
    version: bool,
}

fn main() {
    let args: Args = argh::from_env();
    logger::init(args.verbose);

    let mut stdout = std::io::stdout().lock();
    if args.version {
        if let Err(e) = writeln!(stdout, "package-express {}", env!("CARGO_PKG_VERSION")) {
            tracing::error!("could not print version: {}", e);
        }
        return;
    }

    let mut input = EditorInput::new();
    match run_session(&mut input, &mut stdout) {
        Ok(outcome) => tracing::debug!(?outcome, "session finished"),
        Err(e) => report_error(&mut stdout, &e),
    }
}
