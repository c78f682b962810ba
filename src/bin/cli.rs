// src/bin/cli.rs
use catfacts_last_page::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = cli::run() {
        let code = cli::report_failure(&e, &mut std::io::stderr().lock());
        std::process::exit(code);
    }
    Ok(())
}
