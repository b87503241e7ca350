use console::Session;
use env_logger::Env;
use log::info;
use std::io;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("warn")
    ).init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(stdin.lock(), stdout.lock());

    session.run()?;

    info!("roster discarded: {} players", session.roster().count());

    Ok(())
}
