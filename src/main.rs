use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

fn main() {
    if let Err(err) = TermLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialise logger: {err}");
    }

    let config = pixelify::Config::default();
    let result = std::env::current_dir()
        .map_err(pixelify::Error::from)
        .and_then(|dir| pixelify::run(&config, &dir, &mut rand::thread_rng()));

    match result {
        Ok(path) => log::info!("done: {}", path.display()),
        Err(err) => {
            if err.is_no_existing_outputs() {
                log::error!("{err} (add an empty export_0.png to start numbering)");
            } else {
                log::error!("{err}");
            }
            std::process::exit(1);
        }
    }
}
