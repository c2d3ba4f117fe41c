use retrosnake::Options;

fn main() {
    env_logger::init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{:#}", err);
            eprintln!("Usage: retrosnake [seed] [uniform|avoid-obstacles|avoid-occupied]");
            std::process::exit(1);
        }
    };

    match options.seed {
        Some(seed) => log::info!("Playing with seed {}", seed),
        None => log::info!("Playing with a random seed"),
    }

    if let Err(err) = retrosnake::run(&options) {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}
