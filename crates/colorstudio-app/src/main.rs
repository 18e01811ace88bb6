//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    use colorstudio_app::SystemClipboard;
    use colorstudio_app::cli::{self, Args, CONFIG_ENV};

    env_logger::init();
    log::info!("Starting ColorStudio");

    let result = (|| -> cli::CliResult<()> {
        let args = Args::parse(std::env::args().skip(1))?;
        let config_path = std::env::var_os(CONFIG_ENV).map(std::path::PathBuf::from);
        let config = cli::load_config(config_path.as_deref())?;

        let (mut studio, readout) = cli::sample_file(&args, config)?;
        println!("{}", cli::format_readout(&readout));

        if let Some(format) = args.copy {
            let text = studio.copy(format, &mut SystemClipboard)?;
            println!("copied: {}", text);
        }
        Ok(())
    })();

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
