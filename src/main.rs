mod cli;
mod gui;
mod lang;
mod media;
mod prelude;
mod resource;

use crate::prelude::{app_dir, CONFIG_DIR, VERSION};

/// The logger handle must be retained until the application closes.
/// https://docs.rs/flexi_logger/0.29.8/flexi_logger/error_info/index.html#write
fn prepare_logging() -> Result<flexi_logger::LoggerHandle, flexi_logger::FlexiLoggerError> {
    flexi_logger::Logger::try_with_env_or_str("punah=warn")?
        .log_to_file(flexi_logger::FileSpec::default().directory(app_dir()))
        .write_mode(flexi_logger::WriteMode::BufferAndFlush)
        .rotate(
            flexi_logger::Criterion::Size(1024 * 1024 * 10),
            flexi_logger::Naming::Timestamps,
            flexi_logger::Cleanup::KeepLogFiles(4),
        )
        .use_utc()
        .format_for_files(|w, now, record| {
            write!(
                w,
                "[{}] {} [{}] {}",
                now.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                record.level(),
                record.module_path().unwrap_or("<unnamed>"),
                &record.args(),
            )
        })
        .start()
}

fn main() {
    let mut failed = false;
    let args = cli::parse();

    if let Some(config_dir) = args.config.as_deref() {
        *CONFIG_DIR.lock().unwrap() = Some(config_dir.to_path_buf());
    }

    let logger = prepare_logging();
    if let Err(e) = &logger {
        eprintln!("Failed to initialize logging: {e:?}");
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("Panic: {info}");
        default_hook(info);
    }));

    log::debug!("Version: {}", *VERSION);
    log::debug!("Invocation: {:?}", std::env::args());

    match args.sub {
        None => {
            let flags = gui::Flags {
                sources: cli::parse_sources(args.sources, args.mime),
            };
            gui::run(flags);
        }
        Some(sub) => {
            if let Err(e) = cli::run(sub) {
                eprintln!("{}", lang::handle_error(&e));
                failed = true;
            }
        }
    };

    if let Ok(logger) = logger {
        logger.flush();
    }

    if failed {
        std::process::exit(1);
    }
}
