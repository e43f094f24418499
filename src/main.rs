use std::env;

use clap::Parser;
use log::LevelFilter;

use conn_guard::cli::Args;
use conn_guard::config::ConfigFile;
use conn_guard::guard::ConnectionGuard;
use conn_guard::pg::PgConnection;

fn init_logs() {
    let mut logger = env_logger::builder();
    logger.format_file(true).format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logs();
    let args = Args::parse();
    let config = ConfigFile::resolve(args.config.as_ref())?;

    let mut guard = ConnectionGuard::new(PgConnection::new(config.database.to_pg_config()?));
    config.guard.apply(&mut guard)?;
    let timeout = guard.command_timeout_duration();
    guard.handle_mut().set_statement_timeout(timeout);

    let result = args.command.run(&mut guard, args.format);
    guard.dispose();

    println!("{}", result?);
    Ok(())
}
