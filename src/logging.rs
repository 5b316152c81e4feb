//! Debug-build logging.
//!
//! The playground owns the terminal, so records go to a file in the temp
//! directory instead of stderr. Release builds install no logger and every
//! `log` macro compiles down to a level check.

#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::OpenOptions;
    use std::io::Write;

    let path = std::env::temp_dir().join("mentions.log");
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::new().filter_or("MENTIONS_LOG", "debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
