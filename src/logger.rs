use super::*;

use std::sync::Mutex;
use log::{Log, Record, Metadata, SetLoggerError, LevelFilter};

// Only records from the library and this binary are shown.
const TARGETS: &[&str] = &["wasm_assembler", "wasm_asm"];

struct StderrLogger {
    stderr: Mutex<io::Stderr>,
}

lazy_static! {
    static ref LOGGER: StderrLogger = StderrLogger {
        stderr: Mutex::new(io::stderr()),
    };
}

fn wanted(target: &str) -> bool {
    TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        wanted(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !wanted(record.target()) {
            return;
        }

        let mut stderr = unwrap!(self.stderr.lock());
        let _ = writeln!(stderr, "{} - {}", record.level(), record.args());
    }

    fn flush(&self) {
        let mut stderr = unwrap!(self.stderr.lock());
        let _ = stderr.flush();
    }
}

pub fn init(verbosity: u64) -> Result<(), SetLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    log::set_logger(&*LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
