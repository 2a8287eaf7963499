use logtee::{Level, Logger};
use std::io::Write;

fn main() {
    let mut logger = Logger::new();
    logger.configure("logs/app.log", Level::Info);

    logger.info("this is an informational message");
    logger.warn("this is a warning message");
    logger.error("this is an error message");

    if let Some(mut out) = logger.capture_writer() {
        writeln!(out, "this line goes through the capture writer").unwrap();
    }

    logger.flush();
}
