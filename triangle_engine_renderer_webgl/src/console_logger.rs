/// Logger writing to the browser console

use triangle_engine::triangle::log::{LogEntry, LogSeverity, Logger};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Routes each severity to the matching `console.*` method
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, entry: &LogEntry) {
        let line = JsValue::from_str(&entry.to_plain_string());
        match entry.severity {
            LogSeverity::Trace | LogSeverity::Debug => console::debug_1(&line),
            LogSeverity::Info => console::info_1(&line),
            LogSeverity::Warn => console::warn_1(&line),
            LogSeverity::Error => console::error_1(&line),
        }
    }
}
