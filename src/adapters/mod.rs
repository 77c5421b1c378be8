//! Adapters: file and console implementations of the port traits.

pub mod log_sink;
pub mod speed_log;
pub mod trace_reader;

pub use log_sink::LogEventSink;
pub use speed_log::SpeedLog;
pub use trace_reader::TraceReader;
