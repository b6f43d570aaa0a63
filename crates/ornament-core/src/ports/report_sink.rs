//! ReportSink port - wrapper が出す 1 行レポートの出力先
//!
//! # 実装
//! - **StdoutSink**: 1 レポート 1 行で標準出力へ
//! - **TracingSink**: `tracing` のイベントとして記録
//! - **MemorySink**: 文字列として溜める（テスト用）

use std::fmt;
use std::time::Duration;

use parking_lot::Mutex;

/// A line emitted by the timing and debug wrappers.
///
/// `Display` renders the exact report text:
/// - `Finished '<name>' in <secs> secs` (4 decimals)
/// - `Calling <name>(<signature>)`
/// - `'<name>' returned <value_repr>`
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Finished { name: String, elapsed: Duration },
    Calling { name: String, signature: String },
    Returned { name: String, value: String },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Finished { name, elapsed } => {
                write!(f, "Finished '{name}' in {:.4} secs", elapsed.as_secs_f64())
            }
            Report::Calling { name, signature } => write!(f, "Calling {name}({signature})"),
            Report::Returned { name, value } => write!(f, "'{name}' returned {value}"),
        }
    }
}

pub trait ReportSink: Send + Sync {
    fn emit(&self, report: &Report);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&self, report: &Report) {
        println!("{report}");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn emit(&self, report: &Report) {
        tracing::info!(target: "ornament::report", "{report}");
    }
}

#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, report: &Report) {
        self.lines.lock().push(report.to_string());
    }
}
