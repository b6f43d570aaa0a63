//! Ports - 外部への出力と時刻の抽象化
//!
//! wrapper は標準出力や時計に直接触らず、ここの trait 経由で使います。
//! テストでは MemorySink / ManualClock に差し替えます。

pub mod clock;
pub mod report_sink;

pub use self::clock::{Clock, ManualClock, SystemClock};
pub use self::report_sink::{MemorySink, Report, ReportSink, StdoutSink, TracingSink};
