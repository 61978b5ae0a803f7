mod latency;
mod logs;
mod metrics;
mod shutdown;

pub use self::latency::MockLatency;
pub use self::logs::init_logger;
pub use self::metrics::{GateOutcome, Metrics, Operation, Status};
pub use self::shutdown::shutdown_signal;
