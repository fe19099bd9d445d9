pub mod config;
pub mod errors;
pub mod models;

pub use config::{AppConfig, LogConfig, OutputConfig, OutputFormat};
pub use errors::{CronError, CronResult};
pub use models::{CronExpression, CronField, CronSchedule, ExpressionKind, FieldDefinition};
