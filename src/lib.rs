pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::TemplateFile;

pub use core::copy::CopyService;
pub use core::debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use core::delivery::{estimate_delivery, PROMPT_MILES};
pub use core::pay_rate::{compute_pay_rate, PROMPT_PAY_AND_MILES};
pub use core::status::StatusController;
pub use core::sync::sync_mileage;
pub use core::template::TemplateEngine;
pub use domain::model::{
    CopyMethod, CustomerFields, DeliveryEstimate, PayFields, StatusKind, SyncOutcome, TemplateSet,
};
pub use domain::ports::{Clipboard, StatusSink};
pub use utils::error::{Result, ToolError};
