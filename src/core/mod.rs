pub mod copy;
pub mod debounce;
pub mod delivery;
pub mod pay_rate;
pub mod status;
pub mod sync;
pub mod template;

pub use crate::domain::model::{
    CopyMethod, CustomerFields, DeliveryEstimate, PayFields, StatusKind, SyncOutcome, TemplateSet,
};
pub use crate::domain::ports::{Clipboard, StatusSink};
pub use crate::utils::error::Result;
