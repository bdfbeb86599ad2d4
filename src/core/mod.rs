pub mod listing;
pub mod report;

pub use crate::domain::model::{Animal, LivingRecord, Plant, RecordKind};
pub use crate::domain::ports::{Cell, ConfigProvider, DisplaySurface, SurfaceHandle};
pub use crate::utils::error::Result;
