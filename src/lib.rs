pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::FileConfig;

pub use app::{context::AppContext, form::FormInput, surface::GridSurface};
pub use crate::core::listing::NameListing;
pub use domain::model::{Animal, LivingRecord, Plant, RecordKind};
pub use utils::error::{Result, VivariumError};
