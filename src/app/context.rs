use crate::app::form::FormInput;
use crate::core::listing::NameListing;
use crate::core::report;
use crate::domain::model::LivingRecord;
use crate::domain::ports::{Cell, ConfigProvider, DisplaySurface, SurfaceHandle};
use crate::utils::error::Result;

const HINT_TEXT: &str = "Toggle the listing to see the name of each living record.";
const HINT_ROW: u16 = 7;
const HINT_SPAN: u16 = 3;

/// Top-level application context: the single owner of the record collection
/// and of the listing state. All mutation goes through it, on one thread.
pub struct AppContext<C: ConfigProvider> {
    config: C,
    records: Vec<LivingRecord>,
    listing: NameListing,
    listing_active: bool,
    hint_handle: Option<SurfaceHandle>,
}

impl<C: ConfigProvider> AppContext<C> {
    pub fn new(config: C) -> Self {
        Self::with_records(config, Vec::new())
    }

    pub fn with_records(config: C, records: Vec<LivingRecord>) -> Self {
        Self {
            config,
            records,
            listing: NameListing::new(),
            listing_active: false,
            hint_handle: None,
        }
    }

    pub fn records(&self) -> &[LivingRecord] {
        &self.records
    }

    pub fn listing_active(&self) -> bool {
        self.listing_active
    }

    /// Places the informational hint shown while the listing is inactive.
    pub fn show_hint(&mut self, surface: &mut dyn DisplaySurface) {
        if self.hint_handle.is_none() {
            self.hint_handle =
                Some(surface.place(Cell::spanning(HINT_TEXT, HINT_ROW, 0, HINT_SPAN)));
        }
    }

    /// Creation workflow: validate and construct the record, append it,
    /// rewrite the report over the full collection, and re-render the
    /// listing if it is the active display mode. On a validation error
    /// nothing is mutated and nothing is written.
    pub fn create_record(
        &mut self,
        form: FormInput,
        surface: &mut dyn DisplaySurface,
    ) -> Result<()> {
        let record = form.into_record()?;
        tracing::info!("Created {} record '{}'", record.kind(), record.name());
        self.records.push(record);

        report::write_report(&self.records, self.config.report_path())?;

        if self.listing_active {
            self.listing.render(&self.records, surface);
        }
        Ok(())
    }

    /// Switches between the hint and the name listing. Returns the new
    /// listing state.
    pub fn toggle_listing(&mut self, surface: &mut dyn DisplaySurface) -> bool {
        if self.listing_active {
            self.listing.clear(surface);
            self.show_hint(surface);
        } else {
            if let Some(handle) = self.hint_handle.take() {
                surface.remove(handle);
            }
            self.listing.render(&self.records, surface);
        }
        self.listing_active = !self.listing_active;
        self.listing_active
    }

    /// Rewrites the report over the current collection.
    pub fn save_report(&self) -> Result<()> {
        report::write_report(&self.records, self.config.report_path())
    }

    /// One feeding description per record, in collection order.
    pub fn feeding_summary(&self) -> Vec<String> {
        self.records.iter().map(LivingRecord::describe_feeding).collect()
    }

    /// The full collection as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.records)?;
        Ok(json)
    }
}
