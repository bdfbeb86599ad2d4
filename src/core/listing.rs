use crate::domain::model::LivingRecord;
use crate::domain::ports::{Cell, DisplaySurface, SurfaceHandle};

/// Grid row the listing header occupies; entries start on the next row.
pub const HEADER_ROW: u16 = 8;

/// Entries per column before the listing wraps to the next column.
pub const ROWS_PER_COLUMN: usize = 5;

const HEADER_TEXT: &str = "Living Record Names";
const HEADER_SPAN: u16 = 5;

/// Renders record names onto a display surface in sorted, paginated columns.
///
/// The renderer owns the handles of everything it placed and removes them
/// before each render, so rendering is idempotent: calling `render` twice
/// with the same collection leaves the surface exactly as one call would.
#[derive(Debug, Default)]
pub struct NameListing {
    handles: Vec<SurfaceHandle>,
}

impl NameListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// (row, column) slot for the entry at sorted index `idx`.
    fn slot(idx: usize) -> (u16, u16) {
        let column = (idx / ROWS_PER_COLUMN) as u16;
        let row = HEADER_ROW + 1 + (idx % ROWS_PER_COLUMN) as u16;
        (row, column)
    }

    /// Removes every element from the previous render.
    pub fn clear(&mut self, surface: &mut dyn DisplaySurface) {
        for handle in self.handles.drain(..) {
            surface.remove(handle);
        }
    }

    /// Clears the previous render, then places the header and one entry per
    /// record, sorted case-insensitively by name. All records are placed
    /// eagerly regardless of count.
    pub fn render(&mut self, records: &[LivingRecord], surface: &mut dyn DisplaySurface) {
        self.clear(surface);

        let mut sorted: Vec<&LivingRecord> = records.iter().collect();
        sorted.sort_by_key(|r| r.name().to_lowercase());

        self.handles.push(surface.place(Cell::spanning(
            HEADER_TEXT,
            HEADER_ROW,
            0,
            HEADER_SPAN,
        )));

        for (idx, record) in sorted.iter().enumerate() {
            let text = format!("{} : {}", record.kind().label(), record.name());
            let (row, column) = Self::slot(idx);
            self.handles.push(surface.place(Cell::new(text, row, column)));
        }

        tracing::debug!("Rendered {} listing entries", sorted.len());
    }

    /// Number of elements currently placed by this renderer (header included).
    pub fn placed_count(&self) -> usize {
        self.handles.len()
    }
}
