use crate::domain::ports::{Cell, DisplaySurface, SurfaceHandle};
use std::collections::BTreeMap;

const COLUMN_WIDTH: usize = 22;

/// In-memory grid surface. Backs the terminal front end and the tests;
/// handles stay valid until removed and are never reused.
#[derive(Debug, Default)]
pub struct GridSurface {
    cells: BTreeMap<SurfaceHandle, Cell>,
    next_handle: u64,
}

impl GridSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Plain-text projection of the grid, one line per occupied row,
    /// columns padded to a fixed width. Spanning cells are written once at
    /// their starting column.
    pub fn to_text(&self) -> String {
        let mut by_position: BTreeMap<(u16, u16), &Cell> = BTreeMap::new();
        for cell in self.cells.values() {
            by_position.insert((cell.row, cell.column), cell);
        }

        let mut lines: Vec<String> = Vec::new();
        let mut current_row: Option<u16> = None;
        let mut line = String::new();
        let mut line_column = 0u16;

        for ((row, column), cell) in &by_position {
            if current_row != Some(*row) {
                if current_row.is_some() {
                    lines.push(line.trim_end().to_string());
                }
                current_row = Some(*row);
                line = String::new();
                line_column = 0;
            }
            while line_column < *column {
                line.push_str(&" ".repeat(COLUMN_WIDTH));
                line_column += 1;
            }
            if cell.column_span > 1 {
                line.push_str(&cell.text);
            } else {
                line.push_str(&format!("{:<width$}", cell.text, width = COLUMN_WIDTH));
            }
            line_column += cell.column_span.max(1);
        }
        if current_row.is_some() {
            lines.push(line.trim_end().to_string());
        }

        lines.join("\n")
    }
}

impl DisplaySurface for GridSurface {
    fn place(&mut self, cell: Cell) -> SurfaceHandle {
        let handle = SurfaceHandle(self.next_handle);
        self.next_handle += 1;
        self.cells.insert(handle, cell);
        handle
    }

    fn remove(&mut self, handle: SurfaceHandle) {
        self.cells.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_remove() {
        let mut surface = GridSurface::new();
        let a = surface.place(Cell::new("a", 0, 0));
        let b = surface.place(Cell::new("b", 0, 1));
        assert_ne!(a, b);
        assert_eq!(surface.len(), 2);

        surface.remove(a);
        assert_eq!(surface.len(), 1);

        // Unknown handles are ignored.
        surface.remove(a);
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn test_to_text_orders_by_row_then_column() {
        let mut surface = GridSurface::new();
        surface.place(Cell::new("right", 1, 1));
        surface.place(Cell::new("left", 1, 0));
        surface.place(Cell::new("top", 0, 0));

        let text = surface.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("top"));
        assert!(lines[1].starts_with("left"));
        assert!(lines[1].contains("right"));
    }
}
