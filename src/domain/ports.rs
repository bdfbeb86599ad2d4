// Ports (interfaces) between the core logic and its collaborators: the
// configuration source and the windowing layer the listing is drawn onto.

pub trait ConfigProvider {
    fn report_path(&self) -> &str;
    fn verbose(&self) -> bool;
}

/// Opaque identifier for an element placed on a display surface. The
/// renderer keeps the handles it received and removes exactly those on the
/// next render, so repeated renders never duplicate or leak elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceHandle(pub u64);

/// One grid-positioned text element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub row: u16,
    pub column: u16,
    pub column_span: u16,
}

impl Cell {
    pub fn new(text: impl Into<String>, row: u16, column: u16) -> Self {
        Self {
            text: text.into(),
            row,
            column,
            column_span: 1,
        }
    }

    pub fn spanning(text: impl Into<String>, row: u16, column: u16, column_span: u16) -> Self {
        Self {
            text: text.into(),
            row,
            column,
            column_span,
        }
    }
}

/// A grid-positionable container. The core only needs to place elements at
/// (row, column) coordinates and remove elements it placed earlier.
pub trait DisplaySurface {
    fn place(&mut self, cell: Cell) -> SurfaceHandle;

    /// Removing an unknown handle is a no-op.
    fn remove(&mut self, handle: SurfaceHandle);
}
