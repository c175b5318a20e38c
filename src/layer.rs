use crate::spatial::TileCode;

/// One grid of tile codes, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u32>,
}

impl TileLayer {
    pub fn new(name: impl Into<String>, width: u32, height: u32, data: Vec<u32>) -> Self {
        TileLayer {
            name: name.into(),
            width,
            height,
            data,
        }
    }

    /// Non-empty cells as `(column, row, code)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, TileCode)> + '_ {
        let width = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .filter(|(_, code)| **code != 0)
            .map(move |(idx, code)| {
                let idx = idx as u32;
                (idx % width, idx / width, TileCode(*code))
            })
    }
}
