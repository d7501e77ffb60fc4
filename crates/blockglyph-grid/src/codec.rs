use std::error::Error;
use std::fmt;

use blockglyph_blocks::{BlockType, UnknownDisplayCharacter};

use crate::config::{GridConfig, UnknownPolicy};
use crate::grid::Grid;

/// Parse failures. Layer, row and column numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    Empty,
    UnknownCharacter {
        layer: usize,
        row: usize,
        column: usize,
        source: UnknownDisplayCharacter,
    },
    RaggedRow {
        layer: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
    RaggedLayer {
        layer: usize,
        expected: usize,
        found: usize,
    },
    // `cells` is `None` when the volume overflows `usize`.
    TooLarge {
        size: (usize, usize, usize),
        cells: Option<usize>,
        limit: usize,
    },
    // Rendering more than one layer needs a separator to keep them apart.
    LayersNeedSeparator {
        layers: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid text contains no blocks"),
            Self::UnknownCharacter {
                layer,
                row,
                column,
                source,
            } => write!(f, "layer {layer}, row {row}, column {column}: {source}"),
            Self::RaggedRow {
                layer,
                row,
                expected,
                found,
            } => write!(
                f,
                "layer {layer}, row {row}: expected {expected} columns, found {found}"
            ),
            Self::RaggedLayer {
                layer,
                expected,
                found,
            } => write!(f, "layer {layer}: expected {expected} rows, found {found}"),
            Self::TooLarge {
                size: (sx, sy, sz),
                cells,
                limit,
            } => match cells {
                Some(n) => write!(
                    f,
                    "grid {sx}x{sy}x{sz} has {n} cells, more than the limit of {limit}"
                ),
                None => write!(f, "grid {sx}x{sy}x{sz} overflows the cell count"),
            },
            Self::LayersNeedSeparator { layers } => write!(
                f,
                "cannot render {layers} layers with an empty layer separator"
            ),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownCharacter { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Grid {
    /// Reads layers bottom-up (first layer is y = 0), rows along z, columns along x.
    pub fn parse(text: &str, cfg: &GridConfig) -> Result<Grid, GridError> {
        let sep = cfg.layer_separator.as_str();
        let mut layers: Vec<Vec<Vec<BlockType>>> = Vec::new();
        let mut rows: Vec<Vec<BlockType>> = Vec::new();
        let mut substituted = 0usize;
        let mut any_line = false;

        for line in text.lines() {
            any_line = true;
            if !sep.is_empty() && line == sep {
                layers.push(std::mem::take(&mut rows));
                continue;
            }
            let layer_no = layers.len() + 1;
            let row_no = rows.len() + 1;
            let mut row = Vec::with_capacity(line.len());
            for (col, c) in line.chars().enumerate() {
                match BlockType::try_from(c) {
                    Ok(b) => row.push(b),
                    Err(e) => match cfg.unknown {
                        UnknownPolicy::Reject => {
                            return Err(GridError::UnknownCharacter {
                                layer: layer_no,
                                row: row_no,
                                column: col + 1,
                                source: e,
                            });
                        }
                        UnknownPolicy::Skip => {
                            log::debug!("skipping {:?} at {layer_no}:{row_no}:{}", c, col + 1);
                            substituted += 1;
                        }
                        UnknownPolicy::Replace(b) => {
                            log::debug!(
                                "replacing {:?} at {layer_no}:{row_no}:{} with {b}",
                                c,
                                col + 1
                            );
                            substituted += 1;
                            row.push(b);
                        }
                    },
                }
            }
            rows.push(row);
        }

        if !any_line {
            return Err(GridError::Empty);
        }
        layers.push(rows);
        let width = layers.iter().flatten().map(Vec::len).max().unwrap_or(0);
        let depth = layers.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }
        if !cfg.pad_short_rows {
            for (li, rows) in layers.iter().enumerate() {
                if rows.len() != depth {
                    return Err(GridError::RaggedLayer {
                        layer: li + 1,
                        expected: depth,
                        found: rows.len(),
                    });
                }
                for (ri, row) in rows.iter().enumerate() {
                    if row.len() != width {
                        return Err(GridError::RaggedRow {
                            layer: li + 1,
                            row: ri + 1,
                            expected: width,
                            found: row.len(),
                        });
                    }
                }
            }
        }
        let height = layers.len();
        match Grid::volume(width, height, depth) {
            Some(n) if n <= cfg.max_cells => {}
            cells => {
                return Err(GridError::TooLarge {
                    size: (width, height, depth),
                    cells,
                    limit: cfg.max_cells,
                });
            }
        }
        if substituted > 0 {
            log::warn!(
                "{} unknown character(s) handled by policy {:?}",
                substituted,
                cfg.unknown
            );
        }

        let mut grid = Grid::new(width, height, depth);
        for (y, rows) in layers.iter().enumerate() {
            for (z, row) in rows.iter().enumerate() {
                for (x, &b) in row.iter().enumerate() {
                    grid.set(x, y, z, b);
                }
            }
        }
        log::debug!("parsed grid {}x{}x{}", width, height, depth);
        Ok(grid)
    }

    /// Inverse of [`Grid::parse`]. Every row, including the last, ends in `\n`.
    ///
    /// An empty separator only round-trips a single layer, so taller grids are refused.
    pub fn render(&self, cfg: &GridConfig) -> Result<String, GridError> {
        let sep = cfg.layer_separator.as_str();
        if sep.is_empty() && self.size_y > 1 {
            return Err(GridError::LayersNeedSeparator {
                layers: self.size_y,
            });
        }
        let mut out =
            String::with_capacity(self.blocks.len() + self.size_y * (self.size_z + sep.len() + 1));
        for y in 0..self.size_y {
            if y > 0 {
                out.push_str(sep);
                out.push('\n');
            }
            for row in self.layer(y) {
                let start = out.len();
                out.extend(row.iter().map(|b| b.display()));
                if cfg.trim_trailing_air {
                    let kept = out[start..].trim_end_matches(BlockType::Air.display()).len();
                    out.truncate(start + kept);
                }
                out.push('\n');
            }
        }
        Ok(out)
    }
}
