use std::collections::HashSet;
use std::str::SplitWhitespace;

use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{Cell, Grid};

/// A fully parsed flight scenario: the rooftop grid plus battery rules.
///
/// Constructed once from input and read-only thereafter.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: Grid,
    /// Maximum battery charge `B`. The drone launches full.
    pub battery_capacity: u64,
    /// Charge restored on arrival at a station, capped at `battery_capacity`.
    pub charge_amount: u64,
    /// Zero-indexed cells that recharge the drone on every arrival.
    pub stations: HashSet<Cell>,
}

impl Scenario {
    /// Parse the whitespace-delimited scenario grammar:
    ///
    /// ```text
    /// N M B K
    /// <N rows of M non-negative elevations>
    /// S
    /// <S lines: r c>   (1-indexed station coordinates)
    /// ```
    ///
    /// Fails fast on truncated input, non-numeric tokens, zero dimensions,
    /// out-of-range stations, or trailing tokens. Duplicate stations collapse
    /// to one entry.
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = Tokens::new(input);

        let rows = tokens.next_usize("grid rows (N)")?;
        let cols = tokens.next_usize("grid columns (M)")?;
        let battery_capacity = tokens.next_u64("battery capacity (B)")?;
        let charge_amount = tokens.next_u64("charge amount (K)")?;

        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid { rows, cols });
        }
        let cell_count = rows
            .checked_mul(cols)
            .ok_or(Error::OversizedGrid { rows, cols })?;

        let mut elevations = Vec::with_capacity(cell_count);
        for _ in 0..cell_count {
            elevations.push(tokens.next_u64("rooftop elevation")?);
        }
        let grid = Grid::new(rows, cols, elevations)?;

        let station_count = tokens.next_usize("station count (S)")?;
        let mut stations = HashSet::with_capacity(station_count.min(cell_count));
        for _ in 0..station_count {
            let row = tokens.next_u64("station row")?;
            let col = tokens.next_u64("station column")?;
            if row == 0 || row > rows as u64 || col == 0 || col > cols as u64 {
                return Err(Error::StationOutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                });
            }
            stations.insert((row as usize - 1, col as usize - 1));
        }

        if tokens.has_remaining() {
            return Err(Error::TrailingInput);
        }

        debug!(
            "parsed {}x{} scenario (B={}, K={}, {} charging stations)",
            rows,
            cols,
            battery_capacity,
            charge_amount,
            stations.len()
        );

        Ok(Self {
            grid,
            battery_capacity,
            charge_amount,
            stations,
        })
    }

    /// Whether `cell` recharges the drone on arrival.
    pub fn is_station(&self, cell: Cell) -> bool {
        self.stations.contains(&cell)
    }
}

/// Cursor over the whitespace-delimited token stream.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
        }
    }

    fn next_u64(&mut self, field: &'static str) -> Result<u64> {
        let token = self.inner.next().ok_or(Error::TruncatedInput { field })?;
        token.parse().map_err(|_| Error::InvalidToken {
            field,
            token: token.to_string(),
        })
    }

    fn next_usize(&mut self, field: &'static str) -> Result<usize> {
        let token = self.inner.next().ok_or(Error::TruncatedInput { field })?;
        token.parse().map_err(|_| Error::InvalidToken {
            field,
            token: token.to_string(),
        })
    }

    fn has_remaining(&mut self) -> bool {
        self.inner.next().is_some()
    }
}
