//! Toroidal multi-occupancy grid.
//!
//! # Data layout
//!
//! Cells are stored dense and row-major: the contents of `(x, y)` live in
//! `cells[y * width + x]`.  Each cell holds a `Vec<AgentId>` in arrival
//! order — station processing iterates co-located agents in exactly this
//! order, so removal must not reorder the remaining occupants.
//!
//! A parallel `positions` table, indexed by `AgentId`, maps each placed
//! agent back to its current cell, making `move_agent` O(cell occupancy)
//! instead of a full-grid scan.
//!
//! The grid holds IDs only; agent state lives with the model.

use bikeshare_core::{AgentId, GridPos};

use crate::error::{GridError, GridResult};

/// A `width` × `height` toroidal grid whose cells hold zero or more agents.
///
/// All coordinates entering the public API are wrap-normalized first, so any
/// `GridPos` is addressable; queries never fail on out-of-range input.
pub struct MultiGrid {
    width:  u32,
    height: u32,
    /// Cell contents in row-major order, arrival-ordered within each cell.
    cells: Vec<Vec<AgentId>>,
    /// Current cell of each agent, indexed by `AgentId`.  `None` until placed.
    positions: Vec<Option<GridPos>>,
}

impl MultiGrid {
    /// Construct an empty grid.  Dimensions must be positive; the model
    /// builder validates its configuration before constructing one.
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![Vec::new(); width as usize * height as usize],
            positions: Vec::new(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of agents currently placed on the grid.
    pub fn placed_count(&self) -> usize {
        self.positions.iter().flatten().count()
    }

    // ── Coordinate normalization ──────────────────────────────────────────

    /// Reduce a coordinate modulo the grid dimensions.
    #[inline]
    pub fn wrap(&self, pos: GridPos) -> GridPos {
        GridPos::new(pos.x % self.width, pos.y % self.height)
    }

    /// `wrap()` already reduced the coordinate, so a hit here means the
    /// coordinate arithmetic itself is defective.  Fatal, never retried.
    fn ensure_in_bounds(&self, pos: GridPos) -> GridResult<()> {
        if pos.x >= self.width || pos.y >= self.height {
            return Err(GridError::OutOfBounds {
                pos,
                width:  self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[inline]
    fn cell_index(&self, pos: GridPos) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    // ── Placement and movement ────────────────────────────────────────────

    /// Put a never-placed agent onto the cell at `pos` (wrapped).
    ///
    /// Returns the normalized position the agent actually landed on.
    pub fn place(&mut self, agent: AgentId, pos: GridPos) -> GridResult<GridPos> {
        let target = self.wrap(pos);
        self.ensure_in_bounds(target)?;

        if self.position(agent).is_some() {
            return Err(GridError::AlreadyPlaced(agent));
        }
        if self.positions.len() <= agent.index() {
            self.positions.resize(agent.index() + 1, None);
        }

        let idx = self.cell_index(target);
        self.cells[idx].push(agent);
        self.positions[agent.index()] = Some(target);
        Ok(target)
    }

    /// Move a placed agent to the cell at `new_pos` (wrapped).
    ///
    /// The agent leaves its old cell without disturbing the arrival order of
    /// the remaining occupants and is appended to the target cell.
    pub fn move_agent(&mut self, agent: AgentId, new_pos: GridPos) -> GridResult<GridPos> {
        let target = self.wrap(new_pos);
        self.ensure_in_bounds(target)?;

        let old = self.position(agent).ok_or(GridError::NotPlaced(agent))?;

        let from = self.cell_index(old);
        let slot = self.cells[from].iter().position(|&a| a == agent);
        debug_assert!(slot.is_some(), "position table out of sync with cell contents");
        if let Some(slot) = slot {
            self.cells[from].remove(slot);
        }

        let to = self.cell_index(target);
        self.cells[to].push(agent);
        self.positions[agent.index()] = Some(target);
        Ok(target)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The agents occupying the cell at `pos` (wrapped), in arrival order.
    pub fn contents_at(&self, pos: GridPos) -> &[AgentId] {
        let idx = self.cell_index(self.wrap(pos));
        &self.cells[idx]
    }

    /// The current cell of `agent`, or `None` if it was never placed.
    pub fn position(&self, agent: AgentId) -> Option<GridPos> {
        self.positions.get(agent.index()).copied().flatten()
    }

    /// The Moore neighborhood of `pos` (wrapped): the up-to-eight adjacent
    /// cells, plus the cell itself when `include_center` is set.
    ///
    /// Wrapped offsets collide on grids narrower than three cells in either
    /// dimension; only the first occurrence of each cell is kept.  Offsets
    /// that wrap back onto the origin cell count as the center, so a 1×1
    /// grid without `include_center` yields an empty neighborhood.
    pub fn neighborhood(&self, pos: GridPos, include_center: bool) -> Vec<GridPos> {
        let center = self.wrap(pos);
        let mut cells: Vec<GridPos> = Vec::with_capacity(9);
        for dx in -1..=1i64 {
            for dy in -1..=1i64 {
                if dx == 0 && dy == 0 && !include_center {
                    continue;
                }
                let cell = center.wrapping_offset(dx, dy, self.width, self.height);
                if cell == center && !include_center {
                    continue;
                }
                if !cells.contains(&cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }
}
