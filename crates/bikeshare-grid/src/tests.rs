//! Unit tests for bikeshare-grid.

#[cfg(test)]
mod helpers {
    use crate::MultiGrid;

    /// The default downtown-scale grid used throughout these tests.
    pub fn grid10() -> MultiGrid {
        MultiGrid::new(10, 10)
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod placement {
    use bikeshare_core::{AgentId, GridPos};

    use crate::{GridError, MultiGrid};

    use super::helpers::grid10;

    #[test]
    fn place_and_query() {
        let mut g = grid10();
        let landed = g.place(AgentId(0), GridPos::new(3, 4)).unwrap();
        assert_eq!(landed, GridPos::new(3, 4));
        assert_eq!(g.position(AgentId(0)), Some(GridPos::new(3, 4)));
        assert_eq!(g.contents_at(GridPos::new(3, 4)), &[AgentId(0)]);
        assert_eq!(g.placed_count(), 1);
    }

    #[test]
    fn place_wraps_out_of_range_input() {
        let mut g = grid10();
        let landed = g.place(AgentId(0), GridPos::new(13, 24)).unwrap();
        assert_eq!(landed, GridPos::new(3, 4));
    }

    #[test]
    fn multiple_agents_share_a_cell_in_arrival_order() {
        let mut g = grid10();
        g.place(AgentId(2), GridPos::new(5, 5)).unwrap();
        g.place(AgentId(0), GridPos::new(5, 5)).unwrap();
        g.place(AgentId(1), GridPos::new(5, 5)).unwrap();
        assert_eq!(
            g.contents_at(GridPos::new(5, 5)),
            &[AgentId(2), AgentId(0), AgentId(1)]
        );
    }

    #[test]
    fn double_place_rejected() {
        let mut g = grid10();
        g.place(AgentId(0), GridPos::new(0, 0)).unwrap();
        assert!(matches!(
            g.place(AgentId(0), GridPos::new(1, 1)),
            Err(GridError::AlreadyPlaced(AgentId(0)))
        ));
    }

    #[test]
    fn sparse_ids_supported() {
        // The position table grows to fit whatever IDs the model assigns.
        let mut g = MultiGrid::new(4, 4);
        g.place(AgentId(17), GridPos::new(1, 1)).unwrap();
        assert_eq!(g.position(AgentId(17)), Some(GridPos::new(1, 1)));
        assert_eq!(g.position(AgentId(3)), None);
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use bikeshare_core::{AgentId, GridPos};

    use crate::GridError;

    use super::helpers::grid10;

    #[test]
    fn move_updates_both_cells() {
        let mut g = grid10();
        g.place(AgentId(0), GridPos::new(2, 2)).unwrap();
        g.move_agent(AgentId(0), GridPos::new(2, 3)).unwrap();
        assert!(g.contents_at(GridPos::new(2, 2)).is_empty());
        assert_eq!(g.contents_at(GridPos::new(2, 3)), &[AgentId(0)]);
        assert_eq!(g.position(AgentId(0)), Some(GridPos::new(2, 3)));
    }

    #[test]
    fn move_preserves_remaining_arrival_order() {
        let mut g = grid10();
        for id in [AgentId(0), AgentId(1), AgentId(2), AgentId(3)] {
            g.place(id, GridPos::new(7, 7)).unwrap();
        }
        g.move_agent(AgentId(1), GridPos::new(0, 0)).unwrap();
        assert_eq!(
            g.contents_at(GridPos::new(7, 7)),
            &[AgentId(0), AgentId(2), AgentId(3)]
        );
    }

    #[test]
    fn mover_appends_at_target() {
        let mut g = grid10();
        g.place(AgentId(0), GridPos::new(1, 1)).unwrap();
        g.place(AgentId(1), GridPos::new(0, 0)).unwrap();
        g.move_agent(AgentId(1), GridPos::new(1, 1)).unwrap();
        assert_eq!(g.contents_at(GridPos::new(1, 1)), &[AgentId(0), AgentId(1)]);
    }

    #[test]
    fn move_wraps_toroidally() {
        let mut g = grid10();
        g.place(AgentId(0), GridPos::new(9, 9)).unwrap();
        let landed = g.move_agent(AgentId(0), GridPos::new(10, 10)).unwrap();
        assert_eq!(landed, GridPos::new(0, 0));
    }

    #[test]
    fn move_unplaced_rejected() {
        let mut g = grid10();
        assert!(matches!(
            g.move_agent(AgentId(5), GridPos::new(0, 0)),
            Err(GridError::NotPlaced(AgentId(5)))
        ));
    }

    #[test]
    fn placed_count_stable_across_moves() {
        let mut g = grid10();
        g.place(AgentId(0), GridPos::new(0, 0)).unwrap();
        g.place(AgentId(1), GridPos::new(5, 5)).unwrap();
        for step in 0..20 {
            g.move_agent(AgentId(0), GridPos::new(step, step)).unwrap();
        }
        assert_eq!(g.placed_count(), 2);
    }
}

// ── Neighborhood ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod neighborhood {
    use bikeshare_core::GridPos;

    use crate::MultiGrid;

    use super::helpers::grid10;

    #[test]
    fn corner_wraps_to_eight_cells() {
        let g = grid10();
        let n = g.neighborhood(GridPos::new(0, 0), false);
        let expected = [
            GridPos::new(9, 9),
            GridPos::new(9, 0),
            GridPos::new(9, 1),
            GridPos::new(0, 9),
            GridPos::new(0, 1),
            GridPos::new(1, 9),
            GridPos::new(1, 0),
            GridPos::new(1, 1),
        ];
        assert_eq!(n, expected);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let g = grid10();
        let n = g.neighborhood(GridPos::new(5, 5), false);
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&GridPos::new(5, 5)));
        assert!(n.contains(&GridPos::new(4, 4)));
        assert!(n.contains(&GridPos::new(6, 6)));
    }

    #[test]
    fn include_center_adds_the_cell_itself() {
        let g = grid10();
        let n = g.neighborhood(GridPos::new(5, 5), true);
        assert_eq!(n.len(), 9);
        assert!(n.contains(&GridPos::new(5, 5)));
    }

    #[test]
    fn two_by_two_collapses_to_three_cells() {
        let g = MultiGrid::new(2, 2);
        let n = g.neighborhood(GridPos::new(0, 0), false);
        assert_eq!(n, [GridPos::new(1, 1), GridPos::new(1, 0), GridPos::new(0, 1)]);
    }

    #[test]
    fn one_wide_grid_excludes_the_origin_cell() {
        // Horizontal offsets all wrap back onto x = 0; only the vertical
        // neighbors remain.
        let g = MultiGrid::new(1, 3);
        let n = g.neighborhood(GridPos::new(0, 1), false);
        assert_eq!(n, [GridPos::new(0, 0), GridPos::new(0, 2)]);
    }

    #[test]
    fn single_cell_grid_is_empty_without_center() {
        let g = MultiGrid::new(1, 1);
        assert!(g.neighborhood(GridPos::new(0, 0), false).is_empty());
        assert_eq!(g.neighborhood(GridPos::new(0, 0), true), [GridPos::new(0, 0)]);
    }

    #[test]
    fn query_position_is_wrapped_first() {
        let g = grid10();
        let a = g.neighborhood(GridPos::new(10, 10), false);
        let b = g.neighborhood(GridPos::new(0, 0), false);
        assert_eq!(a, b);
    }
}
