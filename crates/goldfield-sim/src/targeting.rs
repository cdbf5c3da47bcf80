//! Nearest-target selection and the melee decision shared by unit attacks
//! and enemy AI. Pure functions over positions; no world access.

use hecs::Entity;

use goldfield_core::types::GridPos;

/// What an attacker does this tick against its chosen target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Engage {
    /// Target within melee range: deal damage, stay put.
    Strike { target: Entity },
    /// Target out of range: step one cell toward it.
    Advance { target: Entity, to: GridPos },
}

/// Candidate with the strictly smallest distance to `origin`.
/// Ties go to the earliest candidate in the slice.
pub fn nearest(origin: &GridPos, candidates: &[(Entity, GridPos)]) -> Option<(Entity, GridPos)> {
    let mut best: Option<(Entity, GridPos, i64)> = None;
    for &(entity, pos) in candidates {
        let dist_sq = origin.distance_sq_to(&pos);
        match best {
            Some((_, _, best_sq)) if dist_sq >= best_sq => {}
            _ => best = Some((entity, pos, dist_sq)),
        }
    }
    best.map(|(entity, pos, _)| (entity, pos))
}

/// Strike when `target_pos` is within `range` of `origin`, otherwise advance.
pub fn resolve(origin: &GridPos, target: Entity, target_pos: &GridPos, range: f64) -> Engage {
    if origin.distance_to(target_pos) <= range {
        Engage::Strike { target }
    } else {
        let mut to = *origin;
        to.step_toward(target_pos);
        Engage::Advance { target, to }
    }
}

/// Pick the nearest candidate and resolve against it. `None` when there are
/// no candidates.
pub fn engage_nearest(
    origin: &GridPos,
    candidates: &[(Entity, GridPos)],
    range: f64,
) -> Option<Engage> {
    let (target, target_pos) = nearest(origin, candidates)?;
    Some(resolve(origin, target, &target_pos, range))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(n: usize) -> Vec<Entity> {
        let mut world = hecs::World::new();
        (0..n).map(|_| world.spawn(())).collect()
    }

    #[test]
    fn nearest_prefers_first_on_tie() {
        let e = entities(3);
        let origin = GridPos::new(5, 5);
        let candidates = vec![
            (e[0], GridPos::new(7, 5)),
            (e[1], GridPos::new(3, 5)),
            (e[2], GridPos::new(5, 7)),
        ];
        let (winner, _) = nearest(&origin, &candidates).unwrap();
        assert_eq!(winner, e[0]);
    }

    #[test]
    fn nearest_picks_strict_minimum() {
        let e = entities(2);
        let origin = GridPos::new(0, 0);
        let candidates = vec![(e[0], GridPos::new(4, 4)), (e[1], GridPos::new(1, 2))];
        assert_eq!(nearest(&origin, &candidates).unwrap().0, e[1]);
    }

    #[test]
    fn nearest_of_nothing_is_none() {
        assert!(nearest(&GridPos::new(0, 0), &[]).is_none());
        assert!(engage_nearest(&GridPos::new(0, 0), &[], 1.5).is_none());
    }

    #[test]
    fn resolve_strikes_diagonal_neighbour() {
        let e = entities(1);
        let engage = resolve(&GridPos::new(2, 2), e[0], &GridPos::new(3, 3), 1.5);
        assert_eq!(engage, Engage::Strike { target: e[0] });
    }

    #[test]
    fn resolve_advances_when_out_of_range() {
        let e = entities(1);
        let engage = resolve(&GridPos::new(0, 0), e[0], &GridPos::new(4, 1), 1.5);
        assert_eq!(
            engage,
            Engage::Advance {
                target: e[0],
                to: GridPos::new(1, 1)
            }
        );
    }
}
