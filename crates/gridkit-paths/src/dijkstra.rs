//! Dijkstra shortest-path search over any [`Pather`].
//!
//! All bookkeeping (distances, visited set, frontier, predecessors) lives in
//! a single call and is dropped when it returns. The search stops as soon as
//! one of the requested destinations is settled, or fails with
//! [`PathError::RouteBlocked`] once the frontier is empty.
//!
//! Frontier ties are broken by the lowest coordinate in row-major order, so
//! [`shortest_path`] is deterministic. Among equal-cost routes it returns the
//! one whose predecessor was discovered first; [`shortest_paths`] returns all
//! of them.

use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};

use gridkit_core::Coord;

use crate::error::PathError;
use crate::node::NodeRef;
use crate::traits::{Pather, Step};

/// Whether equal-cost predecessors are kept alongside the first one found.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Ties {
    First,
    All,
}

/// State of one finished search.
struct Settled {
    dist: HashMap<Coord, u64>,
    preds: HashMap<Coord, Vec<Coord>>,
    target: Coord,
}

fn search<P: Pather>(
    pather: &P,
    from: Coord,
    targets: &[Coord],
    ties: Ties,
) -> Result<Settled, PathError> {
    let mut dist: HashMap<Coord, u64> = HashMap::new();
    let mut visited: HashSet<Coord> = HashSet::new();
    let mut preds: HashMap<Coord, Vec<Coord>> = HashMap::new();
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

    dist.insert(from, 0);
    open.push(NodeRef { dist: 0, pos: from });

    let mut buf: Vec<Step> = Vec::with_capacity(8);

    while let Some(current) = open.pop() {
        let cp = current.pos;
        // Skip stale entries.
        if !visited.insert(cp) {
            continue;
        }
        log::trace!("settled {cp} at {}", current.dist);

        if targets.contains(&cp) {
            log::debug!(
                "dijkstra from {from} reached {cp} at cost {} after settling {} coords",
                current.dist,
                visited.len()
            );
            return Ok(Settled {
                dist,
                preds,
                target: cp,
            });
        }

        buf.clear();
        pather.steps(cp, &mut buf);

        for step in buf.iter() {
            if visited.contains(&step.to) {
                continue;
            }
            let tentative = current.dist + u64::from(step.cost);
            match dist.entry(step.to) {
                Entry::Occupied(mut e) => {
                    let known = *e.get();
                    if tentative < known {
                        e.insert(tentative);
                        preds.insert(step.to, vec![cp]);
                        open.push(NodeRef {
                            dist: tentative,
                            pos: step.to,
                        });
                    } else if tentative == known && ties == Ties::All {
                        let ps = preds.entry(step.to).or_default();
                        if !ps.contains(&cp) {
                            ps.push(cp);
                        }
                    }
                }
                Entry::Vacant(e) => {
                    e.insert(tentative);
                    preds.insert(step.to, vec![cp]);
                    open.push(NodeRef {
                        dist: tentative,
                        pos: step.to,
                    });
                }
            }
        }
    }

    Err(PathError::RouteBlocked { from })
}

/// Cheapest route from `from` to whichever of `targets` is settled first,
/// both endpoints included.
pub fn shortest_path<P: Pather>(
    pather: &P,
    from: Coord,
    targets: &[Coord],
) -> Result<Vec<Coord>, PathError> {
    let settled = search(pather, from, targets, Ties::First)?;
    let mut path = vec![settled.target];
    let mut cp = settled.target;
    while let Some(&prev) = settled.preds.get(&cp).and_then(|ps| ps.first()) {
        path.push(prev);
        cp = prev;
    }
    path.reverse();
    Ok(path)
}

/// Every distinct minimum-cost route from `from` to whichever of `targets`
/// is settled first.
///
/// Routes are ordered by the discovery order of their predecessors, walking
/// back from the destination.
pub fn shortest_paths<P: Pather>(
    pather: &P,
    from: Coord,
    targets: &[Coord],
) -> Result<Vec<Vec<Coord>>, PathError> {
    let settled = search(pather, from, targets, Ties::All)?;

    let mut paths = Vec::new();
    // Partial routes are stored reversed: destination first.
    let mut stack = vec![vec![settled.target]];
    while let Some(partial) = stack.pop() {
        let Some(&head) = partial.last() else {
            continue;
        };
        match settled.preds.get(&head) {
            Some(ps) if head != from => {
                for &prev in ps.iter().rev() {
                    let mut next = partial.clone();
                    next.push(prev);
                    stack.push(next);
                }
            }
            _ => {
                let mut path = partial;
                path.reverse();
                paths.push(path);
            }
        }
    }
    Ok(paths)
}

/// Total cost of the cheapest route from `from` to whichever of `targets` is
/// settled first.
pub fn distance<P: Pather>(pather: &P, from: Coord, targets: &[Coord]) -> Result<u64, PathError> {
    let settled = search(pather, from, targets, Ties::First)?;
    Ok(settled.dist.get(&settled.target).copied().unwrap_or_default())
}
