use gridkit_core::Coord;

/// Cost of a single move between adjacent coordinates.
pub type Cost = u32;

/// One outgoing edge: the coordinate reached and what it costs to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub to: Coord,
    pub cost: Cost,
}

impl Step {
    /// A step to `to` costing `cost`.
    #[inline]
    pub const fn new(to: Coord, cost: Cost) -> Self {
        Self { to, cost }
    }

    /// A unit-cost step.
    #[inline]
    pub const fn unit(to: Coord) -> Self {
        Self { to, cost: 1 }
    }
}

/// Adjacency source for the shortest-path engine.
pub trait Pather {
    /// Append the steps leaving `p` into `buf`. The caller clears `buf`
    /// before calling.
    fn steps(&self, p: Coord, buf: &mut Vec<Step>);
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn step_serde_roundtrip() {
        let step = Step::new(Coord::new(2, -1), 7);
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"to":{"row":2,"col":-1},"cost":7}"#);
        let back: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(back, step);
    }

    #[test]
    fn step_rejects_missing_cost() {
        assert!(serde_json::from_str::<Step>(r#"{"to":{"row":0,"col":0}}"#).is_err());
    }
}
