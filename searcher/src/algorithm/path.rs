use std::collections::HashMap;

use crate::traits::SearchState;

/// A path found by a weighted search, along with its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S, C> {
    states: Vec<S>,
    cost: C,
}

impl<S, C> Path<S, C>
where
    C: Copy,
{
    pub(crate) fn new(states: Vec<S>, cost: C) -> Self {
        Self { states, cost }
    }

    /// Total cost of every edge along the path.
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Number of edges in the path.
    pub fn len(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn into_states(self) -> Vec<S> {
        self.states
    }

    pub fn origin(&self) -> Option<&S> {
        self.states.first()
    }

    pub fn destination(&self) -> Option<&S> {
        self.states.last()
    }
}

/// Walk a predecessor map back from `last` to the state with
/// no predecessor, returning the path in forward order.
pub(crate) fn reconstruct<S>(last: S, predecessors: &HashMap<S, S>) -> Vec<S>
where
    S: SearchState,
{
    let mut states = vec![last];
    while let Some(previous) = states.last().and_then(|s| predecessors.get(s)) {
        states.push(previous.clone());
    }
    states.reverse();
    states
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reconstruct_chain() {
        let predecessors: HashMap<_, _> = vec![('b', 'a'), ('c', 'b'), ('x', 'a')]
            .into_iter()
            .collect();
        assert_eq!(reconstruct('c', &predecessors), vec!['a', 'b', 'c']);
        assert_eq!(reconstruct('a', &predecessors), vec!['a']);
    }

    #[test]
    fn path_len() {
        let path = Path::new(vec![1, 2, 3], 7);
        assert_eq!(path.len(), 2);
        assert_eq!(path.cost(), 7);
        assert_eq!(path.origin(), Some(&1));
        assert_eq!(path.destination(), Some(&3));
    }
}
