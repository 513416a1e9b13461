use petgraph::stable_graph::NodeIndex;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::models::NetworkGraph;

/// Accumulated cost of a partial journey, ordered best-first by `Ord`
pub(crate) trait RouteCost: Copy + Ord {
    fn zero() -> Self;

    /// Cost after riding one more segment of `time` minutes;
    /// `changed` is set when the segment is on a different line than the one
    /// the traveller arrived on
    #[must_use]
    fn extend(self, time: f64, changed: bool) -> Self;
}

/// A station reached while travelling on a line
///
/// `line` is `None` only for the start state, before any segment is ridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SearchState<'g> {
    pub station: NodeIndex,
    pub line: Option<&'g str>,
}

impl SearchState<'_> {
    fn start(station: NodeIndex) -> Self {
        Self { station, line: None }
    }

    fn requires_change(&self, line: &str) -> bool {
        self.line.is_some_and(|current| current != line)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct QueueEntry<'g, C> {
    cost: C,
    state: SearchState<'g>,
}

impl<C: RouteCost> Ord for QueueEntry<'_, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl<C: RouteCost> PartialOrd for QueueEntry<'_, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Optimal arrival at the destination
#[derive(Debug)]
pub(crate) struct Settled<'g, C> {
    /// States from the start state to the settled destination state
    pub path: Vec<SearchState<'g>>,
    pub cost: C,
}

/// Dijkstra over (station, arrival line) states
///
/// Closed stations are never expanded nor accepted as the destination, which
/// includes a closed start station. Returns `None` when the queue runs dry
/// before any state at `end` is settled.
pub(crate) fn search<C: RouteCost>(
    graph: &NetworkGraph,
    start: NodeIndex,
    end: NodeIndex,
) -> Option<Settled<'_, C>> {
    let start_state = SearchState::start(start);

    let mut best: HashMap<SearchState<'_>, C> = HashMap::new();
    let mut predecessor: HashMap<SearchState<'_>, SearchState<'_>> = HashMap::new();
    let mut settled: HashSet<SearchState<'_>> = HashSet::new();
    let mut heap = BinaryHeap::new();

    best.insert(start_state, C::zero());
    heap.push(QueueEntry { cost: C::zero(), state: start_state });

    while let Some(QueueEntry { cost, state }) = heap.pop() {
        if !graph.station_is_open(state.station) {
            continue;
        }

        // Stale duplicate of a state that was already finalised
        if !settled.insert(state) {
            continue;
        }

        if state.station == end {
            return Some(Settled {
                path: reconstruct(&predecessor, state),
                cost,
            });
        }

        for segment in graph.segments_of(state.station) {
            let candidate = cost.extend(segment.time, state.requires_change(segment.line));
            let next = SearchState {
                station: segment.neighbor,
                line: Some(segment.line),
            };

            if best.get(&next).map_or(true, |&known| candidate < known) {
                best.insert(next, candidate);
                predecessor.insert(next, state);
                heap.push(QueueEntry { cost: candidate, state: next });
            }
        }
    }

    None
}

fn reconstruct<'g>(
    predecessor: &HashMap<SearchState<'g>, SearchState<'g>>,
    end_state: SearchState<'g>,
) -> Vec<SearchState<'g>> {
    let mut path = vec![end_state];
    let mut current = end_state;
    while let Some(&previous) = predecessor.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
