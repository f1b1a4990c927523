//! Nearest-interactable selection.
//!
//! Overlap sensors over-report: several trigger volumes can fire in the same
//! step, and an item can enter and leave almost at once. The selector keeps
//! every overlapping candidate, always recomputes the single nearest one on
//! membership change, and reports a change only when the winner's identity
//! actually changes.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use motorika_core::error::ProximityError;
use motorika_core::types::Position;

/// Notification that the active candidate changed identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveChanged<T> {
    pub previous: Option<T>,
    pub current: Option<T>,
}

#[derive(Debug, Clone)]
struct Candidate<T> {
    item: T,
    position: Position,
}

/// Tracks the candidates overlapping an actor and designates the nearest.
///
/// Candidates are kept in entry order; on equal distance the earliest entered
/// wins. Distances are measured from the actor position given to the last
/// [`recompute_nearest`](Self::recompute_nearest) (or [`set_actor`](Self::set_actor)).
#[derive(Debug, Clone)]
pub struct ProximitySelector<T> {
    candidates: Vec<Candidate<T>>,
    active: Option<T>,
    radius: f64,
    actor: Position,
}

/// Empty selector with a unit radius.
impl<T> Default for ProximitySelector<T> {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            active: None,
            radius: 1.0,
            actor: Position::default(),
        }
    }
}

impl<T: Clone + PartialEq + Debug> ProximitySelector<T> {
    pub fn new(radius: f64) -> Result<Self, ProximityError> {
        validate_radius(radius)?;
        Ok(Self {
            candidates: Vec::new(),
            active: None,
            radius,
            actor: Position::default(),
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), ProximityError> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// Whether `position` lies within the detection radius around `actor`.
    pub fn in_range(&self, actor: Position, position: Position) -> bool {
        actor.range_to(&position) <= self.radius
    }

    /// Record where the actor is without rescanning. Takes effect at the next
    /// membership change or recompute.
    pub fn set_actor(&mut self, actor: Position) {
        self.actor = actor;
    }

    /// Register a newly overlapping item.
    ///
    /// A repeated enter for an item that is already a candidate is absorbed:
    /// the selector is left untouched and `DuplicateEnter` is returned.
    pub fn on_enter(
        &mut self,
        item: T,
        position: Position,
    ) -> Result<Option<ActiveChanged<T>>, ProximityError> {
        if self.contains(&item) {
            warn!(?item, "duplicate enter ignored");
            return Err(ProximityError::DuplicateEnter);
        }
        self.candidates.push(Candidate { item, position });
        Ok(self.reselect())
    }

    /// Drop an item that stopped overlapping. Unknown items are ignored.
    pub fn on_exit(&mut self, item: &T) -> Option<ActiveChanged<T>> {
        let before = self.candidates.len();
        self.candidates.retain(|c| c.item != *item);
        if self.candidates.len() == before {
            return None;
        }
        self.reselect()
    }

    /// Rescan every candidate against a fresh actor position.
    pub fn recompute_nearest(&mut self, actor: Position) -> Option<ActiveChanged<T>> {
        self.actor = actor;
        self.reselect()
    }

    /// Forget every candidate.
    pub fn clear(&mut self) -> Option<ActiveChanged<T>> {
        self.candidates.clear();
        self.reselect()
    }

    pub fn active(&self) -> Option<&T> {
        self.active.as_ref()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.candidates.iter().any(|c| c.item == *item)
    }

    /// Candidates in entry order.
    pub fn candidates(&self) -> impl Iterator<Item = &T> {
        self.candidates.iter().map(|c| &c.item)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn reselect(&mut self) -> Option<ActiveChanged<T>> {
        let mut nearest: Option<(&Candidate<T>, f64)> = None;
        for candidate in &self.candidates {
            let distance = self.actor.range_to(&candidate.position);
            match nearest {
                Some((_, best)) if best <= distance => {}
                _ => nearest = Some((candidate, distance)),
            }
        }
        let winner = nearest.map(|(c, _)| c.item.clone());

        if winner == self.active {
            return None;
        }

        let previous = std::mem::replace(&mut self.active, winner.clone());
        debug!(?previous, current = ?winner, "active candidate changed");
        Some(ActiveChanged {
            previous,
            current: winner,
        })
    }
}

fn validate_radius(radius: f64) -> Result<(), ProximityError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(ProximityError::InvalidRadius(radius))
    }
}
