//! The slot array and the reduction into it.

use serde::Serialize;

use super::classify::ClassifiedService;
use super::severity::Severity;

/// One severity per time slot, nearest slot first.
///
/// Each slot holds the greatest severity of every departure placed in it,
/// so the order departures are recorded in does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Slots(Vec<Severity>);

impl Slots {
    /// Create `count` empty slots.
    pub fn new(count: usize) -> Self {
        Self(vec![Severity::None; count])
    }

    /// Reduce a set of placed departures into `count` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_lights::lights::{ClassifiedService, Severity, Slots};
    ///
    /// let slots = Slots::reduce(
    ///     4,
    ///     [
    ///         ClassifiedService::new(1, Severity::Cancelled),
    ///         ClassifiedService::new(1, Severity::OnTime),
    ///         ClassifiedService::new(3, Severity::Late),
    ///     ],
    /// );
    /// assert_eq!(
    ///     slots.as_slice(),
    ///     &[Severity::None, Severity::OnTime, Severity::None, Severity::Late]
    /// );
    /// ```
    pub fn reduce(count: usize, services: impl IntoIterator<Item = ClassifiedService>) -> Self {
        let mut slots = Self::new(count);
        slots.extend(services);
        slots
    }

    /// Record one placed departure, keeping the greater severity.
    ///
    /// A slot index past the end of the array is ignored.
    pub fn record(&mut self, service: ClassifiedService) {
        if let Some(slot) = self.0.get_mut(service.slot) {
            *slot = (*slot).max(service.severity);
        }
    }

    /// Severity of slot `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<Severity> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Severity] {
        &self.0
    }

    /// Iterate over slots, nearest first.
    pub fn iter(&self) -> impl Iterator<Item = Severity> + '_ {
        self.0.iter().copied()
    }
}

impl Extend<ClassifiedService> for Slots {
    fn extend<I: IntoIterator<Item = ClassifiedService>>(&mut self, iter: I) {
        for service in iter {
            self.record(service);
        }
    }
}
