use crate::error::RosterError;
use crate::participant::Participant;

/// Insertion-ordered collection of participants, keyed by unique name.
///
/// Canonical storage order is insertion order and is never rearranged;
/// [`Roster::ranked`] computes a sorted view without touching it. The roster
/// is small (a handful of rotating pairs), so name lookups scan linearly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from existing records, rejecting duplicate names.
    pub fn from_participants(participants: Vec<Participant>) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for p in participants {
            if roster.contains(&p.name) {
                return Err(RosterError::DuplicateName(p.name));
            }
            roster.participants.push(p);
        }
        Ok(roster)
    }

    /// A roster of zeroed participants with the given names.
    ///
    /// Duplicate names in the seed are collapsed to the first occurrence.
    pub fn seeded<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster = Self::new();
        for name in names {
            let name = name.into();
            if !roster.contains(&name) {
                roster.participants.push(Participant::new(name));
            }
        }
        roster
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Exact-match lookup; names are never normalized.
    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Append a new participant, preserving name uniqueness.
    pub fn insert(&mut self, participant: Participant) -> Result<(), RosterError> {
        if self.contains(&participant.name) {
            return Err(RosterError::DuplicateName(participant.name));
        }
        self.participants.push(participant);
        Ok(())
    }

    /// Remove by name, returning the removed record if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Participant> {
        let index = self.participants.iter().position(|p| p.name == name)?;
        Some(self.participants.remove(index))
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    /// Recompute every participant's fairness ratio from its source fields.
    pub fn recompute_ratios(&mut self) {
        for p in &mut self.participants {
            p.recompute_ratio();
        }
    }

    /// The fairness ranking: a copy sorted ascending by ratio.
    ///
    /// The sort is stable, so ties keep their insertion-relative order and
    /// repeated calls without mutation are deterministic. The first entry
    /// pays next.
    pub fn ranked(&self) -> Vec<Participant> {
        let mut ranked = self.participants.clone();
        ranked.sort_by(|a, b| a.fairness_ratio.total_cmp(&b.fairness_ratio));
        ranked
    }

    /// Consume the roster into its insertion-ordered records.
    pub fn into_participants(self) -> Vec<Participant> {
        self.participants
    }
}
