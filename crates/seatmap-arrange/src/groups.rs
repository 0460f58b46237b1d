//! Sex-group partition of a roster.
//!
//! Each group is shuffled independently and then consumed front to back
//! through a cursor. The group that feeds the next seat pair is chosen fresh
//! for every pair:
//!
//! 1. male and female both have members left → fair coin between them
//! 2. only one of male/female has members left → that one
//! 3. otherwise `other`, if it has members left
//! 4. otherwise nothing (every group exhausted)

use rand::seq::SliceRandom;
use rand::Rng;
use seatmap_layout::{Person, SexGroup};

/// One shuffled group with a consumption cursor.
#[derive(Debug, Default)]
struct Group<'a> {
    members: Vec<&'a Person>,
    next: usize,
}

impl<'a> Group<'a> {
    fn remaining(&self) -> usize {
        self.members.len() - self.next
    }

    fn has_remaining(&self) -> bool {
        self.next < self.members.len()
    }

    fn take(&mut self) -> Option<&'a Person> {
        let person = self.members.get(self.next).copied()?;
        self.next += 1;
        Some(person)
    }
}

/// The roster split into male, female and other.
#[derive(Debug, Default)]
pub struct SexGroups<'a> {
    male: Group<'a>,
    female: Group<'a>,
    other: Group<'a>,
}

impl<'a> SexGroups<'a> {
    /// Partition by resolved sex-group, keeping roster order within a group.
    pub fn partition(people: &'a [Person]) -> Self {
        let mut groups = Self::default();
        for person in people {
            groups.group_mut(person.sex).members.push(person);
        }
        groups
    }

    /// Shuffle each group independently and rewind the cursors.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for group in [&mut self.male, &mut self.female, &mut self.other] {
            group.members.shuffle(rng);
            group.next = 0;
        }
    }

    fn group(&self, sex: SexGroup) -> &Group<'a> {
        match sex {
            SexGroup::Male => &self.male,
            SexGroup::Female => &self.female,
            SexGroup::Other => &self.other,
        }
    }

    fn group_mut(&mut self, sex: SexGroup) -> &mut Group<'a> {
        match sex {
            SexGroup::Male => &mut self.male,
            SexGroup::Female => &mut self.female,
            SexGroup::Other => &mut self.other,
        }
    }

    /// Total members in a group, assigned or not.
    pub fn len(&self, sex: SexGroup) -> usize {
        self.group(sex).members.len()
    }

    /// Members of a group not yet handed out.
    pub fn remaining(&self, sex: SexGroup) -> usize {
        self.group(sex).remaining()
    }

    /// Whether every group is exhausted.
    pub fn is_exhausted(&self) -> bool {
        !self.male.has_remaining() && !self.female.has_remaining() && !self.other.has_remaining()
    }

    /// Pick the group that feeds the next pair, or `None` once all are exhausted.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<SexGroup> {
        match (self.male.has_remaining(), self.female.has_remaining()) {
            (true, true) => Some(if rng.gen_bool(0.5) {
                SexGroup::Male
            } else {
                SexGroup::Female
            }),
            (true, false) => Some(SexGroup::Male),
            (false, true) => Some(SexGroup::Female),
            (false, false) => self.other.has_remaining().then_some(SexGroup::Other),
        }
    }

    /// Hand out the next member of a group.
    pub fn take(&mut self, sex: SexGroup) -> Option<&'a Person> {
        self.group_mut(sex).take()
    }
}
