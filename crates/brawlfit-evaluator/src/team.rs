//! A team of exactly [`TEAM_SIZE`] borrowed entities.

use crate::entity::Tagged;

/// Number of brawlers on a team.
pub const TEAM_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidTeamError {
    #[display("a team needs exactly {expected} members, got {actual}")]
    WrongSize { expected: usize, actual: usize },
}

/// Three team members borrowed from the catalog for one scoring call.
///
/// Member ids are expected to be distinct. That is the caller's contract and is
/// not checked here: a team with repeated members still scores, the result is
/// just meaningless.
#[derive(Debug)]
pub struct Team<'a, E: ?Sized> {
    members: [&'a E; TEAM_SIZE],
}

impl<E: ?Sized> Clone for Team<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized> Copy for Team<'_, E> {}

impl<'a, E> Team<'a, E>
where
    E: Tagged + ?Sized,
{
    #[must_use]
    pub fn new(members: [&'a E; TEAM_SIZE]) -> Self {
        Self { members }
    }

    pub fn try_from_slice(members: &[&'a E]) -> Result<Self, InvalidTeamError> {
        let members = <[&'a E; TEAM_SIZE]>::try_from(members).map_err(|_| {
            InvalidTeamError::WrongSize {
                expected: TEAM_SIZE,
                actual: members.len(),
            }
        })?;
        Ok(Self { members })
    }

    #[must_use]
    pub fn members(&self) -> &[&'a E; TEAM_SIZE] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a E> + '_ {
        self.members.iter().copied()
    }
}
