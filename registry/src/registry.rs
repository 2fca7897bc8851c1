//! The ballot registry state machine.

use std::collections::HashMap;

use ballot_types::{AccountId, Area, ElectionPhase, NationalId};

use crate::candidate::Candidate;
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::tally::{self, AreaResult};
use crate::voter::Voter;

/// The ballot registry.
///
/// Owns all election state: the voter roll, per-area candidate rolls, and
/// the lifecycle phase. Operations run to completion through `&mut self`
/// or `&self`, so callers observe every mutation as one atomic unit; a
/// rejected operation leaves the prior state untouched.
pub struct Registry {
    config: RegistryConfig,
    phase: ElectionPhase,
    /// Voter records keyed by account.
    voters: HashMap<AccountId, Voter>,
    /// Accounts in registration order (the public voter roll).
    voter_roll: Vec<AccountId>,
    /// Candidate rolls keyed by area; vector order is registration order.
    areas: HashMap<Area, Vec<Candidate>>,
}

impl Registry {
    /// Create an empty registry in the `NotStarted` phase.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            phase: ElectionPhase::NotStarted,
            voters: HashMap::new(),
            voter_roll: Vec::new(),
            areas: HashMap::new(),
        }
    }

    // ── Admin operations ───────────────────────────────────────────────

    /// Register a voter under the given account.
    ///
    /// Administrator only. The national ID and area are stored verbatim;
    /// the identity check at cast time is exact and case-sensitive. The
    /// account must be new, and the national ID must not belong to
    /// another voter.
    pub fn register_voter(
        &mut self,
        caller: &AccountId,
        account: AccountId,
        national_id: NationalId,
        area: Area,
    ) -> Result<(), RegistryError> {
        self.require_admin(caller)?;
        self.require_registration_window()?;

        if self.voters.contains_key(&account) {
            return Err(RegistryError::AlreadyRegistered(format!(
                "voter account {account}"
            )));
        }
        if self.voters.values().any(|v| v.national_id == national_id) {
            return Err(RegistryError::AlreadyRegistered(format!(
                "voter national ID {national_id}"
            )));
        }

        tracing::info!(account = %account, area = %area, "voter registered");
        self.voter_roll.push(account.clone());
        self.voters
            .insert(account.clone(), Voter::new(account, national_id, area));
        Ok(())
    }

    /// Register a candidate on an area's ballot.
    ///
    /// Administrator only. Returns the candidate's assigned index — the
    /// prior length of the area roll — which is the handle voters use
    /// when casting.
    pub fn register_candidate(
        &mut self,
        caller: &AccountId,
        name: impl Into<String>,
        national_id: NationalId,
        area: Area,
    ) -> Result<usize, RegistryError> {
        self.require_admin(caller)?;
        self.require_registration_window()?;

        if self.config.enforce_candidate_id_uniqueness
            && self
                .areas
                .values()
                .flatten()
                .any(|c| c.national_id == national_id)
        {
            return Err(RegistryError::AlreadyRegistered(format!(
                "candidate national ID {national_id}"
            )));
        }

        let name = name.into();
        let roll = self.areas.entry(area.clone()).or_default();
        let index = roll.len();
        tracing::info!(name = %name, area = %area, index, "candidate registered");
        roll.push(Candidate::new(name, national_id, area));
        Ok(index)
    }

    /// Open voting. Only valid from the `NotStarted` phase.
    pub fn start_voting(&mut self, caller: &AccountId) -> Result<(), RegistryError> {
        self.require_admin(caller)?;
        self.transition(ElectionPhase::NotStarted, ElectionPhase::Open)
    }

    /// Close voting. Only valid from the `Open` phase; `Closed` is
    /// terminal.
    pub fn end_voting(&mut self, caller: &AccountId) -> Result<(), RegistryError> {
        self.require_admin(caller)?;
        self.transition(ElectionPhase::Open, ElectionPhase::Closed)
    }

    // ── Voter operations ───────────────────────────────────────────────

    /// Cast a ballot for the candidate at `candidate_index` in the
    /// voter's own area.
    ///
    /// The supplied national ID must match the registered record exactly,
    /// and each voter casts at most one ballot, ever. The vote-count
    /// increment and the `has_voted` flip commit together; any failed
    /// precondition rejects the whole operation with no state change.
    pub fn cast_vote(
        &mut self,
        account: &AccountId,
        national_id: &NationalId,
        candidate_index: usize,
    ) -> Result<(), RegistryError> {
        if !self.phase.accepts_ballots() {
            return Err(RegistryError::VotingNotOpen(self.phase));
        }

        let voter = self
            .voters
            .get_mut(account)
            .ok_or_else(|| RegistryError::NotRegistered(account.clone()))?;
        if voter.national_id != *national_id {
            return Err(RegistryError::IdentityMismatch(account.clone()));
        }
        if voter.has_voted {
            return Err(RegistryError::AlreadyVoted(account.clone()));
        }

        let Some(candidate) = self
            .areas
            .get_mut(&voter.area)
            .and_then(|roll| roll.get_mut(candidate_index))
        else {
            let area = voter.area.clone();
            let count = self.areas.get(&area).map_or(0, |roll| roll.len());
            return Err(RegistryError::InvalidCandidateIndex {
                index: candidate_index,
                area,
                count,
            });
        };

        candidate.vote_count += 1;
        voter.has_voted = true;
        tracing::info!(account = %account, area = %voter.area, index = candidate_index, "ballot accepted");
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Candidates registered in `area`, in registration (index) order,
    /// with live counts.
    ///
    /// Unknown areas yield an empty slice, not an error.
    pub fn candidates_by_area(&self, area: &Area) -> &[Candidate] {
        self.areas.get(area).map_or(&[], |roll| roll.as_slice())
    }

    /// Resolve the winner (or tied set) for `area`.
    ///
    /// With `results_require_closed` set (the default) this is only
    /// served once voting has closed.
    pub fn results_by_area(&self, area: &Area) -> Result<AreaResult, RegistryError> {
        if self.config.results_require_closed && !self.phase.is_final() {
            return Err(RegistryError::VotingNotClosed(self.phase));
        }
        tally::resolve_area(self.candidates_by_area(area))
            .ok_or_else(|| RegistryError::AreaNotFound(area.clone()))
    }

    /// The configured administrator identity.
    pub fn admin(&self) -> &AccountId {
        &self.config.admin
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ElectionPhase {
        self.phase
    }

    /// Look up a voter record by account.
    pub fn voter(&self, account: &AccountId) -> Option<&Voter> {
        self.voters.get(account)
    }

    /// All registered voter accounts, in registration order.
    pub fn voter_accounts(&self) -> &[AccountId] {
        &self.voter_roll
    }

    // ── Internal checks ────────────────────────────────────────────────

    fn require_admin(&self, caller: &AccountId) -> Result<(), RegistryError> {
        if caller != &self.config.admin {
            return Err(RegistryError::Unauthorized(caller.clone()));
        }
        Ok(())
    }

    fn require_registration_window(&self) -> Result<(), RegistryError> {
        if !self
            .phase
            .accepts_registrations(self.config.allow_registration_after_start)
        {
            return Err(RegistryError::InvalidPhaseTransition {
                expected: ElectionPhase::NotStarted,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn transition(
        &mut self,
        from: ElectionPhase,
        to: ElectionPhase,
    ) -> Result<(), RegistryError> {
        if self.phase != from {
            return Err(RegistryError::InvalidPhaseTransition {
                expected: from,
                actual: self.phase,
            });
        }
        tracing::info!(from = %self.phase, to = %to, "election phase transition");
        self.phase = to;
        Ok(())
    }
}
