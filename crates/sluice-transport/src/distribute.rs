//! Fair distribution of a resource stack across neighbouring acceptors.
//!
//! One emission is a single best-effort pass:
//!
//! 1. Keep the acceptor faces in the requested direction set whose
//!    acceptor agrees to take the stack's kind through the facing side.
//! 2. Shuffle them so no face is systematically favoured when the split
//!    leaves a remainder.
//! 3. Offer each `amount / n` units, plus one extra unit to the first
//!    `amount % n` in shuffle order. The offers sum to `amount` exactly.
//! 4. Commit each offer and sum what the acceptors report taking.
//!
//! Units an acceptor declines are not redistributed within the pass; the
//! caller keeps them and may emit again on a later cycle.

use crate::classify::classify;
use rand::seq::SliceRandom;
use rand::Rng;
use sluice_core::{EntityId, Node, ResourceStack, TransportError, World};
use sluice_space::{Direction, DirectionSet};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

/// One acceptor's part in an emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offer {
    /// Direction from the node to the acceptor.
    pub direction: Direction,
    /// The acceptor.
    pub entity: EntityId,
    /// Units offered.
    pub offered: u32,
    /// Units the acceptor reported taking.
    pub accepted: u32,
}

/// Outcome of an emission, offer by offer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitReport {
    offers: SmallVec<[Offer; Direction::COUNT]>,
    issues: Vec<TransportError>,
    sent: u32,
}

impl EmitReport {
    /// Total units accepted.
    pub fn sent(&self) -> u32 {
        self.sent
    }

    /// The offers in shuffle order.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Total units offered. Equals the stack amount whenever at least one
    /// acceptor was eligible.
    pub fn offered(&self) -> u32 {
        self.offers.iter().map(|o| o.offered).sum()
    }

    /// Host misbehaviour detected during the pass.
    pub fn issues(&self) -> &[TransportError] {
        &self.issues
    }

    /// `true` if no misbehaviour was detected.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// The offer made to the acceptor on `direction`, if any.
    pub fn offer_to(&self, direction: Direction) -> Option<&Offer> {
        self.offers.iter().find(|o| o.direction == direction)
    }
}

/// Split `amount` into `divisor` shares that differ by at most one.
///
/// The first `amount % divisor` shares carry the extra unit. Returns no
/// shares when `divisor` is zero.
///
/// # Examples
///
/// ```
/// use sluice_transport::split_shares;
///
/// assert_eq!(split_shares(10, 3).as_slice(), &[4, 3, 3]);
/// assert_eq!(split_shares(2, 4).as_slice(), &[1, 1, 0, 0]);
/// assert!(split_shares(50, 0).is_empty());
/// ```
pub fn split_shares(amount: u32, divisor: usize) -> SmallVec<[u32; Direction::COUNT]> {
    if divisor == 0 {
        return SmallVec::new();
    }
    let d = divisor as u64;
    let base = (u64::from(amount) / d) as u32;
    let remainder = (u64::from(amount) % d) as usize;
    (0..divisor).map(|i| base + u32::from(i < remainder)).collect()
}

/// Acceptor faces of `node` in `directions` willing to take `stack`'s kind.
fn eligible_acceptors<W: World + ?Sized>(
    world: &W,
    node: &Node,
    directions: DirectionSet,
    stack: &ResourceStack,
) -> SmallVec<[(Direction, EntityId); Direction::COUNT]> {
    classify(world, node)
        .acceptors()
        .filter(|(dir, _)| directions.contains(*dir))
        .filter(|(dir, id)| {
            world
                .acceptor(*id)
                .is_some_and(|a| a.can_fill(dir.opposite(), stack.kind()))
        })
        .collect()
}

fn distribute<W, R>(
    world: &mut W,
    node: &Node,
    directions: DirectionSet,
    stack: Option<ResourceStack>,
    rng: &mut R,
    commit: bool,
) -> EmitReport
where
    W: World + ?Sized,
    R: Rng + ?Sized,
{
    let mut report = EmitReport::default();
    let Some(stack) = stack.filter(|s| !s.is_empty()) else {
        return report;
    };
    if directions.is_empty() {
        return report;
    }

    let mut targets = eligible_acceptors(&*world, node, directions, &stack);
    if targets.is_empty() {
        debug!(pos = %node.pos, %stack, "no eligible acceptors");
        return report;
    }
    targets.shuffle(rng);

    let shares = split_shares(stack.amount(), targets.len());
    for ((direction, entity), offered) in targets.into_iter().zip(shares) {
        let Some(acceptor) = world.acceptor_mut(entity) else {
            warn!(%entity, %direction, "acceptor vanished before commit");
            report
                .issues
                .push(TransportError::EntityVanished { entity, direction });
            report.offers.push(Offer {
                direction,
                entity,
                offered,
                accepted: 0,
            });
            continue;
        };

        let accepted = acceptor.fill(direction.opposite(), &stack.with_amount(offered), commit);
        trace!(%entity, %direction, offered, accepted, commit, "offer");
        if accepted > offered {
            // Not clamped: the excess shows up in the total.
            warn!(%entity, %direction, offered, accepted, "acceptor took more than offered");
            report.issues.push(TransportError::AcceptorContractViolation {
                entity,
                direction,
                offered,
                accepted,
            });
        }

        report.sent = report.sent.saturating_add(accepted);
        report.offers.push(Offer {
            direction,
            entity,
            offered,
            accepted,
        });
    }

    debug!(
        pos = %node.pos,
        %stack,
        acceptors = report.offers.len(),
        sent = report.sent,
        commit,
        "distributed"
    );
    report
}

/// Emit `stack` from `node` through the faces in `directions`.
///
/// Returns the number of units the acceptors took. An absent or empty
/// stack, an empty direction set, or the absence of willing acceptors all
/// yield 0 without touching any acceptor.
pub fn emit<W, R>(
    world: &mut W,
    node: &Node,
    directions: DirectionSet,
    stack: impl Into<Option<ResourceStack>>,
    rng: &mut R,
) -> u32
where
    W: World + ?Sized,
    R: Rng + ?Sized,
{
    emit_detailed(world, node, directions, stack, rng).sent()
}

/// [`emit`], returning the per-acceptor breakdown.
pub fn emit_detailed<W, R>(
    world: &mut W,
    node: &Node,
    directions: DirectionSet,
    stack: impl Into<Option<ResourceStack>>,
    rng: &mut R,
) -> EmitReport
where
    W: World + ?Sized,
    R: Rng + ?Sized,
{
    distribute(world, node, directions, stack.into(), rng, true)
}

/// Plan an emission without committing it.
///
/// Runs the same selection, shuffle and split as [`emit_detailed`] but
/// calls each acceptor's `fill` with `commit == false`, so the report
/// says how much each acceptor would take. Acceptors that honour their
/// contract are left unchanged. `world` is borrowed mutably only because
/// [`Acceptor::fill`](sluice_core::Acceptor::fill) takes `&mut self`.
pub fn simulate<W, R>(
    world: &mut W,
    node: &Node,
    directions: DirectionSet,
    stack: impl Into<Option<ResourceStack>>,
    rng: &mut R,
) -> EmitReport
where
    W: World + ?Sized,
    R: Rng + ?Sized,
{
    distribute(world, node, directions, stack.into(), rng, false)
}
