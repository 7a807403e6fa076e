//! Test utilities and mock types for Sluice development.
//!
//! Provides a [`MockWorld`] implementing [`World`], configurable
//! [`MockTank`] acceptors and [`MockPipe`] transmitters, and the
//! fixtures in [`fixtures`] for surrounding a node with neighbours.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use indexmap::IndexMap;
use sluice_core::{
    Acceptor, CapacityDescriptor, EntityId, Node, ResourceKind, ResourceStack, TankInfo,
    TransmissionKind, TransportPeer, World,
};
use sluice_space::{BlockPos, Direction, DirectionSet};

/// How a [`MockTank`] answers tank-info queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TankReport {
    /// One described compartment.
    Described,
    /// An empty sequence.
    Nothing,
    /// A sequence whose only entry is `None`.
    NullEntry,
}

/// Configurable acceptor backed by a single compartment.
///
/// Counts every `fill` call so tests can assert which acceptors the
/// distributor touched.
#[derive(Clone, Debug)]
pub struct MockTank {
    pub capacity: u32,
    pub stored: u32,
    /// Only this kind is accepted; `None` accepts anything.
    pub accepts: Option<ResourceKind>,
    pub report: TankReport,
    /// Faces that refuse every query.
    pub sealed: DirectionSet,
    pub fillable: bool,
    pub drainable: bool,
    /// Units added on top of the true accepted amount, to model a
    /// misbehaving acceptor.
    pub over_report: u32,
    fill_calls: usize,
    commits: usize,
}

impl MockTank {
    /// A tank that accepts any amount of any kind.
    pub fn unlimited() -> Self {
        Self::with_capacity(u32::MAX)
    }

    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            capacity,
            stored: 0,
            accepts: None,
            report: TankReport::Described,
            sealed: DirectionSet::empty(),
            fillable: true,
            drainable: false,
            over_report: 0,
            fill_calls: 0,
            commits: 0,
        }
    }

    pub fn accepting(mut self, kind: ResourceKind) -> Self {
        self.accepts = Some(kind);
        self
    }

    pub fn reporting(mut self, report: TankReport) -> Self {
        self.report = report;
        self
    }

    pub fn sealed(mut self, side: Direction) -> Self {
        self.sealed.insert(side);
        self
    }

    pub fn drainable(mut self) -> Self {
        self.drainable = true;
        self
    }

    /// Answers only the drain probe; every fill is refused.
    pub fn drain_only(mut self) -> Self {
        self.fillable = false;
        self.drainable = true;
        self
    }

    pub fn over_reporting(mut self, extra: u32) -> Self {
        self.over_report = extra;
        self
    }

    /// Number of `fill` calls, simulated or committed.
    pub fn fill_calls(&self) -> usize {
        self.fill_calls
    }

    /// Number of committing `fill` calls.
    pub fn commits(&self) -> usize {
        self.commits
    }

    fn handles(&self, side: Direction, kind: ResourceKind) -> bool {
        !self.sealed.contains(side) && self.accepts.is_none_or(|k| k == kind)
    }
}

impl Acceptor for MockTank {
    fn tank_info(&self, side: Direction) -> TankInfo {
        if self.sealed.contains(side) {
            return TankInfo::new();
        }
        match self.report {
            TankReport::Described => {
                let contents = self
                    .accepts
                    .filter(|_| self.stored > 0)
                    .map(|k| ResourceStack::new(k, self.stored));
                std::iter::once(Some(CapacityDescriptor {
                    contents,
                    capacity: self.capacity,
                }))
                .collect()
            }
            TankReport::Nothing => TankInfo::new(),
            TankReport::NullEntry => std::iter::once(None).collect(),
        }
    }

    fn can_fill(&self, side: Direction, kind: ResourceKind) -> bool {
        self.fillable && self.handles(side, kind)
    }

    fn can_drain(&self, side: Direction, kind: ResourceKind) -> bool {
        self.drainable && self.handles(side, kind)
    }

    fn fill(&mut self, side: Direction, stack: &ResourceStack, commit: bool) -> u32 {
        self.fill_calls += 1;
        if !self.can_fill(side, stack.kind()) {
            return 0;
        }
        let accepted = stack.amount().min(self.capacity - self.stored);
        if commit {
            self.stored += accepted;
            self.commits += 1;
        }
        accepted + self.over_report
    }
}

/// A transmitter of a single network kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockPipe {
    pub kind: TransmissionKind,
}

impl MockPipe {
    pub fn new(kind: TransmissionKind) -> Self {
        Self { kind }
    }
}

impl TransportPeer for MockPipe {
    fn is_peer_for(&self, kind: TransmissionKind) -> bool {
        self.kind == kind
    }
}

/// An entity in a [`MockWorld`]: any combination of capabilities.
#[derive(Clone, Debug, Default)]
pub struct MockEntity {
    pub pipe: Option<MockPipe>,
    pub tank: Option<MockTank>,
}

impl MockEntity {
    /// An entity with no capabilities (a plain block).
    pub fn inert() -> Self {
        Self::default()
    }

    /// A transmitter that also exposes a tank.
    pub fn hybrid(kind: TransmissionKind, tank: MockTank) -> Self {
        Self {
            pipe: Some(MockPipe::new(kind)),
            tank: Some(tank),
        }
    }
}

impl From<MockTank> for MockEntity {
    fn from(tank: MockTank) -> Self {
        Self {
            pipe: None,
            tank: Some(tank),
        }
    }
}

impl From<MockPipe> for MockEntity {
    fn from(pipe: MockPipe) -> Self {
        Self {
            pipe: Some(pipe),
            tank: None,
        }
    }
}

/// In-memory world: a sparse map from positions to entities.
#[derive(Debug, Default)]
pub struct MockWorld {
    positions: IndexMap<BlockPos, EntityId>,
    entities: IndexMap<EntityId, MockEntity>,
    next_id: u64,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `entity` at `pos`, replacing whatever was there.
    pub fn place(&mut self, pos: BlockPos, entity: impl Into<MockEntity>) -> EntityId {
        self.remove(pos);
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.positions.insert(pos, id);
        self.entities.insert(id, entity.into());
        id
    }

    /// Place `entity` on face `dir` of `node`.
    pub fn place_beside(
        &mut self,
        node: &Node,
        dir: Direction,
        entity: impl Into<MockEntity>,
    ) -> EntityId {
        self.place(node.neighbor_pos(dir), entity)
    }

    /// Remove the entity at `pos`, returning it.
    pub fn remove(&mut self, pos: BlockPos) -> Option<MockEntity> {
        let id = self.positions.shift_remove(&pos)?;
        self.entities.shift_remove(&id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&MockEntity> {
        self.entities.get(&id)
    }

    /// The tank of `id`, for inspecting fill counts and contents.
    pub fn tank(&self, id: EntityId) -> Option<&MockTank> {
        self.entity(id).and_then(|e| e.tank.as_ref())
    }

    /// Total `fill` calls across every tank in the world.
    pub fn total_fill_calls(&self) -> usize {
        self.entities
            .values()
            .filter_map(|e| e.tank.as_ref())
            .map(MockTank::fill_calls)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl World for MockWorld {
    fn neighbor(&self, pos: BlockPos, dir: Direction) -> Option<EntityId> {
        self.positions.get(&dir.step(pos)).copied()
    }

    fn peer(&self, id: EntityId) -> Option<&dyn TransportPeer> {
        self.entities
            .get(&id)?
            .pipe
            .as_ref()
            .map(|p| p as &dyn TransportPeer)
    }

    fn acceptor(&self, id: EntityId) -> Option<&dyn Acceptor> {
        self.entities
            .get(&id)?
            .tank
            .as_ref()
            .map(|t| t as &dyn Acceptor)
    }

    fn acceptor_mut(&mut self, id: EntityId) -> Option<&mut dyn Acceptor> {
        self.entities
            .get_mut(&id)?
            .tank
            .as_mut()
            .map(|t| t as &mut dyn Acceptor)
    }
}
