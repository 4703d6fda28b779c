//! Output interfaces: where painted tiles and spawned objects go.
//!
//! The generator never stores rendering state or talks to the network
//! itself. Tiles are written to a [`TileSink`] and authoritative object
//! placements to an [`ObjectSink`]; adapters for a tilemap, an RPC layer, or a
//! message queue live outside this crate.

use glam::IVec2;
use hashbrown::HashMap;

use crate::biome::{ObjectRef, TileRef};

/// Write-only destination for painted tiles.
///
/// Each coordinate is written at most once per run.
pub trait TileSink {
    fn set_tile(&mut self, coord: IVec2, tile: TileRef);
}

impl<F> TileSink for F
where
    F: FnMut(IVec2, TileRef),
{
    fn set_tile(&mut self, coord: IVec2, tile: TileRef) {
        self(coord, tile)
    }
}

/// Handle returned by an [`ObjectSink`] for an instantiated object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(pub u64);

/// Destination for authoritative object placements.
///
/// Implementations are expected to deliver each placement to every peer.
pub trait ObjectSink {
    fn spawn_object(&mut self, coord: IVec2, object: ObjectRef) -> ObjectHandle;
}

impl<F> ObjectSink for F
where
    F: FnMut(IVec2, ObjectRef) -> ObjectHandle,
{
    fn spawn_object(&mut self, coord: IVec2, object: ObjectRef) -> ObjectHandle {
        self(coord, object)
    }
}

/// Whether this peer decides object placement for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Authority {
    /// Runs the object spawner and broadcasts placements.
    Authoritative,
    /// Generates terrain only; placements arrive from the authority.
    Replica,
}

impl Authority {
    pub fn is_authoritative(self) -> bool {
        self == Authority::Authoritative
    }
}

impl From<bool> for Authority {
    fn from(is_authority: bool) -> Self {
        if is_authority {
            Authority::Authoritative
        } else {
            Authority::Replica
        }
    }
}

/// In-memory tile sink, mostly for tools and tests.
#[derive(Clone, Debug, Default)]
pub struct TileBuffer {
    tiles: HashMap<IVec2, TileRef>,
    writes: usize,
}

impl TileBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: IVec2) -> Option<TileRef> {
        self.tiles.get(&coord).copied()
    }

    /// Number of distinct coordinates written.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Total `set_tile` calls, including repeated coordinates.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl TileSink for TileBuffer {
    fn set_tile(&mut self, coord: IVec2, tile: TileRef) {
        self.writes += 1;
        self.tiles.insert(coord, tile);
    }
}

/// Object sink that records placements and hands out sequential handles.
#[derive(Clone, Debug, Default)]
pub struct PlacementLog {
    placements: Vec<(IVec2, ObjectRef)>,
}

impl PlacementLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements in the order they were received.
    pub fn placements(&self) -> &[(IVec2, ObjectRef)] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl ObjectSink for PlacementLog {
    fn spawn_object(&mut self, coord: IVec2, object: ObjectRef) -> ObjectHandle {
        self.placements.push((coord, object));
        ObjectHandle(self.placements.len() as u64 - 1)
    }
}
