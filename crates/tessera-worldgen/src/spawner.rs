//! Object spawner: density-based placement of at most one object per painted
//! cell, run only by the session authority.

use glam::IVec2;
use hashbrown::HashSet;

use crate::biome::{BiomeId, ObjectRef};
use crate::context::GenerationContext;
use crate::sink::{ObjectHandle, ObjectSink};

/// Cells that already hold a spawned object in the current run.
#[derive(Clone, Debug, Default)]
pub struct OccupiedSet {
    cells: HashSet<IVec2>,
}

impl OccupiedSet {
    /// Mark `coord` occupied. Returns `false` if it already was.
    pub fn insert(&mut self, coord: IVec2) -> bool {
        self.cells.insert(coord)
    }

    pub fn contains(&self, coord: IVec2) -> bool {
        self.cells.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// An object placed by the spawner and acknowledged by the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnedObject {
    pub coord: IVec2,
    pub object: ObjectRef,
    pub biome: BiomeId,
    /// Index of the rule that won the cell within the biome's spawn list.
    pub rule: usize,
    pub handle: ObjectHandle,
}

/// Roll spawn rules for every painted cell and emit placements to `sink`.
///
/// Cells are visited in row-major order. For each cell the biome's rules are
/// tried in list order: a rule whose allow-list excludes the cell's tile, or
/// whose object is missing, is skipped without consuming a draw; otherwise
/// one float is drawn and the rule fires if it is below the density. The
/// first rule to fire claims the cell.
pub fn spawn_objects(ctx: &mut GenerationContext, sink: &mut dyn ObjectSink) -> Vec<SpawnedObject> {
    let mut spawned = Vec::new();

    for coord in ctx.bounds.iter() {
        let Some(tile) = ctx.painted.get(coord) else {
            continue;
        };
        if ctx.occupied.contains(coord) {
            continue;
        }

        let biome_id = ctx.resolve_biome(coord);
        let biome = ctx.registry.get(biome_id);

        for (index, rule) in biome.spawn_rules.iter().enumerate() {
            if !rule.allows(&tile.name) {
                continue;
            }
            let Some(object) = rule.object else {
                continue;
            };
            if ctx.rng.next_float01() >= rule.density {
                continue;
            }

            ctx.occupied.insert(coord);
            let handle = sink.spawn_object(coord, object);
            spawned.push(SpawnedObject {
                coord,
                object,
                biome: biome_id,
                rule: index,
                handle,
            });
            break;
        }
    }

    tracing::debug!(spawned = spawned.len(), "objects spawned");
    spawned
}
