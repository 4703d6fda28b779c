//! Plain-text summary of a finished run.

use std::collections::BTreeMap;

use tessera_worldgen::{EntityCatalog, GeneratedWorld};

/// Seed, role, per-biome coverage, spawned objects by name, and warnings.
pub fn summary(world: &GeneratedWorld, catalog: &EntityCatalog, authority: bool) -> String {
    let stats = world.stats();
    let bounds = world.bounds();
    let role = if authority { "authority" } else { "replica" };

    let mut lines = vec![
        format!(
            "seed {} ({role}), {}x{} cells",
            world.seed(),
            bounds.width,
            bounds.height
        ),
        format!("stamped: {}", stats.stamped),
    ];
    for (name, cells) in &stats.per_biome {
        let centre = world
            .biome_center(name)
            .map_or_else(|| "-".to_string(), |c| format!("({}, {})", c.x, c.y));
        lines.push(format!("biome {name}: {cells} cells, centre {centre}"));
    }

    if authority {
        lines.push(format!("objects: {}", stats.objects));
        let names = world.spawned().iter().map(|spawned| {
            catalog
                .resolve_object(spawned.object)
                .map_or_else(|| format!("object#{}", spawned.object.0), |e| e.name.clone())
        });
        lines.extend(count_by(names).into_iter().map(|(name, count)| format!("  {name}: {count}")));
    }

    if !world.warnings().is_empty() {
        lines.push(format!("warnings: {}", world.warnings().len()));
        lines.extend(world.warnings().iter().map(|warning| format!("  {warning}")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Occurrences of each key, ordered by key.
fn count_by<K: Ord>(keys: impl IntoIterator<Item = K>) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}
