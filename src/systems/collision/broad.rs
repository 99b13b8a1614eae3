use super::types::{BroadHit, CollidableBox};

/// Interval overlap on all three axes; touching bounds count as overlap.
#[inline]
pub fn broad_overlap(a: &CollidableBox, b: &CollidableBox) -> bool {
    a.to_aabb().overlaps(&b.to_aabb())
}

/// Every `"collision"` box (other than the player's own) overlapping the player.
///
/// Output keeps input order. Linear in the number of boxes, which is fine
/// for an arena of a few dozen props.
pub fn broad_sweep(collidables: &[CollidableBox], player: &CollidableBox) -> Vec<BroadHit> {
    collidables
        .iter()
        .enumerate()
        .filter(|(_, bbox)| bbox.is_collision() && bbox.id != player.id)
        .filter(|(_, bbox)| broad_overlap(player, bbox))
        .map(|(index, bbox)| BroadHit { id: bbox.id, index })
        .collect()
}
