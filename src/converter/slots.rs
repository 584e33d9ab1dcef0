use crate::spine_data::slot::Slot;

/// A slot that still carries the source depth it is ordered by.
#[derive(Clone, Debug)]
pub struct PendingSlot {
    pub slot: Slot,
    pub depth: i32,
}

/// Orders slots by ascending depth, keeping source order among equal depths,
/// and drops the depth.
pub fn sort_slots(mut pending: Vec<PendingSlot>) -> Vec<Slot> {
    pending.sort_by_key(|it| it.depth);
    pending.into_iter().map(|it| it.slot).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(name: &str, depth: i32) -> PendingSlot {
        PendingSlot {
            slot: Slot { name: name.into(), bone: name.into(), attachment: None },
            depth,
        }
    }

    #[test]
    fn sorts_by_depth_stably() {
        let sorted = sort_slots(vec![
            pending("c", 2),
            pending("a", 0),
            pending("d", 2),
            pending("b", -1),
            pending("e", 0),
        ]);
        let names: Vec<_> = sorted.iter().map(|it| it.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "e", "c", "d"]);
    }

    #[test]
    fn equal_depths_keep_source_order() {
        let sorted = sort_slots((0..16).map(|i| pending(&i.to_string(), 7)).collect());
        let names: Vec<_> = sorted.iter().map(|it| it.name.clone()).collect();
        let expected: Vec<_> = (0..16).map(|i| i.to_string()).collect();
        assert_eq!(names, expected);
    }
}
