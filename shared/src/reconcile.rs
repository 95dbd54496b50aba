use crate::filter::VisibleSet;

/// Which of the two feature collections an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Colonies,
    Arrows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerOp {
    Attach(usize),
    Detach(usize),
}

/// Anything that can show or hide a single feature by index.
pub trait RenderSurface {
    fn attach(&mut self, collection: Collection, index: usize);
    fn detach(&mut self, collection: Collection, index: usize);
}

/// Operations that turn a surface showing `previous` into one showing `next`.
///
/// Detaches come first, then attaches, each in ascending index order.
pub fn diff(previous: &VisibleSet, next: &VisibleSet) -> Vec<LayerOp> {
    let detaches = previous.difference(next).map(LayerOp::Detach);
    let attaches = next.difference(previous).map(LayerOp::Attach);
    detaches.chain(attaches).collect()
}

pub fn apply_ops<S: RenderSurface + ?Sized>(surface: &mut S, collection: Collection, ops: &[LayerOp]) {
    for op in ops {
        match *op {
            LayerOp::Attach(index) => surface.attach(collection, index),
            LayerOp::Detach(index) => surface.detach(collection, index),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::BTreeSet;

    use super::{Collection, RenderSurface};

    /// In-memory surface that records what is currently attached.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub colonies: BTreeSet<usize>,
        pub arrows: BTreeSet<usize>,
        pub calls: usize,
    }

    impl RecordingSurface {
        fn set(&mut self, collection: Collection) -> &mut BTreeSet<usize> {
            match collection {
                Collection::Colonies => &mut self.colonies,
                Collection::Arrows => &mut self.arrows,
            }
        }

        pub fn shown(&self, collection: Collection) -> Vec<usize> {
            match collection {
                Collection::Colonies => self.colonies.iter().copied().collect(),
                Collection::Arrows => self.arrows.iter().copied().collect(),
            }
        }
    }

    impl RenderSurface for RecordingSurface {
        fn attach(&mut self, collection: Collection, index: usize) {
            self.calls += 1;
            assert!(
                self.set(collection).insert(index),
                "{collection:?} {index} attached twice"
            );
        }

        fn detach(&mut self, collection: Collection, index: usize) {
            self.calls += 1;
            assert!(
                self.set(collection).remove(&index),
                "{collection:?} {index} detached while hidden"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSurface;
    use super::*;

    fn set(indices: &[usize]) -> VisibleSet {
        indices.iter().copied().collect()
    }

    #[test]
    fn diff_detaches_before_attaching() {
        let ops = diff(&set(&[0, 1, 4]), &set(&[1, 2, 3]));
        assert_eq!(
            ops,
            vec![
                LayerOp::Detach(0),
                LayerOp::Detach(4),
                LayerOp::Attach(2),
                LayerOp::Attach(3),
            ]
        );
    }

    #[test]
    fn diff_of_equal_sets_is_empty() {
        assert!(diff(&set(&[3, 5]), &set(&[3, 5])).is_empty());
    }

    #[test]
    fn applying_diff_moves_surface_between_sets() {
        let sets = [set(&[]), set(&[0, 2]), set(&[1]), set(&[0, 1, 2, 3]), set(&[])];
        let mut surface = RecordingSurface::default();
        for pair in sets.windows(2) {
            let ops = diff(&pair[0], &pair[1]);
            apply_ops(&mut surface, Collection::Arrows, &ops);
            assert_eq!(
                surface.shown(Collection::Arrows),
                pair[1].iter().collect::<Vec<_>>()
            );
            assert!(surface.colonies.is_empty());
        }
    }
}
