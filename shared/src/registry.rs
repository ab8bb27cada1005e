//! Ordered, append-only record of (mesh, body) pairs.
//!
//! Meshes and bodies live side by side in one `Vec`, so there is no way for the two
//! to drift out of step: every mesh has exactly one body and vice versa.

use rapier3d::prelude::RigidBodyHandle;

/// What a pair represents. Used for logging and by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProxyKind {
    Ground,
    Sphere,
    Box,
}

/// A visual mesh and the simulation body that owns its pose.
#[derive(Clone, Debug)]
pub struct ProxyPair<M> {
    pub kind: ProxyKind,
    pub mesh: M,
    pub body: RigidBodyHandle,
}

#[derive(Clone, Debug)]
pub struct Registry<M> {
    pairs: Vec<ProxyPair<M>>,
}

impl<M> Default for Registry<M> {
    fn default() -> Self {
        Self { pairs: Vec::new() }
    }
}

impl<M> Registry<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair and return its index. Pairs are never removed, so the index is stable.
    pub fn push(&mut self, pair: ProxyPair<M>) -> usize {
        self.pairs.push(pair);
        self.pairs.len() - 1
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProxyPair<M>> {
        self.pairs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProxyPair<M>> {
        self.pairs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ProxyPair<M>> {
        self.pairs.iter_mut()
    }

    pub fn meshes(&self) -> impl Iterator<Item = &M> {
        self.pairs.iter().map(|pair| &pair.mesh)
    }

    pub fn bodies(&self) -> impl Iterator<Item = RigidBodyHandle> + '_ {
        self.pairs.iter().map(|pair| pair.body)
    }

    pub fn count_of(&self, kind: ProxyKind) -> usize {
        self.pairs.iter().filter(|pair| pair.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(i: u32) -> RigidBodyHandle {
        RigidBodyHandle::from_raw_parts(i, 0)
    }

    #[test]
    fn push_returns_insertion_index_and_keeps_order() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        for (i, name) in ["ground", "a", "b"].into_iter().enumerate() {
            let index = registry.push(ProxyPair {
                kind: if i == 0 { ProxyKind::Ground } else { ProxyKind::Box },
                mesh: name,
                body: handle(i as u32),
            });
            assert_eq!(index, i);
        }

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.meshes().copied().collect::<Vec<_>>(), ["ground", "a", "b"]);
        assert_eq!(
            registry.bodies().collect::<Vec<_>>(),
            [handle(0), handle(1), handle(2)]
        );
        assert_eq!(registry.count_of(ProxyKind::Box), 2);
        assert_eq!(registry.get(1).map(|pair| pair.mesh), Some("a"));
        assert!(registry.get(3).is_none());
    }
}
