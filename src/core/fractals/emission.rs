/// Which recursion levels a geometric generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emission {
    /// Every level, parent before children, so the renderer layers the
    /// coarser shapes underneath the finer ones.
    #[default]
    Layered,
    /// Only the `depth == 0` units: the finished figure.
    LeavesOnly,
}

impl Emission {
    #[must_use]
    pub const fn emits(self, depth: u32) -> bool {
        match self {
            Self::Layered => true,
            Self::LeavesOnly => depth == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layered_emits_every_level() {
        assert!((0..=7).all(|d| Emission::Layered.emits(d)));
    }

    #[test]
    fn test_leaves_only_emits_depth_zero() {
        assert!(Emission::LeavesOnly.emits(0));
        assert!(!(1..=7).any(|d| Emission::LeavesOnly.emits(d)));
    }
}
