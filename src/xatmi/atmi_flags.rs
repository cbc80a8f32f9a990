use std::fmt;
use std::ops::BitOr;

/// XATMI call flags.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct AtmiFlags(u64);

impl AtmiFlags {
    pub const NOFLAG: AtmiFlags = AtmiFlags(0);
    pub const TPNOBLOCK: AtmiFlags = AtmiFlags(0x0000_0001);
    pub const TPSIGRSTRT: AtmiFlags = AtmiFlags(0x0000_0002);
    pub const TPNOREPLY: AtmiFlags = AtmiFlags(0x0000_0004);
    pub const TPNOTRAN: AtmiFlags = AtmiFlags(0x0000_0008);
    pub const TPTRAN: AtmiFlags = AtmiFlags(0x0000_0010);
    pub const TPNOTIME: AtmiFlags = AtmiFlags(0x0000_0020);

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn from_bits(bits: u64) -> Self {
        AtmiFlags(bits)
    }

    pub const fn contains(self, other: AtmiFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for AtmiFlags {
    type Output = AtmiFlags;

    fn bitor(self, rhs: AtmiFlags) -> AtmiFlags {
        AtmiFlags(self.0 | rhs.0)
    }
}

impl fmt::Debug for AtmiFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AtmiFlags({:#x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_flags_contain_their_parts() {
        let flags = AtmiFlags::TPNOTRAN | AtmiFlags::TPNOTIME;
        assert!(flags.contains(AtmiFlags::TPNOTRAN));
        assert!(flags.contains(AtmiFlags::TPNOTIME));
        assert!(!flags.contains(AtmiFlags::TPNOREPLY));
        assert!(flags.contains(AtmiFlags::NOFLAG));
    }
}
