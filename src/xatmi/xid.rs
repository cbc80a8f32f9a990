/// XA transaction branch identifier.
///
/// A format id of `-1` marks the null xid, which is what the gateway sends on
/// every call since it never joins a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xid {
    pub format_id: i64,
    pub gtrid: Vec<u8>,
    pub bqual: Vec<u8>,
}

impl Xid {
    pub const NULL_FORMAT_ID: i64 = -1;

    pub fn null() -> Self {
        Self {
            format_id: Self::NULL_FORMAT_ID,
            gtrid: Vec::new(),
            bqual: Vec::new(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.format_id == Self::NULL_FORMAT_ID
    }
}

impl Default for Xid {
    fn default() -> Self {
        Self::null()
    }
}
