use num_enum::{IntoPrimitive, TryFromPrimitive};

/// XATMI error codes as reported in a service reply.
#[repr(i32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum ErrorState {
    Ok = 0,
    TpeBadDesc = 2,
    TpeBlock = 3,
    TpeInval = 4,
    TpeLimit = 5,
    /// No such service.
    TpeNoEnt = 6,
    TpeOs = 7,
    TpeProto = 9,
    TpeSvcErr = 10,
    TpeSvcFail = 11,
    TpeSystem = 12,
    /// The call exceeded its allotted time.
    TpeTime = 13,
    TpeTran = 14,
    TpGotSig = 15,
    TpeIType = 17,
    TpeOType = 18,
    TpeEvent = 22,
    TpeMatch = 23,
}

impl ErrorState {
    pub fn is_ok(self) -> bool {
        self == ErrorState::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_wire_codes() {
        assert_eq!(ErrorState::try_from(6), Ok(ErrorState::TpeNoEnt));
        assert_eq!(ErrorState::try_from(13), Ok(ErrorState::TpeTime));
        assert!(ErrorState::try_from(1).is_err());
        assert_eq!(i32::from(ErrorState::TpeSvcFail), 11);
    }
}
