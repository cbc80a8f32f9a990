use num_enum::{IntoPrimitive, TryFromPrimitive};

/// What the service itself returned (`tpreturn`).
#[repr(i32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum ServiceReturnState {
    TpFail = 0x0001,
    TpSuccess = 0x0002,
}
