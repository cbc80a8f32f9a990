use crate::buffer::ServiceBuffer;
use crate::utils::generate_correlation_id;
use crate::xatmi::{AtmiFlags, Xid};
use uuid::Uuid;

/// A call to a named service. Created once per inbound request and never
/// modified afterwards; all fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCallRequestMessage {
    correlation_id: Uuid,
    service_name: String,
    service_buffer: ServiceBuffer,
    xatmi_flags: AtmiFlags,
    xid: Xid,
}

impl ServiceCallRequestMessage {
    /// A request for `service_name` with a fresh correlation id, `TPNOTRAN`
    /// and the null xid.
    pub fn new(service_name: impl Into<String>, service_buffer: ServiceBuffer) -> Self {
        Self {
            correlation_id: generate_correlation_id(),
            service_name: service_name.into(),
            service_buffer,
            xatmi_flags: AtmiFlags::TPNOTRAN,
            xid: Xid::null(),
        }
    }

    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn service_buffer(&self) -> &ServiceBuffer {
        &self.service_buffer
    }

    pub fn xatmi_flags(&self) -> AtmiFlags {
        self.xatmi_flags
    }

    pub fn xid(&self) -> &Xid {
        &self.xid
    }
}
