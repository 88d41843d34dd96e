//! In-memory representation of a classic CAN 2.0 frame as it crosses the
//! bridge: identifier, up to eight payload bytes, and the remote flag.
use embedded_can::{Id, StandardId};

#[derive(Clone, Debug, PartialEq, Eq)]
/// One CAN bus message. Always fully constructed before it is published to
/// the pipeline; there is no partially-filled state.
pub struct CanFrame {
    /// Standard (11-bit) or extended (29-bit) identifier.
    pub id: Id,
    /// Payload buffer. Bytes past `len` are zero.
    pub data: [u8; 8],
    /// Number of valid payload bytes (0 to 8).
    pub len: usize,
    /// Remote transmission request flag.
    pub remote: bool,
}

impl CanFrame {
    /// Build a data frame. `None` if the payload exceeds eight bytes.
    pub fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        if data.len() > 8 {
            return None;
        }
        let mut buf = [0u8; 8];
        buf[..data.len()].copy_from_slice(data);
        Some(Self {
            id: id.into(),
            data: buf,
            len: data.len(),
            remote: false,
        })
    }

    /// Build a remote frame requesting `len` bytes. `None` if `len` > 8.
    pub fn new_remote(id: impl Into<Id>, len: usize) -> Option<Self> {
        if len > 8 {
            return None;
        }
        Some(Self {
            id: id.into(),
            data: [0u8; 8],
            len,
            remote: true,
        })
    }

    /// Raw numeric identifier: the 11-bit value for standard frames, the
    /// 29-bit value for extended ones.
    pub fn id_raw(&self) -> u32 {
        match self.id {
            Id::Standard(sid) => sid.as_raw() as u32,
            Id::Extended(eid) => eid.as_raw(),
        }
    }

    /// Valid payload bytes.
    pub fn data(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Payload as two little-endian 32-bit halves, the layout the serial
    /// record prints. Bytes past `len` read as zero.
    pub fn data32(&self) -> (u32, u32) {
        let lo = u32::from_le_bytes([self.data[0], self.data[1], self.data[2], self.data[3]]);
        let hi = u32::from_le_bytes([self.data[4], self.data[5], self.data[6], self.data[7]]);
        (lo, hi)
    }

    /// Placeholder value used only to initialize pool storage.
    pub(crate) fn zeroed() -> Self {
        Self {
            id: Id::Standard(StandardId::ZERO),
            data: [0u8; 8],
            len: 0,
            remote: false,
        }
    }
}

impl embedded_can::Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        CanFrame::new(id, data)
    }

    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        CanFrame::new_remote(id, dlc)
    }

    fn is_extended(&self) -> bool {
        matches!(self.id, Id::Extended(_))
    }

    fn is_remote_frame(&self) -> bool {
        self.remote
    }

    fn id(&self) -> Id {
        self.id
    }

    fn dlc(&self) -> usize {
        self.len
    }

    fn data(&self) -> &[u8] {
        &self.data[..self.len]
    }
}
