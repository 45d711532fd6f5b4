use crate::{
    error::{Error, Result},
    interfaces::PortProbe,
    services::TcpBindProbe,
};

/// IANA dynamic/private range
pub const EPHEMERAL_PORT_START: u16 = 49152;
pub const EPHEMERAL_PORT_END: u16 = 65535;

/// Finds, remembers and reuses the port a debug server listens on
pub struct PortAllocator<P: PortProbe = TcpBindProbe> {
    probe: P,
    port_override: Option<u16>,
    cached: Option<u16>,
}

impl PortAllocator<TcpBindProbe> {
    pub fn new(port_override: Option<u16>) -> Self {
        Self::with_probe(TcpBindProbe, port_override)
    }
}

impl<P: PortProbe> PortAllocator<P> {
    pub fn with_probe(probe: P, port_override: Option<u16>) -> Self {
        Self {
            probe,
            port_override,
            cached: None,
        }
    }

    pub fn cached(&self) -> Option<u16> {
        self.cached
    }

    /// Port for the next debug session.
    ///
    /// An explicit override always wins. With `use_cache` the previous port is
    /// reused without probing; otherwise the ephemeral range is scanned upwards
    /// and the first bindable port is cached and returned.
    pub fn allocate(&mut self, use_cache: bool) -> Result<u16> {
        if let Some(port) = self.port_override {
            tracing::debug!("Using configured debug port {port}");
            self.cached = Some(port);
            return Ok(port);
        }

        if use_cache {
            if let Some(port) = self.cached {
                return Ok(port);
            }
        }

        let port = (EPHEMERAL_PORT_START..=EPHEMERAL_PORT_END)
            .find(|&port| self.probe.is_free(port))
            .ok_or(Error::ResourceExhausted {
                start: EPHEMERAL_PORT_START,
                end: EPHEMERAL_PORT_END,
            })?;

        tracing::debug!("Allocated debug port {port}");
        self.cached = Some(port);
        Ok(port)
    }
}
