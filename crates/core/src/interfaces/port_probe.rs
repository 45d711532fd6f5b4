/// Tests whether a local TCP port can be bound right now
pub trait PortProbe {
    fn is_free(&self, port: u16) -> bool;
}

impl<T: PortProbe + ?Sized> PortProbe for Box<T> {
    fn is_free(&self, port: u16) -> bool {
        (**self).is_free(port)
    }
}
