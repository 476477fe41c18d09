mod error;
mod resolve;
mod transport;

pub use error::ResolveError;
pub use resolve::{next_step, Resolver, Step, DNS_PORT};
pub use transport::{Transport, UdpTransport, DEFAULT_RECEIVE_BUFFER_SIZE};
