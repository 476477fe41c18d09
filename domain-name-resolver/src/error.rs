use dns::{DecodeError, EncodeError};
use domain_name_query_types::NameQuery;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("failed to encode query: {0}")]
    Encode(#[from] EncodeError),

    #[error("transport error with {server}: {source}")]
    Transport {
        server: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed response from {server}: {source}")]
    Decode {
        server: String,
        #[source]
        source: DecodeError,
    },

    #[error("no answer for {query} from {server}")]
    NoAnswer { query: NameQuery, server: String },

    #[error("gave up on {query} after {hops} queries")]
    TooManyHops { query: NameQuery, hops: u32 },

    #[error("nameserver lookups for {0} nested too deeply")]
    ReferralTooDeep(NameQuery),
}
