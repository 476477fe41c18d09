use configuration::LookupConfiguration;
use dns::RecordData;
use domain_name_query_types::NameQuery;
use domain_name_resolver::{ResolveError, Resolver, UdpTransport};

pub async fn resolve_domain(
    name_query: &NameQuery,
    config: &LookupConfiguration,
) -> Result<RecordData, ResolveError> {
    let transport = UdpTransport::new(
        config.transport.receive_buffer_size,
        config.transport.timeout(),
    );
    let mut resolver = Resolver::new(transport, &config.resolver);

    resolver.resolve(&name_query.name, name_query.q_type).await
}
