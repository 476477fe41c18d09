use std::future::Future;
use std::num::NonZeroU32;
use std::pin::Pin;
use configuration::{NsResolution, ResolverConfiguration};
use dns::{QueryBuilder, RecordData, ResponseMessage};
use domain_name_query_types::{NameQuery, QType};
use crate::error::ResolveError;
use crate::transport::Transport;

pub const DNS_PORT: u16 = 53;

type WalkFuture<'a> = Pin<Box<dyn Future<Output = Result<RecordData, ResolveError>> + Send + 'a>>;

/// What a decoded response tells the resolver to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Answered(RecordData),
    FollowGlueIp(String),
    FollowNsName(String),
    NoAnswer,
}

/// Picks the next step from a response: the first answer of the requested
/// type, else the first glue address (authority section, then additional),
/// else the first nameserver name in the authority section.
pub fn next_step(resp: &ResponseMessage, q_type: QType) -> Step {
    if let Some(answer) = resp.first_answer(q_type) {
        return Step::Answered(answer.rdata().clone());
    }

    let glue = resp
        .first_authority(QType::A)
        .or_else(|| resp.first_additional(QType::A));
    if let Some(glue) = glue {
        return Step::FollowGlueIp(glue.rdata().to_string());
    }

    if let Some(ns) = resp.first_authority(QType::Ns) {
        return Step::FollowNsName(ns.rdata().to_string());
    }

    Step::NoAnswer
}

/// Iterative resolver: starts at the root server and follows referrals
/// one query at a time until an answer shows up.
pub struct Resolver<T> {
    transport: T,
    queries: QueryBuilder,
    root_server: String,
    max_hops: Option<NonZeroU32>,
    max_referral_depth: u32,
    ns_resolution: NsResolution,
}

impl<T: Transport> Resolver<T> {
    pub fn new(transport: T, config: &ResolverConfiguration) -> Self {
        let queries = match config.id_seed {
            Some(seed) => QueryBuilder::with_seed(seed),
            None => QueryBuilder::new(),
        };

        Self {
            transport,
            queries,
            root_server: config.root_server.clone(),
            max_hops: config.max_hops,
            max_referral_depth: config.max_referral_depth,
            ns_resolution: config.ns_resolution,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn resolve(&mut self, domain: &str, q_type: QType) -> Result<RecordData, ResolveError> {
        let query = NameQuery::new(domain, q_type);
        self.walk(&query, 0).await
    }

    // 迭代查询需要为 NS 名字再走一遍，所以返回装箱的 future
    fn walk<'a>(&'a mut self, query: &'a NameQuery, depth: u32) -> WalkFuture<'a> {
        Box::pin(async move {
            let mut server = self.root_server.clone();
            let mut hops: u32 = 0;

            loop {
                if let Some(max_hops) = self.max_hops {
                    if hops >= max_hops.get() {
                        return Err(ResolveError::TooManyHops {
                            query: query.clone(),
                            hops,
                        });
                    }
                }
                hops += 1;

                let resp = self.query_server(&server, query).await?;

                match next_step(&resp, query.q_type) {
                    Step::Answered(data) => {
                        tracing::info!("{} resolved to {} by {}", query, data, server);
                        return Ok(data);
                    }
                    Step::FollowGlueIp(ip) => {
                        tracing::debug!("{} referred {} to glue address {}", server, query, ip);
                        server = format!("{}:{}", ip, DNS_PORT);
                    }
                    Step::FollowNsName(ns_name) => {
                        tracing::debug!("{} referred {} to nameserver {}", server, query, ns_name);
                        server = match self.ns_resolution {
                            NsResolution::Host => format!("{}:{}", ns_name, DNS_PORT),
                            NsResolution::Iterative => {
                                if depth >= self.max_referral_depth {
                                    return Err(ResolveError::ReferralTooDeep(query.clone()));
                                }
                                let ns_query = NameQuery::a_record(&ns_name);
                                let addr = self.walk(&ns_query, depth + 1).await?;
                                format!("{}:{}", addr, DNS_PORT)
                            }
                        };
                    }
                    Step::NoAnswer => {
                        return Err(ResolveError::NoAnswer {
                            query: query.clone(),
                            server,
                        });
                    }
                }
            }
        })
    }

    async fn query_server(&mut self, server: &str, query: &NameQuery) -> Result<ResponseMessage, ResolveError> {
        tracing::info!("querying {} from {}", query, server);

        let request_bytes = self.queries.build(&query.name, query.q_type)?;

        let response_bytes = self
            .transport
            .send_and_receive(server, &request_bytes)
            .await
            .map_err(|source| ResolveError::Transport {
                server: server.to_string(),
                source,
            })?;

        let resp = dns::decode_response(&response_bytes).map_err(|source| ResolveError::Decode {
            server: server.to_string(),
            source,
        })?;
        tracing::debug!(
            "response from {}: {} answers, {} authority, {} additional",
            server,
            resp.answers().len(),
            resp.authority().len(),
            resp.additional().len()
        );

        Ok(resp)
    }
}
