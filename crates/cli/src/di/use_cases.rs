use super::Repositories;
use dnsaudit_application::ports::AddressResolver;
use dnsaudit_application::use_cases::{GetHistoryUseCase, LookupDomainUseCase};
use std::sync::Arc;

pub struct UseCases {
    pub lookup: Arc<LookupDomainUseCase>,
    pub get_history: Arc<GetHistoryUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, resolver: Arc<dyn AddressResolver>) -> Self {
        Self {
            lookup: Arc::new(LookupDomainUseCase::new(resolver, repos.history.clone())),
            get_history: Arc::new(GetHistoryUseCase::new(repos.history.clone())),
        }
    }
}
