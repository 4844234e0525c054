mod resolve_and_record;

pub use resolve_and_record::LookupDomainUseCase;
