use thiserror::Error;

/// A host value reached a table that was supposed to cover it.
///
/// These are bugs in the adapter (or a host newer than its tables), never
/// guest-recoverable conditions: guessing a canonical code instead could
/// report a denial as success.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("host error number {code} has no canonical errno on {platform}")]
    UnknownErrno { platform: &'static str, code: i32 },
    #[error("name resolution error {code} has no canonical errno on {platform}")]
    UnknownNameResolutionError { platform: &'static str, code: i32 },
    #[error("seek whence {raw} is not one of SET, CUR or END")]
    InvalidWhence { raw: u8 },
}

/// Stops the current operation on a contract violation.
///
/// Panics after logging; whether that is request- or process-fatal is up to
/// the embedder's panic strategy.
#[cold]
#[track_caller]
pub fn contract_violation(violation: ContractViolation) -> ! {
    tracing::error!(%violation, "host adapter contract violated");
    panic!("host adapter contract violated: {violation}");
}
