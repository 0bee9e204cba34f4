//! Observability hook for registry operations.
//!
//! The service reports every outcome here instead of logging through ambient
//! state; [`TracingObserver`] is the production implementation.

use crate::domain::DomainError;

/// Registry operations reported to the observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    List,
    Get,
    RegionMembers,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::List => "list",
            Operation::Get => "get",
            Operation::RegionMembers => "region_members",
        }
    }

    pub fn is_read(&self) -> bool {
        matches!(
            self,
            Operation::List | Operation::Get | Operation::RegionMembers
        )
    }
}

/// Key identifying fields of one operation call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationContext {
    pub uuid: Option<String>,
    pub vat: Option<String>,
    pub region_id: Option<i32>,
}

pub trait RegistryObserver: Send + Sync {
    fn on_success(&self, op: Operation, ctx: &OperationContext);

    /// Called before the error is returned to the caller. Must not swallow it.
    fn on_failure(&self, op: Operation, ctx: &OperationContext, error: &DomainError);
}

/// Emits `tracing` events with the operation fields attached
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RegistryObserver for TracingObserver {
    fn on_success(&self, op: Operation, ctx: &OperationContext) {
        if op.is_read() {
            tracing::debug!(
                operation = op.as_str(),
                uuid = ctx.uuid.as_deref().unwrap_or(""),
                region_id = ?ctx.region_id,
                "Teacher {} succeeded",
                op.as_str()
            );
            return;
        }

        tracing::info!(
            operation = op.as_str(),
            uuid = ctx.uuid.as_deref().unwrap_or(""),
            vat = ctx.vat.as_deref().unwrap_or(""),
            region_id = ?ctx.region_id,
            "Teacher {} succeeded",
            op.as_str()
        );
    }

    fn on_failure(&self, op: Operation, ctx: &OperationContext, error: &DomainError) {
        if error.is_recoverable() {
            tracing::warn!(
                operation = op.as_str(),
                uuid = ctx.uuid.as_deref().unwrap_or(""),
                vat = ctx.vat.as_deref().unwrap_or(""),
                region_id = ?ctx.region_id,
                kind = error.kind(),
                "Teacher {} failed: {}",
                op.as_str(),
                error
            );
        } else {
            tracing::error!(
                operation = op.as_str(),
                uuid = ctx.uuid.as_deref().unwrap_or(""),
                vat = ctx.vat.as_deref().unwrap_or(""),
                region_id = ?ctx.region_id,
                kind = error.kind(),
                "Teacher {} failed: {}",
                op.as_str(),
                error
            );
        }
    }
}
