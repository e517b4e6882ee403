//! Status state machines.
//!
//! Campaign and application moves honour the configured [`TransitionPolicy`];
//! milestone and payment moves are always checked against their graph.

use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    enums::status::{ApplicationStatus, CampaignStatus, MilestoneStatus, PaymentStatus},
    settings::TransitionPolicy,
};

/// Forward along draft, active, in_progress, completed (skipping allowed);
/// cancelled from any non-terminal state. Re-writing the current status is a no-op.
pub fn campaign(
    policy: TransitionPolicy,
    from: CampaignStatus,
    to: CampaignStatus,
) -> DomainResult<()> {
    if policy == TransitionPolicy::Permissive || from == to {
        return Ok(());
    }
    let allowed = !from.is_terminal()
        && match (from.rank(), to.rank()) {
            (_, None) => true,
            (Some(f), Some(t)) => t > f,
            (None, Some(_)) => false,
        };
    check("campaign", allowed, from, to)
}

/// Brand decision on an application.
pub fn application_review(
    policy: TransitionPolicy,
    from: ApplicationStatus,
    to: ApplicationStatus,
) -> DomainResult<()> {
    use ApplicationStatus::*;

    if policy == TransitionPolicy::Permissive {
        return Ok(());
    }
    let allowed = matches!(
        (from, to),
        (Pending, Approved | Rejected | Negotiating) | (Negotiating, Approved | Rejected)
    );
    check("application", allowed, from, to)
}

/// Applicant pulling an open application.
pub fn application_withdraw(
    policy: TransitionPolicy,
    from: ApplicationStatus,
) -> DomainResult<()> {
    use ApplicationStatus::*;

    if policy == TransitionPolicy::Permissive {
        return Ok(());
    }
    check(
        "application",
        matches!(from, Pending | Negotiating),
        from,
        Withdrawn,
    )
}

pub fn milestone(from: MilestoneStatus, to: MilestoneStatus) -> DomainResult<()> {
    use MilestoneStatus::*;

    let allowed = matches!(
        (from, to),
        (Pending | Rejected, InProgress)
            | (InProgress, Completed)
            | (Completed, Approved | Rejected)
    );
    check("milestone", allowed, from, to)
}

pub fn payment(from: PaymentStatus, to: PaymentStatus) -> DomainResult<()> {
    use PaymentStatus::*;

    let allowed = matches!(
        (from, to),
        (Pending, Escrowed)
            | (Escrowed, Released | Refunded | Disputed)
            | (Disputed, Released | Refunded)
    );
    check("payment", allowed, from, to)
}

#[inline]
fn check<S: ToString>(entity: &'static str, allowed: bool, from: S, to: S) -> DomainResult<()> {
    if allowed {
        Ok(())
    } else {
        Err(DomainError::transition(entity, from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TransitionPolicy::{Permissive, Strict};

    #[test]
    fn test_campaign_strict_forward_and_cancel() {
        use CampaignStatus::*;
        assert!(campaign(Strict, Draft, Active).is_ok());
        assert!(campaign(Strict, Draft, Completed).is_ok());
        assert!(campaign(Strict, InProgress, Cancelled).is_ok());
        assert!(campaign(Strict, Active, Active).is_ok());
    }

    #[test]
    fn test_campaign_strict_rejects_backward_and_terminal_exit() {
        use CampaignStatus::*;
        let err = campaign(Strict, Active, Draft).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidTransition { entity: "campaign", ref from, ref to }
                if from == "active" && to == "draft"
        ));
        assert!(campaign(Strict, Completed, Cancelled).is_err());
        assert!(campaign(Strict, Cancelled, Active).is_err());
    }

    #[test]
    fn test_campaign_permissive_accepts_anything() {
        use CampaignStatus::*;
        assert!(campaign(Permissive, Active, Draft).is_ok());
        assert!(campaign(Permissive, Cancelled, Active).is_ok());
    }

    #[test]
    fn test_application_graph() {
        use ApplicationStatus::*;
        assert!(application_review(Strict, Pending, Negotiating).is_ok());
        assert!(application_review(Strict, Negotiating, Approved).is_ok());
        assert!(application_review(Strict, Approved, Rejected).is_err());
        assert!(application_review(Strict, Pending, Withdrawn).is_err());
        assert!(application_review(Permissive, Approved, Pending).is_ok());

        assert!(application_withdraw(Strict, Pending).is_ok());
        assert!(application_withdraw(Strict, Approved).is_err());
    }

    #[test]
    fn test_milestone_graph() {
        use MilestoneStatus::*;
        assert!(milestone(Pending, InProgress).is_ok());
        assert!(milestone(Rejected, InProgress).is_ok());
        assert!(milestone(InProgress, Completed).is_ok());
        assert!(milestone(Completed, Approved).is_ok());
        assert!(milestone(Pending, Completed).is_err());
        assert!(milestone(Approved, Rejected).is_err());
    }

    #[test]
    fn test_payment_graph() {
        use PaymentStatus::*;
        assert!(payment(Pending, Escrowed).is_ok());
        assert!(payment(Escrowed, Disputed).is_ok());
        assert!(payment(Disputed, Refunded).is_ok());
        assert!(payment(Pending, Released).is_err());
        assert!(payment(Released, Refunded).is_err());
        assert!(payment(Disputed, Escrowed).is_err());
    }
}
