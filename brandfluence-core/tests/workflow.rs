mod common;

use brandfluence_core::service::*;
use brandfluence_error::domain::DomainError;
use brandfluence_models::{
    domain::prelude::{
        CampaignListParams, CampaignMetrics, CampaignPatch, MilestonePaymentConfirmation,
        MilestoneProof, MilestoneReview, NewApplication, NewMilestone, NewPayment, NewTask,
        PaymentStatusChange, TaskListParams, TaskPatch,
    },
    entities::prelude::StringList,
    enums::{
        common::PaymentConfirmation,
        status::{CampaignStatus, MilestoneStatus, PaymentStatus, TaskStatus},
    },
    settings::TransitionPolicy,
};
use brandfluence_repository::{
    CampaignScope, CampaignRepository, ContentRepository, DealApplicationRepository,
    MilestoneRepository, PaymentRepository, TaskFilter, TaskRepository,
};
use common::*;
use serde_json::json;

fn status(to: CampaignStatus) -> CampaignPatch {
    CampaignPatch {
        status: Some(to),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_duplicate_profile_is_conflict() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let data = serde_json::from_value(json!({ "company_name": "Acme again" })).unwrap();
    let err = BrandService::create(&ctx, &brand, data).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn test_budget_must_be_positive() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    for budget in [0.0, -10.0] {
        let err = CampaignService::create(&ctx, &brand, new_campaign(budget))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)), "{budget}");
    }
}

#[tokio::test]
async fn test_strict_policy_rejects_backward_status() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;

    let active = CampaignService::update(&ctx, &brand, campaign.id, status(CampaignStatus::Active))
        .await
        .unwrap();
    assert_eq!(active.status, CampaignStatus::Active);

    let err = CampaignService::update(&ctx, &brand, campaign.id, status(CampaignStatus::Draft))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));

    let cancelled =
        CampaignService::update(&ctx, &brand, campaign.id, status(CampaignStatus::Cancelled))
            .await
            .unwrap();
    let err = CampaignService::update(&ctx, &brand, cancelled.id, status(CampaignStatus::Active))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));
}

#[tokio::test]
async fn test_permissive_policy_accepts_backward_status() {
    let ctx = setup_with(TransitionPolicy::Permissive).await;
    let brand = brand(&ctx, "acme").await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;
    CampaignService::update(&ctx, &brand, campaign.id, status(CampaignStatus::Active))
        .await
        .unwrap();
    let draft = CampaignService::update(&ctx, &brand, campaign.id, status(CampaignStatus::Draft))
        .await
        .unwrap();
    assert_eq!(draft.status, CampaignStatus::Draft);
}

#[tokio::test]
async fn test_campaign_listing_is_scoped() {
    let ctx = setup().await;
    let acme = brand(&ctx, "acme").await;
    let globex = brand(&ctx, "globex").await;
    let influencer = influencer(&ctx, "ivy", 500).await;
    campaign(&ctx, &acme, 1000.0).await;
    campaign(&ctx, &acme, 2000.0).await;
    campaign(&ctx, &globex, 500.0).await;

    let params = CampaignListParams::default();
    let mine = CampaignService::list(&ctx, Some(&acme), &params).await.unwrap();
    assert_eq!(mine.total, 2);
    assert!(mine.records.iter().all(|c| Some(c.brand_id) == acme.brand_id()));

    let everything = CampaignService::list(&ctx, None, &params).await.unwrap();
    assert_eq!(everything.total, 3);

    let assigned = CampaignService::list(&ctx, Some(&influencer), &params)
        .await
        .unwrap();
    assert_eq!(assigned.total, 0);
    assert!(assigned.records.is_empty());

    // brand account without a profile
    let bare = register(&ctx, "initech", brandfluence_models::enums::common::UserRole::Brand).await;
    let none = CampaignService::list(&ctx, Some(&bare), &params).await.unwrap();
    assert_eq!(none.total, 0);
}

#[tokio::test]
async fn test_task_patch_rejects_campaign_id() {
    let parsed = serde_json::from_value::<TaskPatch>(json!({ "campaign_id": 7 }));
    assert!(parsed.is_err());
    let parsed = serde_json::from_value::<TaskPatch>(json!({ "influencer_id": 7 }));
    assert!(parsed.is_err());
}

#[tokio::test]
async fn test_influencer_cannot_touch_foreign_task() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let ivy = influencer(&ctx, "ivy", 500).await;
    let max = influencer(&ctx, "max", 800).await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;
    let task = task(&ctx, &brand, campaign.id, &ivy).await;

    let move_card = TaskPatch {
        status: Some(TaskStatus::InProgress),
        ..Default::default()
    };
    let err = TaskService::update(&ctx, &max, task.id, move_card.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let moved = TaskService::update(&ctx, &ivy, task.id, move_card)
        .await
        .unwrap();
    assert_eq!(moved.status, TaskStatus::InProgress);

    let retitle = TaskPatch {
        title: Some("Mine now".into()),
        ..Default::default()
    };
    let err = TaskService::update(&ctx, &ivy, task.id, retitle)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let self_approve = TaskPatch {
        status: Some(TaskStatus::Approved),
        ..Default::default()
    };
    let err = TaskService::update(&ctx, &ivy, task.id, self_approve)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
}

#[tokio::test]
async fn test_review_stamps_task() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let ivy = influencer(&ctx, "ivy", 500).await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;
    let task = task(&ctx, &brand, campaign.id, &ivy).await;

    let submitted = TaskService::update(
        &ctx,
        &ivy,
        task.id,
        TaskPatch {
            status: Some(TaskStatus::InReview),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(submitted.submitted_at.is_some());

    let approved = TaskService::update(
        &ctx,
        &brand,
        task.id,
        TaskPatch {
            status: Some(TaskStatus::Approved),
            review_notes: Some(Some("Great cut".into())),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(approved.reviewer_id, Some(brand.user_id));
    assert!(approved.reviewed_at.is_some());
    assert_eq!(approved.review_notes.as_deref(), Some("Great cut"));
}

#[tokio::test]
async fn test_brand_task_listing_excludes_other_brands() {
    let ctx = setup().await;
    let acme = brand(&ctx, "acme").await;
    let globex = brand(&ctx, "globex").await;
    let ivy = influencer(&ctx, "ivy", 500).await;
    let acme_campaign = campaign(&ctx, &acme, 1000.0).await;
    let globex_campaign = campaign(&ctx, &globex, 1000.0).await;
    let acme_task = task(&ctx, &acme, acme_campaign.id, &ivy).await;
    let globex_task = task(&ctx, &globex, globex_campaign.id, &ivy).await;

    let params = TaskListParams::default();
    let tasks = TaskService::list(&ctx, &acme, &params).await.unwrap();
    assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![acme_task.id]);

    let tasks = TaskService::list(&ctx, &ivy, &params).await.unwrap();
    assert_eq!(tasks.len(), 2);

    let err = TaskService::get(&ctx, &acme, globex_task.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    // brands cannot file tasks against someone else's campaign
    let data: NewTask = serde_json::from_value(json!({
        "campaign_id": globex_campaign.id,
        "influencer_id": ivy.influencer_id().unwrap(),
        "title": "Sneaky",
    }))
    .unwrap();
    let err = TaskService::create(&ctx, &acme, data).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
}

#[tokio::test]
async fn test_milestone_percentage_is_fixed_at_creation() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let ivy = influencer(&ctx, "ivy", 500).await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;

    let milestone = MilestoneService::create(
        &ctx,
        &brand,
        NewMilestone {
            campaign_id: campaign.id,
            influencer_id: ivy.influencer_id().unwrap(),
            title: "First cut".into(),
            description: None,
            amount: None,
            payout_percentage: Some(25.0),
            due_date: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(milestone.amount, 250.0);
    assert_eq!(milestone.status, MilestoneStatus::Pending);

    CampaignService::update(
        &ctx,
        &brand,
        campaign.id,
        CampaignPatch {
            budget: Some(4000.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let milestones = MilestoneService::list(&ctx, &brand, campaign.id).await.unwrap();
    assert_eq!(milestones[0].amount, 250.0);

    let both = NewMilestone {
        campaign_id: campaign.id,
        influencer_id: ivy.influencer_id().unwrap(),
        title: "Both".into(),
        description: None,
        amount: Some(10.0),
        payout_percentage: Some(10.0),
        due_date: None,
    };
    let err = MilestoneService::create(&ctx, &brand, both).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[tokio::test]
async fn test_milestone_lifecycle() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let ivy = influencer(&ctx, "ivy", 500).await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;
    let milestone = MilestoneService::create(
        &ctx,
        &brand,
        NewMilestone {
            campaign_id: campaign.id,
            influencer_id: ivy.influencer_id().unwrap(),
            title: "Delivery".into(),
            description: None,
            amount: Some(300.0),
            payout_percentage: None,
            due_date: None,
        },
    )
    .await
    .unwrap();

    let confirmation = MilestonePaymentConfirmation {
        confirmed: true,
        contract_address: None,
        transaction_hash: Some("0xabc".into()),
    };
    let err = MilestoneService::confirm_payment(&ctx, &brand, milestone.id, confirmation.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));

    MilestoneService::start(&ctx, &ivy, milestone.id).await.unwrap();
    let completed = MilestoneService::submit_proof(
        &ctx,
        &ivy,
        milestone.id,
        MilestoneProof {
            proof_urls: StringList(vec!["https://cdn.example.com/proof.png".into()]),
            proof_description: None,
            submission_notes: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(completed.status, MilestoneStatus::Completed);
    assert!(completed.completed_at.is_some());

    let approved = MilestoneService::review(
        &ctx,
        &brand,
        milestone.id,
        MilestoneReview {
            status: MilestoneStatus::Approved,
            rejection_reason: None,
            review_notes: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(approved.approved_by, Some(brand.user_id));

    let paid = MilestoneService::confirm_payment(&ctx, &brand, milestone.id, confirmation)
        .await
        .unwrap();
    assert_eq!(paid.payment_confirmed, PaymentConfirmation::Confirmed);
    assert_eq!(paid.payment_confirmed_by, Some(brand.user_id));
    assert_eq!(paid.transaction_hash.as_deref(), Some("0xabc"));
}

#[tokio::test]
async fn test_payment_graph() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;
    let payment = PaymentService::create(
        &ctx,
        &brand,
        NewPayment {
            campaign_id: campaign.id,
            amount: 99.999,
            currency: Some("eur".into()),
            payment_method: None,
            contract_address: None,
            transaction_hash: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.currency, "EUR");
    assert_eq!(payment.amount, 100.0);

    let change = |status| PaymentStatusChange {
        status,
        transaction_hash: None,
    };
    let err = PaymentService::transition(&ctx, &brand, payment.id, change(PaymentStatus::Released))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));

    PaymentService::transition(&ctx, &brand, payment.id, change(PaymentStatus::Escrowed))
        .await
        .unwrap();
    let released =
        PaymentService::transition(&ctx, &brand, payment.id, change(PaymentStatus::Released))
            .await
            .unwrap();
    assert!(released.paid_at.is_some());

    let err = PaymentService::transition(&ctx, &brand, payment.id, change(PaymentStatus::Refunded))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));
}

#[tokio::test]
async fn test_delete_campaign_cascades() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let ivy = influencer(&ctx, "ivy", 500).await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;
    let application = ApplicationService::apply(&ctx, &ivy, campaign.id, NewApplication::default())
        .await
        .unwrap();
    let task = task(&ctx, &brand, campaign.id, &ivy).await;
    let content = serde_json::from_value(json!({
        "task_id": task.id,
        "title": "Draft",
        "content_type": "image",
    }))
    .unwrap();
    ContentService::submit(&ctx, &ivy, content).await.unwrap();
    MilestoneService::create(
        &ctx,
        &brand,
        NewMilestone {
            campaign_id: campaign.id,
            influencer_id: ivy.influencer_id().unwrap(),
            title: "Delivery".into(),
            description: None,
            amount: Some(100.0),
            payout_percentage: None,
            due_date: None,
        },
    )
    .await
    .unwrap();

    let err = CampaignService::delete(&ctx, &ivy, campaign.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    CampaignService::delete(&ctx, &brand, campaign.id).await.unwrap();

    let db = ctx.db();
    assert!(CampaignRepository::find_by_id(campaign.id, db).await.unwrap().is_none());
    assert!(DealApplicationRepository::find_by_id(application.id, db)
        .await
        .unwrap()
        .is_none());
    let filter = TaskFilter {
        campaign_id: Some(campaign.id),
        ..Default::default()
    };
    assert!(TaskRepository::find_by_filter(filter, db).await.unwrap().is_empty());
    assert!(ContentRepository::find_by_task_id(task.id, db).await.unwrap().is_none());
    assert!(MilestoneRepository::find_by_campaign(campaign.id, None, db)
        .await
        .unwrap()
        .is_empty());
    assert!(PaymentRepository::find_by_campaign(campaign.id, db)
        .await
        .unwrap()
        .is_empty());
    let remaining = CampaignRepository::page(
        CampaignScope::All,
        None,
        Default::default(),
        db,
    )
    .await
    .unwrap();
    assert_eq!(remaining.total, 0);

    let err = CampaignService::get(&ctx, campaign.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_metrics_are_recorded_by_admins() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let admin = admin(&ctx).await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;

    let metrics = CampaignMetrics {
        impressions: Some(12_000),
        clicks: Some(340),
        conversions: Some(12),
        engagement_rate: Some(4.2),
    };
    let err = CampaignService::record_metrics(&ctx, &brand, campaign.id, metrics.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let negative = CampaignMetrics {
        clicks: Some(-1),
        ..Default::default()
    };
    let err = CampaignService::record_metrics(&ctx, &admin, campaign.id, negative)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    let negative_rate = CampaignMetrics {
        engagement_rate: Some(-0.5),
        ..Default::default()
    };
    let err = CampaignService::record_metrics(&ctx, &admin, campaign.id, negative_rate)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let stored = CampaignService::get(&ctx, campaign.id).await.unwrap();
    assert_eq!(stored.impressions, 0);

    let recorded = CampaignService::record_metrics(&ctx, &admin, campaign.id, metrics)
        .await
        .unwrap();
    assert_eq!(recorded.impressions, 12_000);
    assert_eq!(recorded.clicks, 340);
    assert_eq!(recorded.conversions, 12);
    assert_eq!(recorded.engagement_rate, 4.2);

    let partial = CampaignMetrics {
        clicks: Some(400),
        ..Default::default()
    };
    let updated = CampaignService::record_metrics(&ctx, &admin, campaign.id, partial)
        .await
        .unwrap();
    assert_eq!(updated.clicks, 400);
    assert_eq!(updated.impressions, 12_000);
}

#[tokio::test]
async fn test_delete_task_removes_its_content() {
    let ctx = setup().await;
    let acme = brand(&ctx, "acme").await;
    let globex = brand(&ctx, "globex").await;
    let ivy = influencer(&ctx, "ivy", 500).await;
    let campaign = campaign(&ctx, &acme, 1000.0).await;
    let task = task(&ctx, &acme, campaign.id, &ivy).await;
    let content = serde_json::from_value(json!({
        "task_id": task.id,
        "title": "Draft",
        "content_type": "image",
    }))
    .unwrap();
    let content = ContentService::submit(&ctx, &ivy, content).await.unwrap();

    let err = TaskService::delete(&ctx, &ivy, task.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
    let err = TaskService::delete(&ctx, &globex, task.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    TaskService::delete(&ctx, &acme, task.id).await.unwrap();

    let db = ctx.db();
    assert!(TaskRepository::find_by_id(task.id, db).await.unwrap().is_none());
    assert!(ContentRepository::find_by_id(content.id, db).await.unwrap().is_none());
    let err = TaskService::delete(&ctx, &acme, task.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}
