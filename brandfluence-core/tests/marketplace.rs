mod common;

use async_trait::async_trait;
use brandfluence_core::{service::*, Notifier};
use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    domain::prelude::{
        ApplicationReview, BrandListParams, ContentPatch, MilestonePaymentConfirmation,
        MilestoneProof, MilestoneReview, NewApplication, NewBrand, NewContent, NewMessage,
        NewMilestone, Notice, NotificationListParams, PageParams,
    },
    entities::prelude::StringList,
    enums::{
        common::{ContentType, NotificationType, PaymentConfirmation, UserRole},
        status::{ApplicationStatus, CampaignStatus, ContentStatus, MilestoneStatus, TaskStatus},
    },
};
use brandfluence_repository::MilestoneRepository;
use common::*;
use serde_json::json;
use std::sync::Arc;

fn approve() -> ApplicationReview {
    ApplicationReview {
        status: ApplicationStatus::Approved,
        rejection_reason: None,
        notes: None,
    }
}

fn content_for(task_id: i32) -> NewContent {
    serde_json::from_value(json!({
        "task_id": task_id,
        "title": "Reel cut",
        "content_type": "video",
        "file_url": "https://cdn.example.com/reel.mp4",
    }))
    .unwrap()
}

#[tokio::test]
async fn test_campaign_to_reviewed_content() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let influencer = influencer(&ctx, "ivy", 500).await;

    let campaign = campaign(&ctx, &brand, 1000.0).await;
    assert_eq!(campaign.status, CampaignStatus::Draft);
    assert_eq!(campaign.application_count, 0);

    let application =
        ApplicationService::apply(&ctx, &influencer, campaign.id, NewApplication::default())
            .await
            .unwrap();
    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.follower_count_at_application, 500);

    let application = ApplicationService::review(&ctx, &brand, application.id, approve())
        .await
        .unwrap();
    assert_eq!(application.status, ApplicationStatus::Approved);
    assert_eq!(application.reviewed_by, Some(brand.user_id));

    let campaign = CampaignService::get(&ctx, campaign.id).await.unwrap();
    assert_eq!(campaign.influencer_id, influencer.influencer_id());
    assert_eq!(campaign.application_count, 1);
    assert_eq!(campaign.view_count, 1);

    let task = task(&ctx, &brand, campaign.id, &influencer).await;
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.position, 0);

    let content = ContentService::submit(&ctx, &influencer, content_for(task.id))
        .await
        .unwrap();
    assert_eq!(content.status, ContentStatus::Draft);
    assert_eq!(content.content_type, ContentType::Video);

    let again = ContentService::submit(&ctx, &influencer, content_for(task.id)).await;
    assert!(matches!(again, Err(DomainError::Conflict(_))));

    let reviewed = ContentService::update(
        &ctx,
        &brand,
        content.id,
        ContentPatch {
            status: Some(ContentStatus::Approved),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(reviewed.status, ContentStatus::Approved);
    assert_eq!(reviewed.reviewer_id, Some(brand.user_id));
    assert!(reviewed.reviewed_at.is_some());
}

#[tokio::test]
async fn test_application_guards() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let influencer = influencer(&ctx, "ivy", 500).await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;

    // fixed-budget campaigns take no quotes
    let quoted = NewApplication {
        quoted_amount: Some(900.0),
        ..Default::default()
    };
    let err = ApplicationService::apply(&ctx, &influencer, campaign.id, quoted)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    ApplicationService::apply(&ctx, &influencer, campaign.id, NewApplication::default())
        .await
        .unwrap();
    let err = ApplicationService::apply(&ctx, &influencer, campaign.id, NewApplication::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    let err = ApplicationService::apply(&ctx, &brand, campaign.id, NewApplication::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let other_brand = common::brand(&ctx, "globex").await;
    let mine = ApplicationService::list_own(&ctx, &influencer).await.unwrap();
    let err = ApplicationService::review(&ctx, &other_brand, mine[0].id, approve())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
}

#[tokio::test]
async fn test_snapshot_survives_profile_change() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let influencer = influencer(&ctx, "ivy", 500).await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;
    ApplicationService::apply(&ctx, &influencer, campaign.id, NewApplication::default())
        .await
        .unwrap();

    let patch = serde_json::from_value(json!({ "total_followers": 9000 })).unwrap();
    InfluencerService::update_own(&ctx, &influencer, patch)
        .await
        .unwrap();

    let applications = ApplicationService::list_for_campaign(&ctx, &brand, campaign.id)
        .await
        .unwrap();
    assert_eq!(applications[0].follower_count_at_application, 500);
}

#[tokio::test]
async fn test_withdraw_then_review_is_rejected() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let influencer = influencer(&ctx, "ivy", 500).await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;
    let application =
        ApplicationService::apply(&ctx, &influencer, campaign.id, NewApplication::default())
            .await
            .unwrap();

    let withdrawn = ApplicationService::withdraw(&ctx, &influencer, application.id)
        .await
        .unwrap();
    assert_eq!(withdrawn.status, ApplicationStatus::Withdrawn);

    let err = ApplicationService::review(&ctx, &brand, application.id, approve())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));
}

#[tokio::test]
async fn test_notifications_follow_application_events() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let influencer = influencer(&ctx, "ivy", 500).await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;
    let application =
        ApplicationService::apply(&ctx, &influencer, campaign.id, NewApplication::default())
            .await
            .unwrap();
    ApplicationService::review(&ctx, &brand, application.id, approve())
        .await
        .unwrap();

    let params = NotificationListParams {
        unread_only: true,
        page: PageParams::default(),
    };
    let brand_inbox = NotificationService::list(&ctx, &brand, &params).await.unwrap();
    assert_eq!(brand_inbox.total, 1);
    let notice = &brand_inbox.records[0];
    assert_eq!(notice.notification_type, NotificationType::NewApplication);
    assert_eq!(notice.related_campaign_id, Some(campaign.id));
    assert_eq!(notice.related_application_id, Some(application.id));

    let influencer_inbox = NotificationService::list(&ctx, &influencer, &params)
        .await
        .unwrap();
    assert_eq!(
        influencer_inbox.records[0].notification_type,
        NotificationType::ApplicationApproved
    );

    // only the owner may mark it read
    let err = NotificationService::mark_read(&ctx, &influencer, notice.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
    let read = NotificationService::mark_read(&ctx, &brand, notice.id)
        .await
        .unwrap();
    assert!(read.is_read && read.read_at.is_some());
    assert_eq!(
        NotificationService::mark_all_read(&ctx, &influencer)
            .await
            .unwrap(),
        1
    );
    let unread = NotificationService::list(&ctx, &influencer, &params)
        .await
        .unwrap();
    assert_eq!(unread.total, 0);
}

struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _notice: Notice) -> DomainResult<()> {
        Err(DomainError::invalid("delivery channel down"))
    }
}

#[tokio::test]
async fn test_notification_failure_keeps_mutation() {
    let ctx = setup_with_notifier(Arc::new(FailingNotifier)).await;
    let brand = brand(&ctx, "acme").await;
    let influencer = influencer(&ctx, "ivy", 500).await;
    let campaign = campaign(&ctx, &brand, 1000.0).await;

    let application =
        ApplicationService::apply(&ctx, &influencer, campaign.id, NewApplication::default())
            .await
            .unwrap();
    let stored = ApplicationService::list_own(&ctx, &influencer).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, application.id);
}

#[tokio::test]
async fn test_content_edits_follow_roles() {
    let ctx = setup().await;
    let acme = brand(&ctx, "acme").await;
    let globex = brand(&ctx, "globex").await;
    let ivy = influencer(&ctx, "ivy", 500).await;
    let admin = admin(&ctx).await;
    let campaign = campaign(&ctx, &acme, 1000.0).await;
    let task = task(&ctx, &acme, campaign.id, &ivy).await;
    let content = ContentService::submit(&ctx, &ivy, content_for(task.id))
        .await
        .unwrap();

    let self_approve = ContentPatch {
        status: Some(ContentStatus::Approved),
        ..Default::default()
    };
    let err = ContentService::update(&ctx, &ivy, content.id, self_approve.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let self_notes = ContentPatch {
        review_notes: Some(Some("looks great".into())),
        ..Default::default()
    };
    let err = ContentService::update(&ctx, &ivy, content.id, self_notes)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let retitle = ContentPatch {
        title: Some("Brand cut".into()),
        ..Default::default()
    };
    let err = ContentService::update(&ctx, &acme, content.id, retitle)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let bare_notes = ContentPatch {
        review_notes: Some(Some("tighten the intro".into())),
        ..Default::default()
    };
    let err = ContentService::update(&ctx, &acme, content.id, bare_notes)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let err = ContentService::update(&ctx, &globex, content.id, self_approve.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    // the assignee still moves their own draft along
    let submitted = ContentService::update(
        &ctx,
        &ivy,
        content.id,
        ContentPatch {
            status: Some(ContentStatus::Submitted),
            post_url: Some(Some("https://instagram.com/p/abc".into())),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(submitted.status, ContentStatus::Submitted);
    assert_eq!(submitted.reviewer_id, None);

    let by_admin = ContentService::update(&ctx, &admin, content.id, self_approve)
        .await
        .unwrap();
    assert_eq!(by_admin.status, ContentStatus::Approved);
    assert_eq!(by_admin.reviewer_id, None);
    assert!(by_admin.reviewed_at.is_none());
}

#[tokio::test]
async fn test_milestones_from_template() {
    let ctx = setup().await;
    let brand = brand(&ctx, "acme").await;
    let ivy = influencer(&ctx, "ivy", 500).await;

    let mut data = new_campaign(1000.0);
    data.milestones_template = serde_json::from_value(json!([
        { "title": "Concept", "payout_percentage": 25 },
        { "title": "Final cut", "payout_percentage": 75 },
    ]))
    .unwrap();
    let templated = CampaignService::create(&ctx, &brand, data).await.unwrap();
    let bare = campaign(&ctx, &brand, 500.0).await;

    let err = MilestoneService::create_from_template(&ctx, &brand, templated.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    for campaign_id in [templated.id, bare.id] {
        let application =
            ApplicationService::apply(&ctx, &ivy, campaign_id, NewApplication::default())
                .await
                .unwrap();
        ApplicationService::review(&ctx, &brand, application.id, approve())
            .await
            .unwrap();
    }

    let err = MilestoneService::create_from_template(&ctx, &ivy, templated.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let created = MilestoneService::create_from_template(&ctx, &brand, templated.id)
        .await
        .unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(created[0].title, "Concept");
    assert_eq!(created[0].amount, 250.0);
    assert_eq!(created[0].payout_percentage, Some(25.0));
    assert_eq!(created[1].amount, 750.0);
    assert!(created
        .iter()
        .all(|m| m.influencer_id == ivy.influencer_id().unwrap()
            && m.status == MilestoneStatus::Pending));

    let err = MilestoneService::create_from_template(&ctx, &brand, bare.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    let none = MilestoneRepository::find_by_campaign(bare.id, None, ctx.db())
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_milestone_notices_follow_committed_changes() {
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
    let params = NotificationListParams {
        unread_only: false,
        page: PageParams::default(),
    };
    let approve_milestone = || MilestoneReview {
        status: MilestoneStatus::Approved,
        rejection_reason: None,
        review_notes: Some("on brief".into()),
    };
    let confirmation = MilestonePaymentConfirmation {
        confirmed: true,
        contract_address: None,
        transaction_hash: None,
    };

    // rejected attempts change nothing and notify no one
    let err = MilestoneService::review(&ctx, &brand, milestone.id, approve_milestone())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));
    let err = MilestoneService::confirm_payment(&ctx, &brand, milestone.id, confirmation.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));
    let unchanged = MilestoneRepository::find_by_id(milestone.id, ctx.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.status, MilestoneStatus::Pending);
    assert_eq!(unchanged.review_notes, None);
    assert_eq!(unchanged.payment_confirmed, PaymentConfirmation::Pending);
    let inbox = NotificationService::list(&ctx, &ivy, &params).await.unwrap();
    assert_eq!(inbox.total, 0);

    MilestoneService::start(&ctx, &ivy, milestone.id).await.unwrap();
    MilestoneService::submit_proof(
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
    MilestoneService::review(&ctx, &brand, milestone.id, approve_milestone())
        .await
        .unwrap();
    MilestoneService::confirm_payment(&ctx, &brand, milestone.id, confirmation)
        .await
        .unwrap();

    let inbox = NotificationService::list(&ctx, &ivy, &params).await.unwrap();
    let kinds: Vec<_> = inbox
        .records
        .iter()
        .map(|n| {
            assert_eq!(n.related_milestone_id, Some(milestone.id));
            assert_eq!(n.related_campaign_id, Some(campaign.id));
            n.notification_type
        })
        .collect();
    assert_eq!(kinds.len(), 2);
    assert!(kinds.contains(&NotificationType::MilestoneApproved));
    assert!(kinds.contains(&NotificationType::PaymentReceived));
}

#[tokio::test]
async fn test_message_rules() {
    let ctx = setup().await;
    let acme = brand(&ctx, "acme").await;
    let ivy = influencer(&ctx, "ivy", 500).await;
    let max = influencer(&ctx, "max", 800).await;
    let campaign = campaign(&ctx, &acme, 1000.0).await;
    let application = ApplicationService::apply(&ctx, &ivy, campaign.id, NewApplication::default())
        .await
        .unwrap();
    ApplicationService::review(&ctx, &acme, application.id, approve())
        .await
        .unwrap();

    let message = |recipient_id: Option<i32>, campaign_id: Option<i32>| NewMessage {
        recipient_id,
        campaign_id,
        subject: None,
        content: "Shoot on Friday?".into(),
        attachments: StringList::default(),
    };

    let err = MessageService::send(&ctx, &acme, message(None, None))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let err = MessageService::send(&ctx, &max, message(None, Some(campaign.id)))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
    let err = MessageService::send(&ctx, &acme, message(Some(9_999), None))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let thread = MessageService::send(&ctx, &ivy, message(None, Some(campaign.id)))
        .await
        .unwrap();
    assert!(thread.is_group_message);

    let direct = MessageService::send(&ctx, &acme, message(Some(ivy.user_id), Some(campaign.id)))
        .await
        .unwrap();
    assert!(!direct.is_group_message);
    assert!(!direct.is_read);

    let err = MessageService::mark_read(&ctx, &acme, direct.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
    let err = MessageService::mark_read(&ctx, &ivy, thread.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let read = MessageService::mark_read(&ctx, &ivy, direct.id).await.unwrap();
    assert!(read.is_read);
    let again = MessageService::mark_read(&ctx, &ivy, direct.id).await.unwrap();
    assert!(again.is_read);
}

#[tokio::test]
async fn test_brand_directory_filters() {
    let ctx = setup().await;
    brand(&ctx, "acme").await;
    let globex = register(&ctx, "globex", UserRole::Brand).await;
    let data: NewBrand = serde_json::from_value(json!({
        "company_name": "Globex",
        "industry": "Consumer Tech",
        "location": "Munich",
    }))
    .unwrap();
    BrandService::create(&ctx, &globex, data).await.unwrap();

    let list = |industry: Option<&str>, location: Option<&str>| BrandListParams {
        industry: industry.map(String::from),
        location: location.map(String::from),
        page: PageParams::default(),
    };

    let all = BrandService::list(&ctx, &list(None, None)).await.unwrap();
    assert_eq!(all.total, 2);

    let fashion = BrandService::list(&ctx, &list(Some("fash"), None)).await.unwrap();
    assert_eq!(fashion.total, 1);
    assert_eq!(fashion.records[0].company_name, "acme Inc");

    let munich = BrandService::list(&ctx, &list(None, Some("MUNICH"))).await.unwrap();
    assert_eq!(munich.total, 1);
    assert_eq!(munich.records[0].company_name, "Globex");

    let both = BrandService::list(&ctx, &list(Some("tech"), Some("berlin")))
        .await
        .unwrap();
    assert_eq!(both.total, 0);
}
