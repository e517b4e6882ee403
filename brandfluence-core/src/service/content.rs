use super::{ensure_campaign_owner, load_campaign, load_task};
use crate::CoreContext;
use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    domain::prelude::{Actor, ActorKind, ContentPatch, NewContent},
    entities::prelude::{ContentActiveModel, ContentModel, TaskModel},
    enums::status::ContentStatus,
};
use brandfluence_repository::ContentRepository;
use chrono::Utc;
use sea_orm::{ConnectionTrait, IntoActiveModel, Set, TransactionTrait};
use tracing::{info, instrument};

pub struct ContentService;

impl ContentService {
    /// Submits the deliverable for a task; one per task.
    #[instrument(name = "submit-content", skip_all, fields(user_id = actor.user_id, task_id = data.task_id))]
    pub async fn submit(
        ctx: &CoreContext,
        actor: &Actor,
        data: NewContent,
    ) -> DomainResult<ContentModel> {
        let influencer_id = actor.require_influencer_profile()?;
        let content = ctx
            .db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let task = load_task(data.task_id, txn).await?;
                    if task.influencer_id != influencer_id {
                        return Err(DomainError::forbidden(
                            "task is assigned to another influencer",
                        ));
                    }
                    if ContentRepository::find_by_task_id(task.id, txn)
                        .await?
                        .is_some()
                    {
                        return Err(DomainError::conflict(
                            "content already submitted for this task",
                        ));
                    }
                    let mut am = data.into_active_model();
                    am.status = Set(ContentStatus::Draft);
                    Ok(ContentRepository::create(am, txn).await?)
                })
            })
            .await?;
        info!(content_id = content.id, "Content submitted");
        Ok(content)
    }

    /// Edits content according to who is acting.
    ///
    /// * influencer (assignee): artifact fields and draft/submitted/published
    /// * brand (campaign owner): `status` plus optional `review_notes`; the
    ///   change stamps `reviewer_id` and `reviewed_at`
    /// * admin: artifact fields and status, without reviewer stamps
    #[instrument(name = "update-content", skip_all, fields(user_id = actor.user_id, content_id = id))]
    pub async fn update(
        ctx: &CoreContext,
        actor: &Actor,
        id: i32,
        patch: ContentPatch,
    ) -> DomainResult<ContentModel> {
        let actor = *actor;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let content = load(id, txn).await?;
                    let task = load_task(content.task_id, txn).await?;
                    let stamp_reviewer = match actor.kind {
                        ActorKind::Influencer { .. } => {
                            ensure_assignee(&actor, &task)?;
                            if patch.review_notes.is_some() {
                                return Err(DomainError::forbidden(
                                    "review notes are written by the brand",
                                ));
                            }
                            if patch.status.is_some_and(|s| s.is_review_outcome()) {
                                return Err(DomainError::forbidden(
                                    "only the brand decides review outcomes",
                                ));
                            }
                            false
                        }
                        ActorKind::Brand { .. } => {
                            let campaign = load_campaign(task.campaign_id, txn).await?;
                            ensure_campaign_owner(&actor, &campaign, false)?;
                            if patch.has_artifact_changes() {
                                return Err(DomainError::forbidden(
                                    "brand may only change status and review notes",
                                ));
                            }
                            if patch.review_notes.is_some() && patch.status.is_none() {
                                return Err(DomainError::invalid(
                                    "review_notes require a status change",
                                ));
                            }
                            patch.status.is_some()
                        }
                        ActorKind::Admin => {
                            if patch.review_notes.is_some() {
                                return Err(DomainError::forbidden(
                                    "review notes are written by the brand",
                                ));
                            }
                            false
                        }
                    };

                    let status = patch.status;
                    let mut am: ContentActiveModel = content.into();
                    if let Some(status) = status {
                        am.status = Set(status);
                    }
                    if stamp_reviewer {
                        am.reviewer_id = Set(Some(actor.user_id));
                        am.reviewed_at = Set(Some(Utc::now()));
                    }
                    patch.apply_to(&mut am);
                    Ok(ContentRepository::update(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }

    pub async fn get(ctx: &CoreContext, actor: &Actor, id: i32) -> DomainResult<ContentModel> {
        let content = load(id, ctx.db()).await?;
        let task = load_task(content.task_id, ctx.db()).await?;
        ensure_task_party(actor, &task, ctx.db()).await?;
        Ok(content)
    }

    pub async fn get_by_task(
        ctx: &CoreContext,
        actor: &Actor,
        task_id: i32,
    ) -> DomainResult<ContentModel> {
        let task = load_task(task_id, ctx.db()).await?;
        ensure_task_party(actor, &task, ctx.db()).await?;
        ContentRepository::find_by_task_id(task_id, ctx.db())
            .await?
            .ok_or_else(|| DomainError::not_found("content"))
    }

    /// Assignee influencer or admin.
    #[instrument(name = "delete-content", skip_all, fields(user_id = actor.user_id, content_id = id))]
    pub async fn delete(ctx: &CoreContext, actor: &Actor, id: i32) -> DomainResult<()> {
        let actor = *actor;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let content = load(id, txn).await?;
                    if !actor.is_admin() {
                        let task = load_task(content.task_id, txn).await?;
                        ensure_assignee(&actor, &task)?;
                    }
                    Ok(ContentRepository::delete(id, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }
}

async fn load<C>(id: i32, db: &C) -> DomainResult<ContentModel>
where
    C: ConnectionTrait,
{
    ContentRepository::find_by_id(id, db)
        .await?
        .ok_or_else(|| DomainError::not_found("content"))
}

fn ensure_assignee(actor: &Actor, task: &TaskModel) -> DomainResult<()> {
    if actor.require_influencer_profile()? == task.influencer_id {
        Ok(())
    } else {
        Err(DomainError::forbidden("task is assigned to another influencer"))
    }
}

/// Assignee, owning brand or admin
async fn ensure_task_party<C>(actor: &Actor, task: &TaskModel, db: &C) -> DomainResult<()>
where
    C: ConnectionTrait,
{
    match actor.kind {
        ActorKind::Admin => Ok(()),
        ActorKind::Influencer { .. } => ensure_assignee(actor, task),
        ActorKind::Brand { .. } => {
            let campaign = load_campaign(task.campaign_id, db).await?;
            ensure_campaign_owner(actor, &campaign, false)
        }
    }
}
