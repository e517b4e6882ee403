use super::{ensure_campaign_owner, ensure_influencer_exists, load_campaign, load_task};
use crate::CoreContext;
use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    domain::prelude::{Actor, ActorKind, NewTask, TaskListParams, TaskPatch},
    entities::prelude::{TaskActiveModel, TaskModel},
    enums::status::TaskStatus,
};
use brandfluence_repository::{ContentRepository, TaskFilter, TaskRepository};
use chrono::Utc;
use sea_orm::{IntoActiveModel, Set, TransactionTrait};
use tracing::{info, instrument};

pub struct TaskService;

impl TaskService {
    #[instrument(name = "create-task", skip_all, fields(user_id = actor.user_id))]
    pub async fn create(ctx: &CoreContext, actor: &Actor, data: NewTask) -> DomainResult<TaskModel> {
        if !actor.is_admin() {
            actor.require_brand_profile()?;
        }
        if data.position < 0 {
            return Err(DomainError::invalid("position must not be negative"));
        }
        let actor = *actor;
        let task = ctx
            .db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let campaign = load_campaign(data.campaign_id, txn).await?;
                    ensure_campaign_owner(&actor, &campaign, true)?;
                    ensure_influencer_exists(data.influencer_id, txn).await?;

                    let mut am = data.into_active_model();
                    am.status = Set(TaskStatus::Todo);
                    Ok(TaskRepository::create(am, txn).await?)
                })
            })
            .await?;
        info!(task_id = task.id, campaign_id = task.campaign_id, "Task created");
        Ok(task)
    }

    /// Applies a board update.
    ///
    /// Assignees may only move the card (`status`, `position`) and cannot
    /// decide review outcomes. A brand status change stamps the reviewer.
    #[instrument(name = "update-task", skip_all, fields(user_id = actor.user_id, task_id = id))]
    pub async fn update(
        ctx: &CoreContext,
        actor: &Actor,
        id: i32,
        patch: TaskPatch,
    ) -> DomainResult<TaskModel> {
        if patch.position.is_some_and(|p| p < 0) {
            return Err(DomainError::invalid("position must not be negative"));
        }
        let actor = *actor;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let task = load_task(id, txn).await?;
                    match actor.kind {
                        ActorKind::Brand { .. } => {
                            let campaign = load_campaign(task.campaign_id, txn).await?;
                            ensure_campaign_owner(&actor, &campaign, false)?;
                        }
                        ActorKind::Influencer { .. } => {
                            if actor.require_influencer_profile()? != task.influencer_id {
                                return Err(DomainError::forbidden(
                                    "task is assigned to another influencer",
                                ));
                            }
                            let extra = patch.non_board_fields();
                            if !extra.is_empty() {
                                return Err(DomainError::forbidden(format!(
                                    "assignee may not change {}",
                                    extra.join(", ")
                                )));
                            }
                            if patch.status.is_some_and(|s| s.is_review_outcome()) {
                                return Err(DomainError::forbidden(
                                    "only the brand decides review outcomes",
                                ));
                            }
                        }
                        ActorKind::Admin => {}
                    }

                    let now = Utc::now();
                    let status = patch.status;
                    let mut am: TaskActiveModel = task.into();
                    if let Some(status) = status {
                        am.status = Set(status);
                        if status == TaskStatus::InReview {
                            am.submitted_at = Set(Some(now));
                        }
                        if matches!(actor.kind, ActorKind::Brand { .. }) {
                            am.reviewer_id = Set(Some(actor.user_id));
                            am.reviewed_at = Set(Some(now));
                        }
                    }
                    patch.apply_to(&mut am);
                    Ok(TaskRepository::update(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }

    /// Board listing narrowed to what the caller may see.
    pub async fn list(
        ctx: &CoreContext,
        actor: &Actor,
        params: &TaskListParams,
    ) -> DomainResult<Vec<TaskModel>> {
        let mut filter = TaskFilter {
            campaign_id: params.campaign_id,
            status: params.status,
            ..Default::default()
        };
        match actor.kind {
            ActorKind::Brand { brand_id: None } | ActorKind::Influencer { influencer_id: None } => {
                return Ok(Vec::new())
            }
            ActorKind::Brand { brand_id } => filter.brand_id = brand_id,
            ActorKind::Influencer { influencer_id } => filter.influencer_id = influencer_id,
            ActorKind::Admin => {}
        }
        Ok(TaskRepository::find_by_filter(filter, ctx.db()).await?)
    }

    pub async fn get(ctx: &CoreContext, actor: &Actor, id: i32) -> DomainResult<TaskModel> {
        let task = load_task(id, ctx.db()).await?;
        match actor.kind {
            ActorKind::Admin => {}
            ActorKind::Influencer { influencer_id } => {
                if influencer_id != Some(task.influencer_id) {
                    return Err(DomainError::forbidden("task is assigned to another influencer"));
                }
            }
            ActorKind::Brand { .. } => {
                let campaign = load_campaign(task.campaign_id, ctx.db()).await?;
                ensure_campaign_owner(actor, &campaign, false)?;
            }
        }
        Ok(task)
    }

    /// Removes a task and its content.
    #[instrument(name = "delete-task", skip_all, fields(user_id = actor.user_id, task_id = id))]
    pub async fn delete(ctx: &CoreContext, actor: &Actor, id: i32) -> DomainResult<()> {
        let actor = *actor;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let task = load_task(id, txn).await?;
                    let campaign = load_campaign(task.campaign_id, txn).await?;
                    ensure_campaign_owner(&actor, &campaign, true)?;
                    ContentRepository::delete_by_task(id, txn).await?;
                    TaskRepository::delete(id, txn).await?;
                    Ok(())
                })
            })
            .await
            .map_err(DomainError::from)
    }
}
