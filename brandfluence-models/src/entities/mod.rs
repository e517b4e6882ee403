pub mod brand;
pub mod campaign;
pub mod content;
pub mod deal_application;
pub mod influencer;
pub mod json;
pub mod message;
pub mod milestone;
pub mod notification;
pub mod payment;
pub mod task;
pub mod user;

pub mod prelude {
    pub use super::brand::{
        ActiveModel as BrandActiveModel, Column as BrandColumn, Entity as Brand,
        Model as BrandModel,
    };
    pub use super::campaign::{
        ActiveModel as CampaignActiveModel, Column as CampaignColumn, Entity as Campaign,
        Model as CampaignModel,
    };
    pub use super::content::{
        ActiveModel as ContentActiveModel, Column as ContentColumn, Entity as Content,
        Model as ContentModel,
    };
    pub use super::deal_application::{
        ActiveModel as DealApplicationActiveModel, Column as DealApplicationColumn,
        Entity as DealApplication, Model as DealApplicationModel,
    };
    pub use super::influencer::{
        ActiveModel as InfluencerActiveModel, Column as InfluencerColumn, Entity as Influencer,
        Model as InfluencerModel,
    };
    pub use super::json::{MilestoneTemplate, MilestoneTemplates, StringList};
    pub use super::message::{
        ActiveModel as MessageActiveModel, Column as MessageColumn, Entity as Message,
        Model as MessageModel,
    };
    pub use super::milestone::{
        ActiveModel as MilestoneActiveModel, Column as MilestoneColumn, Entity as Milestone,
        Model as MilestoneModel,
    };
    pub use super::notification::{
        ActiveModel as NotificationActiveModel, Column as NotificationColumn,
        Entity as Notification, Model as NotificationModel,
    };
    pub use super::payment::{
        ActiveModel as PaymentActiveModel, Column as PaymentColumn, Entity as Payment,
        Model as PaymentModel,
    };
    pub use super::task::{
        ActiveModel as TaskActiveModel, Column as TaskColumn, Entity as Task,
        Model as TaskModel,
    };
    pub use super::user::{
        ActiveModel as UserActiveModel, Column as UserColumn, Entity as User,
        Model as UserModel,
    };
}
