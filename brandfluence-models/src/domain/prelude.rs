pub use crate::domain::{
    actor::{Actor, ActorKind},
    application::{ApplicationReview, NewApplication},
    auth::{Claims, LoginRequest, LoginResponse, RegisterRequest},
    brand::{BrandListParams, BrandPatch, NewBrand},
    campaign::{CampaignListParams, CampaignMetrics, CampaignPatch, NewCampaign},
    common::{PageParams, PageResult, PathId},
    content::{ContentPatch, ContentUpload, NewContent},
    influencer::{InfluencerListParams, InfluencerPatch, NewInfluencer},
    message::{MessageListParams, NewMessage},
    milestone::{
        CampaignScopeParams, MilestonePaymentConfirmation, MilestoneProof, MilestoneReview,
        NewMilestone,
    },
    notification::{Notice, NotificationListParams},
    payment::{NewPayment, PaymentStatusChange},
    task::{NewTask, TaskListParams, TaskPatch},
    user::{NewUser, UserInfo},
};
