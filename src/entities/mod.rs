//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod client;
pub mod client_notification;
pub mod farming_tool;
pub mod irrigation_system;
pub mod material;
pub mod notification;
pub mod output_item;
pub mod plan;
pub mod plan_input;
pub mod plan_output;
pub mod plant;
pub mod prize;
pub mod support;
pub mod timeline_step;

// Re-export specific types to avoid conflicts
pub use client::{Column as ClientColumn, Entity as Client, Model as ClientModel};
pub use client_notification::{
    Column as ClientNotificationColumn, Entity as ClientNotification,
    Model as ClientNotificationModel,
};
pub use farming_tool::{
    Column as FarmingToolColumn, Entity as FarmingTool, Model as FarmingToolModel,
};
pub use irrigation_system::{
    Column as IrrigationSystemColumn, Entity as IrrigationSystem, Model as IrrigationSystemModel,
};
pub use material::{Column as MaterialColumn, Entity as Material, Model as MaterialModel};
pub use notification::{
    Column as NotificationColumn, Entity as Notification, Model as NotificationModel,
};
pub use output_item::{Column as OutputItemColumn, Entity as OutputItem, Model as OutputItemModel};
pub use plan::{Column as PlanColumn, Entity as Plan, Model as PlanModel};
pub use plan_input::{Column as PlanInputColumn, Entity as PlanInput, Model as PlanInputModel};
pub use plan_output::{Column as PlanOutputColumn, Entity as PlanOutput, Model as PlanOutputModel};
pub use plant::{Column as PlantColumn, Entity as Plant, Model as PlantModel};
pub use prize::{Column as PrizeColumn, Entity as Prize, Model as PrizeModel};
pub use support::{Column as SupportColumn, Entity as Support, Model as SupportModel};
pub use timeline_step::{
    Column as TimelineStepColumn, Entity as TimelineStep, Model as TimelineStepModel,
};
