//! DTOs mirrored from the backend.
//!
//! The client owns none of these entities: every type here is a read copy of
//! backend state, `Serialize + Deserialize` so it can cross the server/client
//! boundary via server functions. Ids and timestamps stay `String` so the
//! same types work in WASM.

mod catalog;
mod ingredient;
mod nutrition;
mod order;
mod user;

pub use catalog::{BowlTemplate, Category, Promotion, StoreLocation, TemplateStep};
pub use ingredient::Ingredient;
pub use nutrition::{GoalCode, NutritionFacts, NutritionGoal, NutritionPercent, NutritionTotals};
pub use order::{BowlItem, NewBowl, NewOrder, Order, OrderBowl, OrderStatus};
pub use user::{AuthSession, Role, User, UserStatus};
