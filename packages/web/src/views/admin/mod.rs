mod shell;
pub use shell::AdminShell;

mod dashboard;
pub use dashboard::AdminDashboard;

mod users;
pub use users::AdminUsers;

mod orders;
pub use orders::AdminOrders;

mod ingredients;
pub use ingredients::AdminIngredients;

mod categories;
pub use categories::AdminCategories;

mod promotions;
pub use promotions::AdminPromotions;

mod stores;
pub use stores::AdminStores;

mod templates;
pub use templates::AdminTemplates;

/// Rows per admin list page.
pub(crate) const PAGE_SIZE: u32 = 10;
