//! Small form and layout primitives shared by every screen.

mod button;
mod form;
mod modal;
mod pagination;
mod search_box;
mod stat_card;

pub use button::{Button, ButtonVariant};
pub use form::{Input, Label, Select};
pub use modal::{ConfirmDialog, ModalOverlay};
pub use pagination::{page_window, Pagination};
pub use search_box::SearchBox;
pub use stat_card::StatCard;
