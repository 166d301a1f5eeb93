pub mod board;
pub mod column;
pub mod notification;
pub mod task_card;

pub use board::Board;
pub use column::Column;
pub use notification::Notification;
pub use task_card::TaskCard;
